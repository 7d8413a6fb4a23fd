//! Batch consume/restore routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};
use uuid::Uuid;

use crate::routes::products::batch_json;
use crate::{AppState, response};
use comercio_db::repositories::batch::{BatchError, BatchRepository};
use rust_decimal::Decimal;

/// Creates the batch routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/batches/{batch_id}", get(get_batch))
        .route("/batches/{batch_id}/consume", post(consume))
        .route("/batches/{batch_id}/restore", post(restore))
}

/// Request body for consume/restore operations.
#[derive(Debug, Deserialize)]
pub struct QuantityRequest {
    /// Quantity to consume or restore.
    pub quantity: Decimal,
}

pub(crate) fn batch_error(err: &BatchError, context: &str) -> Response {
    match err {
        BatchError::Inventory(e) => {
            response::fail(e.http_status_code(), e.error_code(), e.to_string())
        }
        BatchError::NotBatchManaged(_) => {
            response::fail(400, "PRODUCT_NOT_BATCH_MANAGED", err.to_string())
        }
        BatchError::Database(e) => {
            error!(error = %e, "{context}");
            response::internal_error()
        }
    }
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// GET `/batches/{batch_id}` - Get a batch with its derived status.
async fn get_batch(
    State(state): State<AppState>,
    Path(batch_id): Path<Uuid>,
) -> impl IntoResponse {
    let repo = BatchRepository::new((*state.db).clone());

    match repo.find_batch(batch_id, today()).await {
        Ok(Some(batch)) => response::ok(batch_json(&batch)),
        Ok(None) => response::not_found("Batch"),
        Err(e) => batch_error(&e, "Failed to get batch"),
    }
}

/// POST `/batches/{batch_id}/consume` - Consume stock from a batch.
async fn consume(
    State(state): State<AppState>,
    Path(batch_id): Path<Uuid>,
    Json(payload): Json<QuantityRequest>,
) -> impl IntoResponse {
    let repo = BatchRepository::new((*state.db).clone());

    match repo.consume(batch_id, payload.quantity, today()).await {
        Ok(batch) => {
            info!(
                batch_id = %batch_id,
                quantity = %payload.quantity,
                current_stock = %batch.batch.current_stock,
                status = ?batch.status,
                "Batch stock consumed"
            );
            response::ok(batch_json(&batch))
        }
        Err(e) => batch_error(&e, "Failed to consume batch stock"),
    }
}

/// POST `/batches/{batch_id}/restore` - Restore stock onto a batch.
async fn restore(
    State(state): State<AppState>,
    Path(batch_id): Path<Uuid>,
    Json(payload): Json<QuantityRequest>,
) -> impl IntoResponse {
    let repo = BatchRepository::new((*state.db).clone());

    match repo.restore(batch_id, payload.quantity, today()).await {
        Ok(batch) => {
            info!(
                batch_id = %batch_id,
                quantity = %payload.quantity,
                current_stock = %batch.batch.current_stock,
                status = ?batch.status,
                "Batch stock restored"
            );
            response::ok(batch_json(&batch))
        }
        Err(e) => batch_error(&e, "Failed to restore batch stock"),
    }
}
