//! Sale document and payment routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};
use uuid::Uuid;

use crate::{AppState, response};
use comercio_core::payments::DocumentKind;
use comercio_db::repositories::payment::{
    AddPaymentInput, PaymentRepository, ReconciliationError,
};
use comercio_db::repositories::sale::{CreateSaleInput, SaleError, SaleRepository};
use rust_decimal::Decimal;

/// Creates the sale routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/sales", get(list_sales))
        .route("/sales", post(create_sale))
        .route("/sales/{sale_id}", get(get_sale))
        .route("/sales/{sale_id}/payments", get(list_payments))
        .route("/sales/{sale_id}/payments", post(add_payment))
        .route("/sales/{sale_id}/payments/{payment_id}", delete(delete_payment))
}

/// Request body for creating a sale.
#[derive(Debug, Deserialize)]
pub struct CreateSaleRequest {
    /// Human document number.
    pub folio: String,
    /// Client the sale was made to.
    pub client_name: String,
    /// Total amount, fixed at creation.
    pub total: Decimal,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Who created the sale.
    pub created_by: Option<String>,
}

/// Request body for adding a payment.
#[derive(Debug, Deserialize)]
pub struct AddPaymentRequest {
    /// Payment amount.
    pub amount: Decimal,
    /// Payment method (efectivo, tarjeta, transferencia, ...).
    pub payment_method: String,
    /// Ledger account the money moves through, if any.
    pub account_id: Option<Uuid>,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Who recorded the payment.
    pub created_by: Option<String>,
}

fn sale_error(err: &SaleError, context: &str) -> Response {
    match err {
        SaleError::Payment(e) => response::fail(e.http_status_code(), e.error_code(), e.to_string()),
        SaleError::Database(e) => {
            error!(error = %e, "{context}");
            response::internal_error()
        }
    }
}

pub(crate) fn reconciliation_error(err: &ReconciliationError, context: &str) -> Response {
    match err {
        ReconciliationError::Payment(e) => {
            response::fail(e.http_status_code(), e.error_code(), e.to_string())
        }
        ReconciliationError::Ledger(e) => {
            response::fail(e.http_status_code(), e.error_code(), e.to_string())
        }
        ReconciliationError::Database(e) => {
            error!(error = %e, "{context}");
            response::internal_error()
        }
    }
}

/// GET `/sales` - List sales, newest first.
async fn list_sales(State(state): State<AppState>) -> impl IntoResponse {
    let repo = SaleRepository::new((*state.db).clone());

    match repo.list_sales().await {
        Ok(sales) => response::ok(json!({ "sales": sales })),
        Err(e) => sale_error(&e, "Failed to list sales"),
    }
}

/// POST `/sales` - Create a sale with no payments yet.
async fn create_sale(
    State(state): State<AppState>,
    Json(payload): Json<CreateSaleRequest>,
) -> impl IntoResponse {
    let repo = SaleRepository::new((*state.db).clone());

    let input = CreateSaleInput {
        folio: payload.folio,
        client_name: payload.client_name,
        total: payload.total,
        notes: payload.notes,
        created_by: payload.created_by.unwrap_or_else(|| "sistema".to_string()),
    };

    match repo.create_sale(input).await {
        Ok(sale) => {
            info!(sale_id = %sale.id, folio = %sale.folio, total = %sale.total, "Sale created");
            response::created(json!({ "sale": sale }))
        }
        Err(e) => sale_error(&e, "Failed to create sale"),
    }
}

/// GET `/sales/{sale_id}` - Get sale detail.
async fn get_sale(
    State(state): State<AppState>,
    Path(sale_id): Path<Uuid>,
) -> impl IntoResponse {
    let repo = SaleRepository::new((*state.db).clone());

    match repo.find_sale(sale_id).await {
        Ok(Some(sale)) => response::ok(json!({ "sale": sale })),
        Ok(None) => response::not_found("Sale"),
        Err(e) => sale_error(&e, "Failed to get sale"),
    }
}

/// GET `/sales/{sale_id}/payments` - List payments, oldest first.
async fn list_payments(
    State(state): State<AppState>,
    Path(sale_id): Path<Uuid>,
) -> impl IntoResponse {
    let repo = PaymentRepository::new((*state.db).clone());

    match repo.list_payments(DocumentKind::Sale, sale_id).await {
        Ok(payments) => response::ok(json!({ "payments": payments })),
        Err(e) => reconciliation_error(&e, "Failed to list sale payments"),
    }
}

/// POST `/sales/{sale_id}/payments` - Add a payment.
///
/// Returns the payment, the sale with recomputed paid/remaining/status, and
/// the ledger transaction when an account was involved.
async fn add_payment(
    State(state): State<AppState>,
    Path(sale_id): Path<Uuid>,
    Json(payload): Json<AddPaymentRequest>,
) -> impl IntoResponse {
    let repo = PaymentRepository::new((*state.db).clone());

    let input = AddPaymentInput {
        amount: payload.amount,
        method: payload.payment_method,
        account_id: payload.account_id,
        notes: payload.notes,
        created_by: payload.created_by.unwrap_or_else(|| "sistema".to_string()),
    };

    match repo.add_payment(DocumentKind::Sale, sale_id, input).await {
        Ok(outcome) => {
            info!(
                sale_id = %sale_id,
                payment_id = %outcome.payment.id,
                amount = %outcome.payment.amount,
                status = ?outcome.document.payment_status,
                "Sale payment added"
            );
            response::created(json!({
                "payment": outcome.payment,
                "sale": outcome.document,
                "transaction": outcome.transaction,
            }))
        }
        Err(e) => reconciliation_error(&e, "Failed to add sale payment"),
    }
}

/// DELETE `/sales/{sale_id}/payments/{payment_id}` - Delete a payment.
///
/// The sale's derived fields are recomputed from the remaining payments and
/// the linked ledger transaction, if any, is reversed.
async fn delete_payment(
    State(state): State<AppState>,
    Path((sale_id, payment_id)): Path<(Uuid, Uuid)>,
) -> impl IntoResponse {
    let repo = PaymentRepository::new((*state.db).clone());

    match repo
        .delete_payment(DocumentKind::Sale, sale_id, payment_id)
        .await
    {
        Ok(document) => {
            info!(
                sale_id = %sale_id,
                payment_id = %payment_id,
                status = ?document.payment_status,
                "Sale payment deleted"
            );
            response::ok(json!({ "sale": document }))
        }
        Err(e) => reconciliation_error(&e, "Failed to delete sale payment"),
    }
}
