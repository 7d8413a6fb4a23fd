//! Product catalog, scalar stock, and batch listing routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};
use uuid::Uuid;

use crate::{AppState, response};
use comercio_db::repositories::batch::{BatchRepository, BatchWithStatus, CreateBatchInput};
use comercio_db::repositories::product::{
    CreateProductInput, ProductError, ProductRepository,
};
use rust_decimal::Decimal;

use super::batches::batch_error;

/// Creates the product routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products))
        .route("/products", post(create_product))
        .route("/products/{product_id}", get(get_product))
        .route("/products/{product_id}/adjust-stock", post(adjust_stock))
        .route("/products/{product_id}/batches", get(list_batches))
        .route("/products/{product_id}/batches", post(create_batch))
}

/// Query parameters for listing products.
#[derive(Debug, Deserialize)]
pub struct ListProductsQuery {
    /// Only list active products (default: true).
    pub active: Option<bool>,
}

/// Request body for creating a product.
#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    /// Display name.
    pub name: String,
    /// Stock-keeping unit code.
    pub sku: Option<String>,
    /// Unit of measure.
    pub unit: String,
    /// Opening stock (ignored when `manages_batches` is set).
    #[serde(default)]
    pub stock: Decimal,
    /// Low-stock threshold.
    #[serde(default)]
    pub min_stock: Decimal,
    /// Unit cost.
    #[serde(default)]
    pub cost: Decimal,
    /// Sale price.
    #[serde(default)]
    pub price: Decimal,
    /// Whether stock is derived from batches.
    #[serde(default)]
    pub manages_batches: bool,
}

/// Request body for adjusting scalar stock.
#[derive(Debug, Deserialize)]
pub struct AdjustStockRequest {
    /// Signed stock delta.
    pub delta: Decimal,
    /// Reason code for the adjustment.
    pub reason: String,
}

/// Query parameters for listing a product's batches.
#[derive(Debug, Deserialize)]
pub struct ListBatchesQuery {
    /// Only list batches whose derived status is activo.
    pub active: Option<bool>,
}

/// Request body for creating a batch.
#[derive(Debug, Deserialize)]
pub struct CreateBatchRequest {
    /// Human lot number.
    pub batch_number: String,
    /// Unit of measure.
    pub unit: String,
    /// Opening stock of the lot.
    pub initial_stock: Decimal,
    /// Production date.
    pub production_date: NaiveDate,
    /// Expiration date.
    pub expiration_date: NaiveDate,
    /// Unit cost of this lot.
    #[serde(default)]
    pub cost: Decimal,
}

fn product_error(err: &ProductError, context: &str) -> Response {
    match err {
        ProductError::Inventory(e) => {
            response::fail(e.http_status_code(), e.error_code(), e.to_string())
        }
        ProductError::Database(e) => {
            error!(error = %e, "{context}");
            response::internal_error()
        }
    }
}

pub(crate) fn batch_json(b: &BatchWithStatus) -> serde_json::Value {
    json!({ "batch": b.batch, "status": b.status })
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// GET `/products` - List products.
async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ListProductsQuery>,
) -> impl IntoResponse {
    let repo = ProductRepository::new((*state.db).clone());

    match repo.list_products(query.active.unwrap_or(true)).await {
        Ok(products) => response::ok(json!({ "products": products })),
        Err(e) => product_error(&e, "Failed to list products"),
    }
}

/// POST `/products` - Create a product.
async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<CreateProductRequest>,
) -> impl IntoResponse {
    let repo = ProductRepository::new((*state.db).clone());

    let input = CreateProductInput {
        name: payload.name,
        sku: payload.sku,
        unit: payload.unit,
        stock: payload.stock,
        min_stock: payload.min_stock,
        cost: payload.cost,
        price: payload.price,
        manages_batches: payload.manages_batches,
    };

    match repo.create_product(input).await {
        Ok(product) => {
            info!(product_id = %product.id, name = %product.name, "Product created");
            response::created(json!({ "product": product }))
        }
        Err(e) => product_error(&e, "Failed to create product"),
    }
}

/// GET `/products/{product_id}` - Get product detail.
async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<Uuid>,
) -> impl IntoResponse {
    let repo = ProductRepository::new((*state.db).clone());

    match repo.find_product(product_id).await {
        Ok(Some(product)) => response::ok(json!({ "product": product })),
        Ok(None) => response::not_found("Product"),
        Err(e) => product_error(&e, "Failed to get product"),
    }
}

/// POST `/products/{product_id}/adjust-stock` - Adjust scalar stock.
///
/// Rejected for batch-managed products; those mutate stock through a
/// specific batch.
async fn adjust_stock(
    State(state): State<AppState>,
    Path(product_id): Path<Uuid>,
    Json(payload): Json<AdjustStockRequest>,
) -> impl IntoResponse {
    let repo = ProductRepository::new((*state.db).clone());

    match repo
        .adjust_stock(product_id, payload.delta, &payload.reason)
        .await
    {
        Ok(product) => response::ok(json!({ "product": product })),
        Err(e) => product_error(&e, "Failed to adjust product stock"),
    }
}

/// GET `/products/{product_id}/batches` - List a product's batches ordered
/// by expiration date ascending.
///
/// With `?active=true`, only batches whose derived status is activo are
/// returned; this ordering is what a FIFO-consuming caller relies on.
async fn list_batches(
    State(state): State<AppState>,
    Path(product_id): Path<Uuid>,
    Query(query): Query<ListBatchesQuery>,
) -> impl IntoResponse {
    let repo = BatchRepository::new((*state.db).clone());

    match repo
        .list_batches(product_id, query.active.unwrap_or(false), today())
        .await
    {
        Ok(batches) => {
            let batches: Vec<serde_json::Value> = batches.iter().map(batch_json).collect();
            response::ok(json!({ "batches": batches }))
        }
        Err(e) => batch_error(&e, "Failed to list batches"),
    }
}

/// POST `/products/{product_id}/batches` - Create a batch.
async fn create_batch(
    State(state): State<AppState>,
    Path(product_id): Path<Uuid>,
    Json(payload): Json<CreateBatchRequest>,
) -> impl IntoResponse {
    let repo = BatchRepository::new((*state.db).clone());

    let input = CreateBatchInput {
        batch_number: payload.batch_number,
        unit: payload.unit,
        initial_stock: payload.initial_stock,
        production_date: payload.production_date,
        expiration_date: payload.expiration_date,
        cost: payload.cost,
    };

    match repo.create_batch(product_id, input, today()).await {
        Ok(batch) => {
            info!(
                product_id = %product_id,
                batch_id = %batch.batch.id,
                batch_number = %batch.batch.batch_number,
                "Batch created"
            );
            response::created(batch_json(&batch))
        }
        Err(e) => batch_error(&e, "Failed to create batch"),
    }
}
