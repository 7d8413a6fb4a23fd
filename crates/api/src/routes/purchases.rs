//! Purchase document and payment routes.

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

use crate::routes::sales::reconciliation_error;
use crate::{AppState, response};
use comercio_core::payments::DocumentKind;
use comercio_db::repositories::payment::{AddPaymentInput, PaymentRepository};
use comercio_db::repositories::purchase::{
    CreatePurchaseInput, PurchaseError, PurchaseRepository,
};
use rust_decimal::Decimal;

/// Creates the purchase routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/purchases", get(list_purchases))
        .route("/purchases", post(create_purchase))
        .route("/purchases/{purchase_id}", get(get_purchase))
        .route("/purchases/{purchase_id}/payments", get(list_payments))
        .route("/purchases/{purchase_id}/payments", post(add_payment))
        .route(
            "/purchases/{purchase_id}/payments/{payment_id}",
            delete(delete_payment),
        )
}

/// Request body for creating a purchase.
#[derive(Debug, Deserialize)]
pub struct CreatePurchaseRequest {
    /// Human document number.
    pub folio: String,
    /// Supplier the purchase was made from.
    pub supplier_name: String,
    /// Total amount, fixed at creation.
    pub total: Decimal,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Who created the purchase.
    pub created_by: Option<String>,
}

/// Request body for adding a payment.
#[derive(Debug, Deserialize)]
pub struct AddPaymentRequest {
    /// Payment amount.
    pub amount: Decimal,
    /// Payment method (efectivo, tarjeta, transferencia, ...).
    pub payment_method: String,
    /// Ledger account the disbursement leaves from, if any.
    pub account_id: Option<Uuid>,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Who recorded the payment.
    pub created_by: Option<String>,
}

fn purchase_error(err: &PurchaseError, context: &str) -> Response {
    match err {
        PurchaseError::Payment(e) => {
            response::fail(e.http_status_code(), e.error_code(), e.to_string())
        }
        PurchaseError::Database(e) => {
            error!(error = %e, "{context}");
            response::internal_error()
        }
    }
}

/// GET `/purchases` - List purchases, newest first.
async fn list_purchases(State(state): State<AppState>) -> impl IntoResponse {
    let repo = PurchaseRepository::new((*state.db).clone());

    match repo.list_purchases().await {
        Ok(purchases) => response::ok(json!({ "purchases": purchases })),
        Err(e) => purchase_error(&e, "Failed to list purchases"),
    }
}

/// POST `/purchases` - Create a purchase with no payments yet.
async fn create_purchase(
    State(state): State<AppState>,
    Json(payload): Json<CreatePurchaseRequest>,
) -> impl IntoResponse {
    let repo = PurchaseRepository::new((*state.db).clone());

    let input = CreatePurchaseInput {
        folio: payload.folio,
        supplier_name: payload.supplier_name,
        total: payload.total,
        notes: payload.notes,
        created_by: payload.created_by.unwrap_or_else(|| "sistema".to_string()),
    };

    match repo.create_purchase(input).await {
        Ok(purchase) => {
            info!(
                purchase_id = %purchase.id,
                folio = %purchase.folio,
                total = %purchase.total,
                "Purchase created"
            );
            response::created(json!({ "purchase": purchase }))
        }
        Err(e) => purchase_error(&e, "Failed to create purchase"),
    }
}

/// GET `/purchases/{purchase_id}` - Get purchase detail.
async fn get_purchase(
    State(state): State<AppState>,
    Path(purchase_id): Path<Uuid>,
) -> impl IntoResponse {
    let repo = PurchaseRepository::new((*state.db).clone());

    match repo.find_purchase(purchase_id).await {
        Ok(Some(purchase)) => response::ok(json!({ "purchase": purchase })),
        Ok(None) => response::not_found("Purchase"),
        Err(e) => purchase_error(&e, "Failed to get purchase"),
    }
}

/// GET `/purchases/{purchase_id}/payments` - List payments, oldest first.
async fn list_payments(
    State(state): State<AppState>,
    Path(purchase_id): Path<Uuid>,
) -> impl IntoResponse {
    let repo = PaymentRepository::new((*state.db).clone());

    match repo.list_payments(DocumentKind::Purchase, purchase_id).await {
        Ok(payments) => response::ok(json!({ "payments": payments })),
        Err(e) => reconciliation_error(&e, "Failed to list purchase payments"),
    }
}

/// POST `/purchases/{purchase_id}/payments` - Add a payment.
///
/// A purchase payment is a disbursement: the linked ledger transaction, if
/// any, decreases the account balance.
async fn add_payment(
    State(state): State<AppState>,
    Path(purchase_id): Path<Uuid>,
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

    match repo
        .add_payment(DocumentKind::Purchase, purchase_id, input)
        .await
    {
        Ok(outcome) => {
            info!(
                purchase_id = %purchase_id,
                payment_id = %outcome.payment.id,
                amount = %outcome.payment.amount,
                status = ?outcome.document.payment_status,
                "Purchase payment added"
            );
            response::created(json!({
                "payment": outcome.payment,
                "purchase": outcome.document,
                "transaction": outcome.transaction,
            }))
        }
        Err(e) => reconciliation_error(&e, "Failed to add purchase payment"),
    }
}

/// DELETE `/purchases/{purchase_id}/payments/{payment_id}` - Delete a payment.
async fn delete_payment(
    State(state): State<AppState>,
    Path((purchase_id, payment_id)): Path<(Uuid, Uuid)>,
) -> impl IntoResponse {
    let repo = PaymentRepository::new((*state.db).clone());

    match repo
        .delete_payment(DocumentKind::Purchase, purchase_id, payment_id)
        .await
    {
        Ok(document) => {
            info!(
                purchase_id = %purchase_id,
                payment_id = %payment_id,
                status = ?document.payment_status,
                "Purchase payment deleted"
            );
            response::ok(json!({ "purchase": document }))
        }
        Err(e) => reconciliation_error(&e, "Failed to delete purchase payment"),
    }
}
