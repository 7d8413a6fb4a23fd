//! Account and ledger transaction routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};
use uuid::Uuid;

use crate::{AppState, response};
use comercio_core::ledger::{AccountKind, AdjustmentDirection, TransactionKind};
use comercio_db::repositories::account::{
    AccountError, AccountFilter, AccountRepository, CommitTransactionInput, CreateAccountInput,
    UpdateAccountInput,
};
use rust_decimal::Decimal;

/// Creates the account routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/accounts", get(list_accounts))
        .route("/accounts", post(create_account))
        .route("/accounts/{account_id}", get(get_account))
        .route("/accounts/{account_id}", put(update_account))
        .route("/accounts/{account_id}", delete(deactivate_account))
        .route("/accounts/{account_id}/summary", get(get_account_summary))
        .route("/accounts/{account_id}/transactions", get(list_transactions))
        .route("/accounts/{account_id}/transactions", post(create_transaction))
        .route(
            "/accounts/{account_id}/transactions/{transaction_id}",
            delete(reverse_transaction),
        )
}

/// Query parameters for listing accounts.
#[derive(Debug, Deserialize)]
pub struct ListAccountsQuery {
    /// Filter by account kind.
    pub kind: Option<AccountKind>,
    /// Filter by active status.
    pub active: Option<bool>,
}

/// Request body for creating an account.
#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    /// Display name.
    pub name: String,
    /// Account kind: bank, cash, or card.
    pub kind: AccountKind,
    /// External account number.
    pub account_number: Option<String>,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Opening balance.
    pub initial_balance: Decimal,
    /// Date of the opening balance.
    pub initial_balance_date: NaiveDate,
}

/// Request body for updating an account.
#[derive(Debug, Deserialize)]
pub struct UpdateAccountRequest {
    /// New display name.
    pub name: Option<String>,
    /// New account number.
    pub account_number: Option<String>,
    /// New active flag.
    pub is_active: Option<bool>,
}

/// Request body for committing a ledger transaction.
#[derive(Debug, Deserialize)]
pub struct CreateTransactionRequest {
    /// Transaction kind.
    pub kind: TransactionKind,
    /// Positive magnitude.
    pub amount: Decimal,
    /// Sign for adjustment transactions (default: increase).
    #[serde(default)]
    pub direction: AdjustmentDirection,
    /// Human-readable description.
    pub description: String,
    /// Who created the entry.
    pub created_by: Option<String>,
}

fn account_error(err: &AccountError, context: &str) -> Response {
    match err {
        AccountError::Ledger(e) => response::fail(e.http_status_code(), e.error_code(), e.to_string()),
        AccountError::Database(e) => {
            error!(error = %e, "{context}");
            response::internal_error()
        }
    }
}

/// GET `/accounts` - List accounts.
async fn list_accounts(
    State(state): State<AppState>,
    Query(query): Query<ListAccountsQuery>,
) -> impl IntoResponse {
    let repo = AccountRepository::new((*state.db).clone());
    let filter = AccountFilter {
        kind: query.kind,
        is_active: query.active,
    };

    match repo.list_accounts(filter).await {
        Ok(accounts) => response::ok(json!({ "accounts": accounts })),
        Err(e) => account_error(&e, "Failed to list accounts"),
    }
}

/// POST `/accounts` - Create an account with its opening balance.
async fn create_account(
    State(state): State<AppState>,
    Json(payload): Json<CreateAccountRequest>,
) -> impl IntoResponse {
    let repo = AccountRepository::new((*state.db).clone());

    let input = CreateAccountInput {
        name: payload.name,
        kind: payload.kind,
        account_number: payload.account_number,
        currency: payload.currency,
        initial_balance: payload.initial_balance,
        initial_balance_date: payload.initial_balance_date,
    };

    match repo.create_account(input).await {
        Ok(account) => {
            info!(account_id = %account.id, name = %account.name, "Account created");
            response::created(json!({ "account": account }))
        }
        Err(e) => account_error(&e, "Failed to create account"),
    }
}

/// GET `/accounts/{account_id}` - Get account detail.
async fn get_account(
    State(state): State<AppState>,
    Path(account_id): Path<Uuid>,
) -> impl IntoResponse {
    let repo = AccountRepository::new((*state.db).clone());

    match repo.find_account(account_id).await {
        Ok(Some(account)) => response::ok(json!({ "account": account })),
        Ok(None) => response::not_found("Account"),
        Err(e) => account_error(&e, "Failed to get account"),
    }
}

/// PUT `/accounts/{account_id}` - Update account fields.
///
/// Balances are never updated here; they change only through transactions.
async fn update_account(
    State(state): State<AppState>,
    Path(account_id): Path<Uuid>,
    Json(payload): Json<UpdateAccountRequest>,
) -> impl IntoResponse {
    let repo = AccountRepository::new((*state.db).clone());

    let input = UpdateAccountInput {
        name: payload.name,
        account_number: payload.account_number.map(Some),
        is_active: payload.is_active,
    };

    match repo.update_account(account_id, input).await {
        Ok(account) => {
            info!(account_id = %account_id, "Account updated");
            response::ok(json!({ "account": account }))
        }
        Err(e) => account_error(&e, "Failed to update account"),
    }
}

/// DELETE `/accounts/{account_id}` - Soft-deactivate an account.
///
/// Accounts with transactions are never hard-deleted.
async fn deactivate_account(
    State(state): State<AppState>,
    Path(account_id): Path<Uuid>,
) -> impl IntoResponse {
    let repo = AccountRepository::new((*state.db).clone());

    match repo.deactivate_account(account_id).await {
        Ok(()) => {
            info!(account_id = %account_id, "Account deactivated");
            response::ok(json!({ "deactivated": true }))
        }
        Err(e) => account_error(&e, "Failed to deactivate account"),
    }
}

/// GET `/accounts/{account_id}/summary` - Balance and transaction count.
async fn get_account_summary(
    State(state): State<AppState>,
    Path(account_id): Path<Uuid>,
) -> impl IntoResponse {
    let repo = AccountRepository::new((*state.db).clone());

    match repo.get_summary(account_id).await {
        Ok(summary) => response::ok(json!({ "summary": summary })),
        Err(e) => account_error(&e, "Failed to get account summary"),
    }
}

/// GET `/accounts/{account_id}/transactions` - List transactions, newest first.
async fn list_transactions(
    State(state): State<AppState>,
    Path(account_id): Path<Uuid>,
) -> impl IntoResponse {
    let repo = AccountRepository::new((*state.db).clone());

    match repo.list_transactions(account_id).await {
        Ok(transactions) => response::ok(json!({ "transactions": transactions })),
        Err(e) => account_error(&e, "Failed to list transactions"),
    }
}

/// POST `/accounts/{account_id}/transactions` - Commit a transaction.
///
/// Returns the created transaction and the updated account; both are
/// persisted atomically.
async fn create_transaction(
    State(state): State<AppState>,
    Path(account_id): Path<Uuid>,
    Json(payload): Json<CreateTransactionRequest>,
) -> impl IntoResponse {
    let repo = AccountRepository::new((*state.db).clone());

    let input = CommitTransactionInput {
        account_id,
        kind: payload.kind,
        amount: payload.amount,
        direction: payload.direction,
        description: payload.description,
        created_by: payload.created_by.unwrap_or_else(|| "sistema".to_string()),
    };

    match repo.commit_transaction(input).await {
        Ok((transaction, account)) => {
            info!(
                account_id = %account_id,
                transaction_id = %transaction.id,
                amount = %transaction.amount,
                new_balance = %transaction.new_balance,
                "Transaction committed"
            );
            response::created(json!({ "transaction": transaction, "account": account }))
        }
        Err(e) => account_error(&e, "Failed to commit transaction"),
    }
}

/// DELETE `/accounts/{account_id}/transactions/{transaction_id}` - Reverse a
/// transaction and delete the record.
async fn reverse_transaction(
    State(state): State<AppState>,
    Path((account_id, transaction_id)): Path<(Uuid, Uuid)>,
) -> impl IntoResponse {
    let repo = AccountRepository::new((*state.db).clone());

    match repo.reverse_transaction(account_id, transaction_id).await {
        Ok(account) => {
            info!(
                account_id = %account_id,
                transaction_id = %transaction_id,
                new_balance = %account.current_balance,
                "Transaction reversed"
            );
            response::ok(json!({ "account": account }))
        }
        Err(e) => account_error(&e, "Failed to reverse transaction"),
    }
}
