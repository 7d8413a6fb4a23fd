//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod accounts;
pub mod batches;
pub mod health;
pub mod inventory;
pub mod products;
pub mod purchases;
pub mod sales;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(accounts::routes())
        .merge(sales::routes())
        .merge(purchases::routes())
        .merge(products::routes())
        .merge(batches::routes())
        .merge(inventory::routes())
}
