//! Inventory summary route.

use axum::{
    Router,
    extract::State,
    response::IntoResponse,
    routing::get,
};
use serde_json::json;
use tracing::error;

use crate::{AppState, response};
use comercio_db::repositories::inventory::InventoryRepository;

/// Creates the inventory routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/inventory/summary", get(get_summary))
}

/// GET `/inventory/summary` - Summary counters over the product catalog.
///
/// Recomputed from the current snapshot on every call.
async fn get_summary(State(state): State<AppState>) -> impl IntoResponse {
    let repo = InventoryRepository::new((*state.db).clone());

    match repo.summarize().await {
        Ok(summary) => response::ok(json!({ "summary": summary })),
        Err(e) => {
            error!(error = %e, "Failed to compute inventory summary");
            response::internal_error()
        }
    }
}
