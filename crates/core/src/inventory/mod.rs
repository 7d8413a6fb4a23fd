//! Batch (lot) stock tracking and the inventory summary.
//!
//! Products either carry a scalar stock (mutated directly with a signed
//! delta) or manage batches, in which case the displayed stock is derived
//! from the batches and direct mutation is rejected. Batch status is
//! computed from stock and expiration date on every read; it is never
//! stored as authoritative truth.

pub mod batch;
pub mod error;
pub mod service;
pub mod summary;

#[cfg(test)]
mod batch_props;

pub use batch::{BatchState, BatchStatus};
pub use error::InventoryError;
pub use service::InventoryService;
pub use summary::{InventorySummary, ProductSnapshot, summarize};
