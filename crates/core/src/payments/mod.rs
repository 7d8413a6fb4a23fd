//! Partial-payment reconciliation for sales and purchases.
//!
//! A sale or purchase carries a fixed total and a list of payments; the
//! paid/remaining/status triple is always rederived from the full payment
//! list, never incremented in place. This module owns that derivation and
//! the validation of new payments.

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use error::PaymentError;
pub use service::PaymentService;
pub use types::{DocumentKind, DocumentTotals, PaymentStatus};
