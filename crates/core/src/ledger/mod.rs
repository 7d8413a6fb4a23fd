//! Account balance tracking over signed transactions.
//!
//! This module implements the balance-ledger rules:
//! - Sign conventions per transaction kind
//! - Commit validation and balance computation
//! - Reversal (compensating delete) arithmetic
//! - Replay of a transaction stream for consistency checks

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use error::LedgerError;
pub use service::LedgerService;
pub use types::{
    AccountKind, AccountState, AccountSummary, AdjustmentDirection, PreparedCommit,
    TransactionKind,
};
