//! Ledger error types.

use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur during ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Transaction amount must be positive.
    #[error("Transaction amount must be positive, got {0}")]
    InvalidAmount(Decimal),

    /// Account not found.
    #[error("Account not found: {0}")]
    AccountNotFound(Uuid),

    /// Account is deactivated and cannot accept transactions.
    #[error("Account {0} is inactive")]
    AccountInactive(Uuid),

    /// Transaction not found.
    #[error("Transaction not found: {0}")]
    TransactionNotFound(Uuid),

    /// Transaction does not belong to the given account.
    #[error("Transaction {transaction_id} does not belong to account {account_id}")]
    TransactionAccountMismatch {
        /// The transaction ID.
        transaction_id: Uuid,
        /// The account ID the caller supplied.
        account_id: Uuid,
    },
}

impl LedgerError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidAmount(_) => "INVALID_AMOUNT",
            Self::AccountNotFound(_) => "ACCOUNT_NOT_FOUND",
            Self::AccountInactive(_) => "ACCOUNT_INACTIVE",
            Self::TransactionNotFound(_) => "TRANSACTION_NOT_FOUND",
            Self::TransactionAccountMismatch { .. } => "TRANSACTION_ACCOUNT_MISMATCH",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self {
            Self::InvalidAmount(_) | Self::AccountInactive(_) => 400,
            Self::AccountNotFound(_)
            | Self::TransactionNotFound(_)
            | Self::TransactionAccountMismatch { .. } => 404,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            LedgerError::InvalidAmount(dec!(-1)).error_code(),
            "INVALID_AMOUNT"
        );
        assert_eq!(
            LedgerError::AccountNotFound(Uuid::nil()).error_code(),
            "ACCOUNT_NOT_FOUND"
        );
        assert_eq!(
            LedgerError::AccountInactive(Uuid::nil()).error_code(),
            "ACCOUNT_INACTIVE"
        );
    }

    #[test]
    fn test_http_status_codes() {
        assert_eq!(LedgerError::InvalidAmount(dec!(0)).http_status_code(), 400);
        assert_eq!(
            LedgerError::AccountInactive(Uuid::nil()).http_status_code(),
            400
        );
        assert_eq!(
            LedgerError::AccountNotFound(Uuid::nil()).http_status_code(),
            404
        );
        assert_eq!(
            LedgerError::TransactionNotFound(Uuid::nil()).http_status_code(),
            404
        );
    }

    #[test]
    fn test_error_display() {
        let err = LedgerError::InvalidAmount(dec!(-5));
        assert_eq!(err.to_string(), "Transaction amount must be positive, got -5");
    }
}
