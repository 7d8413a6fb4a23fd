//! Payment reconciliation error types.

use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur during payment operations.
#[derive(Debug, Error)]
pub enum PaymentError {
    /// Payment amount must be positive.
    #[error("Payment amount must be positive, got {0}")]
    InvalidAmount(Decimal),

    /// Sale or purchase not found.
    #[error("Document not found: {0}")]
    DocumentNotFound(Uuid),

    /// Payment amount exceeds the document's remaining balance.
    #[error("Payment of {amount} exceeds remaining balance of {remaining}")]
    ExceedsRemaining {
        /// The rejected payment amount.
        amount: Decimal,
        /// The document's remaining balance at validation time.
        remaining: Decimal,
    },

    /// Payment not found on the document.
    #[error("Payment not found: {0}")]
    PaymentNotFound(Uuid),
}

impl PaymentError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidAmount(_) => "INVALID_AMOUNT",
            Self::DocumentNotFound(_) => "DOCUMENT_NOT_FOUND",
            Self::ExceedsRemaining { .. } => "EXCEEDS_REMAINING",
            Self::PaymentNotFound(_) => "PAYMENT_NOT_FOUND",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self {
            Self::InvalidAmount(_) | Self::ExceedsRemaining { .. } => 400,
            Self::DocumentNotFound(_) | Self::PaymentNotFound(_) => 404,
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
            PaymentError::InvalidAmount(dec!(0)).error_code(),
            "INVALID_AMOUNT"
        );
        assert_eq!(
            PaymentError::DocumentNotFound(Uuid::nil()).error_code(),
            "DOCUMENT_NOT_FOUND"
        );
        assert_eq!(
            PaymentError::ExceedsRemaining {
                amount: dec!(100),
                remaining: dec!(50),
            }
            .error_code(),
            "EXCEEDS_REMAINING"
        );
        assert_eq!(
            PaymentError::PaymentNotFound(Uuid::nil()).error_code(),
            "PAYMENT_NOT_FOUND"
        );
    }

    #[test]
    fn test_http_status_codes() {
        assert_eq!(
            PaymentError::ExceedsRemaining {
                amount: dec!(100),
                remaining: dec!(50),
            }
            .http_status_code(),
            400
        );
        assert_eq!(
            PaymentError::DocumentNotFound(Uuid::nil()).http_status_code(),
            404
        );
    }

    #[test]
    fn test_error_display() {
        let err = PaymentError::ExceedsRemaining {
            amount: dec!(700.00),
            remaining: dec!(600.00),
        };
        assert_eq!(
            err.to_string(),
            "Payment of 700.00 exceeds remaining balance of 600.00"
        );
    }
}
