//! Inventory error types.

use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur during inventory operations.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// Quantity must be positive.
    #[error("Quantity must be positive, got {0}")]
    InvalidQuantity(Decimal),

    /// Batch not found.
    #[error("Batch not found: {0}")]
    BatchNotFound(Uuid),

    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(Uuid),

    /// Not enough stock to consume the requested quantity.
    #[error("Cannot consume {requested}: only {available} in stock")]
    InsufficientStock {
        /// The quantity the caller asked for.
        requested: Decimal,
        /// The stock actually available.
        available: Decimal,
    },

    /// Restore would push the batch above its initial stock.
    #[error("Restoring {requested} would exceed initial stock of {initial} (current {current})")]
    ExceedsInitialStock {
        /// The quantity the caller asked to restore.
        requested: Decimal,
        /// The batch's current stock.
        current: Decimal,
        /// The batch's initial stock ceiling.
        initial: Decimal,
    },

    /// Product stock is derived from batches; direct adjustment is rejected.
    #[error("Product {0} manages batches; adjust stock through a batch")]
    BatchManagedProduct(Uuid),

    /// Batch expiration date must be after the production date.
    #[error("Expiration date {expiration} is not after production date {production}")]
    InvalidBatchDates {
        /// Production date supplied.
        production: chrono::NaiveDate,
        /// Expiration date supplied.
        expiration: chrono::NaiveDate,
    },
}

impl InventoryError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidQuantity(_) => "INVALID_QUANTITY",
            Self::BatchNotFound(_) => "BATCH_NOT_FOUND",
            Self::ProductNotFound(_) => "PRODUCT_NOT_FOUND",
            Self::InsufficientStock { .. } => "INSUFFICIENT_STOCK",
            Self::ExceedsInitialStock { .. } => "EXCEEDS_INITIAL_STOCK",
            Self::BatchManagedProduct(_) => "BATCH_MANAGED_PRODUCT",
            Self::InvalidBatchDates { .. } => "INVALID_BATCH_DATES",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self {
            Self::InvalidQuantity(_)
            | Self::InsufficientStock { .. }
            | Self::ExceedsInitialStock { .. }
            | Self::BatchManagedProduct(_)
            | Self::InvalidBatchDates { .. } => 400,
            Self::BatchNotFound(_) | Self::ProductNotFound(_) => 404,
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
            InventoryError::InvalidQuantity(dec!(0)).error_code(),
            "INVALID_QUANTITY"
        );
        assert_eq!(
            InventoryError::InsufficientStock {
                requested: dec!(50),
                available: dec!(30),
            }
            .error_code(),
            "INSUFFICIENT_STOCK"
        );
        assert_eq!(
            InventoryError::ExceedsInitialStock {
                requested: dec!(10),
                current: dec!(95),
                initial: dec!(100),
            }
            .error_code(),
            "EXCEEDS_INITIAL_STOCK"
        );
        assert_eq!(
            InventoryError::BatchManagedProduct(Uuid::nil()).error_code(),
            "BATCH_MANAGED_PRODUCT"
        );
    }

    #[test]
    fn test_http_status_codes() {
        assert_eq!(
            InventoryError::InsufficientStock {
                requested: dec!(50),
                available: dec!(30),
            }
            .http_status_code(),
            400
        );
        assert_eq!(
            InventoryError::BatchNotFound(Uuid::nil()).http_status_code(),
            404
        );
        assert_eq!(
            InventoryError::ProductNotFound(Uuid::nil()).http_status_code(),
            404
        );
    }

    #[test]
    fn test_error_display() {
        let err = InventoryError::InsufficientStock {
            requested: dec!(50),
            available: dec!(30),
        };
        assert_eq!(err.to_string(), "Cannot consume 50: only 30 in stock");
    }
}
