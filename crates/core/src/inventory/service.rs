//! Inventory service for batch consume/restore and scalar stock adjustment.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::batch::{BatchState, BatchStatus};
use super::error::InventoryError;

/// Inventory service for stock mutations.
///
/// All functions are pure: they validate against a snapshot and return the
/// new stock value; the persistence layer applies it atomically. Violating
/// operations are rejected, never clamped.
pub struct InventoryService;

impl InventoryService {
    /// Validates a consume operation and returns the new stock.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::InvalidQuantity`] if `quantity <= 0` and
    /// [`InventoryError::InsufficientStock`] if the batch holds less than
    /// `quantity` (no partial decrement).
    pub fn consume(batch: &BatchState, quantity: Decimal) -> Result<Decimal, InventoryError> {
        if quantity <= Decimal::ZERO {
            return Err(InventoryError::InvalidQuantity(quantity));
        }
        if quantity > batch.current_stock {
            return Err(InventoryError::InsufficientStock {
                requested: quantity,
                available: batch.current_stock,
            });
        }
        Ok(batch.current_stock - quantity)
    }

    /// Validates a restore operation and returns the new stock.
    ///
    /// Restore is the compensation path for undoing consumption, so it is
    /// allowed on an exhausted (`agotado`) batch; the derived status comes
    /// back to `activo` unless the batch is past its expiration date.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::InvalidQuantity`] if `quantity <= 0` and
    /// [`InventoryError::ExceedsInitialStock`] if the result would exceed
    /// the batch's initial stock.
    pub fn restore(batch: &BatchState, quantity: Decimal) -> Result<Decimal, InventoryError> {
        if quantity <= Decimal::ZERO {
            return Err(InventoryError::InvalidQuantity(quantity));
        }
        if batch.current_stock + quantity > batch.initial_stock {
            return Err(InventoryError::ExceedsInitialStock {
                requested: quantity,
                current: batch.current_stock,
                initial: batch.initial_stock,
            });
        }
        Ok(batch.current_stock + quantity)
    }

    /// Validates a direct stock adjustment on a non-batch product.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::BatchManagedProduct`] if the product's
    /// stock is derived from batches, and
    /// [`InventoryError::InsufficientStock`] if the delta would push the
    /// stock below zero.
    pub fn adjust_scalar_stock(
        product_id: Uuid,
        manages_batches: bool,
        current_stock: Decimal,
        delta: Decimal,
    ) -> Result<Decimal, InventoryError> {
        if manages_batches {
            return Err(InventoryError::BatchManagedProduct(product_id));
        }
        let new_stock = current_stock + delta;
        if new_stock < Decimal::ZERO {
            return Err(InventoryError::InsufficientStock {
                requested: -delta,
                available: current_stock,
            });
        }
        Ok(new_stock)
    }

    /// Validates the dates and stock of a new batch.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::InvalidQuantity`] for a non-positive
    /// initial stock and [`InventoryError::InvalidBatchDates`] when the
    /// expiration date is not after the production date.
    pub fn validate_new_batch(
        initial_stock: Decimal,
        production_date: NaiveDate,
        expiration_date: NaiveDate,
    ) -> Result<(), InventoryError> {
        if initial_stock <= Decimal::ZERO {
            return Err(InventoryError::InvalidQuantity(initial_stock));
        }
        if expiration_date <= production_date {
            return Err(InventoryError::InvalidBatchDates {
                production: production_date,
                expiration: expiration_date,
            });
        }
        Ok(())
    }

    /// Derives the displayed stock of a batch-managed product.
    ///
    /// Only batches whose derived status is `activo` count: expired stock
    /// is not sellable and exhausted batches contribute nothing.
    #[must_use]
    pub fn derived_product_stock(batches: &[BatchState], today: NaiveDate) -> Decimal {
        batches
            .iter()
            .filter(|b| b.status(today) == BatchStatus::Activo)
            .map(|b| b.current_stock)
            .sum()
    }
}
