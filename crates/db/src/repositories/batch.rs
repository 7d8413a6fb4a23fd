//! Batch repository for lot-level stock operations.
//!
//! Consume and restore mutate one batch and refresh the parent product's
//! cached stock from the batch sum, all inside one database transaction.
//! Status is derived from stock and expiration on every read.

use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use uuid::Uuid;

use comercio_core::inventory::{BatchState, BatchStatus, InventoryError, InventoryService};
use rust_decimal::Decimal;

use crate::entities::{batches, products};

/// Error types for batch operations.
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    /// Domain rule violation.
    #[error(transparent)]
    Inventory(#[from] InventoryError),

    /// The product does not track stock per batch.
    #[error("Product {0} does not manage batches")]
    NotBatchManaged(Uuid),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Input for creating a batch.
#[derive(Debug, Clone)]
pub struct CreateBatchInput {
    /// Human lot number.
    pub batch_number: String,
    /// Unit of measure.
    pub unit: String,
    /// Opening stock of the lot.
    pub initial_stock: Decimal,
    /// Production date.
    pub production_date: NaiveDate,
    /// Expiration date.
    pub expiration_date: NaiveDate,
    /// Unit cost of this lot.
    pub cost: Decimal,
}

/// A batch together with its derived status.
#[derive(Debug, Clone)]
pub struct BatchWithStatus {
    /// The batch record.
    pub batch: batches::Model,
    /// Status derived as of the query date.
    pub status: BatchStatus,
}

/// Batch repository for lot CRUD and stock mutation.
#[derive(Debug, Clone)]
pub struct BatchRepository {
    db: DatabaseConnection,
}

/// Projects the stock-relevant fields out of a batch row.
pub fn batch_state(batch: &batches::Model) -> BatchState {
    BatchState {
        id: batch.id,
        initial_stock: batch.initial_stock,
        current_stock: batch.current_stock,
        expiration_date: batch.expiration_date,
    }
}

/// Derived product stock over a set of batch rows.
pub(crate) fn stock_from_batches(rows: &[batches::Model], today: NaiveDate) -> Decimal {
    let states: Vec<BatchState> = rows.iter().map(batch_state).collect();
    InventoryService::derived_product_stock(&states, today)
}

/// Refreshes the cached stock of a batch-managed product from its batches.
async fn refresh_product_stock(
    txn: &DatabaseTransaction,
    product_id: Uuid,
    today: NaiveDate,
) -> Result<products::Model, BatchError> {
    let product = products::Entity::find_by_id(product_id)
        .lock_exclusive()
        .one(txn)
        .await?
        .ok_or(InventoryError::ProductNotFound(product_id))?;

    let rows = batches::Entity::find()
        .filter(batches::Column::ProductId.eq(product_id))
        .all(txn)
        .await?;
    let stock = stock_from_batches(&rows, today);

    let mut active: products::ActiveModel = product.into();
    active.stock = Set(stock);
    active.updated_at = Set(Utc::now().into());
    Ok(active.update(txn).await?)
}

impl BatchRepository {
    /// Creates a new batch repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a batch for a batch-managed product.
    ///
    /// The batch starts with `current_stock = initial_stock` and the
    /// product's cached stock is refreshed in the same transaction.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::ProductNotFound`] for an unknown product,
    /// [`BatchError::NotBatchManaged`] when the product tracks scalar
    /// stock, and the core validation errors for bad stock or dates.
    pub async fn create_batch(
        &self,
        product_id: Uuid,
        input: CreateBatchInput,
        today: NaiveDate,
    ) -> Result<BatchWithStatus, BatchError> {
        InventoryService::validate_new_batch(
            input.initial_stock,
            input.production_date,
            input.expiration_date,
        )?;

        let txn = self.db.begin().await?;

        let product = products::Entity::find_by_id(product_id)
            .one(&txn)
            .await?
            .ok_or(InventoryError::ProductNotFound(product_id))?;
        if !product.manages_batches {
            return Err(BatchError::NotBatchManaged(product_id));
        }

        let now = Utc::now().into();
        let batch = batches::ActiveModel {
            id: Set(Uuid::new_v4()),
            product_id: Set(product_id),
            batch_number: Set(input.batch_number),
            unit: Set(input.unit),
            initial_stock: Set(input.initial_stock),
            current_stock: Set(input.initial_stock),
            production_date: Set(input.production_date),
            expiration_date: Set(input.expiration_date),
            cost: Set(input.cost),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let batch = batch.insert(&txn).await?;

        refresh_product_stock(&txn, product_id, today).await?;

        txn.commit().await?;

        let status = batch_state(&batch).status(today);
        Ok(BatchWithStatus { batch, status })
    }

    /// Finds a batch by ID with its derived status.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_batch(
        &self,
        id: Uuid,
        today: NaiveDate,
    ) -> Result<Option<BatchWithStatus>, BatchError> {
        Ok(batches::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(|batch| {
                let status = batch_state(&batch).status(today);
                BatchWithStatus { batch, status }
            }))
    }

    /// Lists a product's batches ordered by expiration date ascending
    /// (soonest-expiring first).
    ///
    /// With `active_only`, batches whose derived status is not `activo` are
    /// filtered out; the ordering is the basis for any FIFO-style
    /// consumption policy the caller applies. The repository never
    /// auto-selects a batch.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::ProductNotFound`] for an unknown product.
    pub async fn list_batches(
        &self,
        product_id: Uuid,
        active_only: bool,
        today: NaiveDate,
    ) -> Result<Vec<BatchWithStatus>, BatchError> {
        products::Entity::find_by_id(product_id)
            .one(&self.db)
            .await?
            .ok_or(InventoryError::ProductNotFound(product_id))?;

        let rows = batches::Entity::find()
            .filter(batches::Column::ProductId.eq(product_id))
            .order_by_asc(batches::Column::ExpirationDate)
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|batch| {
                let status = batch_state(&batch).status(today);
                BatchWithStatus { batch, status }
            })
            .filter(|b| !active_only || b.status == BatchStatus::Activo)
            .collect())
    }

    /// Consumes stock from a batch.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::InsufficientStock`] when the batch holds
    /// less than the requested quantity; the stock is left untouched (no
    /// partial decrement).
    pub async fn consume(
        &self,
        batch_id: Uuid,
        quantity: Decimal,
        today: NaiveDate,
    ) -> Result<BatchWithStatus, BatchError> {
        self.apply_stock_change(batch_id, quantity, today, InventoryService::consume)
            .await
    }

    /// Restores previously consumed stock onto a batch.
    ///
    /// Allowed on an exhausted batch (this is the compensation path for
    /// undoing consumption); rejected only when the result would exceed the
    /// batch's initial stock.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::ExceedsInitialStock`] when the restore
    /// would push the stock above the initial amount.
    pub async fn restore(
        &self,
        batch_id: Uuid,
        quantity: Decimal,
        today: NaiveDate,
    ) -> Result<BatchWithStatus, BatchError> {
        self.apply_stock_change(batch_id, quantity, today, InventoryService::restore)
            .await
    }

    /// Shared consume/restore cycle: lock the batch, validate through core,
    /// persist the new stock, refresh the parent product.
    async fn apply_stock_change(
        &self,
        batch_id: Uuid,
        quantity: Decimal,
        today: NaiveDate,
        op: fn(&BatchState, Decimal) -> Result<Decimal, InventoryError>,
    ) -> Result<BatchWithStatus, BatchError> {
        let txn = self.db.begin().await?;

        let batch = batches::Entity::find_by_id(batch_id)
            .lock_exclusive()
            .one(&txn)
            .await?
            .ok_or(InventoryError::BatchNotFound(batch_id))?;

        let new_stock = op(&batch_state(&batch), quantity)?;
        let product_id = batch.product_id;

        let mut active: batches::ActiveModel = batch.into();
        active.current_stock = Set(new_stock);
        active.updated_at = Set(Utc::now().into());
        let batch = active.update(&txn).await?;

        refresh_product_stock(&txn, product_id, today).await?;

        txn.commit().await?;

        let status = batch_state(&batch).status(today);
        Ok(BatchWithStatus { batch, status })
    }
}
