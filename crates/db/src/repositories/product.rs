//! Product repository for catalog and scalar stock operations.
//!
//! Direct stock mutation is only legal for products that do not manage
//! batches; batch-managed products change stock through the batch
//! repository, which refreshes the cached product stock from the batch sum.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};
use tracing::info;
use uuid::Uuid;

use comercio_core::inventory::{InventoryError, InventoryService};
use rust_decimal::Decimal;

use crate::entities::products;

/// Error types for product operations.
#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    /// Domain rule violation.
    #[error(transparent)]
    Inventory(#[from] InventoryError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Input for creating a product.
#[derive(Debug, Clone)]
pub struct CreateProductInput {
    /// Display name.
    pub name: String,
    /// Stock-keeping unit code, if any.
    pub sku: Option<String>,
    /// Unit of measure.
    pub unit: String,
    /// Opening stock (ignored for batch-managed products, whose stock is
    /// derived from batches).
    pub stock: Decimal,
    /// Low-stock threshold.
    pub min_stock: Decimal,
    /// Unit cost.
    pub cost: Decimal,
    /// Sale price.
    pub price: Decimal,
    /// Whether stock is derived from batches.
    pub manages_batches: bool,
}

/// Product repository for CRUD and scalar stock adjustment.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    db: DatabaseConnection,
}

impl ProductRepository {
    /// Creates a new product repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a product.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::InvalidQuantity`] for a negative opening
    /// stock.
    pub async fn create_product(
        &self,
        input: CreateProductInput,
    ) -> Result<products::Model, ProductError> {
        if input.stock < Decimal::ZERO {
            return Err(InventoryError::InvalidQuantity(input.stock).into());
        }

        let stock = if input.manages_batches {
            Decimal::ZERO
        } else {
            input.stock
        };
        let now = Utc::now().into();

        let product = products::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name),
            sku: Set(input.sku),
            unit: Set(input.unit),
            stock: Set(stock),
            min_stock: Set(input.min_stock),
            cost: Set(input.cost),
            price: Set(input.price),
            manages_batches: Set(input.manages_batches),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
        };

        Ok(product.insert(&self.db).await?)
    }

    /// Lists products, optionally only active ones, by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_products(
        &self,
        active_only: bool,
    ) -> Result<Vec<products::Model>, ProductError> {
        let mut query = products::Entity::find();
        if active_only {
            query = query.filter(products::Column::IsActive.eq(true));
        }
        Ok(query
            .order_by_asc(products::Column::Name)
            .all(&self.db)
            .await?)
    }

    /// Finds a product by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_product(&self, id: Uuid) -> Result<Option<products::Model>, ProductError> {
        Ok(products::Entity::find_by_id(id).one(&self.db).await?)
    }

    /// Adjusts the scalar stock of a non-batch product by a signed delta.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::BatchManagedProduct`] for batch-managed
    /// products and [`InventoryError::InsufficientStock`] when the delta
    /// would push the stock below zero; the stock is left untouched in both
    /// cases.
    pub async fn adjust_stock(
        &self,
        id: Uuid,
        delta: Decimal,
        reason: &str,
    ) -> Result<products::Model, ProductError> {
        let txn = self.db.begin().await?;

        let product = products::Entity::find_by_id(id)
            .lock_exclusive()
            .one(&txn)
            .await?
            .ok_or(InventoryError::ProductNotFound(id))?;

        let new_stock = InventoryService::adjust_scalar_stock(
            product.id,
            product.manages_batches,
            product.stock,
            delta,
        )?;

        let mut active: products::ActiveModel = product.into();
        active.stock = Set(new_stock);
        active.updated_at = Set(Utc::now().into());
        let product = active.update(&txn).await?;

        txn.commit().await?;

        info!(
            product_id = %id,
            delta = %delta,
            new_stock = %new_stock,
            reason,
            "Product stock adjusted"
        );

        Ok(product)
    }
}
