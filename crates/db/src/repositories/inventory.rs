//! Inventory summary repository.
//!
//! Read-side only: folds the current product snapshot through the core
//! summary computation. Nothing here is persisted; the counters are
//! recomputed on every call.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

use comercio_core::inventory::{summarize, InventorySummary, ProductSnapshot};

use crate::entities::products;

/// Inventory repository for summary queries.
#[derive(Debug, Clone)]
pub struct InventoryRepository {
    db: DatabaseConnection,
}

impl InventoryRepository {
    /// Creates a new inventory repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Computes the inventory summary over the current product snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn summarize(&self) -> Result<InventorySummary, DbErr> {
        let rows = products::Entity::find().all(&self.db).await?;

        let snapshot: Vec<ProductSnapshot> = rows
            .iter()
            .map(|p| ProductSnapshot {
                stock: p.stock,
                min_stock: p.min_stock,
                cost: p.cost,
                is_active: p.is_active,
            })
            .collect();

        Ok(summarize(&snapshot))
    }
}
