//! Database layer with `SeaORM` entities and repositories.
//!
//! This crate provides:
//! - `SeaORM` entity definitions
//! - Repository abstractions for data access
//! - Database migrations
//!
//! Repositories own the atomic read-modify-write cycles; every derivation
//! and validation rule is delegated to `comercio-core`.

pub mod entities;
pub mod migration;
pub mod repositories;

pub use repositories::{
    AccountRepository, BatchRepository, InventoryRepository, PaymentRepository,
    ProductRepository, PurchaseRepository, SaleRepository,
};

use sea_orm::{Database, DatabaseConnection, DbErr};

/// Establishes a connection to the database.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    Database::connect(database_url).await
}
