//! Sale repository for sale document database operations.
//!
//! The derived payment fields are initialized through
//! `comercio_core::payments` and mutated only by the payment repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set,
};
use uuid::Uuid;

use comercio_core::payments::{DocumentTotals, PaymentError};
use rust_decimal::Decimal;

use crate::entities::sales;

/// Error types for sale operations.
#[derive(Debug, thiserror::Error)]
pub enum SaleError {
    /// Domain rule violation.
    #[error(transparent)]
    Payment(#[from] PaymentError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Input for creating a sale.
#[derive(Debug, Clone)]
pub struct CreateSaleInput {
    /// Human document number.
    pub folio: String,
    /// Client the sale was made to.
    pub client_name: String,
    /// Total amount, fixed at creation.
    pub total: Decimal,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Who created the sale.
    pub created_by: String,
}

/// Sale repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct SaleRepository {
    db: DatabaseConnection,
}

impl SaleRepository {
    /// Creates a new sale repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a sale with no payments yet.
    ///
    /// # Errors
    ///
    /// Returns [`PaymentError::InvalidAmount`] for a non-positive total.
    pub async fn create_sale(&self, input: CreateSaleInput) -> Result<sales::Model, SaleError> {
        if input.total <= Decimal::ZERO {
            return Err(PaymentError::InvalidAmount(input.total).into());
        }

        let totals = DocumentTotals::derive(input.total, &[]);
        let now = Utc::now().into();

        let sale = sales::ActiveModel {
            id: Set(Uuid::new_v4()),
            folio: Set(input.folio),
            client_name: Set(input.client_name),
            total: Set(input.total),
            paid_amount: Set(totals.paid_amount),
            remaining_amount: Set(totals.remaining_amount),
            payment_status: Set(totals.status.into()),
            notes: Set(input.notes),
            created_by: Set(input.created_by),
            created_at: Set(now),
            updated_at: Set(now),
        };

        Ok(sale.insert(&self.db).await?)
    }

    /// Finds a sale by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_sale(&self, id: Uuid) -> Result<Option<sales::Model>, SaleError> {
        Ok(sales::Entity::find_by_id(id).one(&self.db).await?)
    }

    /// Lists sales, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_sales(&self) -> Result<Vec<sales::Model>, SaleError> {
        Ok(sales::Entity::find()
            .order_by_desc(sales::Column::CreatedAt)
            .all(&self.db)
            .await?)
    }
}
