//! Purchase repository for purchase document database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set,
};
use uuid::Uuid;

use comercio_core::payments::{DocumentTotals, PaymentError};
use rust_decimal::Decimal;

use crate::entities::purchases;

/// Error types for purchase operations.
#[derive(Debug, thiserror::Error)]
pub enum PurchaseError {
    /// Domain rule violation.
    #[error(transparent)]
    Payment(#[from] PaymentError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Input for creating a purchase.
#[derive(Debug, Clone)]
pub struct CreatePurchaseInput {
    /// Human document number.
    pub folio: String,
    /// Supplier the purchase was made from.
    pub supplier_name: String,
    /// Total amount, fixed at creation.
    pub total: Decimal,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Who created the purchase.
    pub created_by: String,
}

/// Purchase repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct PurchaseRepository {
    db: DatabaseConnection,
}

impl PurchaseRepository {
    /// Creates a new purchase repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a purchase with no payments yet.
    ///
    /// # Errors
    ///
    /// Returns [`PaymentError::InvalidAmount`] for a non-positive total.
    pub async fn create_purchase(
        &self,
        input: CreatePurchaseInput,
    ) -> Result<purchases::Model, PurchaseError> {
        if input.total <= Decimal::ZERO {
            return Err(PaymentError::InvalidAmount(input.total).into());
        }

        let totals = DocumentTotals::derive(input.total, &[]);
        let now = Utc::now().into();

        let purchase = purchases::ActiveModel {
            id: Set(Uuid::new_v4()),
            folio: Set(input.folio),
            supplier_name: Set(input.supplier_name),
            total: Set(input.total),
            paid_amount: Set(totals.paid_amount),
            remaining_amount: Set(totals.remaining_amount),
            payment_status: Set(totals.status.into()),
            notes: Set(input.notes),
            created_by: Set(input.created_by),
            created_at: Set(now),
            updated_at: Set(now),
        };

        Ok(purchase.insert(&self.db).await?)
    }

    /// Finds a purchase by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_purchase(&self, id: Uuid) -> Result<Option<purchases::Model>, PurchaseError> {
        Ok(purchases::Entity::find_by_id(id).one(&self.db).await?)
    }

    /// Lists purchases, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_purchases(&self) -> Result<Vec<purchases::Model>, PurchaseError> {
        Ok(purchases::Entity::find()
            .order_by_desc(purchases::Column::CreatedAt)
            .all(&self.db)
            .await?)
    }
}
