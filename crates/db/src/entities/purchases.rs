//! `SeaORM` Entity for the purchases table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::PaymentStatus;

/// A purchase with a payable total and derived payment fields.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "purchases")]
pub struct Model {
    /// Purchase ID.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Human document number.
    pub folio: String,
    /// Supplier the purchase was made from.
    pub supplier_name: String,
    /// Total amount, fixed at creation.
    pub total: Decimal,
    /// Sum of all payment amounts.
    pub paid_amount: Decimal,
    /// `total - paid_amount`.
    pub remaining_amount: Decimal,
    /// Derived payment status.
    pub payment_status: PaymentStatus,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Who created the purchase.
    pub created_by: String,
    /// Creation timestamp.
    pub created_at: DateTimeWithTimeZone,
    /// Last update timestamp.
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
