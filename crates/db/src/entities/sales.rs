//! `SeaORM` Entity for the sales table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::PaymentStatus;

/// A sale with a payable total and derived payment fields.
///
/// `paid_amount`, `remaining_amount`, and `payment_status` are always
/// recomputed from the full payment list, never adjusted in place.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "sales")]
pub struct Model {
    /// Sale ID.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Human document number.
    pub folio: String,
    /// Client the sale was made to.
    pub client_name: String,
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
    /// Who created the sale.
    pub created_by: String,
    /// Creation timestamp.
    pub created_at: DateTimeWithTimeZone,
    /// Last update timestamp.
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
