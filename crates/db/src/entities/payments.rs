//! `SeaORM` Entity for the payments table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::DocumentKind;

/// One partial or complete payment against a sale or purchase.
///
/// `document_id` points into `sales` or `purchases` depending on
/// `document_kind`; `transaction_id` links the ledger entry this payment
/// produced, if it was tied to an account.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "payments")]
pub struct Model {
    /// Payment ID.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// The sale or purchase this payment settles.
    pub document_id: Uuid,
    /// Which document table `document_id` refers to.
    pub document_kind: DocumentKind,
    /// Payment amount (positive, at most the remaining balance when made).
    pub amount: Decimal,
    /// Payment method (efectivo, tarjeta, transferencia, ...).
    pub method: String,
    /// Ledger account the money moved through, if any.
    pub account_id: Option<Uuid>,
    /// The ledger transaction this payment produced, if any.
    pub transaction_id: Option<Uuid>,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Who recorded the payment.
    pub created_by: String,
    /// Creation timestamp.
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
