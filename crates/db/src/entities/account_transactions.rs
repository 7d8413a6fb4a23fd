//! `SeaORM` Entity for the account_transactions table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::TransactionKind;

/// One signed ledger entry against an account.
///
/// Immutable once created except for deletion, which reverses the balance
/// update on the account.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "account_transactions")]
pub struct Model {
    /// Transaction ID.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// The account this entry belongs to.
    pub account_id: Uuid,
    /// Transaction kind.
    pub kind: TransactionKind,
    /// Positive magnitude of the entry.
    pub amount: Decimal,
    /// The signed delta that was applied to the account balance.
    pub signed_amount: Decimal,
    /// Human-readable description.
    pub description: String,
    /// Who created the entry.
    pub created_by: String,
    /// Account balance immediately after this entry.
    pub new_balance: Decimal,
    /// Creation timestamp.
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::accounts::Entity",
        from = "Column::AccountId",
        to = "super::accounts::Column::Id"
    )]
    Accounts,
}

impl Related<super::accounts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Accounts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
