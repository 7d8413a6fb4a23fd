//! `SeaORM` Entity for the accounts table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::AccountKind;

/// A bank, cash, or card holding with a running balance.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    /// Account ID.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Account kind.
    pub kind: AccountKind,
    /// External account number, if any.
    pub account_number: Option<String>,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Balance the account was opened with.
    pub initial_balance: Decimal,
    /// Date of the opening balance.
    pub initial_balance_date: Date,
    /// Stored running balance; always `initial_balance` plus the sum of all
    /// committed signed amounts.
    pub current_balance: Decimal,
    /// Soft-deactivation flag.
    pub is_active: bool,
    /// Creation timestamp.
    pub created_at: DateTimeWithTimeZone,
    /// Last update timestamp.
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::account_transactions::Entity")]
    AccountTransactions,
}

impl Related<super::account_transactions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AccountTransactions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
