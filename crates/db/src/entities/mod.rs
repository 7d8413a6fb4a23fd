//! `SeaORM` entity definitions.

pub mod account_transactions;
pub mod accounts;
pub mod batches;
pub mod payments;
pub mod products;
pub mod purchases;
pub mod sales;
pub mod sea_orm_active_enums;
