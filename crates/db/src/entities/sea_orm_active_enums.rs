//! Database enum mappings.
//!
//! Mirrors of the core domain enums as Postgres enums, with conversions in
//! both directions. Batch status has no mapping on purpose: it is derived
//! from stock and expiration date on every read, never stored.

use comercio_core::ledger::{AccountKind as CoreAccountKind, TransactionKind as CoreTransactionKind};
use comercio_core::payments::{DocumentKind as CoreDocumentKind, PaymentStatus as CorePaymentStatus};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Account kind (`account_kind` Postgres enum).
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "account_kind")]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    /// Bank account.
    #[sea_orm(string_value = "bank")]
    Bank,
    /// Cash drawer.
    #[sea_orm(string_value = "cash")]
    Cash,
    /// Card account.
    #[sea_orm(string_value = "card")]
    Card,
}

/// Transaction kind (`transaction_kind` Postgres enum).
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "transaction_kind")]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money placed into the account.
    #[sea_orm(string_value = "deposit")]
    Deposit,
    /// Money taken out of the account.
    #[sea_orm(string_value = "withdrawal")]
    Withdrawal,
    /// Payment received against a document.
    #[sea_orm(string_value = "payment")]
    Payment,
    /// Refund issued to a counterparty.
    #[sea_orm(string_value = "refund")]
    Refund,
    /// Manual correction.
    #[sea_orm(string_value = "adjustment")]
    Adjustment,
}

/// Payment status (`payment_status` Postgres enum).
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "payment_status")]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    /// No payment received yet.
    #[sea_orm(string_value = "pendiente")]
    Pendiente,
    /// Partially paid.
    #[sea_orm(string_value = "parcial")]
    Parcial,
    /// Fully paid.
    #[sea_orm(string_value = "pagado")]
    Pagado,
}

/// Document kind (`document_kind` Postgres enum).
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "document_kind")]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// Sale document.
    #[sea_orm(string_value = "sale")]
    Sale,
    /// Purchase document.
    #[sea_orm(string_value = "purchase")]
    Purchase,
}

impl From<CoreAccountKind> for AccountKind {
    fn from(kind: CoreAccountKind) -> Self {
        match kind {
            CoreAccountKind::Bank => Self::Bank,
            CoreAccountKind::Cash => Self::Cash,
            CoreAccountKind::Card => Self::Card,
        }
    }
}

impl From<AccountKind> for CoreAccountKind {
    fn from(kind: AccountKind) -> Self {
        match kind {
            AccountKind::Bank => Self::Bank,
            AccountKind::Cash => Self::Cash,
            AccountKind::Card => Self::Card,
        }
    }
}

impl From<CoreTransactionKind> for TransactionKind {
    fn from(kind: CoreTransactionKind) -> Self {
        match kind {
            CoreTransactionKind::Deposit => Self::Deposit,
            CoreTransactionKind::Withdrawal => Self::Withdrawal,
            CoreTransactionKind::Payment => Self::Payment,
            CoreTransactionKind::Refund => Self::Refund,
            CoreTransactionKind::Adjustment => Self::Adjustment,
        }
    }
}

impl From<TransactionKind> for CoreTransactionKind {
    fn from(kind: TransactionKind) -> Self {
        match kind {
            TransactionKind::Deposit => Self::Deposit,
            TransactionKind::Withdrawal => Self::Withdrawal,
            TransactionKind::Payment => Self::Payment,
            TransactionKind::Refund => Self::Refund,
            TransactionKind::Adjustment => Self::Adjustment,
        }
    }
}

impl From<CorePaymentStatus> for PaymentStatus {
    fn from(status: CorePaymentStatus) -> Self {
        match status {
            CorePaymentStatus::Pendiente => Self::Pendiente,
            CorePaymentStatus::Parcial => Self::Parcial,
            CorePaymentStatus::Pagado => Self::Pagado,
        }
    }
}

impl From<PaymentStatus> for CorePaymentStatus {
    fn from(status: PaymentStatus) -> Self {
        match status {
            PaymentStatus::Pendiente => Self::Pendiente,
            PaymentStatus::Parcial => Self::Parcial,
            PaymentStatus::Pagado => Self::Pagado,
        }
    }
}

impl From<CoreDocumentKind> for DocumentKind {
    fn from(kind: CoreDocumentKind) -> Self {
        match kind {
            CoreDocumentKind::Sale => Self::Sale,
            CoreDocumentKind::Purchase => Self::Purchase,
        }
    }
}

impl From<DocumentKind> for CoreDocumentKind {
    fn from(kind: DocumentKind) -> Self {
        match kind {
            DocumentKind::Sale => Self::Sale,
            DocumentKind::Purchase => Self::Purchase,
        }
    }
}
