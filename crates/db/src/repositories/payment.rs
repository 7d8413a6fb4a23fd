//! Payment repository for payment reconciliation database operations.
//!
//! A payment mutation touches up to three aggregates: the payment row, the
//! parent document's derived fields, and (optionally) a ledger transaction
//! on a linked account. All of them are written inside ONE database
//! transaction, so a failure in any step rolls back every other step.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use serde::Serialize;
use uuid::Uuid;

use comercio_core::ledger::{AdjustmentDirection, LedgerError};
use comercio_core::payments::{DocumentKind, DocumentTotals, PaymentError, PaymentService, PaymentStatus};
use rust_decimal::Decimal;

use crate::entities::{account_transactions, payments, purchases, sales};
use crate::repositories::account::{self, AccountError, CommitTransactionInput};

/// Error types for payment reconciliation operations.
#[derive(Debug, thiserror::Error)]
pub enum ReconciliationError {
    /// Payment rule violation.
    #[error(transparent)]
    Payment(#[from] PaymentError),

    /// Ledger rule violation on the linked account.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<AccountError> for ReconciliationError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::Ledger(e) => Self::Ledger(e),
            AccountError::Database(e) => Self::Database(e),
        }
    }
}

/// Input for adding a payment to a document.
#[derive(Debug, Clone)]
pub struct AddPaymentInput {
    /// Payment amount.
    pub amount: Decimal,
    /// Payment method (efectivo, tarjeta, transferencia, ...).
    pub method: String,
    /// Ledger account the money moves through, if any.
    pub account_id: Option<Uuid>,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Who recorded the payment.
    pub created_by: String,
}

/// The document header after a payment mutation, independent of which table
/// it lives in.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentSummary {
    /// Document ID.
    pub id: Uuid,
    /// Sale or purchase.
    pub kind: DocumentKind,
    /// Human document number.
    pub folio: String,
    /// Total amount.
    pub total: Decimal,
    /// Sum of all payment amounts.
    pub paid_amount: Decimal,
    /// `total - paid_amount`.
    pub remaining_amount: Decimal,
    /// Derived payment status.
    pub payment_status: PaymentStatus,
}

/// Result of adding a payment.
#[derive(Debug)]
pub struct AddPaymentOutcome {
    /// The created payment.
    pub payment: payments::Model,
    /// The parent document with recomputed fields.
    pub document: DocumentSummary,
    /// The ledger transaction the payment produced, if any.
    pub transaction: Option<account_transactions::Model>,
}

/// Payment repository for reconciliation operations.
#[derive(Debug, Clone)]
pub struct PaymentRepository {
    db: DatabaseConnection,
}

/// A locked document row from either table.
enum DocumentRow {
    Sale(sales::Model),
    Purchase(purchases::Model),
}

impl DocumentRow {
    fn total(&self) -> Decimal {
        match self {
            Self::Sale(s) => s.total,
            Self::Purchase(p) => p.total,
        }
    }

    fn summary(&self) -> DocumentSummary {
        match self {
            Self::Sale(s) => DocumentSummary {
                id: s.id,
                kind: DocumentKind::Sale,
                folio: s.folio.clone(),
                total: s.total,
                paid_amount: s.paid_amount,
                remaining_amount: s.remaining_amount,
                payment_status: s.payment_status.clone().into(),
            },
            Self::Purchase(p) => DocumentSummary {
                id: p.id,
                kind: DocumentKind::Purchase,
                folio: p.folio.clone(),
                total: p.total,
                paid_amount: p.paid_amount,
                remaining_amount: p.remaining_amount,
                payment_status: p.payment_status.clone().into(),
            },
        }
    }

    fn folio(&self) -> &str {
        match self {
            Self::Sale(s) => &s.folio,
            Self::Purchase(p) => &p.folio,
        }
    }
}

/// Loads and row-locks the document a payment mutation targets.
async fn load_document_for_update(
    txn: &DatabaseTransaction,
    kind: DocumentKind,
    document_id: Uuid,
) -> Result<DocumentRow, ReconciliationError> {
    match kind {
        DocumentKind::Sale => sales::Entity::find_by_id(document_id)
            .lock_exclusive()
            .one(txn)
            .await?
            .map(DocumentRow::Sale)
            .ok_or_else(|| PaymentError::DocumentNotFound(document_id).into()),
        DocumentKind::Purchase => purchases::Entity::find_by_id(document_id)
            .lock_exclusive()
            .one(txn)
            .await?
            .map(DocumentRow::Purchase)
            .ok_or_else(|| PaymentError::DocumentNotFound(document_id).into()),
    }
}

/// Writes recomputed totals back onto the document row.
async fn store_totals(
    txn: &DatabaseTransaction,
    row: DocumentRow,
    totals: DocumentTotals,
) -> Result<DocumentRow, ReconciliationError> {
    let now = Utc::now().into();
    match row {
        DocumentRow::Sale(model) => {
            let mut active: sales::ActiveModel = model.into();
            active.paid_amount = Set(totals.paid_amount);
            active.remaining_amount = Set(totals.remaining_amount);
            active.payment_status = Set(totals.status.into());
            active.updated_at = Set(now);
            Ok(DocumentRow::Sale(active.update(txn).await?))
        }
        DocumentRow::Purchase(model) => {
            let mut active: purchases::ActiveModel = model.into();
            active.paid_amount = Set(totals.paid_amount);
            active.remaining_amount = Set(totals.remaining_amount);
            active.payment_status = Set(totals.status.into());
            active.updated_at = Set(now);
            Ok(DocumentRow::Purchase(active.update(txn).await?))
        }
    }
}

/// Loads the amounts of every payment currently attached to a document.
async fn payment_amounts(
    txn: &DatabaseTransaction,
    kind: DocumentKind,
    document_id: Uuid,
) -> Result<Vec<Decimal>, DbErr> {
    let db_kind: crate::entities::sea_orm_active_enums::DocumentKind = kind.into();
    let rows = payments::Entity::find()
        .filter(payments::Column::DocumentId.eq(document_id))
        .filter(payments::Column::DocumentKind.eq(db_kind))
        .all(txn)
        .await?;
    Ok(rows.into_iter().map(|p| p.amount).collect())
}

impl PaymentRepository {
    /// Creates a new payment repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a payment to a sale or purchase.
    ///
    /// Validation reads the full payment list inside the transaction, so a
    /// stale `remaining_amount` column can never admit an overpayment, and
    /// two concurrent payments against the same document serialize on the
    /// row lock. If `account_id` is given, the linked ledger transaction
    /// commits in the same transactional boundary.
    ///
    /// # Errors
    ///
    /// Returns [`PaymentError::DocumentNotFound`],
    /// [`PaymentError::InvalidAmount`], [`PaymentError::ExceedsRemaining`],
    /// or a ledger error from the linked account; in every failure case
    /// nothing is persisted.
    pub async fn add_payment(
        &self,
        kind: DocumentKind,
        document_id: Uuid,
        input: AddPaymentInput,
    ) -> Result<AddPaymentOutcome, ReconciliationError> {
        let txn = self.db.begin().await?;

        let document = load_document_for_update(&txn, kind, document_id).await?;
        let existing = payment_amounts(&txn, kind, document_id).await?;
        let totals = PaymentService::validate_new_payment(document.total(), &existing, input.amount)?;

        let transaction = match input.account_id {
            Some(account_id) => {
                let description = match kind {
                    DocumentKind::Sale => format!("Pago de venta {}", document.folio()),
                    DocumentKind::Purchase => format!("Pago de compra {}", document.folio()),
                };
                let (tx_model, _account) = account::commit_on_txn(
                    &txn,
                    CommitTransactionInput {
                        account_id,
                        kind: kind.ledger_kind(),
                        amount: input.amount,
                        direction: AdjustmentDirection::default(),
                        description,
                        created_by: input.created_by.clone(),
                    },
                )
                .await?;
                Some(tx_model)
            }
            None => None,
        };

        let payment = payments::ActiveModel {
            id: Set(Uuid::new_v4()),
            document_id: Set(document_id),
            document_kind: Set(kind.into()),
            amount: Set(input.amount),
            method: Set(input.method),
            account_id: Set(input.account_id),
            transaction_id: Set(transaction.as_ref().map(|t| t.id)),
            notes: Set(input.notes),
            created_by: Set(input.created_by),
            created_at: Set(Utc::now().into()),
        };
        let payment = payment.insert(&txn).await?;

        let document = store_totals(&txn, document, totals).await?;

        txn.commit().await?;

        Ok(AddPaymentOutcome {
            payment,
            document: document.summary(),
            transaction,
        })
    }

    /// Deletes a payment, recomputing the document's derived fields from the
    /// remaining payment list and reversing the linked ledger transaction if
    /// one exists.
    ///
    /// Deleting a just-added payment restores the document and the account
    /// to their exact prior numeric state.
    ///
    /// # Errors
    ///
    /// Returns [`PaymentError::PaymentNotFound`] when the payment does not
    /// exist or is not attached to the given document.
    pub async fn delete_payment(
        &self,
        kind: DocumentKind,
        document_id: Uuid,
        payment_id: Uuid,
    ) -> Result<DocumentSummary, ReconciliationError> {
        let txn = self.db.begin().await?;

        let document = load_document_for_update(&txn, kind, document_id).await?;

        let db_kind: crate::entities::sea_orm_active_enums::DocumentKind = kind.into();
        let payment = payments::Entity::find_by_id(payment_id)
            .one(&txn)
            .await?
            .filter(|p| p.document_id == document_id && p.document_kind == db_kind)
            .ok_or(PaymentError::PaymentNotFound(payment_id))?;

        // The payment row references the ledger transaction, so it goes first.
        payments::Entity::delete_by_id(payment.id).exec(&txn).await?;

        if let Some(transaction_id) = payment.transaction_id {
            let transaction = account_transactions::Entity::find_by_id(transaction_id)
                .one(&txn)
                .await?
                .ok_or(LedgerError::TransactionNotFound(transaction_id))?;
            account::reverse_on_txn(&txn, &transaction).await?;
        }

        let remaining = payment_amounts(&txn, kind, document_id).await?;
        let totals = PaymentService::totals_after_removal(document.total(), &remaining);
        let document = store_totals(&txn, document, totals).await?;

        txn.commit().await?;

        Ok(document.summary())
    }

    /// Lists a document's payments, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`PaymentError::DocumentNotFound`] for an unknown document.
    pub async fn list_payments(
        &self,
        kind: DocumentKind,
        document_id: Uuid,
    ) -> Result<Vec<payments::Model>, ReconciliationError> {
        let exists = match kind {
            DocumentKind::Sale => sales::Entity::find_by_id(document_id)
                .one(&self.db)
                .await?
                .is_some(),
            DocumentKind::Purchase => purchases::Entity::find_by_id(document_id)
                .one(&self.db)
                .await?
                .is_some(),
        };
        if !exists {
            return Err(PaymentError::DocumentNotFound(document_id).into());
        }

        let db_kind: crate::entities::sea_orm_active_enums::DocumentKind = kind.into();
        Ok(payments::Entity::find()
            .filter(payments::Column::DocumentId.eq(document_id))
            .filter(payments::Column::DocumentKind.eq(db_kind))
            .order_by_asc(payments::Column::CreatedAt)
            .all(&self.db)
            .await?)
    }
}
