//! Account repository for ledger database operations.
//!
//! Owns the atomic commit/reverse cycle: a transaction row and the account's
//! stored balance are written inside one database transaction, so both
//! succeed or neither does. Balance arithmetic and validation live in
//! `comercio_core::ledger`.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use uuid::Uuid;

use comercio_core::ledger::{
    AccountKind, AccountState, AccountSummary, AdjustmentDirection, LedgerError, LedgerService,
    TransactionKind,
};
use rust_decimal::Decimal;

use crate::entities::{account_transactions, accounts};

/// Error types for account and ledger operations.
#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    /// Domain rule violation.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Filter options for listing accounts.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccountFilter {
    /// Filter by account kind.
    pub kind: Option<AccountKind>,
    /// Filter by active status.
    pub is_active: Option<bool>,
}

/// Input for creating an account.
#[derive(Debug, Clone)]
pub struct CreateAccountInput {
    /// Display name.
    pub name: String,
    /// Account kind.
    pub kind: AccountKind,
    /// External account number, if any.
    pub account_number: Option<String>,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Opening balance.
    pub initial_balance: Decimal,
    /// Date of the opening balance.
    pub initial_balance_date: chrono::NaiveDate,
}

/// Input for updating an account.
#[derive(Debug, Clone, Default)]
pub struct UpdateAccountInput {
    /// New display name.
    pub name: Option<String>,
    /// New account number.
    pub account_number: Option<Option<String>>,
    /// New active flag.
    pub is_active: Option<bool>,
}

/// Input for committing a ledger transaction.
#[derive(Debug, Clone)]
pub struct CommitTransactionInput {
    /// The account to post to.
    pub account_id: Uuid,
    /// Transaction kind.
    pub kind: TransactionKind,
    /// Positive magnitude.
    pub amount: Decimal,
    /// Sign for adjustment transactions.
    pub direction: AdjustmentDirection,
    /// Human-readable description.
    pub description: String,
    /// Who created the entry.
    pub created_by: String,
}

/// Account repository for CRUD and ledger operations.
#[derive(Debug, Clone)]
pub struct AccountRepository {
    db: DatabaseConnection,
}

/// Projects the ledger-relevant fields out of an account row.
pub(crate) fn account_state(account: &accounts::Model) -> AccountState {
    AccountState {
        id: account.id,
        is_active: account.is_active,
        current_balance: account.current_balance,
    }
}

impl AccountRepository {
    /// Creates a new account repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an account with its opening balance.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn create_account(
        &self,
        input: CreateAccountInput,
    ) -> Result<accounts::Model, AccountError> {
        let now = Utc::now().into();

        let account = accounts::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name),
            kind: Set(input.kind.into()),
            account_number: Set(input.account_number),
            currency: Set(input.currency),
            initial_balance: Set(input.initial_balance),
            initial_balance_date: Set(input.initial_balance_date),
            current_balance: Set(input.initial_balance),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
        };

        Ok(account.insert(&self.db).await?)
    }

    /// Lists accounts with optional filters, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_accounts(
        &self,
        filter: AccountFilter,
    ) -> Result<Vec<accounts::Model>, AccountError> {
        let mut query = accounts::Entity::find();

        if let Some(kind) = filter.kind {
            let kind: crate::entities::sea_orm_active_enums::AccountKind = kind.into();
            query = query.filter(accounts::Column::Kind.eq(kind));
        }
        if let Some(is_active) = filter.is_active {
            query = query.filter(accounts::Column::IsActive.eq(is_active));
        }

        Ok(query
            .order_by_desc(accounts::Column::CreatedAt)
            .all(&self.db)
            .await?)
    }

    /// Finds an account by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_account(&self, id: Uuid) -> Result<Option<accounts::Model>, AccountError> {
        Ok(accounts::Entity::find_by_id(id).one(&self.db).await?)
    }

    /// Updates an account's mutable fields.
    ///
    /// Balances are never touched here; they change only through
    /// [`Self::commit_transaction`] and [`Self::reverse_transaction`].
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::AccountNotFound`] if the account is unknown.
    pub async fn update_account(
        &self,
        id: Uuid,
        input: UpdateAccountInput,
    ) -> Result<accounts::Model, AccountError> {
        let account = accounts::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(LedgerError::AccountNotFound(id))?;

        let mut active: accounts::ActiveModel = account.into();
        if let Some(name) = input.name {
            active.name = Set(name);
        }
        if let Some(account_number) = input.account_number {
            active.account_number = Set(account_number);
        }
        if let Some(is_active) = input.is_active {
            active.is_active = Set(is_active);
        }
        active.updated_at = Set(Utc::now().into());

        Ok(active.update(&self.db).await?)
    }

    /// Soft-deactivates an account.
    ///
    /// Accounts are never deleted while transactions reference them.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::AccountNotFound`] if the account is unknown.
    pub async fn deactivate_account(&self, id: Uuid) -> Result<(), AccountError> {
        let account = accounts::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(LedgerError::AccountNotFound(id))?;

        let mut active: accounts::ActiveModel = account.into();
        active.is_active = Set(false);
        active.updated_at = Set(Utc::now().into());
        active.update(&self.db).await?;

        Ok(())
    }

    /// Commits a ledger transaction and updates the account balance.
    ///
    /// Both writes happen inside one database transaction; validation
    /// failures leave no partial state behind.
    ///
    /// # Errors
    ///
    /// Returns a [`LedgerError`] for validation failures and a database
    /// error if persistence fails.
    pub async fn commit_transaction(
        &self,
        input: CommitTransactionInput,
    ) -> Result<(account_transactions::Model, accounts::Model), AccountError> {
        let txn = self.db.begin().await?;
        let result = commit_on_txn(&txn, input).await?;
        txn.commit().await?;
        Ok(result)
    }

    /// Reverses a transaction: recomputes the balance as if the entry never
    /// existed and deletes the record.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::TransactionNotFound`] for an unknown
    /// transaction and [`LedgerError::TransactionAccountMismatch`] when the
    /// entry belongs to a different account.
    pub async fn reverse_transaction(
        &self,
        account_id: Uuid,
        transaction_id: Uuid,
    ) -> Result<accounts::Model, AccountError> {
        let txn = self.db.begin().await?;

        let transaction = account_transactions::Entity::find_by_id(transaction_id)
            .one(&txn)
            .await?
            .ok_or(LedgerError::TransactionNotFound(transaction_id))?;
        if transaction.account_id != account_id {
            return Err(LedgerError::TransactionAccountMismatch {
                transaction_id,
                account_id,
            }
            .into());
        }

        let account = reverse_on_txn(&txn, &transaction).await?;
        txn.commit().await?;
        Ok(account)
    }

    /// Returns the account's balance and transaction count.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::AccountNotFound`] if the account is unknown.
    pub async fn get_summary(&self, account_id: Uuid) -> Result<AccountSummary, AccountError> {
        let account = accounts::Entity::find_by_id(account_id)
            .one(&self.db)
            .await?
            .ok_or(LedgerError::AccountNotFound(account_id))?;

        let transaction_count = account_transactions::Entity::find()
            .filter(account_transactions::Column::AccountId.eq(account_id))
            .count(&self.db)
            .await?;

        Ok(AccountSummary {
            total_balance: account.current_balance,
            transaction_count,
        })
    }

    /// Lists an account's transactions, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::AccountNotFound`] if the account is unknown.
    pub async fn list_transactions(
        &self,
        account_id: Uuid,
    ) -> Result<Vec<account_transactions::Model>, AccountError> {
        accounts::Entity::find_by_id(account_id)
            .one(&self.db)
            .await?
            .ok_or(LedgerError::AccountNotFound(account_id))?;

        Ok(account_transactions::Entity::find()
            .filter(account_transactions::Column::AccountId.eq(account_id))
            .order_by_desc(account_transactions::Column::CreatedAt)
            .all(&self.db)
            .await?)
    }
}

/// Commits a ledger transaction on an already-open database transaction.
///
/// Shared with the payment repository so a payment's linked ledger entry
/// commits in the same transactional boundary as the payment itself. The
/// account row is locked for the duration, serializing concurrent commits
/// against the same account.
pub(crate) async fn commit_on_txn(
    txn: &DatabaseTransaction,
    input: CommitTransactionInput,
) -> Result<(account_transactions::Model, accounts::Model), AccountError> {
    let account = accounts::Entity::find_by_id(input.account_id)
        .lock_exclusive()
        .one(txn)
        .await?
        .ok_or(LedgerError::AccountNotFound(input.account_id))?;

    let prepared = LedgerService::prepare_commit(
        &account_state(&account),
        input.kind,
        input.amount,
        input.direction,
    )?;

    let now = Utc::now().into();
    let transaction = account_transactions::ActiveModel {
        id: Set(Uuid::new_v4()),
        account_id: Set(input.account_id),
        kind: Set(input.kind.into()),
        amount: Set(input.amount),
        signed_amount: Set(prepared.signed_amount),
        description: Set(input.description),
        created_by: Set(input.created_by),
        new_balance: Set(prepared.new_balance),
        created_at: Set(now),
    };
    let transaction = transaction.insert(txn).await?;

    let mut active: accounts::ActiveModel = account.into();
    active.current_balance = Set(prepared.new_balance);
    active.updated_at = Set(now);
    let account = active.update(txn).await?;

    Ok((transaction, account))
}

/// Reverses a ledger transaction on an already-open database transaction.
pub(crate) async fn reverse_on_txn(
    txn: &DatabaseTransaction,
    transaction: &account_transactions::Model,
) -> Result<accounts::Model, AccountError> {
    let account = accounts::Entity::find_by_id(transaction.account_id)
        .lock_exclusive()
        .one(txn)
        .await?
        .ok_or(LedgerError::AccountNotFound(transaction.account_id))?;

    let new_balance =
        LedgerService::reversed_balance(account.current_balance, transaction.signed_amount);

    account_transactions::Entity::delete_by_id(transaction.id)
        .exec(txn)
        .await?;

    let mut active: accounts::ActiveModel = account.into();
    active.current_balance = Set(new_balance);
    active.updated_at = Set(Utc::now().into());
    Ok(active.update(txn).await?)
}
