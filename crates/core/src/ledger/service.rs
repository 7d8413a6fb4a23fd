//! Ledger service for transaction validation and balance computation.
//!
//! Pure business logic with no database dependencies: the persistence layer
//! loads an [`AccountState`] snapshot, asks this service what the resulting
//! balance is, and stores transaction row and account update atomically.

use rust_decimal::Decimal;

use super::error::LedgerError;
use super::types::{AccountState, AdjustmentDirection, PreparedCommit, TransactionKind};

/// Ledger service for commit/reversal arithmetic.
pub struct LedgerService;

impl LedgerService {
    /// Validates a transaction commit and computes the resulting balance.
    ///
    /// Validation happens before any mutation: the amount must be a positive
    /// magnitude and the account must be active. The returned
    /// [`PreparedCommit`] carries the signed delta and the `new_balance`
    /// snapshot to persist on the transaction row.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InvalidAmount`] if `amount <= 0` and
    /// [`LedgerError::AccountInactive`] if the account is deactivated.
    pub fn prepare_commit(
        account: &AccountState,
        kind: TransactionKind,
        amount: Decimal,
        direction: AdjustmentDirection,
    ) -> Result<PreparedCommit, LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::InvalidAmount(amount));
        }
        if !account.is_active {
            return Err(LedgerError::AccountInactive(account.id));
        }

        let signed_amount = kind.signed_amount(amount, direction);
        Ok(PreparedCommit {
            signed_amount,
            new_balance: account.current_balance + signed_amount,
        })
    }

    /// Computes the account balance after a transaction is reversed.
    ///
    /// Reversal recomputes the balance as if the entry never existed:
    /// the signed delta is subtracted from the current balance. The ledger
    /// is maintained incrementally; no full replay happens on reads.
    #[must_use]
    pub fn reversed_balance(current_balance: Decimal, signed_amount: Decimal) -> Decimal {
        current_balance - signed_amount
    }

    /// Replays a stream of signed deltas from an initial balance.
    ///
    /// Returns the running balance after each delta. Replaying the committed
    /// transactions of an account must reproduce every stored `new_balance`
    /// snapshot; this is the reconstruction invariant the property tests
    /// assert.
    #[must_use]
    pub fn replay(initial_balance: Decimal, signed_amounts: &[Decimal]) -> Vec<Decimal> {
        let mut balance = initial_balance;
        signed_amounts
            .iter()
            .map(|delta| {
                balance += *delta;
                balance
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn active_account(balance: Decimal) -> AccountState {
        AccountState {
            id: Uuid::new_v4(),
            is_active: true,
            current_balance: balance,
        }
    }

    #[test]
    fn test_commit_deposit() {
        let account = active_account(dec!(1000.00));
        let prepared = LedgerService::prepare_commit(
            &account,
            TransactionKind::Deposit,
            dec!(500.00),
            AdjustmentDirection::default(),
        )
        .unwrap();

        assert_eq!(prepared.signed_amount, dec!(500.00));
        assert_eq!(prepared.new_balance, dec!(1500.00));
    }

    #[test]
    fn test_commit_withdrawal() {
        let account = active_account(dec!(1500.00));
        let prepared = LedgerService::prepare_commit(
            &account,
            TransactionKind::Withdrawal,
            dec!(300.00),
            AdjustmentDirection::default(),
        )
        .unwrap();

        assert_eq!(prepared.signed_amount, dec!(-300.00));
        assert_eq!(prepared.new_balance, dec!(1200.00));
    }

    #[test]
    fn test_commit_zero_amount_rejected() {
        let account = active_account(dec!(100));
        let result = LedgerService::prepare_commit(
            &account,
            TransactionKind::Deposit,
            dec!(0),
            AdjustmentDirection::default(),
        );
        assert!(matches!(result, Err(LedgerError::InvalidAmount(_))));
    }

    #[test]
    fn test_commit_negative_amount_rejected() {
        let account = active_account(dec!(100));
        let result = LedgerService::prepare_commit(
            &account,
            TransactionKind::Deposit,
            dec!(-10),
            AdjustmentDirection::default(),
        );
        assert!(matches!(result, Err(LedgerError::InvalidAmount(_))));
    }

    #[test]
    fn test_commit_inactive_account_rejected() {
        let account = AccountState {
            id: Uuid::new_v4(),
            is_active: false,
            current_balance: dec!(100),
        };
        let result = LedgerService::prepare_commit(
            &account,
            TransactionKind::Deposit,
            dec!(10),
            AdjustmentDirection::default(),
        );
        assert!(matches!(result, Err(LedgerError::AccountInactive(_))));
    }

    #[test]
    fn test_deposit_withdraw_reverse_sequence() {
        // Initial 1000.00; deposit 500.00 -> 1500.00; withdraw 300.00 ->
        // 1200.00; reverse the withdrawal -> 1500.00.
        let mut account = active_account(dec!(1000.00));

        let deposit = LedgerService::prepare_commit(
            &account,
            TransactionKind::Deposit,
            dec!(500.00),
            AdjustmentDirection::default(),
        )
        .unwrap();
        account.current_balance = deposit.new_balance;
        assert_eq!(account.current_balance, dec!(1500.00));

        let withdrawal = LedgerService::prepare_commit(
            &account,
            TransactionKind::Withdrawal,
            dec!(300.00),
            AdjustmentDirection::default(),
        )
        .unwrap();
        account.current_balance = withdrawal.new_balance;
        assert_eq!(account.current_balance, dec!(1200.00));

        account.current_balance =
            LedgerService::reversed_balance(account.current_balance, withdrawal.signed_amount);
        assert_eq!(account.current_balance, dec!(1500.00));
    }

    #[test]
    fn test_replay_reproduces_balances() {
        let balances = LedgerService::replay(
            dec!(1000.00),
            &[dec!(500.00), dec!(-300.00), dec!(25.50)],
        );
        assert_eq!(balances, vec![dec!(1500.00), dec!(1200.00), dec!(1225.50)]);
    }

    #[test]
    fn test_replay_empty_stream() {
        assert!(LedgerService::replay(dec!(42), &[]).is_empty());
    }
}
