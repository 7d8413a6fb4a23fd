//! Ledger domain types for account balance tracking.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account kinds supported by the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    /// Bank account.
    Bank,
    /// Cash drawer / petty cash.
    Cash,
    /// Card (credit/debit) account.
    Card,
}

/// Transaction kinds and their sign conventions.
///
/// Deposits and received payments increase the balance; withdrawals and
/// issued refunds decrease it. Adjustments carry a caller-specified sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money placed into the account.
    Deposit,
    /// Money taken out of the account.
    Withdrawal,
    /// Payment received against a document.
    Payment,
    /// Refund issued to a counterparty.
    Refund,
    /// Manual correction; sign chosen by the caller.
    Adjustment,
}

/// Direction of an adjustment transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdjustmentDirection {
    /// Adjustment adds to the balance.
    #[default]
    Increase,
    /// Adjustment subtracts from the balance.
    Decrease,
}

impl TransactionKind {
    /// Applies the sign convention to a positive magnitude.
    ///
    /// The `direction` argument only matters for [`Self::Adjustment`];
    /// every other kind has a fixed sign.
    #[must_use]
    pub fn signed_amount(self, amount: Decimal, direction: AdjustmentDirection) -> Decimal {
        match self {
            Self::Deposit | Self::Payment => amount,
            Self::Withdrawal | Self::Refund => -amount,
            Self::Adjustment => match direction {
                AdjustmentDirection::Increase => amount,
                AdjustmentDirection::Decrease => -amount,
            },
        }
    }
}

/// Snapshot of the account fields the ledger needs for validation.
#[derive(Debug, Clone)]
pub struct AccountState {
    /// The account ID.
    pub id: Uuid,
    /// Whether the account is active.
    pub is_active: bool,
    /// The stored balance before the operation.
    pub current_balance: Decimal,
}

/// Result of preparing a transaction commit.
///
/// The signed delta and the balance the account will hold immediately after
/// the entry; both are persisted atomically with the transaction row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreparedCommit {
    /// The signed delta applied to the account.
    pub signed_amount: Decimal,
    /// The account balance after applying the delta.
    pub new_balance: Decimal,
}

/// Aggregate figures for an account.
#[derive(Debug, Clone, Serialize)]
pub struct AccountSummary {
    /// The account's current balance.
    pub total_balance: Decimal,
    /// Number of committed transactions on the account.
    pub transaction_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_sign_convention() {
        let dir = AdjustmentDirection::default();
        assert_eq!(
            TransactionKind::Deposit.signed_amount(dec!(100), dir),
            dec!(100)
        );
        assert_eq!(
            TransactionKind::Payment.signed_amount(dec!(100), dir),
            dec!(100)
        );
        assert_eq!(
            TransactionKind::Withdrawal.signed_amount(dec!(100), dir),
            dec!(-100)
        );
        assert_eq!(
            TransactionKind::Refund.signed_amount(dec!(100), dir),
            dec!(-100)
        );
    }

    #[test]
    fn test_adjustment_direction() {
        assert_eq!(
            TransactionKind::Adjustment.signed_amount(dec!(50), AdjustmentDirection::Increase),
            dec!(50)
        );
        assert_eq!(
            TransactionKind::Adjustment.signed_amount(dec!(50), AdjustmentDirection::Decrease),
            dec!(-50)
        );
    }

    #[test]
    fn test_direction_ignored_for_fixed_kinds() {
        // Direction must not flip a kind with a fixed sign.
        assert_eq!(
            TransactionKind::Deposit.signed_amount(dec!(10), AdjustmentDirection::Decrease),
            dec!(10)
        );
        assert_eq!(
            TransactionKind::Refund.signed_amount(dec!(10), AdjustmentDirection::Increase),
            dec!(-10)
        );
    }
}
