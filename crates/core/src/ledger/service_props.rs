//! Property-based tests for the ledger service.

use proptest::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::service::LedgerService;
use super::types::{AccountState, AdjustmentDirection, TransactionKind};

/// Strategy for positive amounts with two decimal places.
fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000i64).prop_map(|n| Decimal::new(n, 2))
}

/// Strategy for a transaction kind together with an adjustment direction.
fn kind_strategy() -> impl Strategy<Value = (TransactionKind, AdjustmentDirection)> {
    let kinds = prop_oneof![
        Just(TransactionKind::Deposit),
        Just(TransactionKind::Withdrawal),
        Just(TransactionKind::Payment),
        Just(TransactionKind::Refund),
        Just(TransactionKind::Adjustment),
    ];
    let directions = prop_oneof![
        Just(AdjustmentDirection::Increase),
        Just(AdjustmentDirection::Decrease),
    ];
    (kinds, directions)
}

/// Strategy for a sequence of commits.
fn commit_sequence_strategy(
    max_len: usize,
) -> impl Strategy<Value = Vec<(TransactionKind, AdjustmentDirection, Decimal)>> {
    prop::collection::vec(
        (kind_strategy(), amount_strategy()).prop_map(|((k, d), a)| (k, d, a)),
        0..=max_len,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// After any sequence of commits, the balance equals the initial balance
    /// plus the sum of all signed deltas.
    #[test]
    fn prop_balance_equals_initial_plus_sum(
        initial in -1_000_000i64..1_000_000i64,
        commits in commit_sequence_strategy(30),
    ) {
        let initial = Decimal::new(initial, 2);
        let mut account = AccountState {
            id: Uuid::new_v4(),
            is_active: true,
            current_balance: initial,
        };
        let mut signed_sum = Decimal::ZERO;

        for (kind, direction, amount) in &commits {
            let prepared =
                LedgerService::prepare_commit(&account, *kind, *amount, *direction).unwrap();
            signed_sum += prepared.signed_amount;
            account.current_balance = prepared.new_balance;
        }

        prop_assert_eq!(account.current_balance, initial + signed_sum);
    }

    /// Reversing every committed transaction, in any order, restores the
    /// initial balance exactly.
    #[test]
    fn prop_reversals_restore_initial_balance(
        initial in -1_000_000i64..1_000_000i64,
        commits in commit_sequence_strategy(20),
        seed in any::<u64>(),
    ) {
        let initial = Decimal::new(initial, 2);
        let mut account = AccountState {
            id: Uuid::new_v4(),
            is_active: true,
            current_balance: initial,
        };
        let mut deltas = Vec::with_capacity(commits.len());

        for (kind, direction, amount) in &commits {
            let prepared =
                LedgerService::prepare_commit(&account, *kind, *amount, *direction).unwrap();
            deltas.push(prepared.signed_amount);
            account.current_balance = prepared.new_balance;
        }

        // Reverse in a pseudo-random order; summation does not care.
        let mut order: Vec<usize> = (0..deltas.len()).collect();
        if !order.is_empty() {
            let pivot = (seed as usize) % order.len();
            order.rotate_left(pivot);
        }
        for idx in order {
            account.current_balance =
                LedgerService::reversed_balance(account.current_balance, deltas[idx]);
        }

        prop_assert_eq!(account.current_balance, initial);
    }

    /// Replaying the signed deltas reproduces every stored balance snapshot.
    #[test]
    fn prop_replay_matches_snapshots(
        initial in -1_000_000i64..1_000_000i64,
        commits in commit_sequence_strategy(30),
    ) {
        let initial = Decimal::new(initial, 2);
        let mut account = AccountState {
            id: Uuid::new_v4(),
            is_active: true,
            current_balance: initial,
        };
        let mut deltas = Vec::with_capacity(commits.len());
        let mut snapshots = Vec::with_capacity(commits.len());

        for (kind, direction, amount) in &commits {
            let prepared =
                LedgerService::prepare_commit(&account, *kind, *amount, *direction).unwrap();
            deltas.push(prepared.signed_amount);
            snapshots.push(prepared.new_balance);
            account.current_balance = prepared.new_balance;
        }

        prop_assert_eq!(LedgerService::replay(initial, &deltas), snapshots);
    }

    /// The magnitude of a signed delta always equals the submitted amount.
    #[test]
    fn prop_signed_magnitude_preserved(
        (kind, direction) in kind_strategy(),
        amount in amount_strategy(),
    ) {
        let signed = kind.signed_amount(amount, direction);
        prop_assert_eq!(signed.abs(), amount);
    }
}
