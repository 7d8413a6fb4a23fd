//! Property-based tests for batch stock invariants.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::batch::{BatchState, BatchStatus};
use super::service::InventoryService;

/// A consume or restore attempt.
#[derive(Debug, Clone, Copy)]
enum Op {
    Consume(Decimal),
    Restore(Decimal),
}

/// Strategy for quantities with two decimal places.
fn quantity_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..50_000i64).prop_map(|n| Decimal::new(n, 2))
}

/// Strategy for a sequence of consume/restore attempts.
fn op_sequence_strategy(max_len: usize) -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(
        prop_oneof![
            quantity_strategy().prop_map(Op::Consume),
            quantity_strategy().prop_map(Op::Restore),
        ],
        0..=max_len,
    )
}

fn test_batch(initial: Decimal) -> BatchState {
    BatchState {
        id: Uuid::new_v4(),
        initial_stock: initial,
        current_stock: initial,
        expiration_date: NaiveDate::from_ymd_opt(2026, 12, 31).unwrap(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// `0 <= current_stock <= initial_stock` holds after every accepted
    /// operation, and a rejected operation leaves the stock untouched.
    #[test]
    fn prop_stock_stays_within_bounds(
        initial in (1i64..100_000i64).prop_map(|n| Decimal::new(n, 2)),
        ops in op_sequence_strategy(40),
    ) {
        let mut batch = test_batch(initial);

        for op in ops {
            let before = batch.current_stock;
            let result = match op {
                Op::Consume(q) => InventoryService::consume(&batch, q),
                Op::Restore(q) => InventoryService::restore(&batch, q),
            };
            match result {
                Ok(new_stock) => batch.current_stock = new_stock,
                Err(_) => prop_assert_eq!(batch.current_stock, before),
            }
            prop_assert!(batch.current_stock >= Decimal::ZERO);
            prop_assert!(batch.current_stock <= batch.initial_stock);
        }
    }

    /// Consume followed by an equal restore round-trips the stock exactly.
    #[test]
    fn prop_consume_restore_round_trips(
        initial in (1i64..100_000i64).prop_map(|n| Decimal::new(n, 2)),
        quantity in quantity_strategy(),
    ) {
        let batch = test_batch(initial);
        if let Ok(after_consume) = InventoryService::consume(&batch, quantity) {
            let consumed = BatchState {
                current_stock: after_consume,
                ..batch.clone()
            };
            let restored = InventoryService::restore(&consumed, quantity).unwrap();
            prop_assert_eq!(restored, batch.current_stock);
        }
    }

    /// Status derivation is consistent with the stock value: zero stock is
    /// always agotado, positive unexpired stock is always activo.
    #[test]
    fn prop_status_matches_stock(
        initial in (1i64..100_000i64).prop_map(|n| Decimal::new(n, 2)),
        ops in op_sequence_strategy(20),
    ) {
        let today = NaiveDate::from_ymd_opt(2026, 7, 1).unwrap();
        let mut batch = test_batch(initial);

        for op in ops {
            let result = match op {
                Op::Consume(q) => InventoryService::consume(&batch, q),
                Op::Restore(q) => InventoryService::restore(&batch, q),
            };
            if let Ok(new_stock) = result {
                batch.current_stock = new_stock;
            }
            let expected = if batch.current_stock == Decimal::ZERO {
                BatchStatus::Agotado
            } else {
                BatchStatus::Activo
            };
            prop_assert_eq!(batch.status(today), expected);
        }
    }
}
