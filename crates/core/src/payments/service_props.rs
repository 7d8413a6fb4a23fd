//! Property-based tests for payment reconciliation.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::service::PaymentService;
use super::types::{DocumentTotals, PaymentStatus};

/// Strategy for document totals.
fn total_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000i64).prop_map(|n| Decimal::new(n, 2))
}

/// Strategy for payment attempts as a fraction of some base magnitude.
fn attempts_strategy(max_len: usize) -> impl Strategy<Value = Vec<Decimal>> {
    prop::collection::vec((1i64..5_000_000i64).prop_map(|n| Decimal::new(n, 2)), 0..=max_len)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// paid == sum of accepted payments and status matches the derivation
    /// rule, no matter which payment attempts are accepted or rejected.
    #[test]
    fn prop_paid_is_sum_and_status_matches(
        total in total_strategy(),
        attempts in attempts_strategy(20),
    ) {
        let mut accepted: Vec<Decimal> = Vec::new();

        for amount in attempts {
            match PaymentService::validate_new_payment(total, &accepted, amount) {
                Ok(totals) => {
                    accepted.push(amount);
                    let paid: Decimal = accepted.iter().copied().sum();
                    prop_assert_eq!(totals.paid_amount, paid);
                    prop_assert_eq!(totals.remaining_amount, total - paid);
                    prop_assert!(totals.remaining_amount >= Decimal::ZERO);

                    let expected_status = if paid <= Decimal::ZERO {
                        PaymentStatus::Pendiente
                    } else if paid < total {
                        PaymentStatus::Parcial
                    } else {
                        PaymentStatus::Pagado
                    };
                    prop_assert_eq!(totals.status, expected_status);
                }
                Err(_) => {
                    // Rejection must leave nothing behind: re-deriving from
                    // the accepted list is unchanged.
                    let paid: Decimal = accepted.iter().copied().sum();
                    let totals = DocumentTotals::derive(total, &accepted);
                    prop_assert_eq!(totals.paid_amount, paid);
                }
            }
        }
    }

    /// A payment that was just accepted can be removed again, restoring the
    /// exact totals the document had before it.
    #[test]
    fn prop_delete_after_add_round_trips(
        total in total_strategy(),
        attempts in attempts_strategy(10),
    ) {
        let mut accepted: Vec<Decimal> = Vec::new();

        for amount in attempts {
            let before = DocumentTotals::derive(total, &accepted);
            if PaymentService::validate_new_payment(total, &accepted, amount).is_ok() {
                accepted.push(amount);
                accepted.pop();
                let after_delete = PaymentService::totals_after_removal(total, &accepted);
                prop_assert_eq!(after_delete, before);
            }
        }
    }

    /// The service never accepts a payment that would push paid over total.
    #[test]
    fn prop_never_overpays(
        total in total_strategy(),
        attempts in attempts_strategy(20),
    ) {
        let mut accepted: Vec<Decimal> = Vec::new();

        for amount in attempts {
            if let Ok(totals) = PaymentService::validate_new_payment(total, &accepted, amount) {
                accepted.push(amount);
                prop_assert!(totals.paid_amount <= total);
            }
        }
    }
}
