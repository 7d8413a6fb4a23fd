//! Payment reconciliation domain types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ledger::TransactionKind;

/// Payment status of a sale or purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    /// No payment received yet.
    Pendiente,
    /// Partially paid.
    Parcial,
    /// Fully paid.
    Pagado,
}

/// Which document table a payment belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// Outgoing sale (money received).
    Sale,
    /// Incoming purchase (money disbursed).
    Purchase,
}

impl DocumentKind {
    /// The ledger transaction kind a payment on this document produces.
    ///
    /// A sale payment is money received (balance +); a purchase payment is
    /// a disbursement (balance -).
    #[must_use]
    pub const fn ledger_kind(self) -> TransactionKind {
        match self {
            Self::Sale => TransactionKind::Payment,
            Self::Purchase => TransactionKind::Withdrawal,
        }
    }
}

/// The derived payment fields of a document.
///
/// Always produced by [`DocumentTotals::derive`] from the complete payment
/// list; the triple is stored on the document but never adjusted
/// incrementally, so deletions cannot cause drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentTotals {
    /// Sum of all payment amounts.
    pub paid_amount: Decimal,
    /// `total - paid_amount`.
    pub remaining_amount: Decimal,
    /// Derived payment status.
    pub status: PaymentStatus,
}

impl DocumentTotals {
    /// Derives paid/remaining/status from a document total and its payments.
    ///
    /// Status rule: zero paid is `pendiente`, anything strictly between
    /// zero and the total is `parcial`, and a paid sum reaching the total
    /// is `pagado`. Validation keeps `paid_amount <= total`, so
    /// `remaining_amount` never goes negative in practice.
    #[must_use]
    pub fn derive(total: Decimal, payment_amounts: &[Decimal]) -> Self {
        let paid_amount: Decimal = payment_amounts.iter().copied().sum();
        let status = if paid_amount <= Decimal::ZERO {
            PaymentStatus::Pendiente
        } else if paid_amount < total {
            PaymentStatus::Parcial
        } else {
            PaymentStatus::Pagado
        };

        Self {
            paid_amount,
            remaining_amount: total - paid_amount,
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case::no_payments(dec!(1000.00), vec![], dec!(0), dec!(1000.00), PaymentStatus::Pendiente)]
    #[case::partial(dec!(1000.00), vec![dec!(400.00)], dec!(400.00), dec!(600.00), PaymentStatus::Parcial)]
    #[case::paid_exactly(
        dec!(1000.00),
        vec![dec!(400.00), dec!(600.00)],
        dec!(1000.00),
        dec!(0),
        PaymentStatus::Pagado
    )]
    #[case::one_cent_short(dec!(100.00), vec![dec!(99.99)], dec!(99.99), dec!(0.01), PaymentStatus::Parcial)]
    #[case::one_cent_paid(dec!(100.00), vec![dec!(0.01)], dec!(0.01), dec!(99.99), PaymentStatus::Parcial)]
    fn test_derive_table(
        #[case] total: Decimal,
        #[case] amounts: Vec<Decimal>,
        #[case] paid: Decimal,
        #[case] remaining: Decimal,
        #[case] status: PaymentStatus,
    ) {
        let totals = DocumentTotals::derive(total, &amounts);
        assert_eq!(totals.paid_amount, paid);
        assert_eq!(totals.remaining_amount, remaining);
        assert_eq!(totals.status, status);
    }

    #[test]
    fn test_derive_zero_total_stays_pendiente() {
        // A zero-total document with no payments is still pendiente.
        let totals = DocumentTotals::derive(dec!(0), &[]);
        assert_eq!(totals.status, PaymentStatus::Pendiente);
    }

    #[test]
    fn test_ledger_kind_mapping() {
        assert_eq!(DocumentKind::Sale.ledger_kind(), TransactionKind::Payment);
        assert_eq!(
            DocumentKind::Purchase.ledger_kind(),
            TransactionKind::Withdrawal
        );
    }
}
