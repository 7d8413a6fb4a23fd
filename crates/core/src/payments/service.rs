//! Payment service for reconciliation validation and derivation.
//!
//! The persistence layer re-reads the complete payment list of a document
//! inside its transaction and delegates to this service; nothing here keeps
//! state between calls.

use rust_decimal::Decimal;

use super::error::PaymentError;
use super::types::DocumentTotals;

/// Payment service for validating payments against a document.
pub struct PaymentService;

impl PaymentService {
    /// Validates a new payment and derives the document totals after it.
    ///
    /// The remaining balance is computed from the existing payment list, not
    /// read from a stored counter, so a stale `remaining_amount` column can
    /// never admit an overpayment.
    ///
    /// # Errors
    ///
    /// Returns [`PaymentError::InvalidAmount`] if `amount <= 0` and
    /// [`PaymentError::ExceedsRemaining`] if the amount is larger than the
    /// document's remaining balance.
    pub fn validate_new_payment(
        total: Decimal,
        existing_amounts: &[Decimal],
        amount: Decimal,
    ) -> Result<DocumentTotals, PaymentError> {
        if amount <= Decimal::ZERO {
            return Err(PaymentError::InvalidAmount(amount));
        }

        let current = DocumentTotals::derive(total, existing_amounts);
        if amount > current.remaining_amount {
            return Err(PaymentError::ExceedsRemaining {
                amount,
                remaining: current.remaining_amount,
            });
        }

        let mut amounts = existing_amounts.to_vec();
        amounts.push(amount);
        Ok(DocumentTotals::derive(total, &amounts))
    }

    /// Derives the document totals after a payment has been removed.
    ///
    /// `remaining_amounts` is the payment list without the deleted record;
    /// the status falls back to whatever the rule says for the new sum.
    #[must_use]
    pub fn totals_after_removal(total: Decimal, remaining_amounts: &[Decimal]) -> DocumentTotals {
        DocumentTotals::derive(total, remaining_amounts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payments::types::PaymentStatus;
    use rust_decimal_macros::dec;

    #[test]
    fn test_partial_then_full_payment() {
        // Sale total 1000.00: pay 400 -> parcial 400/600, pay 600 ->
        // pagado 1000/0, delete the first -> parcial 600/400.
        let total = dec!(1000.00);

        let after_first = PaymentService::validate_new_payment(total, &[], dec!(400.00)).unwrap();
        assert_eq!(after_first.paid_amount, dec!(400.00));
        assert_eq!(after_first.remaining_amount, dec!(600.00));
        assert_eq!(after_first.status, PaymentStatus::Parcial);

        let after_second =
            PaymentService::validate_new_payment(total, &[dec!(400.00)], dec!(600.00)).unwrap();
        assert_eq!(after_second.paid_amount, dec!(1000.00));
        assert_eq!(after_second.remaining_amount, dec!(0));
        assert_eq!(after_second.status, PaymentStatus::Pagado);

        let after_delete = PaymentService::totals_after_removal(total, &[dec!(600.00)]);
        assert_eq!(after_delete.paid_amount, dec!(600.00));
        assert_eq!(after_delete.remaining_amount, dec!(400.00));
        assert_eq!(after_delete.status, PaymentStatus::Parcial);
    }

    #[test]
    fn test_exceeds_remaining_rejected() {
        let result =
            PaymentService::validate_new_payment(dec!(1000.00), &[dec!(400.00)], dec!(700.00));
        assert!(matches!(
            result,
            Err(PaymentError::ExceedsRemaining {
                amount,
                remaining,
            }) if amount == dec!(700.00) && remaining == dec!(600.00)
        ));
    }

    #[test]
    fn test_exact_remaining_accepted() {
        let totals =
            PaymentService::validate_new_payment(dec!(1000.00), &[dec!(400.00)], dec!(600.00))
                .unwrap();
        assert_eq!(totals.status, PaymentStatus::Pagado);
    }

    #[test]
    fn test_zero_amount_rejected() {
        let result = PaymentService::validate_new_payment(dec!(100), &[], dec!(0));
        assert!(matches!(result, Err(PaymentError::InvalidAmount(_))));
    }

    #[test]
    fn test_negative_amount_rejected() {
        let result = PaymentService::validate_new_payment(dec!(100), &[], dec!(-5));
        assert!(matches!(result, Err(PaymentError::InvalidAmount(_))));
    }

    #[test]
    fn test_fully_paid_document_rejects_any_payment() {
        let result = PaymentService::validate_new_payment(
            dec!(500.00),
            &[dec!(250.00), dec!(250.00)],
            dec!(0.01),
        );
        assert!(matches!(result, Err(PaymentError::ExceedsRemaining { .. })));
    }

    #[test]
    fn test_delete_all_payments_back_to_pendiente() {
        let totals = PaymentService::totals_after_removal(dec!(750.00), &[]);
        assert_eq!(totals.paid_amount, dec!(0));
        assert_eq!(totals.remaining_amount, dec!(750.00));
        assert_eq!(totals.status, PaymentStatus::Pendiente);
    }
}
