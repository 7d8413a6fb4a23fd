//! Batch status derivation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Derived status of a production batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchStatus {
    /// Batch has stock and has not expired.
    Activo,
    /// Batch is past its expiration date.
    Vencido,
    /// Batch stock is exhausted.
    Agotado,
}

impl BatchStatus {
    /// Derives the status from stock and expiration date.
    ///
    /// Exhaustion wins over expiry: a batch with zero stock is `agotado`
    /// even when it is also past its expiration date. A batch expiring
    /// today is still `activo` (only `expiration_date < today` expires it).
    #[must_use]
    pub fn derive(current_stock: Decimal, expiration_date: NaiveDate, today: NaiveDate) -> Self {
        if current_stock == Decimal::ZERO {
            Self::Agotado
        } else if expiration_date < today {
            Self::Vencido
        } else {
            Self::Activo
        }
    }
}

/// Snapshot of the batch fields the inventory service needs.
#[derive(Debug, Clone)]
pub struct BatchState {
    /// The batch ID.
    pub id: Uuid,
    /// Stock the batch was created with.
    pub initial_stock: Decimal,
    /// Stock currently remaining.
    pub current_stock: Decimal,
    /// Expiration date of the lot.
    pub expiration_date: NaiveDate,
}

impl BatchState {
    /// Derives the batch status as of `today`.
    #[must_use]
    pub fn status(&self, today: NaiveDate) -> BatchStatus {
        BatchStatus::derive(self.current_stock, self.expiration_date, today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_derive_activo() {
        let today = date(2026, 7, 1);
        assert_eq!(
            BatchStatus::derive(dec!(10), date(2026, 8, 1), today),
            BatchStatus::Activo
        );
    }

    #[test]
    fn test_derive_vencido() {
        let today = date(2026, 7, 1);
        assert_eq!(
            BatchStatus::derive(dec!(10), date(2026, 6, 30), today),
            BatchStatus::Vencido
        );
    }

    #[test]
    fn test_derive_agotado() {
        let today = date(2026, 7, 1);
        assert_eq!(
            BatchStatus::derive(dec!(0), date(2026, 8, 1), today),
            BatchStatus::Agotado
        );
    }

    #[test]
    fn test_agotado_wins_over_vencido() {
        let today = date(2026, 7, 1);
        assert_eq!(
            BatchStatus::derive(dec!(0), date(2026, 1, 1), today),
            BatchStatus::Agotado
        );
    }

    #[test]
    fn test_expiring_today_is_still_activo() {
        let today = date(2026, 7, 1);
        assert_eq!(
            BatchStatus::derive(dec!(5), today, today),
            BatchStatus::Activo
        );
    }
}
