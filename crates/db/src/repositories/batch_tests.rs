//! Tests for the pure batch repository helpers.
//!
//! These run on in-memory entity models; no database is involved.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

use comercio_core::inventory::BatchStatus;

use crate::entities::batches;
use crate::repositories::batch::{batch_state, stock_from_batches};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn mock_batch(initial: Decimal, current: Decimal, expiration: NaiveDate) -> batches::Model {
    let now = Utc::now().into();
    batches::Model {
        id: Uuid::new_v4(),
        product_id: Uuid::new_v4(),
        batch_number: "L-001".to_string(),
        unit: "pieza".to_string(),
        initial_stock: initial,
        current_stock: current,
        production_date: date(2026, 1, 1),
        expiration_date: expiration,
        cost: dec!(12.50),
        created_at: now,
        updated_at: now,
    }
}

#[test]
fn test_batch_state_projection() {
    let model = mock_batch(dec!(100), dec!(40), date(2026, 12, 1));
    let state = batch_state(&model);

    assert_eq!(state.id, model.id);
    assert_eq!(state.initial_stock, dec!(100));
    assert_eq!(state.current_stock, dec!(40));
    assert_eq!(state.expiration_date, model.expiration_date);
}

#[test]
fn test_batch_state_status_derivation() {
    let today = date(2026, 7, 1);

    let fresh = mock_batch(dec!(100), dec!(40), date(2026, 12, 1));
    assert_eq!(batch_state(&fresh).status(today), BatchStatus::Activo);

    let expired = mock_batch(dec!(100), dec!(40), date(2026, 6, 1));
    assert_eq!(batch_state(&expired).status(today), BatchStatus::Vencido);

    let exhausted = mock_batch(dec!(100), dec!(0), date(2026, 12, 1));
    assert_eq!(batch_state(&exhausted).status(today), BatchStatus::Agotado);
}

#[test]
fn test_stock_from_batches_counts_only_active() {
    let today = date(2026, 7, 1);
    let rows = vec![
        mock_batch(dec!(100), dec!(40), date(2026, 12, 1)), // activo
        mock_batch(dec!(100), dec!(25), date(2026, 6, 1)),  // vencido
        mock_batch(dec!(100), dec!(0), date(2026, 12, 1)),  // agotado
        mock_batch(dec!(50), dec!(10), date(2026, 8, 15)),  // activo
    ];

    assert_eq!(stock_from_batches(&rows, today), dec!(50));
}

#[test]
fn test_stock_from_batches_empty() {
    assert_eq!(
        stock_from_batches(&[], date(2026, 7, 1)),
        Decimal::ZERO
    );
}
