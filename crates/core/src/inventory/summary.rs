//! Read-side inventory summary.
//!
//! Pure fold over the current product snapshot; recomputed on every call,
//! no persisted state.

use rust_decimal::Decimal;
use serde::Serialize;

/// The product fields the summary needs.
#[derive(Debug, Clone)]
pub struct ProductSnapshot {
    /// Current stock level (scalar or batch-derived).
    pub stock: Decimal,
    /// Low-stock threshold.
    pub min_stock: Decimal,
    /// Unit cost used for inventory valuation.
    pub cost: Decimal,
    /// Whether the product is active in the catalog.
    pub is_active: bool,
}

/// Summary counters over the product catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventorySummary {
    /// Number of active products.
    pub total_products: u64,
    /// Products with `0 < stock <= min_stock`.
    pub low_stock_count: u64,
    /// Products with zero stock.
    pub out_of_stock_count: u64,
    /// `sum(stock * cost)` over active products.
    pub total_value: Decimal,
}

/// Computes the inventory summary for the given snapshot.
///
/// Inactive products are excluded from every counter.
#[must_use]
pub fn summarize(products: &[ProductSnapshot]) -> InventorySummary {
    let mut summary = InventorySummary {
        total_products: 0,
        low_stock_count: 0,
        out_of_stock_count: 0,
        total_value: Decimal::ZERO,
    };

    for product in products.iter().filter(|p| p.is_active) {
        summary.total_products += 1;
        if product.stock == Decimal::ZERO {
            summary.out_of_stock_count += 1;
        } else if product.stock <= product.min_stock {
            summary.low_stock_count += 1;
        }
        summary.total_value += product.stock * product.cost;
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn product(stock: Decimal, min_stock: Decimal, cost: Decimal) -> ProductSnapshot {
        ProductSnapshot {
            stock,
            min_stock,
            cost,
            is_active: true,
        }
    }

    #[test]
    fn test_summarize_empty() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_products, 0);
        assert_eq!(summary.low_stock_count, 0);
        assert_eq!(summary.out_of_stock_count, 0);
        assert_eq!(summary.total_value, dec!(0));
    }

    #[test]
    fn test_summarize_counts_and_value() {
        let products = vec![
            product(dec!(10), dec!(5), dec!(2.50)),  // healthy
            product(dec!(3), dec!(5), dec!(1.00)),   // low stock
            product(dec!(0), dec!(5), dec!(4.00)),   // out of stock
        ];
        let summary = summarize(&products);
        assert_eq!(summary.total_products, 3);
        assert_eq!(summary.low_stock_count, 1);
        assert_eq!(summary.out_of_stock_count, 1);
        assert_eq!(summary.total_value, dec!(28.00)); // 25 + 3 + 0
    }

    #[test]
    fn test_stock_at_min_stock_is_low() {
        let summary = summarize(&[product(dec!(5), dec!(5), dec!(1))]);
        assert_eq!(summary.low_stock_count, 1);
        assert_eq!(summary.out_of_stock_count, 0);
    }

    #[test]
    fn test_out_of_stock_not_counted_as_low() {
        let summary = summarize(&[product(dec!(0), dec!(5), dec!(1))]);
        assert_eq!(summary.low_stock_count, 0);
        assert_eq!(summary.out_of_stock_count, 1);
    }

    #[test]
    fn test_inactive_products_excluded() {
        let mut inactive = product(dec!(10), dec!(5), dec!(3));
        inactive.is_active = false;
        let summary = summarize(&[inactive, product(dec!(2), dec!(5), dec!(1))]);
        assert_eq!(summary.total_products, 1);
        assert_eq!(summary.low_stock_count, 1);
        assert_eq!(summary.total_value, dec!(2));
    }
}
