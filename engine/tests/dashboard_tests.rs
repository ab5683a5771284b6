//! Dashboard metrics reduction tests
//!
//! Tests for the headline scalars including:
//! - Distinct product counting and low-stock tallies
//! - Total value against the unit-price lookup
//! - Today's revenue in the configured offset

use std::collections::HashMap;

use chrono::{DateTime, FixedOffset, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;
use uuid::Uuid;

use inventory_analytics_engine::services::dashboard::DashboardMetricsReducer;
use inventory_analytics_engine::{EngineConfig, EngineError};
use shared::models::{InventoryRecord, SaleRecord};

// Helper to create Decimal from string
fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn ts(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
}

fn record(product_id: Uuid, name: &str, current: i64, reorder: i64) -> InventoryRecord {
    InventoryRecord {
        product_id,
        product_name: name.to_string(),
        current_stock: current,
        max_stock: 1000,
        reorder_point: reorder,
    }
}

fn sale_at(amount: &str, date: DateTime<Utc>) -> SaleRecord {
    SaleRecord {
        product_id: Uuid::new_v4(),
        product_name: "Widget".to_string(),
        quantity: 1,
        total_amount: dec(amount),
        sale_date: date,
    }
}

fn reducer() -> DashboardMetricsReducer {
    DashboardMetricsReducer::from_config(&EngineConfig::default())
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// Counts, low-stock tally, value, and today's revenue in one pass
    #[test]
    fn test_full_reduction() {
        let healthy = Uuid::new_v4();
        let low = Uuid::new_v4();
        let critical = Uuid::new_v4();

        let inventory = vec![
            record(healthy, "Wireless Headphones", 45, 20),
            record(low, "Smart Watch", 15, 25),
            record(critical, "Bluetooth Speaker", 7, 15),
        ];

        let mut prices = HashMap::new();
        prices.insert(healthy, dec("10"));
        prices.insert(low, dec("100"));
        prices.insert(critical, dec("2"));

        let now = ts("2024-06-04T12:00:00Z");
        let sales = vec![
            sale_at("120", ts("2024-06-04T09:30:00Z")),
            sale_at("80", ts("2024-06-04T18:00:00Z")),
            sale_at("999", ts("2024-06-03T18:00:00Z")),
        ];

        let snapshot = reducer().reduce(&inventory, &sales, &prices, now).unwrap();

        assert_eq!(snapshot.metrics.total_products, 3);
        assert_eq!(snapshot.metrics.low_stock_items, 2);
        // 45*10 + 15*100 + 7*2
        assert_eq!(snapshot.metrics.total_value, dec("1964"));
        assert_eq!(snapshot.metrics.today_sales, dec("200"));
        assert!(snapshot.anomalies.is_empty());
    }

    /// A product appearing twice is counted and valued once
    #[test]
    fn test_duplicate_product_counted_once() {
        let product = Uuid::new_v4();
        let inventory = vec![
            record(product, "Widget", 10, 2),
            record(product, "Widget", 10, 2),
        ];
        let mut prices = HashMap::new();
        prices.insert(product, dec("5"));

        let snapshot = reducer()
            .reduce(&inventory, &[], &prices, ts("2024-06-04T12:00:00Z"))
            .unwrap();

        assert_eq!(snapshot.metrics.total_products, 1);
        assert_eq!(snapshot.metrics.total_value, dec("50"));
    }

    /// A missing unit price fails the reduction instead of silently
    /// understating total value
    #[test]
    fn test_missing_price_is_fatal() {
        let priced = Uuid::new_v4();
        let unpriced = Uuid::new_v4();
        let inventory = vec![
            record(priced, "Widget", 10, 2),
            record(unpriced, "Gadget", 10, 2),
        ];
        let mut prices = HashMap::new();
        prices.insert(priced, dec("5"));

        let result = reducer().reduce(&inventory, &[], &prices, ts("2024-06-04T12:00:00Z"));

        match result {
            Err(EngineError::MissingPrice { product_id, .. }) => {
                assert_eq!(product_id, unpriced);
            }
            other => panic!("expected MissingPrice, got {:?}", other.map(|s| s.metrics)),
        }
    }

    /// "Today" follows the configured offset, not UTC
    #[test]
    fn test_today_in_configured_offset() {
        // 19:30 UTC on June 3rd is June 4th at UTC+5:30
        let sales = vec![sale_at("150", ts("2024-06-03T19:30:00Z"))];
        let now = ts("2024-06-03T20:00:00Z");

        let utc = DashboardMetricsReducer::new(FixedOffset::east_opt(0).unwrap());
        let snapshot = utc.reduce(&[], &sales, &HashMap::new(), now).unwrap();
        assert_eq!(snapshot.metrics.today_sales, dec("150"));

        let ist = DashboardMetricsReducer::new(FixedOffset::east_opt(330 * 60).unwrap());
        let snapshot = ist.reduce(&[], &sales, &HashMap::new(), now).unwrap();
        // both the sale and "now" land on June 4th locally
        assert_eq!(snapshot.metrics.today_sales, dec("150"));

        let earlier_now = ts("2024-06-03T10:00:00Z");
        let snapshot = ist.reduce(&[], &sales, &HashMap::new(), earlier_now).unwrap();
        assert_eq!(snapshot.metrics.today_sales, dec("0"));
    }

    /// Clamped rows are valued at zero stock and still count as low
    #[test]
    fn test_negative_stock_contributes_zero_value() {
        let product = Uuid::new_v4();
        let inventory = vec![record(product, "Widget", -8, 10)];
        let mut prices = HashMap::new();
        prices.insert(product, dec("100"));

        let snapshot = reducer()
            .reduce(&inventory, &[], &prices, ts("2024-06-04T12:00:00Z"))
            .unwrap();

        assert_eq!(snapshot.metrics.total_value, dec("0"));
        assert_eq!(snapshot.metrics.low_stock_items, 1);
        assert_eq!(snapshot.anomalies.len(), 1);
    }

    /// Empty collections reduce to zeros, not an error
    #[test]
    fn test_empty_inputs() {
        let snapshot = reducer()
            .reduce(&[], &[], &HashMap::new(), ts("2024-06-04T12:00:00Z"))
            .unwrap();

        assert_eq!(snapshot.metrics.total_products, 0);
        assert_eq!(snapshot.metrics.low_stock_items, 0);
        assert_eq!(snapshot.metrics.total_value, Decimal::ZERO);
        assert_eq!(snapshot.metrics.today_sales, Decimal::ZERO);
    }

    /// Identical inputs and the same "now" produce identical output
    #[test]
    fn test_reduction_is_idempotent() {
        let product = Uuid::new_v4();
        let inventory = vec![record(product, "Widget", 30, 10)];
        let mut prices = HashMap::new();
        prices.insert(product, dec("7.50"));
        let sales = vec![sale_at("42", ts("2024-06-04T09:00:00Z"))];
        let now = ts("2024-06-04T12:00:00Z");

        let reducer = reducer();
        assert_eq!(
            reducer.reduce(&inventory, &sales, &prices, now).unwrap(),
            reducer.reduce(&inventory, &sales, &prices, now).unwrap()
        );
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    fn price_strategy() -> impl Strategy<Value = Decimal> {
        (1i64..=100_000i64).prop_map(|n| Decimal::new(n, 2))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Total value is the sum of clamped stock times unit price
        #[test]
        fn prop_total_value_matches_sum(
            rows in prop::collection::vec((-20i64..200, 0i64..50), 1..15),
            prices in prop::collection::vec(price_strategy(), 15)
        ) {
            let inventory: Vec<InventoryRecord> = rows
                .iter()
                .map(|(current, reorder)| record(Uuid::new_v4(), "Widget", *current, *reorder))
                .collect();

            let price_map: HashMap<Uuid, Decimal> = inventory
                .iter()
                .zip(prices.iter())
                .map(|(r, p)| (r.product_id, *p))
                .collect();

            let snapshot = reducer()
                .reduce(&inventory, &[], &price_map, ts("2024-06-04T12:00:00Z"))
                .unwrap();

            let expected: Decimal = inventory
                .iter()
                .map(|r| Decimal::from(r.current_stock.max(0)) * price_map[&r.product_id])
                .sum();

            prop_assert_eq!(snapshot.metrics.total_value, expected);
            prop_assert_eq!(snapshot.metrics.total_products, inventory.len() as i64);
        }

        /// Today's revenue never exceeds the revenue of all sales
        #[test]
        fn prop_today_sales_bounded(
            amounts in prop::collection::vec(0i64..10_000, 0..20),
            day_offsets in prop::collection::vec(0i64..5, 20)
        ) {
            let base = ts("2024-06-01T12:00:00Z");
            let sales: Vec<SaleRecord> = amounts
                .iter()
                .zip(day_offsets.iter())
                .map(|(amount, offset)| {
                    sale_at(&amount.to_string(), base + chrono::Duration::days(*offset))
                })
                .collect();

            let snapshot = reducer()
                .reduce(&[], &sales, &HashMap::new(), base)
                .unwrap();

            let total: Decimal = sales.iter().map(|s| s.total_amount).sum();
            prop_assert!(snapshot.metrics.today_sales <= total);
            prop_assert!(snapshot.metrics.today_sales >= Decimal::ZERO);
        }
    }
}
