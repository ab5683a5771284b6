//! Headline dashboard metrics

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Headline scalars for the dashboard metric cards
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    /// Distinct products with an inventory record
    pub total_products: i64,
    /// Products whose stock status is not healthy
    pub low_stock_items: i64,
    /// Current stock valued at unit prices, summed over all products
    pub total_value: Decimal,
    /// Revenue for the current calendar day
    pub today_sales: Decimal,
}
