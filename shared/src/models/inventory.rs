//! Inventory records and derived stock insights

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stock-level snapshot for a single product
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRecord {
    pub product_id: Uuid,
    pub product_name: String,
    pub current_stock: i64,
    pub max_stock: i64,
    /// Stock threshold below which restocking is recommended
    pub reorder_point: i64,
}

/// Stock health classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    Healthy,
    Low,
    Critical,
}

impl StockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::Healthy => "healthy",
            StockStatus::Low => "low",
            StockStatus::Critical => "critical",
        }
    }
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Derived stock health view for a single product
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StockInsight {
    pub product_name: String,
    pub current_stock: i64,
    pub max_stock: i64,
    pub reorder_point: i64,
    pub status: StockStatus,
    /// Estimated days until depletion, always at least 1
    pub estimated_days_left: i64,
}

impl StockInsight {
    /// Fill ratio as a percentage, for progress displays
    pub fn stock_percent(&self) -> Decimal {
        if self.max_stock <= 0 {
            return Decimal::ZERO;
        }
        Decimal::from(self.current_stock) / Decimal::from(self.max_stock) * Decimal::from(100)
    }
}

/// Classify stock health from the current level and reorder point.
///
/// `critical` at or below half the reorder point, `low` at or below the
/// reorder point, `healthy` above it. Doubling the current level keeps the
/// half-point comparison exact in integers.
pub fn stock_status_for(current_stock: i64, reorder_point: i64) -> StockStatus {
    let current = current_stock.max(0);
    if current * 2 <= reorder_point {
        StockStatus::Critical
    } else if current <= reorder_point {
        StockStatus::Low
    } else {
        StockStatus::Healthy
    }
}

/// Estimated days of stock remaining at the given daily burn rate, floored
/// and clamped to at least one day. A non-positive rate degrades to 1.
pub fn estimated_days_left(current_stock: i64, daily_burn_rate: Decimal) -> i64 {
    let current = current_stock.max(0);
    if daily_burn_rate <= Decimal::ZERO {
        return 1;
    }
    let days = (Decimal::from(current) / daily_burn_rate).floor();
    days.to_i64().unwrap_or(i64::MAX).max(1)
}
