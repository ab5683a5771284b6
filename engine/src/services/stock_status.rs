//! Stock health classification and depletion estimates

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use shared::models::{
    estimated_days_left, stock_status_for, InventoryRecord, SaleRecord, StockInsight,
};
use shared::types::TimeWindow;
use shared::validation::{sanitize_inventory, RecordAnomaly};

use crate::config::EngineConfig;

/// Classified stock insights plus the anomalies found while sanitizing input
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InventoryInsights {
    pub items: Vec<StockInsight>,
    pub anomalies: Vec<RecordAnomaly>,
}

/// Maps inventory records to stock health and depletion estimates
#[derive(Debug, Clone)]
pub struct StockStatusClassifier {
    default_burn_rate: Decimal,
}

impl StockStatusClassifier {
    /// Create a classifier with an explicit default daily burn rate
    pub fn new(default_burn_rate: Decimal) -> Self {
        Self { default_burn_rate }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.default_daily_burn_rate)
    }

    /// Classify a single record.
    ///
    /// Negative stock is clamped to zero before classification.
    /// `daily_burn_rate` falls back to the configured default when absent
    /// or non-positive.
    pub fn classify(
        &self,
        record: &InventoryRecord,
        daily_burn_rate: Option<Decimal>,
    ) -> StockInsight {
        let rate = daily_burn_rate
            .filter(|r| *r > Decimal::ZERO)
            .unwrap_or(self.default_burn_rate);
        let current_stock = record.current_stock.max(0);

        StockInsight {
            product_name: record.product_name.clone(),
            current_stock,
            max_stock: record.max_stock,
            reorder_point: record.reorder_point,
            status: stock_status_for(current_stock, record.reorder_point),
            estimated_days_left: estimated_days_left(current_stock, rate),
        }
    }

    /// Classify a full inventory snapshot.
    ///
    /// Rows are sanitized first and the anomalies returned so the caller
    /// can surface them. Per-product burn rates (e.g. from
    /// [`sales_velocity`]) override the configured default.
    pub fn classify_all(
        &self,
        records: &[InventoryRecord],
        burn_rates: &HashMap<Uuid, Decimal>,
    ) -> InventoryInsights {
        let (clean, anomalies) = sanitize_inventory(records);
        if !anomalies.is_empty() {
            tracing::warn!(
                "clamped or skipped {} malformed inventory records",
                anomalies.len()
            );
        }

        let items = clean
            .iter()
            .map(|record| self.classify(record, burn_rates.get(&record.product_id).copied()))
            .collect();

        InventoryInsights { items, anomalies }
    }
}

/// Average units sold per day per product over `window`, for use as a
/// per-product burn rate. Products with no sales in the window are absent
/// from the result.
pub fn sales_velocity(sales: &[SaleRecord], window: &TimeWindow) -> HashMap<Uuid, Decimal> {
    let days = window.num_days();
    let mut units: HashMap<Uuid, i64> = HashMap::new();
    for sale in sales {
        if window.contains(sale.sale_date) && sale.quantity > 0 {
            *units.entry(sale.product_id).or_insert(0) += sale.quantity;
        }
    }

    units
        .into_iter()
        .map(|(product_id, total)| (product_id, Decimal::from(total) / Decimal::from(days)))
        .collect()
}
