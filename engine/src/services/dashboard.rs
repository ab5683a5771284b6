//! Headline metric reduction for the dashboard cards

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, FixedOffset, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use shared::models::{
    stock_status_for, DashboardMetrics, InventoryRecord, SaleRecord, StockStatus,
};
use shared::validation::{sanitize_inventory, sanitize_sales, RecordAnomaly};

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};

/// Reduced metrics plus the anomalies found while sanitizing input
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub metrics: DashboardMetrics,
    pub anomalies: Vec<RecordAnomaly>,
}

/// Folds inventory and sales collections into the headline scalars
#[derive(Debug, Clone)]
pub struct DashboardMetricsReducer {
    utc_offset: FixedOffset,
}

impl DashboardMetricsReducer {
    pub fn new(utc_offset: FixedOffset) -> Self {
        Self { utc_offset }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.utc_offset())
    }

    /// Reduce the full inventory and sales collections to one snapshot.
    ///
    /// `now` defines "today" in the configured offset and is supplied by
    /// the caller so repeated invocations stay deterministic. A product
    /// without a unit price fails the whole reduction rather than
    /// understating total value.
    pub fn reduce(
        &self,
        inventory: &[InventoryRecord],
        sales: &[SaleRecord],
        unit_prices: &HashMap<Uuid, Decimal>,
        now: DateTime<Utc>,
    ) -> EngineResult<DashboardSnapshot> {
        let (inventory, mut anomalies) = sanitize_inventory(inventory);
        let (sales, sale_anomalies) = sanitize_sales(sales);
        anomalies.extend(sale_anomalies);
        if !anomalies.is_empty() {
            tracing::warn!(
                "clamped or skipped {} malformed records during reduction",
                anomalies.len()
            );
        }

        let mut seen: HashSet<Uuid> = HashSet::new();
        let mut low_stock_items = 0i64;
        let mut total_value = Decimal::ZERO;

        for record in &inventory {
            if !seen.insert(record.product_id) {
                continue;
            }
            if stock_status_for(record.current_stock, record.reorder_point) != StockStatus::Healthy
            {
                low_stock_items += 1;
            }
            let price = unit_prices
                .get(&record.product_id)
                .copied()
                .ok_or_else(|| EngineError::MissingPrice {
                    product_id: record.product_id,
                    product_name: record.product_name.clone(),
                })?;
            total_value += Decimal::from(record.current_stock) * price;
        }

        let today = now.with_timezone(&self.utc_offset).date_naive();
        let today_sales: Decimal = sales
            .iter()
            .filter(|sale| sale.sale_date.with_timezone(&self.utc_offset).date_naive() == today)
            .map(|sale| sale.total_amount)
            .sum();

        Ok(DashboardSnapshot {
            metrics: DashboardMetrics {
                total_products: seen.len() as i64,
                low_stock_items,
                total_value,
                today_sales,
            },
            anomalies,
        })
    }
}
