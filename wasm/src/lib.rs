//! WebAssembly module for the Inventory Analytics Platform
//!
//! Lets the browser dashboard run the aggregation engine client-side:
//! - Stock health classification
//! - Time-bucketed sales trends
//! - Product rankings
//! - Headline dashboard metrics

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;
use wasm_bindgen::prelude::*;

use inventory_analytics_engine::services::{
    DashboardMetricsReducer, ProductRankAggregator, SalesBucketAggregator, StockStatusClassifier,
};
use inventory_analytics_engine::EngineConfig;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Classify an inventory snapshot; records and per-product burn rates as JSON
#[wasm_bindgen]
pub fn classify_inventory(records_json: &str, burn_rates_json: &str) -> Result<String, JsValue> {
    let records: Vec<InventoryRecord> = serde_json::from_str(records_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid records JSON: {}", e)))?;
    let burn_rates: HashMap<Uuid, Decimal> = serde_json::from_str(burn_rates_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid burn rates JSON: {}", e)))?;

    let classifier = StockStatusClassifier::from_config(&EngineConfig::default());
    let insights = classifier.classify_all(&records, &burn_rates);
    serde_json::to_string(&insights).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Bucket sales into the grain of a time range ("7d", "30d", "90d")
#[wasm_bindgen]
pub fn bucket_sales(sales_json: &str, time_range: &str) -> Result<String, JsValue> {
    let sales: Vec<SaleRecord> = serde_json::from_str(sales_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid sales JSON: {}", e)))?;
    let range: TimeRange = time_range.parse().map_err(|e| JsValue::from_str(e))?;

    let aggregator = SalesBucketAggregator::from_config(&EngineConfig::default());
    let overview = aggregator.bucket(&sales, range);
    serde_json::to_string(&overview).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Rank products by volume ("top" or "bottom"), keeping `limit` entries
#[wasm_bindgen]
pub fn rank_products(
    window_json: &str,
    prior_window_json: Option<String>,
    direction: &str,
    limit: usize,
) -> Result<String, JsValue> {
    let window: Vec<SaleRecord> = serde_json::from_str(window_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid sales JSON: {}", e)))?;
    let prior_window: Option<Vec<SaleRecord>> = match prior_window_json {
        Some(json) => Some(
            serde_json::from_str(&json)
                .map_err(|e| JsValue::from_str(&format!("Invalid prior sales JSON: {}", e)))?,
        ),
        None => None,
    };
    let direction: RankDirection = direction.parse().map_err(|e| JsValue::from_str(e))?;

    let aggregator = ProductRankAggregator::new(limit);
    let ranking = aggregator.rank(&window, prior_window.as_deref(), direction);
    serde_json::to_string(&ranking).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Reduce inventory, sales, and a unit-price lookup to the headline metrics
#[wasm_bindgen]
pub fn reduce_dashboard(
    inventory_json: &str,
    sales_json: &str,
    unit_prices_json: &str,
    now_rfc3339: &str,
) -> Result<String, JsValue> {
    let inventory: Vec<InventoryRecord> = serde_json::from_str(inventory_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid inventory JSON: {}", e)))?;
    let sales: Vec<SaleRecord> = serde_json::from_str(sales_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid sales JSON: {}", e)))?;
    let unit_prices: HashMap<Uuid, Decimal> = serde_json::from_str(unit_prices_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid prices JSON: {}", e)))?;
    let now: DateTime<Utc> = DateTime::parse_from_rfc3339(now_rfc3339)
        .map_err(|e| JsValue::from_str(&format!("Invalid timestamp: {}", e)))?
        .with_timezone(&Utc);

    let reducer = DashboardMetricsReducer::from_config(&EngineConfig::default());
    let snapshot = reducer
        .reduce(&inventory, &sales, &unit_prices, now)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    serde_json::to_string(&snapshot).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Stock health for a single product
#[wasm_bindgen]
pub fn stock_status(current_stock: i64, reorder_point: i64) -> String {
    format!("{}", stock_status_for(current_stock, reorder_point))
}

/// Estimated days of stock remaining at a daily burn rate
#[wasm_bindgen]
pub fn days_of_stock_left(current_stock: i64, daily_burn_rate: f64) -> i64 {
    let rate = Decimal::try_from(daily_burn_rate).unwrap_or(Decimal::ZERO);
    estimated_days_left(current_stock, rate)
}
