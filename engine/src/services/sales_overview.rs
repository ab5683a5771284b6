//! Time-bucketed sales trend aggregation

use std::collections::HashMap;

use chrono::FixedOffset;
use rust_decimal::Decimal;
use serde::Serialize;

use shared::models::{SaleRecord, SalesBucket, TimeRange};
use shared::validation::{sanitize_sales, RecordAnomaly};

use crate::config::EngineConfig;

/// Bucketed sales plus the anomalies found while sanitizing input
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SalesOverview {
    pub buckets: Vec<SalesBucket>,
    pub anomalies: Vec<RecordAnomaly>,
}

/// Groups sales transactions into time buckets sized to the requested range
#[derive(Debug, Clone)]
pub struct SalesBucketAggregator {
    utc_offset: FixedOffset,
}

impl SalesBucketAggregator {
    pub fn new(utc_offset: FixedOffset) -> Self {
        Self { utc_offset }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.utc_offset())
    }

    /// Bucket `sales` by the grain of `range`.
    ///
    /// Records must arrive pre-sorted ascending by `sale_date`; buckets are
    /// emitted in first-seen order, which then matches chronological
    /// presentation. Spans with no transactions produce no bucket; gap
    /// filling is the caller's concern.
    pub fn bucket(&self, sales: &[SaleRecord], range: TimeRange) -> SalesOverview {
        let (clean, anomalies) = sanitize_sales(sales);
        if !anomalies.is_empty() {
            tracing::warn!("skipped {} malformed sales records", anomalies.len());
        }

        let mut buckets: Vec<SalesBucket> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for sale in &clean {
            let local_date = sale.sale_date.with_timezone(&self.utc_offset).date_naive();
            let label = range.bucket_label(local_date);
            let slot = *index.entry(label.clone()).or_insert_with(|| {
                buckets.push(SalesBucket {
                    label,
                    revenue: Decimal::ZERO,
                    units: 0,
                });
                buckets.len() - 1
            });
            buckets[slot].revenue += sale.total_amount;
            buckets[slot].units += sale.quantity;
        }

        tracing::debug!(
            "bucketed {} sales into {} buckets for {}",
            clean.len(),
            buckets.len(),
            range.as_str()
        );

        SalesOverview { buckets, anomalies }
    }
}
