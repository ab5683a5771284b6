//! Product ranking over a sales window

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use shared::models::{ProductPerformance, RankDirection, SaleRecord};
use shared::validation::{sanitize_sales, RecordAnomaly};

use crate::config::EngineConfig;

/// Ranked products plus the anomalies found while sanitizing input
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductRanking {
    pub entries: Vec<ProductPerformance>,
    pub anomalies: Vec<RecordAnomaly>,
}

/// Per-product accumulation in first-seen order
#[derive(Debug)]
struct ProductTotals {
    product_id: Uuid,
    product_name: String,
    sales_volume: i64,
    revenue: Decimal,
}

/// Groups sales by product and produces top-N / bottom-N views
#[derive(Debug, Clone)]
pub struct ProductRankAggregator {
    limit: usize,
}

impl ProductRankAggregator {
    /// Create an aggregator that keeps `limit` entries per ranking
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.rank_limit)
    }

    /// Rank products by unit volume over `window`.
    ///
    /// `prior_window` supplies the baseline for `change_percent`; without
    /// it (or for products absent from it) the change is `None` rather
    /// than a synthesized number. Equal volumes keep first-seen order.
    pub fn rank(
        &self,
        window: &[SaleRecord],
        prior_window: Option<&[SaleRecord]>,
        direction: RankDirection,
    ) -> ProductRanking {
        let (clean, mut anomalies) = sanitize_sales(window);
        let mut totals = group_by_product(&clean);

        let prior_volumes = prior_window.map(|prior| {
            let (prior_clean, prior_anomalies) = sanitize_sales(prior);
            anomalies.extend(prior_anomalies);
            group_by_product(&prior_clean)
                .into_iter()
                .map(|t| (t.product_id, t.sales_volume))
                .collect::<HashMap<Uuid, i64>>()
        });

        if !anomalies.is_empty() {
            tracing::warn!("skipped {} malformed sales records", anomalies.len());
        }

        // Vec::sort_by is stable, so ties stay in first-seen order
        match direction {
            RankDirection::Top => totals.sort_by(|a, b| b.sales_volume.cmp(&a.sales_volume)),
            RankDirection::Bottom => totals.sort_by(|a, b| a.sales_volume.cmp(&b.sales_volume)),
        }
        totals.truncate(self.limit);

        let entries = totals
            .into_iter()
            .map(|t| {
                let change_percent = prior_volumes
                    .as_ref()
                    .and_then(|prior| change_percent(t.sales_volume, prior.get(&t.product_id).copied()));
                ProductPerformance {
                    product_id: t.product_id,
                    product_name: t.product_name,
                    sales_volume: t.sales_volume,
                    revenue: t.revenue,
                    change_percent,
                }
            })
            .collect();

        ProductRanking { entries, anomalies }
    }
}

/// Sum quantity and amount per product, keeping first-seen order and the
/// first-seen display name.
fn group_by_product(sales: &[SaleRecord]) -> Vec<ProductTotals> {
    let mut totals: Vec<ProductTotals> = Vec::new();
    let mut index: HashMap<Uuid, usize> = HashMap::new();

    for sale in sales {
        let slot = *index.entry(sale.product_id).or_insert_with(|| {
            totals.push(ProductTotals {
                product_id: sale.product_id,
                product_name: sale.product_name.clone(),
                sales_volume: 0,
                revenue: Decimal::ZERO,
            });
            totals.len() - 1
        });
        totals[slot].sales_volume += sale.quantity;
        totals[slot].revenue += sale.total_amount;
    }

    totals
}

/// `(current - prior) / prior * 100`; `None` without a positive baseline
fn change_percent(current: i64, prior: Option<i64>) -> Option<Decimal> {
    let prior = prior?;
    if prior <= 0 {
        return None;
    }
    Some(
        (Decimal::from(current) - Decimal::from(prior)) / Decimal::from(prior)
            * Decimal::from(100),
    )
}
