//! Product performance ranking models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Ranking direction for product performance views
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RankDirection {
    Top,
    Bottom,
}

impl RankDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            RankDirection::Top => "top",
            RankDirection::Bottom => "bottom",
        }
    }
}

impl std::str::FromStr for RankDirection {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(RankDirection::Top),
            "bottom" => Ok(RankDirection::Bottom),
            _ => Err("unknown rank direction"),
        }
    }
}

/// Aggregated sales performance for one product over a window
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductPerformance {
    /// Carried so the caller can join back to the product catalog
    pub product_id: Uuid,
    pub product_name: String,
    /// Units sold across the window
    pub sales_volume: i64,
    pub revenue: Decimal,
    /// Volume change versus the prior window; `None` when no baseline exists
    pub change_percent: Option<Decimal>,
}
