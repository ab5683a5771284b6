//! Sales transactions and time-bucketed summaries

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single sales transaction
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SaleRecord {
    pub product_id: Uuid,
    pub product_name: String,
    pub quantity: i64,
    pub total_amount: Decimal,
    pub sale_date: DateTime<Utc>,
}

/// Requested reporting window, which also selects the bucketing grain
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TimeRange {
    #[serde(rename = "7d")]
    Days7,
    #[serde(rename = "30d")]
    Days30,
    #[serde(rename = "90d")]
    Days90,
}

impl TimeRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::Days7 => "7d",
            TimeRange::Days30 => "30d",
            TimeRange::Days90 => "90d",
        }
    }

    /// Window length in days
    pub fn days(&self) -> i64 {
        match self {
            TimeRange::Days7 => 7,
            TimeRange::Days30 => 30,
            TimeRange::Days90 => 90,
        }
    }

    /// Start of the trailing window ending at `now`
    pub fn window_start(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now - Duration::days(self.days())
    }

    /// Bucket key for a sale on `date`: weekday name for a week of data,
    /// week-of-month ordinal for a month, month name for anything longer.
    pub fn bucket_label(&self, date: NaiveDate) -> String {
        match self {
            TimeRange::Days7 => date.format("%a").to_string(),
            TimeRange::Days30 => format!("Week {}", (date.day() + 6) / 7),
            TimeRange::Days90 => date.format("%b").to_string(),
        }
    }
}

impl std::str::FromStr for TimeRange {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "7d" => Ok(TimeRange::Days7),
            "30d" => Ok(TimeRange::Days30),
            "90d" => Ok(TimeRange::Days90),
            _ => Err("unknown time range"),
        }
    }
}

/// Revenue and unit totals for one aggregation window
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SalesBucket {
    pub label: String,
    pub revenue: Decimal,
    pub units: i64,
}
