//! Configuration for the aggregation engine
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with ANALYTICS_ prefix

use chrono::FixedOffset;
use config::{ConfigError, Environment, File};
use rust_decimal::Decimal;
use serde::Deserialize;

/// Engine configuration
#[derive(Debug, Deserialize, Clone)]
pub struct EngineConfig {
    /// Assumed stock depletion per day when no sales velocity is supplied
    pub default_daily_burn_rate: Decimal,

    /// Number of entries kept in ranked product views
    pub rank_limit: usize,

    /// Offset from UTC, in minutes, defining the reporting calendar day
    pub utc_offset_minutes: i32,
}

impl EngineConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("ANALYTICS_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("default_daily_burn_rate", "3")?
            .set_default("rank_limit", 5)?
            .set_default("utc_offset_minutes", 0)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (ANALYTICS_ prefix)
            .add_source(
                Environment::with_prefix("ANALYTICS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: EngineConfig = config.try_deserialize()?;
        config.validate().map_err(ConfigError::Message)?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), String> {
        if self.default_daily_burn_rate <= Decimal::ZERO {
            return Err("default_daily_burn_rate must be positive".to_string());
        }
        if self.rank_limit == 0 {
            return Err("rank_limit must be at least 1".to_string());
        }
        if self.utc_offset_minutes.abs() >= 24 * 60 {
            return Err("utc_offset_minutes must be within a day of UTC".to_string());
        }
        Ok(())
    }

    /// Reporting time zone as a fixed offset from UTC
    pub fn utc_offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_minutes * 60)
            .unwrap_or_else(|| FixedOffset::east_opt(0).unwrap())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_daily_burn_rate: Decimal::from(3),
            rank_limit: 5,
            utc_offset_minutes: 0,
        }
    }
}
