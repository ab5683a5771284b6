//! Inventory Analytics Engine
//!
//! Deterministic aggregation from raw inventory and sales records into the
//! derived views a dashboard renders: stock health classification,
//! time-bucketed sales trends, product rankings, and headline metrics.
//!
//! The engine is synchronous, stateless, and side-effect-free. Every
//! service is a pure function of its input collections and configuration:
//! fetching records and rendering output belong to the caller, which also
//! supplies the "now" reference for time-sensitive reductions so repeated
//! invocations stay deterministic.

pub mod config;
pub mod error;
pub mod services;

pub use config::EngineConfig;
pub use error::{EngineError, EngineResult};
pub use services::{
    DashboardMetricsReducer, ProductRankAggregator, SalesBucketAggregator, StockStatusClassifier,
};
