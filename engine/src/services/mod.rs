//! Aggregation services for the Inventory Analytics Engine

pub mod dashboard;
pub mod export;
pub mod product_performance;
pub mod sales_overview;
pub mod stock_status;

pub use dashboard::{DashboardMetricsReducer, DashboardSnapshot};
pub use export::export_to_csv;
pub use product_performance::{ProductRankAggregator, ProductRanking};
pub use sales_overview::{SalesBucketAggregator, SalesOverview};
pub use stock_status::{sales_velocity, InventoryInsights, StockStatusClassifier};
