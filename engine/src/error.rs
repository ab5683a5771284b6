//! Error handling for the Inventory Analytics Engine

use thiserror::Error;
use uuid::Uuid;

/// Engine error types
#[derive(Error, Debug)]
pub enum EngineError {
    /// A unit-price lookup failed during total-value reduction. The caller
    /// must supply complete pricing data; a silent zero would understate
    /// total inventory value.
    #[error("no unit price for product {product_name} ({product_id})")]
    MissingPrice {
        product_id: Uuid,
        product_name: String,
    },

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("export error: {0}")]
    Export(String),
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
