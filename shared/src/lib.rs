//! Shared types and models for the Inventory Analytics Platform
//!
//! This crate contains types shared between the aggregation engine, the
//! display layer (via WASM), and other components of the system.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
