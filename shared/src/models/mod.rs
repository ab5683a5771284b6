//! Domain models for the Inventory Analytics Platform

mod dashboard;
mod inventory;
mod product;
mod sales;

pub use dashboard::*;
pub use inventory::*;
pub use product::*;
pub use sales::*;
