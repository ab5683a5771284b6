//! Record sanitization at the aggregation boundary
//!
//! Raw inventory and sales rows arrive from an external data source and are
//! not trusted to be well-formed. Sanitization clamps or skips malformed
//! rows and reports each one as a [`RecordAnomaly`] instead of failing the
//! whole aggregation call.

use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{InventoryRecord, SaleRecord};

/// A malformed input record, reported alongside aggregation output
#[derive(Error, Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecordAnomaly {
    #[error("negative stock {value} for product {product_id}, clamped to zero")]
    NegativeStock { product_id: Uuid, value: i64 },

    #[error("non-positive max stock {value} for product {product_id}, record skipped")]
    NonPositiveMaxStock { product_id: Uuid, value: i64 },

    #[error("non-positive quantity {value} for product {product_id}, record skipped")]
    NonPositiveQuantity { product_id: Uuid, value: i64 },

    #[error("negative amount {value} for product {product_id}, record skipped")]
    NegativeAmount { product_id: Uuid, value: Decimal },
}

/// Clamp or skip malformed inventory rows.
///
/// Negative stock is clamped to zero and the row is kept; rows with a
/// non-positive max stock are skipped entirely, since every percentage
/// derived from them would be undefined.
pub fn sanitize_inventory(
    records: &[InventoryRecord],
) -> (Vec<InventoryRecord>, Vec<RecordAnomaly>) {
    let mut clean = Vec::with_capacity(records.len());
    let mut anomalies = Vec::new();

    for record in records {
        if record.max_stock <= 0 {
            anomalies.push(RecordAnomaly::NonPositiveMaxStock {
                product_id: record.product_id,
                value: record.max_stock,
            });
            continue;
        }
        let mut record = record.clone();
        if record.current_stock < 0 {
            anomalies.push(RecordAnomaly::NegativeStock {
                product_id: record.product_id,
                value: record.current_stock,
            });
            record.current_stock = 0;
        }
        clean.push(record);
    }

    (clean, anomalies)
}

/// Skip malformed sales rows: non-positive quantities and negative amounts.
pub fn sanitize_sales(records: &[SaleRecord]) -> (Vec<SaleRecord>, Vec<RecordAnomaly>) {
    let mut clean = Vec::with_capacity(records.len());
    let mut anomalies = Vec::new();

    for record in records {
        if record.quantity <= 0 {
            anomalies.push(RecordAnomaly::NonPositiveQuantity {
                product_id: record.product_id,
                value: record.quantity,
            });
            continue;
        }
        if record.total_amount < Decimal::ZERO {
            anomalies.push(RecordAnomaly::NegativeAmount {
                product_id: record.product_id,
                value: record.total_amount,
            });
            continue;
        }
        clean.push(record.clone());
    }

    (clean, anomalies)
}
