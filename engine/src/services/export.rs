//! CSV export of derived collections

use serde::Serialize;

use crate::error::{EngineError, EngineResult};

/// Serialize a derived collection as CSV, for download surfaces such as the
/// data explorer.
pub fn export_to_csv<T: Serialize>(data: &[T]) -> EngineResult<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    for record in data {
        wtr.serialize(record)
            .map_err(|e| EngineError::Export(format!("CSV serialization error: {}", e)))?;
    }
    let csv_data = String::from_utf8(
        wtr.into_inner()
            .map_err(|e| EngineError::Export(format!("CSV writer error: {}", e)))?,
    )
    .map_err(|e| EngineError::Export(format!("UTF-8 conversion error: {}", e)))?;
    Ok(csv_data)
}
