//! CSV and JSON import of specimen rows
//!
//! Both readers produce normalized [`SpecimenRow`]s: empty and
//! whitespace-only strings collapse to `None`, so the builders see the same
//! shape regardless of the input format. Spreadsheet templates are consumed
//! through their CSV export.

use specmeta_common::{Result, SpecimenRow, SpecmetaError};
use std::path::Path;
use tracing::info;

/// Read specimen rows from a CSV file with a header row
pub fn read_csv(path: impl AsRef<Path>) -> Result<Vec<SpecimenRow>> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| SpecmetaError::Csv(format!("{}: {}", path.display(), e)))?;

    let mut rows = Vec::new();
    for record in reader.deserialize() {
        let mut row: SpecimenRow =
            record.map_err(|e| SpecmetaError::Csv(format!("{}: {}", path.display(), e)))?;
        row.normalize();
        rows.push(row);
    }

    info!(path = %path.display(), rows = rows.len(), "imported specimen metadata from CSV");
    Ok(rows)
}

/// Read specimen rows from a JSON file.
///
/// Accepts either an array of row objects or a single row object.
pub fn read_json(path: impl AsRef<Path>) -> Result<Vec<SpecimenRow>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&content)?;

    let mut rows: Vec<SpecimenRow> = match value {
        serde_json::Value::Array(_) => serde_json::from_value(value)?,
        serde_json::Value::Object(_) => vec![serde_json::from_value(value)?],
        _ => {
            return Err(SpecmetaError::Parse(format!(
                "{}: expected a JSON object or array of objects",
                path.display()
            )))
        },
    };

    for row in &mut rows {
        row.normalize();
    }

    info!(path = %path.display(), rows = rows.len(), "imported specimen metadata from JSON");
    Ok(rows)
}
