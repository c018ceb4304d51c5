//! Per-run overview files
//!
//! Every conversion run writes `{specimenType}_created.csv` next to the
//! generated documents. The overview is the input table plus the minted
//! `specimen_uuid` / `state_uuid` columns; a later run reads it back to
//! resolve `isPartOf` / `descendedFrom` references by name.

use specmeta_common::{Result, SpecimenRow, SpecmetaError};
use std::path::{Path, PathBuf};
use tracing::info;

/// Write the overview CSV for a set of converted rows.
///
/// The file name is derived from the first row's specimen type. Returns the
/// path written to.
pub fn write_overview(rows: &[SpecimenRow], dir: &Path) -> Result<PathBuf> {
    let Some(first) = rows.first() else {
        return Err(SpecmetaError::Parse(
            "cannot write an overview for zero rows".into(),
        ));
    };

    std::fs::create_dir_all(dir)?;
    let path = dir.join(format!("{}_created.csv", first.specimen_type));

    let mut writer = csv::Writer::from_path(&path)
        .map_err(|e| SpecmetaError::Csv(format!("{}: {}", path.display(), e)))?;
    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| SpecmetaError::Csv(format!("{}: {}", path.display(), e)))?;
    }
    writer
        .flush()
        .map_err(|e| SpecmetaError::Csv(format!("{}: {}", path.display(), e)))?;

    info!(path = %path.display(), rows = rows.len(), "overview file saved");
    Ok(path)
}

/// Read an overview CSV back, e.g. to resolve links against an earlier run
pub fn read_overview(path: impl AsRef<Path>) -> Result<Vec<SpecimenRow>> {
    crate::reader::read_csv(path)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use specmeta_common::SpecimenKind;
    use tempfile::TempDir;

    #[test]
    fn test_overview_roundtrip() {
        let dir = TempDir::new().unwrap();

        let mut row = SpecimenRow::new(SpecimenKind::TissueSampleCollection, "sub-01_tsc");
        row.quantity = Some(10);
        row.specimen_uuid = Some("5f0a3f51-92a5-4e43-8cbb-5a2b78dc54cf".to_string());
        row.state_uuid = Some("0d2f7a40-11f5-46f9-8a8f-8c8b3cb7d316".to_string());

        let path = write_overview(&[row.clone()], dir.path()).unwrap();
        assert_eq!(
            path.file_name().unwrap().to_string_lossy(),
            "tsc_created.csv"
        );

        let reloaded = read_overview(&path).unwrap();
        assert_eq!(reloaded, vec![row]);
    }

    #[test]
    fn test_overview_filename_follows_kind() {
        let dir = TempDir::new().unwrap();
        let row = SpecimenRow::new(SpecimenKind::Subject, "sub-01");
        let path = write_overview(&[row], dir.path()).unwrap();
        assert_eq!(
            path.file_name().unwrap().to_string_lossy(),
            "subject_created.csv"
        );
    }

    #[test]
    fn test_empty_overview_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(write_overview(&[], dir.path()).is_err());
    }
}
