//! Metadata merging and link resolution
//!
//! Two correlation steps run before sample conversion:
//!
//! - [`merge`] joins sample rows with the subject overview of the same run
//!   (row-by-row, the way the template lays subject and sample columns side
//!   by side), so each sample knows the subject state it was taken from.
//! - [`resolve_links`] fills the `*_uuid` columns by name against an
//!   overview from an earlier run (e.g. subject groups created first).

use specmeta_common::SpecimenRow;
use tracing::warn;

/// Merge a subject overview with sample rows, positionally.
///
/// Sample row `i` descends from the subject described by overview row `i`.
/// Rows beyond the overview's length stay unresolved (with a warning).
/// Already-resolved columns are left untouched.
pub fn merge(subject_overview: &[SpecimenRow], sample_rows: &[SpecimenRow]) -> Vec<SpecimenRow> {
    let mut merged = sample_rows.to_vec();

    for (index, sample) in merged.iter_mut().enumerate() {
        let Some(subject) = subject_overview.get(index) else {
            warn!(
                sample = %sample.name,
                "no subject row to merge at position {}, leaving links unresolved",
                index
            );
            continue;
        };

        if sample.descended_from_uuid.is_none() {
            sample.descended_from_uuid = subject.state_uuid.clone();
            if sample.descended_from.is_none() {
                sample.descended_from = Some(subject.state_label());
            }
        }
    }

    merged
}

/// Resolve `isPartOf` / `descendedFrom` names against an overview.
///
/// `isPartOf` matches an overview row's specimen name; `descendedFrom`
/// matches an overview row's time point name (its state). Names with no
/// match are left unresolved.
pub fn resolve_links(rows: &mut [SpecimenRow], overview: &[SpecimenRow]) {
    for row in rows.iter_mut() {
        if let Some(target) = &row.is_part_of {
            match overview.iter().find(|o| &o.name == target) {
                Some(found) => row.is_part_of_uuid = found.specimen_uuid.clone(),
                None => warn!(
                    specimen = %row.name,
                    target = %target,
                    "isPartOf target not found in overview"
                ),
            }
        }

        if let Some(target) = &row.descended_from {
            match overview
                .iter()
                .find(|o| o.time_point_name.as_deref() == Some(target.as_str()))
            {
                Some(found) => row.descended_from_uuid = found.state_uuid.clone(),
                None => warn!(
                    specimen = %row.name,
                    target = %target,
                    "descendedFrom target not found in overview"
                ),
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use specmeta_common::SpecimenKind;

    fn overview_row(name: &str, state_name: Option<&str>) -> SpecimenRow {
        let mut row = SpecimenRow::new(SpecimenKind::SubjectGroup, name);
        row.time_point_name = state_name.map(String::from);
        row.specimen_uuid = Some(format!("{}-specimen-uuid", name));
        row.state_uuid = Some(format!("{}-state-uuid", name));
        row
    }

    #[test]
    fn test_merge_positional() {
        let subjects = vec![
            overview_row("sub-01", Some("P30")),
            overview_row("sub-02", Some("P30")),
        ];
        let samples = vec![
            SpecimenRow::new(SpecimenKind::TissueSample, "sub-01_ts"),
            SpecimenRow::new(SpecimenKind::TissueSample, "sub-02_ts"),
        ];

        let merged = merge(&subjects, &samples);

        assert_eq!(
            merged[0].descended_from_uuid,
            Some("sub-01-state-uuid".to_string())
        );
        assert_eq!(merged[0].descended_from, Some("P30".to_string()));
        assert_eq!(
            merged[1].descended_from_uuid,
            Some("sub-02-state-uuid".to_string())
        );
    }

    #[test]
    fn test_merge_keeps_existing_resolution() {
        let subjects = vec![overview_row("sub-01", Some("P30"))];
        let mut sample = SpecimenRow::new(SpecimenKind::TissueSample, "sub-01_ts");
        sample.descended_from_uuid = Some("already-resolved".to_string());

        let merged = merge(&subjects, &[sample]);
        assert_eq!(
            merged[0].descended_from_uuid,
            Some("already-resolved".to_string())
        );
    }

    #[test]
    fn test_merge_extra_samples_left_unresolved() {
        let subjects = vec![overview_row("sub-01", None)];
        let samples = vec![
            SpecimenRow::new(SpecimenKind::TissueSample, "sub-01_ts"),
            SpecimenRow::new(SpecimenKind::TissueSample, "sub-02_ts"),
        ];

        let merged = merge(&subjects, &samples);
        assert!(merged[0].descended_from_uuid.is_some());
        assert_eq!(merged[1].descended_from_uuid, None);
    }

    #[test]
    fn test_resolve_links_by_name() {
        let overview = vec![overview_row("controls", Some("controls_state-01"))];

        let mut rows = vec![{
            let mut row = SpecimenRow::new(SpecimenKind::Subject, "sub-01");
            row.is_part_of = Some("controls".to_string());
            row.descended_from = Some("controls_state-01".to_string());
            row
        }];

        resolve_links(&mut rows, &overview);

        assert_eq!(
            rows[0].is_part_of_uuid,
            Some("controls-specimen-uuid".to_string())
        );
        assert_eq!(
            rows[0].descended_from_uuid,
            Some("controls-state-uuid".to_string())
        );
    }

    #[test]
    fn test_resolve_links_unknown_names() {
        let overview = vec![overview_row("controls", Some("controls_state-01"))];

        let mut rows = vec![{
            let mut row = SpecimenRow::new(SpecimenKind::Subject, "sub-01");
            row.is_part_of = Some("treatment".to_string());
            row.descended_from = Some("nothing".to_string());
            row
        }];

        resolve_links(&mut rows, &overview);

        assert_eq!(rows[0].is_part_of_uuid, None);
        assert_eq!(rows[0].descended_from_uuid, None);
    }
}
