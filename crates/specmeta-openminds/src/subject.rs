//! Subject and subject group instance builders
//!
//! One specimen produces one parent instance (`Subject` or `SubjectGroup`)
//! plus one state instance per distinct time point. Parent and states are
//! written as separate documents; the parent links its states through
//! `studiedState`, and the overview rows receive the minted UUIDs.

use specmeta_common::{Result, SpecimenRow, SpecmetaError};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::instance::{attribute_refs, InstanceDocument, InstanceRef, QuantitativeValue};
use crate::vocab;

/// Build subject / subject group instances for every specimen in `rows`.
///
/// Rows are grouped by `name`; rows sharing a name and time point name
/// collapse to one state. Documents are written into `out_dir`. Returns the
/// input rows with `specimen_uuid` / `state_uuid` filled in.
pub fn build_subjects(rows: &[SpecimenRow], out_dir: &Path) -> Result<Vec<SpecimenRow>> {
    let mut overview = rows.to_vec();

    for name in unique_names(rows) {
        let specimen_rows: Vec<&SpecimenRow> =
            rows.iter().filter(|row| row.name == name).collect();
        let kind = specimen_rows[0].specimen_type;
        if kind.is_sample() {
            return Err(SpecmetaError::Parse(format!(
                "specimen '{}' is a tissue sample; convert it with the sample builder",
                name
            )));
        }
        let (parent_type, state_type) = vocab::specimen_types(kind);

        info!(specimen = %name, kind = %kind, "creating subject instances");

        // One state per distinct time point name; repeated rows collapse.
        let mut state_uuids = Vec::new();
        let mut uuid_by_label: HashMap<String, String> = HashMap::new();
        for row in dedup_states(&specimen_rows) {
            let label = row.state_label();
            debug!(state = %label, "creating state");

            let mut state = InstanceDocument::new(state_type);
            state.lookup_label = Some(label.clone());

            match &row.age_category {
                Some(category) => {
                    state.age_category =
                        Some(vec![InstanceRef::term(vocab::Term::AgeCategory, category)]);
                },
                None => warn!(state = %label, "no age category defined"),
            }

            if let Some(attribute) = &row.attribute {
                state.attribute = Some(attribute_refs(attribute, vocab::Term::SubjectAttribute));
            }

            state.age = quantity_field(&row.age_value, &row.age_unit, "age", &label)?;
            state.weight = quantity_field(&row.weight_value, &row.weight_unit, "weight", &label)?;

            match &row.descended_from_uuid {
                Some(uuid) => state.descended_from = Some(vec![InstanceRef::kg(uuid)]),
                None if row.descended_from.is_some() => {
                    warn!(state = %label, "descendedFrom named but not resolved to a UUID")
                },
                None => debug!(state = %label, "no descended-from information defined"),
            }

            state.write(out_dir)?;
            uuid_by_label.insert(label, state.uuid().to_string());
            state_uuids.push(state.uuid().to_string());
        }

        // Parent-level columns come from the specimen's first row.
        let first = specimen_rows[0];
        let mut parent = InstanceDocument::new(parent_type);
        parent.lookup_label = Some(name.clone());
        parent.species = strain_refs(first);
        parent.studied_state = Some(
            state_uuids
                .iter()
                .map(|uuid| InstanceRef::kg(uuid))
                .collect(),
        );
        parent.internal_identifier = first.internal_id.clone();

        match &first.biological_sex {
            Some(sex) => {
                parent.biological_sex =
                    Some(vec![InstanceRef::term(vocab::Term::BiologicalSex, sex)]);
            },
            None => debug!(specimen = %name, "no biological sex information available"),
        }

        match &first.is_part_of_uuid {
            Some(uuid) => parent.is_part_of = Some(vec![InstanceRef::kg(uuid)]),
            None if first.is_part_of.is_some() => {
                warn!(specimen = %name, "isPartOf named but not resolved to a UUID")
            },
            None => debug!(specimen = %name, "specimen is not part of a group"),
        }

        parent.write(out_dir)?;

        for row in overview.iter_mut().filter(|row| row.name == name) {
            row.specimen_uuid = Some(parent.uuid().to_string());
            row.state_uuid = uuid_by_label.get(&row.state_label()).cloned();
        }
    }

    Ok(overview)
}

/// Specimen names in first-appearance order
pub(crate) fn unique_names(rows: &[SpecimenRow]) -> Vec<String> {
    let mut names = Vec::new();
    for row in rows {
        if !names.contains(&row.name) {
            names.push(row.name.clone());
        }
    }
    names
}

/// Keep the first row per distinct time point name
fn dedup_states<'a>(rows: &[&'a SpecimenRow]) -> Vec<&'a SpecimenRow> {
    let mut seen = Vec::new();
    let mut states = Vec::new();
    for row in rows {
        if !seen.contains(&row.time_point_name) {
            seen.push(row.time_point_name.clone());
            states.push(*row);
        }
    }
    states
}

/// Strain reference from the `strainAtid` column.
///
/// A strain name without a Knowledge Graph identifier cannot be referenced;
/// it is reported and left unset.
pub(crate) fn strain_refs(row: &SpecimenRow) -> Option<Vec<InstanceRef>> {
    match (&row.strain_name, &row.strain_atid) {
        (_, Some(atid)) => Some(vec![InstanceRef::kg(atid)]),
        (Some(_), None) => {
            warn!(
                specimen = %row.name,
                "no strain identifier found, check 'strainAtid' or add the reference manually"
            );
            None
        },
        (None, None) => {
            debug!(specimen = %row.name, "no strain defined");
            None
        },
    }
}

/// Age or weight column pair as a quantitative value list
fn quantity_field(
    value: &Option<String>,
    unit: &Option<String>,
    what: &str,
    label: &str,
) -> Result<Option<Vec<QuantitativeValue>>> {
    match (value, unit) {
        (Some(value), Some(unit)) => Ok(Some(vec![QuantitativeValue::parse(value, unit)?])),
        (Some(_), None) => {
            warn!(state = %label, "{} value given without a unit, skipping", what);
            Ok(None)
        },
        (None, Some(_)) => {
            warn!(state = %label, "{} unit given without a value, skipping", what);
            Ok(None)
        },
        (None, None) => {
            debug!(state = %label, "no {} information defined", what);
            Ok(None)
        },
    }
}
