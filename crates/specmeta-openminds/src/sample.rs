//! Tissue sample and tissue sample collection instance builders
//!
//! Mirrors the subject builder for the sample kinds. Sample states carry
//! provenance (`descendedFrom`) and attributes; the parent carries the
//! anatomical information: sample type, origin, region, and (for
//! collections) quantity.

use specmeta_common::{Result, SpecimenRow, SpecimenKind, SpecmetaError};
use std::path::Path;
use tracing::{debug, info, warn};

use crate::instance::{attribute_refs, InstanceDocument, InstanceRef};
use crate::subject::{strain_refs, unique_names};
use crate::vocab;

/// Build tissue sample / collection instances for every specimen in `rows`.
///
/// Every row is one state; rows sharing a `name` belong to one sample.
/// Documents are written into `out_dir`. Returns the input rows with
/// `specimen_uuid` / `state_uuid` filled in.
pub fn build_samples(rows: &[SpecimenRow], out_dir: &Path) -> Result<Vec<SpecimenRow>> {
    let mut overview = rows.to_vec();

    for name in unique_names(rows) {
        let sample_rows: Vec<&SpecimenRow> =
            rows.iter().filter(|row| row.name == name).collect();
        let kind = sample_rows[0].specimen_type;
        if !kind.is_sample() {
            return Err(SpecmetaError::Parse(format!(
                "specimen '{}' is a subject; convert it with the subject builder",
                name
            )));
        }
        let (parent_type, state_type) = vocab::specimen_types(kind);

        info!(specimen = %name, kind = %kind, "creating tissue sample instances");

        let mut state_uuids = Vec::new();
        for (index, row) in sample_rows.iter().enumerate() {
            let label = row.state_label();
            debug!(state = %label, "creating state");

            let mut state = InstanceDocument::new(state_type);
            state.lookup_label = Some(label.clone());

            match &row.descended_from_uuid {
                Some(uuid) => state.descended_from = Some(vec![InstanceRef::kg(uuid)]),
                None if row.descended_from.is_some() => {
                    warn!(state = %label, "descendedFrom named but not resolved to a UUID")
                },
                None => debug!(state = %label, "no descended-from information defined"),
            }

            match &row.attribute {
                Some(attribute) => {
                    state.attribute =
                        Some(attribute_refs(attribute, vocab::Term::TissueSampleAttribute));
                },
                None => debug!(state = %label, "no state attribute available"),
            }

            state.write(out_dir)?;
            state_uuids.push(state.uuid().to_string());
            if let Some(overview_row) = overview
                .iter_mut()
                .filter(|overview_row| overview_row.name == name)
                .nth(index)
            {
                overview_row.state_uuid = Some(state.uuid().to_string());
            }
        }

        // Parent-level columns come from the sample's first row.
        let first = sample_rows[0];
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

        match &first.sample_type {
            Some(sample_type) => {
                parent.sample_type = Some(vec![InstanceRef::term(
                    vocab::Term::TissueSampleType,
                    sample_type,
                )]);
            },
            None => warn!(specimen = %name, "no sample type defined"),
        }

        match &first.origin {
            Some(origin) => {
                parent.origin = Some(vec![InstanceRef::term(vocab::origin_term(origin), origin)]);
            },
            None => warn!(specimen = %name, "no origin defined"),
        }

        match &first.biological_sex {
            Some(sex) => {
                parent.biological_sex =
                    Some(vec![InstanceRef::term(vocab::Term::BiologicalSex, sex)]);
            },
            None => debug!(specimen = %name, "no biological sex information available"),
        }

        // Quantity only applies to collections.
        match (kind, first.quantity) {
            (SpecimenKind::TissueSampleCollection, Some(quantity)) => {
                parent.quantity = Some(quantity);
            },
            (SpecimenKind::TissueSampleCollection, None) => {
                debug!(specimen = %name, "no quantity defined")
            },
            (_, Some(_)) => {
                debug!(specimen = %name, "quantity ignored for a single tissue sample")
            },
            _ => {},
        }

        match &first.region {
            Some(region) => {
                let refs = vocab::region_urls(region)?
                    .into_iter()
                    .map(InstanceRef::new)
                    .collect();
                parent.anatomical_location = Some(refs);
            },
            None => debug!(specimen = %name, "no brain region defined"),
        }

        match &first.is_part_of_uuid {
            Some(uuid) => parent.is_part_of = Some(vec![InstanceRef::kg(uuid)]),
            None if first.is_part_of.is_some() => {
                warn!(specimen = %name, "isPartOf named but not resolved to a UUID")
            },
            None => debug!(specimen = %name, "specimen is not part of a collection"),
        }

        parent.write(out_dir)?;

        for row in overview.iter_mut().filter(|row| row.name == name) {
            row.specimen_uuid = Some(parent.uuid().to_string());
        }
    }

    Ok(overview)
}
