//! Common types used across specmeta
//!
//! The central type here is [`SpecimenRow`], one record of tabular specimen
//! metadata. Its serde names match the column headers of the specimen
//! template, so the same struct deserializes from CSV headers and from JSON
//! object keys.

use serde::{Deserialize, Serialize};

/// The four specimen categories the template distinguishes.
///
/// Subjects and subject groups carry state rows keyed by time point; tissue
/// samples (`ts`) and tissue sample collections (`tsc`) additionally carry
/// anatomical information and, for collections, a quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpecimenKind {
    #[serde(rename = "subject")]
    Subject,
    #[serde(rename = "subjectGroup")]
    SubjectGroup,
    #[serde(rename = "ts")]
    TissueSample,
    #[serde(rename = "tsc")]
    TissueSampleCollection,
}

impl SpecimenKind {
    /// Whether this kind is a tissue sample or tissue sample collection
    pub fn is_sample(self) -> bool {
        matches!(
            self,
            SpecimenKind::TissueSample | SpecimenKind::TissueSampleCollection
        )
    }

    /// Whether this kind aggregates several specimens
    pub fn is_collection(self) -> bool {
        matches!(
            self,
            SpecimenKind::SubjectGroup | SpecimenKind::TissueSampleCollection
        )
    }
}

impl std::fmt::Display for SpecimenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let token = match self {
            SpecimenKind::Subject => "subject",
            SpecimenKind::SubjectGroup => "subjectGroup",
            SpecimenKind::TissueSample => "ts",
            SpecimenKind::TissueSampleCollection => "tsc",
        };
        write!(f, "{}", token)
    }
}

impl std::str::FromStr for SpecimenKind {
    type Err = crate::error::SpecmetaError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "subject" => Ok(SpecimenKind::Subject),
            "subjectGroup" => Ok(SpecimenKind::SubjectGroup),
            "ts" => Ok(SpecimenKind::TissueSample),
            "tsc" => Ok(SpecimenKind::TissueSampleCollection),
            other => Err(crate::error::SpecmetaError::Parse(format!(
                "unknown specimenType '{}', expected subject, subjectGroup, ts, or tsc",
                other
            ))),
        }
    }
}

/// One row of specimen metadata.
///
/// One row describes one time-point state of one specimen; a specimen with
/// several states appears on several rows sharing the same `name`. The
/// `*_uuid` columns are filled in as instances are created and carried into
/// the overview file so a later run can resolve `isPartOf` / `descendedFrom`
/// references by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecimenRow {
    #[serde(rename = "specimenType")]
    pub specimen_type: SpecimenKind,

    /// Specimen name, e.g. "sub-01" or "sub-01_tsc"
    pub name: String,

    #[serde(rename = "internalID", default)]
    pub internal_id: Option<String>,

    #[serde(rename = "strainName", default)]
    pub strain_name: Option<String>,

    /// Knowledge Graph identifier of the strain instance
    #[serde(rename = "strainAtid", default)]
    pub strain_atid: Option<String>,

    #[serde(rename = "biologicalSex", default)]
    pub biological_sex: Option<String>,

    #[serde(rename = "ageCategory", default)]
    pub age_category: Option<String>,

    /// Age at this time point; "6" or a range "6-8"
    #[serde(rename = "ageValue", default)]
    pub age_value: Option<String>,

    #[serde(rename = "ageUnit", default)]
    pub age_unit: Option<String>,

    /// Weight at this time point; "130" or a range "120-140"
    #[serde(rename = "weightValue", default)]
    pub weight_value: Option<String>,

    #[serde(rename = "weightUnit", default)]
    pub weight_unit: Option<String>,

    /// Comma-separated state attribute terms, e.g. "awake, control"
    #[serde(default)]
    pub attribute: Option<String>,

    /// Carried through to the overview, not mapped to an instance property
    #[serde(default)]
    pub pathology: Option<String>,

    /// Name of the group or collection this specimen belongs to
    #[serde(rename = "isPartOf", default)]
    pub is_part_of: Option<String>,

    /// Name of the subject or group state this specimen was taken from
    #[serde(rename = "descendedFrom", default)]
    pub descended_from: Option<String>,

    #[serde(rename = "sampleType", default)]
    pub sample_type: Option<String>,

    /// Comma-separated parcellation codes, e.g. "WHSSD_brain"
    #[serde(default)]
    pub region: Option<String>,

    /// Organ or cell type the sample derives from
    #[serde(default)]
    pub origin: Option<String>,

    /// Number of samples in a collection; ignored for single samples
    #[serde(default)]
    pub quantity: Option<i64>,

    #[serde(rename = "timePoint", default)]
    pub time_point: Option<i64>,

    #[serde(rename = "timePointName", default)]
    pub time_point_name: Option<String>,

    /// Resolved UUID of the `isPartOf` target
    #[serde(rename = "isPartOf_uuid", default)]
    pub is_part_of_uuid: Option<String>,

    /// Resolved UUID of the `descendedFrom` target
    #[serde(rename = "descendedFrom_uuid", default)]
    pub descended_from_uuid: Option<String>,

    /// UUID of the created parent instance
    #[serde(rename = "specimen_uuid", default)]
    pub specimen_uuid: Option<String>,

    /// UUID of the created state instance
    #[serde(rename = "state_uuid", default)]
    pub state_uuid: Option<String>,
}

impl SpecimenRow {
    /// Create a row with only the required columns set
    pub fn new(specimen_type: SpecimenKind, name: impl Into<String>) -> Self {
        Self {
            specimen_type,
            name: name.into(),
            internal_id: None,
            strain_name: None,
            strain_atid: None,
            biological_sex: None,
            age_category: None,
            age_value: None,
            age_unit: None,
            weight_value: None,
            weight_unit: None,
            attribute: None,
            pathology: None,
            is_part_of: None,
            descended_from: None,
            sample_type: None,
            region: None,
            origin: None,
            quantity: None,
            time_point: None,
            time_point_name: None,
            is_part_of_uuid: None,
            descended_from_uuid: None,
            specimen_uuid: None,
            state_uuid: None,
        }
    }

    /// Collapse whitespace-only and empty strings to `None`.
    ///
    /// JSON input represents missing values as `null` or `""`; CSV input as
    /// empty fields. After normalization both look the same to the builders.
    pub fn normalize(&mut self) {
        for field in [
            &mut self.internal_id,
            &mut self.strain_name,
            &mut self.strain_atid,
            &mut self.biological_sex,
            &mut self.age_category,
            &mut self.age_value,
            &mut self.age_unit,
            &mut self.weight_value,
            &mut self.weight_unit,
            &mut self.attribute,
            &mut self.pathology,
            &mut self.is_part_of,
            &mut self.descended_from,
            &mut self.sample_type,
            &mut self.region,
            &mut self.origin,
            &mut self.time_point_name,
            &mut self.is_part_of_uuid,
            &mut self.descended_from_uuid,
            &mut self.specimen_uuid,
            &mut self.state_uuid,
        ] {
            if let Some(value) = field {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    *field = None;
                } else if trimmed.len() != value.len() {
                    *field = Some(trimmed.to_string());
                }
            }
        }
    }

    /// The name used for this row's state instance.
    ///
    /// Falls back to a generic `{name}_state-0{timePoint}` label when no
    /// time point name was given.
    pub fn state_label(&self) -> String {
        match &self.time_point_name {
            Some(tp) if self.specimen_type.is_sample() => format!("{}_{}", self.name, tp),
            Some(tp) => tp.clone(),
            None => format!("{}_state-0{}", self.name, self.time_point.unwrap_or(1)),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_specimen_kind_roundtrip() {
        for token in ["subject", "subjectGroup", "ts", "tsc"] {
            let kind: SpecimenKind = token.parse().unwrap();
            assert_eq!(kind.to_string(), token);
        }
        assert!("specimen".parse::<SpecimenKind>().is_err());
    }

    #[test]
    fn test_specimen_kind_predicates() {
        assert!(SpecimenKind::TissueSample.is_sample());
        assert!(SpecimenKind::TissueSampleCollection.is_sample());
        assert!(!SpecimenKind::Subject.is_sample());

        assert!(SpecimenKind::SubjectGroup.is_collection());
        assert!(SpecimenKind::TissueSampleCollection.is_collection());
        assert!(!SpecimenKind::TissueSample.is_collection());
    }

    #[test]
    fn test_normalize_clears_empty_strings() {
        let mut row = SpecimenRow::new(SpecimenKind::Subject, "sub-01");
        row.internal_id = Some("".to_string());
        row.strain_name = Some("  ".to_string());
        row.biological_sex = Some(" female ".to_string());

        row.normalize();

        assert_eq!(row.internal_id, None);
        assert_eq!(row.strain_name, None);
        assert_eq!(row.biological_sex, Some("female".to_string()));
    }

    #[test]
    fn test_state_label_subject() {
        let mut row = SpecimenRow::new(SpecimenKind::Subject, "sub-01");
        row.time_point = Some(1);
        assert_eq!(row.state_label(), "sub-01_state-01");

        row.time_point_name = Some("P30".to_string());
        assert_eq!(row.state_label(), "P30");
    }

    #[test]
    fn test_state_label_sample_prefixes_name() {
        let mut row = SpecimenRow::new(SpecimenKind::TissueSampleCollection, "sub-01_tsc");
        row.time_point_name = Some("vglut1".to_string());
        assert_eq!(row.state_label(), "sub-01_tsc_vglut1");

        row.time_point_name = None;
        row.time_point = Some(2);
        assert_eq!(row.state_label(), "sub-01_tsc_state-02");
    }

    #[test]
    fn test_row_deserializes_from_json_keys() {
        let json = serde_json::json!({
            "specimenType": "subject",
            "name": "sub-01",
            "internalID": "XR-2207",
            "biologicalSex": "female",
            "ageCategory": "adult",
            "timePoint": 1
        });

        let row: SpecimenRow = serde_json::from_value(json).unwrap();
        assert_eq!(row.specimen_type, SpecimenKind::Subject);
        assert_eq!(row.internal_id, Some("XR-2207".to_string()));
        assert_eq!(row.time_point, Some(1));
        assert_eq!(row.quantity, None);
    }
}
