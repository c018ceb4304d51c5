//! JSON-LD instance document model
//!
//! One [`InstanceDocument`] is one openMINDS entity: a subject, a subject
//! group, a tissue sample, a tissue sample collection, or a state of any of
//! these. The struct is a superset of the per-type properties; absent fields
//! are skipped on serialization, so each document only carries the
//! properties its type uses.

use serde::{Deserialize, Serialize};
use specmeta_common::{Result, SpecmetaError};
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::vocab;

/// A `{"@id": url}` reference to another instance or vocabulary term
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceRef {
    #[serde(rename = "@id")]
    pub id: String,
}

impl InstanceRef {
    /// Reference an arbitrary URL
    pub fn new(url: impl Into<String>) -> Self {
        Self { id: url.into() }
    }

    /// Reference a Knowledge Graph instance by UUID
    pub fn kg(uuid: &str) -> Self {
        Self::new(vocab::kg_instance_url(uuid))
    }

    /// Reference a controlled-vocabulary term
    pub fn term(term: vocab::Term, value: &str) -> Self {
        Self::new(vocab::term_url(term, value))
    }
}

/// The `@context` carried by every generated document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabContext {
    #[serde(rename = "@vocab")]
    pub vocab: String,
}

impl Default for VocabContext {
    fn default() -> Self {
        Self {
            vocab: vocab::VOCAB_CONTEXT.to_string(),
        }
    }
}

/// An age or weight: a single measured value or a min/max range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuantitativeValue {
    Single {
        #[serde(rename = "@type")]
        type_url: String,
        unit: InstanceRef,
        value: i64,
    },
    Range {
        #[serde(rename = "@type")]
        type_url: String,
        #[serde(rename = "minValueUnit")]
        min_value_unit: InstanceRef,
        #[serde(rename = "maxValueUnit")]
        max_value_unit: InstanceRef,
        #[serde(rename = "minValue")]
        min_value: i64,
        #[serde(rename = "maxValue")]
        max_value: i64,
    },
}

impl QuantitativeValue {
    /// Parse a value string with its unit term.
    ///
    /// `"6"` becomes a single value, `"6-8"` a range.
    pub fn parse(value: &str, unit: &str) -> Result<Self> {
        let unit_ref = InstanceRef::term(vocab::Term::UnitOfMeasurement, unit);

        match value.split_once('-') {
            Some((min, max)) => Ok(QuantitativeValue::Range {
                type_url: vocab::type_url("QuantitativeValueRange"),
                min_value_unit: unit_ref.clone(),
                max_value_unit: unit_ref,
                min_value: parse_int(min)?,
                max_value: parse_int(max)?,
            }),
            None => Ok(QuantitativeValue::Single {
                type_url: vocab::type_url("QuantitativeValue"),
                unit: unit_ref,
                value: parse_int(value)?,
            }),
        }
    }
}

fn parse_int(value: &str) -> Result<i64> {
    value
        .trim()
        .parse()
        .map_err(|_| SpecmetaError::Parse(format!("'{}' is not an integer value", value.trim())))
}

/// One openMINDS instance document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstanceDocument {
    #[serde(rename = "@context", default)]
    pub context: VocabContext,

    #[serde(rename = "@id")]
    pub id: String,

    #[serde(rename = "@type")]
    pub type_url: String,

    #[serde(rename = "lookupLabel", skip_serializing_if = "Option::is_none")]
    pub lookup_label: Option<String>,

    #[serde(rename = "internalIdentifier", skip_serializing_if = "Option::is_none")]
    pub internal_identifier: Option<String>,

    #[serde(rename = "biologicalSex", skip_serializing_if = "Option::is_none")]
    pub biological_sex: Option<Vec<InstanceRef>>,

    #[serde(rename = "ageCategory", skip_serializing_if = "Option::is_none")]
    pub age_category: Option<Vec<InstanceRef>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<Vec<InstanceRef>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<Vec<QuantitativeValue>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<Vec<QuantitativeValue>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub species: Option<Vec<InstanceRef>>,

    #[serde(rename = "studiedState", skip_serializing_if = "Option::is_none")]
    pub studied_state: Option<Vec<InstanceRef>>,

    #[serde(rename = "descendedFrom", skip_serializing_if = "Option::is_none")]
    pub descended_from: Option<Vec<InstanceRef>>,

    #[serde(rename = "isPartOf", skip_serializing_if = "Option::is_none")]
    pub is_part_of: Option<Vec<InstanceRef>>,

    /// Tissue sample type; serialized as the `type` property
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub sample_type: Option<Vec<InstanceRef>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<Vec<InstanceRef>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,

    #[serde(rename = "anatomicalLocation", skip_serializing_if = "Option::is_none")]
    pub anatomical_location: Option<Vec<InstanceRef>>,
}

impl InstanceDocument {
    /// Create an empty document of the given core type with a fresh UUID
    pub fn new(type_name: &str) -> Self {
        let uuid = Uuid::new_v4();
        Self {
            context: VocabContext::default(),
            id: vocab::kg_instance_url(&uuid.to_string()),
            type_url: vocab::type_url(type_name),
            lookup_label: None,
            internal_identifier: None,
            biological_sex: None,
            age_category: None,
            attribute: None,
            age: None,
            weight: None,
            species: None,
            studied_state: None,
            descended_from: None,
            is_part_of: None,
            sample_type: None,
            origin: None,
            quantity: None,
            anatomical_location: None,
        }
    }

    /// The UUID tail of this document's `@id`
    pub fn uuid(&self) -> &str {
        self.id.rsplit('/').next().unwrap_or(&self.id)
    }

    /// Write the document as `{uuid}.json` into `dir`, returning the path
    pub fn write(&self, dir: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(format!("{}.json", self.uuid()));
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, json)?;
        Ok(path)
    }
}

/// Split a comma-separated attribute list into term references
pub fn attribute_refs(values: &str, term: vocab::Term) -> Vec<InstanceRef> {
    values
        .split(',')
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(|value| InstanceRef::term(term, value))
        .collect()
}
