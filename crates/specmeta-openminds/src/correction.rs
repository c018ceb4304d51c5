//! Upload-time document normalization
//!
//! Instance files picked up from disk are not necessarily in the shape the
//! Knowledge Graph expects: documents produced by older generators carry
//! locally scoped `@id` URLs and lowercased multi-word `@type` tails (e.g.
//! `Tissuesamplecollection`). Before upload every document is rewritten so
//! its identifiers use the KG instance prefix and its type name uses the
//! canonical casing. Documents generated by this crate pass through
//! unchanged.

use serde_json::Value;
use specmeta_common::{Result, SpecmetaError};

use crate::vocab;

/// Canonical casing per lowercased multi-word type tail
const TYPE_FIXES: &[(&str, &str)] = &[
    ("Tissuesamplecollectionstate", "TissueSampleCollectionState"),
    ("Tissuesamplecollection", "TissueSampleCollection"),
    ("Tissuesamplestate", "TissueSampleState"),
    ("Tissuesample", "TissueSample"),
    ("Subjectgroupstate", "SubjectGroupState"),
    ("Subjectgroup", "SubjectGroup"),
    ("Subjectstate", "SubjectState"),
];

/// Normalize one instance document in place.
///
/// Rewrites `@id` (and every `studiedState` reference) to the KG instance
/// prefix keeping only the UUID tail, and fixes the `@type` casing.
pub fn correct_document(doc: &mut Value) -> Result<()> {
    let object = doc
        .as_object_mut()
        .ok_or_else(|| SpecmetaError::Parse("instance document is not a JSON object".into()))?;

    let id = object
        .get("@id")
        .and_then(Value::as_str)
        .ok_or_else(|| SpecmetaError::Parse("instance document has no '@id'".into()))?;
    let corrected_id = vocab::kg_instance_url(uuid_tail(id));
    object.insert("@id".to_string(), Value::String(corrected_id));

    if let Some(states) = object.get_mut("studiedState").and_then(Value::as_array_mut) {
        for state in states {
            if let Some(state_id) = state.get("@id").and_then(Value::as_str) {
                let corrected = vocab::kg_instance_url(uuid_tail(state_id));
                state["@id"] = Value::String(corrected);
            }
        }
    }

    if let Some(type_url) = object.get("@type").and_then(Value::as_str) {
        if let Some(corrected) = correct_type_url(type_url) {
            object.insert("@type".to_string(), Value::String(corrected));
        }
    }

    Ok(())
}

/// The UUID of a document, read from its `@id` tail
pub fn document_uuid(doc: &Value) -> Option<&str> {
    doc.get("@id").and_then(Value::as_str).map(uuid_tail)
}

fn uuid_tail(id: &str) -> &str {
    id.rsplit('/').next().unwrap_or(id)
}

fn correct_type_url(type_url: &str) -> Option<String> {
    let (base, tail) = type_url.rsplit_once('/')?;
    let fixed = TYPE_FIXES
        .iter()
        .find(|(wrong, _)| *wrong == tail)
        .map(|(_, right)| *right)?;
    Some(format!("{}/{}", base, fixed))
}
