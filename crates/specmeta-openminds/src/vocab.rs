//! Controlled-vocabulary and type URL tables
//!
//! Every reference an instance document carries is a URL under one of three
//! roots: openMINDS instance terms, openMINDS core types, or Knowledge Graph
//! instances. Free-text fields resolve to a term branch through the lookup
//! tables below.

use specmeta_common::{Result, SpecimenKind, SpecmetaError};

/// Vocabulary root used as the `@vocab` of every document context
pub const VOCAB_CONTEXT: &str = "https://openminds.ebrains.eu/vocab/";

/// Root for controlled-vocabulary term instances
pub const INSTANCE_BASE: &str = "https://openminds.ebrains.eu/instances";

/// Root for openMINDS core schema types
pub const TYPE_BASE: &str = "https://openminds.ebrains.eu/core";

/// Prefix for Knowledge Graph instance references
pub const KG_INSTANCE_PREFIX: &str = "https://kg.ebrains.eu/api/instances/";

/// Controlled-vocabulary branches referenced by specimen documents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Term {
    AgeCategory,
    SubjectAttribute,
    TissueSampleAttribute,
    BiologicalSex,
    UnitOfMeasurement,
    TissueSampleType,
    Organ,
    CellType,
    ParcellationEntity,
    ParcellationEntityVersion,
}

impl Term {
    /// URL path segment of this branch
    pub fn branch(self) -> &'static str {
        match self {
            Term::AgeCategory => "ageCategory",
            Term::SubjectAttribute => "subjectAttribute",
            Term::TissueSampleAttribute => "tissueSampleAttribute",
            Term::BiologicalSex => "biologicalSex",
            Term::UnitOfMeasurement => "unitOfMeasurement",
            Term::TissueSampleType => "tissueSampleType",
            Term::Organ => "organ",
            Term::CellType => "cellType",
            Term::ParcellationEntity => "parcellationEntity",
            Term::ParcellationEntityVersion => "parcellationEntityVersion",
        }
    }
}

/// Build the term instance URL for a vocabulary value
pub fn term_url(term: Term, value: &str) -> String {
    format!("{}/{}/{}", INSTANCE_BASE, term.branch(), value.trim())
}

/// Build the core type URL for a type name
pub fn type_url(name: &str) -> String {
    format!("{}/{}", TYPE_BASE, name)
}

/// Build the Knowledge Graph instance URL for a UUID
pub fn kg_instance_url(uuid: &str) -> String {
    format!("{}{}", KG_INSTANCE_PREFIX, uuid)
}

/// openMINDS core type names for a specimen kind: (parent, state)
pub fn specimen_types(kind: SpecimenKind) -> (&'static str, &'static str) {
    match kind {
        SpecimenKind::Subject => ("Subject", "SubjectState"),
        SpecimenKind::SubjectGroup => ("SubjectGroup", "SubjectGroupState"),
        SpecimenKind::TissueSample => ("TissueSample", "TissueSampleState"),
        SpecimenKind::TissueSampleCollection => {
            ("TissueSampleCollection", "TissueSampleCollectionState")
        },
    }
}

/// Origin values that are organs; everything else is a cell type
const ORGANS: &[&str] = &["brain", "muscle"];

/// Resolve a tissue sample origin to its vocabulary branch
pub fn origin_term(origin: &str) -> Term {
    if ORGANS.contains(&origin.trim()) {
        Term::Organ
    } else {
        Term::CellType
    }
}

/// Atlas prefix table for region codes.
///
/// A region code is `<ATLAS><sep><entity>`; the atlas prefix (and its
/// separator) decides whether the code names a parcellation entity or a
/// versioned one. Listed in match order.
const ATLAS_RULES: &[(&str, char, Term)] = &[
    ("AMBA", '_', Term::ParcellationEntityVersion),
    ("JBA", '-', Term::ParcellationEntityVersion),
    ("WHSSD", '_', Term::ParcellationEntity),
    ("JBA", '_', Term::ParcellationEntity),
    ("DWMA", '_', Term::ParcellationEntity),
];

/// WHSSD codes whose second segment names one of these atlas versions point
/// at versioned entities.
const WHSSD_VERSIONS: &[&str] = &["v1-01", "v2", "v3-01", "v3", "v4"];

/// Resolve a single region code to its parcellation branch
pub fn region_term(code: &str) -> Result<Term> {
    let code = code.trim();

    for (prefix, separator, term) in ATLAS_RULES {
        if let Some(rest) = code
            .strip_prefix(prefix)
            .and_then(|r| r.strip_prefix(*separator))
        {
            if *prefix == "WHSSD" {
                let segment = rest.split('_').next().unwrap_or("");
                if WHSSD_VERSIONS.contains(&segment) {
                    return Ok(Term::ParcellationEntityVersion);
                }
            }
            return Ok(*term);
        }
    }

    Err(SpecmetaError::Vocab(format!(
        "region code '{}' has no known atlas prefix",
        code
    )))
}

/// Resolve a comma-separated region list to parcellation term URLs
pub fn region_urls(codes: &str) -> Result<Vec<String>> {
    codes
        .split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(|code| Ok(term_url(region_term(code)?, code)))
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_term_url() {
        assert_eq!(
            term_url(Term::AgeCategory, "adult"),
            "https://openminds.ebrains.eu/instances/ageCategory/adult"
        );
        assert_eq!(
            term_url(Term::UnitOfMeasurement, " week "),
            "https://openminds.ebrains.eu/instances/unitOfMeasurement/week"
        );
    }

    #[test]
    fn test_type_url() {
        assert_eq!(
            type_url("SubjectState"),
            "https://openminds.ebrains.eu/core/SubjectState"
        );
    }

    #[test]
    fn test_kg_instance_url() {
        assert_eq!(
            kg_instance_url("123e4567-e89b-12d3-a456-426614174000"),
            "https://kg.ebrains.eu/api/instances/123e4567-e89b-12d3-a456-426614174000"
        );
    }

    #[test]
    fn test_specimen_types() {
        assert_eq!(
            specimen_types(SpecimenKind::Subject),
            ("Subject", "SubjectState")
        );
        assert_eq!(
            specimen_types(SpecimenKind::TissueSampleCollection),
            ("TissueSampleCollection", "TissueSampleCollectionState")
        );
    }

    #[test]
    fn test_origin_term() {
        assert_eq!(origin_term("brain"), Term::Organ);
        assert_eq!(origin_term("muscle"), Term::Organ);
        assert_eq!(origin_term("astrocyte"), Term::CellType);
    }

    #[test]
    fn test_region_term_versioned() {
        assert_eq!(
            region_term("AMBA_CA1").unwrap(),
            Term::ParcellationEntityVersion
        );
        assert_eq!(
            region_term("JBA-Area-hOc1").unwrap(),
            Term::ParcellationEntityVersion
        );
        assert_eq!(
            region_term("WHSSD_v3-01_hippocampus").unwrap(),
            Term::ParcellationEntityVersion
        );
        assert_eq!(
            region_term("WHSSD_v4_thalamus").unwrap(),
            Term::ParcellationEntityVersion
        );
    }

    #[test]
    fn test_region_term_unversioned() {
        assert_eq!(region_term("WHSSD_brain").unwrap(), Term::ParcellationEntity);
        assert_eq!(region_term("JBA_Area-hOc1").unwrap(), Term::ParcellationEntity);
        assert_eq!(region_term("DWMA_wm").unwrap(), Term::ParcellationEntity);
    }

    #[test]
    fn test_region_term_unknown_prefix() {
        assert!(region_term("ALLEN_CA1").is_err());
        assert!(region_term("hippocampus").is_err());
    }

    #[test]
    fn test_region_urls_splits_commas() {
        let urls = region_urls("WHSSD_brain, AMBA_CA1").unwrap();
        assert_eq!(
            urls,
            vec![
                "https://openminds.ebrains.eu/instances/parcellationEntity/WHSSD_brain",
                "https://openminds.ebrains.eu/instances/parcellationEntityVersion/AMBA_CA1",
            ]
        );
    }
}
