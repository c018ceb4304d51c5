//! API response types
//!
//! The Knowledge Graph reports success per item; the CLI only inspects a
//! small set of status codes and carries everything else through verbatim.

use serde::{Deserialize, Serialize};

/// Outcome of one instance operation, derived from the HTTP status code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UploadOutcome {
    /// 200: created / patched / deleted
    Ok,
    /// 409: an instance with this UUID already exists
    AlreadyExists,
    /// 401: token not valid, authorisation unsuccessful
    Unauthorized,
    /// 404: instance not found
    NotFound,
    /// Any other status code
    Failed(u16),
}

impl UploadOutcome {
    /// Map an HTTP status code to an outcome
    pub fn from_status(status: u16) -> Self {
        match status {
            200 => UploadOutcome::Ok,
            409 => UploadOutcome::AlreadyExists,
            401 => UploadOutcome::Unauthorized,
            404 => UploadOutcome::NotFound,
            other => UploadOutcome::Failed(other),
        }
    }

    /// Whether the remote store ended up in the requested state
    pub fn is_ok(self) -> bool {
        matches!(self, UploadOutcome::Ok | UploadOutcome::AlreadyExists)
    }
}

impl std::fmt::Display for UploadOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UploadOutcome::Ok => write!(f, "OK"),
            UploadOutcome::AlreadyExists => write!(f, "instance already exists"),
            UploadOutcome::Unauthorized => {
                write!(f, "token not valid, authorisation unsuccessful")
            },
            UploadOutcome::NotFound => write!(f, "instance not found"),
            UploadOutcome::Failed(status) => write!(f, "failed with status {}", status),
        }
    }
}

/// Per-UUID outcomes of one batch operation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutcomeReport {
    pub outcomes: Vec<(String, UploadOutcome)>,
}

impl OutcomeReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome for one UUID
    pub fn record(&mut self, uuid: impl Into<String>, outcome: UploadOutcome) {
        self.outcomes.push((uuid.into(), outcome));
    }

    /// Number of items that ended in the requested state
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|(_, o)| o.is_ok()).count()
    }

    /// Items that did not
    pub fn failures(&self) -> impl Iterator<Item = &(String, UploadOutcome)> {
        self.outcomes.iter().filter(|(_, o)| !o.is_ok())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_from_status() {
        assert_eq!(UploadOutcome::from_status(200), UploadOutcome::Ok);
        assert_eq!(UploadOutcome::from_status(409), UploadOutcome::AlreadyExists);
        assert_eq!(UploadOutcome::from_status(401), UploadOutcome::Unauthorized);
        assert_eq!(UploadOutcome::from_status(404), UploadOutcome::NotFound);
        assert_eq!(UploadOutcome::from_status(500), UploadOutcome::Failed(500));
    }

    #[test]
    fn test_outcome_is_ok() {
        assert!(UploadOutcome::Ok.is_ok());
        assert!(UploadOutcome::AlreadyExists.is_ok());
        assert!(!UploadOutcome::Unauthorized.is_ok());
        assert!(!UploadOutcome::Failed(500).is_ok());
    }

    #[test]
    fn test_report_counts() {
        let mut report = OutcomeReport::new();
        report.record("a", UploadOutcome::Ok);
        report.record("b", UploadOutcome::AlreadyExists);
        report.record("c", UploadOutcome::Unauthorized);

        assert_eq!(report.succeeded(), 2);
        let failures: Vec<_> = report.failures().collect();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].0, "c");
    }
}
