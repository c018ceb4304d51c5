//! `specmeta upload` command implementation
//!
//! Loads every instance document under the given directory, normalizes it,
//! and creates it in the Knowledge Graph one at a time.

use crate::api::{KgClient, OutcomeReport};
use crate::commands::print_report;
use crate::error::{CliError, Result};
use crate::{auth, progress};
use colored::Colorize;
use serde_json::Value;
use specmeta_openminds::correction;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Upload instance documents to the Knowledge Graph
pub async fn run(
    kg_url: String,
    dir: PathBuf,
    space: String,
    token: Option<String>,
) -> Result<()> {
    if !dir.exists() {
        return Err(CliError::FileNotFound(dir.display().to_string()));
    }

    let files = collect_instance_files(&dir)?;
    if files.is_empty() {
        println!("No instance documents found in {}", dir.display());
        return Ok(());
    }

    let token = auth::resolve_token(token)?;
    let client = KgClient::new(kg_url, token)?;

    println!(
        "{} Uploading {} instance(s) to space '{}'",
        "→".cyan(),
        files.len(),
        space
    );

    let pb = progress::create_progress_bar(files.len() as u64, "Uploading instances");
    let mut report = OutcomeReport::new();

    for file in &files {
        let content = std::fs::read_to_string(file)?;
        let mut document: Value = serde_json::from_str(&content)?;
        correction::correct_document(&mut document)?;

        let uuid = correction::document_uuid(&document)
            .ok_or_else(|| {
                CliError::invalid_input(format!("'{}' has no '@id'", file.display()))
            })?
            .to_string();

        let outcome = client.create_instance(&uuid, &document, &space).await?;
        if outcome.is_ok() {
            info!(uuid = %uuid, outcome = %outcome, "instance posted");
        } else {
            warn!(uuid = %uuid, outcome = %outcome, "instance not created");
        }
        report.record(uuid, outcome);
        pb.inc(1);
    }

    pb.finish_and_clear();
    print_report(&report, "uploaded");

    Ok(())
}

/// Collect `.json` files directly in `dir` and one subdirectory level below
/// (older generators grouped documents into per-collection folders).
fn collect_instance_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            for nested in std::fs::read_dir(&path)? {
                let nested_path = nested?.path();
                if is_json_file(&nested_path) {
                    files.push(nested_path);
                }
            }
        } else if is_json_file(&path) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

fn is_json_file(path: &Path) -> bool {
    path.is_file() && path.extension().and_then(|ext| ext.to_str()) == Some("json")
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_collect_instance_files_walks_one_level() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("a.json"), "{}").unwrap();
        std::fs::write(dir.path().join("ignore.csv"), "").unwrap();
        let nested = dir.path().join("collection");
        std::fs::create_dir(&nested).unwrap();
        std::fs::write(nested.join("b.json"), "{}").unwrap();

        let files = collect_instance_files(dir.path()).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| f.extension().unwrap() == "json"));
    }

    #[tokio::test]
    async fn test_upload_missing_dir() {
        let result = run(
            "http://localhost:8000".to_string(),
            PathBuf::from("missing-dir"),
            "dataset".to_string(),
            Some("token".to_string()),
        )
        .await;
        assert!(matches!(result, Err(CliError::FileNotFound(_))));
    }

    #[tokio::test]
    async fn test_upload_empty_dir_is_a_noop() {
        let dir = TempDir::new().unwrap();
        // No token needed: the command returns before authenticating.
        run(
            "http://localhost:8000".to_string(),
            dir.path().to_path_buf(),
            "dataset".to_string(),
            None,
        )
        .await
        .unwrap();
    }
}
