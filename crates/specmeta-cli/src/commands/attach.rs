//! `specmeta attach` command implementation
//!
//! Patches a dataset version's studiedSpecimen list with specimen UUIDs,
//! given directly or read from an overview file.

use crate::api::KgClient;
use crate::error::{CliError, Result};
use crate::{auth, progress};
use colored::Colorize;
use specmeta_ingest::read_overview;
use std::path::PathBuf;
use tracing::info;
use uuid::Uuid;

/// Add specimens to a dataset version's studiedSpecimen list
pub async fn run(
    kg_url: String,
    dataset_version: String,
    uuids: Vec<String>,
    overview: Option<PathBuf>,
    space: String,
    token: Option<String>,
) -> Result<()> {
    let mut specimen_uuids = uuids;

    if let Some(path) = overview {
        for row in read_overview(&path)? {
            if let Some(uuid) = row.specimen_uuid {
                if !specimen_uuids.contains(&uuid) {
                    specimen_uuids.push(uuid);
                }
            }
        }
    }

    if specimen_uuids.is_empty() {
        return Err(CliError::invalid_input(
            "no specimen UUIDs given; pass them as arguments or via --overview",
        ));
    }

    Uuid::parse_str(&dataset_version).map_err(|_| {
        CliError::invalid_input(format!("'{}' is not a UUID", dataset_version))
    })?;
    for uuid in &specimen_uuids {
        Uuid::parse_str(uuid)
            .map_err(|_| CliError::invalid_input(format!("'{}' is not a UUID", uuid)))?;
    }

    let token = auth::resolve_token(token)?;
    let client = KgClient::new(kg_url, token)?;

    println!(
        "{} Adding {} specimen(s) to dataset version {}",
        "→".cyan(),
        specimen_uuids.len(),
        dataset_version
    );

    let pb = progress::create_spinner("Patching dataset version");
    let outcome = client
        .attach_specimen(&dataset_version, &specimen_uuids, &space)
        .await?;
    pb.finish_and_clear();
    info!(dsv = %dataset_version, outcome = %outcome, "dataset version patched");

    if outcome.is_ok() {
        println!("{} Dataset version updated", "✓".green().bold());
        Ok(())
    } else {
        Err(CliError::api(format!(
            "dataset version {} not patched: {}",
            dataset_version, outcome
        )))
    }
}
