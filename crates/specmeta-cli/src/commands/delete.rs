//! `specmeta delete` command implementation
//!
//! Deletes instances from the Knowledge Graph by UUID, one at a time.

use crate::api::{KgClient, OutcomeReport};
use crate::commands::print_report;
use crate::error::{CliError, Result};
use crate::{auth, progress};
use colored::Colorize;
use tracing::{info, warn};
use uuid::Uuid;

/// Delete instances from the Knowledge Graph
pub async fn run(
    kg_url: String,
    uuids: Vec<String>,
    space: String,
    token: Option<String>,
) -> Result<()> {
    for uuid in &uuids {
        Uuid::parse_str(uuid)
            .map_err(|_| CliError::invalid_input(format!("'{}' is not a UUID", uuid)))?;
    }

    let token = auth::resolve_token(token)?;
    let client = KgClient::new(kg_url, token)?;

    println!(
        "{} Deleting {} instance(s) from space '{}'",
        "→".cyan(),
        uuids.len(),
        space
    );

    let pb = progress::create_progress_bar(uuids.len() as u64, "Deleting instances");
    let mut report = OutcomeReport::new();

    for uuid in &uuids {
        let outcome = client.delete_instance(uuid, &space).await?;
        if outcome.is_ok() {
            info!(uuid = %uuid, outcome = %outcome, "instance deleted");
        } else {
            warn!(uuid = %uuid, outcome = %outcome, "instance not deleted");
        }
        report.record(uuid.clone(), outcome);
        pb.inc(1);
    }

    pb.finish_and_clear();
    print_report(&report, "deleted");

    Ok(())
}
