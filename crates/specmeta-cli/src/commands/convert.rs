//! `specmeta convert` command implementation
//!
//! Reads a specimen table, builds the openMINDS instance documents, and
//! writes them together with the overview file(s) into the output folder.

use crate::error::{CliError, Result};
use crate::ConvertKind;
use chrono::Local;
use colored::Colorize;
use comfy_table::Table;
use specmeta_common::SpecimenRow;
use specmeta_ingest::{merge, read_overview, reader, resolve_links, write_overview};
use specmeta_openminds::{sample, subject};
use std::path::{Path, PathBuf};
use tracing::info;

/// Convert a specimen table into instance documents
pub async fn run(
    input: PathBuf,
    output: Option<PathBuf>,
    kind: ConvertKind,
    overview: Option<PathBuf>,
) -> Result<()> {
    let mut rows = read_input(&input)?;
    if rows.is_empty() {
        return Err(CliError::invalid_input(format!(
            "'{}' contains no specimen rows",
            input.display()
        )));
    }

    // Resolve isPartOf / descendedFrom names against an earlier run.
    if let Some(path) = overview {
        let prior = read_overview(&path)?;
        resolve_links(&mut rows, &prior);
    }

    let out_dir = output.unwrap_or_else(default_output_dir);
    if out_dir.exists() {
        info!(dir = %out_dir.display(), "output folder already exists");
    } else {
        std::fs::create_dir_all(&out_dir)?;
        info!(dir = %out_dir.display(), "created output folder");
    }

    let (subject_rows, sample_rows): (Vec<SpecimenRow>, Vec<SpecimenRow>) = rows
        .into_iter()
        .partition(|row| !row.specimen_type.is_sample());

    let mut converted: Vec<SpecimenRow> = Vec::new();
    let mut subject_overview: Option<Vec<SpecimenRow>> = None;

    if matches!(kind, ConvertKind::Subjects | ConvertKind::Both) && !subject_rows.is_empty() {
        let built = subject::build_subjects(&subject_rows, &out_dir)?;
        write_overview(&built, &out_dir)?;
        converted.extend(built.iter().cloned());
        subject_overview = Some(built);
    }

    if matches!(kind, ConvertKind::Samples | ConvertKind::Both) && !sample_rows.is_empty() {
        // Samples created in the same run descend from the subjects above.
        let rows = match &subject_overview {
            Some(subjects) => merge(subjects, &sample_rows),
            None => sample_rows,
        };
        let built = sample::build_samples(&rows, &out_dir)?;
        write_overview(&built, &out_dir)?;
        converted.extend(built);
    }

    if converted.is_empty() {
        return Err(CliError::invalid_input(format!(
            "'{}' has no rows of the requested specimen kind",
            input.display()
        )));
    }

    print_summary(&converted);
    println!(
        "\n{} Instances and overview saved in {}",
        "✓".green().bold(),
        out_dir.display()
    );

    Ok(())
}

/// Read the input table; the file extension picks the format
fn read_input(path: &Path) -> Result<Vec<SpecimenRow>> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(reader::read_json(path)?),
        Some("csv") => Ok(reader::read_csv(path)?),
        _ => Err(CliError::invalid_input(format!(
            "'{}' is neither a .csv nor a .json file",
            path.display()
        ))),
    }
}

/// Timestamped default output folder, e.g. createdInstances_24012025_0930
fn default_output_dir() -> PathBuf {
    PathBuf::from(format!(
        "createdInstances_{}",
        Local::now().format("%d%m%Y_%H%M")
    ))
}

fn print_summary(rows: &[SpecimenRow]) {
    let mut table = Table::new();
    table.set_header(vec!["Specimen", "Kind", "Specimen UUID", "State UUID"]);
    for row in rows {
        table.add_row(vec![
            row.name.clone(),
            row.specimen_type.to_string(),
            row.specimen_uuid.clone().unwrap_or_default(),
            row.state_uuid.clone().unwrap_or_default(),
        ]);
    }
    println!("{table}");
}
