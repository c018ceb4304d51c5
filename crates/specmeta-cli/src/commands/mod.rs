//! CLI command implementations

pub mod attach;
pub mod convert;
pub mod delete;
pub mod upload;

use crate::api::OutcomeReport;
use colored::Colorize;
use comfy_table::Table;

/// Print the per-UUID outcome summary of a batch operation
pub(crate) fn print_report(report: &OutcomeReport, verb: &str) {
    let total = report.outcomes.len();
    let succeeded = report.succeeded();

    if succeeded == total {
        println!("{} {}/{} instance(s) {}", "✓".green().bold(), succeeded, total, verb);
        return;
    }

    println!("{} {}/{} instance(s) {}", "!".yellow().bold(), succeeded, total, verb);

    let mut table = Table::new();
    table.set_header(vec!["UUID", "Outcome"]);
    for (uuid, outcome) in report.failures() {
        table.add_row(vec![uuid.clone(), outcome.to_string()]);
    }
    println!("{table}");
}
