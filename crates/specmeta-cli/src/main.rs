//! Specmeta CLI - Main entry point

use clap::Parser;
use specmeta_cli::{Cli, Commands};
use specmeta_common::logging::{init_logging, LogConfig, LogLevel, LogOutput};
use std::process;
use tracing::error;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize logging based on verbose flag and environment
    let log_config = if cli.verbose {
        // Verbose mode: log to console with debug level
        LogConfig::builder()
            .level(LogLevel::Debug)
            .output(LogOutput::Console)
            .log_file_prefix("specmeta".to_string())
            .build()
    } else {
        // Normal mode: only warnings and errors to console
        LogConfig::builder()
            .level(LogLevel::Warn)
            .output(LogOutput::Console)
            .log_file_prefix("specmeta".to_string())
            .build()
    };

    // Merge with environment variables (they take precedence)
    let log_config = LogConfig::from_env().unwrap_or(log_config);

    // Initialize logging (ignore errors as the CLI should work without logging)
    let _ = init_logging(&log_config);

    // Execute command
    let result = execute_command(cli).await;

    // Handle result
    if let Err(e) = result {
        error!(error = %e, "Command failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Execute the CLI command
async fn execute_command(cli: Cli) -> specmeta_cli::Result<()> {
    match cli.command {
        Commands::Convert {
            input,
            output,
            kind,
            overview,
        } => specmeta_cli::commands::convert::run(input, output, kind, overview).await,

        Commands::Upload { dir, space, token } => {
            specmeta_cli::commands::upload::run(cli.kg_url, dir, space, token).await
        },

        Commands::Delete {
            uuids,
            space,
            token,
        } => specmeta_cli::commands::delete::run(cli.kg_url, uuids, space, token).await,

        Commands::Attach {
            dataset_version,
            uuids,
            overview,
            space,
            token,
        } => {
            specmeta_cli::commands::attach::run(
                cli.kg_url,
                dataset_version,
                uuids,
                overview,
                space,
                token,
            )
            .await
        },
    }
}
