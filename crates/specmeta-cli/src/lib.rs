//! Specmeta CLI Library
//!
//! Command-line interface for converting specimen metadata to openMINDS
//! instance documents and managing them in the EBRAINS Knowledge Graph.
//!
//! # Overview
//!
//! - **Conversion**: turn a specimen table into instance documents
//!   (`specmeta convert`)
//! - **Upload**: create the documents in the Knowledge Graph
//!   (`specmeta upload`)
//! - **Attachment**: link specimens to a dataset version
//!   (`specmeta attach`)
//! - **Deletion**: remove instances again (`specmeta delete`)

pub mod api;
pub mod auth;
pub mod commands;
pub mod config;
pub mod error;
pub mod progress;

// Re-export commonly used types
pub use config::Config;
pub use error::{CliError, Result};

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Specmeta - Specimen Metadata Converter for the EBRAINS Knowledge Graph
#[derive(Parser, Debug)]
#[command(name = "specmeta")]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Knowledge Graph API base URL
    #[arg(
        long,
        env = "SPECMETA_KG_URL",
        default_value = config::DEFAULT_KG_URL,
        global = true
    )]
    pub kg_url: String,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a specimen table into openMINDS instance documents
    Convert {
        /// Input table (.csv or .json)
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory (defaults to createdInstances_<timestamp>)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Which specimen categories to convert
        #[arg(short, long, value_enum, default_value_t = ConvertKind::Both)]
        kind: ConvertKind,

        /// Overview file from an earlier run, used to resolve
        /// isPartOf/descendedFrom references by name
        #[arg(long)]
        overview: Option<PathBuf>,
    },

    /// Upload instance documents to the Knowledge Graph
    Upload {
        /// Directory containing the generated instance documents
        #[arg(short, long)]
        dir: PathBuf,

        /// Space to create the instances in, e.g. "dataset" or "common"
        #[arg(short, long, env = "SPECMETA_SPACE", default_value = config::DEFAULT_SPACE)]
        space: String,

        /// Authorisation token (prompted for when omitted)
        #[arg(long, env = "KG_TOKEN", hide_env_values = true)]
        token: Option<String>,
    },

    /// Delete instances from the Knowledge Graph
    Delete {
        /// UUIDs of the instances to delete
        #[arg(required = true)]
        uuids: Vec<String>,

        /// Space to delete the instances from
        #[arg(short, long, env = "SPECMETA_SPACE", default_value = config::DEFAULT_SPACE)]
        space: String,

        /// Authorisation token (prompted for when omitted)
        #[arg(long, env = "KG_TOKEN", hide_env_values = true)]
        token: Option<String>,
    },

    /// Add specimens to a dataset version's studiedSpecimen list
    Attach {
        /// UUID of the dataset version to attach the specimens to
        #[arg(short, long)]
        dataset_version: String,

        /// Specimen UUIDs to attach
        uuids: Vec<String>,

        /// Overview file whose specimen UUIDs should be attached
        #[arg(long)]
        overview: Option<PathBuf>,

        /// Space the dataset version lives in
        #[arg(short, long, env = "SPECMETA_SPACE", default_value = config::DEFAULT_SPACE)]
        space: String,

        /// Authorisation token (prompted for when omitted)
        #[arg(long, env = "KG_TOKEN", hide_env_values = true)]
        token: Option<String>,
    },
}

/// Specimen categories the convert command can handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConvertKind {
    /// Subjects and subject groups only
    Subjects,
    /// Tissue samples and collections only
    Samples,
    /// Everything in the input table
    Both,
}

impl std::fmt::Display for ConvertKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ConvertKind::Subjects => "subjects",
            ConvertKind::Samples => "samples",
            ConvertKind::Both => "both",
        };
        write!(f, "{}", s)
    }
}
