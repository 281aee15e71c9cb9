//! CLI commands and argument parsing

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Extract GitHub entities into object storage
#[derive(Parser, Debug)]
#[command(name = "gh-extract")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for command results
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract one entity kind and upload the snapshot
    Run(RunArgs),

    /// Print the API path for an entity kind
    Resolve {
        /// Entity kind (e.g. commits, pull_requests)
        entity_kind: String,

        /// Organization login
        organization: String,

        /// Repository name, for repository-scoped kinds
        repository: Option<String>,
    },

    /// List supported entity kinds
    Kinds,
}

/// Arguments for `run`
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Run configuration file (YAML or JSON)
    #[arg(short, long)]
    pub config: PathBuf,

    /// Override the entity kind
    #[arg(long)]
    pub entity_kind: Option<String>,

    /// Override the organization
    #[arg(long)]
    pub organization: Option<String>,

    /// Override the repository scope (`all`, a name, or a comma-separated list)
    #[arg(long, value_delimiter = ',')]
    pub repository: Option<Vec<String>>,

    /// Override the destination key template
    #[arg(long)]
    pub key: Option<String>,

    /// Write to a local directory instead of the configured destination
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one document per line)
    Json,
    /// Human-readable output
    Pretty,
}
