//! CLI module
//!
//! Command-line interface for running extractions.
//!
//! # Commands
//!
//! - `run` - Extract one entity kind and upload the NDJSON snapshot
//! - `resolve` - Print the API path for an entity kind
//! - `kinds` - List supported entity kinds

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat, RunArgs};
pub use runner::Runner;
