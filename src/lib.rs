// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # gh-extract
//!
//! Pulls collections of GitHub v3 entities, strips and flattens their nested
//! structure into a flat, columnar-friendly shape, and lands the result as a
//! newline-delimited JSON snapshot in object storage.
//!
//! ## Features
//!
//! - **Eight entity kinds**: commits, comments, issues, members, organizations,
//!   pull requests, repositories
//! - **Page-number pagination**: fetches until the first short page
//! - **Declarative normalization**: a strip/retain rule table, then flattening
//! - **Repository fan-out**: one repository, an explicit list, or `all`
//! - **Object storage**: S3, GCS or a local directory
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use gh_extract::{CloudSink, DestinationKind, Extractor, ExtractionRequest, HttpClient};
//! use gh_extract::{AuthConfig, HttpClientConfig, RepositoryScope, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = HttpClient::with_auth(
//!         HttpClientConfig::default(),
//!         AuthConfig::bearer(std::env::var("GITHUB_TOKEN").unwrap_or_default()),
//!     )?;
//!     let request = ExtractionRequest::new(
//!         "pull_requests",
//!         "acme",
//!         RepositoryScope::All,
//!         Default::default(),
//!     )?;
//!     let sink = CloudSink::for_destination(DestinationKind::S3, "lake", None)?;
//!
//!     let summary = Extractor::new(client)
//!         .run(&request, &sink, "github/acme/pull_requests.json")
//!         .await?;
//!     println!("{} records -> {}", summary.stats.records, summary.location);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                         Extractor::run                           │
//! │  request → expand → per unit: resolve, paginate → serialize → sink│
//! └──────────────────────────────────────────────────────────────────┘
//!                                 │
//! ┌───────────┬───────────┬───────┴─────┬─────────────┬─────────────┐
//! │   Scope   │ Endpoint  │  Paginate   │  Normalize  │   Output    │
//! ├───────────┼───────────┼─────────────┼─────────────┼─────────────┤
//! │ single    │ kind→path │ page/per_pg │ rule table  │ NDJSON      │
//! │ list      │           │ short page  │ flatten     │ S3 / GCS    │
//! │ all       │           │ stops       │             │ local       │
//! └───────────┴───────────┴─────────────┴─────────────┴─────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Entity kinds and endpoint paths
pub mod endpoint;

/// Authentication
pub mod auth;

/// HTTP client with rate limiting
pub mod http;

/// Page-number pagination
pub mod pagination;

/// Record filtering and flattening
pub mod normalize;

/// Extraction requests and repository fan-out
pub mod scope;

/// NDJSON serialization and object storage sinks
pub mod output;

/// Main execution engine
pub mod engine;

/// Run configuration
pub mod config;

/// Template interpolation
pub mod template;

/// Command-line interface
pub mod cli;

#[cfg(test)]
mod test_support;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use auth::AuthConfig;
pub use config::RunConfig;
pub use endpoint::EntityKind;
pub use engine::{Extractor, RunSummary};
pub use http::{HttpClient, HttpClientConfig};
pub use output::{CloudSink, DestinationKind, Sink};
pub use pagination::Fetch;
pub use scope::{ExtractionRequest, RepositoryScope};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
