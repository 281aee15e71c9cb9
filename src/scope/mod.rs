//! Scope expansion
//!
//! Turns an extraction request into the ordered list of scope units the
//! engine runs, one per (entity kind, organization, repository).
//!
//! # Overview
//!
//! - `ExtractionRequest` - validated, immutable description of one run
//! - `RepositoryScope` - none, one, every repository, or an explicit list
//! - `expand` - produces the `ExtractionUnit`s, listing the organization's
//!   repositories first when the scope is `all`

mod expander;
mod types;

pub use expander::{expand, list_repositories};
pub use types::{ExtractionRequest, ExtractionUnit, RepositoryScope, ALL_REPOSITORIES};
