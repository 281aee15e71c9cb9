//! Endpoint resolution
//!
//! Maps an entity kind plus an organization/repository scope to a GitHub v3
//! resource path.
//!
//! # Overview
//!
//! - `EntityKind` - the closed set of supported entity kinds
//! - `resolve` - pure mapping from kind and scope to a path

mod resolver;
mod types;

pub use resolver::resolve;
pub use types::EntityKind;
