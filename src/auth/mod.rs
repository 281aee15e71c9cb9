//! Authentication module
//!
//! Supports: none, HTTP Basic (username + password or token) and bearer tokens.
//!
//! The `Authenticator` applies the configured credentials to each request.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::AuthConfig;

#[cfg(test)]
mod tests;
