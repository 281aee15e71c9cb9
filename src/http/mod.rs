//! HTTP client module
//!
//! The transport behind the `Fetch` capability: a reqwest client bound to the
//! GitHub API base URL, with authentication and optional rate limiting.
//!
//! # Features
//!
//! - **Authentication**: Basic or bearer, via the auth module
//! - **Rate Limiting**: Token bucket rate limiter using governor
//! - **Status Classification**: Non-2xx answers become `Error::HttpStatus`,
//!   exhausted GitHub quotas become `Error::RateLimited`
//!
//! Requests are never retried here.

mod client;
mod rate_limit;

pub use client::{HttpClient, HttpClientConfig, DEFAULT_BASE_URL, GITHUB_ACCEPT};
pub use rate_limit::{RateLimiter, RateLimiterConfig};
