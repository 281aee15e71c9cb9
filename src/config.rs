//! Run configuration
//!
//! One YAML (or JSON) document describes one extraction run: what to pull,
//! from where, and where the snapshot lands.
//!
//! ```yaml
//! entity_kind: pull_requests
//! organization: acme
//! repository: all
//! extra_query_params:
//!   state: all
//! destination:
//!   kind: s3
//!   bucket: data-lake
//!   key: "github/{{ organization }}/{{ entity_kind }}/{{ ds }}.json"
//! github:
//!   auth:
//!     type: bearer
//!     token_env: GITHUB_TOKEN
//! ```

use crate::auth::AuthConfig;
use crate::engine::ExtractConfig;
use crate::error::{Error, Result};
use crate::http::{HttpClientConfig, RateLimiterConfig, DEFAULT_BASE_URL};
use crate::output::DestinationKind;
use crate::scope::{ExtractionRequest, RepositoryScope};
use crate::types::{JsonValue, StringMap};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

// ============================================================================
// Top-Level Run Config
// ============================================================================

/// Complete run configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Entity kind name, validated when the request is built
    pub entity_kind: String,

    /// Organization (owner) login
    pub organization: String,

    /// Repository name, `all`, or a list of names
    #[serde(default)]
    pub repository: RepositoryScope,

    /// Additional query parameters; scalar values are stringified
    #[serde(default)]
    pub extra_query_params: HashMap<String, JsonValue>,

    /// Where the snapshot is written
    pub destination: DestinationConfig,

    /// API connection settings
    #[serde(default)]
    pub github: GithubConfig,

    /// Scope units fetched at once
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,
}

fn default_max_concurrency() -> usize {
    1
}

// ============================================================================
// Destination
// ============================================================================

/// Object storage destination
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DestinationConfig {
    /// Storage family
    #[serde(default)]
    pub kind: DestinationKind,

    /// Named connection profile, reported in logs only
    #[serde(default)]
    pub connection: Option<String>,

    /// Bucket name (directory for `local`)
    pub bucket: String,

    /// Object key, may contain `{{ ds }}`-style variables
    pub key: String,

    /// Custom endpoint for S3-compatible stores
    #[serde(default)]
    pub endpoint: Option<String>,
}

// ============================================================================
// GitHub Connection
// ============================================================================

/// API connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubConfig {
    /// API root
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Authentication
    #[serde(default)]
    pub auth: AuthDefinition,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Request pacing; 0 disables the limiter
    #[serde(default)]
    pub requests_per_second: Option<u32>,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            auth: AuthDefinition::default(),
            timeout_secs: default_timeout_secs(),
            requests_per_second: None,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Authentication as written in the config file.
///
/// Secrets are given inline or as the name of an environment variable;
/// the inline value wins when both are present.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AuthDefinition {
    /// Anonymous access
    #[default]
    None,

    /// HTTP Basic
    Basic {
        /// Username
        username: String,
        /// Password or personal access token
        #[serde(default)]
        password: Option<String>,
        /// Environment variable holding the password
        #[serde(default)]
        password_env: Option<String>,
    },

    /// Bearer token
    Bearer {
        /// Token
        #[serde(default)]
        token: Option<String>,
        /// Environment variable holding the token
        #[serde(default)]
        token_env: Option<String>,
    },
}

impl AuthDefinition {
    /// Resolve secrets into a runtime auth config
    pub fn resolve(&self) -> Result<AuthConfig> {
        match self {
            AuthDefinition::None => Ok(AuthConfig::None),
            AuthDefinition::Basic {
                username,
                password,
                password_env,
            } => {
                let password = resolve_secret("github.auth.password", password, password_env)?;
                Ok(AuthConfig::basic(username, password))
            }
            AuthDefinition::Bearer { token, token_env } => {
                let token = resolve_secret("github.auth.token", token, token_env)?;
                Ok(AuthConfig::bearer(token))
            }
        }
    }
}

fn resolve_secret(field: &str, inline: &Option<String>, env: &Option<String>) -> Result<String> {
    if let Some(value) = inline {
        return Ok(value.clone());
    }
    let var = env.as_ref().ok_or_else(|| Error::missing_field(field))?;
    std::env::var(var).map_err(|_| {
        Error::invalid_value(field, format!("environment variable {var} is not set"))
    })
}

// ============================================================================
// Loading
// ============================================================================

impl RunConfig {
    /// Load from a file; `.json` files are read as JSON, anything else as YAML
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read config {}: {e}", path.display()))
        })?;

        if path.extension().is_some_and(|ext| ext == "json") {
            Self::from_json_str(&content)
        } else {
            Self::from_yaml_str(&content)
        }
    }

    /// Parse a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Extra query parameters as strings. Arrays, objects and nulls are rejected.
    pub fn extra_params(&self) -> Result<StringMap> {
        self.extra_query_params
            .iter()
            .map(|(key, value)| {
                let value = match value {
                    JsonValue::String(s) => s.clone(),
                    JsonValue::Number(n) => n.to_string(),
                    JsonValue::Bool(b) => b.to_string(),
                    other => {
                        return Err(Error::invalid_value(
                            format!("extra_query_params.{key}"),
                            format!("expected a scalar, got {other}"),
                        ))
                    }
                };
                Ok((key.clone(), value))
            })
            .collect()
    }

    /// Build the validated extraction request
    pub fn to_request(&self) -> Result<ExtractionRequest> {
        ExtractionRequest::new(
            &self.entity_kind,
            self.organization.clone(),
            self.repository.clone(),
            self.extra_params()?,
        )
    }

    /// Runtime auth config with secrets resolved
    pub fn auth_config(&self) -> Result<AuthConfig> {
        self.github.auth.resolve()
    }

    /// HTTP client settings
    pub fn http_config(&self) -> HttpClientConfig {
        let builder = HttpClientConfig::builder()
            .base_url(&self.github.base_url)
            .timeout(Duration::from_secs(self.github.timeout_secs));

        match self.github.requests_per_second {
            Some(0) => builder.no_rate_limit(),
            Some(rps) => builder.rate_limit(RateLimiterConfig::per_second(rps)),
            None => builder,
        }
        .build()
    }

    /// Engine settings
    pub fn extract_config(&self) -> ExtractConfig {
        ExtractConfig::new().with_max_concurrency(self.max_concurrency)
    }
}
