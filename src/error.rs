//! Error types for gh-extract
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! Errors fall into three groups that the engine treats differently:
//! request errors (fail before any network call), unit failures (caught at
//! the scope-unit boundary, see [`Error::is_unit_failure`]) and everything
//! else, which aborts the run.

use thiserror::Error;

/// The main error type for gh-extract
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Request / Configuration Errors
    // ============================================================================
    #[error("Unsupported entity kind: '{kind}'")]
    UnsupportedEntityKind { kind: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Rate limited, retry after {retry_after_seconds}s")]
    RateLimited { retry_after_seconds: u64 },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Data Processing Errors
    // ============================================================================
    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    // ============================================================================
    // Sink Errors
    // ============================================================================
    #[error("Sink write failed: {message}")]
    Sink { message: String },

    // ============================================================================
    // Template Errors
    // ============================================================================
    #[error("Undefined variable in template: {variable}")]
    UndefinedVariable { variable: String },
}

impl Error {
    /// Create an unsupported entity kind error
    pub fn unsupported_kind(kind: impl Into<String>) -> Self {
        Self::UnsupportedEntityKind { kind: kind.into() }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create an invalid value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a sink error
    pub fn sink(message: impl Into<String>) -> Self {
        Self::Sink {
            message: message.into(),
        }
    }

    /// Create an undefined variable error
    pub fn undefined_var(variable: impl Into<String>) -> Self {
        Self::UndefinedVariable {
            variable: variable.into(),
        }
    }

    /// Whether this error is an expected failure of a single scope unit.
    ///
    /// A repository with no commits answers 409, a missing one 404; transport
    /// and response decoding failures are confined to the unit as well.
    /// Credential (401/403), quota (429, `RateLimited`) and server errors
    /// concern every unit and are not swallowed.
    pub fn is_unit_failure(&self) -> bool {
        match self {
            Error::HttpStatus { status, .. } => matches!(status, 404 | 409),
            Error::Http(_) | Error::Timeout { .. } | Error::Decode { .. } | Error::JsonParse(_) => {
                true
            }
            _ => false,
        }
    }
}

/// Result type alias for gh-extract
pub type Result<T> = std::result::Result<T, Error>;
