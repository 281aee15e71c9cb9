//! Common types used throughout gh-extract
//!
//! Shared type aliases for the JSON shapes that flow between modules.

use std::collections::HashMap;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type (insertion ordered, `preserve_order` is enabled)
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// One API record: a JSON object as returned by the remote API
pub type Record = JsonObject;

/// A record after flattening; every value is a leaf
pub type NormalizedRecord = JsonObject;

/// Generic key-value map with string keys and values
pub type StringMap = HashMap<String, String>;
