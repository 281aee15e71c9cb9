//! Template interpolation for object keys
//!
//! Handles `{{ variable }}` interpolation in the destination key, so one
//! configuration can land a dated snapshot per run:
//! `github/{{ organization }}/{{ entity_kind }}/{{ ds }}.json`.

use crate::endpoint::EntityKind;
use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use regex::Regex;
use serde_json::{json, Value};
use std::sync::LazyLock;

/// Regex for matching template variables: {{ variable }}
static TEMPLATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*([a-zA-Z_][a-zA-Z0-9_]*)\s*\}\}").expect("template regex is valid")
});

/// Context for template interpolation
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    /// Variables available to templates
    pub vars: Value,
}

impl TemplateContext {
    /// Create a context from a JSON object of variables
    pub fn with_vars(vars: Value) -> Self {
        Self { vars }
    }

    /// Variables for one run:
    ///
    /// - `ds` - run date, `YYYY-MM-DD`
    /// - `ds_nodash` - run date, `YYYYMMDD`
    /// - `ts` - run timestamp, RFC 3339
    /// - `entity_kind`, `organization`
    pub fn for_run(kind: EntityKind, organization: &str, now: DateTime<Utc>) -> Self {
        Self::with_vars(json!({
            "ds": now.format("%Y-%m-%d").to_string(),
            "ds_nodash": now.format("%Y%m%d").to_string(),
            "ts": now.to_rfc3339(),
            "entity_kind": kind.as_str(),
            "organization": organization,
        }))
    }

    /// Get a variable by name
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.vars.get(name)
    }
}

/// Render a template string with the given context
pub fn render(template: &str, ctx: &TemplateContext) -> Result<String> {
    let mut result = template.to_string();
    let mut errors = Vec::new();

    for cap in TEMPLATE_REGEX.captures_iter(template) {
        let (full_match, [name]) = cap.extract();

        match ctx.get(name) {
            Some(value) => {
                let replacement = value_to_string(value);
                result = result.replace(full_match, &replacement);
            }
            None => {
                errors.push(name.to_string());
            }
        }
    }

    if errors.is_empty() {
        Ok(result)
    } else {
        Err(Error::undefined_var(errors.join(", ")))
    }
}

/// Convert a JSON value to a string for template substitution
fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => value.to_string(),
    }
}
