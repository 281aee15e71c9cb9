//! Page-number pagination driver

use super::types::{
    Fetch, PaginationState, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, PAGE_PARAM, PER_PAGE_PARAM,
};
use crate::endpoint::EntityKind;
use crate::error::{Error, Result};
use crate::normalize::filter_record;
use crate::types::{JsonValue, Record, StringMap};
use tracing::{debug, info};

/// Page-number paginator for one extraction.
///
/// Holds the merged query parameters; the `page` parameter is owned by the
/// driver and cannot be overridden.
#[derive(Debug, Clone)]
pub struct Paginator {
    /// Query parameters sent with every page
    params: StringMap,
    /// Effective page size (the `per_page` value actually sent)
    page_size: u32,
}

impl Default for Paginator {
    fn default() -> Self {
        Self {
            params: StringMap::from([(
                PER_PAGE_PARAM.to_string(),
                DEFAULT_PAGE_SIZE.to_string(),
            )]),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Paginator {
    /// Create a paginator with caller-supplied parameters merged over the
    /// defaults. A `per_page` override must be an integer in `1..=100`.
    pub fn new(extra_params: &StringMap) -> Result<Self> {
        let mut paginator = Self::default();

        for (key, value) in extra_params {
            if key == PAGE_PARAM {
                continue;
            }
            paginator.params.insert(key.clone(), value.clone());
        }

        if let Some(per_page) = extra_params.get(PER_PAGE_PARAM) {
            paginator.page_size = per_page
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|size| (1..=MAX_PAGE_SIZE).contains(size))
                .ok_or_else(|| {
                    let message =
                        format!("expected an integer from 1 to {MAX_PAGE_SIZE}, got '{per_page}'");
                    Error::invalid_value(PER_PAGE_PARAM, message)
                })?;
        }

        Ok(paginator)
    }

    /// Effective page size
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Fresh state for a new run of this paginator
    pub fn initial_state(&self) -> PaginationState {
        PaginationState::new(self.page_size)
    }

    /// Query parameters for the page `state` points at
    pub fn params_for(&self, state: &PaginationState) -> StringMap {
        let mut params = self.params.clone();
        params.insert(PAGE_PARAM.to_string(), state.page.to_string());
        params
    }

    /// Fetch every page of `path`, filtering records for `kind` as each page
    /// arrives. Fetch errors propagate unchanged.
    pub async fn paginate<F>(
        &self,
        fetch: &F,
        kind: EntityKind,
        path: &str,
    ) -> Result<Vec<Record>>
    where
        F: Fetch + ?Sized,
    {
        let mut state = self.initial_state();
        let mut output = Vec::new();

        while !state.exhausted {
            let params = self.params_for(&state);
            debug!(path, page = state.page, "Fetching page");

            let page = fetch.fetch(path, &params).await?;
            let count = page.len();

            for value in page {
                let mut record = into_record(value, path)?;
                filter_record(kind, &mut record);
                output.push(record);
            }

            state.record_page(count);
            info!(
                path,
                retrieved = state.total_fetched,
                "Retrieved: {}",
                state.total_fetched
            );
        }

        Ok(output)
    }
}

/// Paginate `path` with default parameters plus `extra_params`
pub async fn paginate<F>(
    fetch: &F,
    kind: EntityKind,
    path: &str,
    extra_params: &StringMap,
) -> Result<Vec<Record>>
where
    F: Fetch + ?Sized,
{
    Paginator::new(extra_params)?
        .paginate(fetch, kind, path)
        .await
}

fn into_record(value: JsonValue, path: &str) -> Result<Record> {
    match value {
        JsonValue::Object(map) => Ok(map),
        other => Err(Error::decode(format!(
            "Expected an object in page of '{path}', got {}",
            json_type_name(&other)
        ))),
    }
}

fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
