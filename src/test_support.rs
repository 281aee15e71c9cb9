//! In-memory fetch double shared by unit tests

use crate::error::{Error, Result};
use crate::pagination::{Fetch, PAGE_PARAM};
use crate::types::{JsonValue, StringMap};
use async_trait::async_trait;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Mutex;

/// Serves canned pages per path and records every call
#[derive(Debug, Default)]
pub(crate) struct MockFetch {
    pages: HashMap<String, Vec<Vec<JsonValue>>>,
    failures: HashMap<String, u16>,
    calls: Mutex<Vec<(String, StringMap)>>,
}

impl MockFetch {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Serve these pages for `path`; pages past the end are empty
    pub(crate) fn with_pages(mut self, path: &str, pages: Vec<Vec<JsonValue>>) -> Self {
        self.pages.insert(path.to_string(), pages);
        self
    }

    /// Serve `total` records `{"id": n}` for `path`, `page_size` per page
    pub(crate) fn with_records(self, path: &str, total: usize, page_size: usize) -> Self {
        let records: Vec<JsonValue> = (0..total).map(|i| json!({ "id": i })).collect();
        let pages = records.chunks(page_size).map(<[JsonValue]>::to_vec).collect();
        self.with_pages(path, pages)
    }

    /// Answer every request for `path` with an HTTP error
    pub(crate) fn failing(mut self, path: &str, status: u16) -> Self {
        self.failures.insert(path.to_string(), status);
        self
    }

    pub(crate) fn calls(&self) -> Vec<(String, StringMap)> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl Fetch for MockFetch {
    async fn fetch(&self, path: &str, params: &StringMap) -> Result<Vec<JsonValue>> {
        self.calls
            .lock()
            .unwrap()
            .push((path.to_string(), params.clone()));

        if let Some(status) = self.failures.get(path) {
            return Err(Error::http_status(*status, "mock failure"));
        }

        let pages = self
            .pages
            .get(path)
            .ok_or_else(|| Error::http_status(404, "Not Found"))?;

        let page: usize = params
            .get(PAGE_PARAM)
            .and_then(|p| p.parse().ok())
            .unwrap_or(1);

        Ok(pages.get(page - 1).cloned().unwrap_or_default())
    }
}
