//! Pagination types and traits
//!
//! Defines the fetch capability the driver is generic over and the state it
//! tracks between pages.

use crate::error::Result;
use crate::types::{JsonValue, StringMap};
use async_trait::async_trait;
use std::sync::Arc;

/// Page size used unless the caller overrides `per_page`
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Largest page the API serves
pub const MAX_PAGE_SIZE: u32 = 100;

/// Query parameter carrying the page number
pub const PAGE_PARAM: &str = "page";

/// Query parameter carrying the page size
pub const PER_PAGE_PARAM: &str = "per_page";

/// Capability to fetch one page of a list endpoint.
///
/// Implementations return the parsed JSON array, or fail with a transport,
/// HTTP status or decode error.
#[async_trait]
pub trait Fetch: Send + Sync {
    /// Fetch `path` with the given query parameters
    async fn fetch(&self, path: &str, params: &StringMap) -> Result<Vec<JsonValue>>;
}

#[async_trait]
impl<T: Fetch + ?Sized> Fetch for Arc<T> {
    async fn fetch(&self, path: &str, params: &StringMap) -> Result<Vec<JsonValue>> {
        (**self).fetch(path, params).await
    }
}

/// Tracks pagination state during iteration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationState {
    /// Records per page requested
    pub page_size: u32,
    /// Page to request next (1-based)
    pub page: u32,
    /// Total records fetched so far
    pub total_fetched: u64,
    /// Set once a short page has been seen
    pub exhausted: bool,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl PaginationState {
    /// Create a new pagination state starting at page 1
    pub fn new(page_size: u32) -> Self {
        Self {
            page_size,
            page: 1,
            total_fetched: 0,
            exhausted: false,
        }
    }

    /// Account for a fetched page and advance.
    ///
    /// A page of exactly `page_size` records leaves the state open, so a
    /// result set that is an exact multiple of the page size costs one more,
    /// empty, request.
    pub fn record_page(&mut self, count: usize) {
        self.total_fetched += count as u64;
        if count < self.page_size as usize {
            self.exhausted = true;
        } else {
            self.page += 1;
        }
    }
}
