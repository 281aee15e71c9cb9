//! Pagination module
//!
//! Drives page-number pagination against GitHub list endpoints.
//!
//! # Overview
//!
//! Every request carries `per_page` (100 unless overridden) and `page`,
//! starting at 1. The driver keeps requesting the next page until one comes
//! back shorter than the page size. Records are filtered page by page as they
//! arrive; flattening is left to the output step.

mod paginator;
mod types;

pub use paginator::{paginate, Paginator};
pub use types::{Fetch, PaginationState, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, PAGE_PARAM, PER_PAGE_PARAM};
