//! Record normalization
//!
//! Two steps, both keyed by the entity kind being extracted:
//!
//! - **Filter-and-retain** strips nested objects that duplicate data held by
//!   other extractions (user profiles, labels), hoisting identifying
//!   subfields such as `author.id` to `author_id` first.
//! - **Flatten** turns whatever nesting is left into a single-level map with
//!   `_`-joined keys. It runs at serialization time, after filtering.

mod filter;
mod flatten;
mod rules;

pub use filter::{filter_record, filter_records};
pub use flatten::{flatten, flatten_with_separator, DEFAULT_SEPARATOR};
pub use rules::{rules_for, FilterRule, FILTER_RULES};
