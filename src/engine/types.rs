//! Engine types
//!
//! Configuration and statistics for extraction runs.

use crate::types::Record;

/// Configuration for the extractor
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Scope units fetched at once. 1 keeps the run strictly sequential;
    /// higher values still emit records in unit order.
    pub max_concurrency: usize,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self { max_concurrency: 1 }
    }
}

impl ExtractConfig {
    /// Create a new extract config
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of units fetched concurrently (minimum 1)
    #[must_use]
    pub fn with_max_concurrency(mut self, max: usize) -> Self {
        self.max_concurrency = max.max(1);
        self
    }
}

/// Statistics from an extraction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractStats {
    /// Scope units attempted
    pub units: usize,
    /// Units skipped after an expected failure, by label
    pub skipped_units: Vec<String>,
    /// Records extracted across all units
    pub records: usize,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

impl ExtractStats {
    /// Create new stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for a completed unit
    pub fn add_unit(&mut self, records: usize) {
        self.units += 1;
        self.records += records;
    }

    /// Account for a skipped unit
    pub fn add_skipped(&mut self, unit: impl Into<String>) {
        self.units += 1;
        self.skipped_units.push(unit.into());
    }

    /// Set duration
    pub fn set_duration(&mut self, ms: u64) {
        self.duration_ms = ms;
    }
}

/// Records from an extraction, in unit × page × position order
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    /// Filtered (not yet flattened) records
    pub records: Vec<Record>,
    /// Run statistics
    pub stats: ExtractStats,
}

/// Outcome of a full run: extract, serialize, upload
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Extraction statistics
    pub stats: ExtractStats,
    /// Location the payload was written to
    pub location: String,
    /// Payload size in bytes
    pub bytes: usize,
}
