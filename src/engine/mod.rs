//! Execution engine module
//!
//! Runs an extraction request end to end.
//!
//! # Overview
//!
//! The engine module provides:
//! - `Extractor` - expands a request into scope units and paginates each one
//! - `ExtractConfig` - configuration for extraction
//! - `Extraction` / `RunSummary` - results and statistics
//!
//! A unit that fails with an expected transport or decode error contributes
//! no records and the run carries on; any other error ends the run.

mod types;

pub use types::{ExtractConfig, ExtractStats, Extraction, RunSummary};

use crate::error::Result;
use crate::output::{serialize, Sink};
use crate::pagination::{Fetch, Paginator};
use crate::scope::{self, ExtractionRequest, ExtractionUnit};
use crate::types::Record;
use futures::stream::{self, StreamExt};
use std::pin::pin;
use std::time::Instant;
use tracing::{info, warn};

/// Extraction engine over a fetch capability
pub struct Extractor<F> {
    /// Fetch capability
    fetch: F,
    /// Extraction configuration
    config: ExtractConfig,
}

impl<F: Fetch> Extractor<F> {
    /// Create a new extractor
    pub fn new(fetch: F) -> Self {
        Self {
            fetch,
            config: ExtractConfig::default(),
        }
    }

    /// Set extraction configuration
    #[must_use]
    pub fn with_config(mut self, config: ExtractConfig) -> Self {
        self.config = config;
        self
    }

    /// Get the fetch capability
    pub fn fetcher(&self) -> &F {
        &self.fetch
    }

    /// Extract every unit of a request, concatenating results in unit order
    pub async fn extract(&self, request: &ExtractionRequest) -> Result<Extraction> {
        let start = Instant::now();
        let paginator = Paginator::new(request.extra_query_params())?;
        let units = scope::expand(request, &self.fetch).await?;

        info!(
            entity_kind = %request.entity_kind(),
            organization = request.organization(),
            units = units.len(),
            "Starting extraction"
        );

        let mut extraction = Extraction::default();
        let paginator = &paginator;
        let mut results = pin!(stream::iter(units)
            .map(move |unit| async move {
                let result = self.extract_unit(paginator, &unit).await;
                (unit, result)
            })
            .buffered(self.config.max_concurrency.max(1)));

        while let Some((unit, result)) = results.next().await {
            match result {
                Ok(records) => {
                    extraction.stats.add_unit(records.len());
                    extraction.records.extend(records);
                }
                Err(e) if e.is_unit_failure() => {
                    warn!(unit = %unit, error = %e, "Resource is unavailable, skipping");
                    extraction.stats.add_skipped(unit.to_string());
                }
                Err(e) => return Err(e),
            }
        }

        extraction
            .stats
            .set_duration(start.elapsed().as_millis() as u64);

        info!(
            records = extraction.stats.records,
            units = extraction.stats.units,
            skipped = extraction.stats.skipped_units.len(),
            "Completed extraction"
        );

        Ok(extraction)
    }

    /// Resolve and paginate one unit. Errors are returned unclassified.
    pub async fn extract_unit(
        &self,
        paginator: &Paginator,
        unit: &ExtractionUnit,
    ) -> Result<Vec<Record>> {
        let path = unit.path()?;
        paginator
            .paginate(&self.fetch, unit.entity_kind, &path)
            .await
    }

    /// Extract, serialize and hand the payload to `sink` under `key`.
    ///
    /// The sink is invoked even when nothing was extracted, so an empty run
    /// still overwrites the previous snapshot. Sink failures fail the run.
    pub async fn run<S>(
        &self,
        request: &ExtractionRequest,
        sink: &S,
        key: &str,
    ) -> Result<RunSummary>
    where
        S: Sink + ?Sized,
    {
        let extraction = self.extract(request).await?;
        let payload = serialize(&extraction.records)?;
        let location = sink.write(key, &payload).await?;

        Ok(RunSummary {
            stats: extraction.stats,
            location,
            bytes: payload.len(),
        })
    }
}

impl<F> std::fmt::Debug for Extractor<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Extractor")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
