use std::sync::Arc;

use dexview_fetch::{Fetcher, HttpClient};
use futures_util::{StreamExt, stream};
use tracing::warn;

use crate::data::{CatalogConfig, MinimalRecord};
use crate::effects::cache::CatalogCache;
use crate::effects::detail::fetch_full_record;
use crate::error::{CatalogError, Result};

/// Per-name outcome of [`BatchDetailFetcher::resolve_minimal_batch`], in input order.
///
/// Callers look records up by name, so a failed name never shifts the
/// pairing of the ones after it.
#[derive(Debug)]
pub struct MinimalBatch {
    outcomes: Vec<(String, Result<Arc<MinimalRecord>>)>,
}

impl MinimalBatch {
    pub fn get(&self, name: &str) -> Option<&Arc<MinimalRecord>> {
        self.outcomes
            .iter()
            .find(|(n, _)| n == name)
            .and_then(|(_, outcome)| outcome.as_ref().ok())
    }

    /// Resolved records in input order, failures skipped.
    pub fn resolved(&self) -> impl Iterator<Item = &Arc<MinimalRecord>> {
        self.outcomes.iter().filter_map(|(_, outcome)| outcome.as_ref().ok())
    }

    pub fn failures(&self) -> impl Iterator<Item = (&str, &CatalogError)> {
        self.outcomes
            .iter()
            .filter_map(|(name, outcome)| outcome.as_ref().err().map(|e| (name.as_str(), e)))
    }

    pub fn resolved_count(&self) -> usize {
        self.resolved().count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.len() - self.resolved_count()
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn into_records(self) -> Vec<Arc<MinimalRecord>> {
        self.outcomes
            .into_iter()
            .filter_map(|(_, outcome)| outcome.ok())
            .collect()
    }
}

/// Resolves names to list-card records, cache first.
pub struct BatchDetailFetcher<'a, C: HttpClient> {
    fetcher: &'a Fetcher<C>,
    cache: &'a CatalogCache,
    config: &'a CatalogConfig,
}

impl<'a, C: HttpClient> BatchDetailFetcher<'a, C> {
    pub fn new(
        fetcher: &'a Fetcher<C>,
        cache: &'a CatalogCache,
        config: &'a CatalogConfig,
    ) -> Self {
        Self {
            fetcher,
            cache,
            config,
        }
    }

    /// Resolve every name concurrently, at most `max_concurrent` at a time.
    ///
    /// Names already cached cost no request. A name whose retries run out is
    /// logged and reported as a failure in the batch; it never fails the
    /// batch as a whole.
    #[tracing::instrument(skip_all, fields(count = names.len()))]
    pub async fn resolve_minimal_batch<S: AsRef<str>>(&self, names: &[S]) -> MinimalBatch {
        let limit = self.config.max_concurrent.max(1);

        let outcomes: Vec<_> = stream::iter(names.iter().map(|name| name.as_ref().to_string()))
            .map(|name| async move {
                let outcome = self.resolve_one(&name).await;
                (name, outcome)
            })
            .buffered(limit)
            .collect()
            .await;

        for (name, outcome) in &outcomes {
            if let Err(err) = outcome {
                warn!(name = %name, error = %err, "dropping entry from batch");
            }
        }

        MinimalBatch { outcomes }
    }

    async fn resolve_one(&self, name: &str) -> Result<Arc<MinimalRecord>> {
        if let Some(hit) = self.cache.minimal(name) {
            return Ok(hit);
        }

        let record = fetch_full_record(self.fetcher, self.config, name).await?;
        let (_, minimal) = self.cache.store_full(name, record);
        Ok(minimal)
    }
}
