use std::sync::Arc;

use dexview_fetch::{FetchError, Fetcher, HttpClient};
use futures_util::{StreamExt, stream};
use tracing::{debug, warn};

use crate::core::walk_first_branch;
use crate::data::wire::{ApiEvolutionChain, ApiPokemon, ApiSpecies};
use crate::data::{CatalogConfig, DetailView, EvolutionChain, EvolutionMember, FullRecord};
use crate::effects::cache::CatalogCache;
use crate::error::{CatalogError, Result};

/// Fetch and convert one detail resource, retrying per the session budget.
///
/// # Errors
///
/// [`CatalogError::DetailUnavailable`] once the retry budget is spent.
/// [`CatalogError::MalformedRecord`] when the body decodes but lists no
/// types; that is returned after the first attempt, since refetching the
/// same resource cannot fix it.
pub(crate) async fn fetch_full_record<C: HttpClient>(
    fetcher: &Fetcher<C>,
    config: &CatalogConfig,
    name: &str,
) -> Result<FullRecord> {
    let api: ApiPokemon = fetcher
        .fetch_json_retrying(&config.detail_url(name))
        .await
        .map_err(|source| CatalogError::DetailUnavailable {
            name: name.to_string(),
            source,
        })?;
    FullRecord::try_from(api)
}

/// Resolves full records and evolution data for the detail view.
pub struct DetailResolver<'a, C: HttpClient> {
    fetcher: &'a Fetcher<C>,
    cache: &'a CatalogCache,
    config: &'a CatalogConfig,
}

impl<'a, C: HttpClient> DetailResolver<'a, C> {
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

    /// The full record for `name`, from the cache when possible.
    ///
    /// Unlike batch resolution, running out of retries is an error here.
    #[tracing::instrument(skip(self))]
    pub async fn resolve_full_detail(&self, name: &str) -> Result<Arc<FullRecord>> {
        if let Some(hit) = self.cache.full(name) {
            debug!("detail cache hit");
            return Ok(hit);
        }

        let record = fetch_full_record(self.fetcher, self.config, name).await?;
        let (full, _) = self.cache.store_full(name, record);
        Ok(full)
    }

    /// The evolution line of `name`, or an empty chain if it can't be fetched.
    #[tracing::instrument(skip(self))]
    pub async fn resolve_evolution_chain(&self, name: &str) -> EvolutionChain {
        match self.try_evolution_chain(name).await {
            Ok(chain) => chain,
            Err(err) => {
                warn!(error = %err, "evolution data unavailable");
                EvolutionChain::default()
            }
        }
    }

    async fn try_evolution_chain(
        &self,
        name: &str,
    ) -> std::result::Result<EvolutionChain, FetchError> {
        let species: ApiSpecies = self
            .fetcher
            .fetch_json_retrying(&self.config.species_url(name))
            .await?;

        let Some(link) = species.evolution_chain else {
            debug!("species has no evolution chain");
            return Ok(EvolutionChain::default());
        };

        let chain: ApiEvolutionChain = self.fetcher.fetch_json_retrying(&link.url).await?;
        Ok(walk_first_branch(&chain.chain))
    }

    /// Resolve each chain member's thumbnail; a member that fails keeps its
    /// name and gets no thumbnail.
    pub async fn resolve_evolution_members(&self, chain: &EvolutionChain) -> Vec<EvolutionMember> {
        let limit = self.config.max_concurrent.max(1);

        stream::iter(chain.iter())
            .map(|name| async move {
                let thumbnail_url = match self.resolve_full_detail(name).await {
                    Ok(record) => record.thumbnail_url.clone(),
                    Err(err) => {
                        warn!(name, error = %err, "evolution member unavailable");
                        None
                    }
                };
                EvolutionMember {
                    name: name.to_string(),
                    thumbnail_url,
                }
            })
            .buffered(limit)
            .collect()
            .await
    }

    /// Everything the detail view shows for `name`.
    ///
    /// Fails only if the record itself can't be resolved; evolution data is
    /// best-effort.
    #[tracing::instrument(skip(self))]
    pub async fn open_detail(&self, name: &str) -> Result<DetailView> {
        let record = self.resolve_full_detail(name).await?;
        let chain = self.resolve_evolution_chain(name).await;
        let evolutions = self.resolve_evolution_members(&chain).await;

        Ok(DetailView {
            record,
            chain,
            evolutions,
        })
    }
}
