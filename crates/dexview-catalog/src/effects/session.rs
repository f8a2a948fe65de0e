use std::sync::Arc;

use dexview_fetch::{Fetcher, HttpClient};
use tracing::{debug, error, info, warn};

use crate::data::{CatalogConfig, CatalogEntry};
use crate::effects::batch::BatchDetailFetcher;
use crate::effects::cache::CatalogCache;
use crate::effects::detail::DetailResolver;
use crate::effects::generation::LoadGeneration;
use crate::effects::list::ListFetcher;
use crate::effects::loader::BatchLoader;
use crate::effects::scroll::{IncrementalScrollController, ScrollPhase};
use crate::effects::search::SearchFilter;
use crate::effects::view::ScrollView;
use crate::error::{CatalogError, Result};

/// One browsing session: a fetcher, the caches, and the load generation.
///
/// Build one per page session; every resolver handed out borrows from it,
/// so dropping the session drops every cached record.
#[derive(Debug)]
pub struct CatalogSession<C: HttpClient> {
    fetcher: Fetcher<C>,
    config: CatalogConfig,
    cache: CatalogCache,
    generation: LoadGeneration,
}

impl<C: HttpClient> CatalogSession<C> {
    pub fn new(client: C, config: CatalogConfig) -> Self {
        Self {
            fetcher: Fetcher::new(client).with_options(config.fetch_options()),
            config,
            cache: CatalogCache::new(),
            generation: LoadGeneration::new(),
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn cache(&self) -> &CatalogCache {
        &self.cache
    }

    pub fn fetcher(&self) -> &Fetcher<C> {
        &self.fetcher
    }

    pub fn generation(&self) -> &LoadGeneration {
        &self.generation
    }

    pub fn list_fetcher(&self) -> ListFetcher<'_, C> {
        ListFetcher::new(&self.fetcher, &self.config)
    }

    pub fn batch_fetcher(&self) -> BatchDetailFetcher<'_, C> {
        BatchDetailFetcher::new(&self.fetcher, &self.cache, &self.config)
    }

    pub fn detail_resolver(&self) -> DetailResolver<'_, C> {
        DetailResolver::new(&self.fetcher, &self.cache, &self.config)
    }

    pub fn batch_loader(&self) -> BatchLoader<'_, C> {
        BatchLoader::new(self.batch_fetcher())
    }

    pub fn search_filter(&self) -> SearchFilter<'_, C> {
        SearchFilter::new(self)
    }

    /// The catalog index, fetched on first use and reused afterwards.
    pub async fn catalog(&self) -> Result<Arc<[CatalogEntry]>> {
        self.cache
            .catalog_or_try_init(|| async {
                let entries = self.list_fetcher().fetch_catalog_list().await?;
                Ok::<_, CatalogError>(Arc::<[CatalogEntry]>::from(entries))
            })
            .await
    }

    /// Show the initial list and return the controller for the rest of it.
    ///
    /// Clears the view, loads the first `initial_slice` entries, and arms the
    /// sentinel; later slices are `scroll_slice` long. A catalog that can't be
    /// fetched is shown as a full-page error and returned. If a newer load or
    /// search began meanwhile, nothing is rendered and the returned
    /// controller is already `Complete`.
    #[tracing::instrument(skip_all)]
    pub async fn open_list<V: ScrollView + ?Sized>(
        &self,
        view: &V,
    ) -> Result<IncrementalScrollController<'_, C>> {
        let ticket = self.generation.begin();
        view.clear();

        let list = match self.catalog().await {
            Ok(list) => list,
            Err(err) => {
                error!(error = %err, "failed to load catalog list");
                view.show_fatal_error(&err.to_string());
                return Err(err);
            }
        };
        info!(total = list.len(), "catalog ready");

        let mut superseded = false;
        let cursor = match self
            .batch_loader()
            .load_next_slice(&list, 0, self.config.initial_slice, &ticket, view)
            .await
        {
            Ok(report) if report.stale => {
                debug!(generation = ticket.value(), "initial slice superseded");
                superseded = true;
                0
            }
            Ok(report) => report.next_cursor,
            Err(err) => {
                warn!(error = %err, "initial slice failed");
                view.show_retry();
                0
            }
        };

        let controller = IncrementalScrollController::new(
            self.batch_loader(),
            list,
            cursor,
            self.config.scroll_slice,
            ticket,
        );
        if superseded {
            controller.finish();
        }
        if controller.phase() == ScrollPhase::Idle {
            view.arm_sentinel();
        } else {
            view.tear_down_trigger();
        }
        Ok(controller)
    }
}

#[cfg(feature = "reqwest")]
impl CatalogSession<dexview_fetch::ReqwestClient> {
    /// A session over the real network, honouring `request_timeout_ms`.
    pub fn connect(config: CatalogConfig) -> Result<Self> {
        config.validate()?;
        let client = dexview_fetch::ReqwestClient::with_timeout(config.request_timeout())
            .map_err(|e| CatalogError::Config(e.to_string()))?;
        Ok(Self::new(client, config))
    }
}
