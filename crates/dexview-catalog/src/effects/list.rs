use dexview_fetch::{Fetcher, HttpClient};
use tracing::info;

use crate::data::CatalogConfig;
use crate::data::model::CatalogEntry;
use crate::data::wire::ApiResourceList;
use crate::error::{CatalogError, Result};

/// Fetches the catalog index in one request.
///
/// No retries and no caching here; [`CatalogSession::catalog`](super::CatalogSession::catalog)
/// memoises the result for the session.
pub struct ListFetcher<'a, C: HttpClient> {
    fetcher: &'a Fetcher<C>,
    config: &'a CatalogConfig,
}

impl<'a, C: HttpClient> ListFetcher<'a, C> {
    pub fn new(fetcher: &'a Fetcher<C>, config: &'a CatalogConfig) -> Self {
        Self { fetcher, config }
    }

    #[tracing::instrument(skip(self))]
    pub async fn fetch_catalog_list(&self) -> Result<Vec<CatalogEntry>> {
        let list: ApiResourceList = self
            .fetcher
            .fetch_json(&self.config.catalog_url())
            .await
            .map_err(CatalogError::ListUnavailable)?;

        info!(count = list.results.len(), "fetched catalog list");
        Ok(list.results.into_iter().map(CatalogEntry::from).collect())
    }
}
