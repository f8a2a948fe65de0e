use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::OnceCell;

use crate::data::{CatalogEntry, FullRecord, MinimalRecord};
use crate::error::Result;

/// Session-wide record caches, keyed by the name a record was requested under.
///
/// Entries are never replaced or evicted: the first successful fetch of a
/// name is authoritative until the session is dropped. Locks are only held
/// for the map operation itself, never across an await.
#[derive(Debug, Default)]
pub struct CatalogCache {
    minimal: RwLock<HashMap<String, Arc<MinimalRecord>>>,
    full: RwLock<HashMap<String, Arc<FullRecord>>>,
    catalog: OnceCell<Arc<[CatalogEntry]>>,
}

impl CatalogCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn minimal(&self, name: &str) -> Option<Arc<MinimalRecord>> {
        self.minimal.read().get(name).cloned()
    }

    pub fn full(&self, name: &str) -> Option<Arc<FullRecord>> {
        self.full.read().get(name).cloned()
    }

    /// Cache a freshly fetched record and its minimal projection under `name`.
    ///
    /// Returns the cached entries, which are the earlier ones if another
    /// request for the same name finished first.
    pub fn store_full(
        &self,
        name: &str,
        record: FullRecord,
    ) -> (Arc<FullRecord>, Arc<MinimalRecord>) {
        let full = Arc::clone(
            self.full
                .write()
                .entry(name.to_string())
                .or_insert_with(|| Arc::new(record)),
        );
        let minimal = Arc::clone(
            self.minimal
                .write()
                .entry(name.to_string())
                .or_insert_with(|| Arc::new(full.to_minimal())),
        );
        (full, minimal)
    }

    pub fn minimal_len(&self) -> usize {
        self.minimal.read().len()
    }

    pub fn full_len(&self) -> usize {
        self.full.read().len()
    }

    /// The memoised catalog index, if it has been fetched.
    pub fn catalog(&self) -> Option<Arc<[CatalogEntry]>> {
        self.catalog.get().cloned()
    }

    /// Return the memoised catalog index, running `init` if there is none yet.
    ///
    /// A failed `init` leaves nothing behind, so the next call tries again.
    pub async fn catalog_or_try_init<F, Fut>(&self, init: F) -> Result<Arc<[CatalogEntry]>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Arc<[CatalogEntry]>>>,
    {
        self.catalog.get_or_try_init(init).await.cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;

    fn record(name: &str, category: &str) -> FullRecord {
        FullRecord {
            name: name.to_string(),
            id: 1,
            categories: vec![category.to_string()],
            height: 7,
            weight: 69,
            stats: Vec::new(),
            moves: Vec::new(),
            thumbnail_url: None,
            species_reference: String::new(),
        }
    }

    #[test]
    fn test_store_populates_both_maps() {
        let cache = CatalogCache::new();

        let (full, minimal) = cache.store_full("bulbasaur", record("bulbasaur", "grass"));

        assert!(Arc::ptr_eq(&full, &cache.full("bulbasaur").unwrap()));
        assert!(Arc::ptr_eq(&minimal, &cache.minimal("bulbasaur").unwrap()));
        assert_eq!(minimal.primary_category, "grass");
    }

    #[test]
    fn test_first_store_wins() {
        let cache = CatalogCache::new();

        let (first, _) = cache.store_full("bulbasaur", record("bulbasaur", "grass"));
        let (second, minimal) = cache.store_full("bulbasaur", record("bulbasaur", "fire"));

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(minimal.primary_category, "grass");
        assert_eq!(cache.full_len(), 1);
        assert_eq!(cache.minimal_len(), 1);
    }

    #[test]
    fn test_miss() {
        let cache = CatalogCache::new();

        assert!(cache.full("mew").is_none());
        assert!(cache.minimal("mew").is_none());
    }

    #[tokio::test]
    async fn test_failed_catalog_init_is_not_memoised() {
        let cache = CatalogCache::new();

        let err = cache
            .catalog_or_try_init(|| async {
                Err::<Arc<[CatalogEntry]>, _>(CatalogError::Config("offline".into()))
            })
            .await;
        assert!(err.is_err());
        assert!(cache.catalog().is_none());

        let list = cache
            .catalog_or_try_init(|| async {
                let entries = vec![CatalogEntry::new("mew", "https://api.test/pokemon/151/")];
                Ok::<_, CatalogError>(Arc::<[CatalogEntry]>::from(entries))
            })
            .await
            .unwrap();
        assert_eq!(list.len(), 1);
        assert!(cache.catalog().is_some());
    }
}
