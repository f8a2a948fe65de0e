use std::time::Duration;

use dexview_fetch::{FetchOptions, validate_url};
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

/// Session settings: where the API lives, how much to load at once, and
/// how hard to retry.
///
/// Every field has a default, so a TOML document only needs the keys it
/// wants to change.
///
/// # Examples
///
/// ```
/// use dexview_catalog::CatalogConfig;
///
/// let config = CatalogConfig::from_toml_str(r#"
///     api_base = "http://localhost:8000/api/v2"
///     scroll_slice = 40
/// "#).unwrap();
///
/// assert_eq!(config.scroll_slice, 40);
/// assert_eq!(config.initial_slice, 6);
/// assert_eq!(config.detail_url("eevee"), "http://localhost:8000/api/v2/pokemon/eevee");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// Root of the API, without a trailing slash.
    pub api_base: String,
    /// Page size requested for the catalog index, fetched as one page.
    pub catalog_limit: usize,
    /// Entries loaded before the first scroll.
    pub initial_slice: usize,
    /// Entries loaded per scroll or "load more".
    pub scroll_slice: usize,
    /// Entries rendered per step of a search.
    pub search_slice: usize,
    pub max_attempts: u32,
    pub retry_backoff_ms: u64,
    /// Upper bound on in-flight detail requests within one batch.
    pub max_concurrent: usize,
    pub request_timeout_ms: Option<u64>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_base: "https://pokeapi.co/api/v2".to_string(),
            catalog_limit: 1025,
            initial_slice: 6,
            scroll_slice: 20,
            search_slice: 50,
            max_attempts: 3,
            retry_backoff_ms: 1000,
            max_concurrent: 20,
            request_timeout_ms: None,
        }
    }
}

impl CatalogConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| CatalogError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        validate_url(&self.api_base).map_err(|e| CatalogError::Config(e.to_string()))?;

        let sizes = [
            ("catalog_limit", self.catalog_limit),
            ("initial_slice", self.initial_slice),
            ("scroll_slice", self.scroll_slice),
            ("search_slice", self.search_slice),
            ("max_concurrent", self.max_concurrent),
        ];
        if let Some((field, _)) = sizes.iter().find(|(_, value)| *value == 0) {
            return Err(CatalogError::Config(format!("{field} must be positive")));
        }
        if self.max_attempts == 0 {
            return Err(CatalogError::Config("max_attempts must be positive".to_string()));
        }

        Ok(())
    }

    #[must_use]
    pub fn api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    #[must_use]
    pub fn retry_backoff(mut self, backoff: Duration) -> Self {
        self.retry_backoff_ms = u64::try_from(backoff.as_millis()).unwrap_or(u64::MAX);
        self
    }

    #[must_use]
    pub fn max_concurrent(mut self, max_concurrent: usize) -> Self {
        self.max_concurrent = max_concurrent;
        self
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_ms.map(Duration::from_millis)
    }

    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions::default()
            .max_attempts(self.max_attempts)
            .retry_backoff(Duration::from_millis(self.retry_backoff_ms))
            .header("Accept", "application/json")
    }

    fn base(&self) -> &str {
        self.api_base.trim_end_matches('/')
    }

    pub fn catalog_url(&self) -> String {
        format!("{}/pokemon?limit={}", self.base(), self.catalog_limit)
    }

    pub fn detail_url(&self, name: &str) -> String {
        format!("{}/pokemon/{name}", self.base())
    }

    pub fn species_url(&self, name: &str) -> String {
        format!("{}/pokemon-species/{name}", self.base())
    }
}
