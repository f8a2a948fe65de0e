use bytes::Bytes;
use serde::de::DeserializeOwned;
use tracing::{debug, error, warn};

use crate::core::{retry_delay, validate_url};
use crate::data::FetchOptions;
use crate::effects::http::HttpClient;
use crate::error::{FetchError, Result};

/// Fetches JSON resources through an [`HttpClient`], with or without retries.
#[derive(Debug)]
pub struct Fetcher<C: HttpClient> {
    client: C,
    options: FetchOptions,
}

impl<C: HttpClient> Fetcher<C> {
    /// Create a new fetcher with the provided HTTP client and default options.
    pub fn new(client: C) -> Self {
        Self {
            client,
            options: FetchOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: FetchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &FetchOptions {
        &self.options
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    fn map_error<E: std::error::Error>(url: &str, e: E) -> FetchError {
        FetchError::Network {
            url: url.to_string(),
            message: e.to_string(),
        }
    }

    /// Fetch the raw body of `url` in a single attempt.
    pub async fn fetch_bytes(&self, url: &str) -> Result<Bytes> {
        validate_url(url)?;
        self.client
            .get(url, &self.options.headers)
            .await
            .map_err(|e| Self::map_error(url, e))
    }

    /// Fetch and decode `url` in a single attempt.
    ///
    /// Transport failures surface as [`FetchError::Network`] and undecodable
    /// bodies as [`FetchError::Decode`]. Nothing is retried.
    pub async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self.fetch_bytes(url).await?;
        serde_json::from_slice(&body).map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })
    }

    /// Fetch and decode `url`, retrying failed attempts with linear backoff.
    ///
    /// Attempts run one after another. After failed attempt `n` the fetcher
    /// sleeps `n * retry_backoff`; there is no sleep after the last attempt.
    /// Once the budget is spent the last error is wrapped in
    /// [`FetchError::Exhausted`]. An invalid URL fails immediately.
    pub async fn fetch_json_retrying<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        validate_url(url)?;

        let budget = self.options.attempt_budget();
        let mut attempt = 0;

        loop {
            attempt += 1;

            match self.fetch_json(url).await {
                Ok(value) => {
                    if attempt > 1 {
                        debug!(url, attempt, "fetch succeeded after retry");
                    }
                    return Ok(value);
                }
                Err(err) if attempt >= budget => {
                    error!(url, attempts = budget, error = %err, "fetch failed on every attempt");
                    return Err(FetchError::Exhausted {
                        url: url.to_string(),
                        attempts: budget,
                        last: Box::new(err),
                    });
                }
                Err(err) => {
                    let delay = retry_delay(attempt, self.options.retry_backoff);
                    warn!(
                        url,
                        attempt,
                        max_attempts = budget,
                        delay_ms = delay.as_millis() as u64,
                        error = %err,
                        "fetch attempt failed"
                    );
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }
}
