//! Scripted [`HttpClient`] for tests and offline demos.

use std::collections::HashMap;
use std::time::Duration;

use bytes::Bytes;
use parking_lot::Mutex;
use thiserror::Error;

use super::http::HttpClient;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MockError {
    #[error("no response scripted for {0}")]
    NoRoute(String),

    #[error("injected failure for {0}")]
    Injected(String),
}

#[derive(Debug, Clone)]
enum Route {
    Serve(Bytes),
    Fail,
    Flaky { failures_left: u32, body: Bytes },
}

/// Mock HTTP client serving canned bodies keyed by exact URL.
///
/// Every request is counted per URL, whether it succeeds or not, so tests
/// can assert how much network activity an operation caused.
///
/// # Examples
///
/// ```
/// use dexview_fetch::MockHttpClient;
///
/// let client = MockHttpClient::new()
///     .with_json("https://api.test/a", serde_json::json!({ "ok": true }))
///     .with_failure("https://api.test/b")
///     .with_flaky("https://api.test/c", 2, serde_json::json!([]));
/// assert_eq!(client.total_calls(), 0);
/// ```
#[derive(Debug, Default)]
pub struct MockHttpClient {
    routes: Mutex<HashMap<String, Route>>,
    calls: Mutex<HashMap<String, usize>>,
    latency: Option<Duration>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `value` serialized as JSON for `url`.
    #[must_use]
    pub fn with_json(self, url: impl Into<String>, value: serde_json::Value) -> Self {
        self.insert_json(url, value);
        self
    }

    /// Serve a raw body for `url`, useful for malformed payloads.
    #[must_use]
    pub fn with_body(self, url: impl Into<String>, body: impl Into<Bytes>) -> Self {
        self.routes
            .lock()
            .insert(url.into(), Route::Serve(body.into()));
        self
    }

    /// Fail every request to `url`.
    #[must_use]
    pub fn with_failure(self, url: impl Into<String>) -> Self {
        self.routes.lock().insert(url.into(), Route::Fail);
        self
    }

    /// Fail the first `failures` requests to `url`, then serve `value`.
    #[must_use]
    pub fn with_flaky(
        self,
        url: impl Into<String>,
        failures: u32,
        value: serde_json::Value,
    ) -> Self {
        self.routes.lock().insert(
            url.into(),
            Route::Flaky {
                failures_left: failures,
                body: Bytes::from(value.to_string()),
            },
        );
        self
    }

    /// Delay every response by `latency`.
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Serve `value` for `url`, replacing any previous script.
    pub fn insert_json(&self, url: impl Into<String>, value: serde_json::Value) {
        self.routes
            .lock()
            .insert(url.into(), Route::Serve(Bytes::from(value.to_string())));
    }

    /// Number of requests made to `url` so far.
    pub fn calls(&self, url: &str) -> usize {
        self.calls.lock().get(url).copied().unwrap_or(0)
    }

    /// Number of requests made to any URL so far.
    pub fn total_calls(&self) -> usize {
        self.calls.lock().values().sum()
    }

    fn record_call(&self, url: &str) {
        let mut calls = self.calls.lock();
        *calls.entry(url.to_string()).or_insert(0) += 1;
    }

    fn respond(&self, url: &str) -> Result<Bytes, MockError> {
        let mut routes = self.routes.lock();
        match routes.get_mut(url) {
            None => Err(MockError::NoRoute(url.to_string())),
            Some(Route::Serve(body)) => Ok(body.clone()),
            Some(Route::Fail) => Err(MockError::Injected(url.to_string())),
            Some(Route::Flaky { failures_left, body }) => {
                if *failures_left == 0 {
                    Ok(body.clone())
                } else {
                    *failures_left -= 1;
                    Err(MockError::Injected(url.to_string()))
                }
            }
        }
    }
}

impl HttpClient for MockHttpClient {
    type Error = MockError;

    async fn get(&self, url: &str, _headers: &[(String, String)]) -> Result<Bytes, Self::Error> {
        self.record_call(url);
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        self.respond(url)
    }
}
