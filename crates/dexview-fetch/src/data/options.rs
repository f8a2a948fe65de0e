use std::sync::Arc;
use std::time::Duration;

/// Configuration for JSON fetching operations.
///
/// # Examples
///
/// ```
/// use dexview_fetch::data::FetchOptions;
/// use std::time::Duration;
///
/// let options = FetchOptions::default()
///     .max_attempts(5)
///     .retry_backoff(Duration::from_millis(200))
///     .header("User-Agent", "dexview/0.1");
/// ```
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Total number of attempts made by a retrying fetch, including the first.
    ///
    /// A value of 0 is treated as 1.
    ///
    /// Default: 3
    pub max_attempts: u32,

    /// Base delay for linear backoff between attempts.
    ///
    /// The delay after failed attempt N is: `retry_backoff * N`
    ///
    /// Default: 1000ms
    pub retry_backoff: Duration,

    /// Custom HTTP headers sent with every request, including retries.
    ///
    /// Default: empty
    pub headers: Arc<[(String, String)]>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            retry_backoff: Duration::from_millis(1000),
            headers: Arc::new([]),
        }
    }
}

impl FetchOptions {
    /// Set the total number of attempts.
    #[must_use]
    pub fn max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Set the base retry backoff duration.
    #[must_use]
    pub fn retry_backoff(mut self, retry_backoff: Duration) -> Self {
        self.retry_backoff = retry_backoff;
        self
    }

    /// Add a single custom HTTP header.
    ///
    /// # Examples
    ///
    /// ```
    /// use dexview_fetch::data::FetchOptions;
    ///
    /// let options = FetchOptions::default()
    ///     .header("Accept", "application/json")
    ///     .header("User-Agent", "dexview/0.1");
    /// assert_eq!(options.headers.len(), 2);
    /// ```
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut headers: Vec<_> = self.headers.iter().cloned().collect();
        headers.push((key.into(), value.into()));
        self.headers = Arc::from(headers);
        self
    }

    /// The attempt budget, never less than one.
    pub fn attempt_budget(&self) -> u32 {
        self.max_attempts.max(1)
    }
}
