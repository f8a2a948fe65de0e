//! Error types for dexview-fetch.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FetchError>;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP client setup failed: {0}")]
    ClientSetup(String),

    /// Transport failure or non-success status for a single attempt.
    #[error("network error fetching {url}: {message}")]
    Network { url: String, message: String },

    /// The body arrived but was not the expected JSON shape.
    #[error("malformed response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("giving up on {url} after {attempts} attempts")]
    Exhausted {
        url: String,
        attempts: u32,
        #[source]
        last: Box<FetchError>,
    },
}

impl FetchError {
    /// Returns `true` once the whole retry budget has been spent.
    pub fn is_exhausted(&self) -> bool {
        matches!(self, FetchError::Exhausted { .. })
    }

    /// The URL the failing request was addressed to, if there was one.
    pub fn url(&self) -> Option<&str> {
        match self {
            FetchError::ClientSetup(_) => None,
            FetchError::InvalidUrl(url)
            | FetchError::Network { url, .. }
            | FetchError::Decode { url, .. }
            | FetchError::Exhausted { url, .. } => Some(url),
        }
    }
}
