//! Error types for dexview-catalog.

use dexview_fetch::FetchError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog index could not be fetched; fatal to the initial render.
    #[error("catalog list unavailable: {0}")]
    ListUnavailable(#[source] FetchError),

    #[error("details for {name} unavailable: {source}")]
    DetailUnavailable {
        name: String,
        #[source]
        source: FetchError,
    },

    #[error("malformed record for {name}: {reason}")]
    MalformedRecord { name: String, reason: String },

    #[error("cursor {cursor} is past the end of a {len}-entry list")]
    CursorOutOfRange { cursor: usize, len: usize },

    #[error("invalid configuration: {0}")]
    Config(String),
}
