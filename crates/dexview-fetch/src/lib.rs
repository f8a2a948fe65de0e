//! JSON fetching over HTTP with linear-backoff retries.
//!
//! # Architecture
//!
//! This crate follows the three-layer pattern:
//! - [`data`] - Immutable configuration and types
//! - [`core`] - Pure transformations
//! - [`effects`] - I/O operations with trait abstraction
//!
//! # Key Features
//!
//! - **Client-Agnostic**: [`HttpClient`] is the only seam to the network, so tests
//!   run against [`MockHttpClient`] and production uses [`ReqwestClient`]
//! - **Single Attempt or Retrying**: [`Fetcher::fetch_json`] never retries,
//!   [`Fetcher::fetch_json_retrying`] waits `attempt * backoff` between attempts
//! - **Mechanism-Only**: No caching; callers own their caches

pub mod core;
pub mod data;
pub mod effects;
mod error;

pub use crate::core::{retry_delay, validate_url};
pub use data::FetchOptions;
pub use effects::{Fetcher, HttpClient, MockError, MockHttpClient};

#[cfg(feature = "reqwest")]
pub use effects::ReqwestClient;

pub use error::{FetchError, Result};
