//! I/O operations for JSON fetching.
//!
//! Everything that touches the network or the clock lives here, behind the
//! [`HttpClient`] trait so the retry loop can be driven by a mock.

mod fetcher;
mod http;
mod mock;

pub use fetcher::Fetcher;
pub use http::HttpClient;
pub use mock::{MockError, MockHttpClient};

#[cfg(feature = "reqwest")]
pub use http::ReqwestClient;
