//! I/O and shared session state for catalog browsing.
//!
//! Each resolver borrows the session's [`Fetcher`](dexview_fetch::Fetcher),
//! [`CatalogCache`] and [`CatalogConfig`](crate::CatalogConfig); none of them
//! own state of their own.

mod batch;
mod cache;
mod detail;
mod generation;
mod list;
mod loader;
mod scroll;
mod search;
mod session;
mod view;

pub use batch::{BatchDetailFetcher, MinimalBatch};
pub use cache::CatalogCache;
pub use detail::DetailResolver;
pub use generation::{GenerationTicket, LoadGeneration};
pub use list::ListFetcher;
pub use loader::{BatchLoader, SliceReport};
pub use scroll::{IncrementalScrollController, LoadTrigger, ScrollPhase, TriggerOutcome};
pub use search::{SearchFilter, SearchReport};
pub use session::CatalogSession;
pub use view::{CardSink, ScrollView};
