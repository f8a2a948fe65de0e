//! Session-cached catalog browsing over a creature-data API.
//!
//! # Architecture
//!
//! - [`data`] - Records, upstream wire shapes, and configuration
//! - [`core`] - Pure transformations: filtering, slicing, chain walking
//! - [`effects`] - Resolvers, caches, and drivers that talk to the network
//!
//! A [`CatalogSession`] owns the [`CatalogCache`] and hands out borrowing
//! resolvers, so every component of a session shares one cache and tests get
//! a fresh one per session.
//!
//! # Example
//!
//! ```no_run
//! use dexview_catalog::{CatalogConfig, CatalogSession};
//!
//! # async fn demo() -> dexview_catalog::Result<()> {
//! let session = CatalogSession::connect(CatalogConfig::default())?;
//! let detail = session.detail_resolver().open_detail("eevee").await?;
//! println!("{} #{}", detail.record.name, detail.record.id);
//! for member in &detail.evolutions {
//!     println!("  -> {}", member.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod data;
pub mod effects;
mod error;

pub use data::{
    CatalogConfig, CatalogEntry, DetailView, EvolutionChain, EvolutionMember, FullRecord,
    MinimalRecord, Stat,
};
pub use effects::{
    BatchDetailFetcher, BatchLoader, CardSink, CatalogCache, CatalogSession, DetailResolver,
    GenerationTicket, IncrementalScrollController, ListFetcher, LoadGeneration, LoadTrigger,
    MinimalBatch, ScrollPhase, ScrollView, SearchFilter, SearchReport, SliceReport,
    TriggerOutcome,
};
pub use error::{CatalogError, Result};
