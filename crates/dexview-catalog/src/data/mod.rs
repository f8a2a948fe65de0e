//! Immutable data types for catalog browsing.
//!
//! [`model`] holds the records handed to the presentation layer, [`wire`]
//! the upstream JSON shapes they are decoded from, and [`config`] the
//! session settings.

pub mod config;
pub mod model;
pub mod wire;

pub use config::CatalogConfig;
pub use model::{
    CatalogEntry, DetailView, EvolutionChain, EvolutionMember, FullRecord, MinimalRecord, Stat,
};
