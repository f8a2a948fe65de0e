//! Immutable configuration types for fetching.

pub mod options;

pub use options::FetchOptions;
