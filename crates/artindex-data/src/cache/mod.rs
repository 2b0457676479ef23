//! Caching layer for derived results.
//!
//! Recomputing a growth table is cheap but not free, and the dashboards
//! request the same tables over and over. The memo cache keys results by
//! a content hash of their inputs and expires them on a fixed
//! time-to-live.

pub mod memo;

pub use memo::{CacheStats, MemoCache, content_key};
