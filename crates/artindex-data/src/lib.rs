#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/kanvasai/artindex/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cache;
pub mod error;
pub mod loader;

pub use cache::{CacheStats, MemoCache};
pub use error::{DataError, Result};
pub use loader::{AuctionLoader, LoadOptions, Relabel};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
