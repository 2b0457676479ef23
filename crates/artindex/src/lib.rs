#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/kanvasai/artindex/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod catalog;
pub mod service;

// Re-export main types from sub-crates
pub use artindex_data as data;
pub use artindex_index as index;
pub use artindex_output as output;

// Re-export common catalog types
pub use catalog::{Category, CategoryParent, default_relabels};
pub use service::{IndexService, ServiceError};

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
