//! Medium catalog for the art index.
//!
//! This module provides the canonical art-medium categories, their
//! parent groupings used for coarse breakdowns, and the label
//! normalization tables that map gallery-specific English labels to the
//! canonical Estonian ones.

pub mod category;
pub mod relabel;

pub use category::{Category, CategoryParent};
pub use relabel::{default_relabels, technique_relabels};
