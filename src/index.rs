//! Inverted index and its construction.
//!
//! An [`inverted::InvertedIndex`] maps each [`Token`](crate::analysis::token::Token)
//! to the set of document identifiers whose text contains it. It is populated
//! monotonically by an [`builder::IndexBuilder`] and is read-only afterwards.

pub mod builder;
pub mod inverted;

// Re-export commonly used types
pub use builder::{BuildReport, IndexBuilder, build, build_index};
pub use inverted::{DocSet, IndexStats, InvertedIndex};
