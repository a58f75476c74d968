//! # setsearch
//!
//! An in-memory inverted index over (URL, text) records, queried with
//! boolean set combinations.
//!
//! - [`analysis`] normalizes raw words into index tokens
//! - [`corpus`] reads the two-lines-per-record corpus format
//! - [`index`] builds and holds the token -> documents mapping
//! - [`query`] parses `word +word -word` queries and folds them left to right
//! - [`engine`] ties an index to its configuration for front ends
//!
//! ```
//! use setsearch::corpus::Record;
//! use setsearch::index::build;
//! use setsearch::query::find_query_matches;
//!
//! let (index, count) = build(vec![
//!     Record::new("www.rainbow.org", "red green blue"),
//!     Record::new("www.dr.seuss.net", "One Fish Two Fish Red fish Blue fish"),
//! ]);
//! assert_eq!(count, 2);
//!
//! let matches = find_query_matches(&index, "red -fish").unwrap();
//! assert!(matches.contains("www.rainbow.org"));
//! assert_eq!(matches.len(), 1);
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod corpus;
pub mod engine;
pub mod error;
pub mod index;
pub mod query;

pub mod prelude {
    pub use crate::analysis::token::{Token, clean_token, gather_tokens};
    pub use crate::corpus::{CorpusReader, Record};
    pub use crate::engine::{SearchEngine, SearchResults};
    pub use crate::error::{Result, SetSearchError};
    pub use crate::index::{BuildReport, DocSet, IndexBuilder, InvertedIndex, build, build_index};
    pub use crate::query::{Operator, QueryEvaluator, find_query_matches};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
