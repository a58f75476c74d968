//! Search engine owning one index.
//!
//! [`SearchEngine`] is the object front ends hold on to: it builds its index
//! once and answers queries against it, turning result sets into
//! [`SearchResults`] with a stable order.
//!
//! # Examples
//!
//! ```
//! use setsearch::corpus::Record;
//! use setsearch::engine::SearchEngine;
//!
//! let engine = SearchEngine::from_records(vec![
//!     Record::new("b.org", "red blue"),
//!     Record::new("a.com", "red"),
//! ]);
//!
//! let results = engine.search("red").unwrap();
//! assert_eq!(results.matches, vec!["a.com", "b.org"]);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::SearchConfig;
use crate::corpus::Record;
use crate::error::Result;
use crate::index::builder::{BuildReport, IndexBuilder};
use crate::index::inverted::{DocSet, IndexStats, InvertedIndex};
use crate::query::evaluator::QueryEvaluator;

/// Results of one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResults {
    /// The query as entered.
    pub query: String,

    /// Matching document identifiers.
    pub matches: Vec<String>,

    /// Number of matching documents.
    pub total: usize,
}

/// An index plus the settings used to query it.
#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    index: InvertedIndex,
    config: SearchConfig,
}

impl SearchEngine {
    /// Create an engine over an existing index.
    pub fn new(index: InvertedIndex, config: SearchConfig) -> Self {
        SearchEngine { index, config }
    }

    /// Create an engine from in-memory records with the default config.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = Record>,
    {
        let mut builder = IndexBuilder::new();
        builder.add_records(records);
        SearchEngine::new(builder.finish(), SearchConfig::default())
    }

    /// Build an engine from a corpus file.
    ///
    /// An unreadable corpus yields an engine with an empty index; the report
    /// carries the reason.
    pub fn from_corpus<P: AsRef<Path>>(path: P, config: SearchConfig) -> (Self, BuildReport) {
        let mut builder = IndexBuilder::new();
        let report = builder.load_corpus(path);
        (SearchEngine::new(builder.finish(), config), report)
    }

    /// Build an engine from the corpus named in `config`.
    pub fn open(config: SearchConfig) -> Result<(Self, BuildReport)> {
        let path = config.require_corpus_path()?.to_path_buf();
        Ok(Self::from_corpus(path, config))
    }

    /// Evaluate a query and return the raw result set.
    pub fn matches(&self, query: &str) -> Result<DocSet> {
        QueryEvaluator::new(&self.index).evaluate(query)
    }

    /// Evaluate a query and package the results.
    pub fn search(&self, query: &str) -> Result<SearchResults> {
        let mut matches: Vec<String> = self.matches(query)?.into_iter().collect();
        if self.config.sort_results {
            matches.sort();
        }

        Ok(SearchResults {
            query: query.to_string(),
            total: matches.len(),
            matches,
        })
    }

    /// Get the index.
    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }

    /// Get the config.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Get index statistics.
    pub fn stats(&self) -> IndexStats {
        self.index.stats()
    }
}
