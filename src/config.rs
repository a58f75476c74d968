//! Configuration for the search front end.
//!
//! # Examples
//!
//! ```
//! use setsearch::config::SearchConfig;
//!
//! let config = SearchConfig::default();
//! assert!(config.sort_results);
//! assert!(config.corpus_path.is_none());
//!
//! let config = SearchConfig::from_json(r#"{"sort_results": false}"#).unwrap();
//! assert!(!config.sort_results);
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SetSearchError};

/// Default prompt printed before each interactive query.
pub const DEFAULT_PROMPT: &str = "Enter query sentence (press enter to quit): ";

/// Configuration for building and querying an index.
///
/// Every field is optional in a config file; missing fields take their
/// default values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Corpus file to index.
    pub corpus_path: Option<PathBuf>,

    /// Whether to sort matching document identifiers in results.
    pub sort_results: bool,

    /// Prompt shown by the interactive loop.
    pub prompt: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            corpus_path: None,
            sort_results: true,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

impl SearchConfig {
    /// Parse a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_json(&contents)
    }

    /// Set the corpus path.
    pub fn with_corpus_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.corpus_path = Some(path.into());
        self
    }

    /// Get the corpus path, or an error if none was configured.
    pub fn require_corpus_path(&self) -> Result<&Path> {
        self.corpus_path
            .as_deref()
            .ok_or_else(|| SetSearchError::config("no corpus path configured"))
    }
}
