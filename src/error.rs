//! Error types for the setsearch library.
//!
//! Every fallible operation in the crate returns [`Result`], whose error side is
//! the [`SetSearchError`] enum. Conditions the search model treats as ordinary
//! (an unknown query token, a trailing half record) are not errors and never
//! show up here. An unreadable corpus handed to
//! [`build_index`](crate::index::builder::build_index) is not returned as an
//! error either; it is carried in the
//! [`BuildReport`](crate::index::builder::BuildReport).
//!
//! # Examples
//!
//! ```
//! use setsearch::error::{Result, SetSearchError};
//!
//! fn reject_blank(query: &str) -> Result<&str> {
//!     if query.trim().is_empty() {
//!         return Err(SetSearchError::query("query is empty"));
//!     }
//!     Ok(query)
//! }
//!
//! assert!(reject_blank("   ").is_err());
//! assert_eq!(reject_blank("fish").unwrap(), "fish");
//! ```

use std::io;

use thiserror::Error;

/// The main error type for setsearch operations.
#[derive(Error, Debug)]
pub enum SetSearchError {
    /// I/O errors (corpus files, config files, stdin/stdout)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Corpus read failures after the file was opened
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// Query-related errors (empty queries, unparseable input)
    #[error("Query error: {0}")]
    Query(String),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with SetSearchError.
pub type Result<T> = std::result::Result<T, SetSearchError>;

impl SetSearchError {
    /// Create a new corpus error.
    pub fn corpus<S: Into<String>>(msg: S) -> Self {
        SetSearchError::Corpus(msg.into())
    }

    /// Create a new query error.
    pub fn query<S: Into<String>>(msg: S) -> Self {
        SetSearchError::Query(msg.into())
    }

    /// Create a new config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        SetSearchError::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let error = SetSearchError::query("empty query");
        assert_eq!(error.to_string(), "Query error: empty query");

        let error = SetSearchError::corpus("bad record");
        assert_eq!(error.to_string(), "Corpus error: bad record");

        let error = SetSearchError::config("missing corpus");
        assert_eq!(error.to_string(), "Config error: missing corpus");
    }

    #[test]
    fn test_error_from_io() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "tiny.txt");
        let error = SetSearchError::from(io_error);

        match error {
            SetSearchError::Io(_) => {} // Expected
            _ => panic!("Expected IO error"),
        }
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let error = SetSearchError::from(json_error);

        assert!(matches!(error, SetSearchError::Json(_)));
    }
}
