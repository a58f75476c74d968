//! In-memory inverted index.

use std::collections::BTreeMap;

use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};

use crate::analysis::token::{Token, gather_tokens};

/// Set of document identifiers. Unique and unordered.
pub type DocSet = AHashSet<String>;

/// Statistics about an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    /// Number of documents added to the index.
    pub doc_count: u64,

    /// Number of unique terms in the index.
    pub term_count: u64,
}

/// Mapping from token to the documents containing it.
///
/// Only ever grows: documents are added, never removed. Evaluating a query
/// takes `&InvertedIndex`, so a built index can be shared between readers
/// without locking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvertedIndex {
    /// Token -> documents containing the token.
    postings: AHashMap<Token, DocSet>,

    /// Number of documents added so far, duplicates included.
    doc_count: u64,
}

impl InvertedIndex {
    /// Create a new empty index.
    pub fn new() -> Self {
        InvertedIndex::default()
    }

    /// Index the distinct tokens of `text` under `doc_id`.
    ///
    /// Returns the number of distinct tokens found in the text. Adding the
    /// same identifier twice merges into the existing sets.
    pub fn add_document(&mut self, doc_id: &str, text: &str) -> usize {
        let tokens = gather_tokens(text);
        let token_count = tokens.len();

        for token in tokens {
            self.insert(token, doc_id);
        }
        self.doc_count += 1;

        token_count
    }

    /// Add a single (token, document) posting, creating the set if needed.
    pub fn insert(&mut self, token: Token, doc_id: &str) {
        let docs = self.postings.entry(token).or_default();
        if !docs.contains(doc_id) {
            docs.insert(doc_id.to_string());
        }
    }

    /// Get the documents containing `term`, if the term is indexed.
    pub fn postings(&self, term: &str) -> Option<&DocSet> {
        self.postings.get(term)
    }

    /// Check whether `term` is indexed.
    pub fn contains_term(&self, term: &str) -> bool {
        self.postings.contains_key(term)
    }

    /// Iterate over all (token, documents) entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&Token, &DocSet)> {
        self.postings.iter()
    }

    /// Number of unique terms.
    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    /// Number of documents added so far.
    pub fn doc_count(&self) -> u64 {
        self.doc_count
    }

    /// Check whether the index has no terms.
    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    /// Get index statistics.
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            doc_count: self.doc_count,
            term_count: self.postings.len() as u64,
        }
    }

    /// Ordered copy of the index: terms and their documents both sorted.
    pub fn to_sorted_map(&self) -> BTreeMap<String, Vec<String>> {
        self.postings
            .iter()
            .map(|(token, docs)| {
                let mut docs: Vec<String> = docs.iter().cloned().collect();
                docs.sort();
                (token.as_str().to_string(), docs)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_document() {
        let mut index = InvertedIndex::new();
        let added = index.add_document("www.shoppinglist.com", "eggs milk fish bread cheese");

        assert_eq!(added, 5);
        assert_eq!(index.term_count(), 5);
        assert_eq!(index.doc_count(), 1);

        let docs = index.postings("eggs").unwrap();
        assert_eq!(docs.len(), 1);
        assert!(docs.contains("www.shoppinglist.com"));
    }

    #[test]
    fn test_repeated_words_collapse() {
        let mut index = InvertedIndex::new();
        let added = index.add_document("seuss.net", "One Fish Two Fish Red fish Blue fish");

        assert_eq!(added, 5);
        assert_eq!(index.postings("fish").unwrap().len(), 1);
    }

    #[test]
    fn test_duplicate_doc_ids_merge() {
        let mut index = InvertedIndex::new();
        index.add_document("same.org", "red green");
        index.add_document("same.org", "green blue");

        assert_eq!(index.doc_count(), 2);
        assert_eq!(index.postings("green").unwrap().len(), 1);
        assert!(index.postings("blue").unwrap().contains("same.org"));
    }

    #[test]
    fn test_missing_term() {
        let index = InvertedIndex::new();
        assert!(index.postings("anything").is_none());
        assert!(!index.contains_term("anything"));
        assert!(index.is_empty());
    }

    #[test]
    fn test_punctuation_only_words_not_indexed() {
        let mut index = InvertedIndex::new();
        index.add_document("a.com", "... !!! 42 @");

        assert!(index.is_empty());
        assert_eq!(index.doc_count(), 1);
    }

    #[test]
    fn test_stats_and_sorted_map() {
        let mut index = InvertedIndex::new();
        index.add_document("b.org", "Red blue");
        index.add_document("a.com", "red");

        assert_eq!(
            index.stats(),
            IndexStats {
                doc_count: 2,
                term_count: 2
            }
        );

        let sorted = index.to_sorted_map();
        let terms: Vec<&String> = sorted.keys().collect();
        assert_eq!(terms, vec!["blue", "red"]);
        assert_eq!(sorted["red"], vec!["a.com".to_string(), "b.org".to_string()]);
    }
}
