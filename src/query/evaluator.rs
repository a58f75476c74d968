//! Left-to-right evaluation of parsed queries against an index.

use log::debug;

use crate::error::Result;
use crate::index::inverted::{DocSet, InvertedIndex};
use crate::query::parser::{ParsedQuery, QueryParser};

/// Evaluates queries against a borrowed, read-only index.
///
/// A token missing from the index stands for the empty set, so it can only
/// shrink (intersection) or leave unchanged (union, difference) the result.
#[derive(Debug, Clone)]
pub struct QueryEvaluator<'a> {
    index: &'a InvertedIndex,
    parser: QueryParser,
}

impl<'a> QueryEvaluator<'a> {
    /// Create an evaluator over `index`.
    pub fn new(index: &'a InvertedIndex) -> Self {
        QueryEvaluator {
            index,
            parser: QueryParser::new(),
        }
    }

    /// Parse and evaluate a query line.
    ///
    /// Fails when the query contains no words at all.
    pub fn evaluate(&self, query: &str) -> Result<DocSet> {
        let parsed = self.parser.parse(query)?;
        Ok(self.evaluate_parsed(&parsed))
    }

    /// Fold the terms of an already parsed query.
    pub fn evaluate_parsed(&self, parsed: &ParsedQuery) -> DocSet {
        let empty = DocSet::new();
        let mut terms = parsed.terms().iter();

        let Some(first) = terms.next() else {
            return DocSet::new();
        };

        let seed = self
            .index
            .postings(first.token.as_str())
            .cloned()
            .unwrap_or_default();

        terms.fold(seed, |acc, term| {
            let docs = self.index.postings(term.token.as_str()).unwrap_or(&empty);
            let combined = term.operator.apply(acc, docs);
            debug!(
                "{} {:?} -> {} documents",
                term.operator,
                term.token.as_str(),
                combined.len()
            );
            combined
        })
    }
}

/// Evaluate `query` against `index`.
///
/// # Examples
///
/// ```
/// use setsearch::corpus::Record;
/// use setsearch::index::build;
/// use setsearch::query::find_query_matches;
///
/// let (index, _) = build(vec![
///     Record::new("a.com", "red fish"),
///     Record::new("b.org", "blue fish"),
/// ]);
///
/// let matches = find_query_matches(&index, "fish -blue").unwrap();
/// assert_eq!(matches.len(), 1);
/// assert!(matches.contains("a.com"));
/// ```
pub fn find_query_matches(index: &InvertedIndex, query: &str) -> Result<DocSet> {
    QueryEvaluator::new(index).evaluate(query)
}
