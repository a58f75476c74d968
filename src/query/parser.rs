//! Query string parser.
//!
//! Splits a query line into words, reads each word's operator from its
//! leading character, strips that prefix and cleans the rest into a token.
//! Words that clean to nothing are dropped together with their operator, so
//! every surviving term keeps the operator it was written with.
//!
//! # Examples
//!
//! ```
//! use setsearch::query::{Operator, QueryParser};
//!
//! let parsed = QueryParser::new().parse("Fish +red -BLUE").unwrap();
//! let terms: Vec<_> = parsed
//!     .terms()
//!     .iter()
//!     .map(|t| (t.operator, t.token.as_str()))
//!     .collect();
//!
//! assert_eq!(
//!     terms,
//!     vec![
//!         (Operator::Union, "fish"),
//!         (Operator::Intersect, "red"),
//!         (Operator::Difference, "blue"),
//!     ]
//! );
//! ```

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use crate::error::{Result, SetSearchError};
use crate::query::operator::Operator;

/// One (operator, token) pair of a parsed query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryTerm {
    /// How this term combines with the running result.
    pub operator: Operator,

    /// The cleaned token to look up.
    pub token: Token,
}

impl QueryTerm {
    /// Create a new query term.
    pub fn new(operator: Operator, token: Token) -> Self {
        QueryTerm { operator, token }
    }
}

/// A parsed query: terms in the order they were written.
///
/// The first term always carries [`Operator::Union`]; it seeds the result and
/// is never applied as a binary operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedQuery {
    terms: Vec<QueryTerm>,
}

impl ParsedQuery {
    /// Get the terms.
    pub fn terms(&self) -> &[QueryTerm] {
        &self.terms
    }

    /// Number of terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Check whether no word of the query produced a term.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl fmt::Display for ParsedQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
                if let Some(prefix) = term.operator.prefix() {
                    write!(f, "{prefix}")?;
                }
            }
            write!(f, "{}", term.token)?;
        }
        Ok(())
    }
}

/// Parser for prefix-operator queries.
#[derive(Debug, Clone, Default)]
pub struct QueryParser {
    tokenizer: WhitespaceTokenizer,
}

impl QueryParser {
    /// Create a new query parser.
    pub fn new() -> Self {
        QueryParser::default()
    }

    /// Parse a query line.
    ///
    /// Fails only when the query has no words at all. A query whose words
    /// all clean to nothing parses into an empty [`ParsedQuery`].
    pub fn parse(&self, query: &str) -> Result<ParsedQuery> {
        let mut terms: Vec<QueryTerm> = Vec::new();
        let mut words = 0;

        for word in self.tokenizer.tokenize(query) {
            words += 1;

            let operator = Operator::from_prefix(word.leading_char());
            let body = match operator.prefix() {
                Some(prefix) => word.text.strip_prefix(prefix).unwrap_or(word.text),
                None => word.text,
            };

            match Token::new(body) {
                Some(token) => {
                    let operator = if terms.is_empty() {
                        Operator::Union
                    } else {
                        operator
                    };
                    terms.push(QueryTerm::new(operator, token));
                }
                None => debug!("Dropping query word {:?}: no letters", word.text),
            }
        }

        if words == 0 {
            return Err(SetSearchError::query("query is empty"));
        }

        let parsed = ParsedQuery { terms };
        debug!("Parsed query {query:?} into [{parsed}]");
        Ok(parsed)
    }
}
