//! Set operators that combine a query term with the running result.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::index::inverted::DocSet;

/// How a query term combines with the accumulated result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    /// Set union (no prefix).
    Union,
    /// Set intersection (`+` prefix).
    Intersect,
    /// Set difference, accumulator minus term (`-` prefix).
    Difference,
}

impl Operator {
    /// Map the leading character of a word to its operator.
    pub fn from_prefix(prefix: Option<char>) -> Self {
        match prefix {
            Some('+') => Operator::Intersect,
            Some('-') => Operator::Difference,
            _ => Operator::Union,
        }
    }

    /// The prefix character that selects this operator, if any.
    pub fn prefix(self) -> Option<char> {
        match self {
            Operator::Union => None,
            Operator::Intersect => Some('+'),
            Operator::Difference => Some('-'),
        }
    }

    /// Combine `term` into `acc` and return the new accumulator.
    pub fn apply(self, mut acc: DocSet, term: &DocSet) -> DocSet {
        match self {
            Operator::Union => acc.extend(term.iter().cloned()),
            Operator::Intersect => acc.retain(|doc| term.contains(doc)),
            Operator::Difference => acc.retain(|doc| !term.contains(doc)),
        }
        acc
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operator::Union => "union",
            Operator::Intersect => "intersect",
            Operator::Difference => "difference",
        };
        f.write_str(name)
    }
}
