//! Boolean set-combination queries.
//!
//! A query is a line of whitespace-separated words. The first word seeds the
//! result; every later word is combined with the running result according to
//! its prefix: `+word` intersects, `-word` subtracts, a bare word unions.
//! Terms fold strictly left to right, so `a -b +c` means `(a - b) ∩ c`.

pub mod evaluator;
pub mod operator;
pub mod parser;

// Re-export commonly used types
pub use evaluator::{QueryEvaluator, find_query_matches};
pub use operator::Operator;
pub use parser::{ParsedQuery, QueryParser, QueryTerm};
