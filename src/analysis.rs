//! Text analysis for setsearch.
//!
//! Raw text is split into whitespace-delimited words by a [`tokenizer::Tokenizer`]
//! and each word is normalized into an index key by [`token::clean_token`].

pub mod token;
pub mod tokenizer;

// Re-export commonly used types
pub use token::*;
pub use tokenizer::*;
