//! Tokenizers that split raw text into words.
//!
//! A tokenizer does not normalize anything: it only finds the boundaries of
//! the words in its input. Normalization into index keys happens afterwards in
//! [`clean_token`](crate::analysis::token::clean_token).
//!
//! # Examples
//!
//! ```
//! use setsearch::analysis::tokenizer::Tokenizer;
//! use setsearch::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let words: Vec<_> = tokenizer.tokenize("one  +two").map(|w| w.text).collect();
//! assert_eq!(words, vec!["one", "+two"]);
//! ```

/// A word as it appears in the original text, before any cleaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawWord<'a> {
    /// The word text, borrowed from the input.
    pub text: &'a str,

    /// Ordinal of the word within the input (0-based).
    pub position: usize,

    /// Byte offset of the first character of the word.
    pub start_offset: usize,

    /// Byte offset one past the last character of the word.
    pub end_offset: usize,
}

impl<'a> RawWord<'a> {
    /// Create a new raw word.
    pub fn new(text: &'a str, position: usize, start_offset: usize) -> Self {
        RawWord {
            text,
            position,
            start_offset,
            end_offset: start_offset + text.len(),
        }
    }

    /// The first character of the word, i.e. the character right after the
    /// whitespace that precedes it.
    pub fn leading_char(&self) -> Option<char> {
        self.text.chars().next()
    }
}

/// Boxed iterator of raw words borrowed from the tokenized text.
pub type RawWordStream<'a> = Box<dyn Iterator<Item = RawWord<'a>> + 'a>;

/// Trait for tokenizers that split text into raw words.
///
/// The trait requires `Send + Sync` so a tokenizer can be shared by readers of
/// the same index.
pub trait Tokenizer: Send + Sync {
    /// Split the given text into words.
    fn tokenize<'a>(&self, text: &'a str) -> RawWordStream<'a>;

    /// Get the name of this tokenizer (for debugging and logging).
    fn name(&self) -> &'static str;
}

pub mod whitespace;
