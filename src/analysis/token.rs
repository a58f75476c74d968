//! Index keys and the rules that produce them.
//!
//! A [`Token`] is a normalized word: every ASCII letter lowercased and any
//! ASCII punctuation stripped from both ends. Punctuation between other
//! characters (`i'm`, `h.e.l.l.o`) is left alone, and digits are kept but do
//! not count as letters. A word with no letters at all has no token.
//!
//! # Examples
//!
//! ```
//! use setsearch::analysis::token::{Token, clean_token};
//!
//! assert_eq!(clean_token(".&?Hello$#@"), "hello");
//! assert_eq!(clean_token("...hello123..."), "hello123");
//! assert_eq!(clean_token("123"), "");
//!
//! let token = Token::new("I'm").unwrap();
//! assert_eq!(token.as_str(), "i'm");
//! assert!(Token::new("...").is_none());
//! ```

use std::borrow::Borrow;
use std::fmt;

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;

/// A normalized index key.
///
/// Never empty, never contains an uppercase ASCII letter, and never starts or
/// ends with ASCII punctuation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    /// Clean a raw word into a token. Returns `None` when the word has no
    /// letters and would clean to the empty string.
    pub fn new(raw: &str) -> Option<Self> {
        let cleaned = clean_token(raw);
        if cleaned.is_empty() {
            None
        } else {
            Some(Token(cleaned))
        }
    }

    /// Get the token text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the token and return its text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Borrow<str> for Token {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation()
}

/// Normalize a raw word into an index key.
///
/// Returns the empty string when `raw` contains no ASCII letter; callers must
/// skip empty results rather than index them.
pub fn clean_token(raw: &str) -> String {
    let letters = raw.bytes().filter(|b| b.is_ascii_alphabetic()).count();
    if letters == 0 {
        return String::new();
    }

    // At least one letter survives both trims, so the result is never empty.
    raw.trim_start_matches(is_punctuation)
        .trim_end_matches(is_punctuation)
        .to_ascii_lowercase()
}

/// Collect the distinct tokens of a text.
///
/// Words that clean to nothing are dropped, and repeated words collapse to a
/// single entry.
pub fn gather_tokens(text: &str) -> AHashSet<Token> {
    WhitespaceTokenizer::new()
        .tokenize(text)
        .filter_map(|word| Token::new(word.text))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_set(words: &[&str]) -> AHashSet<Token> {
        words.iter().filter_map(|w| Token::new(w)).collect()
    }

    #[test]
    fn test_both_punctuation() {
        assert_eq!(clean_token(".&?hello$#@"), "hello");
    }

    #[test]
    fn test_middle_punctuation() {
        assert_eq!(clean_token("hEl!LO"), "hel!lo");
    }

    #[test]
    fn test_trailing_punctuation_with_inner_dots() {
        assert_eq!(clean_token("h.e.l.l.o..."), "h.e.l.l.o");
    }

    #[test]
    fn test_leading_punctuation_with_inner_dots() {
        assert_eq!(clean_token("...h.e.l.l.o"), "h.e.l.l.o");
    }

    #[test]
    fn test_ending_numbers() {
        assert_eq!(clean_token("...hello123..."), "hello123");
        assert_eq!(clean_token("4ever!"), "4ever");
    }

    #[test]
    fn test_no_letters() {
        assert_eq!(clean_token(""), "");
        assert_eq!(clean_token("..."), "");
        assert_eq!(clean_token("123"), "");
        assert_eq!(clean_token("$1.99"), "");
        assert!(Token::new("@").is_none());
    }

    #[test]
    fn test_single_letter_between_punctuation() {
        assert_eq!(clean_token(".a."), "a");
        assert_eq!(clean_token("!!!B"), "b");
        assert_eq!(clean_token("z???"), "z");
    }

    #[test]
    fn test_non_ascii_is_kept() {
        // Only ASCII punctuation is stripped; other characters are untouched.
        assert_eq!(clean_token("«Café»"), "«café»");
        assert_eq!(clean_token("\"Naïve\""), "naïve");
    }

    #[test]
    fn test_clean_is_idempotent() {
        for raw in ["...Hello!!", "h.e.l.l.o...", "I'm", "--x--", "a1!"] {
            let once = clean_token(raw);
            assert!(!once.is_empty());
            assert_eq!(clean_token(&once), once);
        }
    }

    #[test]
    fn test_token_shape() {
        for raw in [".&?HeLLo$#@", "(Mixed)Case.", "'quoted'", "end."] {
            let token = Token::new(raw).unwrap();
            let text = token.as_str();
            assert_eq!(text, text.to_ascii_lowercase());
            assert!(!text.starts_with(|c: char| c.is_ascii_punctuation()));
            assert!(!text.ends_with(|c: char| c.is_ascii_punctuation()));
        }
    }

    #[test]
    fn test_gather_tokens_leading_spaces() {
        let expected = token_set(&["to", "be", "ora", "not"]);
        assert_eq!(gather_tokens("   to be ora not to be"), expected);
    }

    #[test]
    fn test_gather_tokens_trailing_spaces() {
        let expected = token_set(&["to", "be", "ora", "not"]);
        assert_eq!(gather_tokens("to be ora not to be   "), expected);
    }

    #[test]
    fn test_gather_tokens_spaces_between_words() {
        let expected = token_set(&["to", "be", "ora", "not"]);
        assert_eq!(gather_tokens("to   be   ora   not   to   be"), expected);
        assert_eq!(gather_tokens("to be ora not to be"), expected);
    }

    #[test]
    fn test_gather_tokens_drops_empty_words() {
        let expected = token_set(&["eggs", "milk"]);
        assert_eq!(gather_tokens("EGGS! @ 42 milk, ..."), expected);
        assert!(gather_tokens("").is_empty());
    }

    #[test]
    fn test_token_display_and_borrow() {
        let token = Token::new("Fish!").unwrap();
        assert_eq!(token.to_string(), "fish");

        let set = token_set(&["fish"]);
        assert!(set.contains("fish"));
        assert_eq!(token.into_string(), "fish");
    }
}
