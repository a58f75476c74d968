//! Whitespace tokenizer implementation.

use super::{RawWord, RawWordStream, Tokenizer};

/// A tokenizer that splits text on ASCII whitespace.
///
/// The separators are space, `\t`, `\n`, `\x0B` (vertical tab), `\x0C` and
/// `\r`. Runs of whitespace collapse, so leading, trailing and repeated
/// separators never produce empty words.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }
}

// `u8::is_ascii_whitespace` leaves out vertical tab.
fn is_separator(byte: u8) -> bool {
    byte.is_ascii_whitespace() || byte == b'\x0B'
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize<'a>(&self, text: &'a str) -> RawWordStream<'a> {
        let bytes = text.as_bytes();
        let mut words = Vec::new();
        let mut start = 0;

        // Skip leading whitespace
        while start < bytes.len() && is_separator(bytes[start]) {
            start += 1;
        }

        while start < bytes.len() {
            let mut word_end = start;
            while word_end < bytes.len() && !is_separator(bytes[word_end]) {
                word_end += 1;
            }

            // ASCII whitespace never splits a multi-byte sequence, so both
            // offsets are char boundaries.
            words.push(RawWord::new(&text[start..word_end], words.len(), start));

            // Skip whitespace to find the next word
            start = word_end;
            while start < bytes.len() && is_separator(bytes[start]) {
                start += 1;
            }
        }

        Box::new(words.into_iter())
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_tokenizer() {
        let tokenizer = WhitespaceTokenizer::new();
        let words: Vec<RawWord> = tokenizer.tokenize("hello  world\ttest").collect();

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text, "hello");
        assert_eq!(words[1].text, "world");
        assert_eq!(words[2].text, "test");
        assert_eq!(words[2].position, 2);
    }

    #[test]
    fn test_offsets() {
        let tokenizer = WhitespaceTokenizer::new();
        let text = "  to be   -not";
        let words: Vec<RawWord> = tokenizer.tokenize(text).collect();

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].start_offset, 2);
        assert_eq!(words[0].end_offset, 4);
        assert_eq!(&text[words[2].start_offset..words[2].end_offset], "-not");
        assert_eq!(words[2].leading_char(), Some('-'));
    }

    #[test]
    fn test_blank_input() {
        let tokenizer = WhitespaceTokenizer::new();
        assert_eq!(tokenizer.tokenize("").count(), 0);
        assert_eq!(tokenizer.tokenize(" \t \n ").count(), 0);
    }

    #[test]
    fn test_vertical_tab_separates() {
        let tokenizer = WhitespaceTokenizer::new();
        let words: Vec<&str> = tokenizer
            .tokenize("a\x0Bb\x0C c\r\n")
            .map(|w| w.text)
            .collect();
        assert_eq!(words, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_non_ascii_words() {
        let tokenizer = WhitespaceTokenizer::new();
        let words: Vec<&str> = tokenizer.tokenize("café  naïve").map(|w| w.text).collect();
        assert_eq!(words, vec!["café", "naïve"]);
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(WhitespaceTokenizer::new().name(), "whitespace");
    }
}
