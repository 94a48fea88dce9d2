//! Word-run tokenizer implementation.
//!
//! This module provides the tokenizer used for both sentence and term
//! analysis: it scans the text for maximal runs of alphanumeric codepoints,
//! where a hyphen or apostrophe flanked by alphanumeric codepoints does not
//! end the run. Each run's raw substring is emitted together with its
//! codepoint offsets in the original text.
//!
//! # Examples
//!
//! ```
//! use termcheck::analysis::tokenizer::Tokenizer;
//! use termcheck::analysis::tokenizer::word::WordTokenizer;
//!
//! let tokenizer = WordTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("well-known, isn't it?").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[0].text, "well-known");
//! assert_eq!(tokens[1].text, "isn't");
//! assert_eq!(tokens[2].text, "it");
//! ```

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A tokenizer that splits text into maximal word-character runs.
///
/// A run starts at an alphanumeric codepoint (any Unicode letter or digit)
/// and continues over alphanumerics; `-`, `'` and `’` are kept inside a run
/// when the following codepoint is alphanumeric, so hyphenated compounds and
/// contractions tokenize as a single word. Everything else separates runs
/// and is never emitted.
///
/// Offsets are codepoint indices, which keeps them stable for the
/// highlighter regardless of the UTF-8 byte width of the text (Cyrillic
/// sentences included).
#[derive(Clone, Debug, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    /// Create a new word tokenizer.
    pub fn new() -> Self {
        WordTokenizer
    }

    /// Characters that join two word characters into one run.
    fn is_joiner(c: char) -> bool {
        matches!(c, '-' | '\'' | '\u{2019}')
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let chars: Vec<char> = text.chars().collect();
        let mut tokens = Vec::new();
        let mut position = 0;
        let mut i = 0;

        while i < chars.len() {
            if !chars[i].is_alphanumeric() {
                i += 1;
                continue;
            }

            let start = i;
            let mut word = String::new();
            while i < chars.len() {
                let c = chars[i];
                let joins = Self::is_joiner(c)
                    && chars.get(i + 1).is_some_and(|next| next.is_alphanumeric());
                if c.is_alphanumeric() || joins {
                    word.push(c);
                    i += 1;
                } else {
                    break;
                }
            }

            tokens.push(Token::with_offsets(word, position, start, i));
            position += 1;
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "word"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_word_tokenizer() {
        let tokenizer = WordTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("hello, world!").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[0].start_offset, 0);
        assert_eq!(tokens[0].end_offset, 5);
        assert_eq!(tokens[1].text, "world");
        assert_eq!(tokens[1].start_offset, 7);
        assert_eq!(tokens[1].end_offset, 12);
    }

    #[test]
    fn test_hyphen_and_apostrophe_join_runs() {
        let tokenizer = WordTokenizer::new();
        let tokens: Vec<Token> = tokenizer
            .tokenize("state-of-the-art isn't -broken-")
            .unwrap()
            .collect();

        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        // Leading/trailing joiners are not part of any run.
        assert_eq!(texts, vec!["state-of-the-art", "isn't", "broken"]);
    }

    #[test]
    fn test_cyrillic_codepoint_offsets() {
        let tokenizer = WordTokenizer::new();
        let text = "Проект достиг Завершения.";
        let tokens: Vec<Token> = tokenizer.tokenize(text).unwrap().collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].text, "Проект");
        assert_eq!(tokens[0].start_offset, 0);
        assert_eq!(tokens[0].end_offset, 6);
        assert_eq!(tokens[2].text, "Завершения");
        // Codepoint offsets, not bytes: "Проект достиг " is 14 codepoints.
        assert_eq!(tokens[2].start_offset, 14);
        assert_eq!(tokens[2].end_offset, 24);
    }

    #[test]
    fn test_digits_are_word_characters() {
        let tokenizer = WordTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("section 42b applies").unwrap().collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].text, "42b");
    }

    #[test]
    fn test_tokenize_is_deterministic() {
        let tokenizer = WordTokenizer::new();
        let text = "The five boxing wizards jump quickly.";
        let first: Vec<Token> = tokenizer.tokenize(text).unwrap().collect();
        let second: Vec<Token> = tokenizer.tokenize(text).unwrap().collect();

        assert_eq!(first, second);
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(WordTokenizer::new().name(), "word");
    }
}
