//! Token types for text analysis.
//!
//! This module defines the data structures that flow through the analysis
//! pipeline: a [`Token`] is a single normalized word together with its
//! location in the original text, and a [`TokenStream`] is a boxed iterator
//! of tokens produced by a tokenizer and consumed by filters.
//!
//! # Offsets
//!
//! `start_offset` and `end_offset` are **codepoint** indices into the
//! original (non-normalized) sentence text, `end_offset` exclusive. They
//! always locate the raw substring the token was produced from, even after
//! lowercasing and stemming have rewritten `text`, which is what allows the
//! highlighter to mark the original spelling verbatim.
//!
//! # Examples
//!
//! ```
//! use termcheck::analysis::token::Token;
//!
//! let token = Token::with_offsets("complet", 0, 20, 30);
//! assert_eq!(token.text, "complet");
//! assert_eq!(token.start_offset, 20);
//! assert_eq!(token.end_offset, 30);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single unit of text after tokenization and filtering.
///
/// `position` is the token's index in the filtered sequence: stopwords are
/// removed from the stream entirely and do not occupy a slot, so two tokens
/// with consecutive positions are phrase-adjacent even when stopword text
/// separated them in the raw sentence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The normalized text content of the token
    pub text: String,

    /// The position of the token in the filtered token sequence (0-based)
    pub position: usize,

    /// Codepoint offset where this token starts in the original text
    pub start_offset: usize,

    /// Codepoint offset where this token ends in the original text (exclusive)
    pub end_offset: usize,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset: 0,
            end_offset: 0,
        }
    }

    /// Create a new token with text, position, and codepoint offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
        }
    }

    /// Check if the token text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Clone this token with updated text, keeping position and offsets.
    pub fn with_text<S: Into<String>>(&self, text: S) -> Self {
        let mut token = self.clone();
        token.text = text.into();
        token
    }

    /// Clone this token with an updated position.
    pub fn with_position(&self, position: usize) -> Self {
        let mut token = self.clone();
        token.position = position;
        token
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream is the sequence of tokens flowing through the pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

/// A fully analyzed sentence: the collected, filtered token sequence.
pub type TokenizedSentence = Vec<Token>;
