//! Phrase matching over tokenized sentences.
//!
//! The matcher decides whether a glossary term occurs in a sentence. The
//! term is analyzed with the same profile as the sentence, producing a
//! query sequence; a match is a contiguous, order-preserving run of
//! sentence tokens equal (or synonym-equivalent) to the query tokens.
//! Because stopwords never survive analysis, adjacency is defined over the
//! filtered sequence: "Completion of the Project" matches the tokens
//! `[complet, project]` even though stopword text separates them in the raw
//! sentence.
//!
//! # Examples
//!
//! ```
//! use termcheck::matcher::PhraseMatcher;
//! use termcheck::profile::{Language, LanguageProfile};
//!
//! let profile = LanguageProfile::new(Language::English);
//! let sentence = profile.analyze("Completion of the Project was certified.").unwrap();
//! let matcher = PhraseMatcher::new(&profile);
//!
//! let span = matcher.find_phrase("Completion of the Project", &sentence).unwrap().unwrap();
//! assert_eq!(span.start, 0);
//! assert_eq!(span.end, 2);
//! ```

use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::error::Result;
use crate::profile::LanguageProfile;

/// The location of a matched phrase inside a tokenized sentence.
///
/// `start`/`end` are token indices (end exclusive) into the filtered
/// sequence; `start_offset`/`end_offset` are the codepoint offsets of the
/// spanned raw text, from the first matched token's start to the last
/// matched token's end. Raw stopword text between matched tokens falls
/// inside the span.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSpan {
    /// Index of the first matched token
    pub start: usize,
    /// Index one past the last matched token
    pub end: usize,
    /// Codepoint offset of the span's start in the raw text
    pub start_offset: usize,
    /// Codepoint offset of the span's end in the raw text (exclusive)
    pub end_offset: usize,
}

/// Matches glossary terms against tokenized sentences using one language
/// profile's normalization and synonym rules.
#[derive(Debug)]
pub struct PhraseMatcher<'a> {
    profile: &'a LanguageProfile,
}

impl<'a> PhraseMatcher<'a> {
    /// Create a matcher for the given profile.
    pub fn new(profile: &'a LanguageProfile) -> Self {
        PhraseMatcher { profile }
    }

    /// Analyze a term and find its first occurrence in the sentence.
    ///
    /// Returns `None` when the term does not occur, and also when the term
    /// normalizes to nothing (a term of only stopwords matches nowhere,
    /// not everywhere).
    pub fn find_phrase(&self, term: &str, sentence: &[Token]) -> Result<Option<TokenSpan>> {
        let query = self.profile.analyze(term)?;
        Ok(self.find_tokens(&query, sentence))
    }

    /// Find the first occurrence of an already-analyzed query sequence.
    ///
    /// A match at position `i` requires every query token to be equivalent
    /// to the sentence token at `i + j` — contiguous, in order, no gaps.
    /// The lowest-`i` span wins.
    pub fn find_tokens(&self, query: &[Token], sentence: &[Token]) -> Option<TokenSpan> {
        if query.is_empty() || query.len() > sentence.len() {
            return None;
        }

        for i in 0..=(sentence.len() - query.len()) {
            let window = &sentence[i..i + query.len()];
            let matches = query
                .iter()
                .zip(window)
                .all(|(q, s)| self.profile.tokens_equivalent(&q.text, &s.text));
            if matches {
                let last = &window[query.len() - 1];
                return Some(TokenSpan {
                    start: i,
                    end: i + query.len(),
                    start_offset: window[0].start_offset,
                    end_offset: last.end_offset,
                });
            }
        }

        None
    }
}
