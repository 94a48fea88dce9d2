//! Stop filter implementation.
//!
//! Removes stopwords from the token stream entirely. Dropped tokens do not
//! occupy a slot in the output: the surviving tokens are renumbered so that
//! `position` equals the token's index in the filtered sequence. Phrase
//! adjacency downstream is therefore defined over the stopword-filtered
//! sequence, not the raw text, which mirrors how the indexed vectors the
//! original system matched against excluded stopwords.
//!
//! The filter carries no default word list; each language profile supplies
//! its own (see `profile`).
//!
//! # Examples
//!
//! ```
//! use termcheck::analysis::token::Token;
//! use termcheck::analysis::token_filter::Filter;
//! use termcheck::analysis::token_filter::stop::StopFilter;
//!
//! let filter = StopFilter::from_words(vec!["the", "of"]);
//! let tokens = vec![
//!     Token::new("completion", 0),
//!     Token::new("of", 1),
//!     Token::new("the", 2),
//!     Token::new("project", 3),
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! // "completion" and "project" are now adjacent.
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[0].position, 0);
//! assert_eq!(result[1].position, 1);
//! assert_eq!(result[1].text, "project");
//! ```

use std::sync::Arc;

use ahash::AHashSet;

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that removes stopwords from the token stream.
///
/// Tokens whose text is in the stopword set are dropped, as are tokens
/// whose text is empty. The remaining tokens are renumbered contiguously.
/// Intended to run after lowercasing and before stemming, so the set is
/// consulted with the plain lowercased surface form.
#[derive(Clone, Debug)]
pub struct StopFilter {
    /// The set of stopwords to remove
    stop_words: Arc<AHashSet<String>>,
}

impl StopFilter {
    /// Create a new stop filter with the given stopword set.
    pub fn with_stop_words(stop_words: AHashSet<String>) -> Self {
        StopFilter {
            stop_words: Arc::new(stop_words),
        }
    }

    /// Create a new stop filter from a list of stopwords.
    ///
    /// # Examples
    ///
    /// ```
    /// use termcheck::analysis::token_filter::stop::StopFilter;
    ///
    /// let filter = StopFilter::from_words(vec!["foo", "bar", "baz"]);
    /// assert_eq!(filter.len(), 3);
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words = words.into_iter().map(|s| s.into()).collect();
        Self::with_stop_words(stop_words)
    }

    /// Check if a word is a stopword.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Get the number of stopwords.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stopword set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .filter(|token| !token.is_empty() && !self.stop_words.contains(&token.text))
            .enumerate()
            .map(|(position, token)| token.with_position(position))
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
