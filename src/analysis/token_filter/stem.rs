//! Stemming token filter.
//!
//! Reduces each token to its snowball stem so that inflected forms of a
//! term match each other ("Completion" / "completions", "Завершение" /
//! "Завершения"). The snowball algorithms come from the `rust-stemmers`
//! crate; English and Russian are the two used by the built-in language
//! profiles.
//!
//! # Examples
//!
//! ```
//! use rust_stemmers::Algorithm;
//! use termcheck::analysis::token::Token;
//! use termcheck::analysis::token_filter::Filter;
//! use termcheck::analysis::token_filter::stem::StemFilter;
//!
//! let filter = StemFilter::new(Algorithm::English);
//! let tokens = vec![Token::new("completion", 0), Token::new("running", 1)];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result[0].text, "complet");
//! assert_eq!(result[1].text, "run");
//! ```

use rust_stemmers::{Algorithm, Stemmer};

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Filter that applies a snowball stemmer to every token.
///
/// Expects lowercased input; snowball stemmers are defined over lowercase
/// words. Positions and offsets are preserved.
pub struct StemFilter {
    /// The snowball stemmer to apply.
    stemmer: Stemmer,
}

impl std::fmt::Debug for StemFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StemFilter")
            .field("stemmer", &"<stemmer>")
            .finish()
    }
}

impl StemFilter {
    /// Create a new stem filter for the given snowball algorithm.
    pub fn new(algorithm: Algorithm) -> Self {
        StemFilter {
            stemmer: Stemmer::create(algorithm),
        }
    }
}

impl Filter for StemFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                let stemmed = self.stemmer.stem(&token.text).into_owned();
                token.with_text(stemmed)
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stem"
    }
}
