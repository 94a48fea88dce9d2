//! Analyzer trait and pipeline combinator.
//!
//! An analyzer is the complete text processing pipeline: it tokenizes raw
//! text and runs the resulting stream through a chain of filters.
//!
//! ```text
//! Raw text → Tokenizer → Filter 1 → … → Filter N → Token stream
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// Requires `Send + Sync` so analyzers can be shared across the worker
/// threads that tokenize bitext entries in parallel.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &str;
}

pub mod pipeline;

pub use pipeline::PipelineAnalyzer;
