//! # termcheck
//!
//! A terminology consistency checker for bilingual, sentence-aligned
//! corpora. Given a bitext and a glossary of approved source/target term
//! pairs, it reports the sentence pairs where a source term is used and
//! the approved target term is present (successes) or absent (errors).
//!
//! ## Features
//!
//! - Pure Rust implementation of the full matching engine: per-language
//!   tokenization, snowball stemming, stopword filtering, contiguous
//!   phrase matching, and highlighted snippet rendering
//! - Language-specific behavior isolated behind [`profile::LanguageProfile`]
//!   (English, and Russian with optional synonym groups)
//! - Stateless, deterministic verification; bitext tokenization is
//!   data-parallel across entries
//!
//! ## Example
//!
//! ```
//! use termcheck::verify::verify_terms;
//!
//! let bitext = vec![(
//!     "The project reached Completion on time.".to_string(),
//!     "Проект достиг Завершения в срок.".to_string(),
//! )];
//! let glossary = vec![("Completion".to_string(), "Завершение".to_string())];
//!
//! let successes = verify_terms("eng-rus", &bitext, &glossary, true).unwrap();
//! assert_eq!(successes.len(), 1);
//! ```

pub mod analysis;
pub mod bitext;
pub mod error;
pub mod highlight;
pub mod matcher;
pub mod profile;
pub mod verify;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
