//! Error types for the termcheck library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`TermcheckError`] enum.
//!
//! # Examples
//!
//! ```
//! use termcheck::error::{Result, TermcheckError};
//!
//! fn resolve(code: &str) -> Result<()> {
//!     Err(TermcheckError::config(format!("unsupported direction: {code}")))
//! }
//!
//! match resolve("fra-eng") {
//!     Ok(_) => println!("ok"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for termcheck operations.
///
/// Configuration errors (an unknown direction code, a malformed synonym
/// file) are surfaced before any matching work begins; the verification
/// itself is deterministic and performs no I/O, so there is no transient
/// failure class.
#[derive(Error, Debug)]
pub enum TermcheckError {
    /// Configuration errors (unsupported direction, bad profile setup)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Analysis-related errors (tokenization, filtering, stemming)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// I/O errors (synonym file loading)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with TermcheckError.
pub type Result<T> = std::result::Result<T, TermcheckError>;

impl TermcheckError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        TermcheckError::Config(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        TermcheckError::Analysis(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        TermcheckError::Other(msg.into())
    }
}
