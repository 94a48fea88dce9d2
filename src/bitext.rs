//! Bitext entries and the per-run sentence index.
//!
//! A [`BitextEntry`] is one aligned sentence pair from the parsed corpus,
//! with a stable 1-based id assigned in input order — the corpus's only
//! persistent order and the required output ordering. A [`SentenceIndex`]
//! wraps an entry together with the tokenized forms of both its sentences.
//!
//! The index is rebuilt wholesale per verification run. Tokenizing one
//! entry is independent of every other entry, so [`build_index`] fans the
//! work out across a rayon worker pool; the indexed collect restores input
//! order before any matching begins.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analysis::token::TokenizedSentence;
use crate::error::Result;
use crate::profile::LanguageProfile;

/// One aligned sentence pair of the corpus.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BitextEntry {
    /// Stable id, assigned in input order starting at 1
    pub id: u32,

    /// The source-language sentence
    pub source_text: String,

    /// The target-language sentence
    pub target_text: String,
}

impl BitextEntry {
    /// Create a new bitext entry.
    pub fn new<S: Into<String>, T: Into<String>>(id: u32, source_text: S, target_text: T) -> Self {
        BitextEntry {
            id,
            source_text: source_text.into(),
            target_text: target_text.into(),
        }
    }
}

/// Build bitext entries from parsed (source, target) pairs, assigning ids
/// in input order starting at 1.
pub fn entries_from_pairs(pairs: &[(String, String)]) -> Vec<BitextEntry> {
    pairs
        .iter()
        .enumerate()
        .map(|(i, (source, target))| BitextEntry::new(i as u32 + 1, source, target))
        .collect()
}

/// A bitext entry together with the tokenized forms of both its sentences.
#[derive(Clone, Debug)]
pub struct SentenceIndex {
    /// The underlying entry
    pub entry: BitextEntry,

    /// Tokenized source sentence
    pub source_tokens: TokenizedSentence,

    /// Tokenized target sentence
    pub target_tokens: TokenizedSentence,
}

/// Tokenize every entry's source and target sentence, once each, in
/// parallel across entries.
///
/// The returned vector is in entry input order (ids ascending): rayon's
/// indexed collect re-imposes it regardless of task scheduling.
pub fn build_index(
    entries: Vec<BitextEntry>,
    source_profile: &LanguageProfile,
    target_profile: &LanguageProfile,
) -> Result<Vec<SentenceIndex>> {
    entries
        .into_par_iter()
        .map(|entry| {
            let source_tokens = source_profile.analyze(&entry.source_text)?;
            let target_tokens = target_profile.analyze(&entry.target_text)?;
            Ok(SentenceIndex {
                entry,
                source_tokens,
                target_tokens,
            })
        })
        .collect()
}
