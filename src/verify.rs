//! Terminology consistency verification.
//!
//! The verifier is the orchestrator: it resolves the two language profiles
//! for a direction, builds the sentence index, drives the phrase matcher
//! over glossary × bitext, applies the success/error predicate, and
//! renders highlighted snippets for every emitted result.
//!
//! The predicate is asymmetric: a result is only ever emitted for sentence
//! pairs whose SOURCE sentence actually uses the source term. With
//! `want_success = true` the target term must also be present ("the
//! approved translation was used"); with `want_success = false` it must be
//! absent ("the source term was used but the approved translation is
//! missing"). A sentence pair whose source sentence never uses the term is
//! neither a success nor an error.
//!
//! # Examples
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
//! let results = verify_terms("eng-rus", &bitext, &glossary, true).unwrap();
//! assert_eq!(results.len(), 1);
//! assert_eq!(
//!     results[0].source_snippet,
//!     "The project reached <b>Completion</b> on time."
//! );
//! ```

use serde::{Deserialize, Serialize};

use crate::analysis::token::TokenizedSentence;
use crate::bitext::{build_index, entries_from_pairs};
use crate::error::Result;
use crate::highlight::Highlighter;
use crate::matcher::PhraseMatcher;
use crate::profile::{Direction, LanguageProfile};

/// One verification finding: a sentence pair that used the source term,
/// with both sentences rendered as snippets.
///
/// The four text fields map to the display columns of the results table;
/// `bitext_id` is the ordering key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Id of the bitext entry this result came from
    pub bitext_id: u32,

    /// Source sentence with the matched source term highlighted
    pub source_snippet: String,

    /// Target sentence, highlighted when the target term matched
    pub target_snippet: String,

    /// The glossary source term
    pub source_term: String,

    /// The glossary target term
    pub target_term: String,
}

/// Verifies glossary terminology against a bitext corpus.
///
/// Holds the resolved source and target [`LanguageProfile`]s and the
/// snippet [`Highlighter`]. Construct per direction (or from custom
/// profiles, e.g. a Russian profile with synonym groups) and reuse across
/// verification calls; the verifier itself is stateless between calls.
#[derive(Debug)]
pub struct TermVerifier {
    source_profile: LanguageProfile,
    target_profile: LanguageProfile,
    highlighter: Highlighter,
}

impl TermVerifier {
    /// Create a verifier from explicit profiles.
    pub fn new(source_profile: LanguageProfile, target_profile: LanguageProfile) -> Self {
        TermVerifier {
            source_profile,
            target_profile,
            highlighter: Highlighter::default(),
        }
    }

    /// Create a verifier for a direction code.
    ///
    /// An unsupported code is a configuration error; nothing is analyzed
    /// or matched in that case.
    pub fn for_direction(code: &str) -> Result<Self> {
        let direction = Direction::parse(code)?;
        Ok(Self::new(
            LanguageProfile::new(direction.source()),
            LanguageProfile::new(direction.target()),
        ))
    }

    /// Replace the default highlighter.
    pub fn with_highlighter(mut self, highlighter: Highlighter) -> Self {
        self.highlighter = highlighter;
        self
    }

    /// The source-language profile.
    pub fn source_profile(&self) -> &LanguageProfile {
        &self.source_profile
    }

    /// The target-language profile.
    pub fn target_profile(&self) -> &LanguageProfile {
        &self.target_profile
    }

    /// Run the verification.
    ///
    /// Bitext pairs are `(source_sentence, target_sentence)`; glossary
    /// pairs are `(source_term, target_term)`; both already trimmed and
    /// non-empty. Results come back ordered by `bitext_id` ascending with
    /// ties in glossary input order, without deduplication: an entry
    /// matching several glossary entries appears once per match.
    pub fn verify(
        &self,
        bitext: &[(String, String)],
        glossary: &[(String, String)],
        want_success: bool,
    ) -> Result<Vec<MatchResult>> {
        let index = build_index(
            entries_from_pairs(bitext),
            &self.source_profile,
            &self.target_profile,
        )?;

        // Analyze every glossary term once, not once per sentence pair.
        let queries: Vec<(TokenizedSentence, TokenizedSentence)> = glossary
            .iter()
            .map(|(source_term, target_term)| {
                Ok((
                    self.source_profile.analyze(source_term)?,
                    self.target_profile.analyze(target_term)?,
                ))
            })
            .collect::<Result<_>>()?;

        let source_matcher = PhraseMatcher::new(&self.source_profile);
        let target_matcher = PhraseMatcher::new(&self.target_profile);

        let mut results = Vec::new();
        for sentence in &index {
            for ((source_term, target_term), (source_query, target_query)) in
                glossary.iter().zip(&queries)
            {
                let Some(source_span) =
                    source_matcher.find_tokens(source_query, &sentence.source_tokens)
                else {
                    continue;
                };

                let target_span = target_matcher.find_tokens(target_query, &sentence.target_tokens);
                if target_span.is_some() != want_success {
                    continue;
                }

                results.push(MatchResult {
                    bitext_id: sentence.entry.id,
                    source_snippet: self
                        .highlighter
                        .highlight(&sentence.entry.source_text, Some(&source_span)),
                    target_snippet: self
                        .highlighter
                        .highlight(&sentence.entry.target_text, target_span.as_ref()),
                    source_term: source_term.clone(),
                    target_term: target_term.clone(),
                });
            }
        }

        Ok(results)
    }
}

/// Verify glossary terminology against a bitext corpus.
///
/// The library entry point: resolves `direction` (`"eng-rus"` or
/// `"rus-eng"`), then reports sentence pairs where the source term occurs
/// and the target term is present (`want_success = true`) or absent
/// (`want_success = false`).
pub fn verify_terms(
    direction: &str,
    bitext: &[(String, String)],
    glossary: &[(String, String)],
    want_success: bool,
) -> Result<Vec<MatchResult>> {
    TermVerifier::for_direction(direction)?.verify(bitext, glossary, want_success)
}
