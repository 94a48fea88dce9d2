//! Language profiles and verification directions.
//!
//! A [`LanguageProfile`] bundles everything language-specific the engine
//! needs: the snowball stemming algorithm, the stopword set, and an
//! optional [`SynonymMap`]. All language-dependent behavior sits behind
//! this type, so adding a third language means adding one profile, not
//! touching the matching algorithm.
//!
//! A [`Direction`] is the two-letter-pair code selecting which profile
//! analyzes the source sentences and which the target sentences. Unknown
//! codes are a configuration error reported before any matching begins.
//!
//! # Examples
//!
//! ```
//! use termcheck::profile::{Direction, Language, LanguageProfile};
//!
//! let direction: Direction = "eng-rus".parse().unwrap();
//! assert_eq!(direction.source(), Language::English);
//! assert_eq!(direction.target(), Language::Russian);
//!
//! let profile = LanguageProfile::new(Language::English);
//! let tokens = profile.analyze("The project reached Completion on time.").unwrap();
//! let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(texts, vec!["project", "reach", "complet", "time"]);
//! ```

use std::str::FromStr;
use std::sync::Arc;

use ahash::AHashSet;
use rust_stemmers::{Algorithm, Stemmer};
use stop_words::LANGUAGE;

use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::analysis::token::TokenizedSentence;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::stem::StemFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::word::WordTokenizer;
use crate::error::{Result, TermcheckError};

pub mod synonym;

pub use synonym::SynonymMap;

/// Languages with a built-in profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    Russian,
}

impl Language {
    /// Lowercase language name, as used in analyzer names and diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Russian => "russian",
        }
    }

    /// Snowball stemming algorithm for this language.
    fn algorithm(self) -> Algorithm {
        match self {
            Language::English => Algorithm::English,
            Language::Russian => Algorithm::Russian,
        }
    }

    /// Stopword list for this language.
    fn stop_words_language(self) -> LANGUAGE {
        match self {
            Language::English => LANGUAGE::English,
            Language::Russian => LANGUAGE::Russian,
        }
    }
}

/// A verification direction: which language is the source and which the
/// target of the bitext.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// English source, Russian target (`"eng-rus"`)
    EngRus,
    /// Russian source, English target (`"rus-eng"`)
    RusEng,
}

impl Direction {
    /// Parse a direction code.
    ///
    /// Any code other than `"eng-rus"` or `"rus-eng"` is a configuration
    /// error; there is no default direction.
    pub fn parse(code: &str) -> Result<Self> {
        match code {
            "eng-rus" => Ok(Direction::EngRus),
            "rus-eng" => Ok(Direction::RusEng),
            other => Err(TermcheckError::config(format!(
                "unsupported direction: {other}"
            ))),
        }
    }

    /// The direction code string.
    pub fn code(self) -> &'static str {
        match self {
            Direction::EngRus => "eng-rus",
            Direction::RusEng => "rus-eng",
        }
    }

    /// Language of the source sentences and source terms.
    pub fn source(self) -> Language {
        match self {
            Direction::EngRus => Language::English,
            Direction::RusEng => Language::Russian,
        }
    }

    /// Language of the target sentences and target terms.
    pub fn target(self) -> Language {
        match self {
            Direction::EngRus => Language::Russian,
            Direction::RusEng => Language::English,
        }
    }
}

impl FromStr for Direction {
    type Err = TermcheckError;

    fn from_str(s: &str) -> Result<Self> {
        Direction::parse(s)
    }
}

/// Per-language normalization rules: stemmer, stopword set, and optional
/// synonym groups.
///
/// The profile owns the analysis pipeline for its language
/// (word tokenizer → lowercase → stop → stem) and is immutable once
/// constructed. Analysis through a profile is deterministic and pure, so
/// tokenized sentences are reproducible and safe to build concurrently.
pub struct LanguageProfile {
    language: Language,
    analyzer: PipelineAnalyzer,
    synonyms: Option<SynonymMap>,
}

impl std::fmt::Debug for LanguageProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageProfile")
            .field("language", &self.language)
            .field("synonyms", &self.synonyms.as_ref().map(|s| s.group_count()))
            .finish()
    }
}

impl LanguageProfile {
    /// Create the built-in profile for a language: its snowball stemmer
    /// and its stopword list, no synonym groups.
    pub fn new(language: Language) -> Self {
        let stop_words: AHashSet<String> = stop_words::get(language.stop_words_language())
            .into_iter()
            .map(|s| s.to_string())
            .collect();

        let analyzer = PipelineAnalyzer::new(Arc::new(WordTokenizer::new()))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(StopFilter::with_stop_words(stop_words)))
            .add_filter(Arc::new(StemFilter::new(language.algorithm())))
            .with_name(language.name());

        LanguageProfile {
            language,
            analyzer,
            synonyms: None,
        }
    }

    /// Attach synonym groups to this profile.
    ///
    /// Each group lists single-word surface forms that should match each
    /// other; members are stemmed with this profile's stemmer at
    /// construction. In the original configuration only the Russian profile
    /// carried a synonym dictionary, but the capability is per-profile.
    pub fn with_synonyms(mut self, groups: Vec<Vec<String>>) -> Self {
        let stemmer = Stemmer::create(self.language.algorithm());
        self.synonyms = Some(SynonymMap::from_groups(groups, &stemmer));
        self
    }

    /// Attach synonym groups loaded from a JSON file (an array of arrays
    /// of words).
    pub fn with_synonym_file(mut self, path: &str) -> Result<Self> {
        let stemmer = Stemmer::create(self.language.algorithm());
        self.synonyms = Some(SynonymMap::load_from_file(path, &stemmer)?);
        Ok(self)
    }

    /// The language of this profile.
    pub fn language(&self) -> Language {
        self.language
    }

    /// The synonym map, if this profile carries one.
    pub fn synonyms(&self) -> Option<&SynonymMap> {
        self.synonyms.as_ref()
    }

    /// Analyze text into its normalized, stopword-filtered, stemmed token
    /// sequence.
    pub fn analyze(&self, text: &str) -> Result<TokenizedSentence> {
        Ok(self.analyzer.analyze(text)?.collect())
    }

    /// Whether two normalized token texts count as the same word for
    /// phrase matching: equal stems, or members of the same synonym group.
    pub fn tokens_equivalent(&self, a: &str, b: &str) -> bool {
        if a == b {
            return true;
        }
        self.synonyms
            .as_ref()
            .is_some_and(|map| map.same_group(a, b))
    }
}
