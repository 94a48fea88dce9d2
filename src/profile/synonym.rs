//! Synonym groups for equivalence-class matching.
//!
//! A [`SynonymMap`] holds groups of words that are allowed to match each
//! other during phrase matching. Group members are stemmed with the owning
//! profile's stemmer when the map is built, so lookups happen in the same
//! normalized space as sentence tokens.
//!
//! Groups can be supplied programmatically or loaded from a JSON file
//! containing an array of groups, each an array of words:
//!
//! ```json
//! [
//!   ["завершение", "окончание"],
//!   ["договор", "соглашение", "контракт"]
//! ]
//! ```

use ahash::AHashMap;
use rust_stemmers::Stemmer;

use crate::error::{Result, TermcheckError};

/// Synonym equivalence classes over stemmed forms.
///
/// Only single-word members participate; a member containing whitespace is
/// skipped, as is a group with fewer than two distinct stems. When a stem
/// appears in more than one group, the first group keeps it.
#[derive(Debug, Clone, Default)]
pub struct SynonymMap {
    /// stem → index into `groups`
    group_of: AHashMap<String, usize>,
    /// Distinct stems per group, kept for inspection
    groups: Vec<Vec<String>>,
}

impl SynonymMap {
    /// Build a synonym map from groups of surface forms, stemming each
    /// member with the given stemmer.
    pub fn from_groups(groups: Vec<Vec<String>>, stemmer: &Stemmer) -> Self {
        let mut map = SynonymMap::default();

        for group in groups {
            let mut stems: Vec<String> = Vec::new();
            for member in &group {
                let member = member.trim();
                if member.is_empty() || member.contains(char::is_whitespace) {
                    continue;
                }
                let stem = stemmer.stem(&member.to_lowercase()).into_owned();
                if !stem.is_empty() && !stems.contains(&stem) {
                    stems.push(stem);
                }
            }
            if stems.len() < 2 {
                continue;
            }

            let index = map.groups.len();
            for stem in &stems {
                map.group_of.entry(stem.clone()).or_insert(index);
            }
            map.groups.push(stems);
        }

        map
    }

    /// Load a synonym map from a JSON file (an array of arrays of words).
    pub fn load_from_file(path: &str, stemmer: &Stemmer) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            TermcheckError::config(format!("failed to read synonym file '{path}': {e}"))
        })?;

        let groups: Vec<Vec<String>> = serde_json::from_str(&content).map_err(|e| {
            TermcheckError::config(format!("failed to parse synonym file '{path}': {e}"))
        })?;

        Ok(Self::from_groups(groups, stemmer))
    }

    /// Whether two stems belong to the same synonym group.
    pub fn same_group(&self, a: &str, b: &str) -> bool {
        match (self.group_of.get(a), self.group_of.get(b)) {
            (Some(ga), Some(gb)) => ga == gb,
            _ => false,
        }
    }

    /// All stems in the group containing the given stem.
    pub fn synonyms_of(&self, stem: &str) -> Option<&[String]> {
        self.group_of
            .get(stem)
            .map(|&index| self.groups[index].as_slice())
    }

    /// Number of groups in the map.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Whether the map has no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
