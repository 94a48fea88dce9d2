//! Snippet rendering for matched sentences.
//!
//! The highlighter wraps the matched span of the ORIGINAL sentence text in
//! a pair of markers. It works purely from the raw text and the span's
//! codepoint offsets — never from the normalized token surfaces — so case,
//! accents and punctuation inside the match are preserved verbatim.
//!
//! # Examples
//!
//! ```
//! use termcheck::highlight::{HighlightConfig, Highlighter};
//! use termcheck::matcher::PhraseMatcher;
//! use termcheck::profile::{Language, LanguageProfile};
//!
//! let profile = LanguageProfile::new(Language::English);
//! let text = "The project reached Completion on time.";
//! let sentence = profile.analyze(text).unwrap();
//! let span = PhraseMatcher::new(&profile)
//!     .find_phrase("completion", &sentence)
//!     .unwrap();
//!
//! let highlighter = Highlighter::new(HighlightConfig::default());
//! assert_eq!(
//!     highlighter.highlight(text, span.as_ref()),
//!     "The project reached <b>Completion</b> on time."
//! );
//! ```

use crate::matcher::TokenSpan;

/// Configuration for snippet markers.
///
/// The default tag is `b`, producing `<b>…</b>` around the matched span,
/// the same default the original renderer used.
#[derive(Debug, Clone)]
pub struct HighlightConfig {
    /// Tag to wrap matched spans with (e.g. "b", "mark", "em").
    pub tag: String,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        HighlightConfig {
            tag: "b".to_string(),
        }
    }
}

impl HighlightConfig {
    /// Create a new highlight configuration with the default tag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the marker tag.
    pub fn tag<S: Into<String>>(mut self, tag: S) -> Self {
        self.tag = tag.into();
        self
    }

    /// Build the opening marker.
    pub fn opening_tag(&self) -> String {
        format!("<{}>", self.tag)
    }

    /// Build the closing marker.
    pub fn closing_tag(&self) -> String {
        format!("</{}>", self.tag)
    }
}

/// Renders sentences with the matched span wrapped in markers.
#[derive(Debug, Clone, Default)]
pub struct Highlighter {
    config: HighlightConfig,
}

impl Highlighter {
    /// Create a new highlighter.
    pub fn new(config: HighlightConfig) -> Self {
        Highlighter { config }
    }

    /// Render the sentence with the span marked.
    ///
    /// With a span, the raw substring from the span's first to last token
    /// offset (inclusive of any raw stopword text in between) is wrapped in
    /// the configured markers; without one, the raw sentence is returned
    /// unchanged.
    pub fn highlight(&self, raw_text: &str, span: Option<&TokenSpan>) -> String {
        let Some(span) = span else {
            return raw_text.to_string();
        };

        let start = byte_index(raw_text, span.start_offset);
        let end = byte_index(raw_text, span.end_offset);

        let mut result = String::with_capacity(raw_text.len() + self.config.tag.len() * 2 + 5);
        result.push_str(&raw_text[..start]);
        result.push_str(&self.config.opening_tag());
        result.push_str(&raw_text[start..end]);
        result.push_str(&self.config.closing_tag());
        result.push_str(&raw_text[end..]);
        result
    }
}

/// Convert a codepoint offset to the corresponding byte index.
fn byte_index(text: &str, char_offset: usize) -> usize {
    text.char_indices()
        .nth(char_offset)
        .map(|(byte, _)| byte)
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(start_offset: usize, end_offset: usize) -> TokenSpan {
        TokenSpan {
            start: 0,
            end: 1,
            start_offset,
            end_offset,
        }
    }

    #[test]
    fn test_highlight_wraps_span() {
        let highlighter = Highlighter::default();
        let text = "The project reached Completion on time.";

        assert_eq!(
            highlighter.highlight(text, Some(&span(20, 30))),
            "The project reached <b>Completion</b> on time."
        );
    }

    #[test]
    fn test_highlight_without_span_returns_raw_text() {
        let highlighter = Highlighter::default();
        let text = "Проект закончен в срок.";

        assert_eq!(highlighter.highlight(text, None), text);
    }

    #[test]
    fn test_highlight_cyrillic_codepoint_offsets() {
        let highlighter = Highlighter::default();
        let text = "Проект достиг Завершения в срок.";

        // "Завершения" spans codepoints 14..24.
        assert_eq!(
            highlighter.highlight(text, Some(&span(14, 24))),
            "Проект достиг <b>Завершения</b> в срок."
        );
    }

    #[test]
    fn test_highlight_span_to_end_of_text() {
        let highlighter = Highlighter::default();
        let text = "reached Completion";

        assert_eq!(
            highlighter.highlight(text, Some(&span(8, 18))),
            "reached <b>Completion</b>"
        );
    }

    #[test]
    fn test_custom_tag() {
        let highlighter = Highlighter::new(HighlightConfig::new().tag("mark"));

        assert_eq!(
            highlighter.highlight("a match here", Some(&span(2, 7))),
            "a <mark>match</mark> here"
        );
    }
}
