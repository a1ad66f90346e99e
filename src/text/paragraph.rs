//! Host document paragraphs
//!
//! A paragraph is the unit the host document hands over: its text plus the
//! italic runs inside it. Plain strings are paragraphs without emphasis.

use serde::{Deserialize, Serialize};
use std::ops::Range;

use super::emphasis::CharacterStyleProvider;

/// Italic run in char indices, `end` exclusive.
///
/// JavaScript hosts count string offsets in UTF-16 code units; see
/// [`Paragraph::utf16_spans_to_chars`] and [`Paragraph::char_spans_to_utf16`].
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmphasisSpan {
    pub start: usize,
    pub end: usize,
}

impl From<Range<usize>> for EmphasisSpan {
    fn from(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end,
        }
    }
}

/// Rich-text paragraph from the host document
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct Paragraph {
    pub text: String,
    #[serde(default)]
    pub emphasis: Vec<EmphasisSpan>,
}

impl Paragraph {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasis: Vec::new(),
        }
    }

    pub fn with_emphasis(text: impl Into<String>, runs: Vec<Range<usize>>) -> Self {
        Self {
            text: text.into(),
            emphasis: runs.into_iter().map(EmphasisSpan::from).collect(),
        }
    }

    /// Reinterpret spans given in UTF-16 code units as char indices
    pub fn utf16_spans_to_chars(mut self) -> Self {
        for span in &mut self.emphasis {
            span.start = utf16_to_char_index(&self.text, span.start);
            span.end = utf16_to_char_index(&self.text, span.end);
        }
        self
    }

    /// Express char-index spans in UTF-16 code units
    pub fn char_spans_to_utf16(mut self) -> Self {
        for span in &mut self.emphasis {
            span.start = char_to_utf16_index(&self.text, span.start);
            span.end = char_to_utf16_index(&self.text, span.end);
        }
        self
    }
}

/// Chars that start before UTF-16 offset `unit`
fn utf16_to_char_index(text: &str, unit: usize) -> usize {
    let mut units = 0;
    let mut chars = 0;
    for ch in text.chars() {
        if units >= unit {
            return chars;
        }
        units += ch.len_utf16();
        chars += 1;
    }
    chars + unit.saturating_sub(units)
}

fn char_to_utf16_index(text: &str, index: usize) -> usize {
    let mut units = 0;
    let mut chars = 0;
    for ch in text.chars().take(index) {
        units += ch.len_utf16();
        chars += 1;
    }
    units + (index - chars)
}

impl CharacterStyleProvider for Paragraph {
    fn has_emphasis_at(&self, index: usize) -> bool {
        self.emphasis
            .iter()
            .any(|span| span.start <= index && index < span.end)
    }
}

/// Anything the build pipeline can read as a paragraph
pub trait StyledParagraph: CharacterStyleProvider {
    fn text(&self) -> &str;
}

impl StyledParagraph for Paragraph {
    fn text(&self) -> &str {
        &self.text
    }
}

impl CharacterStyleProvider for String {
    fn has_emphasis_at(&self, _index: usize) -> bool {
        false
    }
}

impl StyledParagraph for String {
    fn text(&self) -> &str {
        self
    }
}

impl CharacterStyleProvider for &str {
    fn has_emphasis_at(&self, _index: usize) -> bool {
        false
    }
}

impl StyledParagraph for &str {
    fn text(&self) -> &str {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_reports_emphasis() {
        let para = Paragraph::with_emphasis("1A\tABC\tSee Hamlet", vec![11..17]);
        assert!(!para.has_emphasis_at(10));
        assert!(para.has_emphasis_at(11));
        assert!(para.has_emphasis_at(16));
        assert!(!para.has_emphasis_at(17));
    }

    #[test]
    fn test_utf16_spans_convert_both_ways() {
        // The emoji is one char but two UTF-16 units
        let host = Paragraph::with_emphasis("1A\tCAT\t\u{1F600} Pet", vec![10..13]);
        let para = host.clone().utf16_spans_to_chars();
        assert_eq!(para.emphasis, vec![EmphasisSpan::from(9..12)]);
        assert_eq!(para.char_spans_to_utf16(), host);
    }

    #[test]
    fn test_utf16_spans_unchanged_for_bmp_text() {
        let para = Paragraph::with_emphasis("See Hamlet", vec![4..10]);
        assert_eq!(para.clone().utf16_spans_to_chars(), para);
    }

    #[test]
    fn test_deserialize_without_emphasis_field() {
        let para: Paragraph = serde_json::from_str(r#"{"text": "Title"}"#).unwrap();
        assert_eq!(para, Paragraph::plain("Title"));
    }
}
