//! Shared types for the WASM API

use serde::{Deserialize, Serialize};

use crate::text::Paragraph;

/// A paragraph as the host sends it: a bare string, or text with italic runs
/// whose offsets count UTF-16 code units, as JavaScript strings do
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(untagged)]
pub enum HostParagraph {
    Plain(String),
    Rich(Paragraph),
}

impl From<HostParagraph> for Paragraph {
    fn from(paragraph: HostParagraph) -> Self {
        match paragraph {
            HostParagraph::Plain(text) => Paragraph::plain(text),
            HostParagraph::Rich(paragraph) => paragraph.utf16_spans_to_chars(),
        }
    }
}
