//! Renderers
//!
//! Output formats for a validated puzzle: the crossword XML document and
//! the editable transcription paragraphs.

pub mod text;
pub mod xml;

// Re-export commonly used entry points
pub use text::puzzle_to_paragraphs;
pub use xml::{to_puzzle_xml, PuzzleXmlBuilder};
