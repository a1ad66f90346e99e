//! Parsing module for crossword transcriptions
//!
//! This module turns the flat, line-oriented transcription into a cell
//! matrix and a list of clue tuples. Lines that match neither grammar are
//! skipped unless strict mode is on.

pub mod clues;
pub mod document;
pub mod grid;
pub mod patterns;

// Re-export commonly used types
pub use clues::{parse_clue_line, parse_clue_lines, ParsedClue};
pub use document::{parse_document, Transcription};
pub use grid::{parse_grid, parse_grid_line};
pub use patterns::{classify, LineKind};
