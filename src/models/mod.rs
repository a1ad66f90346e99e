//! Models module for the crossword converter
//!
//! This module contains the data model shared by every conversion stage:
//! cells, the numbered grid, words and clues.

pub mod core;
pub mod grid;
pub mod puzzle;

// Re-export commonly used types
pub use self::core::*;
pub use grid::{Grid, Word, WordTable};
pub use puzzle::{Clue, Clues, Puzzle};
