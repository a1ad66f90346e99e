//! Crossword structure
//!
//! This module derives numbering and word membership from a parsed cell
//! matrix and attaches the clue list to the resulting words. It is
//! stateless: every call builds its output from scratch.
//!
//! ## Modules
//!
//! - `numbering`: Display numbers and word ids
//! - `clues`: Clue-to-word association and count validation

pub mod clues;
pub mod numbering;

// Re-exports for convenience
pub use clues::associate_clues;
pub use numbering::{number_grid, starts_word, NumberedGrid};
