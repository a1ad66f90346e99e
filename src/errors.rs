//! Error types for crossword conversion
//!
//! Every variant is fatal: a conversion that hits one of these produces no
//! output at all. Individual lines that fail the grid or clue grammar are not
//! errors unless strict mode is on.

use thiserror::Error;

use crate::models::Direction;

/// Top-level conversion error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// Grid rows have inconsistent lengths
    #[error("Malformed grid: row {row} has {actual} cells, expected {expected}")]
    MalformedGrid {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// No line of the document matched the grid grammar
    #[error("Malformed grid: no grid rows found")]
    EmptyGrid,

    /// Computed word count differs from the number of clue lines
    #[error("{}", count_mismatch_summary(.direction, .expected, .actual))]
    ClueCountMismatch {
        direction: Direction,
        expected: usize,
        actual: usize,
    },

    /// Clue number has no matching numbered cell in the grid
    #[error("{direction} clue {number} does not match any numbered grid cell")]
    UnresolvedClueReference { number: u32, direction: Direction },

    /// The same clue number appears twice in one direction
    #[error("Duplicate {direction} clue number {number}")]
    DuplicateClue { number: u32, direction: Direction },

    /// Strict mode: a non-empty line matched neither grammar
    #[error("Unrecognized line {line}: {text:?}")]
    UnrecognizedLine { line: usize, text: String },

    /// Binary source could not be decoded
    #[error("Corrupt puzzle source: {0}")]
    CorruptSource(String),

    /// Puzzle cannot be represented in the binary format
    #[error("Cannot encode puzzle: {0}")]
    Encode(String),

    /// XML writer failure
    #[error("XML serialization failed: {0}")]
    Xml(String),
}

pub type Result<T> = std::result::Result<T, ConversionError>;

fn count_mismatch_summary(direction: &Direction, expected: &usize, actual: &usize) -> String {
    let noun = |n: usize| if n == 1 { "clue" } else { "clues" };
    if actual < expected {
        format!(
            "Too few {} clues: the grid has {} {} words but only {} {} {} found",
            direction,
            expected,
            direction,
            actual,
            noun(*actual),
            if *actual == 1 { "was" } else { "were" }
        )
    } else {
        format!(
            "Too many {} clues: the grid has {} {} words but {} {} {} found",
            direction,
            expected,
            direction,
            actual,
            noun(*actual),
            if *actual == 1 { "was" } else { "were" }
        )
    }
}

impl From<quick_xml::Error> for ConversionError {
    fn from(err: quick_xml::Error) -> Self {
        ConversionError::Xml(err.to_string())
    }
}
