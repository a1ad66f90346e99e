//! Line grammars for the transcription document

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Grid row: letters or periods, single-space separated (`A B . C`)
    pub static ref GRID_LINE: Regex = Regex::new(r"^[A-Z.](?: [A-Z.])*$").unwrap();

    /// Clue row: number, direction, answer and text, tab separated
    pub static ref CLUE_LINE: Regex = Regex::new(r"^(\d+)([AD])\t([A-Z]{3,})\t(.*)$").unwrap();

    /// Copyright notice
    pub static ref COPYRIGHT_LINE: Regex = Regex::new(r"^©\s*(.*)$").unwrap();
}

/// How a trimmed document line is interpreted
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
    Empty,
    Grid,
    Clue,
    Copyright,
    Other,
}

/// Classify a trimmed line. Clue lines win over grid lines.
pub fn classify(line: &str) -> LineKind {
    if line.is_empty() {
        LineKind::Empty
    } else if CLUE_LINE.is_match(line) {
        LineKind::Clue
    } else if GRID_LINE.is_match(line) {
        LineKind::Grid
    } else if COPYRIGHT_LINE.is_match(line) {
        LineKind::Copyright
    } else {
        LineKind::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("A B . C", LineKind::Grid)]
    #[case(".", LineKind::Grid)]
    #[case("A  B", LineKind::Other)]
    #[case("A B ", LineKind::Other)]
    #[case("a b", LineKind::Other)]
    #[case("AB C", LineKind::Other)]
    #[case("1A\tCAT\tFeline", LineKind::Clue)]
    #[case("12D\tOREO\t", LineKind::Clue)]
    #[case("1A\tAT\tToo short an answer", LineKind::Other)]
    #[case("1X\tCAT\tBad direction", LineKind::Other)]
    #[case("1A CAT Feline", LineKind::Other)]
    #[case("© 2024 Jane Doe", LineKind::Copyright)]
    #[case("Sunday Puzzle", LineKind::Other)]
    #[case("", LineKind::Empty)]
    fn test_classify(#[case] line: &str, #[case] expected: LineKind) {
        assert_eq!(classify(line), expected);
    }
}
