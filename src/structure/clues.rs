//! Clue association
//!
//! Attaches parsed clues to grid words. Within a direction, clues are sorted
//! by number and the k-th clue receives the k-th word of that direction in
//! word-id order. Counts must match exactly: a missing or extra clue line
//! aborts the conversion rather than producing a misnumbered puzzle.

use crate::errors::{ConversionError, Result};
use crate::models::{Clue, Clues, Direction, Grid, WordTable};
use crate::parse::ParsedClue;
use crate::text::strip_emphasis;

/// Attach `parsed` clues to the words of `grid`
pub fn associate_clues(grid: &Grid, words: &WordTable, parsed: &[ParsedClue]) -> Result<Clues> {
    let mut clues = Clues::default();

    for direction in [Direction::Across, Direction::Down] {
        let mut group: Vec<&ParsedClue> = parsed
            .iter()
            .filter(|clue| clue.direction == direction)
            .collect();
        group.sort_by_key(|clue| clue.number);

        let expected = words.count(direction);
        if expected != group.len() {
            return Err(ConversionError::ClueCountMismatch {
                direction,
                expected,
                actual: group.len(),
            });
        }

        let target = clues.get_mut(direction);
        for (clue, word) in group.into_iter().zip(words.in_direction(direction)) {
            if grid.find_number(clue.number).is_none() {
                return Err(ConversionError::UnresolvedClueReference {
                    number: clue.number,
                    direction,
                });
            }

            let start_number = word
                .start()
                .and_then(|pos| grid.get(pos.x, pos.y))
                .and_then(|cell| cell.number);
            if start_number != Some(clue.number) {
                log::warn!(
                    "{} clue {} ({:?}) attached to word {} which starts at number {:?}",
                    direction,
                    clue.number,
                    strip_emphasis(&clue.text),
                    word.id,
                    start_number
                );
            }

            let entry = Clue {
                number: clue.number,
                direction,
                text: clue.text.clone(),
                word_id: word.id,
            };
            if target.insert(clue.number, entry).is_some() {
                return Err(ConversionError::DuplicateClue {
                    number: clue.number,
                    direction,
                });
            }
        }
    }

    log::debug!(
        "Associated {} across and {} down clues",
        clues.across.len(),
        clues.down.len()
    );
    Ok(clues)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::{parse_clue_lines, parse_grid};
    use crate::structure::number_grid;

    const TINY_CLUES: [&str; 4] = [
        "1A\tABX\tTop row",
        "3A\tCXX\tBottom left",
        "1D\tACX\tLeft column",
        "2D\tBXX\tRight column",
    ];

    fn associate(lines: &[&str]) -> Result<Clues> {
        let numbered = number_grid(&parse_grid(["A B", "C ."]).unwrap());
        associate_clues(&numbered.grid, &numbered.words, &parse_clue_lines(lines))
    }

    #[test]
    fn test_consistent_clues_attach_in_word_order() {
        let clues = associate(&TINY_CLUES).unwrap();
        assert_eq!(clues.across[&1].word_id, 1);
        assert_eq!(clues.across[&3].word_id, 2);
        assert_eq!(clues.down[&1].word_id, 3);
        assert_eq!(clues.down[&2].word_id, 4);
        assert_eq!(clues.down[&2].text, "Right column");
    }

    #[test]
    fn test_clue_order_in_document_does_not_matter() {
        let mut lines = TINY_CLUES.to_vec();
        lines.reverse();
        assert_eq!(associate(&lines).unwrap(), associate(&TINY_CLUES).unwrap());
    }

    #[test]
    fn test_missing_down_clue() {
        let err = associate(&TINY_CLUES[..3]).unwrap_err();
        assert_eq!(
            err,
            ConversionError::ClueCountMismatch {
                direction: Direction::Down,
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_missing_across_clue() {
        let err = associate(&TINY_CLUES[1..]).unwrap_err();
        assert_eq!(
            err,
            ConversionError::ClueCountMismatch {
                direction: Direction::Across,
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_extra_clue() {
        let mut lines = TINY_CLUES.to_vec();
        lines.push("2A\tXXX\tOne too many");
        let err = associate(&lines).unwrap_err();
        assert!(err.to_string().starts_with("Too many Across clues"));
    }

    #[test]
    fn test_unresolved_clue_number() {
        let lines = ["1A\tABX\tTop", "9A\tCXX\tNowhere", "1D\tACX\tLeft", "2D\tBXX\tRight"];
        assert_eq!(
            associate(&lines).unwrap_err(),
            ConversionError::UnresolvedClueReference {
                number: 9,
                direction: Direction::Across
            }
        );
    }

    #[test]
    fn test_duplicate_clue_number() {
        let lines = ["1A\tABX\tTop", "1A\tCXX\tAgain", "1D\tACX\tLeft", "2D\tBXX\tRight"];
        assert_eq!(
            associate(&lines).unwrap_err(),
            ConversionError::DuplicateClue {
                number: 1,
                direction: Direction::Across
            }
        );
    }
}
