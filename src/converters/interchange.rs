//! Host-facing puzzle object
//!
//! The shape puzzle libraries on the JavaScript side use: an `info` block,
//! a grid of `{ isBlockCell: true }` / `{ solution: "A" }` cells, and clue
//! maps from number to text. Emphasis travels as literal `<i>` markup.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::errors::{ConversionError, Result};
use crate::models::{CellState, Direction, Puzzle};
use crate::parse::grid::validate_rectangular;
use crate::parse::{ParsedClue, Transcription};
use crate::text::{clue_markup_to_emphasis, emphasis_to_clue_markup};

use super::transcription::puzzle_from_transcription;

const EMPHASIS_TAG: &str = "i";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleData {
    pub info: PuzzleInfo,
    pub grid: Vec<Vec<CellData>>,
    pub clues: ClueData,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct PuzzleInfo {
    pub title: String,
    pub author: String,
    pub copyright: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct CellData {
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_block_cell: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution: Option<String>,
}

/// Clue text keyed by the number as a string (JS object keys)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ClueData {
    pub across: BTreeMap<String, String>,
    pub down: BTreeMap<String, String>,
}

impl From<&Puzzle> for PuzzleData {
    fn from(puzzle: &Puzzle) -> Self {
        let grid = puzzle
            .grid
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell.state {
                        CellState::Block => CellData {
                            is_block_cell: true,
                            solution: None,
                        },
                        CellState::Letter(ch) => CellData {
                            is_block_cell: false,
                            solution: Some(ch.to_string()),
                        },
                    })
                    .collect()
            })
            .collect();

        let clue_map = |direction: Direction| {
            puzzle
                .clues
                .get(direction)
                .values()
                .map(|clue| (clue.number.to_string(), emphasis_to_clue_markup(&clue.text, EMPHASIS_TAG)))
                .collect()
        };

        PuzzleData {
            info: PuzzleInfo {
                title: puzzle.title.clone(),
                author: puzzle.author.clone(),
                copyright: puzzle.copyright.clone().unwrap_or_default(),
            },
            grid,
            clues: ClueData {
                across: clue_map(Direction::Across),
                down: clue_map(Direction::Down),
            },
        }
    }
}

impl TryFrom<PuzzleData> for Puzzle {
    type Error = ConversionError;

    /// Validates the host object exactly like a transcription
    fn try_from(data: PuzzleData) -> Result<Self> {
        let grid = data
            .grid
            .iter()
            .enumerate()
            .map(|(y, row)| {
                row.iter()
                    .enumerate()
                    .map(|(x, cell)| cell_state(cell, x + 1, y + 1))
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;
        validate_rectangular(&grid)?;

        let mut clues = Vec::new();
        for (direction, map) in [(Direction::Across, &data.clues.across), (Direction::Down, &data.clues.down)] {
            for (key, text) in map {
                let number = key.trim().parse::<u32>().map_err(|_| {
                    ConversionError::CorruptSource(format!("{} clue key {:?} is not a number", direction, key))
                })?;
                clues.push(ParsedClue {
                    number,
                    direction,
                    answer: String::new(),
                    text: clue_markup_to_emphasis(text, EMPHASIS_TAG),
                    text_offset: 0,
                });
            }
        }

        let copyright = data.info.copyright.trim().trim_start_matches('©').trim().to_string();
        puzzle_from_transcription(Transcription {
            title: data.info.title,
            author: data.info.author,
            copyright: (!copyright.is_empty()).then_some(copyright),
            grid,
            clues,
        })
    }
}

fn cell_state(cell: &CellData, x: usize, y: usize) -> Result<CellState> {
    if cell.is_block_cell {
        return Ok(CellState::Block);
    }
    let mut chars = cell.solution.as_deref().unwrap_or("").chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if ch.is_ascii_alphabetic() => Ok(CellState::Letter(ch.to_ascii_uppercase())),
        _ => Err(ConversionError::CorruptSource(format!(
            "cell ({}, {}) needs isBlockCell or a single-letter solution, got {:?}",
            x, y, cell.solution
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converters::build_puzzle;
    use crate::settings::ConversionSettings;
    use crate::text::Paragraph;
    use pretty_assertions::assert_eq;

    fn tiny() -> Puzzle {
        let paragraphs = vec![
            Paragraph::plain("Tiny"),
            Paragraph::plain("Someone"),
            Paragraph::plain("A B"),
            Paragraph::plain("C ."),
            Paragraph::with_emphasis("1A\tABX\tTop row", vec![11..14]),
            Paragraph::plain("3A\tCXX\tBottom left"),
            Paragraph::plain("1D\tACX\tLeft column"),
            Paragraph::plain("2D\tBXX\tRight column & <i>"),
        ];
        build_puzzle(&paragraphs, &ConversionSettings::default()).unwrap()
    }

    #[test]
    fn test_host_object_shape() {
        let json = serde_json::to_value(PuzzleData::from(&tiny())).unwrap();
        assert_eq!(json["info"]["title"], "Tiny");
        assert_eq!(json["grid"][0][0], serde_json::json!({ "solution": "A" }));
        assert_eq!(json["grid"][1][1], serde_json::json!({ "isBlockCell": true }));
        assert_eq!(json["clues"]["across"]["1"], "Top <i>row</i>");
        assert_eq!(json["clues"]["down"]["2"], "Right column & &lt;i>");
    }

    #[test]
    fn test_host_object_converts_back() {
        let puzzle = tiny();
        assert_eq!(Puzzle::try_from(PuzzleData::from(&puzzle)).unwrap(), puzzle);
    }

    #[test]
    fn test_bad_solution_rejected() {
        let mut data = PuzzleData::from(&tiny());
        data.grid[0][0].solution = Some("AB".to_string());
        assert!(matches!(
            Puzzle::try_from(data),
            Err(ConversionError::CorruptSource(_))
        ));
    }

    #[test]
    fn test_missing_clue_is_count_mismatch() {
        let mut data = PuzzleData::from(&tiny());
        data.clues.down.remove("2");
        assert!(matches!(
            Puzzle::try_from(data),
            Err(ConversionError::ClueCountMismatch { direction: Direction::Down, .. })
        ));
    }
}
