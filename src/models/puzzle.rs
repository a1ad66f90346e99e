//! Validated puzzle: grid, words and clues

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::core::Direction;
use super::grid::{Grid, Word, WordTable};

/// A clue attached to a grid word
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Clue {
    /// Display number of the cell the clue belongs to
    pub number: u32,
    pub direction: Direction,
    /// Clue prose, italic runs wrapped in emphasis placeholder tokens
    pub text: String,
    /// Word providing the answer
    pub word_id: u32,
}

/// Clues keyed by display number, one map per direction
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct Clues {
    pub across: BTreeMap<u32, Clue>,
    pub down: BTreeMap<u32, Clue>,
}

impl Clues {
    pub fn get(&self, direction: Direction) -> &BTreeMap<u32, Clue> {
        match direction {
            Direction::Across => &self.across,
            Direction::Down => &self.down,
        }
    }

    pub fn get_mut(&mut self, direction: Direction) -> &mut BTreeMap<u32, Clue> {
        match direction {
            Direction::Across => &mut self.across,
            Direction::Down => &mut self.down,
        }
    }

    pub fn len(&self) -> usize {
        self.across.len() + self.down.len()
    }

    pub fn is_empty(&self) -> bool {
        self.across.is_empty() && self.down.is_empty()
    }
}

/// A complete puzzle, built fresh for each conversion
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct Puzzle {
    pub title: String,
    pub author: String,
    /// Copyright notice without the leading `©`
    pub copyright: Option<String>,
    pub grid: Grid,
    pub words: WordTable,
    pub clues: Clues,
}

impl Puzzle {
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Word linked to a clue
    pub fn word_for(&self, clue: &Clue) -> Option<&Word> {
        self.words.get(clue.word_id)
    }

    /// Clues in binary board order: numbered cells row-major, across
    /// before down when both start on the same cell.
    pub fn clues_in_board_order(&self) -> Vec<&Clue> {
        let mut ordered = Vec::with_capacity(self.clues.len());
        for cell in self.grid.numbered_cells() {
            for direction in [Direction::Across, Direction::Down] {
                let starts_word = self
                    .words
                    .starting_at(direction, cell.position())
                    .is_some();
                if !starts_word {
                    continue;
                }
                if let Some(clue) = cell
                    .word_id(direction)
                    .and_then(|id| self.clues.get(direction).values().find(|c| c.word_id == id))
                {
                    ordered.push(clue);
                }
            }
        }
        ordered
    }
}
