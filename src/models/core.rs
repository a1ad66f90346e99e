//! Core data structures for crossword grids
//!
//! A grid is a rectangle of [`Cell`]s addressed by 1-based `(x, y)`
//! coordinates. Each cell carries two independent numbering schemes:
//! the display `number` printed in the square, and the per-direction word
//! ids that link it to the answer of a specific clue.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Word direction
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Across,
    Down,
}

impl Direction {
    /// Letter used in clue lines (`1A`, `2D`)
    pub fn letter(self) -> char {
        match self {
            Direction::Across => 'A',
            Direction::Down => 'D',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'A' => Some(Direction::Across),
            'D' => Some(Direction::Down),
            _ => None,
        }
    }

    /// Offset of the next cell in this direction
    pub fn step(self) -> (usize, usize) {
        match self {
            Direction::Across => (1, 0),
            Direction::Down => (0, 1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Across => write!(f, "Across"),
            Direction::Down => write!(f, "Down"),
        }
    }
}

/// 1-based grid coordinate (`x` = column, `y` = row)
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// What a parsed grid square holds
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellState {
    Block,
    Letter(char),
}

impl CellState {
    pub fn is_letter(self) -> bool {
        matches!(self, CellState::Letter(_))
    }

    pub fn letter(self) -> Option<char> {
        match self {
            CellState::Letter(ch) => Some(ch),
            CellState::Block => None,
        }
    }

    /// Character used in grid lines and in the binary solution board
    pub fn symbol(self) -> char {
        match self {
            CellState::Block => '.',
            CellState::Letter(ch) => ch,
        }
    }
}

/// One square of a numbered grid
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
    pub state: CellState,

    /// Display number, present only when this cell starts a word
    pub number: Option<u32>,

    /// Id of the across word this cell belongs to
    pub across_word_id: Option<u32>,

    /// Id of the down word this cell belongs to
    pub down_word_id: Option<u32>,
}

impl Cell {
    pub fn new(x: usize, y: usize, state: CellState) -> Self {
        Self {
            x,
            y,
            state,
            number: None,
            across_word_id: None,
            down_word_id: None,
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }

    pub fn is_block(&self) -> bool {
        self.state == CellState::Block
    }

    pub fn word_id(&self, direction: Direction) -> Option<u32> {
        match direction {
            Direction::Across => self.across_word_id,
            Direction::Down => self.down_word_id,
        }
    }

    pub fn set_word_id(&mut self, direction: Direction, id: u32) {
        match direction {
            Direction::Across => self.across_word_id = Some(id),
            Direction::Down => self.down_word_id = Some(id),
        }
    }
}
