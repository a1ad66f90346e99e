//! Numbered grid and word table

use serde::{Deserialize, Serialize};

use super::core::{Cell, CellState, Direction, Position};

/// Rectangular matrix of cells, stored row by row
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct Grid {
    pub rows: Vec<Vec<Cell>>,
}

impl Grid {
    /// Build an unnumbered grid from a matrix of cell states.
    ///
    /// The caller guarantees the matrix is rectangular.
    pub fn from_states(states: &[Vec<CellState>]) -> Self {
        let rows = states
            .iter()
            .enumerate()
            .map(|(row, line)| {
                line.iter()
                    .enumerate()
                    .map(|(col, state)| Cell::new(col + 1, row + 1, *state))
                    .collect()
            })
            .collect();
        Self { rows }
    }

    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |row| row.len())
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Cell at 1-based `(x, y)`, `None` when out of bounds
    pub fn get(&self, x: usize, y: usize) -> Option<&Cell> {
        if x == 0 || y == 0 {
            return None;
        }
        self.rows.get(y - 1).and_then(|row| row.get(x - 1))
    }

    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut Cell> {
        if x == 0 || y == 0 {
            return None;
        }
        self.rows.get_mut(y - 1).and_then(|row| row.get_mut(x - 1))
    }

    /// True when `(x, y)` is in bounds and holds a letter
    pub fn is_letter(&self, x: usize, y: usize) -> bool {
        self.get(x, y).map_or(false, |cell| cell.state.is_letter())
    }

    /// Row-major iteration over every cell
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.rows.iter().flatten()
    }

    /// Row-major iteration over the numbered cells
    pub fn numbered_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells().filter(|cell| cell.number.is_some())
    }

    pub fn find_number(&self, number: u32) -> Option<&Cell> {
        self.numbered_cells().find(|cell| cell.number == Some(number))
    }
}

/// A run of letter cells answering one clue
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Word {
    pub id: u32,
    pub direction: Direction,
    pub cells: Vec<Position>,
}

impl Word {
    pub fn start(&self) -> Option<Position> {
        self.cells.first().copied()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Solution letters read from the grid
    pub fn answer(&self, grid: &Grid) -> String {
        self.cells
            .iter()
            .filter_map(|pos| grid.get(pos.x, pos.y))
            .filter_map(|cell| cell.state.letter())
            .collect()
    }
}

/// All words of a grid in id order (across ids first, then down)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct WordTable {
    pub words: Vec<Word>,
}

impl WordTable {
    pub fn get(&self, id: u32) -> Option<&Word> {
        self.words.iter().find(|word| word.id == id)
    }

    /// Words of one direction in assignment order
    pub fn in_direction(&self, direction: Direction) -> impl Iterator<Item = &Word> {
        self.words.iter().filter(move |word| word.direction == direction)
    }

    pub fn count(&self, direction: Direction) -> usize {
        self.in_direction(direction).count()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Word of `direction` starting at `pos`, if any
    pub fn starting_at(&self, direction: Direction, pos: Position) -> Option<&Word> {
        self.in_direction(direction).find(|word| word.start() == Some(pos))
    }
}
