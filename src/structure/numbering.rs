//! Clue numbering and word membership
//!
//! Two independent schemes are computed over the same grid:
//!
//! - **Display numbers**: printed in the squares. A letter cell with no
//!   letter above it or no letter to its left gets the next number in
//!   row-major order. A cell starting both an across and a down word has a
//!   single number shared by both clues.
//! - **Word ids**: one per word. All across words are numbered first in
//!   row-major order, then all down words, continuing the same counter.
//!
//! The two must never be mixed up downstream: clues are keyed by display
//! number but point at their answer through the word id.

use crate::models::{CellState, Direction, Grid, Position, Word, WordTable};

/// Grid with display numbers and word ids filled in
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NumberedGrid {
    pub grid: Grid,
    pub words: WordTable,
}

/// Number a rectangular cell matrix
pub fn number_grid(states: &[Vec<CellState>]) -> NumberedGrid {
    let mut grid = Grid::from_states(states);
    assign_display_numbers(&mut grid);

    let mut words = WordTable::default();
    let mut next_id = 1;
    for direction in [Direction::Across, Direction::Down] {
        assign_word_ids(&mut grid, &mut words, direction, &mut next_id);
    }

    log::debug!(
        "Numbered {}x{} grid: {} across words, {} down words",
        grid.width(),
        grid.height(),
        words.count(Direction::Across),
        words.count(Direction::Down)
    );
    NumberedGrid { grid, words }
}

/// Whether the letter cell at `(x, y)` begins a word in `direction`
pub fn starts_word(grid: &Grid, x: usize, y: usize, direction: Direction) -> bool {
    if !grid.is_letter(x, y) {
        return false;
    }
    match direction {
        Direction::Across => !grid.is_letter(x.wrapping_sub(1), y),
        Direction::Down => !grid.is_letter(x, y.wrapping_sub(1)),
    }
}

/// Display numbering pass
fn assign_display_numbers(grid: &mut Grid) {
    let mut next = 1;
    for y in 1..=grid.height() {
        for x in 1..=grid.width() {
            let numbered = starts_word(grid, x, y, Direction::Across)
                || starts_word(grid, x, y, Direction::Down);
            if numbered {
                if let Some(cell) = grid.get_mut(x, y) {
                    cell.number = Some(next);
                    next += 1;
                }
            }
        }
    }
}

/// Word-id pass for one direction, continuing `next_id`
fn assign_word_ids(grid: &mut Grid, words: &mut WordTable, direction: Direction, next_id: &mut u32) {
    let (dx, dy) = direction.step();
    for y in 1..=grid.height() {
        for x in 1..=grid.width() {
            if !starts_word(grid, x, y, direction) {
                continue;
            }
            let id = *next_id;
            *next_id += 1;

            let mut cells = Vec::new();
            let (mut cx, mut cy) = (x, y);
            while grid.is_letter(cx, cy) {
                if let Some(cell) = grid.get_mut(cx, cy) {
                    cell.set_word_id(direction, id);
                }
                cells.push(Position::new(cx, cy));
                cx += dx;
                cy += dy;
            }
            words.words.push(Word { id, direction, cells });
        }
    }
}
