//! Grid line parser
//!
//! Turns grid rows like `A B . C` into a rectangular matrix of cell states.

use crate::errors::{ConversionError, Result};
use crate::models::CellState;

use super::patterns::GRID_LINE;

/// Parse one grid row. Returns `None` when the line is not a grid row.
pub fn parse_grid_line(line: &str) -> Option<Vec<CellState>> {
    if !GRID_LINE.is_match(line) {
        return None;
    }
    let row = line
        .split(' ')
        .filter_map(|token| token.chars().next())
        .map(|ch| match ch {
            '.' => CellState::Block,
            letter => CellState::Letter(letter),
        })
        .collect();
    Some(row)
}

/// Parse grid rows into a matrix, skipping lines that are not grid rows.
///
/// Fails with `MalformedGrid` when the rows differ in length and with
/// `EmptyGrid` when no row was found.
pub fn parse_grid<I, S>(lines: I) -> Result<Vec<Vec<CellState>>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let rows: Vec<Vec<CellState>> = lines
        .into_iter()
        .filter_map(|line| parse_grid_line(line.as_ref().trim()))
        .collect();
    validate_rectangular(&rows)?;
    Ok(rows)
}

/// Check that every row has the width of the first one
pub fn validate_rectangular(rows: &[Vec<CellState>]) -> Result<()> {
    let expected = match rows.first() {
        Some(first) => first.len(),
        None => return Err(ConversionError::EmptyGrid),
    };
    for (index, row) in rows.iter().enumerate() {
        if row.len() != expected {
            return Err(ConversionError::MalformedGrid {
                row: index + 1,
                expected,
                actual: row.len(),
            });
        }
    }
    log::debug!("Parsed grid: {}x{}", expected, rows.len());
    Ok(())
}
