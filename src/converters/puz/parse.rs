use std::collections::HashMap;

use crate::errors::{ConversionError, Result};
use crate::models::{CellState, Clue, Clues, Direction, Puzzle};
use crate::structure::number_grid;
use crate::text::clue_markup_to_emphasis;

use super::BINARY_EMPHASIS_TAG;

fn corrupt(msg: impl Into<String>) -> ConversionError {
    ConversionError::CorruptSource(msg.into())
}

/// Parse Across Lite `.puz` bytes into a numbered puzzle.
///
/// The file is read with `puz_parse`; numbering is recomputed from the
/// solution grid and every word must find its clue by start number.
pub fn parse_puz(bytes: &[u8]) -> Result<Puzzle> {
    let source = puz_parse::parse(bytes)
        .map_err(|e| corrupt(e.to_string()))?
        .result;

    let width = usize::from(source.info.width);
    let height = usize::from(source.info.height);
    if width == 0 || height == 0 {
        return Err(corrupt("grid has no cells"));
    }
    if source.grid.solution.len() != height {
        return Err(corrupt(format!(
            "solution has {} rows, header says {}",
            source.grid.solution.len(),
            height
        )));
    }

    let states = source
        .grid
        .solution
        .iter()
        .map(|row| {
            let cells = row.chars().map(solution_cell).collect::<Result<Vec<_>>>()?;
            if cells.len() != width {
                return Err(corrupt(format!(
                    "solution row has {} cells, header says {}",
                    cells.len(),
                    width
                )));
            }
            Ok(cells)
        })
        .collect::<Result<Vec<_>>>()?;
    let numbered = number_grid(&states);

    let mut across = clue_lookup(&source.clues.across)?;
    let mut down = clue_lookup(&source.clues.down)?;
    let mut clues = Clues::default();
    for word in &numbered.words.words {
        let number = word
            .start()
            .and_then(|pos| numbered.grid.get(pos.x, pos.y))
            .and_then(|cell| cell.number)
            .ok_or_else(|| corrupt(format!("word {} has no numbered start cell", word.id)))?;
        let lookup = match word.direction {
            Direction::Across => &mut across,
            Direction::Down => &mut down,
        };
        let text = lookup
            .remove(&number)
            .ok_or_else(|| corrupt(format!("no clue for {}{}", number, word.direction.letter())))?;

        clues.get_mut(word.direction).insert(
            number,
            Clue {
                number,
                direction: word.direction,
                text: clue_markup_to_emphasis(&text, BINARY_EMPHASIS_TAG),
                word_id: word.id,
            },
        );
    }
    for (direction, lookup) in [(Direction::Across, &across), (Direction::Down, &down)] {
        if let Some(number) = lookup.keys().min() {
            return Err(corrupt(format!(
                "clue {}{} has no word in the grid",
                number,
                direction.letter()
            )));
        }
    }

    let copyright = source.info.copyright.trim().trim_start_matches('©').trim();
    let puzzle = Puzzle {
        title: source.info.title.clone(),
        author: source.info.author.clone(),
        copyright: (!copyright.is_empty()).then(|| copyright.to_string()),
        grid: numbered.grid,
        words: numbered.words,
        clues,
    };
    log::debug!(
        "Read .puz {:?}: {}x{}, {} clues",
        puzzle.title,
        width,
        height,
        puzzle.clues.len()
    );
    Ok(puzzle)
}

/// Clue texts keyed by clue number
fn clue_lookup<'a, K, V, I>(clues: I) -> Result<HashMap<u32, String>>
where
    I: IntoIterator<Item = (&'a K, &'a V)>,
    K: Copy + std::fmt::Display + 'a,
    u32: TryFrom<K>,
    V: ToString + 'a,
{
    clues
        .into_iter()
        .map(|(number, text)| {
            let key = u32::try_from(*number)
                .map_err(|_| corrupt(format!("clue number {} out of range", number)))?;
            Ok((key, text.to_string()))
        })
        .collect()
}

fn solution_cell(ch: char) -> Result<CellState> {
    match ch {
        '.' => Ok(CellState::Block),
        'A'..='Z' => Ok(CellState::Letter(ch)),
        'a'..='z' => Ok(CellState::Letter(ch.to_ascii_uppercase())),
        other => Err(corrupt(format!("unsupported solution character {:?}", other))),
    }
}
