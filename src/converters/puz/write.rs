use crate::errors::{ConversionError, Result};
use crate::models::{CellState, Puzzle};
use crate::text::emphasis_to_clue_markup;

use super::checksum::{self, TextSection};
use super::latin1::encode_latin1;
use super::{
    BINARY_EMPHASIS_TAG, HEADER_LEN, MAGIC, OFFSET_CIB, OFFSET_CIB_CHECKSUM, OFFSET_FILE_CHECKSUM,
    OFFSET_MAGIC, OFFSET_MASKED_HIGH, OFFSET_MASKED_LOW, OFFSET_VERSION, VERSION,
};

/// Serialize a puzzle to Across Lite `.puz` bytes
pub fn write_puz(puzzle: &Puzzle) -> Result<Vec<u8>> {
    let (width, height) = (puzzle.width(), puzzle.height());
    if width == 0 || height == 0 {
        return Err(ConversionError::Encode("grid is empty".to_string()));
    }
    let width = u8::try_from(width)
        .map_err(|_| ConversionError::Encode(format!("grid width {} exceeds 255", width)))?;
    let height = u8::try_from(height)
        .map_err(|_| ConversionError::Encode(format!("grid height {} exceeds 255", height)))?;

    let mut solution = Vec::with_capacity(usize::from(width) * usize::from(height));
    let mut player = Vec::with_capacity(solution.capacity());
    for cell in puzzle.grid.cells() {
        match cell.state {
            CellState::Block => {
                solution.push(b'.');
                player.push(b'.');
            }
            CellState::Letter(ch) if ch.is_ascii_uppercase() => {
                solution.push(ch as u8);
                player.push(b'-');
            }
            CellState::Letter(ch) => {
                return Err(ConversionError::Encode(format!(
                    "cell ({}, {}) holds {:?}, which the solution board cannot store",
                    cell.x, cell.y, ch
                )));
            }
        }
    }

    let ordered = puzzle.clues_in_board_order();
    if ordered.len() != puzzle.words.len() {
        return Err(ConversionError::Encode(format!(
            "{} words but only {} clues attached to them",
            puzzle.words.len(),
            ordered.len()
        )));
    }
    let clue_count = u16::try_from(ordered.len())
        .map_err(|_| ConversionError::Encode(format!("{} clues exceed 65535", ordered.len())))?;

    let title = encode_latin1(&puzzle.title);
    let author = encode_latin1(&puzzle.author);
    let copyright = puzzle
        .copyright
        .as_deref()
        .map(|c| encode_latin1(&format!("© {}", c)))
        .unwrap_or_default();
    let clues: Vec<Vec<u8>> = ordered
        .iter()
        .map(|clue| encode_latin1(&emphasis_to_clue_markup(&clue.text, BINARY_EMPHASIS_TAG)))
        .collect();
    let notes: Vec<u8> = Vec::new();

    let mut out = vec![0u8; HEADER_LEN];
    out[OFFSET_MAGIC..OFFSET_MAGIC + MAGIC.len()].copy_from_slice(MAGIC);
    out[OFFSET_VERSION..OFFSET_VERSION + VERSION.len()].copy_from_slice(VERSION);
    out[OFFSET_CIB] = width;
    out[OFFSET_CIB + 1] = height;
    out[OFFSET_CIB + 2..OFFSET_CIB + 4].copy_from_slice(&clue_count.to_le_bytes());
    out[OFFSET_CIB + 4..OFFSET_CIB + 6].copy_from_slice(&1u16.to_le_bytes());
    out[OFFSET_CIB + 6..OFFSET_CIB + 8].copy_from_slice(&0u16.to_le_bytes());

    let text = TextSection {
        title: &title,
        author: &author,
        copyright: &copyright,
        clues: &clues,
        notes: &notes,
    };
    let sums = checksum::compute(&out[OFFSET_CIB..HEADER_LEN], &solution, &player, &text);
    out[OFFSET_FILE_CHECKSUM..OFFSET_FILE_CHECKSUM + 2].copy_from_slice(&sums.file.to_le_bytes());
    out[OFFSET_CIB_CHECKSUM..OFFSET_CIB_CHECKSUM + 2].copy_from_slice(&sums.cib.to_le_bytes());
    out[OFFSET_MASKED_LOW..OFFSET_MASKED_LOW + 4].copy_from_slice(&sums.masked_low);
    out[OFFSET_MASKED_HIGH..OFFSET_MASKED_HIGH + 4].copy_from_slice(&sums.masked_high);

    out.extend_from_slice(&solution);
    out.extend_from_slice(&player);
    for field in [&title, &author, &copyright] {
        out.extend_from_slice(field);
        out.push(0);
    }
    for clue in &clues {
        out.extend_from_slice(clue);
        out.push(0);
    }
    out.extend_from_slice(&notes);
    out.push(0);

    log::debug!(
        "Wrote .puz: {}x{}, {} clues, {} bytes",
        width,
        height,
        clue_count,
        out.len()
    );
    Ok(out)
}
