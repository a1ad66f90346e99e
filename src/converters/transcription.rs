//! Transcription to puzzle
//!
//! Runs the build direction of the pipeline: read the document, number the
//! grid, attach the clues. Any validation failure aborts before a puzzle
//! exists.

use crate::errors::Result;
use crate::models::Puzzle;
use crate::parse::{parse_document, Transcription};
use crate::settings::ConversionSettings;
use crate::structure::{associate_clues, number_grid, NumberedGrid};
use crate::text::StyledParagraph;

/// Build a validated puzzle from host paragraphs
pub fn build_puzzle<P: StyledParagraph>(
    paragraphs: &[P],
    settings: &ConversionSettings,
) -> Result<Puzzle> {
    let transcription = parse_document(paragraphs, settings)?;
    puzzle_from_transcription(transcription)
}

/// Number the grid of a parsed transcription and attach its clues
pub fn puzzle_from_transcription(transcription: Transcription) -> Result<Puzzle> {
    let NumberedGrid { grid, words } = number_grid(&transcription.grid);
    let clues = associate_clues(&grid, &words, &transcription.clues)?;

    Ok(Puzzle {
        title: transcription.title,
        author: transcription.author,
        copyright: transcription.copyright,
        grid,
        words,
        clues,
    })
}
