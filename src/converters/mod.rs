//! Format converters
//!
//! Entry points for both directions of the pipeline:
//!
//! - **Build**: transcription paragraphs → validated [`Puzzle`] → `.puz`
//!   bytes or XML text
//! - **Rebuild**: `.puz` bytes → [`Puzzle`] → transcription paragraphs
//!
//! Every entry point either returns a complete output or an error. Nothing
//! is produced for a puzzle that fails validation.

pub mod codec;
pub mod interchange;
pub mod puz;
pub mod transcription;

pub use codec::PuzzleCodec;
pub use interchange::{CellData, ClueData, PuzzleData, PuzzleInfo};
pub use puz::AcrossLiteCodec;
pub use transcription::{build_puzzle, puzzle_from_transcription};

use crate::errors::Result;
use crate::models::Puzzle;
use crate::renderers::{puzzle_to_paragraphs, to_puzzle_xml};
use crate::settings::ConversionSettings;
use crate::text::{Paragraph, StyledParagraph};

/// Transcription → binary puzzle through `codec`
pub fn transcription_to_binary<P, C>(
    paragraphs: &[P],
    settings: &ConversionSettings,
    codec: &C,
) -> Result<Vec<u8>>
where
    P: StyledParagraph,
    C: PuzzleCodec + ?Sized,
{
    let puzzle = build_puzzle(paragraphs, settings)?;
    let bytes = codec.encode(&puzzle)?;
    log::info!(
        "Built binary puzzle {:?}: {} clues, {} bytes",
        puzzle.title,
        puzzle.clues.len(),
        bytes.len()
    );
    Ok(bytes)
}

/// Transcription → `.puz` bytes
pub fn transcription_to_puz<P: StyledParagraph>(
    paragraphs: &[P],
    settings: &ConversionSettings,
) -> Result<Vec<u8>> {
    transcription_to_binary(paragraphs, settings, &AcrossLiteCodec)
}

/// Transcription → XML interchange document
pub fn transcription_to_xml<P: StyledParagraph>(
    paragraphs: &[P],
    settings: &ConversionSettings,
) -> Result<String> {
    let puzzle = build_puzzle(paragraphs, settings)?;
    let xml = to_puzzle_xml(&puzzle, settings)?;
    log::info!(
        "Built XML puzzle {:?}: {} clues, {} bytes",
        puzzle.title,
        puzzle.clues.len(),
        xml.len()
    );
    Ok(xml)
}

/// Binary puzzle → editable transcription paragraphs
pub fn binary_to_paragraphs<C: PuzzleCodec + ?Sized>(bytes: &[u8], codec: &C) -> Result<Vec<Paragraph>> {
    let puzzle: Puzzle = codec.decode(bytes)?;
    Ok(puzzle_to_paragraphs(&puzzle))
}

/// `.puz` bytes → editable transcription paragraphs
pub fn puz_to_paragraphs(bytes: &[u8]) -> Result<Vec<Paragraph>> {
    binary_to_paragraphs(bytes, &AcrossLiteCodec)
}
