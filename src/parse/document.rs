//! Transcription document reader
//!
//! Sorts the paragraphs of a transcription into header, grid rows and clue
//! lines. The first two paragraphs are the title and the author, whatever
//! they contain, and either may be empty. After them, a line starting with
//! `©` is the copyright notice, empty lines are ignored, and anything that is
//! neither a grid row nor a clue line is skipped, or rejected in strict mode.

use crate::errors::{ConversionError, Result};
use crate::models::CellState;
use crate::settings::ConversionSettings;
use crate::text::{encode_emphasis, strip_emphasis, StyledParagraph};

use super::clues::{parse_clue_line, ParsedClue};
use super::grid::{parse_grid_line, validate_rectangular};
use super::patterns::{classify, LineKind, COPYRIGHT_LINE};

/// Everything read from a transcription, not yet numbered or validated
/// against the grid
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Transcription {
    pub title: String,
    pub author: String,
    pub copyright: Option<String>,
    pub grid: Vec<Vec<CellState>>,
    /// Clue text carries emphasis placeholder tokens
    pub clues: Vec<ParsedClue>,
}

/// Paragraphs at the top of the document holding the title and the author
const HEADER_LINES: usize = 2;

/// Read a transcription from host paragraphs
pub fn parse_document<P: StyledParagraph>(
    paragraphs: &[P],
    settings: &ConversionSettings,
) -> Result<Transcription> {
    let mut doc = Transcription::default();
    let mut skipped = 0;

    let mut header = paragraphs.iter().map(|p| strip_emphasis(p.text().trim()));
    doc.title = header.next().unwrap_or_default();
    doc.author = header.next().unwrap_or_default();

    for (index, paragraph) in paragraphs.iter().enumerate().skip(HEADER_LINES) {
        let raw = paragraph.text();
        let line = raw.trim();
        let lead = raw.chars().take_while(|c| c.is_whitespace()).count();

        match classify(line) {
            LineKind::Empty => {}
            LineKind::Grid => {
                if let Some(row) = parse_grid_line(line) {
                    doc.grid.push(row);
                }
            }
            LineKind::Clue => {
                if let Some(mut clue) = parse_clue_line(line) {
                    clue.text = encode_emphasis(&clue.text, paragraph, lead + clue.text_offset);
                    doc.clues.push(clue);
                }
            }
            LineKind::Copyright if doc.copyright.is_none() => {
                doc.copyright = COPYRIGHT_LINE
                    .captures(line)
                    .and_then(|caps| caps.get(1))
                    .map(|m| strip_emphasis(m.as_str().trim()));
            }
            LineKind::Copyright | LineKind::Other => {
                if settings.strict {
                    return Err(ConversionError::UnrecognizedLine {
                        line: index + 1,
                        text: line.to_string(),
                    });
                }
                log::warn!("Skipping unrecognized line {}: {:?}", index + 1, line);
                skipped += 1;
            }
        }
    }

    validate_rectangular(&doc.grid)?;
    log::debug!(
        "Read transcription {:?}: {} grid rows, {} clue lines, {} skipped",
        doc.title,
        doc.grid.len(),
        doc.clues.len(),
        skipped
    );
    Ok(doc)
}
