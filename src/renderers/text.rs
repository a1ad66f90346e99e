//! Transcription formatter
//!
//! Writes a puzzle back out as the paragraphs of an editable transcription:
//! header lines, grid rows, then one clue line per clue. Reading the
//! result with the document parser yields the same puzzle.

use crate::models::{Clue, Direction, Puzzle};
use crate::text::{decode_emphasis, Paragraph};

/// Answers shorter than this do not match the clue line grammar
const MIN_ANSWER_LEN: usize = 3;

/// Format a puzzle as transcription paragraphs
pub fn puzzle_to_paragraphs(puzzle: &Puzzle) -> Vec<Paragraph> {
    let mut paragraphs = vec![
        Paragraph::plain(puzzle.title.as_str()),
        Paragraph::plain(puzzle.author.as_str()),
    ];
    if let Some(copyright) = &puzzle.copyright {
        paragraphs.push(Paragraph::plain(format!("© {}", copyright)));
    }

    paragraphs.push(Paragraph::default());
    for row in &puzzle.grid.rows {
        let line: Vec<String> = row.iter().map(|cell| cell.state.symbol().to_string()).collect();
        paragraphs.push(Paragraph::plain(line.join(" ")));
    }

    paragraphs.push(Paragraph::default());
    for direction in [Direction::Across, Direction::Down] {
        for clue in puzzle.clues.get(direction).values() {
            paragraphs.push(clue_paragraph(puzzle, clue));
        }
    }

    log::debug!("Formatted puzzle {:?} as {} paragraphs", puzzle.title, paragraphs.len());
    paragraphs
}

/// `N{A|D}<TAB>ANSWER<TAB>text`, italic runs shifted past the prefix
fn clue_paragraph(puzzle: &Puzzle, clue: &Clue) -> Paragraph {
    let answer = puzzle
        .word_for(clue)
        .map(|word| word.answer(&puzzle.grid))
        .unwrap_or_default();
    if answer.chars().count() < MIN_ANSWER_LEN {
        log::warn!(
            "{}{} answer {:?} is shorter than {} letters and will not re-parse as a clue line",
            clue.number,
            clue.direction.letter(),
            answer,
            MIN_ANSWER_LEN
        );
    }

    let prefix = format!("{}{}\t{}\t", clue.number, clue.direction.letter(), answer);
    let shift = prefix.chars().count();
    let (plain, runs) = decode_emphasis(&clue.text);

    Paragraph::with_emphasis(
        prefix + &plain,
        runs.into_iter()
            .map(|run| run.start + shift..run.end + shift)
            .collect(),
    )
}
