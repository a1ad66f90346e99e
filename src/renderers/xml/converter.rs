//! Crossword XML converter
//!
//! Main entry point for turning a validated puzzle into the
//! crossword-compiler XML document.

use crate::errors::{ConversionError, Result};
use crate::models::{Direction, Puzzle};
use crate::settings::{is_xml_name, ConversionSettings};

use super::builder::PuzzleXmlBuilder;

/// Export a puzzle as crossword XML
///
/// Writes metadata, every grid cell, every word with its cells, then the
/// across and down clue blocks. Italic runs come out wrapped in
/// `settings.emphasis_tag` elements.
pub fn to_puzzle_xml(puzzle: &Puzzle, settings: &ConversionSettings) -> Result<String> {
    if !is_xml_name(&settings.emphasis_tag) {
        return Err(ConversionError::Xml(format!(
            "emphasis tag {:?} is not a valid element name",
            settings.emphasis_tag
        )));
    }
    log::debug!(
        "Starting XML export: {}x{} grid, {} words",
        puzzle.width(),
        puzzle.height(),
        puzzle.words.len()
    );

    let mut builder = PuzzleXmlBuilder::new(settings);
    builder.begin_document()?;
    builder.write_metadata(puzzle)?;
    builder.begin_crossword()?;
    builder.write_grid(&puzzle.grid)?;
    builder.write_words(&puzzle.words)?;
    for direction in [Direction::Across, Direction::Down] {
        builder.write_clues(direction, puzzle.clues.get(direction))?;
    }
    builder.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converters::build_puzzle;
    use crate::text::Paragraph;

    fn tiny(settings: &ConversionSettings) -> Puzzle {
        let paragraphs = vec![
            Paragraph::plain("Tiny"),
            Paragraph::plain("Someone"),
            Paragraph::plain("© 2024 Someone"),
            Paragraph::plain("A B"),
            Paragraph::plain("C ."),
            Paragraph::with_emphasis("1A\tABX\tTop row", vec![11..14]),
            Paragraph::plain("3A\tCXX\tBottom left"),
            Paragraph::plain("1D\tACX\tLeft column"),
            Paragraph::plain("2D\tBXX\tRight column"),
        ];
        build_puzzle(&paragraphs, settings).unwrap()
    }

    #[test]
    fn test_document_sections_in_order() {
        let settings = ConversionSettings::default();
        let xml = to_puzzle_xml(&tiny(&settings), &settings).unwrap();

        let metadata = xml.find("<metadata>").unwrap();
        let grid = xml.find("<grid ").unwrap();
        let word = xml.find("<word ").unwrap();
        let across = xml.find("<b>Across</b>").unwrap();
        let down = xml.find("<b>Down</b>").unwrap();
        assert!(metadata < grid && grid < word && word < across && across < down);
        assert!(xml.contains("<copyright>2024 Someone</copyright>"));
    }

    #[test]
    fn test_custom_emphasis_tag_and_headings() {
        let settings = ConversionSettings {
            emphasis_tag: "em".to_string(),
            across_heading: "Horizontal".to_string(),
            ..ConversionSettings::default()
        };
        let xml = to_puzzle_xml(&tiny(&settings), &settings).unwrap();

        assert!(xml.contains("Top <em>row</em>"));
        assert!(xml.contains("<b>Horizontal</b>"));
        assert!(!xml.contains(crate::text::EMPHASIS_START));
    }

    #[test]
    fn test_invalid_emphasis_tag_rejected() {
        let settings = ConversionSettings {
            emphasis_tag: "a b".to_string(),
            ..ConversionSettings::default()
        };
        assert!(matches!(
            to_puzzle_xml(&tiny(&ConversionSettings::default()), &settings),
            Err(ConversionError::Xml(_))
        ));
    }

    #[test]
    fn test_literal_placeholder_text_is_not_emphasis() {
        let settings = ConversionSettings::default();
        let mut puzzle = tiny(&settings);
        puzzle.title = "{{em}}Tiny{{/em}}".to_string();
        if let Some(clue) = puzzle.clues.down.get_mut(&1) {
            clue.text = "Left <i> column".to_string();
        }
        let xml = to_puzzle_xml(&puzzle, &settings).unwrap();

        assert!(xml.contains("<title>{{em}}Tiny{{/em}}</title>"));
        assert!(xml.contains(">Left &lt;i&gt; column</clue>"));
        assert_eq!(xml.matches("<i>").count(), 1);
    }
}
