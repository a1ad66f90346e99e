// Crossword XML builder

use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::collections::BTreeMap;

use crate::errors::{ConversionError, Result};
use crate::models::{CellState, Clue, Direction, Grid, Puzzle, WordTable};
use crate::settings::ConversionSettings;
use crate::text::{emphasis_to_markup, strip_emphasis};

pub const APPLET_NAMESPACE: &str = "http://crossword.info/xml/crossword-compiler";
pub const PUZZLE_NAMESPACE: &str = "http://crossword.info/xml/rectangular-puzzle";
const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Writer for the crossword XML document.
///
/// Sections must be written in document order: `begin_document`,
/// `write_metadata`, `begin_crossword`, `write_grid`, `write_words`, then
/// `write_clues` per direction. `finalize` closes whatever is still open.
pub struct PuzzleXmlBuilder<'s> {
    writer: Writer<Vec<u8>>,
    open: Vec<&'static str>,
    settings: &'s ConversionSettings,
}

impl<'s> PuzzleXmlBuilder<'s> {
    pub fn new(settings: &'s ConversionSettings) -> Self {
        Self {
            writer: Writer::new_with_indent(Vec::new(), b' ', 2),
            open: Vec::new(),
            settings,
        }
    }

    /// XML declaration, root and puzzle container
    pub fn begin_document(&mut self) -> Result<()> {
        self.writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        self.open("crossword-compiler-applet", &[("xmlns", APPLET_NAMESPACE)])?;
        self.open(
            "rectangular-puzzle",
            &[("xmlns", PUZZLE_NAMESPACE), ("alphabet", ALPHABET)],
        )
    }

    pub fn write_metadata(&mut self, puzzle: &Puzzle) -> Result<()> {
        self.open("metadata", &[])?;
        // Only clue text carries emphasis
        self.text_element("creator", &[], &strip_emphasis(&puzzle.author))?;
        self.text_element("title", &[], &strip_emphasis(&puzzle.title))?;
        if let Some(copyright) = &puzzle.copyright {
            self.text_element("copyright", &[], &strip_emphasis(copyright))?;
        }
        self.close()
    }

    pub fn begin_crossword(&mut self) -> Result<()> {
        self.open("crossword", &[])
    }

    /// One `cell` per grid position, row-major
    pub fn write_grid(&mut self, grid: &Grid) -> Result<()> {
        let width = grid.width().to_string();
        let height = grid.height().to_string();
        self.open("grid", &[("width", &width), ("height", &height)])?;

        for cell in grid.cells() {
            let x = cell.x.to_string();
            let y = cell.y.to_string();
            match cell.state {
                CellState::Block => {
                    self.empty("cell", &[("x", &x), ("y", &y), ("type", "block")])?;
                }
                CellState::Letter(ch) => {
                    let solution = ch.to_string();
                    let number = cell.number.map(|n| n.to_string());
                    let mut attrs = vec![("x", x.as_str()), ("y", y.as_str()), ("solution", solution.as_str())];
                    if let Some(number) = &number {
                        attrs.push(("number", number.as_str()));
                    }
                    self.empty("cell", &attrs)?;
                }
            }
        }
        self.close()
    }

    /// One `word` per word id, listing its cells in order
    pub fn write_words(&mut self, words: &WordTable) -> Result<()> {
        for word in &words.words {
            let id = word.id.to_string();
            self.open("word", &[("id", &id)])?;
            for pos in &word.cells {
                let x = pos.x.to_string();
                let y = pos.y.to_string();
                self.empty("cells", &[("x", &x), ("y", &y)])?;
            }
            self.close()?;
        }
        Ok(())
    }

    /// Clue block for one direction, clues in ascending number order
    pub fn write_clues(&mut self, direction: Direction, clues: &BTreeMap<u32, Clue>) -> Result<()> {
        self.open("clues", &[("ordering", "normal")])?;
        let settings = self.settings;
        self.open("title", &[])?;
        self.text_element("b", &[], &strip_emphasis(settings.heading(direction)))?;
        self.close()?;

        for clue in clues.values() {
            let word = clue.word_id.to_string();
            let number = clue.number.to_string();
            self.text_element("clue", &[("word", &word), ("number", &number)], &clue.text)?;
        }
        self.close()
    }

    /// Close open elements and substitute emphasis placeholders
    pub fn finalize(mut self) -> Result<String> {
        while !self.open.is_empty() {
            self.close()?;
        }
        let bytes = self.writer.into_inner();
        let serialized = String::from_utf8(bytes).map_err(|e| ConversionError::Xml(e.to_string()))?;

        let mut xml = emphasis_to_markup(&serialized, &self.settings.emphasis_tag);
        xml.push('\n');
        Ok(xml)
    }

    fn open(&mut self, name: &'static str, attrs: &[(&str, &str)]) -> Result<()> {
        self.start(name, attrs)?;
        self.open.push(name);
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        let name = self
            .open
            .pop()
            .ok_or_else(|| ConversionError::Xml("no open element to close".to_string()))?;
        self.end(name)
    }

    fn start(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
        let mut elem = BytesStart::new(name);
        for &attr in attrs {
            elem.push_attribute(attr);
        }
        self.writer.write_event(Event::Start(elem))?;
        Ok(())
    }

    fn end(&mut self, name: &str) -> Result<()> {
        self.writer.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    fn empty(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
        let mut elem = BytesStart::new(name);
        for &attr in attrs {
            elem.push_attribute(attr);
        }
        self.writer.write_event(Event::Empty(elem))?;
        Ok(())
    }

    /// Element with text content, or an empty element for empty text.
    ///
    /// Escapes `<`, `>` and `&` only; placeholders pass through.
    fn text_element(&mut self, name: &str, attrs: &[(&str, &str)], text: &str) -> Result<()> {
        if text.is_empty() {
            return self.empty(name, attrs);
        }
        self.start(name, attrs)?;
        self.writer
            .write_event(Event::Text(BytesText::from_escaped(partial_escape(text))))?;
        self.end(name)
    }
}
