//! Crossword Converter WASM Module
//!
//! Turns a crossword transcription (title, author, grid rows and clue lines)
//! into an Across Lite `.puz` file or crossword XML, and rebuilds an
//! editable transcription from a `.puz` file.

pub mod api;
pub mod converters;
pub mod errors;
pub mod models;
pub mod parse;
pub mod renderers;
pub mod settings;
pub mod structure;
pub mod text;

// Re-export commonly used types
pub use converters::{
    build_puzzle, puz_to_paragraphs, transcription_to_puz, transcription_to_xml, AcrossLiteCodec,
    PuzzleCodec,
};
pub use errors::{ConversionError, Result};
pub use models::{Clue, Clues, Direction, Grid, Puzzle, Word, WordTable};
pub use renderers::{puzzle_to_paragraphs, to_puzzle_xml};
pub use settings::ConversionSettings;
pub use text::{CharacterStyleProvider, Paragraph, StyledParagraph};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    init_logger();

    log::info!("Crossword converter WASM module initialized");
}

#[cfg(feature = "console_log")]
fn init_logger() {
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        wasm_warn!("Logger not initialized: {}", e);
    }
}

#[cfg(not(feature = "console_log"))]
fn init_logger() {}
