//! Crossword XML export
//!
//! - **converter**: `to_puzzle_xml()` entry point
//! - **builder**: element writer over quick-xml

pub mod builder;
pub mod converter;

pub use builder::PuzzleXmlBuilder;
pub use converter::to_puzzle_xml;
