//! Binary interchange contract
//!
//! The conversion pipeline only ever sees a binary puzzle through this
//! trait. Implementations report every decode failure as
//! `ConversionError::CorruptSource`.

use crate::errors::Result;
use crate::models::Puzzle;

pub trait PuzzleCodec {
    /// Serialize a validated puzzle
    fn encode(&self, puzzle: &Puzzle) -> Result<Vec<u8>>;

    /// Rebuild a numbered puzzle from bytes
    fn decode(&self, bytes: &[u8]) -> Result<Puzzle>;
}
