//! Across Lite `.puz` codec
//!
//! Layout: a `0x34`-byte header (checksums, `ACROSS&DOWN` signature,
//! version, dimensions, clue count), the solution board, the player board,
//! then NUL-terminated Latin-1 strings: title, author, copyright, every clue
//! in board order, notes.
//!
//! Writing is done here; reading goes through the `puz_parse` crate, with
//! numbering rebuilt from the solution grid.

mod checksum;
mod latin1;
mod parse;
mod write;

pub use parse::parse_puz;
pub use write::write_puz;

use crate::errors::Result;
use crate::models::Puzzle;

use super::codec::PuzzleCodec;

pub(crate) const MAGIC: &[u8; 12] = b"ACROSS&DOWN\0";
pub(crate) const VERSION: &[u8; 4] = b"1.3\0";
pub(crate) const HEADER_LEN: usize = 0x34;

pub(crate) const OFFSET_FILE_CHECKSUM: usize = 0x00;
pub(crate) const OFFSET_MAGIC: usize = 0x02;
pub(crate) const OFFSET_CIB_CHECKSUM: usize = 0x0E;
pub(crate) const OFFSET_MASKED_LOW: usize = 0x10;
pub(crate) const OFFSET_MASKED_HIGH: usize = 0x14;
pub(crate) const OFFSET_VERSION: usize = 0x18;
pub(crate) const OFFSET_CIB: usize = 0x2C;

/// Tag used for italic runs inside binary clue strings
pub(crate) const BINARY_EMPHASIS_TAG: &str = "i";

/// Across Lite binary format
#[derive(Clone, Copy, Debug, Default)]
pub struct AcrossLiteCodec;

impl PuzzleCodec for AcrossLiteCodec {
    fn encode(&self, puzzle: &Puzzle) -> Result<Vec<u8>> {
        write_puz(puzzle)
    }

    fn decode(&self, bytes: &[u8]) -> Result<Puzzle> {
        parse_puz(bytes)
    }
}
