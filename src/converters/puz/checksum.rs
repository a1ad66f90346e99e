//! Across Lite checksums
//!
//! Every checksum is the same rotate-and-add over a byte region, seeded
//! with the previous result. The masked checksums XOR the low and high bytes
//! of four partial sums with the letters of `ICHEATED`.

const MASK: &[u8; 8] = b"ICHEATED";

/// Rotate-right-and-add checksum over `data`, seeded with `cksum`
pub fn checksum_region(data: &[u8], mut cksum: u16) -> u16 {
    for &byte in data {
        cksum = if cksum & 1 != 0 {
            (cksum >> 1) + 0x8000
        } else {
            cksum >> 1
        };
        cksum = cksum.wrapping_add(u16::from(byte));
    }
    cksum
}

/// String section as it takes part in checksums (without NUL terminators)
pub struct TextSection<'a> {
    pub title: &'a [u8],
    pub author: &'a [u8],
    pub copyright: &'a [u8],
    pub clues: &'a [Vec<u8>],
    pub notes: &'a [u8],
}

/// Checksum of the string section, seeded with `cksum`.
///
/// Empty title/author/copyright/notes are skipped; non-empty ones include
/// their NUL terminator. Clues never include theirs.
pub fn checksum_text(text: &TextSection<'_>, mut cksum: u16) -> u16 {
    for field in [text.title, text.author, text.copyright] {
        if !field.is_empty() {
            cksum = checksum_region(field, cksum);
            cksum = checksum_region(&[0], cksum);
        }
    }
    for clue in text.clues {
        cksum = checksum_region(clue, cksum);
    }
    if !text.notes.is_empty() {
        cksum = checksum_region(text.notes, cksum);
        cksum = checksum_region(&[0], cksum);
    }
    cksum
}

/// All checksums stored in the header
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Checksums {
    pub file: u16,
    pub cib: u16,
    pub masked_low: [u8; 4],
    pub masked_high: [u8; 4],
}

/// Compute header checksums.
///
/// `cib` is the 8-byte block from offset `0x2C` (width, height, clue count,
/// bitmask, scramble tag).
pub fn compute(cib: &[u8], solution: &[u8], player: &[u8], text: &TextSection<'_>) -> Checksums {
    let cib_sum = checksum_region(cib, 0);

    let mut file = cib_sum;
    file = checksum_region(solution, file);
    file = checksum_region(player, file);
    file = checksum_text(text, file);

    let partials = [
        cib_sum,
        checksum_region(solution, 0),
        checksum_region(player, 0),
        checksum_text(text, 0),
    ];
    let mut masked_low = [0u8; 4];
    let mut masked_high = [0u8; 4];
    for (i, sum) in partials.iter().enumerate() {
        let [low, high] = sum.to_le_bytes();
        masked_low[i] = MASK[i] ^ low;
        masked_high[i] = MASK[i + 4] ^ high;
    }

    Checksums {
        file,
        cib: cib_sum,
        masked_low,
        masked_high,
    }
}
