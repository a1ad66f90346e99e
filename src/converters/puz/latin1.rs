//! ISO-8859-1 text for the binary string section

/// Encode text as Latin-1, transliterating common typography and replacing
/// everything else outside the range with `?`. NUL would terminate the
/// string early and is dropped.
pub fn encode_latin1(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\0' => {}
            '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{2032}' => out.push(b'\''),
            '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{2033}' => out.push(b'"'),
            '\u{2013}' | '\u{2014}' | '\u{2212}' => out.push(b'-'),
            '\u{2026}' => out.extend_from_slice(b"..."),
            c if (c as u32) <= 0xFF => out.push(c as u8),
            c => {
                log::warn!("Character {:?} has no Latin-1 form, writing '?'", c);
                out.push(b'?');
            }
        }
    }
    out
}
