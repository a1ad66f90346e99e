//! Emphasis markup codec
//!
//! Italic runs inside clue text travel through the pipeline as placeholder
//! characters from the Unicode private use area. They are not XML-reserved,
//! so they survive text escaping untouched; once the document is serialized
//! they are swapped for real `<i>`/`</i>` tags. Host text never carries them:
//! stray placeholder characters are dropped on the way in.

use std::ops::Range;

/// Placeholder opening an italic run
pub const EMPHASIS_START: char = '\u{E000}';

/// Placeholder closing an italic run
pub const EMPHASIS_END: char = '\u{E001}';

fn is_placeholder(ch: char) -> bool {
    ch == EMPHASIS_START || ch == EMPHASIS_END
}

/// Per-character italic state supplied by the host document
pub trait CharacterStyleProvider {
    /// Whether the character at `index` (in chars, not bytes) is italic
    fn has_emphasis_at(&self, index: usize) -> bool;
}

/// Provider for plain text: nothing is italic
pub struct NoEmphasis;

impl CharacterStyleProvider for NoEmphasis {
    fn has_emphasis_at(&self, _index: usize) -> bool {
        false
    }
}

impl CharacterStyleProvider for [bool] {
    fn has_emphasis_at(&self, index: usize) -> bool {
        self.get(index).copied().unwrap_or(false)
    }
}

impl CharacterStyleProvider for [Range<usize>] {
    fn has_emphasis_at(&self, index: usize) -> bool {
        self.iter().any(|run| run.contains(&index))
    }
}

/// Wrap italic runs of `text` in placeholder tokens.
///
/// `offset` is the char index of `text`'s first character inside the
/// paragraph the provider describes.
pub fn encode_emphasis<S>(text: &str, styles: &S, offset: usize) -> String
where
    S: CharacterStyleProvider + ?Sized,
{
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;

    for (i, ch) in text.chars().enumerate() {
        if is_placeholder(ch) {
            continue;
        }
        let italic = styles.has_emphasis_at(offset + i);
        if italic && !in_run {
            out.push(EMPHASIS_START);
        } else if !italic && in_run {
            out.push(EMPHASIS_END);
        }
        in_run = italic;
        out.push(ch);
    }

    if in_run {
        out.push(EMPHASIS_END);
    }
    out
}

/// Split tokenized text into plain text and italic char ranges.
///
/// An unterminated run extends to the end of the text.
pub fn decode_emphasis(tokenized: &str) -> (String, Vec<Range<usize>>) {
    let mut plain = String::with_capacity(tokenized.len());
    let mut runs = Vec::new();
    let mut open: Option<usize> = None;
    let mut count = 0;

    for ch in tokenized.chars() {
        match ch {
            EMPHASIS_START => {
                if open.is_none() {
                    open = Some(count);
                }
            }
            EMPHASIS_END => {
                if let Some(start) = open.take() {
                    if start < count {
                        runs.push(start..count);
                    }
                }
            }
            _ => {
                plain.push(ch);
                count += 1;
            }
        }
    }

    if let Some(start) = open {
        if start < count {
            runs.push(start..count);
        }
    }
    (plain, runs)
}

/// Remove placeholder tokens, keeping the prose
pub fn strip_emphasis(tokenized: &str) -> String {
    tokenized.chars().filter(|&ch| !is_placeholder(ch)).collect()
}

/// Replace placeholder tokens with real tags.
///
/// Run this only after the surrounding text has been escaped.
pub fn emphasis_to_markup(serialized: &str, tag: &str) -> String {
    let open = format!("<{}>", tag);
    let close = format!("</{}>", tag);
    let mut out = String::with_capacity(serialized.len());
    for ch in serialized.chars() {
        match ch {
            EMPHASIS_START => out.push_str(&open),
            EMPHASIS_END => out.push_str(&close),
            _ => out.push(ch),
        }
    }
    out
}

/// Write tokenized clue text as inline markup for binary and host formats.
///
/// A literal `<` in the prose becomes `&lt;`, and a literal `&` that would
/// read as one of the two recognised entities becomes `&amp;`, so that
/// [`clue_markup_to_emphasis`] never mistakes prose for a tag.
pub fn emphasis_to_clue_markup(tokenized: &str, tag: &str) -> String {
    let mut out = String::with_capacity(tokenized.len());
    let mut rest = tokenized;

    while let Some(ch) = rest.chars().next() {
        match ch {
            EMPHASIS_START => {
                out.push('<');
                out.push_str(tag);
                out.push('>');
            }
            EMPHASIS_END => {
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
            '<' => out.push_str("&lt;"),
            '&' if rest.starts_with("&lt;") || rest.starts_with("&amp;") => out.push_str("&amp;"),
            _ => out.push(ch),
        }
        rest = &rest[ch.len_utf8()..];
    }
    out
}

/// Read inline clue markup back into tokenized text.
///
/// Only `<tag>`, `</tag>`, `&lt;` and `&amp;` are interpreted; everything
/// else, including bare `&` and other tags, is kept as prose.
pub fn clue_markup_to_emphasis(markup: &str, tag: &str) -> String {
    let open = format!("<{}>", tag);
    let close = format!("</{}>", tag);
    let mut out = String::with_capacity(markup.len());
    let mut rest = markup;

    while let Some(ch) = rest.chars().next() {
        let (emit, consumed) = if rest.starts_with(&open) {
            (Some(EMPHASIS_START), open.len())
        } else if rest.starts_with(&close) {
            (Some(EMPHASIS_END), close.len())
        } else if rest.starts_with("&lt;") {
            (Some('<'), 4)
        } else if rest.starts_with("&amp;") {
            (Some('&'), 5)
        } else if is_placeholder(ch) {
            (None, ch.len_utf8())
        } else {
            (Some(ch), ch.len_utf8())
        };
        if let Some(emit) = emit {
            out.push(emit);
        }
        rest = &rest[consumed..];
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Readable test notation: `[` and `]` stand for the placeholders
    fn tokens(text: &str) -> String {
        text.replace('[', &EMPHASIS_START.to_string())
            .replace(']', &EMPHASIS_END.to_string())
    }

    #[test]
    fn test_encode_single_run() {
        let runs = [2..5];
        let encoded = encode_emphasis("a Hamlet b", &runs[..], 0);
        assert_eq!(encoded, tokens("a [Ham]let b"));
    }

    #[test]
    fn test_encode_forces_end_token_at_boundary() {
        let styles = [false, false, true, true];
        assert_eq!(encode_emphasis("abcd", &styles[..], 0), tokens("ab[cd]"));
    }

    #[test]
    fn test_encode_respects_offset() {
        let runs = [10..12];
        assert_eq!(encode_emphasis("xyz", &runs[..], 9), tokens("x[yz]"));
    }

    #[test]
    fn test_encode_plain_text_unchanged() {
        assert_eq!(encode_emphasis("Fish & chips", &NoEmphasis, 0), "Fish & chips");
        assert_eq!(encode_emphasis("{{em}}x{{/em}}", &NoEmphasis, 0), "{{em}}x{{/em}}");
    }

    #[test]
    fn test_encode_drops_stray_placeholders() {
        let text = tokens("a[b]c");
        assert_eq!(encode_emphasis(&text, &NoEmphasis, 0), "abc");
    }

    #[test]
    fn test_decode_recovers_runs() {
        let (plain, runs) = decode_emphasis(&tokens("[Ben-Hur] star, or [Ten]"));
        assert_eq!(plain, "Ben-Hur star, or Ten");
        assert_eq!(runs, vec![0..7, 17..20]);
    }

    #[test]
    fn test_decode_unterminated_run() {
        let (plain, runs) = decode_emphasis(&tokens("ab[cd"));
        assert_eq!(plain, "abcd");
        assert_eq!(runs, vec![2..4]);
    }

    #[test]
    fn test_decode_counts_chars_not_bytes() {
        let (plain, runs) = decode_emphasis(&tokens("café [olé]"));
        assert_eq!(plain, "café olé");
        assert_eq!(runs, vec![5..8]);
    }

    #[test]
    fn test_encode_then_decode_keeps_runs() {
        let runs = vec![1..3, 6..8];
        let encoded = encode_emphasis("abcdefgh", &runs[..], 0);
        assert_eq!(decode_emphasis(&encoded), ("abcdefgh".to_string(), runs));
    }

    #[test]
    fn test_strip_keeps_prose() {
        assert_eq!(strip_emphasis(&tokens("See [Hamlet]")), "See Hamlet");
    }

    #[test]
    fn test_markup_substitution() {
        assert_eq!(
            emphasis_to_markup(&tokens("a &amp; [b] {{em}}"), "i"),
            "a &amp; <i>b</i> {{em}}"
        );
    }

    #[test]
    fn test_clue_markup() {
        assert_eq!(emphasis_to_clue_markup(&tokens("[b] R&B"), "i"), "<i>b</i> R&B");
        assert_eq!(clue_markup_to_emphasis("<i>b</i> R&B", "i"), tokens("[b] R&B"));
    }

    #[test]
    fn test_literal_tags_in_prose_stay_prose() {
        let prose = "Use <i> for &lt;italics&gt; & more";
        let markup = emphasis_to_clue_markup(prose, "i");
        assert_eq!(markup, "Use &lt;i> for &amp;lt;italics&gt; & more");
        assert_eq!(clue_markup_to_emphasis(&markup, "i"), prose);
    }

    #[test]
    fn test_other_tags_are_prose() {
        assert_eq!(clue_markup_to_emphasis("<b>bold</b>", "i"), "<b>bold</b>");
    }
}
