//! Clue line parser
//!
//! `12A<TAB>ANSWER<TAB>Clue text` becomes a [`ParsedClue`]. The answer is a
//! sanity marker for the person transcribing; it is not checked against the
//! grid.

use crate::models::Direction;

use super::patterns::CLUE_LINE;

/// One clue line, before it is attached to a grid word
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedClue {
    pub number: u32,
    pub direction: Direction,
    pub answer: String,
    pub text: String,
    /// Char index of the clue text inside the line
    pub text_offset: usize,
}

/// Parse one clue line. Returns `None` when the line does not match.
pub fn parse_clue_line(line: &str) -> Option<ParsedClue> {
    let caps = CLUE_LINE.captures(line)?;
    let number = caps.get(1)?.as_str().parse::<u32>().ok()?;
    let direction = caps
        .get(2)
        .and_then(|m| m.as_str().chars().next())
        .and_then(Direction::from_letter)?;
    let answer = caps.get(3)?.as_str().to_string();
    let text = caps.get(4)?;

    Some(ParsedClue {
        number,
        direction,
        answer,
        text: text.as_str().to_string(),
        text_offset: line[..text.start()].chars().count(),
    })
}

/// Parse every clue line, skipping lines that do not match
pub fn parse_clue_lines<I, S>(lines: I) -> Vec<ParsedClue>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| parse_clue_line(line.as_ref().trim()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_clue_line() {
        let clue = parse_clue_line("17A\tOREO\tCookie with a creme center").unwrap();
        assert_eq!(clue.number, 17);
        assert_eq!(clue.direction, Direction::Across);
        assert_eq!(clue.answer, "OREO");
        assert_eq!(clue.text, "Cookie with a creme center");
        assert_eq!(clue.text_offset, 9);
    }

    #[test]
    fn test_text_may_contain_tabs() {
        let clue = parse_clue_line("3D\tABC\tone\ttwo").unwrap();
        assert_eq!(clue.direction, Direction::Down);
        assert_eq!(clue.text, "one\ttwo");
    }

    #[test]
    fn test_non_matching_lines_are_skipped() {
        let clues = parse_clue_lines([
            "1A\tCAT\tFeline",
            "1A CAT Feline",
            "2D\tNO\tTwo-letter answer",
            "C A T",
            "4D\tTEN\tNumber",
        ]);
        let numbers: Vec<_> = clues.iter().map(|c| (c.number, c.direction)).collect();
        assert_eq!(numbers, vec![(1, Direction::Across), (4, Direction::Down)]);
    }

    #[test]
    fn test_accented_answer_is_not_a_clue_line() {
        assert!(parse_clue_line("100D\tÉTÉ\tSummer").is_none());
        assert_eq!(parse_clue_line("100D\tETE\tSummer").unwrap().text_offset, 9);
    }
}
