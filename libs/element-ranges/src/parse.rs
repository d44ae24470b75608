//! Token level parsing of range text.
//!
//! A token is one or two identifiers joined by the range delimiter. Each end
//! has leading whitespace and trailing non-digit characters removed before
//! conversion; a stray shortcut key typed into the field (`12s`) still
//! yields `12`.

use crate::range::{ElementIdentifier, ElementRange};

/// Parses one token, or returns `None` if either end is not an identifier.
///
/// Only the first two ends are used; anything after a second range
/// delimiter is ignored.
pub(crate) fn parse_token(token: &str, range_delimiter: char) -> Option<ElementRange> {
    let mut ends = token.split(range_delimiter);
    let start = parse_end(ends.next()?)?;
    let end = match ends.next() {
        Some(part) => parse_end(part)?,
        None => start,
    };
    Some(ElementRange::new(start, end))
}

fn parse_end(part: &str) -> Option<ElementIdentifier> {
    strip_trailing_non_digits(part.trim_start()).parse().ok()
}

/// Removes trailing characters that are not ASCII digits.
///
/// A part made only of non-digits strips to the empty string.
fn strip_trailing_non_digits(text: &str) -> &str {
    text.trim_end_matches(|c: char| !c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_trailing_characters() {
        assert_eq!(strip_trailing_non_digits("12s"), "12");
        assert_eq!(strip_trailing_non_digits("12 \t"), "12");
        assert_eq!(strip_trailing_non_digits("abc"), "");
        assert_eq!(strip_trailing_non_digits("1a2b"), "1a2");
    }

    #[test]
    fn parses_single_and_pair() {
        assert_eq!(parse_token("7", '-'), Some(ElementRange::single(7)));
        assert_eq!(parse_token(" 3 - 9 ", '-'), Some(ElementRange::new(3, 9)));
        assert_eq!(parse_token("9-3", '-'), Some(ElementRange::new(3, 9)));
    }

    #[test]
    fn rejects_malformed_ends() {
        assert_eq!(parse_token("", '-'), None);
        assert_eq!(parse_token("abc", '-'), None);
        assert_eq!(parse_token("7-", '-'), None);
        assert_eq!(parse_token("-7", '-'), None);
        assert_eq!(parse_token("1a2", '-'), None);
    }

    #[test]
    fn ignores_extra_ends() {
        assert_eq!(parse_token("1-4-9", '-'), Some(ElementRange::new(1, 4)));
    }

    #[test]
    fn honours_custom_delimiter() {
        assert_eq!(parse_token("2:5", ':'), Some(ElementRange::new(2, 5)));
        assert_eq!(parse_token("2-5", ':'), None);
    }
}
