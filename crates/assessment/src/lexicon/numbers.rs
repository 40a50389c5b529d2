//! Cardinal and ordinal number parsing for number-word equivalence.
//!
//! Inputs are normalized words (lowercase ASCII, punctuation stripped), so
//! "twenty-one" arrives as `twentyone` and is segmented back into parts.

#[derive(Debug, Clone, Copy)]
enum NumberWord {
    Value(u64),
    Hundred,
    Scale(u64),
    Conjunction,
}

use NumberWord::{Conjunction, Hundred, Scale, Value};

const NUMBER_WORDS: &[(&str, NumberWord)] = &[
    ("zero", Value(0)),
    ("one", Value(1)),
    ("two", Value(2)),
    ("three", Value(3)),
    ("four", Value(4)),
    ("five", Value(5)),
    ("six", Value(6)),
    ("seven", Value(7)),
    ("eight", Value(8)),
    ("nine", Value(9)),
    ("ten", Value(10)),
    ("eleven", Value(11)),
    ("twelve", Value(12)),
    ("thirteen", Value(13)),
    ("fourteen", Value(14)),
    ("fifteen", Value(15)),
    ("sixteen", Value(16)),
    ("seventeen", Value(17)),
    ("eighteen", Value(18)),
    ("nineteen", Value(19)),
    ("twenty", Value(20)),
    ("thirty", Value(30)),
    ("forty", Value(40)),
    ("fifty", Value(50)),
    ("sixty", Value(60)),
    ("seventy", Value(70)),
    ("eighty", Value(80)),
    ("ninety", Value(90)),
    ("first", Value(1)),
    ("second", Value(2)),
    ("third", Value(3)),
    ("fourth", Value(4)),
    ("fifth", Value(5)),
    ("sixth", Value(6)),
    ("seventh", Value(7)),
    ("eighth", Value(8)),
    ("ninth", Value(9)),
    ("tenth", Value(10)),
    ("eleventh", Value(11)),
    ("twelfth", Value(12)),
    ("thirteenth", Value(13)),
    ("fourteenth", Value(14)),
    ("fifteenth", Value(15)),
    ("sixteenth", Value(16)),
    ("seventeenth", Value(17)),
    ("eighteenth", Value(18)),
    ("nineteenth", Value(19)),
    ("twentieth", Value(20)),
    ("thirtieth", Value(30)),
    ("fortieth", Value(40)),
    ("fiftieth", Value(50)),
    ("sixtieth", Value(60)),
    ("seventieth", Value(70)),
    ("eightieth", Value(80)),
    ("ninetieth", Value(90)),
    ("hundred", Hundred),
    ("hundredth", Hundred),
    ("thousand", Scale(1_000)),
    ("thousandth", Scale(1_000)),
    ("million", Scale(1_000_000)),
    ("millionth", Scale(1_000_000)),
    ("billion", Scale(1_000_000_000)),
    ("billionth", Scale(1_000_000_000)),
    ("and", Conjunction),
];

/// Parses a digit string, a digit ordinal (`1st`, `22nd`, `40th`) or a
/// spelled-out cardinal/ordinal up to the billions.
///
/// Returns `None` for anything that is not entirely a number.
pub fn parse_number(word: &str) -> Option<u64> {
    let word = word.trim();
    if word.is_empty() {
        return None;
    }
    parse_digits(word).or_else(|| parse_spelled(word))
}

fn parse_digits(word: &str) -> Option<u64> {
    let digits_end = word
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(word.len());
    if digits_end == 0 {
        return None;
    }
    let (digits, suffix) = word.split_at(digits_end);
    match suffix {
        "" | "st" | "nd" | "rd" | "th" => digits.parse().ok(),
        _ => None,
    }
}

fn parse_spelled(word: &str) -> Option<u64> {
    let mut parts = Vec::new();
    for token in word.split_whitespace() {
        segment(token, &mut parts)?;
    }
    fold(&parts)
}

/// Splits a run-together token into number words, backtracking when the
/// longest prefix leads to a dead end (`tenthousand` is not `tenth` + `ousand`).
fn segment(token: &str, out: &mut Vec<NumberWord>) -> Option<()> {
    if token.is_empty() {
        return Some(());
    }
    let mut candidates: Vec<&(&str, NumberWord)> = NUMBER_WORDS
        .iter()
        .filter(|(w, _)| token.starts_with(w))
        .collect();
    candidates.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

    for (w, kind) in candidates {
        let mark = out.len();
        out.push(*kind);
        if segment(&token[w.len()..], out).is_some() {
            return Some(());
        }
        out.truncate(mark);
    }
    None
}

fn fold(parts: &[NumberWord]) -> Option<u64> {
    let mut total: u64 = 0;
    let mut current: u64 = 0;
    let mut saw_number = false;

    for part in parts {
        match *part {
            Value(v) => {
                current = current.checked_add(v)?;
                saw_number = true;
            }
            Hundred => {
                current = current.max(1).checked_mul(100)?;
                saw_number = true;
            }
            Scale(scale) => {
                total = total.checked_add(current.max(1).checked_mul(scale)?)?;
                current = 0;
                saw_number = true;
            }
            Conjunction => {}
        }
    }

    if !saw_number {
        return None;
    }
    total.checked_add(current)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_and_ordinals() {
        assert_eq!(parse_number("15"), Some(15));
        assert_eq!(parse_number("1st"), Some(1));
        assert_eq!(parse_number("22nd"), Some(22));
        assert_eq!(parse_number("3rd"), Some(3));
        assert_eq!(parse_number("40th"), Some(40));
        assert_eq!(parse_number("12abc"), None);
    }

    #[test]
    fn test_spelled_cardinals() {
        assert_eq!(parse_number("fifteen"), Some(15));
        assert_eq!(parse_number("twentyone"), Some(21));
        assert_eq!(parse_number("one hundred and five"), Some(105));
        assert_eq!(parse_number("onehundredandfive"), Some(105));
        assert_eq!(parse_number("two thousand twentyfour"), Some(2024));
        assert_eq!(parse_number("three billion"), Some(3_000_000_000));
        assert_eq!(parse_number("hundred"), Some(100));
    }

    #[test]
    fn test_spelled_ordinals() {
        assert_eq!(parse_number("first"), Some(1));
        assert_eq!(parse_number("twentieth"), Some(20));
        assert_eq!(parse_number("twentyfirst"), Some(21));
    }

    #[test]
    fn test_segmentation_backtracks() {
        assert_eq!(parse_number("tenthousand"), Some(10_000));
    }

    #[test]
    fn test_non_numbers() {
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("and"), None);
        assert_eq!(parse_number("often"), None);
        assert_eq!(parse_number("cat"), None);
    }

    #[test]
    fn test_overflow_falls_through() {
        assert_eq!(parse_number("99999999999999999999999"), None);
    }
}
