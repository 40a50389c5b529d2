//! Word normalization shared by the scorer, the lexicon and the detectors.

/// Trailing contraction suffixes and what they expand to.
const CONTRACTIONS: &[(&str, &str)] = &[
    ("n't", " not"),
    ("'re", " are"),
    ("'ve", " have"),
    ("'ll", " will"),
    ("'d", " would"),
    ("'m", " am"),
    ("'s", ""),
];

/// Glyphs and glyph sequences OCR engines confuse, applied in order.
const OCR_CONFUSIONS: &[(&str, &str)] = &[
    ("0", "o"),
    ("1", "l"),
    ("1", "i"),
    ("5", "s"),
    ("8", "b"),
    ("6", "g"),
    ("rn", "m"),
    ("cl", "d"),
    ("vv", "w"),
    ("li", "h"),
    ("ii", "u"),
    ("c", "e"),
    ("n", "h"),
];

/// Lowercases, keeps only `[a-z0-9']` and expands a trailing contraction.
///
/// Typographic apostrophes are folded to `'` first so `don’t` and `don't`
/// normalize identically.
pub fn normalize_word(text: &str) -> String {
    let mut word: String = text
        .chars()
        .map(|c| if c == '\u{2019}' || c == '\u{2018}' { '\'' } else { c })
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '\'')
        .collect();

    for (suffix, expansion) in CONTRACTIONS {
        if word.len() > suffix.len() && word.ends_with(suffix) {
            word.truncate(word.len() - suffix.len());
            word.push_str(expansion);
            break;
        }
    }
    word
}

/// Collapses OCR-confusable glyphs so `rnodern` and `modern` compare equal.
pub fn ocr_canonical(normalized: &str) -> String {
    let mut canonical = normalized.to_string();
    for (from, to) in OCR_CONFUSIONS {
        if canonical.contains(from) {
            canonical = canonical.replace(from, to);
        }
    }
    canonical
}

/// Whether both words have at least `len` characters and agree on the first `len`.
pub fn shares_prefix(a: &str, b: &str, len: usize) -> bool {
    a.len() >= len && b.len() >= len && a.as_bytes()[..len] == b.as_bytes()[..len]
}

/// Whether raw OCR text ends in punctuation a reader naturally pauses at.
pub fn ends_with_pause_punctuation(text: &str) -> bool {
    text.trim_end()
        .chars()
        .last()
        .is_some_and(|c| matches!(c, '.' | ',' | ';' | ':' | '!' | '?' | '-' | '—' | '–'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_punctuation_and_case() {
        assert_eq!(normalize_word("Hello,"), "hello");
        assert_eq!(normalize_word("\"Stop!\""), "stop");
        assert_eq!(normalize_word("1,000"), "1000");
    }

    #[test]
    fn test_normalize_expands_contractions() {
        assert_eq!(normalize_word("don't"), "do not");
        assert_eq!(normalize_word("They're"), "they are");
        assert_eq!(normalize_word("we've"), "we have");
        assert_eq!(normalize_word("she'll"), "she will");
        assert_eq!(normalize_word("I'd"), "i would");
        assert_eq!(normalize_word("I'm"), "i am");
        assert_eq!(normalize_word("cat's"), "cat");
        assert_eq!(normalize_word("don’t"), "do not");
    }

    #[test]
    fn test_normalize_drops_non_ascii_letters() {
        assert_eq!(normalize_word("café"), "caf");
        assert_eq!(normalize_word("—"), "");
    }

    #[test]
    fn test_ocr_canonical_collapses_confusions() {
        assert_eq!(ocr_canonical("rnodern"), ocr_canonical("modern"));
        assert_eq!(ocr_canonical("c1ock"), ocr_canonical("dock"));
        assert_eq!(ocr_canonical("5and"), ocr_canonical("sand"));
    }

    #[test]
    fn test_shares_prefix() {
        assert!(shares_prefix("house", "horse", 2));
        assert!(!shares_prefix("house", "horse", 3));
        assert!(!shares_prefix("ho", "house", 3));
    }

    #[test]
    fn test_pause_punctuation() {
        assert!(ends_with_pause_punctuation("end."));
        assert!(ends_with_pause_punctuation("wait,"));
        assert!(ends_with_pause_punctuation("well—"));
        assert!(!ends_with_pause_punctuation("cat"));
        assert!(!ends_with_pause_punctuation(""));
    }
}
