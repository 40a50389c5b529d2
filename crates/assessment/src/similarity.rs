use std::sync::Arc;

use crate::lexicon::{Lexicon, parse_number};
use crate::normalize::{normalize_word, ocr_canonical, shares_prefix};
use crate::wer::levenshtein_words;

/// Score given to table homophones.
const HOMOPHONE_SCORE: f64 = 0.95;
/// Shared-prefix heuristic: `PREFIX_BASE + PREFIX_SPAN * (min_len / max_len)`.
const PREFIX_BASE: f64 = 0.6;
const PREFIX_SPAN: f64 = 0.35;
const PREFIX_LEN: usize = 3;
/// Edit-distance bonus when both words have the same length.
const EQUAL_LENGTH_BONUS: f64 = 0.1;

/// A word pre-processed once so it can be scored against many others.
#[derive(Debug, Clone, PartialEq)]
pub struct WordForm {
    normalized: String,
    canonical: String,
    number: Option<u64>,
}

impl WordForm {
    pub fn new(text: &str) -> Self {
        let normalized = normalize_word(text);
        let canonical = ocr_canonical(&normalized);
        let number = parse_number(&normalized);
        Self {
            normalized,
            canonical,
            number,
        }
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }
}

/// Scores how alike two words are on a 0..1 scale.
///
/// Rules are tried in order and the first that applies wins: exact match,
/// OCR-confusion match, number equivalence, homophone table, shared prefix,
/// then normalized edit distance.
#[derive(Debug, Clone)]
pub struct SimilarityScorer {
    lexicon: Arc<Lexicon>,
}

impl SimilarityScorer {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Convenience wrapper that prepares both words on the fly.
    pub fn similarity(&self, a: &str, b: &str) -> f64 {
        self.score(&WordForm::new(a), &WordForm::new(b))
    }

    pub fn score(&self, a: &WordForm, b: &WordForm) -> f64 {
        if a.is_empty() || b.is_empty() {
            return 0.0;
        }
        if a.normalized == b.normalized {
            return 1.0;
        }
        // OCR noise on the page is not the student's mistake.
        if a.canonical == b.canonical {
            return 1.0;
        }
        if matches!((a.number, b.number), (Some(x), Some(y)) if x == y) {
            return 1.0;
        }
        if self.lexicon.are_homophones(&a.normalized, &b.normalized) {
            return HOMOPHONE_SCORE;
        }

        let len_a = a.normalized.chars().count();
        let len_b = b.normalized.chars().count();
        let (min_len, max_len) = (len_a.min(len_b) as f64, len_a.max(len_b) as f64);

        if shares_prefix(&a.normalized, &b.normalized, PREFIX_LEN) {
            return PREFIX_BASE + PREFIX_SPAN * (min_len / max_len);
        }

        let distance = levenshtein(&a.normalized, &b.normalized)
            .min(levenshtein(&a.canonical, &b.canonical));
        let mut score = 1.0 - distance as f64 / max_len;
        if len_a == len_b {
            score += EQUAL_LENGTH_BONUS;
        }
        score.clamp(0.0, 1.0)
    }
}

/// Character-level Levenshtein edit distance.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    levenshtein_words(&a, &b)
}
