use serde::{Deserialize, Serialize};

use crate::normalize::normalize_word;

/// Word error rate of a transcript against the passage text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WordErrorRate {
    pub rate: f64,
    pub edit_distance: usize,
    pub reference_words: usize,
}

/// Splits text into normalized words, dropping tokens that normalize to nothing.
pub fn normalize_words(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(normalize_word)
        .filter(|w| !w.is_empty())
        .collect()
}

/// Levenshtein edit distance over words, or any other comparable tokens.
pub fn levenshtein_words<T: PartialEq>(ref_words: &[T], hyp_words: &[T]) -> usize {
    let n = hyp_words.len();
    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0; n + 1];

    for i in 1..=ref_words.len() {
        curr[0] = i;
        for j in 1..=n {
            let cost = usize::from(ref_words[i - 1] != hyp_words[j - 1]);
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[n]
}

/// WER over already-normalized word lists.
pub fn word_error_rate_words<T: PartialEq>(ref_words: &[T], hyp_words: &[T]) -> WordErrorRate {
    if ref_words.is_empty() {
        return WordErrorRate {
            rate: if hyp_words.is_empty() { 0.0 } else { 1.0 },
            edit_distance: hyp_words.len(),
            reference_words: 0,
        };
    }

    let edit_distance = levenshtein_words(ref_words, hyp_words);
    WordErrorRate {
        rate: edit_distance as f64 / ref_words.len() as f64,
        edit_distance,
        reference_words: ref_words.len(),
    }
}

/// WER between reference and hypothesis text.
pub fn word_error_rate(reference: &str, hypothesis: &str) -> WordErrorRate {
    word_error_rate_words(&normalize_words(reference), &normalize_words(hypothesis))
}
