use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::model::{AlignedWord, ErrorPattern, MatchingResult, Metrics, Severity, WordStatus};
use crate::normalize::normalize_word;
use crate::wer::WordErrorRate;

const MAX_INSIGHT_WORDS: usize = 10;
const MIN_STRENGTH_LETTERS: usize = 4;

/// Everything one assessment produces, ready for summary generation or storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentReport {
    /// Aligned words and counts; the detected range is `result.passage`.
    pub result: MatchingResult,
    pub metrics: Metrics,
    pub severity: Severity,
    pub error_patterns: Vec<ErrorPattern>,
    pub word_error_rate: WordErrorRate,
    pub insights: Insights,
}

/// Word lists for the summary generator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Insights {
    /// Longer words read correctly, in reading order.
    pub strengths: Vec<String>,
    /// Words misread, substituted or skipped, in reading order.
    pub struggles: Vec<String>,
}

impl Insights {
    pub fn from_words(words: &[AlignedWord]) -> Self {
        let strengths = distinct_words(words, |w| w.status == WordStatus::Correct)
            .into_iter()
            .filter(|w| w.chars().filter(|c| c.is_alphabetic()).count() >= MIN_STRENGTH_LETTERS)
            .take(MAX_INSIGHT_WORDS)
            .collect();

        let struggles = distinct_words(words, |w| w.status != WordStatus::Correct)
            .into_iter()
            .take(MAX_INSIGHT_WORDS)
            .collect();

        Self {
            strengths,
            struggles,
        }
    }
}

/// Normalized expected words passing `keep`, first occurrence only.
fn distinct_words(words: &[AlignedWord], keep: impl Fn(&AlignedWord) -> bool) -> Vec<String> {
    let mut seen = HashSet::new();
    words
        .iter()
        .filter(|&w| keep(w))
        .map(|w| normalize_word(&w.expected))
        .filter(|w| !w.is_empty() && seen.insert(w.clone()))
        .collect()
}
