//! Groups reading mistakes into recurring categories.

use std::collections::HashMap;

use crate::model::{AlignedWord, ErrorPattern, PatternExample, PatternType, WordStatus};
use crate::normalize::normalize_word;

/// Letter pairs that are easy to confuse on the page.
const VISUAL_PAIRS: &[(char, char)] = &[('b', 'd'), ('p', 'q'), ('m', 'n'), ('u', 'n')];

/// Grouping key; every occurrence with the same key lands in one pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum PatternKey {
    InitialSound(char, char),
    FinalSound(char, char),
    VisualSimilarity(char, char),
    Substitution(String, String),
}

impl PatternKey {
    fn pattern_type(&self) -> PatternType {
        match self {
            PatternKey::InitialSound(..) => PatternType::InitialSound,
            PatternKey::FinalSound(..) => PatternType::FinalSound,
            PatternKey::VisualSimilarity(..) => PatternType::VisualSimilarity,
            PatternKey::Substitution(..) => PatternType::Substitution,
        }
    }

    fn description(&self) -> String {
        match self {
            PatternKey::InitialSound(e, s) => {
                format!("Beginning sound '{e}' read as '{s}'")
            }
            PatternKey::FinalSound(e, s) => format!("Ending sound '{e}' read as '{s}'"),
            PatternKey::VisualSimilarity(e, s) => {
                format!("Confuses similar-looking letters '{e}' and '{s}'")
            }
            PatternKey::Substitution(e, s) => format!("Reads '{e}' as '{s}'"),
        }
    }
}

struct Accumulator {
    key: PatternKey,
    examples: Vec<PatternExample>,
    count: usize,
}

/// Extracts error patterns from misread and substituted words, most frequent
/// first. Patterns with equal counts keep the order they were first seen in.
pub fn analyze_error_patterns(words: &[AlignedWord], max_examples: usize) -> Vec<ErrorPattern> {
    let mut accumulators: Vec<Accumulator> = Vec::new();
    let mut index: HashMap<PatternKey, usize> = HashMap::new();

    for word in words {
        if !matches!(word.status, WordStatus::Misread | WordStatus::Substituted) {
            continue;
        }
        let Some(spoken) = word.spoken.as_deref() else {
            continue;
        };
        let expected_norm = normalize_word(&word.expected);
        let spoken_norm = normalize_word(spoken);
        if expected_norm.is_empty() || spoken_norm.is_empty() {
            continue;
        }

        for key in keys_for(&expected_norm, &spoken_norm, word.status) {
            let slot = *index.entry(key.clone()).or_insert_with(|| {
                accumulators.push(Accumulator {
                    key,
                    examples: Vec::new(),
                    count: 0,
                });
                accumulators.len() - 1
            });
            let acc = &mut accumulators[slot];
            acc.count += 1;
            if acc.examples.len() < max_examples {
                acc.examples.push(PatternExample {
                    expected: word.expected.clone(),
                    spoken: spoken.to_string(),
                });
            }
        }
    }

    accumulators.sort_by(|a, b| b.count.cmp(&a.count));
    accumulators
        .into_iter()
        .map(|acc| ErrorPattern {
            pattern_type: acc.key.pattern_type(),
            description: acc.key.description(),
            examples: acc.examples,
            count: acc.count,
        })
        .collect()
}

/// Distinct keys one mistake contributes to.
fn keys_for(expected: &str, spoken: &str, status: WordStatus) -> Vec<PatternKey> {
    let mut keys = Vec::new();
    if let (Some(e), Some(s)) = (expected.chars().next(), spoken.chars().next()) {
        if e != s {
            keys.push(PatternKey::InitialSound(e, s));
        }
    }
    if let (Some(e), Some(s)) = (expected.chars().last(), spoken.chars().last()) {
        if e != s {
            keys.push(PatternKey::FinalSound(e, s));
        }
    }

    for (e, s) in expected.chars().zip(spoken.chars()) {
        if is_visual_pair(e, s) {
            let key = PatternKey::VisualSimilarity(e, s);
            if !keys.contains(&key) {
                keys.push(key);
            }
        }
    }

    if status == WordStatus::Substituted {
        keys.push(PatternKey::Substitution(
            expected.to_string(),
            spoken.to_string(),
        ));
    }
    keys
}

fn is_visual_pair(a: char, b: char) -> bool {
    VISUAL_PAIRS
        .iter()
        .any(|&(x, y)| (a, b) == (x, y) || (a, b) == (y, x))
}
