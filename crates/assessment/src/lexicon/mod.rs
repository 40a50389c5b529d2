//! Static equivalence tables consulted by the similarity scorer.
//!
//! A [`Lexicon`] is built once and shared read-only (typically behind an
//! `Arc`) by every assessment a process runs.

mod homophones;
pub mod numbers;

use std::collections::{HashMap, HashSet};

use crate::normalize::normalize_word;

pub use numbers::parse_number;

/// Vocal fillers dropped from the transcript wherever they occur.
const HESITATION_FILLERS: &[&str] = &["um", "uh", "er", "ah", "hmm", "mm", "erm"];

/// Words that are fillers in speech but also ordinary words in a passage.
const DISCOURSE_FILLERS: &[&str] = &["like", "so", "well"];

#[derive(Debug, Clone)]
pub struct Lexicon {
    homophones: HashMap<String, HashSet<String>>,
}

impl Lexicon {
    /// The built-in homophone table.
    pub fn standard() -> Self {
        let mut lexicon = Self {
            homophones: HashMap::new(),
        };
        for group in homophones::HOMOPHONE_GROUPS {
            lexicon.insert_group(group.iter().map(|w| w.to_string()).collect());
        }
        lexicon
    }

    /// The built-in table plus site-specific groups (e.g. student names).
    ///
    /// Extra entries are normalized the same way words are at scoring time.
    pub fn with_extra_groups(groups: &[Vec<String>]) -> Self {
        let mut lexicon = Self::standard();
        for group in groups {
            let normalized: Vec<String> = group
                .iter()
                .map(|w| normalize_word(w))
                .filter(|w| !w.is_empty())
                .collect();
            lexicon.insert_group(normalized);
        }
        lexicon
    }

    fn insert_group(&mut self, group: Vec<String>) {
        for word in &group {
            let variants = self.homophones.entry(word.clone()).or_default();
            variants.extend(group.iter().filter(|w| *w != word).cloned());
        }
    }

    /// Whether two normalized words sound alike according to the table.
    pub fn are_homophones(&self, a: &str, b: &str) -> bool {
        self.homophones
            .get(a)
            .is_some_and(|variants| variants.contains(b))
            || self
                .homophones
                .get(b)
                .is_some_and(|variants| variants.contains(a))
    }

    /// Number of words with at least one homophone.
    pub fn len(&self) -> usize {
        self.homophones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.homophones.is_empty()
    }

    /// Whether a normalized word is a pure vocal filler (`um`, `uh`, ...).
    pub fn is_hesitation_filler(&self, normalized: &str) -> bool {
        HESITATION_FILLERS.contains(&normalized)
    }

    /// Whether a normalized word can act as a discourse filler (`like`, `so`, `well`).
    pub fn is_discourse_filler(&self, normalized: &str) -> bool {
        DISCOURSE_FILLERS.contains(&normalized)
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::standard()
    }
}
