//! Filler filtering and per-word disfluency flags over the spoken sequence.
//!
//! Runs independently of the alignment: flags are indexed by position in the
//! filler-filtered spoken list and attached to aligned words afterwards.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::config::AssessmentConfig;
use crate::model::SpokenWord;
use crate::normalize::shares_prefix;
use crate::similarity::{SimilarityScorer, WordForm};

/// Prefix length two words must share to count as the same word repeated.
const REPEAT_PREFIX_LEN: usize = 3;
/// Prefix length a revision must share with the word it replaces.
const REVISION_PREFIX_LEN: usize = 2;
/// Longest fragment treated as an abandoned start (`ca` before `cat`).
const FRAGMENT_MAX_LEN: usize = 3;
/// Similarity band for a revision that shares a prefix.
const REVISION_SIMILARITY_MIN: f64 = 0.4;
/// Similarity band for a rapid restart.
const QUICK_RESTART_SIMILARITY: (f64, f64) = (0.3, 0.7);

/// How a self-correction was recognized. Checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelfCorrectionKind {
    /// A short fragment that the next word completes.
    AbandonedPrefix,
    /// A near miss revised into a similar word with the same opening.
    PrefixRevision,
    /// A partial match restarted almost immediately.
    QuickRestart,
}

/// Disfluency markers for one filtered spoken word.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DisfluencyFlags {
    /// Silence since the previous filtered word, in seconds (never negative).
    pub pause: f64,
    pub hesitation: bool,
    pub is_repeat: bool,
    pub self_correction: Option<SelfCorrectionKind>,
}

/// Spoken words with fillers removed.
#[derive(Debug, Clone, Default)]
pub struct FilteredSpeech {
    pub words: Vec<SpokenWord>,
    pub forms: Vec<WordForm>,
    pub filler_count: usize,
}

/// Drops fillers from the transcript.
///
/// Vocal fillers (`um`, `uh`, ...) always go. Discourse fillers (`like`,
/// `so`, `well`) only go when the passage itself does not contain the word,
/// since a student reading "so" aloud from the page is not filling.
pub fn filter_fillers(
    scorer: &SimilarityScorer,
    spoken: &[SpokenWord],
    spoken_forms: &[WordForm],
    passage_words: &HashSet<&str>,
) -> FilteredSpeech {
    let lexicon = scorer.lexicon();
    let mut filtered = FilteredSpeech::default();

    for (word, form) in spoken.iter().zip(spoken_forms) {
        let normalized = form.normalized();
        let is_filler = lexicon.is_hesitation_filler(normalized)
            || (lexicon.is_discourse_filler(normalized) && !passage_words.contains(normalized));
        if is_filler {
            filtered.filler_count += 1;
        } else {
            filtered.words.push(word.clone());
            filtered.forms.push(form.clone());
        }
    }
    filtered
}

/// Flags hesitations, repeats and self-corrections on filtered speech.
///
/// For any index a repeat rules out a self-correction, and a self-correction
/// rules out a hesitation, so one event is never counted twice.
pub fn detect_disfluencies(
    scorer: &SimilarityScorer,
    config: &AssessmentConfig,
    speech: &FilteredSpeech,
) -> Vec<DisfluencyFlags> {
    let words = &speech.words;
    let forms = &speech.forms;
    let mut flags = vec![DisfluencyFlags::default(); words.len()];

    for i in 1..words.len() {
        let gap = words[i].start_time - words[i - 1].end_time;
        let pause = gap.max(0.0);
        let (prev, curr) = (&forms[i - 1], &forms[i]);
        let similarity = scorer.score(prev, curr);

        let flag = &mut flags[i];
        flag.pause = pause;
        flag.is_repeat = is_repeat(prev, curr, similarity, config);
        if !flag.is_repeat {
            flag.self_correction = self_correction(prev, curr, similarity, gap, config);
        }
        flag.hesitation =
            flag.self_correction.is_none() && pause > config.hesitation_threshold_secs;
    }
    flags
}

fn is_repeat(prev: &WordForm, curr: &WordForm, similarity: f64, config: &AssessmentConfig) -> bool {
    if prev.is_empty() || curr.is_empty() {
        return false;
    }
    prev.normalized() == curr.normalized()
        || (similarity >= config.repeat_similarity
            && shares_prefix(prev.normalized(), curr.normalized(), REPEAT_PREFIX_LEN))
}

fn self_correction(
    prev: &WordForm,
    curr: &WordForm,
    similarity: f64,
    gap: f64,
    config: &AssessmentConfig,
) -> Option<SelfCorrectionKind> {
    let (p, c) = (prev.normalized(), curr.normalized());
    if p.is_empty() || c.is_empty() {
        return None;
    }

    if p.len() <= FRAGMENT_MAX_LEN && c.len() > p.len() && c.starts_with(p) {
        return Some(SelfCorrectionKind::AbandonedPrefix);
    }
    if (REVISION_SIMILARITY_MIN..config.repeat_similarity).contains(&similarity)
        && shares_prefix(p, c, REVISION_PREFIX_LEN)
    {
        return Some(SelfCorrectionKind::PrefixRevision);
    }
    let (low, high) = QUICK_RESTART_SIMILARITY;
    if gap < config.quick_succession_secs && (low..high).contains(&similarity) {
        return Some(SelfCorrectionKind::QuickRestart);
    }
    None
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::lexicon::Lexicon;

    fn scorer() -> SimilarityScorer {
        SimilarityScorer::new(Arc::new(Lexicon::standard()))
    }

    fn speech(words: &[(&str, f64, f64)]) -> FilteredSpeech {
        FilteredSpeech {
            words: words
                .iter()
                .map(|(t, s, e)| SpokenWord::new(*t, *s, *e, 0.9))
                .collect(),
            forms: words.iter().map(|(t, _, _)| WordForm::new(t)).collect(),
            filler_count: 0,
        }
    }

    fn flags_for(words: &[(&str, f64, f64)]) -> Vec<DisfluencyFlags> {
        detect_disfluencies(&scorer(), &AssessmentConfig::default(), &speech(words))
    }

    #[test]
    fn test_filter_fillers() {
        let raw = speech(&[
            ("um", 0.0, 0.2),
            ("the", 0.3, 0.5),
            ("like", 0.6, 0.8),
            ("cat", 0.9, 1.1),
            ("uh", 1.2, 1.3),
        ]);
        let passage: HashSet<&str> = ["the", "cat"].into_iter().collect();
        let filtered = filter_fillers(&scorer(), &raw.words, &raw.forms, &passage);
        assert_eq!(filtered.filler_count, 3);
        let texts: Vec<&str> = filtered.words.iter().map(|w| w.text.as_str()).collect();
        assert_eq!(texts, vec!["the", "cat"]);
    }

    #[test]
    fn test_discourse_filler_kept_when_in_passage() {
        let raw = speech(&[("so", 0.0, 0.2), ("we", 0.3, 0.5), ("went", 0.6, 0.8)]);
        let passage: HashSet<&str> = ["so", "we", "went"].into_iter().collect();
        let filtered = filter_fillers(&scorer(), &raw.words, &raw.forms, &passage);
        assert_eq!(filtered.filler_count, 0);
        assert_eq!(filtered.words.len(), 3);
    }

    #[test]
    fn test_hesitation_after_long_pause() {
        let flags = flags_for(&[("The", 0.0, 0.3), ("dog", 1.2, 1.5)]);
        assert!(!flags[0].hesitation);
        assert!(flags[1].hesitation);
        assert!((flags[1].pause - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_short_pause_is_not_hesitation() {
        let flags = flags_for(&[("The", 0.0, 0.3), ("dog", 0.6, 0.9)]);
        assert!(!flags[1].hesitation);
    }

    #[test]
    fn test_repeat_marks_later_occurrence() {
        let flags = flags_for(&[("the", 0.0, 0.2), ("the", 0.2, 0.4), ("cat", 0.4, 0.7)]);
        assert!(!flags[0].is_repeat);
        assert!(flags[1].is_repeat);
        assert!(!flags[2].is_repeat);
        assert_eq!(flags[1].self_correction, None);
    }

    #[test]
    fn test_near_repeat_with_shared_prefix() {
        // 0.6 + 0.35 * 6/7 > 0.85
        let flags = flags_for(&[("jumped", 0.0, 0.3), ("jumpedd", 0.3, 0.6)]);
        assert!(flags[1].is_repeat);
    }

    #[test]
    fn test_abandoned_prefix() {
        let flags = flags_for(&[("ca", 0.0, 0.2), ("cat", 0.5, 0.8)]);
        assert_eq!(
            flags[1].self_correction,
            Some(SelfCorrectionKind::AbandonedPrefix)
        );
    }

    #[test]
    fn test_prefix_revision() {
        // "hose" -> "house": edit distance 1 of 5
        let flags = flags_for(&[("hose", 0.0, 0.3), ("house", 0.4, 0.7)]);
        assert_eq!(
            flags[1].self_correction,
            Some(SelfCorrectionKind::PrefixRevision)
        );
    }

    #[test]
    fn test_quick_restart() {
        // "dig" -> "bag": 1 - 2/3 + 0.1, said back to back
        let flags = flags_for(&[("dig", 0.0, 0.3), ("bag", 0.35, 0.6)]);
        assert_eq!(flags[1].self_correction, Some(SelfCorrectionKind::QuickRestart));
    }

    #[test]
    fn test_self_correction_suppresses_hesitation() {
        let flags = flags_for(&[("ca", 0.0, 0.2), ("cat", 1.0, 1.3)]);
        assert!(flags[1].self_correction.is_some());
        assert!(!flags[1].hesitation);
        assert!((flags[1].pause - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_overlapping_timestamps_clamp_pause() {
        let flags = flags_for(&[("a", 0.0, 0.5), ("dog", 0.4, 0.7)]);
        assert_eq!(flags[1].pause, 0.0);
        assert!(!flags[1].hesitation);
    }
}
