use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, info};

use crate::alignment;
use crate::boundary::detect_passage;
use crate::config::AssessmentConfig;
use crate::disfluency::{FilteredSpeech, detect_disfluencies, filter_fillers};
use crate::error::AssessmentResult;
use crate::lexicon::Lexicon;
use crate::metrics::{self, audio_duration, classify_severity};
use crate::model::{
    AlignedWord, ErrorPattern, ExpectedWord, MatchingResult, Metrics, SpokenWord, WordStatus,
};
use crate::normalize::ends_with_pause_punctuation;
use crate::patterns;
use crate::report::{AssessmentReport, Insights};
use crate::similarity::{SimilarityScorer, WordForm};
use crate::validate::validate_spoken;
use crate::wer::word_error_rate_words;

/// Scores one oral reading of a passage.
///
/// The engine holds no per-assessment state; one instance can be shared via
/// `Arc` and used from several threads at once.
#[derive(Debug, Clone)]
pub struct AssessmentEngine {
    config: AssessmentConfig,
    scorer: SimilarityScorer,
}

impl AssessmentEngine {
    pub fn new(config: AssessmentConfig, lexicon: Arc<Lexicon>) -> Self {
        debug!(homophones = lexicon.len(), "Assessment engine created");
        Self {
            config,
            scorer: SimilarityScorer::new(lexicon),
        }
    }

    pub fn config(&self) -> &AssessmentConfig {
        &self.config
    }

    pub fn scorer(&self) -> &SimilarityScorer {
        &self.scorer
    }

    /// Finds the passage that was read and classifies every expected word in it.
    ///
    /// Returns an empty result when either input is empty. Inputs are assumed
    /// valid; use [`AssessmentEngine::assess`] for untrusted transcripts.
    pub fn detect_and_align(&self, ocr: &[ExpectedWord], spoken: &[SpokenWord]) -> MatchingResult {
        self.align_passage(ocr, spoken).0
    }

    pub fn compute_metrics(&self, result: &MatchingResult, audio_duration: f64) -> Metrics {
        metrics::compute_metrics(result, audio_duration)
    }

    pub fn analyze_error_patterns(&self, words: &[AlignedWord]) -> Vec<ErrorPattern> {
        patterns::analyze_error_patterns(words, self.config.max_pattern_examples)
    }

    /// Validates the transcript, then runs the full pipeline into a report.
    pub fn assess(
        &self,
        ocr: &[ExpectedWord],
        spoken: &[SpokenWord],
    ) -> AssessmentResult<AssessmentReport> {
        validate_spoken(spoken)?;

        let (result, speech) = self.align_passage(ocr, spoken);
        let metrics = self.compute_metrics(&result, audio_duration(spoken));
        let severity = classify_severity(&metrics);
        let error_patterns = self.analyze_error_patterns(&result.words);

        let reference: Vec<String> = result
            .words
            .iter()
            .map(|w| WordForm::new(&w.expected))
            .filter(|f| !f.is_empty())
            .map(|f| f.normalized().to_string())
            .collect();
        let hypothesis: Vec<String> = speech
            .forms
            .iter()
            .filter(|f| !f.is_empty())
            .map(|f| f.normalized().to_string())
            .collect();
        let word_error_rate = word_error_rate_words(&reference, &hypothesis);
        let insights = Insights::from_words(&result.words);

        info!(
            words = result.total_words(),
            accuracy = metrics.accuracy,
            wpm = metrics.words_per_minute,
            prosody = metrics.prosody_score,
            grade = %metrics.prosody_grade,
            %severity,
            "Assessment complete"
        );

        Ok(AssessmentReport {
            result,
            metrics,
            severity,
            error_patterns,
            word_error_rate,
            insights,
        })
    }

    fn align_passage(
        &self,
        ocr: &[ExpectedWord],
        spoken: &[SpokenWord],
    ) -> (MatchingResult, FilteredSpeech) {
        if ocr.is_empty() || spoken.is_empty() {
            debug!(
                ocr_words = ocr.len(),
                spoken_words = spoken.len(),
                "Nothing to align"
            );
            return (MatchingResult::default(), FilteredSpeech::default());
        }

        let ocr_forms: Vec<WordForm> = ocr.iter().map(|w| WordForm::new(&w.text)).collect();
        let spoken_forms: Vec<WordForm> = spoken.iter().map(|w| WordForm::new(&w.text)).collect();

        let passage = detect_passage(&self.scorer, &self.config, &ocr_forms, &spoken_forms);
        let range = passage.first_index..=passage.last_index;
        let expected = &ocr[range.clone()];
        let expected_forms = &ocr_forms[range];

        let passage_words: HashSet<&str> = expected_forms.iter().map(|f| f.normalized()).collect();
        let speech = filter_fillers(&self.scorer, spoken, &spoken_forms, &passage_words);
        let flags = detect_disfluencies(&self.scorer, &self.config, &speech);

        let alignment = alignment::align(&self.scorer, &self.config, expected_forms, &speech.forms);
        let pause_punctuated: Vec<bool> = (passage.first_index..=passage.last_index)
            .map(|idx| idx > 0 && ends_with_pause_punctuation(&ocr[idx - 1].text))
            .collect();
        let words = alignment::assemble(
            &alignment,
            expected,
            &speech.words,
            &flags,
            &pause_punctuated,
        );

        let mut result = MatchingResult {
            passage,
            filler_word_count: speech.filler_count,
            repeat_count: flags.iter().filter(|f| f.is_repeat).count(),
            self_correction_count: flags.iter().filter(|f| f.self_correction.is_some()).count(),
            ..Default::default()
        };
        for word in &words {
            match word.status {
                WordStatus::Correct => result.correct_count += 1,
                WordStatus::Misread => result.misread_count += 1,
                WordStatus::Substituted => result.substitution_count += 1,
                WordStatus::Skipped => result.skip_count += 1,
            }
            if word.hesitation {
                result.hesitation_count += 1;
            }
        }
        result.error_count = result.misread_count + result.substitution_count;
        result.words = words;

        debug!(
            first = passage.first_index,
            last = passage.last_index,
            correct = result.correct_count,
            misread = result.misread_count,
            substituted = result.substitution_count,
            skipped = result.skip_count,
            fillers = result.filler_word_count,
            repeats = result.repeat_count,
            "Alignment finished"
        );

        (result, speech)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> AssessmentEngine {
        AssessmentEngine::new(AssessmentConfig::default(), Arc::new(Lexicon::standard()))
    }

    fn expected(words: &[&str]) -> Vec<ExpectedWord> {
        words.iter().map(|w| ExpectedWord::new(*w)).collect()
    }

    fn spoken(words: &[(&str, f64, f64)]) -> Vec<SpokenWord> {
        words
            .iter()
            .map(|(t, s, e)| SpokenWord::new(*t, *s, *e, 0.9))
            .collect()
    }

    #[test]
    fn test_empty_inputs() {
        let engine = engine();
        let words = spoken(&[("the", 0.0, 0.3)]);
        assert_eq!(engine.detect_and_align(&[], &words), MatchingResult::default());
        assert_eq!(
            engine.detect_and_align(&expected(&["The"]), &[]),
            MatchingResult::default()
        );
    }

    #[test]
    fn test_only_fillers_skips_everything() {
        let engine = engine();
        let result = engine.detect_and_align(
            &expected(&["The", "cat"]),
            &spoken(&[("um", 0.0, 0.3), ("uh", 0.5, 0.7)]),
        );
        assert_eq!(result.skip_count, 2);
        assert_eq!(result.filler_word_count, 2);
        assert!(result.words.iter().all(|w| w.spoken.is_none()));
    }

    #[test]
    fn test_counts_add_up() {
        let engine = engine();
        let result = engine.detect_and_align(
            &expected(&["The", "little", "house", "was", "very", "old."]),
            &spoken(&[
                ("the", 0.0, 0.2),
                ("um", 0.3, 0.5),
                ("little", 0.6, 0.9),
                ("horse", 1.0, 1.3),
                ("was", 1.4, 1.6),
                ("old", 1.7, 2.0),
            ]),
        );
        assert_eq!(
            result.correct_count
                + result.misread_count
                + result.substitution_count
                + result.skip_count,
            result.words.len()
        );
        assert_eq!(result.words[2].status, WordStatus::Misread);
        assert_eq!(result.words[4].status, WordStatus::Skipped);
        assert_eq!(result.filler_word_count, 1);
        assert_eq!(result.error_count, result.misread_count + result.substitution_count);
    }

    #[test]
    fn test_contraction_heard_without_apostrophe_is_correct() {
        let engine = engine();
        let result = engine.detect_and_align(
            &expected(&["I", "don't", "know"]),
            &spoken(&[("i", 0.0, 0.2), ("dont", 0.5, 0.8), ("know", 1.1, 1.4)]),
        );
        assert_eq!(
            result.words.iter().map(|w| w.status).collect::<Vec<_>>(),
            vec![WordStatus::Correct; 3]
        );
        assert_eq!(result.error_count, 0);
    }

    #[test]
    fn test_pause_before_inserted_word_counts_as_hesitation() {
        let engine = engine();
        let result = engine.detect_and_align(
            &expected(&["The", "cat", "sat"]),
            &spoken(&[
                ("the", 0.0, 0.3),
                ("xylophone", 1.2, 1.6),
                ("cat", 1.7, 2.0),
                ("sat", 2.1, 2.4),
            ]),
        );
        assert_eq!(result.correct_count, 3);
        assert!(result.words[1].hesitation);
        assert!((result.words[1].pause_duration - 0.9).abs() < 1e-9);
        assert_eq!(result.hesitation_count, 1);
    }

    #[test]
    fn test_assess_rejects_invalid_transcript() {
        let engine = engine();
        let bad = vec![SpokenWord::new("the", 0.0, 0.3, 2.0)];
        assert!(engine.assess(&expected(&["The"]), &bad).is_err());
    }

    #[test]
    fn test_assess_report() {
        let engine = engine();
        let report = engine
            .assess(
                &expected(&["The", "garden", "was", "quiet"]),
                &spoken(&[
                    ("the", 0.0, 0.3),
                    ("garden", 0.4, 0.8),
                    ("was", 0.9, 1.1),
                    ("quiet", 1.2, 1.6),
                ]),
            )
            .unwrap();
        assert_eq!(report.metrics.accuracy, 100);
        assert_eq!(report.result.passage.first_index, 0);
        assert_eq!(report.result.passage.last_index, 3);
        assert!((report.word_error_rate.rate - 0.0).abs() < 1e-9);
        assert_eq!(report.insights.strengths, vec!["garden", "quiet"]);
        assert!(report.error_patterns.is_empty());
    }
}
