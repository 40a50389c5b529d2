//! Accuracy, reading rate and the weighted prosody score.

use serde::{Deserialize, Serialize};

use crate::model::{MatchingResult, Metrics, ProsodyGrade, Severity, SpokenWord};

const ACCURACY_WEIGHT: f64 = 0.35;
const RATE_WEIGHT: f64 = 0.25;
const FLUENCY_WEIGHT: f64 = 0.25;
const SMOOTHNESS_WEIGHT: f64 = 0.15;

/// Target words-per-minute band for a fluent reader.
const FLUENT_WPM: (u32, u32) = (100, 180);
/// Error rate at or below which errors count as minimal.
const MINIMAL_ERROR_RATE: f64 = 0.02;

/// The four inputs to the prosody score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProsodyInputs {
    /// Whole percent, 0-100, as reported in [`Metrics::accuracy`].
    pub accuracy: f64,
    /// Whole words per minute, as reported in [`Metrics::words_per_minute`].
    pub words_per_minute: f64,
    /// Fraction of words read in error, 0-1.
    pub error_rate: f64,
    /// Hesitations, fillers and repeats per word, 0-1 (may exceed 1).
    pub disfluency_rate: f64,
}

/// Per-component points, each between 1.5 and 4.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProsodyBreakdown {
    pub accuracy: f64,
    pub rate: f64,
    pub fluency: f64,
    pub smoothness: f64,
}

impl ProsodyBreakdown {
    pub fn from_inputs(inputs: &ProsodyInputs) -> Self {
        Self {
            accuracy: accuracy_points(inputs.accuracy),
            rate: rate_points(inputs.words_per_minute),
            fluency: fluency_points(inputs.error_rate),
            smoothness: smoothness_points(inputs.disfluency_rate),
        }
    }

    /// Weighted 0-4 score rounded to one decimal place.
    pub fn score(&self) -> f64 {
        let weighted = self.accuracy * ACCURACY_WEIGHT
            + self.rate * RATE_WEIGHT
            + self.fluency * FLUENCY_WEIGHT
            + self.smoothness * SMOOTHNESS_WEIGHT;
        (weighted * 10.0).round() / 10.0
    }
}

fn accuracy_points(accuracy: f64) -> f64 {
    match accuracy {
        a if a >= 98.0 => 4.0,
        a if a >= 95.0 => 3.5,
        a if a >= 90.0 => 3.0,
        a if a >= 85.0 => 2.5,
        a if a >= 75.0 => 2.0,
        _ => 1.5,
    }
}

fn rate_points(wpm: f64) -> f64 {
    match wpm {
        w if (100.0..=180.0).contains(&w) => 4.0,
        w if (80.0..=200.0).contains(&w) => 3.5,
        w if (60.0..=220.0).contains(&w) => 3.0,
        _ => 2.0,
    }
}

fn fluency_points(error_rate: f64) -> f64 {
    match error_rate {
        r if r <= 0.02 => 4.0,
        r if r <= 0.05 => 3.5,
        r if r <= 0.10 => 3.0,
        r if r <= 0.20 => 2.5,
        _ => 2.0,
    }
}

fn smoothness_points(disfluency_rate: f64) -> f64 {
    match disfluency_rate {
        r if r <= 0.02 => 4.0,
        r if r <= 0.05 => 3.5,
        r if r <= 0.10 => 3.0,
        r if r <= 0.20 => 2.5,
        r if r <= 0.30 => 2.0,
        _ => 1.5,
    }
}

pub fn prosody_grade(score: f64) -> ProsodyGrade {
    if score >= 3.8 {
        ProsodyGrade::Excellent
    } else if score >= 3.0 {
        ProsodyGrade::Proficient
    } else if score >= 2.0 {
        ProsodyGrade::Developing
    } else {
        ProsodyGrade::NeedsSupport
    }
}

/// Recording length as the end of the last spoken word.
pub fn audio_duration(spoken: &[SpokenWord]) -> f64 {
    spoken.last().map_or(0.0, |w| w.end_time)
}

/// Prosody inputs for a result over `audio_duration` seconds.
///
/// Accuracy and rate are rounded first so the components are bucketed on
/// the same numbers the metrics report.
pub fn prosody_inputs(result: &MatchingResult, audio_duration: f64) -> ProsodyInputs {
    let total = result.total_words();
    let rate = |count: usize| {
        if total == 0 {
            0.0
        } else {
            count as f64 / total as f64
        }
    };
    let accuracy = if total == 0 {
        0.0
    } else {
        (result.correct_count as f64 * 100.0 / total as f64).round()
    };
    let words_per_minute = if audio_duration > 0.0 {
        (result.attempted_count() as f64 / (audio_duration / 60.0)).round()
    } else {
        0.0
    };

    ProsodyInputs {
        accuracy,
        words_per_minute,
        error_rate: rate(result.error_count),
        disfluency_rate: rate(
            result.hesitation_count + result.filler_word_count + result.repeat_count,
        ),
    }
}

pub fn compute_metrics(result: &MatchingResult, audio_duration: f64) -> Metrics {
    let inputs = prosody_inputs(result, audio_duration);
    let prosody_score = ProsodyBreakdown::from_inputs(&inputs).score();

    Metrics {
        accuracy: inputs.accuracy as u32,
        words_per_minute: inputs.words_per_minute as u32,
        prosody_score,
        prosody_grade: prosody_grade(prosody_score),
        total_words: result.total_words(),
        correct_count: result.correct_count,
        error_count: result.error_count,
        skip_count: result.skip_count,
    }
}

/// Referral framing for a set of metrics.
pub fn classify_severity(metrics: &Metrics) -> Severity {
    let error_rate = if metrics.total_words == 0 {
        0.0
    } else {
        metrics.error_count as f64 / metrics.total_words as f64
    };
    let (low, high) = FLUENT_WPM;
    let fluent_rate = (low..=high).contains(&metrics.words_per_minute);

    if metrics.accuracy >= 98 && fluent_rate && error_rate <= MINIMAL_ERROR_RATE {
        Severity::Excellent
    } else if metrics.accuracy >= 93 {
        Severity::Mild
    } else if metrics.accuracy >= 85 {
        Severity::Moderate
    } else {
        Severity::Significant
    }
}
