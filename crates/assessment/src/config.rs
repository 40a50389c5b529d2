use serde::{Deserialize, Serialize};

/// Tunable thresholds for the assessment engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssessmentConfig {
    /// Similarity at or above which an aligned pair counts as correct.
    pub correct_threshold: f64,
    /// Similarity at or above which an aligned pair counts as a misread.
    pub misread_threshold: f64,
    /// Similarity at or above which a substitution is still a plausible attempt.
    pub substitution_threshold: f64,
    /// Minimum similarity for a spoken word to anchor passage detection.
    pub boundary_match_threshold: f64,
    /// Matches required before a detected passage range is trusted.
    pub boundary_min_matches: usize,
    /// Boundary score penalty per OCR word jumped over.
    pub boundary_skip_ocr_penalty: f64,
    /// Boundary score penalty for a spoken word with no OCR match.
    pub boundary_skip_spoken_penalty: f64,
    /// Pause before a word (seconds) that counts as a hesitation.
    pub hesitation_threshold_secs: f64,
    /// Gap (seconds) under which two words count as a quick restart.
    pub quick_succession_secs: f64,
    /// Similarity at or above which consecutive words are a repeat.
    pub repeat_similarity: f64,
    /// Literal examples kept per error pattern.
    pub max_pattern_examples: usize,
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self {
            correct_threshold: 0.95,
            misread_threshold: 0.70,
            substitution_threshold: 0.40,
            boundary_match_threshold: 0.55,
            boundary_min_matches: 2,
            boundary_skip_ocr_penalty: 0.3,
            boundary_skip_spoken_penalty: 0.4,
            hesitation_threshold_secs: 0.5,
            quick_succession_secs: 0.2,
            repeat_similarity: 0.85,
            max_pattern_examples: 3,
        }
    }
}
