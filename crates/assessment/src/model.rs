use serde::{Deserialize, Serialize};

/// Axis-aligned box in source-image pixel coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// A word the student was supposed to read, as extracted by OCR.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpectedWord {
    pub text: String,
    #[serde(default)]
    pub bounding_box: BoundingBox,
}

impl ExpectedWord {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bounding_box: BoundingBox::default(),
        }
    }
}

/// A word transcribed from the student's recording.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpokenWord {
    pub text: String,
    /// Seconds from the start of the recording.
    pub start_time: f64,
    /// Seconds from the start of the recording.
    pub end_time: f64,
    #[serde(default = "default_confidence")]
    pub confidence: f64,
}

fn default_confidence() -> f64 {
    1.0
}

impl SpokenWord {
    pub fn new(text: impl Into<String>, start_time: f64, end_time: f64, confidence: f64) -> Self {
        Self {
            text: text.into(),
            start_time,
            end_time,
            confidence,
        }
    }
}

/// Outcome for a single expected word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WordStatus {
    Correct,
    Misread,
    Substituted,
    Skipped,
}

/// One expected word of the detected passage together with what was heard for it.
///
/// `spoken` is `None` exactly when `status` is [`WordStatus::Skipped`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignedWord {
    pub expected: String,
    pub spoken: Option<String>,
    pub status: WordStatus,
    pub start_time: f64,
    pub end_time: f64,
    pub confidence: f64,
    pub hesitation: bool,
    /// Silence before the spoken word, in seconds.
    pub pause_duration: f64,
    pub is_repeat: bool,
    pub is_self_correction: bool,
    pub bounding_box: BoundingBox,
}

impl AlignedWord {
    pub(crate) fn skipped(expected: &ExpectedWord) -> Self {
        Self {
            expected: expected.text.clone(),
            spoken: None,
            status: WordStatus::Skipped,
            start_time: 0.0,
            end_time: 0.0,
            confidence: 0.0,
            hesitation: false,
            pause_duration: 0.0,
            is_repeat: false,
            is_self_correction: false,
            bounding_box: expected.bounding_box,
        }
    }
}

/// Inclusive index range into the OCR word list that the student was reading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassageRange {
    pub first_index: usize,
    pub last_index: usize,
    /// Spoken words that matched inside the range; 0 when detection fell back
    /// to the full OCR list.
    pub matched_count: usize,
}

/// Alignment output plus aggregate counts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchingResult {
    pub passage: PassageRange,
    pub words: Vec<AlignedWord>,
    pub correct_count: usize,
    /// Misread plus substituted words. Skips are counted separately.
    pub error_count: usize,
    pub skip_count: usize,
    pub substitution_count: usize,
    pub misread_count: usize,
    pub hesitation_count: usize,
    pub filler_word_count: usize,
    pub repeat_count: usize,
    pub self_correction_count: usize,
}

impl MatchingResult {
    pub fn total_words(&self) -> usize {
        self.words.len()
    }

    /// Words that were attempted aloud, right or wrong.
    pub fn attempted_count(&self) -> usize {
        self.correct_count + self.misread_count + self.substitution_count
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProsodyGrade {
    Excellent,
    Proficient,
    Developing,
    #[serde(rename = "Needs Support")]
    NeedsSupport,
}

impl std::fmt::Display for ProsodyGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProsodyGrade::Excellent => write!(f, "Excellent"),
            ProsodyGrade::Proficient => write!(f, "Proficient"),
            ProsodyGrade::Developing => write!(f, "Developing"),
            ProsodyGrade::NeedsSupport => write!(f, "Needs Support"),
        }
    }
}

/// Used to frame referral language in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Excellent,
    Mild,
    Moderate,
    Significant,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Excellent => write!(f, "excellent"),
            Severity::Mild => write!(f, "mild"),
            Severity::Moderate => write!(f, "moderate"),
            Severity::Significant => write!(f, "significant"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Whole percent, 0-100.
    pub accuracy: u32,
    pub words_per_minute: u32,
    /// 0.0-4.0, one decimal place.
    pub prosody_score: f64,
    pub prosody_grade: ProsodyGrade,
    pub total_words: usize,
    pub correct_count: usize,
    pub error_count: usize,
    pub skip_count: usize,
}

/// Category of a recurring reading mistake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternType {
    InitialSound,
    FinalSound,
    VisualSimilarity,
    Substitution,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternExample {
    pub expected: String,
    pub spoken: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorPattern {
    #[serde(rename = "type")]
    pub pattern_type: PatternType,
    pub description: String,
    pub examples: Vec<PatternExample>,
    pub count: usize,
}
