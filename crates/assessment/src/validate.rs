use crate::error::{AssessmentError, AssessmentResult};
use crate::model::SpokenWord;

/// Checks that a transcript is well formed before it reaches the engine.
///
/// Times must be finite and non-negative with `start <= end`, starts must not
/// go backwards, and confidence must lie in `[0, 1]`.
pub fn validate_spoken(words: &[SpokenWord]) -> AssessmentResult<()> {
    let mut previous_start = 0.0;
    for (index, word) in words.iter().enumerate() {
        if !word.start_time.is_finite() || !word.end_time.is_finite() {
            return Err(AssessmentError::InvalidTiming {
                index,
                reason: "timestamp is not a finite number".to_string(),
            });
        }
        if word.start_time < 0.0 {
            return Err(AssessmentError::InvalidTiming {
                index,
                reason: format!("negative start time {}", word.start_time),
            });
        }
        if word.end_time < word.start_time {
            return Err(AssessmentError::InvalidTiming {
                index,
                reason: format!(
                    "end time {} precedes start time {}",
                    word.end_time, word.start_time
                ),
            });
        }
        if !(0.0..=1.0).contains(&word.confidence) {
            return Err(AssessmentError::InvalidConfidence {
                index,
                value: word.confidence,
            });
        }
        if word.start_time < previous_start {
            return Err(AssessmentError::NonMonotonic { index });
        }
        previous_start = word.start_time;
    }
    Ok(())
}
