//! Dynamic-programming alignment of expected words against spoken words.
//!
//! Each cell `(i, j)` holds the best score for aligning the first `i`
//! expected words with the first `j` spoken words. A cell is entered by a
//! match (diagonal), by skipping an expected word (down) or by an extra
//! spoken word (right). Candidates are compared in that order with a strict
//! `>`, so ties resolve to match, then skip, then extra.

use crate::config::AssessmentConfig;
use crate::disfluency::DisfluencyFlags;
use crate::model::{AlignedWord, ExpectedWord, SpokenWord, WordStatus};
use crate::similarity::{SimilarityScorer, WordForm};

const CORRECT_REWARD: f64 = 1.0;
const MISREAD_REWARD: f64 = 0.5;
const SUBSTITUTION_REWARD: f64 = 0.2;
const MISMATCH_PENALTY: f64 = -0.5;
const SKIP_PENALTY: f64 = -1.0;
const EXTRA_PENALTY: f64 = -0.3;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Move {
    Match(WordStatus),
    Skip,
    Extra,
}

/// One transition on the optimal path, in reading order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AlignmentStep {
    Match {
        expected: usize,
        spoken: usize,
        status: WordStatus,
    },
    Skip {
        expected: usize,
    },
    /// A spoken word with no expected counterpart; never emitted as output.
    Extra {
        spoken: usize,
    },
}

/// The optimal path and its total score.
#[derive(Debug, Clone, PartialEq)]
pub struct Alignment {
    pub steps: Vec<AlignmentStep>,
    pub score: f64,
}

/// Status and score delta for an aligned pair with the given similarity.
fn classify(similarity: f64, config: &AssessmentConfig) -> (f64, WordStatus) {
    if similarity >= config.correct_threshold {
        (CORRECT_REWARD, WordStatus::Correct)
    } else if similarity >= config.misread_threshold {
        (MISREAD_REWARD, WordStatus::Misread)
    } else if similarity >= config.substitution_threshold {
        (SUBSTITUTION_REWARD, WordStatus::Substituted)
    } else {
        (MISMATCH_PENALTY, WordStatus::Substituted)
    }
}

/// Aligns prepared expected and spoken words.
pub fn align(
    scorer: &SimilarityScorer,
    config: &AssessmentConfig,
    expected: &[WordForm],
    spoken: &[WordForm],
) -> Alignment {
    let similarities: Vec<f64> = expected
        .iter()
        .flat_map(|e| spoken.iter().map(move |s| (e, s)))
        .map(|(e, s)| scorer.score(e, s))
        .collect();
    align_scores(&similarities, expected.len(), spoken.len(), config)
}

/// Aligns from a row-major `m × n` similarity matrix (expected × spoken).
pub fn align_scores(
    similarities: &[f64],
    m: usize,
    n: usize,
    config: &AssessmentConfig,
) -> Alignment {
    debug_assert_eq!(similarities.len(), m * n);
    let width = n + 1;
    let mut dp = vec![f64::NEG_INFINITY; (m + 1) * width];
    let mut back: Vec<Option<Move>> = vec![None; (m + 1) * width];
    dp[0] = 0.0;

    for i in 0..=m {
        for j in 0..=n {
            if i == 0 && j == 0 {
                continue;
            }
            let mut best = f64::NEG_INFINITY;
            let mut step = None;

            if i > 0 && j > 0 {
                let (delta, status) = classify(similarities[(i - 1) * n + (j - 1)], config);
                let candidate = dp[(i - 1) * width + (j - 1)] + delta;
                if candidate > best {
                    best = candidate;
                    step = Some(Move::Match(status));
                }
            }
            if i > 0 {
                let candidate = dp[(i - 1) * width + j] + SKIP_PENALTY;
                if candidate > best {
                    best = candidate;
                    step = Some(Move::Skip);
                }
            }
            if j > 0 {
                let candidate = dp[i * width + (j - 1)] + EXTRA_PENALTY;
                if candidate > best {
                    best = candidate;
                    step = Some(Move::Extra);
                }
            }

            dp[i * width + j] = best;
            back[i * width + j] = step;
        }
    }

    let mut steps = Vec::with_capacity(m + n);
    let (mut i, mut j) = (m, n);
    while i > 0 || j > 0 {
        match back[i * width + j] {
            Some(Move::Match(status)) => {
                steps.push(AlignmentStep::Match {
                    expected: i - 1,
                    spoken: j - 1,
                    status,
                });
                i -= 1;
                j -= 1;
            }
            Some(Move::Skip) => {
                steps.push(AlignmentStep::Skip { expected: i - 1 });
                i -= 1;
            }
            Some(Move::Extra) => {
                steps.push(AlignmentStep::Extra { spoken: j - 1 });
                j -= 1;
            }
            None => break,
        }
    }
    steps.reverse();

    Alignment {
        steps,
        score: dp[m * width + n],
    }
}

/// Turns an alignment into one [`AlignedWord`] per expected word.
///
/// `pause_punctuated[k]` says whether the OCR word before `expected[k]` ends
/// in punctuation, in which case a pause before it is not a hesitation.
/// On an extra spoken word, repeat and self-correction flags move back to the
/// closest preceding matched word, while its pause and hesitation move forward
/// to the next matched word.
pub fn assemble(
    alignment: &Alignment,
    expected: &[ExpectedWord],
    spoken: &[SpokenWord],
    flags: &[DisfluencyFlags],
    pause_punctuated: &[bool],
) -> Vec<AlignedWord> {
    let mut words: Vec<AlignedWord> = Vec::with_capacity(expected.len());
    let mut last_matched: Option<usize> = None;
    let mut pending_pause = 0.0_f64;
    let mut pending_hesitation = false;

    for step in &alignment.steps {
        match *step {
            AlignmentStep::Extra { spoken: j } => {
                let flag = flags.get(j).copied().unwrap_or_default();
                if let Some(k) = last_matched {
                    words[k].is_repeat |= flag.is_repeat;
                    words[k].is_self_correction |= flag.self_correction.is_some();
                }
                pending_pause = pending_pause.max(flag.pause);
                pending_hesitation |= flag.hesitation;
            }
            AlignmentStep::Skip { expected: i } => {
                words.push(AlignedWord::skipped(&expected[i]));
            }
            AlignmentStep::Match {
                expected: i,
                spoken: j,
                status,
            } => {
                let flag = flags.get(j).copied().unwrap_or_default();
                let heard = &spoken[j];
                let suppressed = pause_punctuated.get(i).copied().unwrap_or(false);
                last_matched = Some(words.len());
                words.push(AlignedWord {
                    expected: expected[i].text.clone(),
                    spoken: Some(heard.text.clone()),
                    status,
                    start_time: heard.start_time,
                    end_time: heard.end_time,
                    confidence: heard.confidence,
                    hesitation: (flag.hesitation || pending_hesitation) && !suppressed,
                    pause_duration: flag.pause.max(pending_pause),
                    is_repeat: flag.is_repeat,
                    is_self_correction: flag.self_correction.is_some(),
                    bounding_box: expected[i].bounding_box,
                });
                pending_pause = 0.0;
                pending_hesitation = false;
            }
        }
    }
    words
}
