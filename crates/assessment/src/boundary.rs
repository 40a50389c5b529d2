//! Finds the stretch of OCR text the student was actually reading.
//!
//! A photographed page often carries headings, captions or a neighbouring
//! passage, and students may start or stop mid-passage. Every OCR offset is
//! tried as a starting point and the spoken words are chained forward through
//! the OCR list; the best-scoring chain decides the range.

use tracing::{debug, warn};

use crate::config::AssessmentConfig;
use crate::model::PassageRange;
use crate::similarity::{SimilarityScorer, WordForm};

#[derive(Debug, Clone, Copy)]
struct Candidate {
    score: f64,
    matched: usize,
    first: usize,
    last: usize,
}

/// Returns the inclusive OCR range the spoken words line up with, or the
/// full range with `matched_count == 0` when no start offset yields at least
/// `boundary_min_matches` matches.
///
/// `ocr` must not be empty.
pub fn detect_passage(
    scorer: &SimilarityScorer,
    config: &AssessmentConfig,
    ocr: &[WordForm],
    spoken: &[WordForm],
) -> PassageRange {
    let n = ocr.len();
    let m = spoken.len();
    let fallback = PassageRange {
        first_index: 0,
        last_index: n.saturating_sub(1),
        matched_count: 0,
    };
    if n == 0 || m == 0 {
        return fallback;
    }

    let matrix: Vec<f64> = spoken
        .iter()
        .flat_map(|s| ocr.iter().map(move |o| (s, o)))
        .map(|(s, o)| scorer.score(s, o))
        .collect();

    let mut best: Option<Candidate> = None;
    for start in 0..n {
        let Some(candidate) = chain_from(start, &matrix, m, n, config) else {
            continue;
        };
        if candidate.matched < config.boundary_min_matches {
            continue;
        }
        if best.is_none_or(|b| candidate.score > b.score) {
            best = Some(candidate);
        }
    }

    match best {
        Some(c) => {
            debug!(
                first = c.first,
                last = c.last,
                matched = c.matched,
                score = c.score,
                "Passage boundary detected"
            );
            PassageRange {
                first_index: c.first,
                last_index: c.last,
                matched_count: c.matched,
            }
        }
        None => {
            warn!(
                ocr_words = n,
                spoken_words = m,
                "No passage boundary found, using full OCR range"
            );
            fallback
        }
    }
}

/// Greedy forward chain of spoken words through OCR words from `start`.
fn chain_from(
    start: usize,
    matrix: &[f64],
    m: usize,
    n: usize,
    config: &AssessmentConfig,
) -> Option<Candidate> {
    // Beyond this many jumped OCR words no match can beat skipping the spoken word.
    // Without a jump penalty every remaining OCR word stays in reach.
    let max_jump = if config.boundary_skip_ocr_penalty > 0.0 {
        ((1.0 + config.boundary_skip_spoken_penalty) / config.boundary_skip_ocr_penalty).ceil()
            as usize
    } else {
        n
    };

    let mut score = 0.0;
    let mut matched = 0;
    let mut first: Option<usize> = None;
    let mut last: Option<usize> = None;

    for i in 0..m {
        let floor = last.map_or(start, |l| l + 1);
        if floor >= n {
            score -= config.boundary_skip_spoken_penalty;
            continue;
        }

        let row = &matrix[i * n..(i + 1) * n];
        let mut best_match: Option<(f64, usize)> = None;
        let window_end = n.min(floor.saturating_add(max_jump).saturating_add(1));
        for (o, &sim) in row.iter().enumerate().take(window_end).skip(floor) {
            if sim < config.boundary_match_threshold {
                continue;
            }
            let jumped = (o - floor) as f64;
            let candidate = score + sim - jumped * config.boundary_skip_ocr_penalty;
            if best_match.is_none_or(|(b, _)| candidate > b) {
                best_match = Some((candidate, o));
            }
        }

        let skip_spoken = score - config.boundary_skip_spoken_penalty;
        match best_match {
            Some((candidate, o)) if candidate >= skip_spoken => {
                score = candidate;
                matched += 1;
                first.get_or_insert(o);
                last = Some(o);
            }
            _ => score = skip_spoken,
        }
    }

    Some(Candidate {
        score,
        matched,
        first: first?,
        last: last?,
    })
}
