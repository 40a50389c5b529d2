use std::fmt::Write as _;

use clap::ValueEnum;
use readalong_assessment::{AssessmentReport, WordStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

pub fn render(report: &AssessmentReport, format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(report)?,
        OutputFormat::Text => render_text(report),
    })
}

/// Human-readable summary for the terminal.
pub fn render_text(report: &AssessmentReport) -> String {
    let metrics = &report.metrics;
    let result = &report.result;
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Passage: OCR words {}-{} ({} words)",
        result.passage.first_index, result.passage.last_index, metrics.total_words
    );
    let _ = writeln!(
        out,
        "Accuracy {}%  |  {} wpm  |  prosody {:.1} ({})  |  severity {}",
        metrics.accuracy,
        metrics.words_per_minute,
        metrics.prosody_score,
        metrics.prosody_grade,
        report.severity
    );
    let _ = writeln!(
        out,
        "Correct {}, misread {}, substituted {}, skipped {}",
        result.correct_count, result.misread_count, result.substitution_count, result.skip_count
    );
    let _ = writeln!(
        out,
        "Hesitations {}, fillers {}, repeats {}, self-corrections {}",
        result.hesitation_count,
        result.filler_word_count,
        result.repeat_count,
        result.self_correction_count
    );
    let _ = writeln!(out, "Transcript WER {:.2}", report.word_error_rate.rate);

    let mistakes: Vec<String> = result
        .words
        .iter()
        .filter(|w| w.status != WordStatus::Correct)
        .map(|w| match (&w.status, &w.spoken) {
            (WordStatus::Skipped, _) | (_, None) => format!("{} (skipped)", w.expected),
            (_, Some(spoken)) => format!("{} -> {}", w.expected, spoken),
        })
        .collect();
    if !mistakes.is_empty() {
        let _ = writeln!(out, "Mistakes: {}", mistakes.join(", "));
    }

    for pattern in &report.error_patterns {
        let _ = writeln!(out, "  [{}x] {}", pattern.count, pattern.description);
    }
    if !report.insights.strengths.is_empty() {
        let _ = writeln!(out, "Strengths: {}", report.insights.strengths.join(", "));
    }
    out
}
