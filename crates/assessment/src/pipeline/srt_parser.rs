use std::collections::HashSet;
use std::path::Path;

use crate::error::{AssessmentError, AssessmentResult};
use crate::model::SpokenWord;

/// A single SRT subtitle cue.
#[derive(Debug, Clone)]
pub struct SrtCue {
    pub index: usize,
    pub start_secs: f64,
    pub end_secs: f64,
    pub text: String,
}

impl SrtCue {
    /// Splits the cue into words sharing its time span evenly.
    pub fn to_words(&self) -> Vec<SpokenWord> {
        let tokens: Vec<&str> = self.text.split_whitespace().collect();
        if tokens.is_empty() {
            return Vec::new();
        }
        let step = (self.end_secs - self.start_secs).max(0.0) / tokens.len() as f64;
        tokens
            .iter()
            .enumerate()
            .map(|(i, token)| {
                let start = self.start_secs + step * i as f64;
                SpokenWord::new(*token, start, start + step, 1.0)
            })
            .collect()
    }
}

/// Parses SRT content, deduplicates by (start_time, text), and sorts by time.
pub fn parse_srt_str(content: &str) -> Vec<SrtCue> {
    let mut cues = Vec::new();
    let mut lines = content.lines().peekable();

    while lines.peek().is_some() {
        // Skip blank lines
        while lines.peek().is_some_and(|l| l.trim().is_empty()) {
            lines.next();
        }

        let index: usize = match lines.next() {
            Some(l) => match l.trim().trim_start_matches('\u{feff}').parse() {
                Ok(i) => i,
                Err(_) => continue,
            },
            None => break,
        };

        // "HH:MM:SS,mmm --> HH:MM:SS,mmm"
        let (start_secs, end_secs) = match lines.next().and_then(parse_timestamp_line) {
            Some(t) => t,
            None => continue,
        };

        let mut text_parts = Vec::new();
        while let Some(line) = lines.next_if(|l| !l.trim().is_empty()) {
            text_parts.push(line.trim());
        }

        cues.push(SrtCue {
            index,
            start_secs,
            end_secs,
            text: text_parts.join(" "),
        });
    }

    let mut seen = HashSet::new();
    let mut deduped: Vec<SrtCue> = cues
        .into_iter()
        .filter(|cue| seen.insert(((cue.start_secs * 1000.0).round() as i64, cue.text.clone())))
        .collect();
    deduped.sort_by(|a, b| a.start_secs.total_cmp(&b.start_secs));
    for (i, cue) in deduped.iter_mut().enumerate() {
        cue.index = i + 1;
    }
    deduped
}

/// Reads an SRT transcript as timed words.
pub fn load_srt_words(path: impl AsRef<Path>) -> AssessmentResult<Vec<SpokenWord>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .map_err(|e| AssessmentError::io(format!("reading SRT '{}'", path.display()), e))?;
    let cues = parse_srt_str(&content);
    if cues.is_empty() && !content.trim().is_empty() {
        return Err(AssessmentError::parse(
            format!("parsing SRT '{}'", path.display()),
            "no subtitle cues found",
        ));
    }
    Ok(cues.iter().flat_map(SrtCue::to_words).collect())
}

/// Parses a timestamp line like "00:00:02,965 --> 00:00:04,277".
fn parse_timestamp_line(line: &str) -> Option<(f64, f64)> {
    let (start, end) = line.trim().split_once("-->")?;
    Some((parse_srt_time(start.trim())?, parse_srt_time(end.trim())?))
}

/// Parses SRT time format "HH:MM:SS,mmm" to seconds.
fn parse_srt_time(s: &str) -> Option<f64> {
    // Handle both comma and dot separators
    let s = s.replace(',', ".");
    let parts: Vec<&str> = s.split(':').collect();
    if parts.len() != 3 {
        return None;
    }
    let hours: f64 = parts[0].parse().ok()?;
    let minutes: f64 = parts[1].parse().ok()?;
    let seconds: f64 = parts[2].parse().ok()?;
    Some(hours * 3600.0 + minutes * 60.0 + seconds)
}
