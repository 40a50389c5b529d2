//! File loaders that turn OCR and ASR output into engine inputs.

pub mod json_input;
pub mod srt_parser;
pub mod txt_parser;

use std::path::Path;

use tracing::debug;

use crate::error::AssessmentResult;
use crate::model::{ExpectedWord, SpokenWord};

pub use json_input::OcrPage;

fn extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default()
}

/// Loads an OCR page from `.json`, or a plain-text passage from anything else.
pub fn load_page(path: impl AsRef<Path>) -> AssessmentResult<OcrPage> {
    let path = path.as_ref();
    let page = match extension(path).as_str() {
        "json" => json_input::load_ocr_page(path)?,
        _ => txt_parser::load_passage_txt(path)?,
    };
    debug!(path = %path.display(), words = page.words.len(), "Loaded passage");
    Ok(page)
}

pub fn load_expected(path: impl AsRef<Path>) -> AssessmentResult<Vec<ExpectedWord>> {
    load_page(path).map(|page| page.words)
}

/// Loads a transcript from `.srt` subtitles or a JSON word list.
pub fn load_spoken(path: impl AsRef<Path>) -> AssessmentResult<Vec<SpokenWord>> {
    let path = path.as_ref();
    let words = match extension(path).as_str() {
        "srt" => srt_parser::load_srt_words(path)?,
        _ => json_input::load_transcript(path)?,
    };
    debug!(path = %path.display(), words = words.len(), "Loaded transcript");
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let txt = dir.path().join("passage.TXT");
        std::fs::write(&txt, "The cat sat").unwrap();
        assert_eq!(load_expected(&txt).unwrap().len(), 3);

        let json = dir.path().join("page.json");
        std::fs::write(&json, r#"{ "words": [ { "text": "Hello" } ] }"#).unwrap();
        assert_eq!(load_expected(&json).unwrap()[0].text, "Hello");

        let srt = dir.path().join("reading.srt");
        std::fs::write(&srt, "1\n00:00:00,000 --> 00:00:01,000\nhello there\n").unwrap();
        assert_eq!(load_spoken(&srt).unwrap().len(), 2);

        let asr = dir.path().join("words.json");
        std::fs::write(
            &asr,
            r#"[ { "text": "hello", "start_time": 0.0, "end_time": 0.4 } ]"#,
        )
        .unwrap();
        assert_eq!(load_spoken(&asr).unwrap()[0].text, "hello");
    }
}
