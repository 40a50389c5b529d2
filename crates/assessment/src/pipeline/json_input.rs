use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AssessmentError, AssessmentResult};
use crate::model::{ExpectedWord, SpokenWord};

/// OCR output for one photographed page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OcrPage {
    /// Image width in pixels.
    #[serde(default)]
    pub width: f64,
    /// Image height in pixels.
    #[serde(default)]
    pub height: f64,
    pub words: Vec<ExpectedWord>,
}

/// ASR output, either wrapped in an object or as a bare array.
#[derive(Deserialize)]
#[serde(untagged)]
enum TranscriptFile {
    Wrapped { words: Vec<SpokenWord> },
    Bare(Vec<SpokenWord>),
}

pub fn parse_ocr_page(content: &str) -> AssessmentResult<OcrPage> {
    serde_json::from_str(content).map_err(|e| AssessmentError::json("parsing OCR page", e))
}

pub fn parse_transcript(content: &str) -> AssessmentResult<Vec<SpokenWord>> {
    let file: TranscriptFile = serde_json::from_str(content)
        .map_err(|e| AssessmentError::json("parsing ASR transcript", e))?;
    Ok(match file {
        TranscriptFile::Wrapped { words } | TranscriptFile::Bare(words) => words,
    })
}

/// Reads an OCR page from a JSON file.
pub fn load_ocr_page(path: impl AsRef<Path>) -> AssessmentResult<OcrPage> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .map_err(|e| AssessmentError::io(format!("reading OCR page '{}'", path.display()), e))?;
    parse_ocr_page(&content)
}

/// Reads an ASR word list from a JSON file.
pub fn load_transcript(path: impl AsRef<Path>) -> AssessmentResult<Vec<SpokenWord>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .map_err(|e| AssessmentError::io(format!("reading transcript '{}'", path.display()), e))?;
    parse_transcript(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ocr_page() {
        let page = parse_ocr_page(
            r#"{
                "width": 1200, "height": 1600,
                "words": [
                    { "text": "The", "bounding_box": { "x": 10, "y": 20, "width": 40, "height": 18 } },
                    { "text": "cat" }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(page.words.len(), 2);
        assert!((page.width - 1200.0).abs() < 1e-9);
        assert!((page.words[0].bounding_box.width - 40.0).abs() < 1e-9);
        assert!((page.words[1].bounding_box.x - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_parse_transcript_shapes() {
        let wrapped = parse_transcript(
            r#"{ "words": [ { "text": "the", "start_time": 0.0, "end_time": 0.3, "confidence": 0.8 } ] }"#,
        )
        .unwrap();
        assert_eq!(wrapped.len(), 1);
        assert!((wrapped[0].confidence - 0.8).abs() < 1e-9);

        let bare =
            parse_transcript(r#"[ { "text": "cat", "start_time": 0.3, "end_time": 0.6 } ]"#).unwrap();
        assert_eq!(bare[0].text, "cat");
        assert!((bare[0].confidence - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_parse_transcript_rejects_garbage() {
        let err = parse_transcript(r#"{ "segments": [] }"#).unwrap_err();
        assert!(matches!(err, AssessmentError::Json { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_ocr_page(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, AssessmentError::Io { .. }));
        assert!(err.to_string().contains("missing.json"));
    }
}
