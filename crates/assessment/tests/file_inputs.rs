//! Assessments driven from files on disk.

use std::sync::Arc;

use readalong_assessment::pipeline::{load_expected, load_spoken};
use readalong_assessment::{AssessmentConfig, AssessmentEngine, Lexicon, Severity};

#[test]
fn text_passage_with_srt_transcript() {
    let dir = tempfile::tempdir().unwrap();
    let passage = dir.path().join("passage.txt");
    std::fs::write(
        &passage,
        "Lesson 4\nThe sun came up over the hills.\nBirds began to sing.\n",
    )
    .unwrap();
    let transcript = dir.path().join("reading.srt");
    std::fs::write(
        &transcript,
        "1\n00:00:00,000 --> 00:00:02,800\nthe sun came up over the hills\n\n\
         2\n00:00:04,000 --> 00:00:05,600\nbirds began to sing\n",
    )
    .unwrap();

    let ocr = load_expected(&passage).unwrap();
    let spoken = load_spoken(&transcript).unwrap();
    assert_eq!(ocr.len(), 13);
    assert_eq!(spoken.len(), 11);

    let engine = AssessmentEngine::new(AssessmentConfig::default(), Arc::new(Lexicon::standard()));
    let report = engine.assess(&ocr, &spoken).unwrap();

    assert_eq!(report.result.passage.first_index, 2);
    assert_eq!(report.result.passage.last_index, 12);
    assert_eq!(report.metrics.accuracy, 100);
    assert_eq!(report.metrics.total_words, 11);
    // 11 words over 5.6 seconds
    assert_eq!(report.metrics.words_per_minute, 118);
    assert_eq!(report.severity, Severity::Excellent);
    // The long pause before "Birds" follows "hills."
    let birds = &report.result.words[7];
    assert!((birds.pause_duration - 1.2).abs() < 1e-9);
    assert!(!birds.hesitation);
}

#[test]
fn json_page_with_json_transcript() {
    let dir = tempfile::tempdir().unwrap();
    let page = dir.path().join("page.json");
    std::fs::write(
        &page,
        r#"{
            "width": 800, "height": 600,
            "words": [
                { "text": "A", "bounding_box": { "x": 10, "y": 10, "width": 12, "height": 20 } },
                { "text": "quick", "bounding_box": { "x": 30, "y": 10, "width": 60, "height": 20 } },
                { "text": "fox", "bounding_box": { "x": 100, "y": 10, "width": 40, "height": 20 } }
            ]
        }"#,
    )
    .unwrap();
    let transcript = dir.path().join("words.json");
    std::fs::write(
        &transcript,
        r#"{ "words": [
            { "text": "a", "start_time": 0.0, "end_time": 0.2, "confidence": 0.95 },
            { "text": "quick", "start_time": 0.3, "end_time": 0.6, "confidence": 0.9 },
            { "text": "box", "start_time": 0.7, "end_time": 1.0, "confidence": 0.6 }
        ] }"#,
    )
    .unwrap();

    let engine = AssessmentEngine::new(AssessmentConfig::default(), Arc::new(Lexicon::standard()));
    let report = engine
        .assess(&load_expected(&page).unwrap(), &load_spoken(&transcript).unwrap())
        .unwrap();

    let fox = &report.result.words[2];
    assert_eq!(fox.spoken.as_deref(), Some("box"));
    assert!((fox.bounding_box.x - 100.0).abs() < 1e-9);
    assert!((fox.confidence - 0.6).abs() < 1e-9);
    assert_eq!(report.metrics.error_count, 1);
}
