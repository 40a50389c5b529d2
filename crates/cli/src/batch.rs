use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use readalong_assessment::pipeline::{load_expected, load_spoken};
use readalong_assessment::{AssessmentEngine, AssessmentReport};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// One assessment listed in a batch manifest.
#[derive(Debug, Clone, Deserialize)]
pub struct ManifestEntry {
    pub id: String,
    pub ocr: PathBuf,
    pub asr: PathBuf,
}

#[derive(Debug, Serialize)]
pub struct BatchItem {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<AssessmentReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Reads a manifest, resolving relative paths against its directory.
pub fn load_manifest(path: &Path) -> anyhow::Result<Vec<ManifestEntry>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading manifest '{}'", path.display()))?;
    let mut entries: Vec<ManifestEntry> = serde_json::from_str(&content)
        .with_context(|| format!("parsing manifest '{}'", path.display()))?;

    let base = path.parent().unwrap_or_else(|| Path::new("."));
    for entry in &mut entries {
        entry.ocr = base.join(&entry.ocr);
        entry.asr = base.join(&entry.asr);
    }
    Ok(entries)
}

/// Loads both inputs from disk and runs one assessment.
pub fn assess_files(
    engine: &AssessmentEngine,
    ocr: &Path,
    asr: &Path,
) -> anyhow::Result<AssessmentReport> {
    let expected = load_expected(ocr)?;
    let spoken = load_spoken(asr)?;
    let report = engine.assess(&expected, &spoken)?;
    Ok(report)
}

/// Runs every entry on the blocking pool and returns results in manifest order.
///
/// A failing entry is reported in its slot and does not stop the others.
pub async fn run_batch(engine: Arc<AssessmentEngine>, entries: Vec<ManifestEntry>) -> Vec<BatchItem> {
    let total = entries.len();
    let tasks = entries.into_iter().map(|entry| {
        let engine = Arc::clone(&engine);
        async move {
            let ManifestEntry { id, ocr, asr } = entry;
            let outcome =
                tokio::task::spawn_blocking(move || assess_files(&engine, &ocr, &asr)).await;
            match outcome {
                Ok(Ok(report)) => BatchItem {
                    id,
                    report: Some(report),
                    error: None,
                },
                Ok(Err(e)) => {
                    warn!(%id, error = %format!("{e:#}"), "Assessment failed");
                    BatchItem {
                        id,
                        report: None,
                        error: Some(format!("{e:#}")),
                    }
                }
                Err(e) => {
                    warn!(%id, error = %e, "Assessment task panicked");
                    BatchItem {
                        id,
                        report: None,
                        error: Some(format!("task failed: {e}")),
                    }
                }
            }
        }
    });

    let items = futures::future::join_all(tasks).await;
    let failed = items.iter().filter(|i| i.error.is_some()).count();
    info!(total, failed, "Batch complete");
    items
}

#[cfg(test)]
mod tests {
    use readalong_assessment::{AssessmentConfig, Lexicon};

    use super::*;

    #[tokio::test]
    async fn test_batch_keeps_order_and_reports_failures() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.txt"), "The cat sat").unwrap();
        std::fs::write(
            dir.path().join("a.json"),
            r#"[ { "text": "the", "start_time": 0.0, "end_time": 0.3 },
                 { "text": "cat", "start_time": 0.4, "end_time": 0.7 },
                 { "text": "sat", "start_time": 0.8, "end_time": 1.1 } ]"#,
        )
        .unwrap();
        let manifest = dir.path().join("manifest.json");
        std::fs::write(
            &manifest,
            r#"[ { "id": "first", "ocr": "a.txt", "asr": "a.json" },
                 { "id": "broken", "ocr": "a.txt", "asr": "missing.json" },
                 { "id": "third", "ocr": "a.txt", "asr": "a.json" } ]"#,
        )
        .unwrap();

        let entries = load_manifest(&manifest).unwrap();
        assert_eq!(entries[0].ocr, dir.path().join("a.txt"));

        let engine = Arc::new(AssessmentEngine::new(
            AssessmentConfig::default(),
            Arc::new(Lexicon::standard()),
        ));
        let items = run_batch(engine, entries).await;

        let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "broken", "third"]);
        assert_eq!(items[0].report.as_ref().unwrap().metrics.accuracy, 100);
        assert!(items[1].report.is_none());
        assert!(items[1].error.as_ref().unwrap().contains("missing.json"));
        assert!(items[2].error.is_none());
    }
}
