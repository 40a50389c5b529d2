use std::path::Path;

use config::{Config, ConfigError, Environment, File, FileFormat};
use readalong_assessment::AssessmentConfig;
use serde::{Deserialize, Serialize};

/// Settings file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "readalong.toml";
/// Prefix for environment overrides, e.g. `READALONG__LOG__LEVEL=debug`.
pub const ENV_PREFIX: &str = "READALONG";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub log: LogSettings,
    pub scoring: ScoringSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// `EnvFilter` directive, e.g. `info` or `readalong_assessment=debug`.
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Scoring thresholds handed to the assessment engine.
///
/// Engine fields sit directly under `[scoring]`, e.g.
/// `READALONG__SCORING__HESITATION_THRESHOLD_SECS=0.8`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringSettings {
    #[serde(flatten)]
    pub engine: AssessmentConfig,
    /// Site-specific homophone groups, e.g. spellings of a student's name.
    pub extra_homophones: Vec<Vec<String>>,
}

impl Settings {
    /// Loads defaults, then a TOML file, then `READALONG__*` environment variables.
    ///
    /// An explicit `path` must exist; otherwise `readalong.toml` is read from
    /// the working directory if present.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => File::from(path).format(FileFormat::Toml).required(true),
            None => File::new(DEFAULT_CONFIG_FILE, FileFormat::Toml).required(false),
        };

        Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.log.level, "info");
        assert!(!settings.log.json);
        assert!((settings.scoring.engine.correct_threshold - 0.95).abs() < 1e-9);
        assert_eq!(settings.scoring.engine.boundary_min_matches, 2);
        assert!(settings.scoring.extra_homophones.is_empty());
    }

    #[test]
    fn test_load_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("readalong.toml");
        std::fs::write(
            &path,
            r#"
[log]
level = "debug"
json = true

[scoring]
hesitation_threshold_secs = 0.8
extra_homophones = [["jon", "john"], ["sean", "shawn", "shaun"]]
"#,
        )
        .unwrap();

        let settings = Settings::load(Some(path.as_path())).unwrap();
        assert_eq!(settings.log.level, "debug");
        assert!(settings.log.json);
        assert!((settings.scoring.engine.hesitation_threshold_secs - 0.8).abs() < 1e-9);
        assert!((settings.scoring.engine.misread_threshold - 0.70).abs() < 1e-9);
        assert_eq!(settings.scoring.engine.max_pattern_examples, 3);
        assert_eq!(settings.scoring.extra_homophones.len(), 2);
        assert_eq!(settings.scoring.extra_homophones[1][2], "shaun");
    }

    #[test]
    fn test_loaded_defaults_match_engine_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("readalong.toml");
        std::fs::write(&path, "[log]\nlevel = \"warn\"\n").unwrap();

        let engine = Settings::load(Some(path.as_path())).unwrap().scoring.engine;
        let defaults = AssessmentConfig::default();
        assert_eq!(
            serde_json::to_value(&engine).unwrap(),
            serde_json::to_value(&defaults).unwrap()
        );
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Settings::load(Some(dir.path().join("nope.toml").as_path())).is_err());
    }
}
