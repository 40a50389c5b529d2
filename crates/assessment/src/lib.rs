pub mod alignment;
pub mod boundary;
pub mod config;
pub mod disfluency;
pub mod engine;
pub mod error;
pub mod lexicon;
pub mod metrics;
pub mod model;
pub mod normalize;
pub mod patterns;
pub mod pipeline;
pub mod report;
pub mod similarity;
pub mod validate;
pub mod wer;

pub use config::AssessmentConfig;
pub use engine::AssessmentEngine;
pub use error::{AssessmentError, AssessmentResult};
pub use lexicon::Lexicon;
pub use model::{
    AlignedWord, BoundingBox, ErrorPattern, ExpectedWord, MatchingResult, Metrics, PassageRange,
    PatternExample, PatternType, ProsodyGrade, Severity, SpokenWord, WordStatus,
};
pub use report::{AssessmentReport, Insights};
pub use similarity::{SimilarityScorer, WordForm};
pub use validate::validate_spoken;
