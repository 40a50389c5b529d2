use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssessmentError {
    #[error("spoken word {index}: {reason}")]
    InvalidTiming { index: usize, reason: String },
    #[error("spoken word {index}: confidence {value} outside [0, 1]")]
    InvalidConfidence { index: usize, value: f64 },
    #[error("spoken word {index} starts before the previous word")]
    NonMonotonic { index: usize },
    #[error("I/O error while {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON error while {context}: {source}")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("{context}: {message}")]
    Parse { context: String, message: String },
}

impl AssessmentError {
    pub(crate) fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    pub(crate) fn json(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            context: context.into(),
            source,
        }
    }

    pub(crate) fn parse(context: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            context: context.into(),
            message: message.into(),
        }
    }
}

pub type AssessmentResult<T> = Result<T, AssessmentError>;
