use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid response for {question_id}: {reason}")]
    InvalidResponse { question_id: String, reason: String },
    #[error("Missing lookup entry: {0}")]
    MissingLookup(String),
    #[error("Optional metric unavailable: {0}")]
    OptionalMetric(String),
    #[error("Incomplete profile: {0}")]
    IncompleteProfile(String),
    #[error("Profile not found: {id}")]
    ProfileNotFound { id: String },
    #[error("Invalid persona code: {0}")]
    InvalidCode(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl EngineError {
    pub fn invalid_response(question_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidResponse { question_id: question_id.into(), reason: reason.into() }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
