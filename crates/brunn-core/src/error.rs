use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum BrunnError {
    #[error("invalid input for {parameter}: {value} ({reason})")]
    InvalidInput {
        parameter: String,
        value: f64,
        reason: String,
    },

    #[error("feature vector shape mismatch: expected {expected}, got {got}")]
    ShapeMismatch { expected: usize, got: usize },

    #[error("inference failed: {0}")]
    Inference(String),

    #[error("failed to load model artifact from {path}: {reason}")]
    ArtifactLoad { path: PathBuf, reason: String },

    #[error("invalid model artifact: {0}")]
    ArtifactInvalid(String),

    #[error("failed to load ruleset from {path}: {reason}")]
    RulesetLoad { path: PathBuf, reason: String },

    #[error("invalid ruleset: {0}")]
    RulesetInvalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
