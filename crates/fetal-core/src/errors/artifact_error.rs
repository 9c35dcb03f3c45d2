use super::error_code::{self, ErrorCode};

/// Errors raised while loading the scaler or classifier artifacts.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("artifact not found: {path}")]
    NotFound { path: String },

    #[error("artifact unreadable: {path}: {reason}")]
    Unreadable { path: String, reason: String },

    #[error("artifact malformed: {path}: {reason}")]
    Malformed { path: String, reason: String },

    #[error("{artifact} expects {actual} features, pipeline supplies {expected}")]
    ArityMismatch {
        artifact: String,
        expected: usize,
        actual: usize,
    },

    #[error("{artifact} classes {actual:?} do not match expected {expected:?}")]
    ClassMismatch {
        artifact: String,
        expected: Vec<i64>,
        actual: Vec<i64>,
    },

    #[error("feature order mismatch in {path} at position {position}: expected '{expected}', found '{actual}'")]
    FeatureOrderMismatch {
        path: String,
        position: usize,
        expected: String,
        actual: String,
    },

    #[error("unsupported artifact format: {path}")]
    UnsupportedFormat { path: String },
}

impl ErrorCode for ArtifactError {
    fn error_code(&self) -> &'static str {
        error_code::ARTIFACT_LOAD_ERROR
    }
}
