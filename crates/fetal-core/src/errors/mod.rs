mod artifact_error;
mod error_code;

pub use artifact_error::ArtifactError;
pub use error_code::ErrorCode;

use std::fmt;

use crate::models::FeatureField;

/// Convenience alias used throughout the workspace.
pub type FetalResult<T> = Result<T, FetalError>;

/// Why a single raw field was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputProblem {
    Missing,
    Empty,
    NotANumber { value: String },
    NotFinite { value: String },
}

impl fmt::Display for InputProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputProblem::Missing => write!(f, "value is missing"),
            InputProblem::Empty => write!(f, "value is empty"),
            InputProblem::NotANumber { value } => write!(f, "'{value}' is not a number"),
            InputProblem::NotFinite { value } => write!(f, "'{value}' is not a finite number"),
        }
    }
}

/// Top-level error for every fetal health operation.
#[derive(Debug, thiserror::Error)]
pub enum FetalError {
    #[error("artifact load failed: {0}")]
    ArtifactLoad(#[from] ArtifactError),

    #[error("invalid input for field '{field}': {reason}")]
    InvalidInput {
        field: FeatureField,
        reason: InputProblem,
    },

    #[error("classifier returned label {label}, which maps to no health category")]
    UnmappedLabel { label: i64 },

    #[error("inference failed: {reason}")]
    InferenceFailed { reason: String },

    #[error("classifier returned an invalid probability distribution: {reason}")]
    InvalidProbabilities { reason: String },

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl FetalError {
    /// Whether the caller can fix this by correcting their input.
    ///
    /// Everything else is an operator or artifact problem.
    pub fn is_user_error(&self) -> bool {
        matches!(self, FetalError::InvalidInput { .. })
    }

    /// The offending field, for input errors.
    pub fn field(&self) -> Option<FeatureField> {
        match self {
            FetalError::InvalidInput { field, .. } => Some(*field),
            _ => None,
        }
    }
}

impl ErrorCode for FetalError {
    fn error_code(&self) -> &'static str {
        match self {
            FetalError::ArtifactLoad(_) => error_code::ARTIFACT_LOAD_ERROR,
            FetalError::InvalidInput { .. } => error_code::INVALID_INPUT,
            FetalError::UnmappedLabel { .. } => error_code::UNMAPPED_LABEL,
            FetalError::InferenceFailed { .. } | FetalError::InvalidProbabilities { .. } => {
                error_code::INFERENCE_ERROR
            }
            FetalError::ConfigError(_) => error_code::CONFIG_ERROR,
            FetalError::SerializationError(_) => error_code::SERIALIZATION_ERROR,
        }
    }
}

pub use error_code::{
    ARTIFACT_LOAD_ERROR, CONFIG_ERROR, INFERENCE_ERROR, INVALID_INPUT, SERIALIZATION_ERROR,
    UNMAPPED_LABEL,
};
