//! Stable machine-readable error codes for API and CLI output.

/// Every error enum implements this to expose a structured code string
/// alongside its human-readable message.
pub trait ErrorCode {
    /// Returns the code string (e.g., "INVALID_INPUT").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const ARTIFACT_LOAD_ERROR: &str = "ARTIFACT_LOAD_ERROR";
pub const INVALID_INPUT: &str = "INVALID_INPUT";
pub const UNMAPPED_LABEL: &str = "UNMAPPED_LABEL";
pub const INFERENCE_ERROR: &str = "INFERENCE_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
