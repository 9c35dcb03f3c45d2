use std::path::Path;

use fetal_core::errors::ArtifactError;
use serde::de::DeserializeOwned;

/// Read and deserialize a JSON artifact, classifying each failure.
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let display = path.display().to_string();
    if !path.exists() {
        return Err(ArtifactError::NotFound { path: display });
    }
    let content = std::fs::read_to_string(path).map_err(|e| ArtifactError::Unreadable {
        path: display.clone(),
        reason: e.to_string(),
    })?;
    serde_json::from_str(&content).map_err(|e| ArtifactError::Malformed {
        path: display,
        reason: e.to_string(),
    })
}

/// Reject NaN or infinite parameters.
pub(crate) fn ensure_finite(source: &str, what: &str, values: &[f64]) -> Result<(), ArtifactError> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(i) => Err(ArtifactError::Malformed {
            path: source.to_string(),
            reason: format!("{what}[{i}] is not finite"),
        }),
        None => Ok(()),
    }
}
