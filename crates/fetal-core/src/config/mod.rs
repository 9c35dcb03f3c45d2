mod artifact_config;
pub mod defaults;
mod observability_config;
mod overrides;
mod server_config;

pub use artifact_config::ArtifactConfig;
pub use observability_config::ObservabilityConfig;
pub use overrides::ConfigOverrides;
pub use server_config::ServerConfig;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::CLASS_LABELS;
use crate::errors::{FetalError, FetalResult};

/// Top-level configuration, loaded from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FetalConfig {
    pub artifacts: ArtifactConfig,
    pub server: ServerConfig,
    pub observability: ObservabilityConfig,
}

impl FetalConfig {
    /// Parse from a TOML string. Missing sections and keys take defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Read and parse a TOML file, then validate it.
    pub fn from_file(path: impl AsRef<Path>) -> FetalResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            FetalError::ConfigError(format!("cannot read {}: {e}", path.display()))
        })?;
        let config = Self::from_toml(&content)
            .map_err(|e| FetalError::ConfigError(format!("{}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the effective config: the file when one is given, defaults
    /// otherwise, then command-line overrides, then validation.
    pub fn resolve(path: Option<&Path>, overrides: ConfigOverrides) -> FetalResult<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        overrides.apply(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would only fail later, at load or bind time.
    pub fn validate(&self) -> FetalResult<()> {
        if self.artifacts.scaler_path.trim().is_empty() {
            return Err(FetalError::ConfigError("artifacts.scaler_path is empty".into()));
        }
        if self.artifacts.classifier_path.trim().is_empty() {
            return Err(FetalError::ConfigError(
                "artifacts.classifier_path is empty".into(),
            ));
        }
        if !matches!(
            self.artifacts.classifier_format.as_str(),
            "auto" | "json" | "onnx"
        ) {
            return Err(FetalError::ConfigError(format!(
                "artifacts.classifier_format must be auto, json, or onnx (got '{}')",
                self.artifacts.classifier_format
            )));
        }
        let mut labels = self.artifacts.onnx_class_labels.clone();
        labels.sort_unstable();
        if labels != CLASS_LABELS {
            return Err(FetalError::ConfigError(format!(
                "artifacts.onnx_class_labels must be a permutation of {:?} (got {:?})",
                CLASS_LABELS, self.artifacts.onnx_class_labels
            )));
        }
        if self.server.port == 0 {
            return Err(FetalError::ConfigError("server.port must be non-zero".into()));
        }
        Ok(())
    }
}
