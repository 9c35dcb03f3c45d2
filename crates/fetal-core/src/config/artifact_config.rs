use serde::{Deserialize, Serialize};

use super::defaults;

/// Where the scaler and classifier live and how to read them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtifactConfig {
    /// Path to the fitted scaler (JSON).
    pub scaler_path: String,
    /// Path to the fitted classifier (JSON or ONNX).
    pub classifier_path: String,
    /// Classifier format: "auto", "json", "onnx". "auto" decides by extension.
    pub classifier_format: String,
    /// ONNX output holding the int64 label.
    pub onnx_label_output: String,
    /// ONNX output holding the `[1, n_classes]` probability tensor.
    pub onnx_probability_output: String,
    /// Class label of each column of the ONNX probability tensor.
    pub onnx_class_labels: Vec<i64>,
    /// Intra-op threads for the ONNX session.
    pub onnx_intra_threads: usize,
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self {
            scaler_path: defaults::DEFAULT_SCALER_PATH.to_string(),
            classifier_path: defaults::DEFAULT_CLASSIFIER_PATH.to_string(),
            classifier_format: defaults::DEFAULT_CLASSIFIER_FORMAT.to_string(),
            onnx_label_output: defaults::DEFAULT_ONNX_LABEL_OUTPUT.to_string(),
            onnx_probability_output: defaults::DEFAULT_ONNX_PROBABILITY_OUTPUT.to_string(),
            onnx_class_labels: defaults::DEFAULT_ONNX_CLASS_LABELS.to_vec(),
            onnx_intra_threads: defaults::DEFAULT_ONNX_INTRA_THREADS,
        }
    }
}

impl ArtifactConfig {
    /// Both artifacts under one directory with their default file names.
    pub fn in_dir(dir: impl AsRef<std::path::Path>) -> Self {
        let dir = dir.as_ref();
        let file_name = |default: &str| {
            std::path::Path::new(default)
                .file_name()
                .map(|n| dir.join(n).to_string_lossy().into_owned())
                .unwrap_or_else(|| default.to_string())
        };
        Self {
            scaler_path: file_name(defaults::DEFAULT_SCALER_PATH),
            classifier_path: file_name(defaults::DEFAULT_CLASSIFIER_PATH),
            ..Default::default()
        }
    }
}
