//! ONNX Runtime classifier.
//!
//! Expects the sklearn-onnx layout: one `[1, 10]` f32 input, an int64 label
//! output, and optionally a `[1, n_classes]` f32 probability output
//! (exported with `zipmap=False`).

use std::path::Path;
use std::sync::Mutex;

use fetal_core::config::ArtifactConfig;
use fetal_core::constants::FEATURE_COUNT;
use fetal_core::errors::{ArtifactError, FetalError, FetalResult};
use fetal_core::models::ClassProbabilities;
use fetal_core::traits::IClassifier;
use fetal_core::FeatureVector;
use ort::session::Session;
use ort::value::Tensor;
use tracing::debug;

use super::check_classes;

/// Everything one session run yields, copied out of the session buffers.
struct RawOutputs {
    label: i64,
    probabilities: Option<Vec<f32>>,
}

/// ONNX-based classifier using the `ort` crate.
pub struct OnnxClassifier {
    /// `run` needs `&mut Session`; the Mutex gives the `&self` trait access.
    session: Mutex<Session>,
    classes: Vec<i64>,
    label_output: String,
    probability_output: String,
    has_probabilities: bool,
    model_name: String,
}

impl OnnxClassifier {
    /// Load an ONNX model and run it once with a zero vector to check
    /// that it accepts ten features and reports the configured outputs.
    pub fn load(path: &Path, config: &ArtifactConfig) -> Result<Self, ArtifactError> {
        let display = path.display().to_string();
        if !path.exists() {
            return Err(ArtifactError::NotFound { path: display });
        }
        check_classes(&display, &config.onnx_class_labels)?;

        let session = Session::builder()
            .map_err(unreadable(&display))?
            .with_intra_threads(config.onnx_intra_threads.max(1))
            .map_err(unreadable(&display))?
            .commit_from_file(path)
            .map_err(unreadable(&display))?;

        let model_name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("onnx-model")
            .to_string();

        let mut classifier = Self {
            session: Mutex::new(session),
            classes: config.onnx_class_labels.clone(),
            label_output: config.onnx_label_output.clone(),
            probability_output: config.onnx_probability_output.clone(),
            has_probabilities: false,
            model_name,
        };

        let trial = classifier
            .run(&FeatureVector::new([0.0; FEATURE_COUNT]))
            .map_err(|e| ArtifactError::Malformed {
                path: display.clone(),
                reason: format!("trial inference with a [1, {FEATURE_COUNT}] input failed: {e}"),
            })?;
        classifier.has_probabilities = check_trial_run(
            &display,
            &classifier.probability_output,
            classifier.classes.len(),
            &trial,
        )?;

        debug!(
            model = %classifier.model_name,
            probabilities = classifier.has_probabilities,
            "ONNX classifier loaded"
        );
        Ok(classifier)
    }

    /// Run one inference and copy the label and probabilities out.
    fn run(&self, features: &FeatureVector) -> FetalResult<RawOutputs> {
        let input = Tensor::from_array((vec![1i64, FEATURE_COUNT as i64], features.to_f32()))
            .map_err(|e| FetalError::InferenceFailed {
                reason: format!("tensor creation error: {e}"),
            })?;

        let mut session = self
            .session
            .lock()
            .map_err(|e| FetalError::InferenceFailed {
                reason: format!("session lock poisoned: {e}"),
            })?;

        let outputs = session
            .run(ort::inputs![input])
            .map_err(|e| FetalError::InferenceFailed {
                reason: e.to_string(),
            })?;

        let mut label = None;
        let mut probabilities = None;
        for (name, value) in outputs.iter() {
            if name == self.label_output {
                let (_shape, data) =
                    value
                        .try_extract_tensor::<i64>()
                        .map_err(|e| FetalError::InferenceFailed {
                            reason: format!("label extraction failed: {e}"),
                        })?;
                label = data.first().copied();
            } else if name == self.probability_output {
                let (_shape, data) =
                    value
                        .try_extract_tensor::<f32>()
                        .map_err(|e| FetalError::InferenceFailed {
                            reason: format!("probability extraction failed: {e}"),
                        })?;
                probabilities = Some(data.to_vec());
            }
        }

        let label = label.ok_or_else(|| FetalError::InferenceFailed {
            reason: format!("model has no '{}' output", self.label_output),
        })?;
        Ok(RawOutputs {
            label,
            probabilities,
        })
    }
}

impl OnnxClassifier {
    fn distribution(&self, outputs: RawOutputs) -> FetalResult<ClassProbabilities> {
        let probs = outputs
            .probabilities
            .ok_or_else(|| FetalError::InferenceFailed {
                reason: format!("model has no '{}' output", self.probability_output),
            })?;
        Ok(label_columns(&self.classes, probs))
    }
}

/// Pair each probability column with its configured class label.
fn label_columns(classes: &[i64], probs: Vec<f32>) -> ClassProbabilities {
    ClassProbabilities::new(
        classes
            .iter()
            .copied()
            .zip(probs.into_iter().map(f64::from))
            .collect(),
    )
}

/// Check the load-time trial run. Returns whether the model reports
/// probabilities; a probability tensor must have one column per class.
fn check_trial_run(
    path: &str,
    probability_output: &str,
    n_classes: usize,
    trial: &RawOutputs,
) -> Result<bool, ArtifactError> {
    match &trial.probabilities {
        None => Ok(false),
        Some(probs) if probs.len() == n_classes => Ok(true),
        Some(probs) => Err(ArtifactError::Malformed {
            path: path.to_string(),
            reason: format!(
                "probability output '{probability_output}' has {} columns for {n_classes} configured class labels",
                probs.len()
            ),
        }),
    }
}

fn unreadable<E: std::fmt::Display>(path: &str) -> impl Fn(E) -> ArtifactError + '_ {
    move |e| ArtifactError::Unreadable {
        path: path.to_string(),
        reason: e.to_string(),
    }
}

impl IClassifier for OnnxClassifier {
    fn predict_label(&self, features: &FeatureVector) -> FetalResult<i64> {
        Ok(self.run(features)?.label)
    }

    fn predict_proba(&self, features: &FeatureVector) -> FetalResult<Option<ClassProbabilities>> {
        if !self.has_probabilities {
            return Ok(None);
        }
        let outputs = self.run(features)?;
        self.distribution(outputs).map(Some)
    }

    fn predict_label_and_proba(
        &self,
        features: &FeatureVector,
    ) -> FetalResult<(i64, Option<ClassProbabilities>)> {
        let outputs = self.run(features)?;
        let label = outputs.label;
        if !self.has_probabilities {
            return Ok((label, None));
        }
        Ok((label, Some(self.distribution(outputs)?)))
    }

    fn classes(&self) -> &[i64] {
        &self.classes
    }

    fn n_features(&self) -> usize {
        // Enforced by the trial run in `load`.
        FEATURE_COUNT
    }

    fn supports_probabilities(&self) -> bool {
        self.has_probabilities
    }

    fn name(&self) -> &str {
        &self.model_name
    }
}
