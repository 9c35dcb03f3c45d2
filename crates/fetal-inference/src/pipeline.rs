//! [`InferencePipeline`]: one stateless transform from raw fields to a
//! labeled result.

use std::sync::Arc;

use fetal_artifacts::ArtifactStore;
use fetal_core::errors::{FetalError, FetalResult};
use fetal_core::{FeatureVector, HealthCategory, PredictionResult, RawInput};
use fetal_observability::predict_span;
use tracing::{debug, error, warn};

use crate::confidence::to_category_confidences;
use crate::validation::validate;

/// The inference pipeline over a loaded [`ArtifactStore`].
///
/// Holds only a shared reference to read-only artifacts, so it is cheap to
/// clone and safe to call from many threads at once. Calls are idempotent
/// for identical input.
#[derive(Debug, Clone)]
pub struct InferencePipeline {
    artifacts: Arc<ArtifactStore>,
}

impl InferencePipeline {
    pub fn new(artifacts: Arc<ArtifactStore>) -> Self {
        Self { artifacts }
    }

    pub fn from_store(store: ArtifactStore) -> Self {
        Self::new(Arc::new(store))
    }

    pub fn artifacts(&self) -> &ArtifactStore {
        &self.artifacts
    }

    /// Predict the category only.
    pub fn predict(&self, raw: &RawInput) -> FetalResult<PredictionResult> {
        self.run(raw, false)
    }

    /// Predict the category and, when the classifier supports it,
    /// per-category confidences.
    pub fn predict_with_confidence(&self, raw: &RawInput) -> FetalResult<PredictionResult> {
        self.run(raw, true)
    }

    fn run(&self, raw: &RawInput, with_confidence: bool) -> FetalResult<PredictionResult> {
        let span = predict_span!(with_confidence);
        let _guard = span.enter();

        let features = validate(raw).inspect_err(|e| {
            warn!(error = %e, "rejected prediction input");
        })?;
        self.predict_vector(&features, with_confidence)
    }

    /// Scale, classify, and map an already-validated vector.
    pub fn predict_vector(
        &self,
        features: &FeatureVector,
        with_confidence: bool,
    ) -> FetalResult<PredictionResult> {
        let scaler = self.artifacts.scaler();
        let classifier = self.artifacts.classifier();

        let normalized = scaler.transform(features)?;
        if let Some((field, value)) = normalized.iter().find(|(_, v)| !v.is_finite()) {
            error!(
                field = %field,
                value,
                scaler = scaler.name(),
                "scaled feature is not finite"
            );
            return Err(FetalError::InferenceFailed {
                reason: format!("scaling '{field}' produced a non-finite value ({value})"),
            });
        }

        let (label, probs) = if with_confidence {
            classifier.predict_label_and_proba(&normalized)?
        } else {
            (classifier.predict_label(&normalized)?, None)
        };
        let category = HealthCategory::from_label(label).inspect_err(|_| {
            error!(
                label,
                classifier = classifier.name(),
                "classifier label maps to no health category; check the artifact's class set"
            );
        })?;
        let confidences = probs
            .map(|probs| to_category_confidences(&probs))
            .transpose()?;

        debug!(
            category = %category,
            confidences = confidences.is_some(),
            "prediction complete"
        );
        Ok(PredictionResult {
            category,
            confidences,
        })
    }
}
