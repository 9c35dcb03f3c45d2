//! [`ArtifactStore`]: owns the fitted scaler and classifier for the life of
//! the process.

use fetal_core::config::ArtifactConfig;
use fetal_core::constants::{CLASS_LABELS, FEATURE_COUNT};
use fetal_core::errors::{ArtifactError, FetalResult};
use fetal_core::traits::{IClassifier, IScaler};
use fetal_observability::artifact_load_span;
use serde::Serialize;
use tracing::{error, info};

use crate::classifier::{check_classes, load_classifier};
use crate::scaler::load_scaler;

/// The two loaded artifacts. Read-only after construction, so a shared
/// reference can serve concurrent predictions without locking.
pub struct ArtifactStore {
    scaler: Box<dyn IScaler>,
    classifier: Box<dyn IClassifier>,
}

/// What was loaded, for health endpoints and `check` output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtifactSummary {
    pub scaler: String,
    pub classifier: String,
    pub n_features: usize,
    pub classes: Vec<i64>,
    pub supports_probabilities: bool,
}

impl ArtifactStore {
    /// Load both artifacts from the paths in `config`.
    ///
    /// Any failure is returned as `FetalError::ArtifactLoad`; the caller must
    /// not start serving.
    pub fn load(config: &ArtifactConfig) -> FetalResult<Self> {
        let span = artifact_load_span!(config.scaler_path, config.classifier_path);
        let _guard = span.enter();

        let result = load_scaler(&config.scaler_path)
            .and_then(|scaler| Ok((scaler, load_classifier(config)?)))
            .and_then(|(scaler, classifier)| Self::from_parts(scaler, classifier));

        match &result {
            Ok(store) => {
                let summary = store.describe();
                info!(
                    scaler = %summary.scaler,
                    classifier = %summary.classifier,
                    n_features = summary.n_features,
                    probabilities = summary.supports_probabilities,
                    "artifacts loaded"
                );
            }
            Err(e) => error!(error = %e, "artifact load failed; refusing to serve predictions"),
        }
        result
    }

    /// Assemble a store from already-constructed parts, applying the same
    /// shape checks as [`ArtifactStore::load`].
    pub fn from_parts(
        scaler: Box<dyn IScaler>,
        classifier: Box<dyn IClassifier>,
    ) -> FetalResult<Self> {
        if scaler.n_features() != FEATURE_COUNT {
            return Err(ArtifactError::ArityMismatch {
                artifact: format!("scaler '{}'", scaler.name()),
                expected: FEATURE_COUNT,
                actual: scaler.n_features(),
            }
            .into());
        }
        if classifier.n_features() != FEATURE_COUNT {
            return Err(ArtifactError::ArityMismatch {
                artifact: format!("classifier '{}'", classifier.name()),
                expected: FEATURE_COUNT,
                actual: classifier.n_features(),
            }
            .into());
        }
        check_classes(
            &format!("classifier '{}'", classifier.name()),
            classifier.classes(),
        )?;
        Ok(Self { scaler, classifier })
    }

    pub fn scaler(&self) -> &dyn IScaler {
        self.scaler.as_ref()
    }

    pub fn classifier(&self) -> &dyn IClassifier {
        self.classifier.as_ref()
    }

    pub fn describe(&self) -> ArtifactSummary {
        ArtifactSummary {
            scaler: self.scaler.name().to_string(),
            classifier: self.classifier.name().to_string(),
            n_features: FEATURE_COUNT,
            classes: CLASS_LABELS.to_vec(),
            supports_probabilities: self.classifier.supports_probabilities(),
        }
    }
}

impl std::fmt::Debug for ArtifactStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArtifactStore")
            .field("scaler", &self.scaler.name())
            .field("classifier", &self.classifier.name())
            .finish()
    }
}
