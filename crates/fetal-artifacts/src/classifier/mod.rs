//! Fitted classifiers: JSON linear and nearest-centroid models, and ONNX
//! models run through `ort`.

mod centroid;
mod linear;
mod onnx;

pub use centroid::NearestCentroidClassifier;
pub use linear::{LinearClassifier, LinkFunction};
pub use onnx::OnnxClassifier;

use std::path::Path;

use fetal_core::config::ArtifactConfig;
use fetal_core::constants::{CLASS_LABELS, FEATURE_COUNT};
use fetal_core::errors::{ArtifactError, FetalError, FetalResult};
use fetal_core::traits::IClassifier;
use serde::Deserialize;

use crate::io::read_json;

/// How the classifier file is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifierFormat {
    Json,
    Onnx,
}

impl ClassifierFormat {
    /// Resolve the configured format; "auto" goes by file extension.
    pub fn resolve(configured: &str, path: &Path) -> Result<Self, ArtifactError> {
        let unsupported = || ArtifactError::UnsupportedFormat {
            path: path.display().to_string(),
        };
        match configured {
            "json" => Ok(ClassifierFormat::Json),
            "onnx" => Ok(ClassifierFormat::Onnx),
            "auto" => match path.extension().and_then(|e| e.to_str()) {
                Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(ClassifierFormat::Json),
                Some(ext) if ext.eq_ignore_ascii_case("onnx") => Ok(ClassifierFormat::Onnx),
                _ => Err(unsupported()),
            },
            _ => Err(unsupported()),
        }
    }
}

/// On-disk JSON classifier layout, tagged by `kind`.
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum ClassifierArtifact {
    Linear {
        classes: Vec<i64>,
        coefficients: Vec<Vec<f64>>,
        intercepts: Vec<f64>,
        #[serde(default)]
        link: LinkFunction,
    },
    NearestCentroid {
        classes: Vec<i64>,
        centroids: Vec<Vec<f64>>,
    },
}

/// Load the classifier named by the artifact config.
pub fn load_classifier(config: &ArtifactConfig) -> FetalResult<Box<dyn IClassifier>> {
    let path = Path::new(&config.classifier_path);
    match ClassifierFormat::resolve(&config.classifier_format, path)? {
        ClassifierFormat::Json => load_json_classifier(path),
        ClassifierFormat::Onnx => Ok(Box::new(OnnxClassifier::load(path, config)?)),
    }
}

/// Load a JSON classifier from a path.
pub fn load_json_classifier(path: &Path) -> FetalResult<Box<dyn IClassifier>> {
    let artifact: ClassifierArtifact = read_json(path)?;
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("classifier")
        .to_string();
    let display = path.display().to_string();

    let classifier: Box<dyn IClassifier> = match artifact {
        ClassifierArtifact::Linear {
            classes,
            coefficients,
            intercepts,
            link,
        } => Box::new(
            LinearClassifier::new(name, classes, coefficients, intercepts, link)
                .map_err(|e| with_path(e, &display))?,
        ),
        ClassifierArtifact::NearestCentroid { classes, centroids } => Box::new(
            NearestCentroidClassifier::new(name, classes, centroids)
                .map_err(|e| with_path(e, &display))?,
        ),
    };
    Ok(classifier)
}

fn with_path(err: ArtifactError, path: &str) -> ArtifactError {
    match err {
        ArtifactError::Malformed { reason, .. } => ArtifactError::Malformed {
            path: path.to_string(),
            reason,
        },
        other => other,
    }
}

/// The class set must be exactly {1, 2, 3}, each once, in any order.
pub(crate) fn check_classes(artifact: &str, classes: &[i64]) -> Result<(), ArtifactError> {
    let mut sorted = classes.to_vec();
    sorted.sort_unstable();
    if sorted != CLASS_LABELS {
        return Err(ArtifactError::ClassMismatch {
            artifact: artifact.to_string(),
            expected: CLASS_LABELS.to_vec(),
            actual: classes.to_vec(),
        });
    }
    Ok(())
}

/// One row per class, each row `FEATURE_COUNT` wide.
pub(crate) fn check_matrix(
    artifact: &str,
    what: &str,
    rows: &[Vec<f64>],
    n_classes: usize,
) -> Result<(), ArtifactError> {
    if rows.len() != n_classes {
        return Err(ArtifactError::Malformed {
            path: artifact.to_string(),
            reason: format!("{what} has {} rows for {n_classes} classes", rows.len()),
        });
    }
    for row in rows {
        if row.len() != FEATURE_COUNT {
            return Err(ArtifactError::ArityMismatch {
                artifact: format!("{artifact} {what}"),
                expected: FEATURE_COUNT,
                actual: row.len(),
            });
        }
        crate::io::ensure_finite(artifact, what, row)?;
    }
    Ok(())
}

/// Index of the first maximum. `None` when the slice is empty or holds a
/// non-finite score, since no class can then be said to win.
pub(crate) fn argmax(values: &[f64]) -> Option<usize> {
    best_index(values, |v, best| v > best)
}

/// Index of the first minimum, under the same rules as [`argmax`].
pub(crate) fn argmin(values: &[f64]) -> Option<usize> {
    best_index(values, |v, best| v < best)
}

fn best_index(values: &[f64], beats: impl Fn(f64, f64) -> bool) -> Option<usize> {
    if values.is_empty() || values.iter().any(|v| !v.is_finite()) {
        return None;
    }
    let mut best = 0;
    for (i, &v) in values.iter().enumerate().skip(1) {
        if beats(v, values[best]) {
            best = i;
        }
    }
    Some(best)
}

/// Error for a score vector with no winner.
pub(crate) fn no_decision(model: &str, scores: &[f64]) -> FetalError {
    FetalError::InferenceFailed {
        reason: format!("classifier '{model}' produced no finite decision from scores {scores:?}"),
    }
}
