//! Fitted scalers deserialized from JSON.

mod min_max;
mod standard;

pub use min_max::MinMaxScaler;
pub use standard::StandardScaler;

use std::path::Path;

use fetal_core::constants::FEATURE_COUNT;
use fetal_core::errors::{ArtifactError, FetalResult};
use fetal_core::traits::IScaler;
use fetal_core::FeatureField;
use serde::Deserialize;

use crate::io::read_json;

/// On-disk scaler layout, tagged by `kind`.
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum ScalerArtifact {
    Standard {
        mean: Vec<f64>,
        scale: Vec<f64>,
        #[serde(default)]
        feature_names: Option<Vec<String>>,
    },
    MinMax {
        data_min: Vec<f64>,
        data_max: Vec<f64>,
        #[serde(default)]
        feature_range: Option<(f64, f64)>,
        #[serde(default)]
        feature_names: Option<Vec<String>>,
    },
}

/// Load a scaler from a JSON file.
///
/// Checks arity and, when the artifact records `feature_names`, that the
/// columns were fitted in the canonical order.
pub fn load_scaler(path: impl AsRef<Path>) -> FetalResult<Box<dyn IScaler>> {
    let path = path.as_ref();
    let artifact: ScalerArtifact = read_json(path)?;
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("scaler")
        .to_string();

    let scaler: Box<dyn IScaler> = match artifact {
        ScalerArtifact::Standard {
            mean,
            scale,
            feature_names,
        } => {
            check_feature_names(path, feature_names.as_deref())?;
            Box::new(StandardScaler::new(name, mean, scale).map_err(|e| at_path(e, path))?)
        }
        ScalerArtifact::MinMax {
            data_min,
            data_max,
            feature_range,
            feature_names,
        } => {
            check_feature_names(path, feature_names.as_deref())?;
            Box::new(
                MinMaxScaler::new(name, data_min, data_max, feature_range.unwrap_or((0.0, 1.0)))
                    .map_err(|e| at_path(e, path))?,
            )
        }
    };
    Ok(scaler)
}

fn check_feature_names(path: &Path, names: Option<&[String]>) -> Result<(), ArtifactError> {
    let Some(names) = names else {
        return Ok(());
    };
    if names.len() != FEATURE_COUNT {
        return Err(ArtifactError::ArityMismatch {
            artifact: format!("scaler feature_names in {}", path.display()),
            expected: FEATURE_COUNT,
            actual: names.len(),
        });
    }
    for (position, (field, actual)) in FeatureField::ALL.iter().zip(names).enumerate() {
        let matches = actual == field.name() || field.aliases().contains(&actual.as_str());
        if !matches {
            return Err(ArtifactError::FeatureOrderMismatch {
                path: path.display().to_string(),
                position,
                expected: field.name().to_string(),
                actual: actual.clone(),
            });
        }
    }
    Ok(())
}

/// Parameter errors from the constructors don't know the file; add it.
fn at_path(err: ArtifactError, path: &Path) -> ArtifactError {
    match err {
        ArtifactError::Malformed { reason, .. } => ArtifactError::Malformed {
            path: path.display().to_string(),
            reason,
        },
        other => other,
    }
}

/// Arity check shared by both scaler kinds.
pub(crate) fn check_len(artifact: &str, what: &str, values: &[f64]) -> Result<(), ArtifactError> {
    if values.len() != FEATURE_COUNT {
        return Err(ArtifactError::ArityMismatch {
            artifact: format!("{artifact} {what}"),
            expected: FEATURE_COUNT,
            actual: values.len(),
        });
    }
    Ok(())
}
