use fetal_core::errors::{ArtifactError, FetalResult};
use fetal_core::traits::IScaler;
use fetal_core::FeatureVector;

use super::check_len;
use crate::io::ensure_finite;

/// Standardization: `(x - mean) / scale`.
#[derive(Debug, Clone)]
pub struct StandardScaler {
    name: String,
    mean: Vec<f64>,
    scale: Vec<f64>,
}

impl StandardScaler {
    /// A zero `scale` entry (constant column at fit time) is treated as 1.0.
    pub fn new(
        name: impl Into<String>,
        mean: Vec<f64>,
        scale: Vec<f64>,
    ) -> Result<Self, ArtifactError> {
        let name = name.into();
        check_len(&name, "mean", &mean)?;
        check_len(&name, "scale", &scale)?;
        ensure_finite(&name, "mean", &mean)?;
        ensure_finite(&name, "scale", &scale)?;
        let scale = scale
            .into_iter()
            .map(|s| if s == 0.0 { 1.0 } else { s })
            .collect();
        Ok(Self { name, mean, scale })
    }
}

impl IScaler for StandardScaler {
    fn transform(&self, features: &FeatureVector) -> FetalResult<FeatureVector> {
        let mut out = features.values();
        for (i, v) in out.iter_mut().enumerate() {
            *v = (*v - self.mean[i]) / self.scale[i];
        }
        Ok(FeatureVector::new(out))
    }

    fn n_features(&self) -> usize {
        self.mean.len()
    }

    fn name(&self) -> &str {
        &self.name
    }
}
