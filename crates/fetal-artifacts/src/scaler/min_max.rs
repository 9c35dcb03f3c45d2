use fetal_core::errors::{ArtifactError, FetalResult};
use fetal_core::traits::IScaler;
use fetal_core::FeatureVector;

use super::check_len;
use crate::io::ensure_finite;

/// Min-max scaling into `feature_range`.
#[derive(Debug, Clone)]
pub struct MinMaxScaler {
    name: String,
    data_min: Vec<f64>,
    data_range: Vec<f64>,
    feature_range: (f64, f64),
}

impl MinMaxScaler {
    pub fn new(
        name: impl Into<String>,
        data_min: Vec<f64>,
        data_max: Vec<f64>,
        feature_range: (f64, f64),
    ) -> Result<Self, ArtifactError> {
        let name = name.into();
        check_len(&name, "data_min", &data_min)?;
        check_len(&name, "data_max", &data_max)?;
        ensure_finite(&name, "data_min", &data_min)?;
        ensure_finite(&name, "data_max", &data_max)?;
        ensure_finite(&name, "feature_range", &[feature_range.0, feature_range.1])?;
        if feature_range.0 >= feature_range.1 {
            return Err(ArtifactError::Malformed {
                path: name,
                reason: format!("feature_range {feature_range:?} is empty"),
            });
        }
        let data_range = data_min
            .iter()
            .zip(&data_max)
            .map(|(lo, hi)| {
                let r = hi - lo;
                if r == 0.0 {
                    1.0
                } else {
                    r
                }
            })
            .collect();
        Ok(Self {
            name,
            data_min,
            data_range,
            feature_range,
        })
    }
}

impl IScaler for MinMaxScaler {
    fn transform(&self, features: &FeatureVector) -> FetalResult<FeatureVector> {
        let (lo, hi) = self.feature_range;
        let mut out = features.values();
        for (i, v) in out.iter_mut().enumerate() {
            let unit = (*v - self.data_min[i]) / self.data_range[i];
            *v = unit * (hi - lo) + lo;
        }
        Ok(FeatureVector::new(out))
    }

    fn n_features(&self) -> usize {
        self.data_min.len()
    }

    fn name(&self) -> &str {
        &self.name
    }
}
