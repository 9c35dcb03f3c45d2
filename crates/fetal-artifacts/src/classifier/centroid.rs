use fetal_core::errors::{ArtifactError, FetalResult};
use fetal_core::models::ClassProbabilities;
use fetal_core::traits::IClassifier;
use fetal_core::FeatureVector;

use super::{argmin, check_classes, check_matrix, no_decision};

/// Nearest-centroid classifier. Produces a label only.
#[derive(Debug, Clone)]
pub struct NearestCentroidClassifier {
    name: String,
    classes: Vec<i64>,
    centroids: Vec<Vec<f64>>,
}

impl NearestCentroidClassifier {
    pub fn new(
        name: impl Into<String>,
        classes: Vec<i64>,
        centroids: Vec<Vec<f64>>,
    ) -> Result<Self, ArtifactError> {
        let name = name.into();
        check_classes(&name, &classes)?;
        check_matrix(&name, "centroids", &centroids, classes.len())?;
        Ok(Self {
            name,
            classes,
            centroids,
        })
    }
}

impl IClassifier for NearestCentroidClassifier {
    fn predict_label(&self, features: &FeatureVector) -> FetalResult<i64> {
        let distances: Vec<f64> = self
            .centroids
            .iter()
            .map(|c| {
                c.iter()
                    .zip(features.as_slice())
                    .map(|(a, b)| (a - b) * (a - b))
                    .sum::<f64>()
            })
            .collect();
        let best = argmin(&distances).ok_or_else(|| no_decision(&self.name, &distances))?;
        Ok(self.classes[best])
    }

    fn predict_proba(&self, _features: &FeatureVector) -> FetalResult<Option<ClassProbabilities>> {
        Ok(None)
    }

    fn classes(&self) -> &[i64] {
        &self.classes
    }

    fn n_features(&self) -> usize {
        self.centroids.first().map_or(0, Vec::len)
    }

    fn supports_probabilities(&self) -> bool {
        false
    }

    fn name(&self) -> &str {
        &self.name
    }
}
