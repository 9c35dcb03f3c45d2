use fetal_core::errors::{ArtifactError, FetalResult};
use fetal_core::models::ClassProbabilities;
use fetal_core::traits::IClassifier;
use fetal_core::FeatureVector;
use serde::{Deserialize, Serialize};

use super::{argmax, check_classes, check_matrix, no_decision};
use crate::io::ensure_finite;

/// How per-class scores become probabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkFunction {
    /// Multinomial logistic regression.
    #[default]
    Softmax,
    /// Independent sigmoids, normalized to sum to one.
    OneVsRest,
}

/// Linear decision function `W·x + b` per class.
#[derive(Debug, Clone)]
pub struct LinearClassifier {
    name: String,
    classes: Vec<i64>,
    coefficients: Vec<Vec<f64>>,
    intercepts: Vec<f64>,
    link: LinkFunction,
}

impl LinearClassifier {
    pub fn new(
        name: impl Into<String>,
        classes: Vec<i64>,
        coefficients: Vec<Vec<f64>>,
        intercepts: Vec<f64>,
        link: LinkFunction,
    ) -> Result<Self, ArtifactError> {
        let name = name.into();
        check_classes(&name, &classes)?;
        check_matrix(&name, "coefficients", &coefficients, classes.len())?;
        if intercepts.len() != classes.len() {
            return Err(ArtifactError::Malformed {
                path: name,
                reason: format!(
                    "{} intercepts for {} classes",
                    intercepts.len(),
                    classes.len()
                ),
            });
        }
        ensure_finite(&name, "intercepts", &intercepts)?;
        Ok(Self {
            name,
            classes,
            coefficients,
            intercepts,
            link,
        })
    }

    /// Raw per-class scores.
    fn decision_function(&self, features: &FeatureVector) -> Vec<f64> {
        self.coefficients
            .iter()
            .zip(&self.intercepts)
            .map(|(row, b)| {
                row.iter()
                    .zip(features.as_slice())
                    .map(|(w, x)| w * x)
                    .sum::<f64>()
                    + b
            })
            .collect()
    }
}

impl IClassifier for LinearClassifier {
    fn predict_label(&self, features: &FeatureVector) -> FetalResult<i64> {
        let scores = self.decision_function(features);
        let best = argmax(&scores).ok_or_else(|| no_decision(&self.name, &scores))?;
        Ok(self.classes[best])
    }

    fn predict_proba(&self, features: &FeatureVector) -> FetalResult<Option<ClassProbabilities>> {
        let scores = self.decision_function(features);
        let probs = match self.link {
            LinkFunction::Softmax => softmax(&scores),
            LinkFunction::OneVsRest => {
                let sig: Vec<f64> = scores.iter().map(|s| 1.0 / (1.0 + (-s).exp())).collect();
                let total: f64 = sig.iter().sum();
                sig.into_iter().map(|p| p / total).collect()
            }
        };
        Ok(Some(ClassProbabilities::new(
            self.classes.iter().copied().zip(probs).collect(),
        )))
    }

    fn classes(&self) -> &[i64] {
        &self.classes
    }

    fn n_features(&self) -> usize {
        self.coefficients.first().map_or(0, Vec::len)
    }

    fn supports_probabilities(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Numerically stable softmax.
fn softmax(scores: &[f64]) -> Vec<f64> {
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exp: Vec<f64> = scores.iter().map(|s| (s - max).exp()).collect();
    let total: f64 = exp.iter().sum();
    exp.into_iter().map(|e| e / total).collect()
}
