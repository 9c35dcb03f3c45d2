use crate::errors::FetalResult;
use crate::models::{ClassProbabilities, FeatureVector};

/// Pre-fitted multi-class decision function.
pub trait IClassifier: Send + Sync {
    /// Predict a single integer label for a normalized feature vector.
    fn predict_label(&self, features: &FeatureVector) -> FetalResult<i64>;

    /// Predict the class distribution, or `None` if this classifier variant
    /// does not produce probabilities.
    fn predict_proba(&self, features: &FeatureVector) -> FetalResult<Option<ClassProbabilities>>;

    /// Label and distribution from one evaluation. Override when a single
    /// run yields both, as an ONNX session does.
    fn predict_label_and_proba(
        &self,
        features: &FeatureVector,
    ) -> FetalResult<(i64, Option<ClassProbabilities>)> {
        Ok((self.predict_label(features)?, self.predict_proba(features)?))
    }

    /// Class labels the classifier was fitted on, in its internal order.
    fn classes(&self) -> &[i64];

    /// Number of input features the classifier was fitted on.
    fn n_features(&self) -> usize;

    /// Whether `predict_proba` returns a distribution.
    fn supports_probabilities(&self) -> bool;

    /// Human-readable classifier name.
    fn name(&self) -> &str;
}

impl<T: IClassifier + ?Sized> IClassifier for std::sync::Arc<T> {
    fn predict_label(&self, features: &FeatureVector) -> FetalResult<i64> {
        (**self).predict_label(features)
    }

    fn predict_proba(&self, features: &FeatureVector) -> FetalResult<Option<ClassProbabilities>> {
        (**self).predict_proba(features)
    }

    fn predict_label_and_proba(
        &self,
        features: &FeatureVector,
    ) -> FetalResult<(i64, Option<ClassProbabilities>)> {
        (**self).predict_label_and_proba(features)
    }

    fn classes(&self) -> &[i64] {
        (**self).classes()
    }

    fn n_features(&self) -> usize {
        (**self).n_features()
    }

    fn supports_probabilities(&self) -> bool {
        (**self).supports_probabilities()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
