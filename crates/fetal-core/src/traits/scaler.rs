use crate::errors::FetalResult;
use crate::models::FeatureVector;

/// Pre-fitted normalization transform.
///
/// Implementations are immutable after construction; `transform` must not
/// mutate shared state so concurrent callers need no locking.
pub trait IScaler: Send + Sync {
    /// Map a raw feature vector to a normalized one of the same arity.
    fn transform(&self, features: &FeatureVector) -> FetalResult<FeatureVector>;

    /// Number of input features the transform was fitted on.
    fn n_features(&self) -> usize;

    /// Human-readable scaler name.
    fn name(&self) -> &str;
}

impl<T: IScaler + ?Sized> IScaler for std::sync::Arc<T> {
    fn transform(&self, features: &FeatureVector) -> FetalResult<FeatureVector> {
        (**self).transform(features)
    }

    fn n_features(&self) -> usize {
        (**self).n_features()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
