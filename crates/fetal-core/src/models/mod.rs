mod feature_field;
mod feature_vector;
mod health_category;
mod prediction_result;
mod raw_input;

pub use feature_field::FeatureField;
pub use feature_vector::FeatureVector;
pub use health_category::HealthCategory;
pub use prediction_result::{CategoryConfidences, ClassProbabilities, PredictionResult};
pub use raw_input::{RawInput, RawValue};
