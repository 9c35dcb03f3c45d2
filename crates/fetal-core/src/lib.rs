//! # fetal-core
//!
//! Foundation crate for fetal health classification.
//! Defines the feature vector, health categories, prediction results,
//! the scaler/classifier traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::FetalConfig;
pub use errors::{FetalError, FetalResult};
pub use models::{
    CategoryConfidences, FeatureField, FeatureVector, HealthCategory, PredictionResult, RawInput,
    RawValue,
};
