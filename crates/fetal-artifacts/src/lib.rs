//! # fetal-artifacts
//!
//! The artifact store: a fitted scaler and a fitted classifier, loaded once
//! at startup and read-only afterwards.
//!
//! ## Supported formats
//!
//! | Artifact | Format | Notes |
//! |----------|--------|-------|
//! | Scaler | JSON `standard` | `(x - mean) / scale` |
//! | Scaler | JSON `min_max` | `(x - min) / (max - min)` mapped into `feature_range` |
//! | Classifier | JSON `linear` | multinomial softmax or one-vs-rest logistic |
//! | Classifier | JSON `nearest_centroid` | label only, no probabilities |
//! | Classifier | ONNX | sklearn-onnx layout, run through `ort` |
//!
//! Any shape problem (wrong arity, wrong class set, wrong column order)
//! fails the load. There is no degraded mode.

pub mod classifier;
mod io;
pub mod scaler;
pub mod store;

pub use classifier::{load_classifier, ClassifierFormat};
pub use scaler::load_scaler;
pub use store::{ArtifactStore, ArtifactSummary};
