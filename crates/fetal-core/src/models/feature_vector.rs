use serde::{Deserialize, Serialize};

use crate::constants::FEATURE_COUNT;

use super::FeatureField;

/// Exactly ten numeric values in fitted column order.
///
/// Only constructible from a full array, so a vector can never be short,
/// long, or keyed out of order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn new(values: [f64; FEATURE_COUNT]) -> Self {
        Self(values)
    }

    /// Build from a slice, returning `None` unless it has exactly ten entries.
    pub fn from_slice(values: &[f64]) -> Option<Self> {
        <[f64; FEATURE_COUNT]>::try_from(values).ok().map(Self)
    }

    pub fn get(&self, field: FeatureField) -> f64 {
        self.0[field.index()]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn values(&self) -> [f64; FEATURE_COUNT] {
        self.0
    }

    /// Values as f32, for runtimes that take single-precision tensors.
    pub fn to_f32(&self) -> Vec<f32> {
        self.0.iter().map(|&v| v as f32).collect()
    }

    /// `(field, value)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (FeatureField, f64)> + '_ {
        FeatureField::ALL.into_iter().zip(self.0.iter().copied())
    }

    pub fn len(&self) -> usize {
        FEATURE_COUNT
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl From<[f64; FEATURE_COUNT]> for FeatureVector {
    fn from(values: [f64; FEATURE_COUNT]) -> Self {
        Self(values)
    }
}
