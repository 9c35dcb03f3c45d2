//! Reorders a classifier's class distribution into fixed category order.

use fetal_core::constants::{CLASS_COUNT, CONFIDENCE_SUM_TOLERANCE, RAW_PROBABILITY_SUM_TOLERANCE};
use fetal_core::errors::{FetalError, FetalResult};
use fetal_core::models::{CategoryConfidences, ClassProbabilities};
use fetal_core::HealthCategory;

/// Convert a raw distribution to Normal/Suspect/Pathological confidences.
///
/// Each probability must lie in [0, 1] and the total must be within
/// `RAW_PROBABILITY_SUM_TOLERANCE` of one. The result is renormalized so
/// it sums to one within `CONFIDENCE_SUM_TOLERANCE`.
pub fn to_category_confidences(probs: &ClassProbabilities) -> FetalResult<CategoryConfidences> {
    let invalid = |reason: String| FetalError::InvalidProbabilities { reason };

    if probs.len() != CLASS_COUNT {
        return Err(invalid(format!(
            "expected {CLASS_COUNT} classes, got {}",
            probs.len()
        )));
    }

    let mut ordered = [None; CLASS_COUNT];
    for &(label, p) in &probs.0 {
        let category = HealthCategory::from_label(label)
            .map_err(|_| invalid(format!("distribution contains unknown label {label}")))?;
        if !p.is_finite() || p < -CONFIDENCE_SUM_TOLERANCE || p > 1.0 + CONFIDENCE_SUM_TOLERANCE {
            return Err(invalid(format!("probability {p} for label {label} outside [0, 1]")));
        }
        let slot = &mut ordered[category.index()];
        if slot.is_some() {
            return Err(invalid(format!("label {label} appears twice")));
        }
        *slot = Some(p.clamp(0.0, 1.0));
    }

    // Every slot is filled: three distinct labels from {1, 2, 3}.
    let [normal, suspect, pathological] = ordered.map(|p| p.unwrap_or(0.0));
    let total = normal + suspect + pathological;
    if (total - 1.0).abs() > RAW_PROBABILITY_SUM_TOLERANCE {
        return Err(invalid(format!("probabilities sum to {total}")));
    }

    Ok(CategoryConfidences {
        normal: normal / total,
        suspect: suspect / total,
        pathological: pathological / total,
    })
}
