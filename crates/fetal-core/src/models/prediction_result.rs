use serde::{Deserialize, Serialize};

use super::HealthCategory;

/// Per-category confidence, always in Normal/Suspect/Pathological order
/// regardless of how the classifier orders its classes internally.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryConfidences {
    #[serde(rename = "Normal")]
    pub normal: f64,
    #[serde(rename = "Suspect")]
    pub suspect: f64,
    #[serde(rename = "Pathological")]
    pub pathological: f64,
}

impl CategoryConfidences {
    pub fn get(&self, category: HealthCategory) -> f64 {
        match category {
            HealthCategory::Normal => self.normal,
            HealthCategory::Suspect => self.suspect,
            HealthCategory::Pathological => self.pathological,
        }
    }

    /// `(category, probability)` in fixed category order.
    pub fn iter(&self) -> impl Iterator<Item = (HealthCategory, f64)> + '_ {
        HealthCategory::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    pub fn sum(&self) -> f64 {
        self.normal + self.suspect + self.pathological
    }
}

/// Raw class distribution as a classifier reports it: `(label, probability)`
/// in the classifier's own class order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ClassProbabilities(pub Vec<(i64, f64)>);

impl ClassProbabilities {
    pub fn new(pairs: Vec<(i64, f64)>) -> Self {
        Self(pairs)
    }

    pub fn get(&self, label: i64) -> Option<f64> {
        self.0.iter().find(|(l, _)| *l == label).map(|(_, p)| *p)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Outcome of one prediction. Created per request, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub category: HealthCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidences: Option<CategoryConfidences>,
}

impl PredictionResult {
    pub fn new(category: HealthCategory) -> Self {
        Self {
            category,
            confidences: None,
        }
    }

    pub fn with_confidences(category: HealthCategory, confidences: CategoryConfidences) -> Self {
        Self {
            category,
            confidences: Some(confidences),
        }
    }
}
