//! Submitted form values and per-field problems, for re-rendering a form.

use std::collections::BTreeMap;

use fetal_core::{FeatureField, RawInput, RawValue};
use fetal_inference::collect_field_errors;

/// What the user typed into each field, and which fields were rejected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    values: BTreeMap<FeatureField, String>,
    errors: BTreeMap<FeatureField, String>,
}

impl FormState {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Capture a submission: echo every field back and annotate every bad one.
    pub fn from_submission(raw: &RawInput) -> Self {
        let values = FeatureField::ALL
            .into_iter()
            .filter_map(|field| {
                raw.lookup(field).map(|v| {
                    let text = match v {
                        RawValue::Number(n) => n.to_string(),
                        RawValue::Text(t) => t.clone(),
                        RawValue::Other(v) => v.to_string(),
                    };
                    (field, text)
                })
            })
            .collect();
        let errors = collect_field_errors(raw)
            .into_iter()
            .map(|e| (e.field, e.problem.to_string()))
            .collect();
        Self { values, errors }
    }

    pub fn value(&self, field: FeatureField) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    pub fn error(&self, field: FeatureField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Whether anything was submitted at all.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn echoes_values_and_marks_every_bad_field() {
        let raw = RawInput::from_values(&[1.0; 10])
            .with(FeatureField::HistogramMode, "abc")
            .with(FeatureField::Accelerations, "  ");
        let mut raw = raw;
        raw.remove(FeatureField::HistogramVariance.name());

        let form = FormState::from_submission(&raw);
        assert_eq!(form.value(FeatureField::HistogramMode), Some("abc"));
        assert_eq!(form.value(FeatureField::UterineContractions), Some("1"));
        assert_eq!(form.value(FeatureField::HistogramVariance), None);

        assert!(form.has_errors());
        assert!(form.error(FeatureField::HistogramMode).is_some());
        assert!(form.error(FeatureField::Accelerations).is_some());
        assert!(form.error(FeatureField::HistogramVariance).is_some());
        assert!(form.error(FeatureField::HistogramMean).is_none());
    }

    #[test]
    fn empty_form_has_no_errors() {
        let form = FormState::empty();
        assert!(form.is_empty());
        assert!(!form.has_errors());
    }
}
