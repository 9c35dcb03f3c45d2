//! Raw field validation. The single point where surface values become floats.

use fetal_core::constants::FEATURE_COUNT;
use fetal_core::errors::{FetalError, FetalResult, InputProblem};
use fetal_core::{FeatureField, FeatureVector, RawInput, RawValue};

/// A rejected field and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: FeatureField,
    pub problem: InputProblem,
}

impl From<FieldError> for FetalError {
    fn from(e: FieldError) -> Self {
        FetalError::InvalidInput {
            field: e.field,
            reason: e.problem,
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field.label(), self.problem)
    }
}

/// Parse one field's raw value into a finite float.
pub fn parse_field_value(field: FeatureField, value: Option<&RawValue>) -> Result<f64, FieldError> {
    let fail = |problem| FieldError { field, problem };
    match value {
        None => Err(fail(InputProblem::Missing)),
        Some(RawValue::Number(v)) if v.is_finite() => Ok(*v),
        Some(RawValue::Number(v)) => Err(fail(InputProblem::NotFinite {
            value: v.to_string(),
        })),
        Some(RawValue::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Err(fail(InputProblem::Empty));
            }
            let parsed: f64 = text.parse().map_err(|_| {
                fail(InputProblem::NotANumber {
                    value: text.to_string(),
                })
            })?;
            if !parsed.is_finite() {
                return Err(fail(InputProblem::NotFinite {
                    value: text.to_string(),
                }));
            }
            Ok(parsed)
        }
        Some(RawValue::Other(other)) => Err(fail(InputProblem::NotANumber {
            value: other.to_string(),
        })),
    }
}

/// Validate every field and assemble them in fitted column order.
///
/// Fails on the first bad field in column order.
pub fn validate(raw: &RawInput) -> FetalResult<FeatureVector> {
    let mut values = [0.0; FEATURE_COUNT];
    for field in FeatureField::ALL {
        values[field.index()] = parse_field_value(field, raw.lookup(field))?;
    }
    Ok(FeatureVector::new(values))
}

/// Every bad field, in column order. Empty when the input is valid.
pub fn collect_field_errors(raw: &RawInput) -> Vec<FieldError> {
    FeatureField::ALL
        .into_iter()
        .filter_map(|field| parse_field_value(field, raw.lookup(field)).err())
        .collect()
}
