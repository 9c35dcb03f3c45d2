use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::FeatureField;

/// A field value as the input surface delivered it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
    /// Any other JSON value (`null`, a boolean, an array, an object).
    /// Kept so validation can name the field instead of failing the body.
    Other(serde_json::Value),
}

impl From<f64> for RawValue {
    fn from(v: f64) -> Self {
        RawValue::Number(v)
    }
}

impl From<&str> for RawValue {
    fn from(v: &str) -> Self {
        RawValue::Text(v.to_string())
    }
}

impl From<String> for RawValue {
    fn from(v: String) -> Self {
        RawValue::Text(v)
    }
}

/// Named raw values collected from a form, query string, JSON body, or prompt.
///
/// Keys are free-form; unknown keys are ignored by validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawInput(BTreeMap<String, RawValue>);

impl RawInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<RawValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Builder-style insert keyed by canonical field name.
    pub fn with(mut self, field: FeatureField, value: impl Into<RawValue>) -> Self {
        self.insert(field.name(), value);
        self
    }

    /// Build from a full vector of numbers in column order.
    pub fn from_values(values: &[f64; crate::constants::FEATURE_COUNT]) -> Self {
        FeatureField::ALL
            .into_iter()
            .zip(values.iter())
            .fold(Self::new(), |acc, (field, &v)| acc.with(field, v))
    }

    /// Look up a field by canonical name, falling back to its aliases.
    pub fn lookup(&self, field: FeatureField) -> Option<&RawValue> {
        self.0.get(field.name()).or_else(|| {
            field
                .aliases()
                .iter()
                .find_map(|alias| self.0.get(*alias))
        })
    }

    pub fn remove(&mut self, key: &str) -> Option<RawValue> {
        self.0.remove(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<RawValue>> FromIterator<(K, V)> for RawInput {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
