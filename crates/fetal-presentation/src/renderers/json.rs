//! JSON renderer for API responses.

use fetal_core::errors::ErrorCode;
use fetal_core::{FetalError, PredictionResult};
use serde_json::{json, Value};

use super::{IResultRenderer, Outcome};
use crate::severity::Severity;

#[derive(Debug, Clone, Default)]
pub struct JsonRenderer {
    pub pretty: bool,
}

impl JsonRenderer {
    pub fn to_value(outcome: Outcome<'_>) -> Value {
        match outcome {
            Ok(result) => Self::success(result),
            Err(e) => Self::failure(e),
        }
    }

    fn success(result: &PredictionResult) -> Value {
        let mut body = json!({
            "category": result.category,
            "label": result.category.label(),
            "severity": Severity::for_category(result.category),
        });
        if let Some(confidences) = &result.confidences {
            body["confidences"] = json!(confidences);
        }
        body
    }

    fn failure(err: &FetalError) -> Value {
        json!({
            "error": {
                "code": err.error_code(),
                "message": err.to_string(),
                "field": err.field().map(|f| f.name()),
            }
        })
    }
}

impl IResultRenderer for JsonRenderer {
    fn name(&self) -> &'static str {
        "json"
    }

    fn content_type(&self) -> &'static str {
        "application/json"
    }

    fn render(&self, outcome: Outcome<'_>) -> String {
        let value = Self::to_value(outcome);
        if self.pretty {
            serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
        } else {
            value.to_string()
        }
    }
}
