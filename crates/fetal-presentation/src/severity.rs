//! Category styling and the static recommendation table.

use std::fmt;

use fetal_core::HealthCategory;
use serde::Serialize;

/// How loudly a category should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Warning,
    Alert,
}

impl Severity {
    pub fn for_category(category: HealthCategory) -> Self {
        match category {
            HealthCategory::Normal => Severity::Success,
            HealthCategory::Suspect => Severity::Warning,
            HealthCategory::Pathological => Severity::Alert,
        }
    }

    /// CSS class and JSON name.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Alert => "alert",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Appended to every human-facing result.
pub const DISCLAIMER: &str =
    "This classification supports clinical review of the CTG trace and does not replace it.";

/// Static guidance keyed by category.
pub fn recommendation(category: HealthCategory) -> &'static str {
    match category {
        HealthCategory::Normal => {
            "Findings are consistent with a reassuring trace. Continue routine monitoring."
        }
        HealthCategory::Suspect => {
            "Findings are non-reassuring. Increase surveillance and have the trace reviewed by a senior clinician."
        }
        HealthCategory::Pathological => {
            "Findings are abnormal. Escalate to the obstetric team without delay."
        }
    }
}
