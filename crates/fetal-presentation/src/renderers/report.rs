//! Report renderer: terminal-friendly summary with a text bar chart.

use fetal_core::{FetalError, PredictionResult};

use super::{IResultRenderer, Outcome};
use crate::severity::{recommendation, Severity, DISCLAIMER};

/// Multi-line report: category, severity, confidence bars, guidance.
#[derive(Debug, Clone)]
pub struct ReportRenderer {
    /// Width of a 100% bar, in characters.
    pub bar_width: usize,
    pub show_recommendation: bool,
}

impl Default for ReportRenderer {
    fn default() -> Self {
        Self {
            bar_width: 40,
            show_recommendation: true,
        }
    }
}

impl ReportRenderer {
    fn bar(&self, p: f64) -> String {
        let filled = (p.clamp(0.0, 1.0) * self.bar_width as f64).round() as usize;
        format!(
            "{}{}",
            "#".repeat(filled),
            ".".repeat(self.bar_width - filled)
        )
    }

    fn success(&self, result: &PredictionResult) -> String {
        let severity = Severity::for_category(result.category);
        let mut out = String::new();
        out.push_str(&format!("Fetal Health Type: {}\n", result.category));
        out.push_str(&format!("Severity:          {severity}\n"));

        if let Some(confidences) = &result.confidences {
            out.push_str("\nConfidence\n");
            for (category, p) in confidences.iter() {
                out.push_str(&format!(
                    "  {:<13} {:>6.1}%  {}\n",
                    category.name(),
                    p * 100.0,
                    self.bar(p)
                ));
            }
        }

        if self.show_recommendation {
            out.push_str("\nRecommendation\n");
            out.push_str(&format!("  {}\n", recommendation(result.category)));
            out.push_str(&format!("\n{DISCLAIMER}\n"));
        }
        out
    }

    fn failure(err: &FetalError) -> String {
        let mut out = format!("Error: {err}\n");
        if let Some(field) = err.field() {
            out.push_str(&format!("Check the value for \"{}\".\n", field.label()));
        } else {
            out.push_str("No prediction was made.\n");
        }
        out
    }
}

impl IResultRenderer for ReportRenderer {
    fn name(&self) -> &'static str {
        "report"
    }

    fn content_type(&self) -> &'static str {
        "text/plain; charset=utf-8"
    }

    fn render(&self, outcome: Outcome<'_>) -> String {
        match outcome {
            Ok(result) => self.success(result),
            Err(e) => Self::failure(e),
        }
    }
}
