//! HTML renderer: a result panel, and the full form page around it.
//!
//! Self-contained markup with inline CSS. The page form submits by GET to
//! `/predict`, so a result URL can be bookmarked or shared.

use fetal_core::{FeatureField, FetalError, PredictionResult};

use super::{IResultRenderer, Outcome};
use crate::form::FormState;
use crate::severity::{recommendation, Severity, DISCLAIMER};

pub struct HtmlRenderer {
    pub title: String,
    /// Where the page form submits.
    pub action: String,
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self {
            title: "Fetal Health Classification".to_string(),
            action: "/predict".to_string(),
        }
    }

    fn escape_html(s: &str) -> String {
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&#39;")
    }

    fn success_panel(result: &PredictionResult) -> String {
        let severity = Severity::for_category(result.category);
        let mut html = String::with_capacity(1024);
        html.push_str(&format!(
            "<div class=\"result result-{}\">\n",
            severity.as_str()
        ));
        html.push_str(&format!(
            "<h2>Fetal Health Type: {}</h2>\n",
            result.category
        ));

        if let Some(confidences) = &result.confidences {
            html.push_str("<table class=\"confidences\">\n");
            for (category, p) in confidences.iter() {
                let pct = p * 100.0;
                html.push_str(&format!(
                    "<tr><td>{}</td><td class=\"pct\">{pct:.1}%</td>\
                     <td><div class=\"bar\"><span class=\"fill fill-{}\" style=\"width:{pct:.1}%\"></span></div></td></tr>\n",
                    category.name(),
                    Severity::for_category(category).as_str(),
                ));
            }
            html.push_str("</table>\n");
        }

        html.push_str(&format!(
            "<p class=\"recommendation\">{}</p>\n",
            Self::escape_html(recommendation(result.category))
        ));
        html.push_str(&format!(
            "<p class=\"disclaimer\">{}</p>\n",
            Self::escape_html(DISCLAIMER)
        ));
        html.push_str("</div>\n");
        html
    }

    fn error_panel(err: &FetalError) -> String {
        let headline = if err.is_user_error() {
            "Please correct the highlighted field."
        } else {
            "No prediction could be made."
        };
        format!(
            "<div class=\"result result-error\">\n<h2>{}</h2>\n<p>{}</p>\n</div>\n",
            headline,
            Self::escape_html(&err.to_string())
        )
    }

    fn field_row(form: &FormState, field: FeatureField) -> String {
        let name = field.name();
        let value = form.value(field).map(Self::escape_html).unwrap_or_default();
        let (class, note) = match form.error(field) {
            Some(problem) => (
                " class=\"invalid\"",
                format!(
                    "<span class=\"field-error\">{}</span>",
                    Self::escape_html(problem)
                ),
            ),
            None => ("", String::new()),
        };
        format!(
            "<div class=\"field\"><label for=\"{name}\">{}</label>\
             <input type=\"text\" inputmode=\"decimal\" id=\"{name}\" name=\"{name}\" value=\"{value}\"{class}>{note}</div>\n",
            Self::escape_html(field.label()),
        )
    }

    /// The full page: the input form, refilled from `form`, followed by the
    /// result panel when there is an outcome.
    pub fn render_page(&self, form: &FormState, outcome: Option<Outcome<'_>>) -> String {
        let title = Self::escape_html(&self.title);
        let mut html = String::with_capacity(8192);

        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("<meta charset=\"UTF-8\">\n");
        html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
        html.push_str(&format!("<title>{title}</title>\n"));
        html.push_str("<style>\n");
        html.push_str(INLINE_CSS);
        html.push_str("</style>\n</head>\n<body>\n<div class=\"container\">\n");
        html.push_str(&format!("<h1>{title}</h1>\n"));
        html.push_str("<p>Enter the following features:</p>\n");

        html.push_str(&format!(
            "<form method=\"get\" action=\"{}\">\n",
            Self::escape_html(&self.action)
        ));
        for field in FeatureField::ALL {
            html.push_str(&Self::field_row(form, field));
        }
        html.push_str("<button type=\"submit\">Predict</button>\n</form>\n");

        if let Some(outcome) = outcome {
            html.push_str(&self.render(outcome));
        }

        html.push_str("</div>\n</body>\n</html>\n");
        html
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl IResultRenderer for HtmlRenderer {
    fn name(&self) -> &'static str {
        "html"
    }

    fn content_type(&self) -> &'static str {
        "text/html; charset=utf-8"
    }

    /// The result panel fragment only.
    fn render(&self, outcome: Outcome<'_>) -> String {
        match outcome {
            Ok(result) => Self::success_panel(result),
            Err(e) => Self::error_panel(e),
        }
    }
}

const INLINE_CSS: &str = r#"
* { margin: 0; padding: 0; box-sizing: border-box; }
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; background: #f5f5f5; color: #333; line-height: 1.6; }
.container { max-width: 720px; margin: 0 auto; padding: 20px; }
h1 { margin-bottom: 16px; font-size: 24px; }
h2 { font-size: 18px; margin-bottom: 8px; }
form { background: #fff; border: 1px solid #ddd; border-radius: 8px; padding: 16px; margin: 12px 0 24px; }
.field { display: flex; flex-wrap: wrap; align-items: center; margin-bottom: 8px; }
.field label { flex: 0 0 55%; font-size: 14px; }
.field input { flex: 1; padding: 4px 8px; border: 1px solid #ccc; border-radius: 4px; }
.field input.invalid { border-color: #dc3545; background: #fff5f5; }
.field-error { flex: 0 0 100%; margin-left: 55%; color: #dc3545; font-size: 12px; }
button { margin-top: 8px; padding: 6px 20px; border: 0; border-radius: 4px; background: #007bff; color: #fff; font-size: 14px; cursor: pointer; }
.result { padding: 16px; border-radius: 8px; margin-bottom: 24px; }
.result-success { background: #d4edda; border: 1px solid #c3e6cb; }
.result-warning { background: #fff3cd; border: 1px solid #ffeeba; }
.result-alert { background: #f8d7da; border: 1px solid #f5c6cb; }
.result-error { background: #e2e3e5; border: 1px solid #d6d8db; }
.confidences { width: 100%; border-collapse: collapse; font-size: 13px; margin: 8px 0; }
.confidences td { padding: 4px 8px; }
.confidences .pct { text-align: right; width: 60px; }
.bar { background: rgba(0,0,0,0.08); border-radius: 4px; height: 10px; width: 100%; }
.fill { display: block; height: 10px; border-radius: 4px; }
.fill-success { background: #28a745; }
.fill-warning { background: #ffc107; }
.fill-alert { background: #dc3545; }
.recommendation { margin-top: 8px; }
.disclaimer { margin-top: 8px; font-size: 12px; color: #666; }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use fetal_core::errors::InputProblem;
    use fetal_core::{CategoryConfidences, HealthCategory, RawInput};

    #[test]
    fn panel_class_follows_severity() {
        let html = HtmlRenderer::new();
        for (category, class) in [
            (HealthCategory::Normal, "result-success"),
            (HealthCategory::Suspect, "result-warning"),
            (HealthCategory::Pathological, "result-alert"),
        ] {
            let out = html.render(Ok(&PredictionResult::new(category)));
            assert!(out.contains(class), "{category}: {out}");
            assert!(out.contains(&format!("Fetal Health Type: {category}")));
        }
    }

    #[test]
    fn confidence_bars_only_when_present() {
        let html = HtmlRenderer::new();
        let plain = html.render(Ok(&PredictionResult::new(HealthCategory::Normal)));
        assert!(!plain.contains("class=\"bar\""));

        let with = html.render(Ok(&PredictionResult::with_confidences(
            HealthCategory::Normal,
            CategoryConfidences {
                normal: 0.9,
                suspect: 0.06,
                pathological: 0.04,
            },
        )));
        assert_eq!(with.matches("class=\"bar\"").count(), 3);
        assert!(with.contains("90.0%"));
    }

    #[test]
    fn page_refills_and_escapes_submitted_values() {
        let raw = RawInput::from_values(&[1.0; 10])
            .with(FeatureField::HistogramMean, "<script>");
        let form = FormState::from_submission(&raw);
        let err = FetalError::InvalidInput {
            field: FeatureField::HistogramMean,
            reason: InputProblem::NotANumber {
                value: "<script>".to_string(),
            },
        };
        let page = HtmlRenderer::new().render_page(&form, Some(Err(&err)));

        assert!(!page.contains("<script>"));
        assert!(page.contains("value=\"&lt;script&gt;\" class=\"invalid\""));
        assert!(page.contains("result-error"));
        assert_eq!(page.matches("<input ").count(), 10);
        assert_eq!(page.matches("class=\"invalid\"").count(), 1);
    }

    #[test]
    fn blank_page_has_form_and_no_result() {
        let page = HtmlRenderer::new().render_page(&FormState::empty(), None);
        assert!(page.contains("action=\"/predict\""));
        assert!(page.contains("Percentage of Time with Abnormal Long Term Variability"));
        assert!(!page.contains("class=\"result"));
    }
}
