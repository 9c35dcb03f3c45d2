//! Renderers: output formats for prediction outcomes.
//!
//! Four formats: plain text (the original single line), a terminal report
//! with confidence bars, an HTML panel/page, and JSON.

pub mod html;
pub mod json;
pub mod report;
pub mod text;

pub use html::HtmlRenderer;
pub use json::JsonRenderer;
pub use report::ReportRenderer;
pub use text::PlainTextRenderer;

use fetal_core::{FetalError, PredictionResult};
use fetal_observability::render_span;

/// A finished prediction, or the error that stopped it.
pub type Outcome<'a> = Result<&'a PredictionResult, &'a FetalError>;

/// Trait for turning an outcome into something a surface can display.
pub trait IResultRenderer: Send + Sync {
    fn name(&self) -> &'static str;
    fn content_type(&self) -> &'static str;
    fn render(&self, outcome: Outcome<'_>) -> String;
}

/// Render inside a `fetal.render` span.
pub fn render_outcome(renderer: &dyn IResultRenderer, outcome: Outcome<'_>) -> String {
    let span = render_span!(renderer.name());
    let _guard = span.enter();
    renderer.render(outcome)
}

/// Create a renderer by format name.
pub fn create_renderer(format: &str) -> Option<Box<dyn IResultRenderer>> {
    match format {
        "text" => Some(Box::new(PlainTextRenderer)),
        "report" => Some(Box::new(ReportRenderer::default())),
        "html" => Some(Box::new(HtmlRenderer::new())),
        "json" => Some(Box::new(JsonRenderer::default())),
        _ => None,
    }
}

/// List all available renderer format names.
pub fn available_formats() -> &'static [&'static str] {
    &["text", "report", "html", "json"]
}
