//! Plain text renderer: the one-line result the first front ends printed.

use super::{IResultRenderer, Outcome};

#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextRenderer;

impl IResultRenderer for PlainTextRenderer {
    fn name(&self) -> &'static str {
        "text"
    }

    fn content_type(&self) -> &'static str {
        "text/plain; charset=utf-8"
    }

    fn render(&self, outcome: Outcome<'_>) -> String {
        match outcome {
            Ok(result) => format!("Fetal Health Type: {}", result.category),
            Err(e) => format!("Error: {e}"),
        }
    }
}
