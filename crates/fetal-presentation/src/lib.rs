//! # fetal-presentation
//!
//! Everything between a [`PredictionResult`](fetal_core::PredictionResult)
//! and a human: severity styling, static recommendation text, and the
//! renderers behind [`IResultRenderer`].
//!
//! Nothing here feeds back into the pipeline.

pub mod form;
pub mod renderers;
pub mod severity;

pub use form::FormState;
pub use renderers::{
    available_formats, create_renderer, render_outcome, HtmlRenderer, IResultRenderer,
    JsonRenderer, Outcome, PlainTextRenderer, ReportRenderer,
};
pub use severity::{recommendation, Severity, DISCLAIMER};
