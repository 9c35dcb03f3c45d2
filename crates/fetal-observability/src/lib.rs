//! # fetal-observability
//!
//! Tracing subscriber initialization and the span macros used by the
//! artifact store, the pipeline, and the renderers.

pub mod tracing_setup;

pub use tracing_setup::{build_filter, init_tracing, init_tracing_with_filter, LOG_ENV_VAR};
