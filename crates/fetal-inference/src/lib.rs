//! # fetal-inference
//!
//! Turns ten raw CTG measurements into a health category.
//!
//! ## Pipeline
//!
//! 1. **Validate**: every field present and a finite number, checked per field.
//! 2. **Order**: values assembled in fitted column order.
//! 3. **Scale**: the fitted scaler, no clamping afterwards.
//! 4. **Classify**: label, plus a distribution when asked and supported.
//! 5. **Map**: 1 → Normal, 2 → Suspect, 3 → Pathological; anything else fails.
//!
//! Validation errors never reach the scaler. Label errors never produce a
//! category.

pub mod confidence;
pub mod pipeline;
pub mod validation;

pub use pipeline::InferencePipeline;
pub use validation::{collect_field_errors, parse_field_value, validate, FieldError};
