//! # fetal-cli
//!
//! The `fetal` command: classify from flags, from prompts, or check that
//! the configured artifacts load.

pub mod args;
pub mod commands;
pub mod prompt;

pub use args::{Cli, Command, OutputFormat};
