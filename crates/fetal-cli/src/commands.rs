//! Subcommand bodies. I/O is passed in so they run the same under test.

use std::io::{BufRead, Write};

use anyhow::{anyhow, bail, Context};
use fetal_artifacts::ArtifactStore;
use fetal_core::{FetalConfig, FetalResult, PredictionResult, RawInput};
use fetal_inference::InferencePipeline;
use fetal_presentation::{available_formats, create_renderer, render_outcome};

use crate::args::{InteractiveArgs, OutputFormat, PredictArgs};
use crate::prompt::prompt_fields;

pub fn load_pipeline(config: &FetalConfig) -> anyhow::Result<InferencePipeline> {
    let store = ArtifactStore::load(&config.artifacts).context("cannot load model artifacts")?;
    Ok(InferencePipeline::from_store(store))
}

fn predict(
    pipeline: &InferencePipeline,
    raw: &RawInput,
    with_confidence: bool,
) -> FetalResult<PredictionResult> {
    if with_confidence {
        pipeline.predict_with_confidence(raw)
    } else {
        pipeline.predict(raw)
    }
}

fn write_outcome<W: Write>(
    format: OutputFormat,
    outcome: &FetalResult<PredictionResult>,
    out: &mut W,
) -> anyhow::Result<()> {
    let renderer = create_renderer(format.as_str())
        .ok_or_else(|| {
            anyhow!(
                "no renderer for format '{}' (available: {})",
                format.as_str(),
                available_formats().join(", ")
            )
        })?;
    let text = render_outcome(renderer.as_ref(), outcome.as_ref());
    writeln!(out, "{}", text.trim_end())?;
    Ok(())
}

/// Classify the flag values. Returns whether a category was produced.
pub fn run_predict<W: Write>(
    pipeline: &InferencePipeline,
    args: &PredictArgs,
    out: &mut W,
) -> anyhow::Result<bool> {
    let raw = args.fields.to_raw_input();
    let outcome = predict(pipeline, &raw, args.confidence);
    write_outcome(args.format, &outcome, out)?;
    Ok(outcome.is_ok())
}

/// Prompt for every field, then classify.
pub fn run_interactive<R: BufRead, W: Write>(
    pipeline: &InferencePipeline,
    args: &InteractiveArgs,
    input: R,
    out: &mut W,
) -> anyhow::Result<bool> {
    let Some(raw) = prompt_fields(input, out)? else {
        bail!("input ended before every field was entered");
    };
    writeln!(out)?;
    let outcome = predict(pipeline, &raw, args.confidence);
    write_outcome(args.format, &outcome, out)?;
    Ok(outcome.is_ok())
}

/// Load both artifacts and describe what was loaded.
pub fn run_check<W: Write>(config: &FetalConfig, out: &mut W) -> anyhow::Result<()> {
    let pipeline = load_pipeline(config)?;
    let summary = pipeline.artifacts().describe();
    writeln!(out, "scaler:        {} ({})", summary.scaler, config.artifacts.scaler_path)?;
    writeln!(
        out,
        "classifier:    {} ({})",
        summary.classifier, config.artifacts.classifier_path
    )?;
    writeln!(out, "features:      {}", summary.n_features)?;
    writeln!(out, "classes:       {:?}", summary.classes)?;
    writeln!(
        out,
        "confidences:   {}",
        if summary.supports_probabilities { "yes" } else { "no" }
    )?;
    Ok(())
}
