//! Command-line surface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use fetal_core::config::ConfigOverrides;
use fetal_core::{FeatureField, RawInput};

#[derive(Debug, Parser)]
#[command(
    name = "fetal",
    version,
    about = "Classify fetal health from cardiotocography measurements",
    long_about = "fetal classifies a CTG recording as Normal, Suspect, or Pathological \
        from ten summary measurements.\n\n\
        Commands:\n  \
        predict      Classify values given as flags\n  \
        interactive  Prompt for each value\n  \
        check        Load the artifacts and describe them"
)]
pub struct Cli {
    /// TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Scaler artifact, overrides artifacts.scaler_path
    #[arg(long, global = true)]
    pub scaler: Option<String>,

    /// Classifier artifact, overrides artifacts.classifier_path
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// More log output on stderr (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Classify one set of measurements given as flags
    Predict(PredictArgs),
    /// Prompt for each measurement, then classify
    Interactive(InteractiveArgs),
    /// Load the scaler and classifier and describe them
    Check,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One line: the category
    #[default]
    Text,
    /// Category, confidence bars, recommendation
    Report,
    /// Machine-readable
    Json,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Report => "report",
            OutputFormat::Json => "json",
        }
    }
}

/// The ten measurements. Values stay text until validation so a bad value
/// is reported against its field.
#[derive(Debug, Clone, Default, Args)]
pub struct FieldArgs {
    #[arg(long)]
    pub accelerations: Option<String>,
    #[arg(long)]
    pub uterine_contractions: Option<String>,
    #[arg(long)]
    pub prolongued_decelerations: Option<String>,
    #[arg(long)]
    pub abnormal_short_term_variability: Option<String>,
    #[arg(long, alias = "percentage-of-time-with-abnormal-long-term-variability")]
    pub pct_abnormal_long_term_variability: Option<String>,
    #[arg(long, alias = "mean-value-of-long-term-variability")]
    pub mean_long_term_variability: Option<String>,
    #[arg(long)]
    pub histogram_mode: Option<String>,
    #[arg(long)]
    pub histogram_mean: Option<String>,
    #[arg(long)]
    pub histogram_median: Option<String>,
    #[arg(long)]
    pub histogram_variance: Option<String>,
}

impl FieldArgs {
    fn get(&self, field: FeatureField) -> Option<&String> {
        match field {
            FeatureField::Accelerations => self.accelerations.as_ref(),
            FeatureField::UterineContractions => self.uterine_contractions.as_ref(),
            FeatureField::ProlonguedDecelerations => self.prolongued_decelerations.as_ref(),
            FeatureField::AbnormalShortTermVariability => {
                self.abnormal_short_term_variability.as_ref()
            }
            FeatureField::PctAbnormalLongTermVariability => {
                self.pct_abnormal_long_term_variability.as_ref()
            }
            FeatureField::MeanLongTermVariability => self.mean_long_term_variability.as_ref(),
            FeatureField::HistogramMode => self.histogram_mode.as_ref(),
            FeatureField::HistogramMean => self.histogram_mean.as_ref(),
            FeatureField::HistogramMedian => self.histogram_median.as_ref(),
            FeatureField::HistogramVariance => self.histogram_variance.as_ref(),
        }
    }

    /// Supplied flags only; an absent flag stays absent so validation
    /// reports it as missing.
    pub fn to_raw_input(&self) -> RawInput {
        FeatureField::ALL
            .into_iter()
            .filter_map(|field| self.get(field).map(|v| (field.name(), v.clone())))
            .collect()
    }
}

#[derive(Debug, Clone, Args)]
pub struct PredictArgs {
    #[command(flatten)]
    pub fields: FieldArgs,

    /// Include per-category confidences when the classifier provides them
    #[arg(long)]
    pub confidence: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Args)]
pub struct InteractiveArgs {
    /// Include per-category confidences when the classifier provides them
    #[arg(long)]
    pub confidence: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Report)]
    pub format: OutputFormat,
}

impl Cli {
    /// Command-line values layered over the config file.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            scaler_path: self.scaler.clone(),
            classifier_path: self.model.clone(),
            log_level: ConfigOverrides::log_level_for_verbosity(self.verbose),
            ..Default::default()
        }
    }
}
