use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::FEATURE_COUNT;

/// One of the ten CTG measurements, in the column order the scaler and
/// classifier were fitted on. The discriminant is the column index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureField {
    Accelerations = 0,
    UterineContractions = 1,
    ProlonguedDecelerations = 2,
    AbnormalShortTermVariability = 3,
    PctAbnormalLongTermVariability = 4,
    MeanLongTermVariability = 5,
    HistogramMode = 6,
    HistogramMean = 7,
    HistogramMedian = 8,
    HistogramVariance = 9,
}

impl FeatureField {
    /// All fields in fitted column order.
    pub const ALL: [FeatureField; FEATURE_COUNT] = [
        FeatureField::Accelerations,
        FeatureField::UterineContractions,
        FeatureField::ProlonguedDecelerations,
        FeatureField::AbnormalShortTermVariability,
        FeatureField::PctAbnormalLongTermVariability,
        FeatureField::MeanLongTermVariability,
        FeatureField::HistogramMode,
        FeatureField::HistogramMean,
        FeatureField::HistogramMedian,
        FeatureField::HistogramVariance,
    ];

    /// Column index in the feature vector.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Canonical snake_case name.
    pub fn name(self) -> &'static str {
        match self {
            FeatureField::Accelerations => "accelerations",
            FeatureField::UterineContractions => "uterine_contractions",
            FeatureField::ProlonguedDecelerations => "prolongued_decelerations",
            FeatureField::AbnormalShortTermVariability => "abnormal_short_term_variability",
            FeatureField::PctAbnormalLongTermVariability => "pct_abnormal_long_term_variability",
            FeatureField::MeanLongTermVariability => "mean_long_term_variability",
            FeatureField::HistogramMode => "histogram_mode",
            FeatureField::HistogramMean => "histogram_mean",
            FeatureField::HistogramMedian => "histogram_median",
            FeatureField::HistogramVariance => "histogram_variance",
        }
    }

    /// Longer names used by the dataset's original column headers and
    /// older web forms. A canonical key always wins over an alias.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            FeatureField::PctAbnormalLongTermVariability => {
                &["percentage_of_time_with_abnormal_long_term_variability"]
            }
            FeatureField::MeanLongTermVariability => &["mean_value_of_long_term_variability"],
            _ => &[],
        }
    }

    /// Human-readable label for forms and prompts.
    pub fn label(self) -> &'static str {
        match self {
            FeatureField::Accelerations => "Accelerations",
            FeatureField::UterineContractions => "Uterine Contractions",
            FeatureField::ProlonguedDecelerations => "Prolongued Decelerations",
            FeatureField::AbnormalShortTermVariability => "Abnormal Short Term Variability",
            FeatureField::PctAbnormalLongTermVariability => {
                "Percentage of Time with Abnormal Long Term Variability"
            }
            FeatureField::MeanLongTermVariability => "Mean Value of Long Term Variability",
            FeatureField::HistogramMode => "Histogram Mode",
            FeatureField::HistogramMean => "Histogram Mean",
            FeatureField::HistogramMedian => "Histogram Median",
            FeatureField::HistogramVariance => "Histogram Variance",
        }
    }
}

impl fmt::Display for FeatureField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FeatureField {
    type Err = String;

    /// Accepts canonical names and aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FeatureField::ALL
            .into_iter()
            .find(|f| f.name() == s || f.aliases().contains(&s))
            .ok_or_else(|| format!("unknown feature field: {s}"))
    }
}
