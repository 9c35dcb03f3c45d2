/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of CTG measurements in a feature vector.
pub const FEATURE_COUNT: usize = 10;

/// Number of health categories the classifier distinguishes.
pub const CLASS_COUNT: usize = 3;

/// Classifier labels, in category order (Normal, Suspect, Pathological).
pub const CLASS_LABELS: [i64; CLASS_COUNT] = [1, 2, 3];

/// Tolerance for the sum of returned confidences.
pub const CONFIDENCE_SUM_TOLERANCE: f64 = 1e-6;

/// Tolerance accepted on the raw distribution coming out of a classifier
/// before it is renormalized. Single-precision runtimes drift past 1e-6.
pub const RAW_PROBABILITY_SUM_TOLERANCE: f64 = 1e-3;
