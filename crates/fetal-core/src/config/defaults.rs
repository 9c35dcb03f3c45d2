// Single source of truth for all default values.

// --- Artifacts ---
pub const DEFAULT_SCALER_PATH: &str = "models/scaler.json";
pub const DEFAULT_CLASSIFIER_PATH: &str = "models/model.onnx";
pub const DEFAULT_CLASSIFIER_FORMAT: &str = "auto";
pub const DEFAULT_ONNX_LABEL_OUTPUT: &str = "label";
pub const DEFAULT_ONNX_PROBABILITY_OUTPUT: &str = "probabilities";
pub const DEFAULT_ONNX_CLASS_LABELS: [i64; 3] = [1, 2, 3];
pub const DEFAULT_ONNX_INTRA_THREADS: usize = 1;

// --- Server ---
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
