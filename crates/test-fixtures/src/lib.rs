//! Test fixtures for fetal health classification: JSON fixture loader,
//! golden CTG cases, and stub scaler/classifier implementations.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use fetal_core::constants::{CLASS_LABELS, FEATURE_COUNT};
use fetal_core::errors::FetalResult;
use fetal_core::models::ClassProbabilities;
use fetal_core::traits::{IClassifier, IScaler};
use fetal_core::{FeatureField, FeatureVector, HealthCategory, RawInput};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Root directory of the test-fixtures crate.
pub fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Path to the synthetic standard scaler.
pub fn scaler_fixture() -> PathBuf {
    fixture_path("artifacts/scaler_standard.json")
}

/// Path to the synthetic linear (probability-producing) classifier.
pub fn linear_model_fixture() -> PathBuf {
    fixture_path("artifacts/model_linear.json")
}

/// Path to the synthetic nearest-centroid (label-only) classifier.
pub fn centroid_model_fixture() -> PathBuf {
    fixture_path("artifacts/model_centroid.json")
}

// ── Golden cases ──────────────────────────────────────────────────────────

/// A documented sample input and the category it must produce.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenCase {
    pub name: String,
    pub features: [f64; FEATURE_COUNT],
    pub expected: HealthCategory,
}

impl GoldenCase {
    pub fn raw_input(&self) -> RawInput {
        RawInput::from_values(&self.features)
    }

    /// The same case as the text a form would submit.
    pub fn raw_text_input(&self) -> RawInput {
        FeatureField::ALL
            .into_iter()
            .map(|f| (f.name(), self.features[f.index()].to_string()))
            .collect()
    }
}

pub fn golden_cases() -> Vec<GoldenCase> {
    load_fixture("golden/ctg_cases.json")
}

/// A complete, valid input with every field set to `value`.
pub fn uniform_input(value: f64) -> RawInput {
    RawInput::from_values(&[value; FEATURE_COUNT])
}

// ── Stub scalers ──────────────────────────────────────────────────────────

/// Passes features through unchanged.
#[derive(Debug, Default)]
pub struct IdentityScaler;

impl IScaler for IdentityScaler {
    fn transform(&self, features: &FeatureVector) -> FetalResult<FeatureVector> {
        Ok(*features)
    }
    fn n_features(&self) -> usize {
        FEATURE_COUNT
    }
    fn name(&self) -> &str {
        "identity"
    }
}

/// Identity scaler that counts calls, to prove rejected input never reaches it.
#[derive(Debug, Default)]
pub struct CountingScaler {
    calls: AtomicUsize,
}

impl CountingScaler {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl IScaler for CountingScaler {
    fn transform(&self, features: &FeatureVector) -> FetalResult<FeatureVector> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(*features)
    }
    fn n_features(&self) -> usize {
        FEATURE_COUNT
    }
    fn name(&self) -> &str {
        "counting"
    }
}

/// Scaler reporting the wrong arity.
#[derive(Debug, Default)]
pub struct NineFeatureScaler;

impl IScaler for NineFeatureScaler {
    fn transform(&self, features: &FeatureVector) -> FetalResult<FeatureVector> {
        Ok(*features)
    }
    fn n_features(&self) -> usize {
        9
    }
    fn name(&self) -> &str {
        "nine-feature"
    }
}

// ── Stub classifiers ──────────────────────────────────────────────────────

/// Always returns the same label, with no probabilities.
#[derive(Debug)]
pub struct FixedLabelClassifier {
    pub label: i64,
}

impl FixedLabelClassifier {
    pub fn new(label: i64) -> Self {
        Self { label }
    }
}

impl IClassifier for FixedLabelClassifier {
    fn predict_label(&self, _features: &FeatureVector) -> FetalResult<i64> {
        Ok(self.label)
    }
    fn predict_proba(&self, _features: &FeatureVector) -> FetalResult<Option<ClassProbabilities>> {
        Ok(None)
    }
    fn classes(&self) -> &[i64] {
        &CLASS_LABELS
    }
    fn n_features(&self) -> usize {
        FEATURE_COUNT
    }
    fn supports_probabilities(&self) -> bool {
        false
    }
    fn name(&self) -> &str {
        "fixed-label"
    }
}

/// Returns a fixed label and a fixed distribution in its own class order.
#[derive(Debug)]
pub struct FixedProbabilityClassifier {
    pub label: i64,
    pub classes: Vec<i64>,
    pub probabilities: Vec<f64>,
}

impl FixedProbabilityClassifier {
    pub fn new(label: i64, classes: Vec<i64>, probabilities: Vec<f64>) -> Self {
        Self {
            label,
            classes,
            probabilities,
        }
    }
}

impl IClassifier for FixedProbabilityClassifier {
    fn predict_label(&self, _features: &FeatureVector) -> FetalResult<i64> {
        Ok(self.label)
    }
    fn predict_proba(&self, _features: &FeatureVector) -> FetalResult<Option<ClassProbabilities>> {
        Ok(Some(ClassProbabilities::new(
            self.classes
                .iter()
                .copied()
                .zip(self.probabilities.iter().copied())
                .collect(),
        )))
    }
    fn classes(&self) -> &[i64] {
        &self.classes
    }
    fn n_features(&self) -> usize {
        FEATURE_COUNT
    }
    fn supports_probabilities(&self) -> bool {
        true
    }
    fn name(&self) -> &str {
        "fixed-probability"
    }
}

/// Records every vector it sees and labels by comparing two columns:
/// Normal when `left <= right`, Suspect otherwise.
#[derive(Debug)]
pub struct RecordingClassifier {
    left: FeatureField,
    right: FeatureField,
    seen: Mutex<Vec<FeatureVector>>,
}

impl RecordingClassifier {
    pub fn comparing(left: FeatureField, right: FeatureField) -> Self {
        Self {
            left,
            right,
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn seen(&self) -> Vec<FeatureVector> {
        self.seen.lock().unwrap().clone()
    }
}

impl IClassifier for RecordingClassifier {
    fn predict_label(&self, features: &FeatureVector) -> FetalResult<i64> {
        self.seen.lock().unwrap().push(*features);
        if features.get(self.left) <= features.get(self.right) {
            Ok(1)
        } else {
            Ok(2)
        }
    }
    fn predict_proba(&self, _features: &FeatureVector) -> FetalResult<Option<ClassProbabilities>> {
        Ok(None)
    }
    fn classes(&self) -> &[i64] {
        &CLASS_LABELS
    }
    fn n_features(&self) -> usize {
        FEATURE_COUNT
    }
    fn supports_probabilities(&self) -> bool {
        false
    }
    fn name(&self) -> &str {
        "recording"
    }
}

/// Label 1 with a uniform distribution, counting every model evaluation.
/// The combined call counts as one evaluation.
#[derive(Debug, Default)]
pub struct CountingClassifier {
    evaluations: AtomicUsize,
}

impl CountingClassifier {
    pub fn evaluations(&self) -> usize {
        self.evaluations.load(Ordering::SeqCst)
    }

    fn uniform() -> ClassProbabilities {
        ClassProbabilities::new(CLASS_LABELS.iter().map(|&c| (c, 1.0 / 3.0)).collect())
    }
}

impl IClassifier for CountingClassifier {
    fn predict_label(&self, _features: &FeatureVector) -> FetalResult<i64> {
        self.evaluations.fetch_add(1, Ordering::SeqCst);
        Ok(1)
    }
    fn predict_proba(&self, _features: &FeatureVector) -> FetalResult<Option<ClassProbabilities>> {
        self.evaluations.fetch_add(1, Ordering::SeqCst);
        Ok(Some(Self::uniform()))
    }
    fn predict_label_and_proba(
        &self,
        _features: &FeatureVector,
    ) -> FetalResult<(i64, Option<ClassProbabilities>)> {
        self.evaluations.fetch_add(1, Ordering::SeqCst);
        Ok((1, Some(Self::uniform())))
    }
    fn classes(&self) -> &[i64] {
        &CLASS_LABELS
    }
    fn n_features(&self) -> usize {
        FEATURE_COUNT
    }
    fn supports_probabilities(&self) -> bool {
        true
    }
    fn name(&self) -> &str {
        "counting"
    }
}
