//! Documented sample cases, end to end through real artifact files.

use std::path::PathBuf;

use fetal_artifacts::ArtifactStore;
use fetal_core::config::ArtifactConfig;
use fetal_core::constants::CONFIDENCE_SUM_TOLERANCE;
use fetal_core::{FetalError, RawInput};
use fetal_inference::InferencePipeline;
use test_fixtures::{centroid_model_fixture, golden_cases, linear_model_fixture, scaler_fixture};

fn fixture_pipeline(model: PathBuf) -> InferencePipeline {
    let config = ArtifactConfig {
        scaler_path: scaler_fixture().display().to_string(),
        classifier_path: model.display().to_string(),
        ..Default::default()
    };
    InferencePipeline::from_store(ArtifactStore::load(&config).unwrap())
}

#[test]
fn golden_cases_against_synthetic_linear_model() {
    let pipeline = fixture_pipeline(linear_model_fixture());
    for case in golden_cases() {
        let result = pipeline.predict_with_confidence(&case.raw_input()).unwrap();
        assert_eq!(result.category, case.expected, "case {}", case.name);

        let c = result.confidences.expect("linear model reports confidences");
        assert!((c.sum() - 1.0).abs() <= CONFIDENCE_SUM_TOLERANCE);
        assert!(c.iter().all(|(_, p)| (0.0..=1.0).contains(&p)));
        // The predicted category carries the largest confidence.
        assert!(c.iter().all(|(_, p)| p <= c.get(case.expected)));
    }
}

#[test]
fn golden_cases_as_form_text() {
    let pipeline = fixture_pipeline(linear_model_fixture());
    for case in golden_cases() {
        let result = pipeline.predict(&case.raw_text_input()).unwrap();
        assert_eq!(result.category, case.expected, "case {}", case.name);
    }
}

#[test]
fn golden_cases_against_synthetic_centroid_model() {
    let pipeline = fixture_pipeline(centroid_model_fixture());
    for case in golden_cases() {
        let result = pipeline.predict_with_confidence(&case.raw_input()).unwrap();
        assert_eq!(result.category, case.expected, "case {}", case.name);
        assert!(result.confidences.is_none());
    }
}

/// Finite but huge values overflow to infinity once scaled; that is a
/// failed prediction, never a silent Normal.
#[test]
fn overflowing_input_fails_instead_of_defaulting_to_normal() {
    let raw = RawInput::from_values(&[
        1e306, 0.004, 1e306, 60.0, 30.0, 7.0, 128.0, 137.0, 140.0, 18.0,
    ]);
    for model in [linear_model_fixture(), centroid_model_fixture()] {
        let pipeline = fixture_pipeline(model.clone());
        for result in [pipeline.predict(&raw), pipeline.predict_with_confidence(&raw)] {
            let err = result.expect_err("overflowing input must not be classified");
            assert!(
                matches!(err, FetalError::InferenceFailed { .. }),
                "{}: {err:?}",
                model.display()
            );
            assert!(!err.is_user_error());
        }
    }
}

/// Runs against the trained artifacts shipped with a deployment. Point
/// `FETAL_MODELS_DIR` at them; without them this test has nothing to check.
#[test]
fn golden_cases_against_bundled_artifacts() {
    let dir = std::env::var("FETAL_MODELS_DIR").unwrap_or_else(|_| {
        let manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        manifest.join("../../models").display().to_string()
    });
    let config = ArtifactConfig::in_dir(&dir);
    if !PathBuf::from(&config.scaler_path).exists()
        || !PathBuf::from(&config.classifier_path).exists()
    {
        eprintln!("skipping: no bundled artifacts under {dir}");
        return;
    }

    let pipeline = InferencePipeline::from_store(ArtifactStore::load(&config).unwrap());
    for case in golden_cases() {
        let result = pipeline.predict_with_confidence(&case.raw_input()).unwrap();
        assert_eq!(result.category, case.expected, "case {}", case.name);
    }
}
