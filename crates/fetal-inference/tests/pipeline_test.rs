use std::sync::Arc;

use fetal_artifacts::ArtifactStore;
use fetal_core::errors::InputProblem;
use fetal_core::{FeatureField, FetalError, HealthCategory, RawInput};
use fetal_inference::InferencePipeline;
use test_fixtures::{
    uniform_input, CountingClassifier, CountingScaler, FixedLabelClassifier, FixedProbabilityClassifier,
    IdentityScaler, RecordingClassifier,
};

fn pipeline_with_label(label: i64) -> InferencePipeline {
    InferencePipeline::from_store(
        ArtifactStore::from_parts(
            Box::new(IdentityScaler),
            Box::new(FixedLabelClassifier::new(label)),
        )
        .unwrap(),
    )
}

// ── Label mapping ─────────────────────────────────────────────────────────

#[test]
fn labels_one_two_three_map_to_categories() {
    let cases = [
        (1, HealthCategory::Normal),
        (2, HealthCategory::Suspect),
        (3, HealthCategory::Pathological),
    ];
    for (label, expected) in cases {
        let result = pipeline_with_label(label).predict(&uniform_input(1.0)).unwrap();
        assert_eq!(result.category, expected);
        assert!(result.confidences.is_none());
    }
}

#[test]
fn label_four_is_unmapped_not_defaulted() {
    let err = pipeline_with_label(4)
        .predict(&uniform_input(1.0))
        .unwrap_err();
    assert!(matches!(err, FetalError::UnmappedLabel { label: 4 }));
    assert!(!err.is_user_error());
}

// ── Validation gate ───────────────────────────────────────────────────────

#[test]
fn bad_field_is_named_and_never_reaches_scaler() {
    for field in FeatureField::ALL {
        let scaler = Arc::new(CountingScaler::default());
        let pipeline = InferencePipeline::from_store(
            ArtifactStore::from_parts(
                Box::new(scaler.clone()),
                Box::new(FixedLabelClassifier::new(1)),
            )
            .unwrap(),
        );

        let mut raw = uniform_input(1.0);
        raw.insert(field.name(), "not-a-number");
        let err = pipeline.predict(&raw).unwrap_err();
        assert_eq!(err.field(), Some(field));
        assert!(err.is_user_error());

        let mut raw = uniform_input(1.0);
        raw.remove(field.name());
        let err = pipeline.predict_with_confidence(&raw).unwrap_err();
        assert!(matches!(
            err,
            FetalError::InvalidInput { field: f, reason: InputProblem::Missing } if f == field
        ));

        assert_eq!(scaler.calls(), 0, "{field} reached the scaler");
    }
}

#[test]
fn valid_input_reaches_scaler_once() {
    let scaler = Arc::new(CountingScaler::default());
    let pipeline = InferencePipeline::from_store(
        ArtifactStore::from_parts(
            Box::new(scaler.clone()),
            Box::new(FixedLabelClassifier::new(2)),
        )
        .unwrap(),
    );
    pipeline.predict(&uniform_input(3.0)).unwrap();
    assert_eq!(scaler.calls(), 1);
}

#[test]
fn out_of_range_values_are_still_classified() {
    let result = pipeline_with_label(1)
        .predict(&uniform_input(1e9))
        .unwrap();
    assert_eq!(result.category, HealthCategory::Normal);
}

// ── Ordering ──────────────────────────────────────────────────────────────

#[test]
fn swapping_two_named_fields_changes_the_vector_and_the_outcome() {
    let classifier = Arc::new(RecordingClassifier::comparing(
        FeatureField::HistogramMean,
        FeatureField::HistogramMedian,
    ));
    let pipeline = InferencePipeline::from_store(
        ArtifactStore::from_parts(Box::new(IdentityScaler), Box::new(classifier.clone())).unwrap(),
    );

    let original = RawInput::from_values(&[
        0.008, 0.004, 0.0, 19.0, 0.0, 9.0, 132.0, 136.0, 138.0, 12.0,
    ]);
    let swapped = original
        .clone()
        .with(FeatureField::HistogramMean, 138.0)
        .with(FeatureField::HistogramMedian, 136.0);

    let a = pipeline.predict(&original).unwrap();
    let b = pipeline.predict(&swapped).unwrap();
    assert_eq!(a.category, HealthCategory::Normal);
    assert_eq!(b.category, HealthCategory::Suspect);

    let seen = classifier.seen();
    assert_eq!(seen.len(), 2);
    assert_ne!(seen[0], seen[1]);
    assert_eq!(seen[0].get(FeatureField::HistogramMean), 136.0);
    assert_eq!(seen[0].get(FeatureField::HistogramMedian), 138.0);
    assert_eq!(seen[1].get(FeatureField::HistogramMean), 138.0);
    assert_eq!(seen[1].get(FeatureField::HistogramMedian), 136.0);
}

#[test]
fn vector_follows_declared_order_regardless_of_key_order() {
    let classifier = Arc::new(RecordingClassifier::comparing(
        FeatureField::Accelerations,
        FeatureField::HistogramVariance,
    ));
    let pipeline = InferencePipeline::from_store(
        ArtifactStore::from_parts(Box::new(IdentityScaler), Box::new(classifier.clone())).unwrap(),
    );

    // Insert in reverse column order.
    let raw: RawInput = FeatureField::ALL
        .iter()
        .rev()
        .map(|f| (f.name(), f.index() as f64))
        .collect();
    pipeline.predict(&raw).unwrap();

    let seen = classifier.seen();
    let expected: Vec<f64> = (0..10).map(|i| i as f64).collect();
    assert_eq!(seen[0].as_slice(), expected.as_slice());
}

// ── Confidences ───────────────────────────────────────────────────────────

#[test]
fn confidences_come_back_in_category_order() {
    let pipeline = InferencePipeline::from_store(
        ArtifactStore::from_parts(
            Box::new(IdentityScaler),
            Box::new(FixedProbabilityClassifier::new(
                3,
                vec![3, 2, 1],
                vec![0.7, 0.2, 0.1],
            )),
        )
        .unwrap(),
    );
    let result = pipeline
        .predict_with_confidence(&uniform_input(0.0))
        .unwrap();
    assert_eq!(result.category, HealthCategory::Pathological);
    let c = result.confidences.unwrap();
    let ordered: Vec<(HealthCategory, f64)> = c.iter().collect();
    assert_eq!(ordered[0].0, HealthCategory::Normal);
    assert!((ordered[0].1 - 0.1).abs() < 1e-12);
    assert!((ordered[1].1 - 0.2).abs() < 1e-12);
    assert!((ordered[2].1 - 0.7).abs() < 1e-12);
}

#[test]
fn confidences_only_when_requested() {
    let pipeline = InferencePipeline::from_store(
        ArtifactStore::from_parts(
            Box::new(IdentityScaler),
            Box::new(FixedProbabilityClassifier::new(
                1,
                vec![1, 2, 3],
                vec![0.8, 0.1, 0.1],
            )),
        )
        .unwrap(),
    );
    assert!(pipeline
        .predict(&uniform_input(0.0))
        .unwrap()
        .confidences
        .is_none());
}

#[test]
fn label_only_classifier_gives_no_confidences() {
    let result = pipeline_with_label(2)
        .predict_with_confidence(&uniform_input(0.0))
        .unwrap();
    assert_eq!(result.category, HealthCategory::Suspect);
    assert!(result.confidences.is_none());
}

#[test]
fn confidence_request_evaluates_the_model_once() {
    let classifier = Arc::new(CountingClassifier::default());
    let pipeline = InferencePipeline::from_store(
        ArtifactStore::from_parts(Box::new(IdentityScaler), Box::new(classifier.clone())).unwrap(),
    );

    let result = pipeline
        .predict_with_confidence(&uniform_input(0.0))
        .unwrap();
    assert_eq!(result.category, HealthCategory::Normal);
    assert!(result.confidences.is_some());
    assert_eq!(classifier.evaluations(), 1);

    pipeline.predict(&uniform_input(0.0)).unwrap();
    assert_eq!(classifier.evaluations(), 2);
}

#[test]
fn broken_distribution_is_rejected() {
    let pipeline = InferencePipeline::from_store(
        ArtifactStore::from_parts(
            Box::new(IdentityScaler),
            Box::new(FixedProbabilityClassifier::new(
                1,
                vec![1, 2, 3],
                vec![0.9, 0.9, 0.9],
            )),
        )
        .unwrap(),
    );
    let err = pipeline
        .predict_with_confidence(&uniform_input(0.0))
        .unwrap_err();
    assert!(matches!(err, FetalError::InvalidProbabilities { .. }));
}

// ── Idempotence and concurrency ───────────────────────────────────────────

#[test]
fn identical_input_gives_identical_result() {
    let pipeline = pipeline_with_label(3);
    let raw = uniform_input(2.5);
    let a = pipeline.predict_with_confidence(&raw).unwrap();
    let b = pipeline.predict_with_confidence(&raw).unwrap();
    assert_eq!(a, b);
}

#[test]
fn concurrent_predictions_share_one_store() {
    let scaler = Arc::new(CountingScaler::default());
    let pipeline = InferencePipeline::from_store(
        ArtifactStore::from_parts(
            Box::new(scaler.clone()),
            Box::new(FixedLabelClassifier::new(1)),
        )
        .unwrap(),
    );

    std::thread::scope(|s| {
        for t in 0..8 {
            let pipeline = pipeline.clone();
            s.spawn(move || {
                for i in 0..25 {
                    let result = pipeline.predict(&uniform_input((t * 100 + i) as f64)).unwrap();
                    assert_eq!(result.category, HealthCategory::Normal);
                }
            });
        }
    });
    assert_eq!(scaler.calls(), 200);
}
