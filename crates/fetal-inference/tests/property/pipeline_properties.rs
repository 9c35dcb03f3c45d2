use fetal_artifacts::ArtifactStore;
use fetal_core::config::ArtifactConfig;
use fetal_core::constants::CONFIDENCE_SUM_TOLERANCE;
use fetal_core::{FeatureField, HealthCategory, RawInput};
use fetal_inference::InferencePipeline;
use proptest::prelude::*;
use test_fixtures::{linear_model_fixture, scaler_fixture};

fn pipeline() -> InferencePipeline {
    let config = ArtifactConfig {
        scaler_path: scaler_fixture().display().to_string(),
        classifier_path: linear_model_fixture().display().to_string(),
        ..Default::default()
    };
    InferencePipeline::from_store(ArtifactStore::load(&config).unwrap())
}

proptest! {
    #[test]
    fn any_finite_input_yields_a_category_and_a_distribution(
        values in prop::array::uniform10(-1e4f64..1e4)
    ) {
        let result = pipeline()
            .predict_with_confidence(&RawInput::from_values(&values))
            .unwrap();
        prop_assert!(HealthCategory::ALL.contains(&result.category));
        let c = result.confidences.unwrap();
        prop_assert!((c.sum() - 1.0).abs() <= CONFIDENCE_SUM_TOLERANCE);
        for (_, p) in c.iter() {
            prop_assert!((0.0..=1.0).contains(&p));
        }
    }

    #[test]
    fn text_and_number_surfaces_agree(values in prop::array::uniform10(-1e3f64..1e3)) {
        let p = pipeline();
        let numeric = p.predict(&RawInput::from_values(&values)).unwrap();
        let text: RawInput = FeatureField::ALL
            .into_iter()
            .map(|f| (f.name(), values[f.index()].to_string()))
            .collect();
        let textual = p.predict(&text).unwrap();
        prop_assert_eq!(numeric, textual);
    }

    #[test]
    fn garbage_in_any_field_is_reported_for_that_field(
        values in prop::array::uniform10(-1e3f64..1e3),
        slot in 0usize..10,
        garbage in "[a-zA-Z_ ]{1,12}",
    ) {
        let field = FeatureField::ALL[slot];
        let mut raw = RawInput::from_values(&values);
        raw.insert(field.name(), garbage);
        let err = pipeline().predict(&raw).unwrap_err();
        prop_assert_eq!(err.field(), Some(field));
    }
}
