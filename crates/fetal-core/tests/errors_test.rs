use fetal_core::errors::*;
use fetal_core::FeatureField;

#[test]
fn invalid_input_names_the_field_and_reason() {
    let err = FetalError::InvalidInput {
        field: FeatureField::HistogramMean,
        reason: InputProblem::NotANumber {
            value: "abc".into(),
        },
    };
    let msg = err.to_string();
    assert!(msg.contains("histogram_mean"));
    assert!(msg.contains("'abc' is not a number"));
    assert_eq!(err.field(), Some(FeatureField::HistogramMean));
}

#[test]
fn unmapped_label_carries_label() {
    let err = FetalError::UnmappedLabel { label: 4 };
    assert!(err.to_string().contains('4'));
    assert_eq!(err.field(), None);
}

#[test]
fn only_invalid_input_is_a_user_error() {
    let user = FetalError::InvalidInput {
        field: FeatureField::Accelerations,
        reason: InputProblem::Missing,
    };
    assert!(user.is_user_error());
    assert!(!FetalError::UnmappedLabel { label: 0 }.is_user_error());
    assert!(!FetalError::InferenceFailed {
        reason: "x".into()
    }
    .is_user_error());
    assert!(!FetalError::ArtifactLoad(ArtifactError::NotFound {
        path: "models/scaler.json".into()
    })
    .is_user_error());
}

// --- From impls ---

#[test]
fn artifact_error_converts_to_fetal_error() {
    let err: FetalError = ArtifactError::Malformed {
        path: "m.json".into(),
        reason: "eof".into(),
    }
    .into();
    assert!(matches!(err, FetalError::ArtifactLoad(_)));
}

#[test]
fn serialization_error_converts_to_fetal_error() {
    let json_err = serde_json::from_str::<String>("not valid json").unwrap_err();
    let err: FetalError = json_err.into();
    assert!(matches!(err, FetalError::SerializationError(_)));
}

// --- Codes ---

#[test]
fn error_codes_are_stable() {
    assert_eq!(
        FetalError::UnmappedLabel { label: 9 }.error_code(),
        UNMAPPED_LABEL
    );
    assert_eq!(
        FetalError::InvalidInput {
            field: FeatureField::Accelerations,
            reason: InputProblem::Empty,
        }
        .error_code(),
        INVALID_INPUT
    );
    assert_eq!(
        FetalError::InvalidProbabilities {
            reason: "sum".into()
        }
        .error_code(),
        INFERENCE_ERROR
    );
    assert_eq!(
        ArtifactError::NotFound { path: "p".into() }.error_code(),
        ARTIFACT_LOAD_ERROR
    );
}

#[test]
fn coded_string_prefixes_code() {
    let err = FetalError::ConfigError("bad port".into());
    assert_eq!(err.coded_string(), "[CONFIG_ERROR] configuration error: bad port");
}

// --- Sub-error variants carry context ---

#[test]
fn arity_mismatch_carries_counts() {
    let err = ArtifactError::ArityMismatch {
        artifact: "scaler".into(),
        expected: 10,
        actual: 9,
    };
    let msg = err.to_string();
    assert!(msg.contains("scaler"));
    assert!(msg.contains("10"));
    assert!(msg.contains('9'));
}

#[test]
fn feature_order_mismatch_carries_names() {
    let err = ArtifactError::FeatureOrderMismatch {
        path: "scaler.json".into(),
        position: 7,
        expected: "histogram_mean".into(),
        actual: "histogram_median".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("histogram_mean"));
    assert!(msg.contains("histogram_median"));
    assert!(msg.contains('7'));
}
