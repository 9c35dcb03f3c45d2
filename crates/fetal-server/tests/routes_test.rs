use std::collections::HashMap;

use axum::body::to_bytes;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use fetal_artifacts::ArtifactStore;
use fetal_core::config::ArtifactConfig;
use fetal_core::{FeatureField, RawInput};
use fetal_inference::InferencePipeline;
use fetal_server::handlers::{self, PredictParams};
use fetal_server::{router, AppState};
use serde_json::Value;
use test_fixtures::{
    golden_cases, linear_model_fixture, scaler_fixture, FixedLabelClassifier, IdentityScaler,
};

fn fixture_state() -> AppState {
    let config = ArtifactConfig {
        scaler_path: scaler_fixture().display().to_string(),
        classifier_path: linear_model_fixture().display().to_string(),
        ..Default::default()
    };
    AppState::new(InferencePipeline::from_store(
        ArtifactStore::load(&config).unwrap(),
    ))
}

fn stub_state(label: i64) -> AppState {
    AppState::new(InferencePipeline::from_store(
        ArtifactStore::from_parts(
            Box::new(IdentityScaler),
            Box::new(FixedLabelClassifier::new(label)),
        )
        .unwrap(),
    ))
}

fn query(values: &[f64; 10]) -> HashMap<String, String> {
    FeatureField::ALL
        .into_iter()
        .map(|f| (f.name().to_string(), values[f.index()].to_string()))
        .collect()
}

async fn body_text(resp: Response) -> String {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_json(resp: Response) -> Value {
    serde_json::from_str(&body_text(resp).await).unwrap()
}

#[tokio::test]
async fn router_builds_with_all_routes() {
    let _app = router(fixture_state());
}

#[tokio::test]
async fn api_query_classifies_golden_cases() {
    let state = fixture_state();
    for case in golden_cases() {
        let resp =
            handlers::api_predict_query(State(state.clone()), Query(query(&case.features))).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        assert_eq!(body["category"], case.expected.name(), "case {}", case.name);
        assert_eq!(body["label"], case.expected.label());
        assert!(body.get("confidences").is_none());
    }
}

#[tokio::test]
async fn api_query_confidence_flag_is_not_a_field() {
    let case = &golden_cases()[0];
    let mut params = query(&case.features);
    params.insert("confidence".into(), "true".into());

    let resp = handlers::api_predict_query(State(fixture_state()), Query(params)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let c = &body["confidences"];
    let sum: f64 = ["Normal", "Suspect", "Pathological"]
        .iter()
        .map(|k| c[*k].as_f64().unwrap())
        .sum();
    assert!((sum - 1.0).abs() < 1e-6);
}

#[tokio::test]
async fn api_query_bad_field_is_422_with_field_name() {
    let mut params = query(&[1.0; 10]);
    params.insert("histogram_variance".into(), "lots".into());

    let resp = handlers::api_predict_query(State(fixture_state()), Query(params)).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(resp).await;
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
    assert_eq!(body["error"]["field"], "histogram_variance");
    assert!(body.get("category").is_none());
}

#[tokio::test]
async fn api_query_missing_field_is_422() {
    let mut params = query(&[1.0; 10]);
    params.remove("accelerations");
    let resp = handlers::api_predict_query(State(fixture_state()), Query(params)).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn unmapped_label_is_500_never_a_category() {
    let resp = handlers::api_predict_query(State(stub_state(4)), Query(query(&[0.0; 10]))).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(resp).await;
    assert_eq!(body["error"]["code"], "UNMAPPED_LABEL");
    assert!(body.get("category").is_none());
}

#[tokio::test]
async fn api_json_accepts_numbers_and_aliases() {
    let case = &golden_cases()[2];
    let mut raw = case.raw_input();
    let pct = raw.remove(FeatureField::PctAbnormalLongTermVariability.name()).unwrap();
    raw.insert("percentage_of_time_with_abnormal_long_term_variability", pct);

    let resp = handlers::api_predict_json(
        State(fixture_state()),
        Query(PredictParams { confidence: true }),
        Ok(Json(raw)),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["category"], "Pathological");
    assert!(body["confidences"].is_object());
}

#[tokio::test]
async fn api_json_empty_object_is_422() {
    let resp = handlers::api_predict_json(
        State(fixture_state()),
        Query(PredictParams::default()),
        Ok(Json(RawInput::new())),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn api_json_non_number_value_is_422_naming_the_field() {
    for bad in ["null", "true", "[1, 2]", "{\"v\": 1}"] {
        let mut body = serde_json::to_value(query(&[2.0; 10])).unwrap();
        body["histogram_median"] = serde_json::from_str(bad).unwrap();
        let bytes = serde_json::to_vec(&body).unwrap();

        let resp = handlers::api_predict_json(
            State(fixture_state()),
            Query(PredictParams::default()),
            Json::<RawInput>::from_bytes(&bytes),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY, "value {bad}");
        let body = body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_INPUT", "value {bad}");
        assert_eq!(body["error"]["field"], "histogram_median", "value {bad}");
    }
}

#[tokio::test]
async fn form_route_renders_result_panel() {
    let case = &golden_cases()[1];
    let resp = handlers::predict_page(State(fixture_state()), Query(query(&case.features))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert!(html.contains("Fetal Health Type: Suspect"));
    assert!(html.contains("result-warning"));
}

#[tokio::test]
async fn form_route_marks_bad_fields_and_keeps_values() {
    let mut params = query(&[2.0; 10]);
    params.insert("histogram_mode".into(), "12,5".into());
    let resp = handlers::predict_page(State(fixture_state()), Query(params)).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let html = body_text(resp).await;
    assert!(html.contains("value=\"12,5\" class=\"invalid\""));
    assert!(!html.contains("Fetal Health Type"));
}

#[tokio::test]
async fn index_serves_blank_form() {
    let html = handlers::index(State(fixture_state())).await.0;
    assert!(html.contains("<form"));
    assert_eq!(html.matches("<input ").count(), 10);
}

#[tokio::test]
async fn health_reports_loaded_artifacts() {
    let body = handlers::health(State(fixture_state())).await.0;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["artifacts"]["n_features"], 10);
    assert_eq!(body["artifacts"]["supports_probabilities"], true);
}
