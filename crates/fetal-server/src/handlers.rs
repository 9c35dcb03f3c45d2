//! Route handlers. Each one gathers raw fields, runs the pipeline off the
//! async workers, and renders the outcome.

use std::collections::HashMap;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use fetal_core::errors::SERIALIZATION_ERROR;
use fetal_core::{FetalError, FetalResult, PredictionResult, RawInput};
use fetal_inference::InferencePipeline;
use fetal_presentation::{FormState, JsonRenderer};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};

use crate::AppState;

/// Query key that asks for confidences; never treated as a field.
const CONFIDENCE_PARAM: &str = "confidence";

#[derive(Debug, Default, Deserialize)]
pub struct PredictParams {
    #[serde(default)]
    pub confidence: bool,
}

fn status_for(err: &FetalError) -> StatusCode {
    if err.is_user_error() {
        StatusCode::UNPROCESSABLE_ENTITY
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Run the pipeline on a blocking thread; the ONNX session is synchronous.
async fn run_pipeline(
    pipeline: InferencePipeline,
    raw: RawInput,
    with_confidence: bool,
) -> FetalResult<PredictionResult> {
    tokio::task::spawn_blocking(move || {
        if with_confidence {
            pipeline.predict_with_confidence(&raw)
        } else {
            pipeline.predict(&raw)
        }
    })
    .await
    .unwrap_or_else(|e| {
        Err(FetalError::InferenceFailed {
            reason: format!("prediction task failed: {e}"),
        })
    })
}

fn log_outcome(route: &str, outcome: &FetalResult<PredictionResult>) {
    match outcome {
        Ok(result) => info!(route, category = %result.category, "prediction served"),
        Err(e) if e.is_user_error() => info!(route, error = %e, "prediction rejected"),
        Err(e) => error!(route, error = %e, "prediction failed"),
    }
}

fn json_response(outcome: &FetalResult<PredictionResult>) -> Response {
    let status = match outcome {
        Ok(_) => StatusCode::OK,
        Err(e) => status_for(e),
    };
    (status, Json(JsonRenderer::to_value(outcome.as_ref()))).into_response()
}

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(state.html.render_page(&FormState::empty(), None))
}

/// The form route: echoes the submission and shows the result or the
/// per-field problems.
pub async fn predict_page(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let raw: RawInput = params.into_iter().collect();
    let form = FormState::from_submission(&raw);
    let outcome = run_pipeline(state.pipeline.clone(), raw, false).await;
    log_outcome("/predict", &outcome);

    let status = match &outcome {
        Ok(_) => StatusCode::OK,
        Err(e) => status_for(e),
    };
    let page = state.html.render_page(&form, Some(outcome.as_ref()));
    (status, Html(page)).into_response()
}

pub async fn api_predict_query(
    State(state): State<AppState>,
    Query(mut params): Query<HashMap<String, String>>,
) -> Response {
    let with_confidence = params
        .remove(CONFIDENCE_PARAM)
        .is_some_and(|v| is_truthy(&v));
    let raw: RawInput = params.into_iter().collect();
    let outcome = run_pipeline(state.pipeline.clone(), raw, with_confidence).await;
    log_outcome("GET /api/predict", &outcome);
    json_response(&outcome)
}

pub async fn api_predict_json(
    State(state): State<AppState>,
    Query(params): Query<PredictParams>,
    body: Result<Json<RawInput>, JsonRejection>,
) -> Response {
    let raw = match body {
        Ok(Json(raw)) => raw,
        Err(rejection) => {
            info!(error = %rejection.body_text(), "request body rejected");
            let body = json!({
                "error": {
                    "code": SERIALIZATION_ERROR,
                    "message": rejection.body_text(),
                    "field": null,
                }
            });
            return (rejection.status(), Json(body)).into_response();
        }
    };
    let outcome = run_pipeline(state.pipeline.clone(), raw, params.confidence).await;
    log_outcome("POST /api/predict", &outcome);
    json_response(&outcome)
}

pub async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "version": fetal_core::constants::VERSION,
        "artifacts": state.pipeline.artifacts().describe(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthy_values() {
        for v in ["1", "true", "TRUE", " yes ", "on"] {
            assert!(is_truthy(v), "{v}");
        }
        for v in ["0", "false", "", "maybe"] {
            assert!(!is_truthy(v), "{v}");
        }
    }
}
