//! # fetal-server
//!
//! HTTP front end over one shared [`InferencePipeline`].
//!
//! | Route | Response |
//! |---|---|
//! | `GET /` | Blank form page |
//! | `GET /predict?<fields>` | Form page with the result panel |
//! | `GET /api/predict?<fields>[&confidence=true]` | JSON |
//! | `POST /api/predict[?confidence=true]` | JSON, body is an object of fields |
//! | `GET /health` | Loaded artifact summary |
//!
//! Input errors answer 422. Artifact and label errors answer 500. No route
//! ever falls back to a default category.

pub mod handlers;

use std::sync::Arc;

use axum::http::Method;
use axum::routing::get;
use axum::Router;
use fetal_inference::InferencePipeline;
use fetal_presentation::HtmlRenderer;
use tower_http::cors::{Any, CorsLayer};

/// Shared, read-only handler state.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: InferencePipeline,
    pub html: Arc<HtmlRenderer>,
}

impl AppState {
    pub fn new(pipeline: InferencePipeline) -> Self {
        Self {
            pipeline,
            html: Arc::new(HtmlRenderer::new()),
        }
    }
}

/// All routes, with permissive CORS for browser clients.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::index))
        .route("/predict", get(handlers::predict_page))
        .route(
            "/api/predict",
            get(handlers::api_predict_query).post(handlers::api_predict_json),
        )
        .route("/health", get(handlers::health))
        .layer(cors)
        .with_state(state)
}
