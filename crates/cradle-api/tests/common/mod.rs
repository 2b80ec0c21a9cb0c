//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use cradle_core::asset::AssetSource;
use cradle_core::language_model::LanguageModel;
use cradle_imagery::domain::pool::CandidatePool;
use cradle_imagery::domain::selector::PlaceholderSelector;
use cradle_test_support::ScriptedLanguageModel;
use http_body_util::BodyExt;
use tower::ServiceExt;

use cradle_api::state::AppState;

/// Reply used by the default scripted language model.
pub const SCRIPTED_REPLY: &str =
    r#"{"names": ["Luna", "Felix", "Iris"], "explanation": "Short and bright."}"#;

/// Build the full app with the given collaborators. Uses the same router as
/// `main.rs`.
pub fn build_test_app(
    language_model: Arc<dyn LanguageModel>,
    asset_source: Arc<dyn AssetSource>,
) -> Router {
    cradle_api::app(AppState::new(language_model, asset_source))
}

/// Build the full app with the built-in candidate pool and a scripted
/// language model.
pub fn build_default_app() -> Router {
    build_test_app(
        Arc::new(ScriptedLanguageModel::new(SCRIPTED_REPLY)),
        Arc::new(PlaceholderSelector::new(CandidatePool::builtin())),
    )
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}
