//! Cradle API: HTTP surface for name suggestions and placeholder portraits.

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod telemetry;

/// Builds the full application router over `state`.
pub fn app(state: state::AppState) -> Router {
    let api = Router::new()
        .merge(routes::naming::router())
        .merge(routes::imagery::router());

    // TODO: Replace CorsLayer::permissive() with configured origins once the frontend host is fixed.
    Router::new()
        .merge(routes::health::router())
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
