//! Routes for the Naming bounded context.

use axum::extract::State;
use axum::{Json, Router, routing::post};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use cradle_naming::application::command_handlers;
use cradle_naming::domain::commands;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /generate-name.
#[derive(Debug, Deserialize)]
pub struct GenerateNameRequest {
    /// Free-form description of the kind of name wanted.
    #[serde(default)]
    pub description: String,
}

/// Response body for POST /generate-name.
#[derive(Debug, Serialize)]
pub struct GenerateNameResponse {
    /// Always `true` on this path; errors use `ErrorBody`.
    pub success: bool,
    /// Suggested names (at most five).
    pub names: Vec<String>,
    /// Why the names fit the description.
    pub explanation: String,
}

/// POST /generate-name
#[instrument(skip(state, request))]
async fn generate_name(
    State(state): State<AppState>,
    Json(request): Json<GenerateNameRequest>,
) -> Result<Json<GenerateNameResponse>, ApiError> {
    let command = commands::GenerateNames {
        correlation_id: Uuid::new_v4(),
        description: request.description,
    };

    info!(correlation_id = %command.correlation_id, "handling generate_names command");

    let suggestions =
        command_handlers::handle_generate_names(&command, state.language_model.as_ref()).await?;

    Ok(Json(GenerateNameResponse {
        success: true,
        names: suggestions.names,
        explanation: suggestions.explanation,
    }))
}

/// Returns the router for the naming context.
pub fn router() -> Router<AppState> {
    Router::new().route("/generate-name", post(generate_name))
}
