//! Routes for the Imagery bounded context.

use axum::extract::State;
use axum::{Json, Router, routing::post};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use cradle_imagery::application::command_handlers;
use cradle_imagery::domain::commands;
use cradle_imagery::domain::progression::{AgeImage, DEFAULT_AGES};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /generate-image.
#[derive(Debug, Deserialize)]
pub struct GenerateImageRequest {
    /// Whose portrait to render.
    #[serde(default, alias = "child_name")]
    pub subject: String,
    /// Optional appearance details.
    #[serde(default)]
    pub description: Option<String>,
}

/// Response body for POST /generate-image.
#[derive(Debug, Serialize)]
pub struct GenerateImageResponse {
    /// Always `true` on this path.
    pub success: bool,
    /// Selected portrait URL.
    pub image_url: String,
}

/// Request body for POST /generate-age-progression.
#[derive(Debug, Deserialize)]
pub struct AgeProgressionRequest {
    /// Whose portraits to render.
    #[serde(default, alias = "child_name")]
    pub subject: String,
    /// Shared description prefixed to every age prompt.
    #[serde(default, alias = "base_image_prompt")]
    pub base_prompt: String,
    /// Ages to render, in order.
    #[serde(default = "default_ages")]
    pub ages: Vec<i64>,
}

fn default_ages() -> Vec<i64> {
    DEFAULT_AGES.iter().map(|&age| i64::from(age)).collect()
}

/// Response body for POST /generate-age-progression.
#[derive(Debug, Serialize)]
pub struct AgeProgressionResponse {
    /// Always `true` on this path.
    pub success: bool,
    /// One entry per rendered age, in request order.
    pub images: Vec<AgeImage>,
    /// Ages that could not be rendered.
    pub skipped_ages: Vec<u32>,
}

/// POST /generate-image
#[instrument(skip(state, request))]
async fn generate_image(
    State(state): State<AppState>,
    Json(request): Json<GenerateImageRequest>,
) -> Result<Json<GenerateImageResponse>, ApiError> {
    let command = commands::GenerateImage {
        correlation_id: Uuid::new_v4(),
        subject: request.subject,
        description: request.description,
    };

    info!(correlation_id = %command.correlation_id, "handling generate_image command");

    let image_url = command_handlers::handle_generate_image(&command, state.asset_source.as_ref())?;

    Ok(Json(GenerateImageResponse {
        success: true,
        image_url,
    }))
}

/// POST /generate-age-progression
#[instrument(skip(state, request))]
async fn generate_age_progression(
    State(state): State<AppState>,
    Json(request): Json<AgeProgressionRequest>,
) -> Result<Json<AgeProgressionResponse>, ApiError> {
    let command = commands::GenerateAgeProgression {
        correlation_id: Uuid::new_v4(),
        subject: request.subject,
        base_prompt: request.base_prompt,
        ages: request.ages,
    };

    info!(correlation_id = %command.correlation_id, "handling generate_age_progression command");

    let result =
        command_handlers::handle_generate_age_progression(&command, state.asset_source.as_ref())?;

    Ok(Json(AgeProgressionResponse {
        success: true,
        images: result.images,
        skipped_ages: result.skipped_ages,
    }))
}

/// Returns the router for the imagery context.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/generate-image", post(generate_image))
        .route("/generate-age-progression", post(generate_age_progression))
}
