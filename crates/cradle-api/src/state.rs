//! Shared application state.

use std::sync::Arc;

use cradle_core::asset::AssetSource;
use cradle_core::language_model::LanguageModel;
use cradle_imagery::domain::selector::PlaceholderSelector;
use cradle_llm_client::http_language_model::HttpLanguageModel;

use crate::config::AppConfig;
use crate::error::AppError;

/// Application state shared across all request handlers. Collaborators are
/// constructed once in `main` and injected here.
#[derive(Clone)]
pub struct AppState {
    /// Language model used for name suggestions.
    pub language_model: Arc<dyn LanguageModel>,
    /// Source of portrait URLs.
    pub asset_source: Arc<dyn AssetSource>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(language_model: Arc<dyn LanguageModel>, asset_source: Arc<dyn AssetSource>) -> Self {
        Self {
            language_model,
            asset_source,
        }
    }

    /// Builds the production collaborators from `config`: the HTTP language
    /// model and a selector over the configured candidate pool.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the candidate pool cannot be loaded and
    /// `AppError::Startup` if the language-model client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let pool = config.candidate_pool()?;
        tracing::info!(buckets = pool.bucket_keys().count(), "candidate pool loaded");

        let language_model = HttpLanguageModel::new(config.language_model.clone())?;
        tracing::info!(
            endpoint = language_model.endpoint(),
            model = %config.language_model.model,
            "language model configured"
        );

        Ok(Self::new(
            Arc::new(language_model),
            Arc::new(PlaceholderSelector::new(pool)),
        ))
    }
}
