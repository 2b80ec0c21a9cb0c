//! HTTP implementation of the `LanguageModel` trait.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use cradle_core::error::DomainError;
use cradle_core::language_model::LanguageModel;

const MAX_ERROR_BODY_CHARS: usize = 500;

/// Connection settings for a chat-completions endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageModelSettings {
    /// Base URL, e.g. `https://api.openai.com/v1`.
    pub base_url: String,
    /// Bearer token; omitted from requests when `None`.
    pub api_key: Option<String>,
    /// Model name sent with every request.
    pub model: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Deserialize)]
struct ChatReply {
    #[serde(default)]
    content: Option<String>,
}

/// Chat-completions client. Construct once at startup and share.
#[derive(Debug, Clone)]
pub struct HttpLanguageModel {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
    model: String,
}

impl HttpLanguageModel {
    /// Creates a client for `settings`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the HTTP client cannot be
    /// built.
    pub fn new(settings: LanguageModelSettings) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| DomainError::Infrastructure(format!("HTTP client setup failed: {e}")))?;

        Ok(Self {
            client,
            endpoint: format!(
                "{}/chat/completions",
                settings.base_url.trim_end_matches('/')
            ),
            api_key: settings.api_key,
            model: settings.model,
        })
    }

    /// The full chat-completions URL requests are sent to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl LanguageModel for HttpLanguageModel {
    async fn complete(&self, prompt: &str) -> Result<String, DomainError> {
        let body = ChatRequest {
            model: &self.model,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let mut request = self.client.post(&self.endpoint).json(&body);
        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key);
        }

        debug!(endpoint = %self.endpoint, model = %self.model, "sending completion request");
        let response = request.send().await.map_err(|e| {
            DomainError::Infrastructure(format!("language model request failed: {e}"))
        })?;

        let status = response.status();
        if !status.is_success() {
            let detail: String = response
                .text()
                .await
                .unwrap_or_default()
                .chars()
                .take(MAX_ERROR_BODY_CHARS)
                .collect();
            warn!(%status, "language model returned an error status");
            return Err(DomainError::Infrastructure(format!(
                "language model returned {status}: {detail}"
            )));
        }

        let reply: ChatResponse = response.json().await.map_err(|e| {
            DomainError::Infrastructure(format!("language model response was malformed: {e}"))
        })?;

        reply
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| {
                DomainError::Infrastructure("language model returned no content".to_owned())
            })
    }
}
