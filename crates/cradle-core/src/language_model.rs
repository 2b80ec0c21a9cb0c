//! Language model abstraction.

use async_trait::async_trait;

use crate::error::DomainError;

/// A text-completion collaborator (an AI chat agent).
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Sends a single user prompt and returns the model's text reply.
    async fn complete(&self, prompt: &str) -> Result<String, DomainError>;
}
