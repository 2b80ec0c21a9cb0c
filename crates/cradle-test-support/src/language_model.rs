//! Test language models: mock `LanguageModel` implementations for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use cradle_core::error::DomainError;
use cradle_core::language_model::LanguageModel;

/// A language model that replies with a fixed text and records every prompt
/// it receives.
#[derive(Debug)]
pub struct ScriptedLanguageModel {
    reply: String,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedLanguageModel {
    /// Create a model that always replies with `reply`.
    #[must_use]
    pub fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_owned(),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Returns a snapshot of all prompts received, in call order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl LanguageModel for ScriptedLanguageModel {
    async fn complete(&self, prompt: &str) -> Result<String, DomainError> {
        self.prompts.lock().unwrap().push(prompt.to_owned());
        Ok(self.reply.clone())
    }
}

/// A language model that fails every call with
/// `DomainError::Infrastructure`.
#[derive(Debug)]
pub struct FailingLanguageModel;

#[async_trait]
impl LanguageModel for FailingLanguageModel {
    async fn complete(&self, _prompt: &str) -> Result<String, DomainError> {
        Err(DomainError::Infrastructure(
            "language model unavailable".to_owned(),
        ))
    }
}
