//! Cradle LLM client: infrastructure adapter for the `LanguageModel` trait.
//!
//! Talks to any OpenAI-compatible chat-completions endpoint over HTTP.

pub mod http_language_model;
