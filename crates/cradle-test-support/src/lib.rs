//! Shared test doubles and utilities for the Cradle service.

mod asset;
mod language_model;

pub use asset::{BucketFailingSource, RecordingAssetSource};
pub use language_model::{FailingLanguageModel, ScriptedLanguageModel};
