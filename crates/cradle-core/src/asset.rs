//! Asset source abstraction.
//!
//! An asset source turns an image prompt into an asset identifier (a URL).
//! The placeholder selector is the production implementation; tests inject
//! sources that fail for chosen buckets.

use crate::error::DomainError;

/// Produces an asset identifier for a prompt, optionally biased by a bucket.
pub trait AssetSource: Send + Sync {
    /// Returns the asset for `prompt` within `bucket` (or the default bucket).
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` for a blank prompt and
    /// `DomainError::Configuration` if the resolved pool is unusable.
    fn asset_for(&self, prompt: &str, bucket: Option<&str>) -> Result<String, DomainError>;
}
