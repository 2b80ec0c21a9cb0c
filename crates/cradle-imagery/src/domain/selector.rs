//! Deterministic, content-addressed selection from a candidate pool.

use cradle_core::asset::AssetSource;
use cradle_core::error::DomainError;
use sha2::{Digest, Sha256};

use super::pool::{CandidatePool, empty_bucket};

/// Derives the selection key for a prompt: the first four bytes of its
/// SHA-256 digest, read big-endian.
///
/// SHA-256 is used only as a stable, well-distributed hash here. Selection is
/// not a security boundary and the key must not be treated as one.
#[must_use]
pub fn selection_key(prompt: &str) -> u32 {
    let digest = Sha256::digest(prompt.as_bytes());
    u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]])
}

/// Picks placeholder portraits from a fixed pool. Identical
/// `(prompt, bucket)` pairs always yield the identical URL for a given pool.
#[derive(Debug, Clone)]
pub struct PlaceholderSelector {
    pool: CandidatePool,
}

impl PlaceholderSelector {
    /// Creates a selector over `pool`.
    #[must_use]
    pub fn new(pool: CandidatePool) -> Self {
        Self { pool }
    }

    /// The pool this selector draws from.
    #[must_use]
    pub fn pool(&self) -> &CandidatePool {
        &self.pool
    }

    /// Selects the candidate for `prompt` from the pool resolved for `bucket`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the prompt is blank and
    /// `DomainError::Configuration` if the resolved pool is empty.
    pub fn select(&self, prompt: &str, bucket: Option<&str>) -> Result<&str, DomainError> {
        if prompt.trim().is_empty() {
            return Err(DomainError::blank_field("prompt"));
        }

        let resolved = self.pool.resolve(bucket);
        if resolved.candidates.is_empty() {
            return Err(empty_bucket(resolved.label));
        }

        let index = selection_key(prompt) as usize % resolved.candidates.len();
        Ok(&resolved.candidates[index])
    }
}

impl AssetSource for PlaceholderSelector {
    fn asset_for(&self, prompt: &str, bucket: Option<&str>) -> Result<String, DomainError> {
        self.select(prompt, bucket).map(str::to_owned)
    }
}
