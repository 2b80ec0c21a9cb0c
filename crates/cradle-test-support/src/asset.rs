//! Test asset sources: `AssetSource` implementations for tests.

use std::sync::Mutex;

use cradle_core::asset::AssetSource;
use cradle_core::error::DomainError;

/// An asset source that returns the same URL for every call and records the
/// `(prompt, bucket)` pairs it was asked for.
#[derive(Debug)]
pub struct RecordingAssetSource {
    url: String,
    calls: Mutex<Vec<(String, Option<String>)>>,
}

impl RecordingAssetSource {
    /// Create a source that always answers `url`.
    #[must_use]
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_owned(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Returns a snapshot of all recorded calls, in call order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn calls(&self) -> Vec<(String, Option<String>)> {
        self.calls.lock().unwrap().clone()
    }
}

impl AssetSource for RecordingAssetSource {
    fn asset_for(&self, prompt: &str, bucket: Option<&str>) -> Result<String, DomainError> {
        self.calls
            .lock()
            .unwrap()
            .push((prompt.to_owned(), bucket.map(str::to_owned)));
        Ok(self.url.clone())
    }
}

/// Wraps another source and fails with `DomainError::Configuration` for the
/// listed buckets, as a misconfigured pool would. Other buckets delegate to
/// the inner source.
pub struct BucketFailingSource {
    inner: Box<dyn AssetSource>,
    failing: Vec<String>,
}

impl BucketFailingSource {
    /// Create a source that fails for every bucket in `failing`.
    #[must_use]
    pub fn new(inner: impl AssetSource + 'static, failing: &[&str]) -> Self {
        Self {
            inner: Box::new(inner),
            failing: failing.iter().map(|b| (*b).to_owned()).collect(),
        }
    }
}

impl AssetSource for BucketFailingSource {
    fn asset_for(&self, prompt: &str, bucket: Option<&str>) -> Result<String, DomainError> {
        match bucket {
            Some(key) if self.failing.iter().any(|f| f == key) => Err(DomainError::Configuration(
                format!("candidate pool for bucket '{key}' is empty"),
            )),
            _ => self.inner.asset_for(prompt, bucket),
        }
    }
}
