//! Candidate pools of placeholder portrait URLs.

use std::collections::BTreeMap;

use cradle_core::error::DomainError;
use serde::Deserialize;

const UNSPLASH_PORTRAIT_PARAMS: &str = "w=400&h=400&fit=crop&crop=face&auto=format&q=80";

const DEFAULT_PHOTOS: [&str; 6] = [
    "photo-1544005313-94ddf0286df2",
    "photo-1503454537195-1dcabb73ffb9",
    "photo-1560183097-01d533c6cebe",
    "photo-1557804506-669a67965ba0",
    "photo-1598300042247-d088f8ab3a91",
    "photo-1576180422707-1dac2e2726b0",
];

const AGE_PHOTOS: [(&str, [&str; 3]); 5] = [
    (
        "3",
        [
            "photo-1503454537195-1dcabb73ffb9",
            "photo-1544005313-94ddf0286df2",
            "photo-1560183097-01d533c6cebe",
        ],
    ),
    (
        "6",
        [
            "photo-1557804506-669a67965ba0",
            "photo-1598300042247-d088f8ab3a91",
            "photo-1568822617270-2c1579f8dfe2",
        ],
    ),
    (
        "10",
        [
            "photo-1576180422707-1dac2e2726b0",
            "photo-1509967419530-da38b4704bc6",
            "photo-1515488042361-ee00e0ddd4e4",
        ],
    ),
    (
        "15",
        [
            "photo-1494790108755-2616c6106182",
            "photo-1507003211169-0a1dd7228f2d",
            "photo-1529626455594-4ff0802cfb7e",
        ],
    ),
    (
        "18",
        [
            "photo-1438761681033-6461ffad8d80",
            "photo-1500648767791-00dcc994a43e",
            "photo-1507003211169-0a1dd7228f2d",
        ],
    ),
];

fn unsplash_url(photo: &str) -> String {
    format!("https://images.unsplash.com/{photo}?{UNSPLASH_PORTRAIT_PARAMS}")
}

/// A fixed set of candidate asset URLs, partitioned into a default bucket
/// and optional named buckets (keyed by age, e.g. `"10"`).
///
/// Pools are static configuration: built once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CandidatePool {
    default: Vec<String>,
    #[serde(default)]
    buckets: BTreeMap<String, Vec<String>>,
}

/// The pool a bucket key resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedPool<'a> {
    /// The bucket that was used (`"default"` on fallback).
    pub label: &'a str,
    /// Candidate URLs in that bucket.
    pub candidates: &'a [String],
}

impl CandidatePool {
    /// Label reported for the default bucket.
    pub const DEFAULT_LABEL: &'static str = "default";

    /// Creates a pool without checking its invariants. Call
    /// [`CandidatePool::validate`] before serving from an untrusted pool.
    #[must_use]
    pub fn new(default: Vec<String>) -> Self {
        Self {
            default,
            buckets: BTreeMap::new(),
        }
    }

    /// Adds (or replaces) a named bucket.
    #[must_use]
    pub fn with_bucket(mut self, key: impl Into<String>, candidates: Vec<String>) -> Self {
        self.buckets.insert(key.into(), candidates);
        self
    }

    /// The built-in portrait pool: six default portraits and three per age
    /// for ages 3, 6, 10, 15 and 18.
    #[must_use]
    pub fn builtin() -> Self {
        AGE_PHOTOS.iter().fold(
            Self::new(DEFAULT_PHOTOS.iter().copied().map(unsplash_url).collect()),
            |pool, (age, photos)| {
                pool.with_bucket(*age, photos.iter().copied().map(unsplash_url).collect())
            },
        )
    }

    /// Parses a pool from YAML and validates it.
    ///
    /// ```yaml
    /// default:
    ///   - https://example.com/a.png
    /// buckets:
    ///   "10":
    ///     - https://example.com/ten.png
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Configuration` if the document does not parse or
    /// any bucket is empty.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, DomainError> {
        let pool: Self = serde_yaml::from_str(yaml)
            .map_err(|e| DomainError::Configuration(format!("invalid candidate pool: {e}")))?;
        pool.validate()?;
        Ok(pool)
    }

    /// Checks that the default bucket and every named bucket are non-empty.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Configuration` naming the first empty bucket.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.default.is_empty() {
            return Err(empty_bucket(Self::DEFAULT_LABEL));
        }
        match self.buckets.iter().find(|(_, candidates)| candidates.is_empty()) {
            Some((key, _)) => Err(empty_bucket(key)),
            None => Ok(()),
        }
    }

    /// Resolves a bucket key to its candidates, falling back to the default
    /// bucket when the key is absent or unknown.
    #[must_use]
    pub fn resolve(&self, bucket: Option<&str>) -> ResolvedPool<'_> {
        match bucket.and_then(|key| self.buckets.get_key_value(key)) {
            Some((label, candidates)) => ResolvedPool { label, candidates },
            None => ResolvedPool {
                label: Self::DEFAULT_LABEL,
                candidates: &self.default,
            },
        }
    }

    /// Names of the configured buckets, excluding the default.
    pub fn bucket_keys(&self) -> impl Iterator<Item = &str> {
        self.buckets.keys().map(String::as_str)
    }
}

pub(crate) fn empty_bucket(label: &str) -> DomainError {
    DomainError::Configuration(format!("candidate pool for bucket '{label}' is empty"))
}

/// Small pool used across the imagery tests: three default URLs and two
/// URLs each for buckets `"3"`, `"5"` and `"10"`.
#[cfg(test)]
pub(crate) fn fixture_pool() -> CandidatePool {
    let urls = |prefix: &str, n: usize| -> Vec<String> {
        (0..n).map(|i| format!("{prefix}{i}")).collect()
    };
    CandidatePool::new(urls("u", 3))
        .with_bucket("3", urls("age3-", 2))
        .with_bucket("5", urls("age5-", 2))
        .with_bucket("10", urls("age10-", 2))
}
