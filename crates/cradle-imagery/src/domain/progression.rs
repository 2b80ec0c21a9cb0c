//! Age progression: one portrait per requested age, tolerating per-age
//! failures.

use cradle_core::asset::AssetSource;
use cradle_core::error::DomainError;
use serde::Serialize;
use tracing::{debug, instrument, warn};

use super::prompts::{age_marker, age_prompt};

/// Ages rendered when a caller does not choose any.
pub const DEFAULT_AGES: [u32; 5] = [3, 6, 10, 15, 18];

/// A validated progression request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressionRequest {
    subject: String,
    base_prompt: String,
    ages: Vec<u32>,
}

impl ProgressionRequest {
    /// Validates and builds a request. Subject and base prompt are trimmed;
    /// ages keep their order and duplicates.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the subject or base prompt is
    /// blank, the ages list is empty, or any age is not a positive integer that fits in a `u32`.
    pub fn new(subject: &str, base_prompt: &str, ages: &[i64]) -> Result<Self, DomainError> {
        let subject = subject.trim();
        if subject.is_empty() {
            return Err(DomainError::blank_field("subject"));
        }
        let base_prompt = base_prompt.trim();
        if base_prompt.is_empty() {
            return Err(DomainError::blank_field("base_prompt"));
        }
        if ages.is_empty() {
            return Err(DomainError::Validation(
                "ages must contain at least one age".to_owned(),
            ));
        }

        let ages = ages
            .iter()
            .map(|&age| {
                u32::try_from(age)
                    .ok()
                    .filter(|age| *age >= 1)
                    .ok_or_else(|| {
                        DomainError::Validation(format!(
                            "age {age} must be a positive integer"
                        ))
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            subject: subject.to_owned(),
            base_prompt: base_prompt.to_owned(),
            ages,
        })
    }

    /// The child's name.
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// The shared description.
    #[must_use]
    pub fn base_prompt(&self) -> &str {
        &self.base_prompt
    }

    /// Requested ages, in request order.
    #[must_use]
    pub fn ages(&self) -> &[u32] {
        &self.ages
    }
}

/// A portrait rendered for one age.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgeImage {
    /// The age this portrait depicts.
    pub age: u32,
    /// The portrait URL.
    pub image_url: String,
}

/// Outcome of a progression run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressionResult {
    /// Successful portraits, in request order.
    pub images: Vec<AgeImage>,
    /// Ages whose portrait could not be produced, in request order.
    pub skipped_ages: Vec<u32>,
}

/// Renders one portrait per age in `request`, in order.
///
/// A failure for a single age is logged and that age is skipped; the run
/// continues with the next age.
///
/// # Errors
///
/// Returns the first per-age error if no age produced a portrait.
#[instrument(skip_all, fields(subject = %request.subject, ages = request.ages.len()))]
pub fn run_progression(
    request: &ProgressionRequest,
    source: &dyn AssetSource,
) -> Result<ProgressionResult, DomainError> {
    let mut result = ProgressionResult::default();
    let mut first_error = None;

    for &age in &request.ages {
        let prompt = age_prompt(&request.base_prompt, &request.subject, age);
        let bucket = age.to_string();
        debug!(age, marker = ?age_marker(&prompt), "selecting portrait for age");

        match source.asset_for(&prompt, Some(bucket.as_str())) {
            Ok(image_url) => result.images.push(AgeImage { age, image_url }),
            Err(err) => {
                warn!(age, error = %err, "skipping age after portrait failure");
                result.skipped_ages.push(age);
                first_error.get_or_insert(err);
            }
        }
    }

    match first_error {
        Some(err) if result.images.is_empty() => Err(err),
        _ => Ok(result),
    }
}
