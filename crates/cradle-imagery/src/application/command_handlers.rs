//! Command handlers for the Imagery context.
//!
//! Handlers validate a command once, at the boundary, then delegate to the
//! domain: the selector for single portraits and the progression
//! orchestrator for age series.

use cradle_core::asset::AssetSource;
use cradle_core::command::Command;
use cradle_core::error::DomainError;
use tracing::info;

use crate::domain::commands::{GenerateAgeProgression, GenerateImage};
use crate::domain::progression::{ProgressionRequest, ProgressionResult, run_progression};
use crate::domain::prompts::portrait_prompt;

/// Handles the `GenerateImage` command: builds the portrait prompt and
/// selects a portrait from the default bucket.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the subject is blank and
/// `DomainError::Configuration` if the default pool is unusable.
pub fn handle_generate_image(
    command: &GenerateImage,
    source: &dyn AssetSource,
) -> Result<String, DomainError> {
    let subject = command.subject.trim();
    if subject.is_empty() {
        return Err(DomainError::blank_field("subject"));
    }

    let prompt = portrait_prompt(subject, command.description.as_deref());
    let image_url = source.asset_for(&prompt, None)?;

    info!(
        correlation_id = %command.correlation_id(),
        command_type = command.command_type(),
        "portrait selected"
    );

    Ok(image_url)
}

/// Handles the `GenerateAgeProgression` command: validates the request and
/// renders one portrait per age.
///
/// # Errors
///
/// Returns `DomainError::Validation` for an invalid request, or the first
/// per-age error when no age could be rendered.
pub fn handle_generate_age_progression(
    command: &GenerateAgeProgression,
    source: &dyn AssetSource,
) -> Result<ProgressionResult, DomainError> {
    let request = ProgressionRequest::new(&command.subject, &command.base_prompt, &command.ages)?;
    let result = run_progression(&request, source)?;

    info!(
        correlation_id = %command.correlation_id(),
        command_type = command.command_type(),
        rendered = result.images.len(),
        skipped = result.skipped_ages.len(),
        "age progression rendered"
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use cradle_core::error::DomainError;
    use cradle_test_support::{BucketFailingSource, RecordingAssetSource};
    use uuid::Uuid;

    use crate::application::command_handlers::{
        handle_generate_age_progression, handle_generate_image,
    };
    use crate::domain::commands::{GenerateAgeProgression, GenerateImage};
    use crate::domain::pool::fixture_pool;
    use crate::domain::selector::PlaceholderSelector;

    fn generate_image(subject: &str, description: Option<&str>) -> GenerateImage {
        GenerateImage {
            correlation_id: Uuid::new_v4(),
            subject: subject.to_owned(),
            description: description.map(str::to_owned),
        }
    }

    fn progression(subject: &str, ages: Vec<i64>) -> GenerateAgeProgression {
        GenerateAgeProgression {
            correlation_id: Uuid::new_v4(),
            subject: subject.to_owned(),
            base_prompt: "A cheerful child.".to_owned(),
            ages,
        }
    }

    #[test]
    fn test_handle_generate_image_uses_default_bucket() {
        let source = RecordingAssetSource::new("https://img/1");

        let url = handle_generate_image(&generate_image("Emma", Some("red hair")), &source)
            .unwrap();

        assert_eq!(url, "https://img/1");
        let calls = source.calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].0.contains("named Emma. red hair."));
        assert_eq!(calls[0].1, None);
    }

    #[test]
    fn test_handle_generate_image_is_deterministic() {
        let selector = PlaceholderSelector::new(fixture_pool());
        let command = generate_image("Emma", None);

        let first = handle_generate_image(&command, &selector).unwrap();
        let second = handle_generate_image(&command, &selector).unwrap();

        assert_eq!(first, second);
        assert!(first.starts_with('u'));
    }

    #[test]
    fn test_handle_generate_image_rejects_blank_subject() {
        let source = RecordingAssetSource::new("https://img/1");

        let result = handle_generate_image(&generate_image("  ", None), &source);

        assert!(matches!(result, Err(DomainError::Validation(_))));
        assert!(source.calls().is_empty());
    }

    #[test]
    fn test_handle_generate_age_progression_passes_age_buckets() {
        let source = RecordingAssetSource::new("https://img/x");

        let result =
            handle_generate_age_progression(&progression("Liam", vec![5, 10, 3]), &source).unwrap();

        assert_eq!(result.images.len(), 3);
        let buckets: Vec<Option<String>> = source.calls().into_iter().map(|c| c.1).collect();
        assert_eq!(
            buckets,
            vec![Some("5".to_owned()), Some("10".to_owned()), Some("3".to_owned())]
        );
    }

    #[test]
    fn test_handle_generate_age_progression_tolerates_partial_failure() {
        let source = BucketFailingSource::new(PlaceholderSelector::new(fixture_pool()), &["10"]);

        let result =
            handle_generate_age_progression(&progression("Liam", vec![5, 10, 3]), &source).unwrap();

        let ages: Vec<u32> = result.images.iter().map(|i| i.age).collect();
        assert_eq!(ages, vec![5, 3]);
        assert_eq!(result.skipped_ages, vec![10]);
    }

    #[test]
    fn test_handle_generate_age_progression_validates_before_selecting() {
        let source = RecordingAssetSource::new("https://img/x");

        let result = handle_generate_age_progression(&progression("Liam", vec![5, -1]), &source);

        assert!(matches!(result, Err(DomainError::Validation(_))));
        assert!(source.calls().is_empty());
    }

    #[test]
    fn test_handle_generate_age_progression_fails_when_all_ages_fail() {
        let source = BucketFailingSource::new(PlaceholderSelector::new(fixture_pool()), &["5", "3"]);

        let result = handle_generate_age_progression(&progression("Liam", vec![5, 3]), &source);

        assert!(matches!(result, Err(DomainError::Configuration(_))));
    }
}
