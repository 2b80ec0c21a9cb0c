//! Command handlers for the Naming context.

use cradle_core::command::Command;
use cradle_core::error::DomainError;
use cradle_core::language_model::LanguageModel;
use tracing::info;

use crate::domain::commands::GenerateNames;
use crate::domain::suggestions::{NameSuggestions, names_prompt, parse_suggestions};

/// Handles the `GenerateNames` command: prompts the language model with the
/// description and parses its reply into suggestions.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the description is blank, or the
/// language model's error if the call fails.
pub async fn handle_generate_names(
    command: &GenerateNames,
    model: &dyn LanguageModel,
) -> Result<NameSuggestions, DomainError> {
    let description = command.description.trim();
    if description.is_empty() {
        return Err(DomainError::blank_field("description"));
    }

    let reply = model.complete(&names_prompt(description)).await?;
    let suggestions = parse_suggestions(&reply);

    info!(
        correlation_id = %command.correlation_id(),
        command_type = command.command_type(),
        names = suggestions.names.len(),
        "name suggestions generated"
    );

    Ok(suggestions)
}

#[cfg(test)]
mod tests {
    use cradle_core::error::DomainError;
    use cradle_test_support::{FailingLanguageModel, ScriptedLanguageModel};
    use uuid::Uuid;

    use crate::application::command_handlers::handle_generate_names;
    use crate::domain::commands::GenerateNames;

    fn command(description: &str) -> GenerateNames {
        GenerateNames {
            correlation_id: Uuid::new_v4(),
            description: description.to_owned(),
        }
    }

    #[tokio::test]
    async fn test_handle_generate_names_parses_model_reply() {
        // Arrange
        let model = ScriptedLanguageModel::new(
            r#"{"names": ["Hazel", "Rowan"], "explanation": "Earthy and gentle."}"#,
        );

        // Act
        let suggestions = handle_generate_names(&command(" nature names "), &model)
            .await
            .unwrap();

        // Assert
        assert_eq!(suggestions.names, vec!["Hazel", "Rowan"]);
        assert_eq!(suggestions.explanation, "Earthy and gentle.");
        let prompts = model.prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains(r#"description: "nature names""#));
    }

    #[tokio::test]
    async fn test_handle_generate_names_rejects_blank_description() {
        let model = ScriptedLanguageModel::new("{}");

        let result = handle_generate_names(&command("   "), &model).await;

        assert!(matches!(result, Err(DomainError::Validation(_))));
        assert!(model.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_handle_generate_names_propagates_model_failure() {
        let result = handle_generate_names(&command("short names"), &FailingLanguageModel).await;

        assert!(matches!(result, Err(DomainError::Infrastructure(_))));
    }
}
