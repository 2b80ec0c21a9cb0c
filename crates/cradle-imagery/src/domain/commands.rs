//! Commands for the Imagery context.

use cradle_core::command::Command;
use uuid::Uuid;

/// Command to produce a single portrait for a named child.
#[derive(Debug, Clone)]
pub struct GenerateImage {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The child's name.
    pub subject: String,
    /// Optional free-form appearance details.
    pub description: Option<String>,
}

impl Command for GenerateImage {
    fn command_type(&self) -> &'static str {
        "imagery.generate_image"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to produce one portrait per requested age.
#[derive(Debug, Clone)]
pub struct GenerateAgeProgression {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The child's name.
    pub subject: String,
    /// Description shared by every age in the series.
    pub base_prompt: String,
    /// Ages to render, in the order they should be returned.
    pub ages: Vec<i64>,
}

impl Command for GenerateAgeProgression {
    fn command_type(&self) -> &'static str {
        "imagery.generate_age_progression"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
