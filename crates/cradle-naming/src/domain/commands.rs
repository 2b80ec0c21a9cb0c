//! Commands for the Naming context.

use cradle_core::command::Command;
use uuid::Uuid;

/// Command to suggest names matching a description.
#[derive(Debug, Clone)]
pub struct GenerateNames {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Free-form description of the kind of name wanted.
    pub description: String,
}

impl Command for GenerateNames {
    fn command_type(&self) -> &'static str {
        "naming.generate_names"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
