//! Prompt templates for portrait generation.

use std::sync::LazyLock;

use regex::Regex;

static AGE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+) years? old").expect("age marker pattern is valid"));

/// Builds the prompt for a single portrait of `subject`. A blank
/// `description` is treated as absent.
#[must_use]
pub fn portrait_prompt(subject: &str, description: Option<&str>) -> String {
    match description.map(str::trim).filter(|d| !d.is_empty()) {
        Some(description) => format!(
            "A portrait of a happy, adorable child named {subject}. {description}. \
             High quality, professional portrait, soft lighting, warm and friendly expression."
        ),
        None => format!(
            "A portrait of a happy, adorable child named {subject}. \
             High quality, professional portrait, soft lighting, warm and friendly expression, \
             realistic style."
        ),
    }
}

/// Builds the age-qualified prompt for one step of an age progression.
#[must_use]
pub fn age_prompt(base_prompt: &str, subject: &str, age: u32) -> String {
    format!(
        "{base_prompt} The child named {subject} is now {age} years old. \
         Show appropriate physical development for age {age}. High quality, professional portrait."
    )
}

/// Extracts the first `"<N> years old"` marker from a prompt.
///
/// Only used for diagnostics: progression picks its bucket from the
/// requested age, never from the prompt text.
#[must_use]
pub fn age_marker(prompt: &str) -> Option<u32> {
    AGE_MARKER
        .captures(prompt)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}
