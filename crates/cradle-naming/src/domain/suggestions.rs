//! Name suggestion prompt and reply parsing.

use serde::{Deserialize, Serialize};

/// Number of names requested from, and kept out of, a reply.
pub const SUGGESTION_COUNT: usize = 5;

/// Names returned when a free-text reply yields nothing usable.
pub const FALLBACK_NAMES: [&str; SUGGESTION_COUNT] = ["Alex", "Jordan", "Casey", "Taylor", "Morgan"];

const EXPLANATION_LIMIT: usize = 200;
const MAX_LINE_CHARS: usize = 30;
const MAX_NAME_WORDS: usize = 2;

/// Parsed name suggestions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameSuggestions {
    /// Suggested names, at most [`SUGGESTION_COUNT`].
    pub names: Vec<String>,
    /// Why the names fit the description.
    pub explanation: String,
}

#[derive(Debug, Deserialize)]
struct StructuredReply {
    #[serde(default)]
    names: Vec<String>,
    #[serde(default)]
    explanation: String,
}

/// Builds the language-model prompt for a description.
#[must_use]
pub fn names_prompt(description: &str) -> String {
    format!(
        r#"Generate {SUGGESTION_COUNT} unique child names based on this description: "{description}"

Please consider:
- The style and characteristics requested
- Cultural backgrounds if mentioned
- Gender preferences if specified
- Modern vs traditional preferences
- Any specific letters or sounds mentioned

Provide your response as a JSON object with:
- "names": array of {SUGGESTION_COUNT} suggested names
- "explanation": brief explanation of why these names fit the description

Example format:
{{
    "names": ["Emma", "Oliver", "Sophia", "Liam", "Ava"],
    "explanation": "These are popular modern names that are classic yet contemporary..."
}}"#
    )
}

/// Parses a model reply into suggestions.
///
/// A JSON object (optionally wrapped in a Markdown code fence) is used
/// directly. Anything else goes through a line-based fallback that keeps
/// short lines of one or two words.
#[must_use]
pub fn parse_suggestions(reply: &str) -> NameSuggestions {
    let reply = reply.trim();
    match serde_json::from_str::<StructuredReply>(strip_code_fence(reply)) {
        Ok(structured) => NameSuggestions {
            names: structured
                .names
                .iter()
                .map(String::as_str)
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .take(SUGGESTION_COUNT)
                .map(str::to_owned)
                .collect(),
            explanation: structured.explanation.trim().to_owned(),
        },
        Err(_) => parse_free_text(reply),
    }
}

fn strip_code_fence(text: &str) -> &str {
    let Some(inner) = text.strip_prefix("```") else {
        return text;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}

fn parse_free_text(reply: &str) -> NameSuggestions {
    let mut names: Vec<String> = reply
        .lines()
        .filter_map(candidate_name)
        .take(SUGGESTION_COUNT)
        .collect();
    if names.is_empty() {
        names = FALLBACK_NAMES.iter().map(|n| (*n).to_owned()).collect();
    }

    NameSuggestions {
        names,
        explanation: truncate_explanation(reply),
    }
}

/// Reduces a list-like line (`"1. **Emma**"`, `"- Oliver"`) to a name, or
/// `None` if the line does not look like one.
fn candidate_name(line: &str) -> Option<String> {
    let line = line.trim();
    if line.chars().count() >= MAX_LINE_CHARS
        || line.ends_with(':')
        || !line.chars().any(char::is_alphabetic)
    {
        return None;
    }

    let name = line
        .trim_start_matches(|c: char| c.is_ascii_digit() || "-*.)•".contains(c) || c.is_whitespace())
        .replace('*', "");
    let name = name.trim().trim_end_matches(['.', ',', ';']).trim_matches('"').trim();

    let words = name.split_whitespace().count();
    (1..=MAX_NAME_WORDS).contains(&words).then(|| name.to_owned())
}

fn truncate_explanation(reply: &str) -> String {
    if reply.chars().count() > EXPLANATION_LIMIT {
        let head: String = reply.chars().take(EXPLANATION_LIMIT).collect();
        format!("{head}...")
    } else {
        reply.to_owned()
    }
}
