//! The content contract: seven required text fields, a teaser of at most
//! 140 characters and a reflection question ending in `?`.
//!
//! Every rule is checked; a failure lists all violations, not just the first.

use dailyconcept_core::{ContentValidationError, GeneratedContent, MAX_TEASER_CHARS};
use serde_json::Value;

pub const REQUIRED_FIELDS: [&str; 7] = [
    "topic",
    "teaser",
    "eli7",
    "deeper",
    "example",
    "whyItMatters",
    "reflectionQuestion",
];

/// Validates an untrusted provider payload and types it on success.
pub fn validate_response(candidate: &Value) -> Result<GeneratedContent, ContentValidationError> {
    let field = |name: &str| candidate.get(name).and_then(Value::as_str);
    check(field)?;

    let text = |name: &str| field(name).unwrap_or_default().to_string();
    Ok(GeneratedContent {
        topic: text("topic"),
        teaser: text("teaser"),
        eli7: text("eli7"),
        deeper: text("deeper"),
        example: text("example"),
        why_it_matters: text("whyItMatters"),
        reflection_question: text("reflectionQuestion"),
    })
}

/// Runs the same rules over already-typed content.
pub fn validate_content(content: &GeneratedContent) -> Result<(), ContentValidationError> {
    check(|name| match name {
        "topic" => Some(content.topic.as_str()),
        "teaser" => Some(content.teaser.as_str()),
        "eli7" => Some(content.eli7.as_str()),
        "deeper" => Some(content.deeper.as_str()),
        "example" => Some(content.example.as_str()),
        "whyItMatters" => Some(content.why_it_matters.as_str()),
        "reflectionQuestion" => Some(content.reflection_question.as_str()),
        _ => None,
    })
}

fn check<'a, F>(field: F) -> Result<(), ContentValidationError>
where
    F: Fn(&str) -> Option<&'a str>,
{
    let mut violations = Vec::new();

    for name in REQUIRED_FIELDS {
        let present = field(name).is_some_and(|value| !value.trim().is_empty());
        if !present {
            violations.push(format!("Missing or invalid {name}"));
        }
    }

    if let Some(teaser) = field("teaser") {
        if teaser.chars().count() > MAX_TEASER_CHARS {
            violations.push(format!("Teaser exceeds {MAX_TEASER_CHARS} characters"));
        }
    }

    if let Some(question) = field("reflectionQuestion") {
        let question = question.trim();
        if !question.is_empty() && !question.ends_with('?') {
            violations.push("Reflection question must end with ?".to_string());
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ContentValidationError::new(violations))
    }
}
