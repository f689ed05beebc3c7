// ABOUTME: Extracts a JSON object from free-form model output
// ABOUTME: Whole text first, then the outermost brace-delimited substring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

use serde_json::{Map, Value};

use crate::errors::AppError;

/// Parse a JSON object out of model output
///
/// Models often wrap JSON in prose or markdown fences, so when the whole
/// text is not an object the span from the first `{` to the last `}` is tried.
///
/// # Errors
///
/// Returns `InvalidFormat` when neither candidate parses to a JSON object.
pub fn extract_json_object(text: &str) -> Result<Map<String, Value>, AppError> {
    if let Ok(Value::Object(object)) = serde_json::from_str::<Value>(text.trim()) {
        return Ok(object);
    }

    let span = text
        .find('{')
        .zip(text.rfind('}'))
        .filter(|(start, end)| start < end)
        .map(|(start, end)| &text[start..=end])
        .ok_or_else(|| AppError::invalid_format("No JSON object found in model output"))?;

    match serde_json::from_str::<Value>(span) {
        Ok(Value::Object(object)) => Ok(object),
        Ok(_) => Err(AppError::invalid_format("Model output is not a JSON object")),
        Err(e) => Err(AppError::invalid_format(format!(
            "Malformed JSON in model output: {e}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_object() {
        let object = extract_json_object(r#"{"tips": {"lifestyle": []}}"#).unwrap();
        assert!(object.contains_key("tips"));
    }

    #[test]
    fn test_object_wrapped_in_markdown_fence() {
        let text = "Here is your plan:\n```json\n{\"progress\": {\"weeklyGoals\": [\"a\"]}}\n```\nEnjoy!";
        let object = extract_json_object(text).unwrap();
        assert_eq!(object["progress"]["weeklyGoals"][0], "a");
    }

    #[test]
    fn test_no_braces_is_an_error() {
        assert!(extract_json_object("I cannot help with that.").is_err());
    }

    #[test]
    fn test_top_level_array_is_rejected() {
        assert!(extract_json_object("[1, 2, 3]").is_err());
    }

    #[test]
    fn test_unbalanced_braces_are_rejected() {
        assert!(extract_json_object("} oops {").is_err());
        assert!(extract_json_object("{\"a\": ").is_err());
    }
}
