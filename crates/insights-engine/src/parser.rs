//! Parse chat-completion output into JSON insight structures

use crate::error::EngineError;
use serde_json::Value;

/// Parse a completion response that was required to be a single JSON object.
///
/// The response format directive is requested but not guaranteed; models
/// sometimes wrap JSON in a markdown code block, so a fence is stripped
/// before parsing. Anything other than a top-level object is an error.
pub(crate) fn parse_json_object(response: &str) -> Result<Value, EngineError> {
    let json_str = strip_code_fence(response);

    let value: Value = serde_json::from_str(&json_str)
        .map_err(|e| EngineError::JsonParse(format!("{}", e)))?;

    if !value.is_object() {
        return Err(EngineError::InvalidFormat(
            "Expected a JSON object".to_string(),
        ));
    }

    Ok(value)
}

/// Strip a surrounding markdown code block, if present.
fn strip_code_fence(response: &str) -> String {
    let trimmed = response.trim();

    if trimmed.starts_with("```") {
        let lines: Vec<&str> = trimmed.lines().collect();
        if lines.len() < 2 {
            return String::new();
        }
        // Skip first line (```json or ```) and last line (```)
        lines[1..lines.len().saturating_sub(1)].join("\n")
    } else {
        trimmed.to_string()
    }
}
