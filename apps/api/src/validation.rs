//! Request-body validation.
//!
//! Every POST body is checked field by field before anything else happens, so
//! an incomplete form never reaches the LLM. All problems are reported at once
//! rather than stopping at the first.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::AppError;

/// Checks that every `(dotted.path, message)` rule points at a non-empty
/// string in `body`, then deserializes it into `T`.
pub fn validate_body<T: DeserializeOwned>(
    body: Value,
    required: &[(&str, &str)],
) -> Result<T, AppError> {
    if !body.is_object() {
        return Err(AppError::Validation(format!(
            "Expected an object, received {}",
            type_name(&body)
        )));
    }

    let issues: Vec<String> = required
        .iter()
        .filter_map(|(path, message)| check_string_field(&body, path, message))
        .collect();

    if !issues.is_empty() {
        return Err(AppError::Validation(issues.join("; ")));
    }

    serde_json::from_value(body).map_err(|e| AppError::Validation(e.to_string()))
}

/// Returns a human-readable issue if the field at `path` is not a non-empty string.
fn check_string_field(body: &Value, path: &str, message: &str) -> Option<String> {
    let field = path.split('.').try_fold(body, |node, key| node.get(key));
    match field {
        Some(Value::String(s)) if !s.is_empty() => None,
        None | Some(Value::Null) | Some(Value::String(_)) => Some(format!("{message} at \"{path}\"")),
        Some(other) => Some(format!(
            "Expected string, received {} at \"{path}\"",
            type_name(other)
        )),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
