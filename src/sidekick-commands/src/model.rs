//! Model identifier validation.

use regex_lite::Regex;

/// Accepted model identifier shape: `provider/model-name`.
const MODEL_PATTERN: &str = r"^[a-z0-9][a-z0-9._-]*/[a-zA-Z0-9][a-zA-Z0-9._-]*$";

/// Normalize a raw `model` frontmatter value into an accepted identifier.
///
/// Returns `None` when the value is absent, empty, or does not match the
/// `provider/model-name` grammar; otherwise the trimmed identifier.
/// Unrecognized shapes are rejected, never passed through.
pub fn sanitize_model_field(raw: Option<&str>) -> Option<String> {
    let value = raw?.trim();
    if value.is_empty() {
        return None;
    }

    let re = Regex::new(MODEL_PATTERN).ok()?;
    if re.is_match(value) {
        Some(value.to_string())
    } else {
        None
    }
}
