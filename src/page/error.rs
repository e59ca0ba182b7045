//! Normalization errors.

use serde_json::Value as JsonValue;
use thiserror::Error;

/// The only ways a raw record can fail to normalize.
///
/// Everything else (missing titles, odd section shapes) degrades to an
/// absent field instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    #[error("raw record is {0}, expected an object")]
    NotAnObject(&'static str),

    #[error("raw record has no usable slug")]
    MissingSlug,
}

/// Human-readable JSON kind, for messages.
pub fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}
