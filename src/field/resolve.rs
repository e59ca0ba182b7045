//! Ordered candidate resolution.
//!
//! Every "which field holds the title?" question in the pipeline goes
//! through here: walk the candidate list in order and take the first
//! value that is present and has the shape the caller asked for.

use serde_json::Value as JsonValue;

use super::KeyPath;
use crate::page::ImageRef;

/// Separator placed between paragraphs when a body arrives as a list.
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

const IMAGE_SRC_KEYS: [&str; 3] = ["src", "url", "path"];
const IMAGE_ALT_KEYS: [&str; 2] = ["alt", "caption"];
const ITEM_TEXT_KEYS: [&str; 4] = ["text", "label", "title", "heading"];

/// Whether a value counts as present.
///
/// `null`, blank strings and empty arrays are treated like a missing key.
pub fn is_present(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => false,
        JsonValue::String(s) => !s.trim().is_empty(),
        JsonValue::Array(items) => !items.is_empty(),
        _ => true,
    }
}

/// First present value among `candidates`.
pub fn resolve<'a>(record: &'a JsonValue, candidates: &[KeyPath]) -> Option<&'a JsonValue> {
    candidates
        .iter()
        .filter_map(|path| path.lookup(record))
        .find(|value| is_present(value))
}

/// First present value among `candidates` that `extract` accepts.
///
/// A candidate holding the wrong shape (an object where text was expected)
/// is skipped exactly like a missing one.
pub fn resolve_with<'a, T>(
    record: &'a JsonValue,
    candidates: &[KeyPath],
    extract: impl Fn(&'a JsonValue) -> Option<T>,
) -> Option<T> {
    candidates
        .iter()
        .filter_map(|path| path.lookup(record))
        .filter(|value| is_present(value))
        .find_map(extract)
}

pub fn resolve_text(record: &JsonValue, candidates: &[KeyPath]) -> Option<String> {
    resolve_with(record, candidates, as_text)
}

pub fn resolve_paragraphs(record: &JsonValue, candidates: &[KeyPath]) -> Option<String> {
    resolve_with(record, candidates, as_paragraphs)
}

pub fn resolve_image(record: &JsonValue, candidates: &[KeyPath]) -> Option<ImageRef> {
    resolve_with(record, candidates, as_image)
}

pub fn resolve_list<'a>(record: &'a JsonValue, candidates: &[KeyPath]) -> Option<&'a [JsonValue]> {
    resolve_with(record, candidates, |value| value.as_array().map(Vec::as_slice))
}

/// Resolve a list of short strings (bullets, column headers).
///
/// Empty when nothing usable exists.
pub fn resolve_strings(record: &JsonValue, candidates: &[KeyPath]) -> Vec<String> {
    resolve_with(record, candidates, as_strings).unwrap_or_default()
}

// ============================================================================
// Extractors
// ============================================================================

/// Trimmed, non-empty text. Numbers are accepted and rendered as text.
pub fn as_text(value: &JsonValue) -> Option<String> {
    match value {
        JsonValue::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        JsonValue::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// A body: either one string or a list of paragraphs joined by a blank line.
pub fn as_paragraphs(value: &JsonValue) -> Option<String> {
    match value {
        JsonValue::Array(items) => {
            let paragraphs: Vec<String> = items.iter().filter_map(as_text).collect();
            (!paragraphs.is_empty()).then(|| paragraphs.join(PARAGRAPH_SEPARATOR))
        }
        other => as_text(other),
    }
}

/// An image: a bare URL string, or an object with `src`/`url`/`path`.
pub fn as_image(value: &JsonValue) -> Option<ImageRef> {
    match value {
        JsonValue::String(_) => as_text(value).map(ImageRef::new),
        JsonValue::Object(map) => {
            let src = IMAGE_SRC_KEYS
                .iter()
                .find_map(|key| map.get(*key).and_then(as_text))?;
            let alt = IMAGE_ALT_KEYS
                .iter()
                .find_map(|key| map.get(*key).and_then(as_text))
                .unwrap_or_default();
            Some(ImageRef { src, alt })
        }
        _ => None,
    }
}

/// A list of strings. List items may be plain text or `{text|label|title}`
/// objects; a single string becomes a one-item list.
pub fn as_strings(value: &JsonValue) -> Option<Vec<String>> {
    let items: Vec<String> = match value {
        JsonValue::Array(items) => items.iter().filter_map(item_text).collect(),
        other => as_text(other).into_iter().collect(),
    };
    (!items.is_empty()).then_some(items)
}

fn item_text(value: &JsonValue) -> Option<String> {
    match value {
        JsonValue::Object(map) => ITEM_TEXT_KEYS
            .iter()
            .find_map(|key| map.get(*key).and_then(as_text)),
        other => as_text(other),
    }
}
