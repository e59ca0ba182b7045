//! Candidate key-paths into raw records.
//!
//! A key-path names one field of a JSON tree: `title`, `image.src`,
//! `gallery[0]`, or `gallery[0].src`. Paths are parsed once, when the
//! configuration is read, so malformed ones surface as config errors
//! rather than silently never matching.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use thiserror::Error;

/// Key-path syntax errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyPathError {
    #[error("key path is empty")]
    Empty,

    #[error("key path `{0}` has an empty segment")]
    EmptySegment(String),

    #[error("key path `{0}` has a malformed `[index]`")]
    BadIndex(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Key(String),
    Index(usize),
}

/// A parsed key-path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct KeyPath {
    raw: String,
    segments: Vec<Segment>,
}

impl KeyPath {
    /// Follow this path into `value`.
    ///
    /// Returns `None` as soon as a segment does not apply (missing key,
    /// index out of range, or a key lookup on a non-object).
    pub fn lookup<'a>(&self, value: &'a JsonValue) -> Option<&'a JsonValue> {
        self.segments
            .iter()
            .try_fold(value, |current, segment| match segment {
                Segment::Key(key) => current.as_object()?.get(key),
                Segment::Index(index) => current.as_array()?.get(*index),
            })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl FromStr for KeyPath {
    type Err = KeyPathError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(KeyPathError::Empty);
        }

        let mut segments = Vec::new();
        for part in raw.split('.') {
            let (name, mut rest) = part.split_at(part.find('[').unwrap_or(part.len()));
            if name.is_empty() {
                return Err(KeyPathError::EmptySegment(raw.to_string()));
            }
            segments.push(Segment::Key(name.to_string()));

            while let Some(tail) = rest.strip_prefix('[') {
                let close = tail
                    .find(']')
                    .ok_or_else(|| KeyPathError::BadIndex(raw.to_string()))?;
                let index = tail[..close]
                    .trim()
                    .parse()
                    .map_err(|_| KeyPathError::BadIndex(raw.to_string()))?;
                segments.push(Segment::Index(index));
                rest = &tail[close + 1..];
            }
            if !rest.is_empty() {
                return Err(KeyPathError::BadIndex(raw.to_string()));
            }
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }
}

impl TryFrom<String> for KeyPath {
    type Error = KeyPathError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

impl From<KeyPath> for String {
    fn from(path: KeyPath) -> Self {
        path.raw
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Build a candidate list from built-in key-paths.
///
/// Only used for compiled-in defaults: a malformed entry panics as soon as
/// `SiteConfig::default()` builds.
pub fn candidates(keys: &[&str]) -> Vec<KeyPath> {
    keys.iter()
        .map(|key| key.parse().expect("built-in key path is valid"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn path(raw: &str) -> KeyPath {
        raw.parse().unwrap()
    }

    #[test]
    fn test_parse_simple_and_nested() {
        assert_eq!(path("title").segments, vec![Segment::Key("title".into())]);
        assert_eq!(
            path("image.src").segments,
            vec![Segment::Key("image".into()), Segment::Key("src".into())]
        );
        assert_eq!(
            path("gallery[0].src").segments,
            vec![
                Segment::Key("gallery".into()),
                Segment::Index(0),
                Segment::Key("src".into())
            ]
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<KeyPath>(), Err(KeyPathError::Empty));
        assert!(matches!(
            "a..b".parse::<KeyPath>(),
            Err(KeyPathError::EmptySegment(_))
        ));
        assert!(matches!(
            "[0]".parse::<KeyPath>(),
            Err(KeyPathError::EmptySegment(_))
        ));
        assert!(matches!(
            "gallery[x]".parse::<KeyPath>(),
            Err(KeyPathError::BadIndex(_))
        ));
        assert!(matches!(
            "gallery[0".parse::<KeyPath>(),
            Err(KeyPathError::BadIndex(_))
        ));
        assert!(matches!(
            "gallery[0]x".parse::<KeyPath>(),
            Err(KeyPathError::BadIndex(_))
        ));
    }

    #[test]
    fn test_lookup() {
        let record = json!({
            "image": { "src": "/a.png" },
            "gallery": [{ "src": "/g0.png" }, "/g1.png"],
            "title": "Widget"
        });
        assert_eq!(path("title").lookup(&record), Some(&json!("Widget")));
        assert_eq!(path("image.src").lookup(&record), Some(&json!("/a.png")));
        assert_eq!(path("gallery[1]").lookup(&record), Some(&json!("/g1.png")));
        assert_eq!(
            path("gallery[0].src").lookup(&record),
            Some(&json!("/g0.png"))
        );
        assert_eq!(path("gallery[5]").lookup(&record), None);
        assert_eq!(path("title.src").lookup(&record), None);
        assert_eq!(path("missing").lookup(&record), None);
    }

    #[test]
    fn test_serde_round_trip_as_string() {
        let parsed: Vec<KeyPath> = serde_json::from_str(r#"["heroImage", "gallery[0]"]"#).unwrap();
        assert_eq!(parsed[1].as_str(), "gallery[0]");
        assert_eq!(serde_json::to_string(&parsed).unwrap(), r#"["heroImage","gallery[0]"]"#);
        assert!(serde_json::from_str::<Vec<KeyPath>>(r#"["a..b"]"#).is_err());
    }
}
