//! Config field path used in diagnostics.

use owo_colors::Style;
use std::fmt;

use crate::logger::paint;

/// Dotted path of a config field, e.g. `sanitize.leading_image_window`.
///
/// Diagnostics carry one so the message points at the exact TOML key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", paint(format_args!("`{}`", self.0), Style::new().bright_blue()))
    }
}
