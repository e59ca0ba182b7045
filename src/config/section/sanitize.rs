//! `[sanitize]` section: rich-text cleanup and blog title rules.
//!
//! ```toml
//! [sanitize]
//! leading_image_window = 400
//! placeholder_titles = ["my blog"]
//!
//! [[sanitize.prefix_rules]]
//! from = "uploads/"
//! to = "/uploads/"
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::field::{KeyPath, candidates};

/// Rewrite of a broken path prefix inside `src`/`href` attribute values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixRule {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SanitizeConfig {
    pub prefix_rules: Vec<PrefixRule>,
    /// How many characters of markup may precede a duplicated cover image
    /// for it to still count as "at the top" of the body.
    pub leading_image_window: usize,
    /// Record titles that mean "no real title" (compared case-insensitively).
    pub placeholder_titles: Vec<String>,
    /// Where the leading-image hint comes from, in precedence order.
    pub image_hint: Vec<KeyPath>,
    /// Explicit display-title override.
    pub title_override: Vec<KeyPath>,
    pub title: Vec<KeyPath>,
    /// The HTML body.
    pub content: Vec<KeyPath>,
}

impl Default for SanitizeConfig {
    fn default() -> Self {
        Self {
            prefix_rules: vec![PrefixRule {
                from: "uploads/".into(),
                to: "/uploads/".into(),
            }],
            leading_image_window: 400,
            placeholder_titles: vec!["my blog".into()],
            image_hint: candidates(&["metaImage", "coverImage"]),
            title_override: candidates(&["h1"]),
            title: candidates(&["title"]),
            content: candidates(&["content", "body", "html"]),
        }
    }
}

impl SanitizeConfig {
    /// Whether `title` is one of the configured placeholder titles.
    pub fn is_placeholder_title(&self, title: &str) -> bool {
        let title = title.trim();
        self.placeholder_titles
            .iter()
            .any(|placeholder| placeholder.trim().eq_ignore_ascii_case(title))
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.leading_image_window == 0 {
            diag.error(
                FieldPath::new("sanitize.leading_image_window"),
                "must be greater than 0",
            );
        }

        for rule in &self.prefix_rules {
            if rule.from.is_empty() {
                diag.error(
                    FieldPath::new("sanitize.prefix_rules"),
                    "rule has an empty `from` prefix",
                );
            } else if rule.to.starts_with(&rule.from) {
                // Rewriting into something the rule matches again is not idempotent.
                diag.error_with_hint(
                    FieldPath::new("sanitize.prefix_rules"),
                    format!("`to = \"{}\"` starts with `from = \"{}\"`", rule.to, rule.from),
                    "a rewritten path must not match the same rule again",
                );
            }
        }
    }
}
