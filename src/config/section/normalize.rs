//! `[normalize]` section: defaults applied while building canonical pages.

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeConfig {
    /// Title given to a section that carries no identifying text at all.
    pub section_placeholder: String,
    /// Hero image used when no candidate field yields one.
    /// Set to `""` to leave the hero image absent instead.
    pub hero_fallback: Option<String>,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            section_placeholder: "Overview".into(),
            hero_fallback: Some("/images/placeholder.jpg".into()),
        }
    }
}

impl NormalizeConfig {
    /// The fallback hero image, if one is configured.
    pub fn hero_fallback(&self) -> Option<&str> {
        self.hero_fallback
            .as_deref()
            .map(str::trim)
            .filter(|src| !src.is_empty())
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.section_placeholder.trim().is_empty() {
            diag.error_with_hint(
                FieldPath::new("normalize.section_placeholder"),
                "placeholder title must not be empty",
                "an empty placeholder would produce untitled, contentless sections",
            );
        }
    }
}
