//! `[slug]` section: where slug lookup finds aliases and display names.

use serde::{Deserialize, Serialize};

use crate::field::{KeyPath, candidates};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SlugConfig {
    /// Alternative slugs (old URLs, redirects).
    pub aliases: Vec<KeyPath>,
    /// Display title, matched by substring in the last lookup tier.
    pub title: Vec<KeyPath>,
    /// Name, matched by substring after the title.
    pub name: Vec<KeyPath>,
}

impl Default for SlugConfig {
    fn default() -> Self {
        Self {
            aliases: candidates(&["aliases", "redirects", "legacySlugs"]),
            title: candidates(&["title", "heroTitle"]),
            name: candidates(&["name"]),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.slug.aliases[0].as_str(), "aliases");
        assert_eq!(config.slug.name[0].as_str(), "name");
    }

    #[test]
    fn test_override() {
        let config = test_parse_config("[slug]\naliases = [\"meta.oldSlugs\"]");
        assert_eq!(config.slug.aliases.len(), 1);
        assert_eq!(config.slug.aliases[0].as_str(), "meta.oldSlugs");
    }
}
