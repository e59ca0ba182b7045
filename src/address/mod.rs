//! Slug addressing: anything with a slug can be looked up by URL segment.
//!
//! # Module Structure
//!
//! - `resolve`: tiered lookup (`find`, `resolve`, `lookup`)
//!
//! # Usage
//!
//! ```ignore
//! let pages: Vec<CanonicalPage> = ...;
//! match address::resolve("/About-Us/", &pages) {
//!     Some(page) => render(page),
//!     None => not_found(address::available_slugs(&pages)),
//! }
//! ```

mod resolve;

pub use resolve::{LookupError, MatchTier, available_slugs, find, lookup, normalize_slug, resolve};

use serde_json::Value as JsonValue;

use crate::blog::BlogView;
use crate::config::SiteConfig;
use crate::field::{resolve_strings, resolve_text};
use crate::page::CanonicalPage;

/// Something a slug can point at.
pub trait Addressable {
    fn slug(&self) -> &str;

    /// Alternative slugs, e.g. old URLs.
    fn aliases(&self) -> &[String] {
        &[]
    }

    fn display_title(&self) -> Option<&str>;

    fn name(&self) -> Option<&str> {
        None
    }
}

impl Addressable for CanonicalPage {
    fn slug(&self) -> &str {
        &self.slug
    }

    fn display_title(&self) -> Option<&str> {
        Some(self.title.as_str()).filter(|title| !title.is_empty())
    }
}

impl Addressable for BlogView {
    fn slug(&self) -> &str {
        &self.slug
    }

    fn display_title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

/// A raw record adapted for lookup through the `[slug]` key tables.
#[derive(Debug, Clone)]
pub struct RawCandidate<'a> {
    pub record: &'a JsonValue,
    slug: String,
    aliases: Vec<String>,
    title: Option<String>,
    name: Option<String>,
}

impl<'a> RawCandidate<'a> {
    /// Adapt one record. Records without a slug cannot be addressed.
    pub fn new(record: &'a JsonValue, config: &SiteConfig) -> Option<Self> {
        Some(Self {
            record,
            slug: resolve_text(record, &config.fields.slug)?,
            aliases: resolve_strings(record, &config.slug.aliases),
            title: resolve_text(record, &config.slug.title),
            name: resolve_text(record, &config.slug.name),
        })
    }

    /// Adapt every addressable record, preserving order.
    pub fn index(records: &'a [JsonValue], config: &SiteConfig) -> Vec<Self> {
        records
            .iter()
            .filter_map(|record| Self::new(record, config))
            .collect()
    }
}

impl Addressable for RawCandidate<'_> {
    fn slug(&self) -> &str {
        &self.slug
    }

    fn aliases(&self) -> &[String] {
        &self.aliases
    }

    fn display_title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
