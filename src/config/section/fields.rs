//! `[fields]` section: candidate key tables per concept.
//!
//! Each entry is an ordered list of key-paths; the first one holding a
//! present value wins. Reordering a list changes precedence, nothing else.
//!
//! ```toml
//! [fields]
//! hero_image = ["heroImage", "overviewImage", "gallery[0]"]
//! title = ["heroTitle", "title"]
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::field::{KeyPath, candidates};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldTable {
    // Page level
    pub slug: Vec<KeyPath>,
    pub title: Vec<KeyPath>,
    pub tagline: Vec<KeyPath>,
    pub hero_image: Vec<KeyPath>,
    pub ctas: Vec<KeyPath>,
    pub cta_label: Vec<KeyPath>,
    pub cta_href: Vec<KeyPath>,
    /// Flat `ctaLabel`/`ctaHref` pair used by older records without a list.
    pub legacy_cta_label: Vec<KeyPath>,
    pub legacy_cta_href: Vec<KeyPath>,
    pub sections: Vec<KeyPath>,

    // Pass-through collections
    pub use_cases: Vec<KeyPath>,
    pub spec_groups: Vec<KeyPath>,
    pub gallery: Vec<KeyPath>,
    pub comparison: Vec<KeyPath>,
    pub testimonials: Vec<KeyPath>,

    // Section level
    pub section_type: Vec<KeyPath>,
    pub section_title: Vec<KeyPath>,
    pub section_heading: Vec<KeyPath>,
    pub section_body: Vec<KeyPath>,
    pub section_bullets: Vec<KeyPath>,
    pub section_image: Vec<KeyPath>,
    pub eyebrow: Vec<KeyPath>,
    pub subtitle: Vec<KeyPath>,
    pub variant: Vec<KeyPath>,
    pub sub_sections: Vec<KeyPath>,
    pub gallery_items: Vec<KeyPath>,
    pub timeline_steps: Vec<KeyPath>,
    pub step_label: Vec<KeyPath>,
    pub comparison_columns: Vec<KeyPath>,
    pub comparison_rows: Vec<KeyPath>,
    pub comparison_data: Vec<KeyPath>,
    pub section_spec_groups: Vec<KeyPath>,
    pub spec_label: Vec<KeyPath>,
    pub spec_rows: Vec<KeyPath>,
    pub spec_value: Vec<KeyPath>,
}

impl Default for FieldTable {
    fn default() -> Self {
        Self {
            slug: candidates(&["slug", "handle"]),
            title: candidates(&["heroTitle", "title", "name"]),
            tagline: candidates(&["heroTagline", "tagline", "subtitle", "summary"]),
            hero_image: candidates(&[
                "heroImage",
                "overviewImage",
                "image",
                "previewImage",
                "gallery[0]",
            ]),
            ctas: candidates(&["ctas", "buttons", "cta"]),
            cta_label: candidates(&["label", "text", "title"]),
            cta_href: candidates(&["href", "url", "link"]),
            legacy_cta_label: candidates(&["ctaLabel", "ctaText"]),
            legacy_cta_href: candidates(&["ctaHref", "ctaLink", "ctaUrl"]),
            sections: candidates(&["sections", "blocks", "content"]),

            use_cases: candidates(&["useCases", "applications"]),
            spec_groups: candidates(&["specGroups", "specs"]),
            gallery: candidates(&["gallery", "images"]),
            comparison: candidates(&["comparison"]),
            testimonials: candidates(&["testimonials", "reviews"]),

            section_type: candidates(&["type", "kind"]),
            section_title: candidates(&["title", "heading"]),
            section_heading: candidates(&["heading", "headline"]),
            section_body: candidates(&["body", "text", "content", "description", "paragraphs"]),
            section_bullets: candidates(&["bullets", "points", "list", "features"]),
            section_image: candidates(&["image", "media", "imageUrl"]),
            eyebrow: candidates(&["eyebrow", "kicker"]),
            subtitle: candidates(&["subtitle", "subheading"]),
            variant: candidates(&["variant", "layout"]),
            sub_sections: candidates(&["subSections", "subsections", "children"]),
            gallery_items: candidates(&["items", "images", "gallery"]),
            timeline_steps: candidates(&["steps", "items", "milestones"]),
            step_label: candidates(&["label", "year", "date"]),
            comparison_columns: candidates(&["columns", "headers"]),
            comparison_rows: candidates(&["rows"]),
            comparison_data: candidates(&["data", "items"]),
            section_spec_groups: candidates(&["specGroups", "groups", "specs"]),
            spec_label: candidates(&["label", "name", "key", "title"]),
            spec_rows: candidates(&["rows", "specs", "items"]),
            spec_value: candidates(&["value", "val", "spec"]),
        }
    }
}

impl FieldTable {
    /// Validate that identifying concepts keep at least one candidate.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.slug.is_empty() {
            diag.error_with_hint(
                FieldPath::new("fields.slug"),
                "no candidates left for the slug",
                "every record is addressed by slug; list at least one key, e.g. [\"slug\"]",
            );
        }
        if self.sections.is_empty() {
            diag.warn(
                FieldPath::new("fields.sections"),
                "no section candidates, pages will have no sections",
            );
        }
    }
}
