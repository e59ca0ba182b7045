//! Canonical page model.
//!
//! Everything presentation code renders comes in one of these shapes.
//! Fields are either a concrete value or `None`/empty; there is no
//! half-filled structure left for templates to second-guess.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// An image reference. `src` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub src: String,
    #[serde(default)]
    pub alt: String,
}

impl ImageRef {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: String::new(),
        }
    }
}

/// A call-to-action button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cta {
    pub label: String,
    pub href: String,
}

/// Normalized product/application page.
///
/// # Fields
///
/// | Field          | Source concept                             |
/// |----------------|--------------------------------------------|
/// | `slug`         | `slug`, `handle`                           |
/// | `title`        | `heroTitle`, `title`, `name`               |
/// | `tagline`      | `heroTagline`, `tagline`, ...              |
/// | `hero_image`   | `heroImage`, `overviewImage`, ..., fallback|
/// | `ctas`         | `ctas`, `buttons`, legacy `ctaLabel` pair  |
/// | `sections`     | `sections`, `blocks`, `content`            |
///
/// The remaining collections are forwarded untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalPage {
    pub slug: String,
    pub title: String,
    pub tagline: Option<String>,
    pub hero_image: Option<ImageRef>,
    pub ctas: Vec<Cta>,
    pub sections: Vec<CanonicalSection>,
    pub use_cases: Option<JsonValue>,
    pub spec_groups: Option<JsonValue>,
    pub gallery: Option<JsonValue>,
    pub comparison: Option<JsonValue>,
    pub testimonials: Option<JsonValue>,
}

// ============================================================================
// Sections
// ============================================================================

/// One rendering block within a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CanonicalSection {
    Feature(FeatureSection),
    Subsections(SubsectionsSection),
    Gallery(GallerySection),
    Timeline(TimelineSection),
    Comparison(ComparisonSection),
    Specs(SpecsSection),
}

impl CanonicalSection {
    pub fn title(&self) -> Option<&str> {
        match self {
            Self::Feature(s) => Some(&s.title),
            Self::Subsections(s) => Some(&s.title),
            Self::Gallery(s) => s.title.as_deref(),
            Self::Timeline(s) => s.title.as_deref(),
            Self::Comparison(s) => s.title.as_deref(),
            Self::Specs(s) => s.title.as_deref(),
        }
    }

    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Feature(s) => s.body.as_deref(),
            _ => None,
        }
    }

    pub fn bullets(&self) -> &[String] {
        match self {
            Self::Feature(s) => &s.bullets,
            Self::Subsections(s) => &s.bullets,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureSection {
    pub eyebrow: Option<String>,
    pub title: String,
    pub subtitle: Option<String>,
    pub body: Option<String>,
    #[serde(default)]
    pub bullets: Vec<String>,
    pub image: Option<ImageRef>,
    pub variant: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubsectionsSection {
    pub title: String,
    #[serde(default)]
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GallerySection {
    pub title: Option<String>,
    #[serde(default)]
    pub items: Vec<ImageRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineSection {
    pub title: Option<String>,
    #[serde(default)]
    pub steps: Vec<TimelineStep>,
}

/// A timeline entry; at least one field is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineStep {
    /// Date or phase marker (`2019`, `Q3`).
    pub label: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
}

/// Comparison table. Rows and data entries keep their authored shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSection {
    pub title: Option<String>,
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub rows: Vec<JsonValue>,
    #[serde(default)]
    pub data: Vec<JsonValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecsSection {
    pub title: Option<String>,
    #[serde(default)]
    pub groups: Vec<SpecGroup>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecGroup {
    pub label: Option<String>,
    #[serde(default)]
    pub rows: Vec<SpecRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecRow {
    pub label: String,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_section_serializes_with_type_tag() {
        let section = CanonicalSection::Subsections(SubsectionsSection {
            title: "More".into(),
            bullets: vec!["a".into()],
        });
        let value = serde_json::to_value(&section).unwrap();
        assert_eq!(
            value,
            json!({ "type": "subsections", "title": "More", "bullets": ["a"] })
        );
    }

    #[test]
    fn test_page_uses_camel_case_and_explicit_nulls() {
        let page = CanonicalPage {
            slug: "x".into(),
            title: String::new(),
            tagline: None,
            hero_image: Some(ImageRef::new("/a.png")),
            ctas: Vec::new(),
            sections: Vec::new(),
            use_cases: None,
            spec_groups: None,
            gallery: None,
            comparison: None,
            testimonials: None,
        };
        let value = serde_json::to_value(&page).unwrap();
        assert_eq!(value["heroImage"], json!({ "src": "/a.png", "alt": "" }));
        assert!(value["tagline"].is_null());
        assert!(value.get("useCases").is_some());
    }

    #[test]
    fn test_section_accessors() {
        let feature = CanonicalSection::Feature(FeatureSection {
            title: "T".into(),
            body: Some("B".into()),
            bullets: vec!["x".into()],
            ..Default::default()
        });
        assert_eq!(feature.title(), Some("T"));
        assert_eq!(feature.body(), Some("B"));
        assert_eq!(feature.bullets().len(), 1);

        let gallery = CanonicalSection::Gallery(GallerySection::default());
        assert_eq!(gallery.title(), None);
        assert_eq!(gallery.body(), None);
        assert!(gallery.bullets().is_empty());
    }
}
