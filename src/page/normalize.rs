//! Raw record -> `CanonicalPage`.

use serde_json::Value as JsonValue;

use super::error::{NormalizeError, json_kind};
use super::model::{CanonicalPage, CanonicalSection, Cta, ImageRef};
use super::section::SectionClassifier;
use crate::config::{FieldTable, SiteConfig};
use crate::field::{KeyPath, resolve, resolve_image, resolve_list, resolve_text};

/// Normalize one raw record.
///
/// Fails only when the record is not an object or has no usable slug.
/// Every other missing or oddly shaped field degrades to absent.
pub fn normalize(record: &JsonValue, config: &SiteConfig) -> Result<CanonicalPage, NormalizeError> {
    if !record.is_object() {
        return Err(NormalizeError::NotAnObject(json_kind(record)));
    }

    let fields = &config.fields;
    let slug = resolve_text(record, &fields.slug).ok_or(NormalizeError::MissingSlug)?;

    let hero_image = resolve_image(record, &fields.hero_image)
        .or_else(|| config.normalize.hero_fallback().map(ImageRef::new));

    let sections = resolve_list(record, &fields.sections)
        .map(|entries| SectionClassifier::new(fields, &config.normalize).classify_all(entries))
        .unwrap_or_default();

    let passthrough = |candidates: &[KeyPath]| resolve(record, candidates).cloned();
    let gallery = passthrough(&fields.gallery).or_else(|| derive_gallery(&sections));

    Ok(CanonicalPage {
        slug,
        title: resolve_text(record, &fields.title).unwrap_or_default(),
        tagline: resolve_text(record, &fields.tagline),
        hero_image,
        ctas: ctas(record, fields),
        use_cases: passthrough(&fields.use_cases),
        spec_groups: passthrough(&fields.spec_groups),
        gallery,
        comparison: passthrough(&fields.comparison),
        testimonials: passthrough(&fields.testimonials),
        sections,
    })
}

/// Call-to-action buttons.
///
/// The list field may hold a list or one object. Records predating the
/// list carry a flat label/href pair instead.
fn ctas(record: &JsonValue, fields: &FieldTable) -> Vec<Cta> {
    match resolve(record, &fields.ctas) {
        Some(JsonValue::Array(entries)) => entries
            .iter()
            .filter_map(|entry| cta(entry, &fields.cta_label, &fields.cta_href))
            .collect(),
        Some(entry @ JsonValue::Object(_)) => cta(entry, &fields.cta_label, &fields.cta_href)
            .into_iter()
            .collect(),
        _ => cta(record, &fields.legacy_cta_label, &fields.legacy_cta_href)
            .into_iter()
            .collect(),
    }
}

fn cta(entry: &JsonValue, label: &[KeyPath], href: &[KeyPath]) -> Option<Cta> {
    Some(Cta {
        label: resolve_text(entry, label)?,
        href: resolve_text(entry, href)?,
    })
}

/// Page gallery assembled from the gallery sections, in order.
fn derive_gallery(sections: &[CanonicalSection]) -> Option<JsonValue> {
    let items: Vec<&ImageRef> = sections
        .iter()
        .filter_map(|section| match section {
            CanonicalSection::Gallery(gallery) => Some(&gallery.items),
            _ => None,
        })
        .flatten()
        .collect();

    if items.is_empty() {
        return None;
    }
    serde_json::to_value(items).ok()
}
