//! Renderability filter.
//!
//! The one place that decides whether a section has anything to show.
//! Templates render whatever survives without further presence checks.

use super::model::{CanonicalPage, CanonicalSection};

/// Whether a section has renderable content.
pub fn is_renderable(section: &CanonicalSection) -> bool {
    match section {
        CanonicalSection::Specs(specs) => specs.groups.iter().any(|group| !group.rows.is_empty()),
        CanonicalSection::Comparison(table) => {
            !table.rows.is_empty() || !table.columns.is_empty() || !table.data.is_empty()
        }
        other => {
            other.body().is_some_and(|body| !body.trim().is_empty())
                || other.bullets().iter().any(|bullet| !bullet.trim().is_empty())
                || other.title().is_some_and(|title| !title.trim().is_empty())
        }
    }
}

/// Drop non-renderable sections, preserving order.
pub fn filter(sections: Vec<CanonicalSection>) -> Vec<CanonicalSection> {
    sections.into_iter().filter(is_renderable).collect()
}

/// Filter a page's sections in place.
pub fn filter_page(mut page: CanonicalPage) -> CanonicalPage {
    page.sections = filter(page.sections);
    page
}
