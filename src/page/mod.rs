//! Canonical pages: model, normalization, and the renderability filter.
//!
//! | Module      | Purpose                                         |
//! |-------------|-------------------------------------------------|
//! | `model`     | `CanonicalPage`, `CanonicalSection`, `ImageRef` |
//! | `section`   | Raw section entry classification                |
//! | `normalize` | Raw record -> `CanonicalPage`                   |
//! | `filter`    | Drops sections with nothing to render           |
//! | `error`     | `NormalizeError`                                |

mod error;
mod filter;
mod model;
mod normalize;
mod section;

pub use error::{NormalizeError, json_kind};
pub use filter::filter_page;
pub use model::{
    CanonicalPage, CanonicalSection, ComparisonSection, Cta, FeatureSection, GallerySection,
    ImageRef, SpecGroup, SpecRow, SpecsSection, SubsectionsSection, TimelineSection, TimelineStep,
};
pub use normalize::normalize;

use serde_json::Value as JsonValue;

use crate::config::SiteConfig;

/// Normalize a record and, unless `keep_empty`, filter its sections.
pub fn build(
    record: &JsonValue,
    config: &SiteConfig,
    keep_empty: bool,
) -> Result<CanonicalPage, NormalizeError> {
    let page = normalize(record, config)?;
    Ok(if keep_empty { page } else { filter_page(page) })
}
