//! Blog posts: rich-text sanitizing and the rendered view.
//!
//! | Module     | Purpose                                      |
//! |------------|----------------------------------------------|
//! | `sanitize` | HTML cleanup pipeline (`Sanitizer`)          |
//! | `title`    | Display title precedence                     |

mod sanitize;
mod title;

pub use sanitize::{Sanitized, Sanitizer, basename};
pub use title::display_title;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::config::SiteConfig;
use crate::field::{resolve_image, resolve_text};
use crate::page::{ImageRef, NormalizeError, json_kind};

/// A blog post ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogView {
    pub slug: String,
    pub title: Option<String>,
    pub html: String,
    /// Cover image shown above the body; its duplicate at the top of the
    /// body has been removed.
    pub leading_image: Option<ImageRef>,
}

/// Build the view of one raw blog record.
pub fn render(
    record: &JsonValue,
    config: &SiteConfig,
    sanitizer: &Sanitizer,
) -> Result<BlogView, NormalizeError> {
    if !record.is_object() {
        return Err(NormalizeError::NotAnObject(json_kind(record)));
    }
    let slug = resolve_text(record, &config.fields.slug).ok_or(NormalizeError::MissingSlug)?;

    let content = resolve_text(record, &config.sanitize.content).unwrap_or_default();
    let leading_image = resolve_image(record, &config.sanitize.image_hint);
    let hint = leading_image.as_ref().map(|image| basename(&image.src));

    let Sanitized { html, title } = sanitizer.sanitize_with_title(&content, hint);

    Ok(BlogView {
        slug,
        title: display_title(record, &config.sanitize, title),
        html,
        leading_image,
    })
}
