//! Blog display title.

use serde_json::Value as JsonValue;

use crate::config::SanitizeConfig;
use crate::field::resolve_text;

/// Pick the title a blog post is shown under.
///
/// Precedence: explicit override, then the record title unless it is a
/// placeholder such as "My Blog", then the first `<h1>` of the content.
pub fn display_title(
    record: &JsonValue,
    config: &SanitizeConfig,
    extracted: Option<String>,
) -> Option<String> {
    resolve_text(record, &config.title_override)
        .or_else(|| {
            resolve_text(record, &config.title).filter(|title| !config.is_placeholder_title(title))
        })
        .or(extracted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn title(record: JsonValue, extracted: Option<&str>) -> Option<String> {
        display_title(
            &record,
            &SanitizeConfig::default(),
            extracted.map(str::to_string),
        )
    }

    #[test]
    fn test_override_wins() {
        let record = json!({ "h1": "Override", "title": "Record" });
        assert_eq!(title(record, Some("Heading")).as_deref(), Some("Override"));
    }

    #[test]
    fn test_record_title_before_heading() {
        let record = json!({ "title": "Record" });
        assert_eq!(title(record, Some("Heading")).as_deref(), Some("Record"));
    }

    #[test]
    fn test_placeholder_title_skipped() {
        let record = json!({ "title": "My Blog" });
        assert_eq!(title(record, Some("Heading")).as_deref(), Some("Heading"));
        assert_eq!(title(json!({ "title": " my blog " }), None), None);
    }

    #[test]
    fn test_blank_fields_fall_through() {
        let record = json!({ "h1": " ", "title": "" });
        assert_eq!(title(record, Some("Heading")).as_deref(), Some("Heading"));
    }
}
