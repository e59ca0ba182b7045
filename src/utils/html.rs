//! HTML classification helpers for the rich-text rewrites.
//!
//! Provides:
//! - `is_block_element()` - Block-level elements (div, p, etc.)
//! - `is_phrasing_element()` - Inline text-level elements (span, em, etc.)
//! - `keeps_when_empty()` - Elements that carry meaning without children
//! - `parse_attributes()` - HTML attribute string parsing

// =============================================================================
// Element Classification
// =============================================================================

/// Check if tag is a raw text element (content should not be HTML-escaped).
///
/// In HTML, script and style content is "raw text".
#[inline]
pub fn is_raw_text_element(tag: &str) -> bool {
    matches!(tag, "script" | "style")
}

/// Check if a tag is a block-level element.
///
/// Block elements create line breaks and take full width by default.
#[inline]
pub fn is_block_element(tag: &str) -> bool {
    matches!(
        tag,
        "address"
            | "article"
            | "aside"
            | "blockquote"
            | "canvas"
            | "dd"
            | "div"
            | "dl"
            | "dt"
            | "fieldset"
            | "figcaption"
            | "figure"
            | "footer"
            | "form"
            | "h1"
            | "h2"
            | "h3"
            | "h4"
            | "h5"
            | "h6"
            | "header"
            | "hgroup"
            | "hr"
            | "li"
            | "main"
            | "nav"
            | "noscript"
            | "ol"
            | "p"
            | "pre"
            | "section"
            | "table"
            | "tfoot"
            | "ul"
            | "video"
    )
}

/// Check if a tag is a phrasing (inline text-level) element.
///
/// Editors leave these behind wrapped around nothing but whitespace,
/// e.g. `<strong> </strong>` after deleting a bold word.
#[inline]
pub fn is_phrasing_element(tag: &str) -> bool {
    matches!(
        tag,
        "a" | "abbr"
            | "b"
            | "bdi"
            | "bdo"
            | "cite"
            | "code"
            | "del"
            | "dfn"
            | "em"
            | "font"
            | "i"
            | "ins"
            | "kbd"
            | "label"
            | "mark"
            | "q"
            | "s"
            | "samp"
            | "small"
            | "span"
            | "strike"
            | "strong"
            | "sub"
            | "sup"
            | "time"
            | "u"
            | "var"
    )
}

/// Check if an element is meaningful even with no children.
///
/// Embeds load their content from attributes and table cells hold the
/// grid together, so an empty open/close pair must survive cleanup.
#[inline]
pub fn keeps_when_empty(tag: &str) -> bool {
    is_raw_text_element(tag)
        || matches!(
            tag,
            "iframe" | "video" | "audio" | "canvas" | "object" | "textarea" | "td" | "th"
        )
}

// =============================================================================
// Attribute Parsing
// =============================================================================

/// Parse HTML-style attributes from a string.
///
/// Input: `src="/a.png" alt='Logo' width=40 hidden`
/// Output: `vec![("src", "/a.png"), ("alt", "Logo"), ("width", "40"), ("hidden", "")]`
pub fn parse_attributes(s: &str) -> Vec<(String, String)> {
    let mut attrs = Vec::new();
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c.is_whitespace() || c == '/' {
            continue;
        }

        // Read attribute name
        let mut name = String::from(c);
        while let Some(&next) = chars.peek() {
            if next == '=' || next.is_whitespace() {
                break;
            }
            name.push(next);
            chars.next();
        }

        while chars.peek().is_some_and(|c| c.is_whitespace()) {
            chars.next();
        }

        if chars.peek() != Some(&'=') {
            // Boolean attribute (no value)
            attrs.push((name, String::new()));
            continue;
        }
        chars.next(); // consume '='

        while chars.peek().is_some_and(|c| c.is_whitespace()) {
            chars.next();
        }

        let mut value = String::new();
        match chars.peek().copied() {
            Some(quote @ ('"' | '\'')) => {
                chars.next();
                for c in chars.by_ref() {
                    if c == quote {
                        break;
                    }
                    value.push(c);
                }
            }
            _ => {
                // Unquoted value (read until whitespace)
                while let Some(&c) = chars.peek() {
                    if c.is_whitespace() {
                        break;
                    }
                    value.push(c);
                    chars.next();
                }
            }
        }

        attrs.push((name, value));
    }

    attrs
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_elements() {
        assert!(is_block_element("div"));
        assert!(is_block_element("p"));
        assert!(is_block_element("h1"));
        assert!(is_block_element("ul"));
        assert!(!is_block_element("span"));
        assert!(!is_block_element("a"));
    }

    #[test]
    fn test_phrasing_elements() {
        assert!(is_phrasing_element("span"));
        assert!(is_phrasing_element("strong"));
        assert!(is_phrasing_element("a"));
        assert!(!is_phrasing_element("p"));
        assert!(!is_phrasing_element("td"));
        assert!(!is_phrasing_element("img"));
    }

    #[test]
    fn test_keeps_when_empty() {
        assert!(keeps_when_empty("iframe"));
        assert!(keeps_when_empty("script"));
        assert!(keeps_when_empty("td"));
        assert!(!keeps_when_empty("p"));
        assert!(!keeps_when_empty("span"));
    }

    #[test]
    fn test_parse_attributes() {
        let attrs = parse_attributes(r#"a="1" b='2' c=3 disabled"#);
        assert_eq!(attrs.len(), 4);
        assert_eq!(attrs[0], ("a".to_string(), "1".to_string()));
        assert_eq!(attrs[1], ("b".to_string(), "2".to_string()));
        assert_eq!(attrs[2], ("c".to_string(), "3".to_string()));
        assert_eq!(attrs[3], ("disabled".to_string(), "".to_string()));
    }

    #[test]
    fn test_parse_attributes_self_closing() {
        let attrs = parse_attributes(r#" src="/uploads/a.jpg" alt="" /"#);
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs[0], ("src".to_string(), "/uploads/a.jpg".to_string()));
        assert_eq!(attrs[1], ("alt".to_string(), "".to_string()));
    }
}
