//! Rich-text body sanitizer.
//!
//! CMS bodies arrive with editor residue: a page-level `<h1>` duplicating
//! the page title, the cover image pasted again at the top, relative
//! upload paths, empty wrappers and runs of `<br>`. The cleanup is a fixed
//! sequence of targeted rewrites:
//!
//! | Step | Rewrite                                                   |
//! |------|-----------------------------------------------------------|
//! | 1    | Broken path prefixes in `src`/`href` values               |
//! | 2-3  | First `<h1>` unwrapped minus its title; later `<h1>` demoted |
//! | 4    | Cover image duplicated near the top removed               |
//! | 5-6  | Blank phrasing elements and empty pairs removed (to fixpoint) |
//! | 7    | Leading whitespace, `&nbsp;`, `<br>` and blank paragraphs |
//! | 8    | Runs of `<br>` collapsed                                  |
//! | 9    | Trim                                                      |
//!
//! Each step is a no-op when its pattern is absent, and the whole pipeline
//! is idempotent: `sanitize(sanitize(x)) == sanitize(x)`.

use std::ops::Range;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::config::SanitizeConfig;
use crate::utils::html::{
    is_block_element, is_phrasing_element, keeps_when_empty, parse_attributes,
};

/// Whitespace as it appears in editor markup.
const SPACE_RUN: &str = r"(?:\s|&nbsp;|&#160;)+";

static H1: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<h1\b[^>]*>(.*?)</h1\s*>").unwrap());

static H1_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<(/?)h1\b").unwrap());

static OPEN_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<([a-z][a-z0-9]*)\b").unwrap());

static ANY_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

static NBSP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)&nbsp;|&#160;").unwrap());

static BR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").unwrap());

static TAG_GAP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r">\s+<").unwrap());

static IMG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<img\b([^>]*)>").unwrap());

static BLANK_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<([a-z][a-z0-9]*)\b[^>]*>(?:\s|&nbsp;|&#160;)*</([a-z][a-z0-9]*)\s*>")
        .unwrap()
});

static EMPTY_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<([a-z][a-z0-9]*)\b[^>]*></([a-z][a-z0-9]*)\s*>").unwrap()
});

static LEADING_BLANK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:\s|&nbsp;|&#160;|<br\s*/?>|<p\b[^>]*>(?:\s|&nbsp;|&#160;|<br\s*/?>)*</p\s*>)+",
    )
    .unwrap()
});

static BR_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>(?:\s*<br\s*/?>)+").unwrap());

/// Sanitized body plus the display title found in its first `<h1>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sanitized {
    pub html: String,
    pub title: Option<String>,
}

struct PrefixRewrite {
    pattern: Regex,
    to: String,
}

/// Sanitizer built from the `[sanitize]` configuration.
///
/// Holds compiled prefix rules only; it is immutable and can be shared
/// across threads.
pub struct Sanitizer {
    rewrites: Vec<PrefixRewrite>,
    leading_image_window: usize,
}

impl Sanitizer {
    pub fn new(config: &SanitizeConfig) -> Result<Self, regex::Error> {
        let rewrites: Vec<PrefixRewrite> = config
            .prefix_rules
            .iter()
            .map(|rule| {
                let pattern = format!(
                    r#"(\b(?i:src|href)\s*=\s*["']?){}"#,
                    regex::escape(&rule.from)
                );
                Ok(PrefixRewrite {
                    pattern: Regex::new(&pattern)?,
                    to: rule.to.clone(),
                })
            })
            .collect::<Result<_, regex::Error>>()?;

        Ok(Self {
            rewrites,
            leading_image_window: config.leading_image_window,
        })
    }

    /// Clean `html`. `hint` is the cover image (URL or basename) that
    /// should not be repeated at the top of the body.
    pub fn sanitize(&self, html: &str, hint: Option<&str>) -> String {
        self.sanitize_with_title(html, hint).html
    }

    pub fn sanitize_with_title(&self, html: &str, hint: Option<&str>) -> Sanitized {
        let html = self.rewrite_prefixes(html);

        let heading = find_heading(&html);
        let html = match &heading {
            Some(heading) => strip_heading(&html, heading),
            None => html,
        };
        let html = H1_TAG.replace_all(&html, "<${1}h2").into_owned();

        let hint = hint.map(basename).filter(|hint| !hint.is_empty());
        let html = match hint {
            Some(hint) => remove_leading_image(&html, hint, self.leading_image_window),
            None => html,
        };

        let html = remove_empty_elements(html);
        let html = LEADING_BLANK.replace(&html, "");
        let html = BR_RUN.replace_all(&html, "<br>");

        Sanitized {
            html: html.trim().to_string(),
            title: heading.and_then(|heading| heading.title),
        }
    }

    fn rewrite_prefixes(&self, html: &str) -> String {
        let mut html = html.to_string();
        for rewrite in &self.rewrites {
            html = rewrite
                .pattern
                .replace_all(&html, |caps: &Captures| format!("{}{}", &caps[1], rewrite.to))
                .into_owned();
        }
        html
    }
}

// ============================================================================
// Heading
// ============================================================================

struct Heading {
    /// Byte range of the whole `<h1>...</h1>` element.
    element: Range<usize>,
    /// Byte range of its inner markup.
    inner: Range<usize>,
    /// Length of the title segment: inner markup before the first block child.
    segment_len: usize,
    title: Option<String>,
}

fn find_heading(html: &str) -> Option<Heading> {
    let caps = H1.captures(html)?;
    let element = caps.get(0)?.range();
    let inner = caps.get(1)?;

    let segment_len = block_child_start(inner.as_str());
    let text = visible_text(&inner.as_str()[..segment_len]);

    Some(Heading {
        element,
        inner: inner.range(),
        segment_len,
        title: (!text.is_empty()).then_some(text),
    })
}

fn block_child_start(inner: &str) -> usize {
    OPEN_TAG
        .captures_iter(inner)
        .find(|caps| is_block_element(&caps[1].to_ascii_lowercase()))
        .and_then(|caps| caps.get(0))
        .map_or(inner.len(), |tag| tag.start())
}

/// Replace the heading element with its inner markup minus the title text.
fn strip_heading(html: &str, heading: &Heading) -> String {
    let inner = &html[heading.inner.clone()];
    let residual = match &heading.title {
        Some(title) => remove_title_text(inner, heading.segment_len, title),
        None => inner.to_string(),
    };

    let mut out = String::with_capacity(html.len());
    out.push_str(&html[..heading.element.start]);
    out.push_str(&residual);
    out.push_str(&html[heading.element.end..]);
    out
}

/// Remove the first occurrence of `title` from the title segment.
///
/// When inline markup splits the title, so the text never appears
/// literally, the whole segment goes instead.
fn remove_title_text(inner: &str, segment_len: usize, title: &str) -> String {
    let words: Vec<String> = title.split_whitespace().map(regex::escape).collect();
    let found = Regex::new(&format!("(?i){}", words.join(SPACE_RUN)))
        .ok()
        .and_then(|pattern| pattern.find(&inner[..segment_len]));

    match found {
        Some(text) => format!("{}{}", &inner[..text.start()], &inner[text.end()..]),
        None => inner[segment_len..].to_string(),
    }
}

/// Markup reduced to text: tags dropped, whitespace collapsed.
fn visible_text(markup: &str) -> String {
    let text = ANY_TAG.replace_all(markup, "");
    let text = NBSP.replace_all(&text, " ");
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

// ============================================================================
// Leading image
// ============================================================================

/// Remove images matching `hint` that sit within the first `window`
/// characters of markup.
///
/// Markup that the later steps delete is not counted: whitespace,
/// `&nbsp;`, `<br>`, empty elements, and hint images already removed
/// before this one. A second pass therefore measures every image at the
/// same distance as the first.
fn remove_leading_image(html: &str, hint: &str, window: usize) -> String {
    let mut out = String::with_capacity(html.len());
    let mut copied = 0;

    for caps in IMG.captures_iter(html) {
        let Some(tag) = caps.get(0) else { continue };
        out.push_str(&html[copied..tag.start()]);
        copied = tag.start();
        if window_len(&out) > window {
            break;
        }

        let matches_hint =
            image_src(&caps[1]).is_some_and(|src| basename(&src).eq_ignore_ascii_case(hint));
        if matches_hint {
            copied = tag.end();
        }
    }

    out.push_str(&html[copied..]);
    out
}

/// Length of `markup` as the leading-image window counts it.
fn window_len(markup: &str) -> usize {
    let markup = NBSP.replace_all(markup, " ");
    let markup = BR.replace_all(&markup, "");
    let markup = TAG_GAP.replace_all(&markup, "><");
    remove_empty_elements(markup.into_owned())
        .chars()
        .filter(|c| !c.is_whitespace())
        .count()
}

fn image_src(attrs: &str) -> Option<String> {
    parse_attributes(attrs)
        .into_iter()
        .find(|(name, _)| name.eq_ignore_ascii_case("src"))
        .map(|(_, value)| value)
}

/// File name of a URL or path, without query or fragment.
pub fn basename(src: &str) -> &str {
    let path = src.split(['?', '#']).next().unwrap_or(src).trim();
    let path = path.trim_end_matches('/');
    path.rsplit('/').next().unwrap_or(path)
}

// ============================================================================
// Empty elements
// ============================================================================

fn remove_empty_elements(mut html: String) -> String {
    loop {
        let next = remove_empty_pass(&html);
        if next == html {
            return html;
        }
        html = next;
    }
}

fn remove_empty_pass(html: &str) -> String {
    let html = BLANK_PAIR.replace_all(html, |caps: &Captures| {
        let tag = caps[1].to_ascii_lowercase();
        if tag.eq_ignore_ascii_case(&caps[2]) && is_phrasing_element(&tag) {
            String::new()
        } else {
            caps[0].to_string()
        }
    });

    EMPTY_PAIR
        .replace_all(&html, |caps: &Captures| {
            let tag = caps[1].to_ascii_lowercase();
            if tag.eq_ignore_ascii_case(&caps[2]) && !keeps_when_empty(&tag) {
                String::new()
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PrefixRule;

    fn sanitizer() -> Sanitizer {
        Sanitizer::new(&SanitizeConfig::default()).unwrap()
    }

    fn filler(words: usize) -> String {
        format!("<p>{}</p>", "lorem ipsum ".repeat(words))
    }

    fn extract_title(html: &str) -> Option<String> {
        find_heading(html)?.title
    }

    fn figures(count: usize) -> String {
        r#"<figure class="wp-block-image size-large"><img src="/other.jpg" alt=""></figure>"#
            .repeat(count)
    }

    #[test]
    fn test_title_heading_removed() {
        let out = sanitizer()
            .sanitize_with_title("<h1>My Title</h1><p>My Title intro text</p>", None);
        assert_eq!(out.title.as_deref(), Some("My Title"));
        assert_eq!(out.html, "<p>My Title intro text</p>");
    }

    #[test]
    fn test_leading_cover_image_removed_later_copy_kept() {
        let html = format!(
            "<p>Intro</p><img src=\"uploads/img/cover-9f.jpg\">{}<img src=\"uploads/img/cover-9f.jpg\">",
            filler(100)
        );
        let out = sanitizer().sanitize(&html, Some("cover-9f.jpg"));
        assert!(out.starts_with("<p>Intro</p><p>lorem"));
        assert!(out.ends_with("<img src=\"/uploads/img/cover-9f.jpg\">"));
        assert_eq!(out.matches("<img").count(), 1);
    }

    #[test]
    fn test_wrapper_markup_counts_toward_window() {
        let html = format!(
            "<p>Intro</p>{}<img src=\"uploads/img/cover-9f.jpg\">",
            figures(40)
        );
        let out = sanitizer().sanitize(&html, Some("cover-9f.jpg"));
        assert!(out.ends_with("<img src=\"/uploads/img/cover-9f.jpg\">"));
        assert_eq!(out.matches("<img").count(), 41);
    }

    #[test]
    fn test_blank_markup_does_not_count_toward_window() {
        let blank = "<p>&nbsp;<br></p>\n<div> <span> </span> <br/> </div>".repeat(50);
        let html = format!("<p>Intro</p>{blank}<img src=\"c.jpg\"><p>Body</p>");
        let out = sanitizer().sanitize(&html, Some("c.jpg"));
        assert!(!out.contains("<img"));
        assert!(out.ends_with("<p>Body</p>"));
    }

    #[test]
    fn test_window_boundary() {
        let config = SanitizeConfig {
            leading_image_window: 12,
            ..Default::default()
        };
        let sanitizer = Sanitizer::new(&config).unwrap();
        let at = |prefix: &str| {
            sanitizer.sanitize(&format!("{prefix}<img src=\"c.jpg\">"), Some("c.jpg"))
        };
        // `<p>Intro</p>` is exactly 12 characters.
        assert_eq!(at("<p>Intro</p>"), "<p>Intro</p>");
        assert_eq!(at("<p>Intros</p>"), "<p>Intros</p><img src=\"c.jpg\">");
    }

    #[test]
    fn test_hint_may_be_a_full_url() {
        let html = "<img src=\"/media/Cover.JPG?w=800\"><p>Body</p>";
        let out = sanitizer().sanitize(html, Some("https://cdn.example.com/x/cover.jpg#top"));
        assert_eq!(out, "<p>Body</p>");
    }

    #[test]
    fn test_other_images_untouched() {
        let html = "<img src=\"/a.jpg\"><p>Body</p>";
        assert_eq!(sanitizer().sanitize(html, Some("b.jpg")), html);
        assert_eq!(sanitizer().sanitize(html, None), html);
    }

    #[test]
    fn test_prefix_rewrite() {
        let html = r#"<a href="uploads/doc.pdf">doc</a><img src='uploads/a.png'><a href="/uploads/b.pdf">b</a>"#;
        assert_eq!(
            sanitizer().sanitize(html, None),
            r#"<a href="/uploads/doc.pdf">doc</a><img src='/uploads/a.png'><a href="/uploads/b.pdf">b</a>"#
        );
    }

    #[test]
    fn test_prefix_rewrite_leaves_text_alone() {
        let html = "<p>see uploads/readme.txt</p>";
        assert_eq!(sanitizer().sanitize(html, None), html);
    }

    #[test]
    fn test_custom_prefix_rules() {
        let config = SanitizeConfig {
            prefix_rules: vec![PrefixRule {
                from: "wp-content/".into(),
                to: "https://cdn.example.com/wp-content/".into(),
            }],
            ..Default::default()
        };
        let out = Sanitizer::new(&config)
            .unwrap()
            .sanitize(r#"<img src="wp-content/a.png">"#, None);
        assert_eq!(out, r#"<img src="https://cdn.example.com/wp-content/a.png">"#);
    }

    #[test]
    fn test_title_stops_at_block_child() {
        let out = sanitizer()
            .sanitize_with_title("<h1>Launch notes<div><p>Details</p></div></h1>", None);
        assert_eq!(out.title.as_deref(), Some("Launch notes"));
        assert_eq!(out.html, "<div><p>Details</p></div>");
    }

    #[test]
    fn test_title_collapses_markup_and_nbsp() {
        assert_eq!(
            extract_title("<h1 class=\"x\">  Hello&nbsp;<em>big</em>\n world </h1>").as_deref(),
            Some("Hello big world")
        );
        assert_eq!(extract_title("<h1> </h1><p>x</p>"), None);
        assert_eq!(extract_title("<h2>Not it</h2>"), None);
    }

    #[test]
    fn test_split_title_drops_segment() {
        let out = sanitizer()
            .sanitize_with_title("<h1><span>My</span> Title<p>Rest</p></h1><p>Body</p>", None);
        assert_eq!(out.title.as_deref(), Some("My Title"));
        assert_eq!(out.html, "<p>Rest</p><p>Body</p>");
    }

    #[test]
    fn test_title_match_ignores_case_and_spacing() {
        let out = sanitizer().sanitize("<h1><a href=\"/\">My&nbsp;  TITLE</a></h1><p>x</p>", None);
        // Title text removed, the emptied link removed with it.
        assert_eq!(out, "<p>x</p>");
    }

    #[test]
    fn test_later_h1_demoted() {
        let out = sanitizer().sanitize("<h1>A</h1><p>x</p><H1 id=\"b\">B</H1>", None);
        assert_eq!(out, "<p>x</p><h2 id=\"b\">B</h2>");
    }

    #[test]
    fn test_blank_phrasing_and_empty_pairs_removed() {
        let html = "<p>Text<span> &nbsp; </span><strong></strong></p><div><p><em> </em></p></div><p>End</p>";
        assert_eq!(sanitizer().sanitize(html, None), "<p>Text</p><p>End</p>");
    }

    #[test]
    fn test_meaningful_empty_elements_kept() {
        let html = "<iframe src=\"/v\"></iframe><table><tr><td></td><td>1</td></tr></table>";
        assert_eq!(sanitizer().sanitize(html, None), html);
    }

    #[test]
    fn test_leading_blank_stripped() {
        let html = "&nbsp;<br/>\n<p> </p><p><br></p><p>&#160;<br /></p>  <p>Start</p>";
        assert_eq!(sanitizer().sanitize(html, None), "<p>Start</p>");
    }

    #[test]
    fn test_br_runs_collapsed() {
        let html = "<p>a<br><br/>\n<BR />b<br>c</p>";
        assert_eq!(sanitizer().sanitize(html, None), "<p>a<br>b<br>c</p>");
    }

    #[test]
    fn test_plain_input_unchanged() {
        let html = "<p>Nothing <em>to</em> clean.</p>";
        assert_eq!(sanitizer().sanitize(html, Some("cover.jpg")), html);
        assert_eq!(sanitizer().sanitize("", None), "");
    }

    #[test]
    fn test_idempotent() {
        let long = filler(120);
        let corpus = [
            "<h1>My Title</h1><p>My Title intro text</p>".to_string(),
            "<h1>A</h1><h1>B</h1><h1>C</h1><p>x</p>".to_string(),
            "<h1><span>My</span> Title<p>Rest</p></h1><p><span> </span></p><br><br>".to_string(),
            format!("<p>x</p><img src=\"uploads/c.jpg\">{long}<img src=\"uploads/c.jpg\">"),
            format!("<h1>Title</h1><p>&nbsp;</p><img src=\"c.jpg\">{long}<p><b></b></p>"),
            "&nbsp;<p><br><br></p><div><span></span></div><p>a<br> <br>b</p>  ".to_string(),
            "<p>see uploads/x</p><a href=uploads/y>y</a>".to_string(),
            "<h1></h1><h1>Real</h1>".to_string(),
            format!("<p>Intro</p>{}<img src=\"c.jpg\"><p>x</p>", figures(40)),
            format!("<p>Intro</p>{}<img src=\"c.jpg\">", figures(4)),
            "<p><img src=\"c.jpg\"></p><span> </span><img src=\"c.jpg\"><p>x</p>".to_string(),
            format!("<p>a</p>{}<img src=\"c.jpg\">", "<p>&nbsp;<br></p><b> </b>".repeat(60)),
        ];
        let sanitizer = sanitizer();
        for html in &corpus {
            for hint in [None, Some("c.jpg")] {
                let once = sanitizer.sanitize(html, hint);
                let twice = sanitizer.sanitize(&once, hint);
                assert_eq!(once, twice, "not idempotent for {html:?} (hint {hint:?})");
            }
        }
    }

    #[test]
    fn test_basename() {
        assert_eq!(basename("/uploads/img/cover-9f.jpg"), "cover-9f.jpg");
        assert_eq!(basename("cover.jpg?v=2#x"), "cover.jpg");
        assert_eq!(basename("https://cdn.example.com/a/"), "a");
        assert_eq!(basename(""), "");
    }
}
