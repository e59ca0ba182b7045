//! `sanitize` command: HTML file or blog records -> cleaned output.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rayon::prelude::*;

use super::common::{keep_successes, plural_count, read_collection, write_json, write_text};
use crate::blog::{self, BlogView, Sanitizer};
use crate::cli::args::OutputArgs;
use crate::config::SiteConfig;
use crate::{debug, log};

pub fn run(
    input: &Path,
    hint: Option<&str>,
    output: &OutputArgs,
    config: &SiteConfig,
) -> Result<()> {
    let sanitizer =
        Sanitizer::new(&config.sanitize).context("invalid pattern in [sanitize] prefix_rules")?;

    if is_html(input) {
        let html = fs::read_to_string(input)
            .with_context(|| format!("failed to read {}", input.display()))?;
        let sanitized = sanitizer.sanitize_with_title(&html, hint);
        if let Some(title) = &sanitized.title {
            debug!("sanitize"; "display title: {}", title);
        }
        return write_text(&sanitized.html, output);
    }

    if hint.is_some() {
        log!("warning"; "--hint only applies to HTML input; blog records carry their own cover image");
    }
    let records = read_collection(input)?;
    log!("sanitize"; "rendering {}", plural_count(records.len(), "blog record"));
    write_json(&render_all(&records, config, &sanitizer), output)
}

fn is_html(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm"))
}

fn render_all(
    records: &[serde_json::Value],
    config: &SiteConfig,
    sanitizer: &Sanitizer,
) -> Vec<BlogView> {
    let results: Vec<_> = records
        .par_iter()
        .map(|record| blog::render(record, config, sanitizer))
        .collect();
    keep_successes("sanitize", results)
}
