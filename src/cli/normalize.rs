//! `normalize` command: raw collection -> canonical pages.

use std::path::Path;

use anyhow::Result;
use rayon::prelude::*;
use rustc_hash::FxHashSet;

use super::common::{keep_successes, plural_count, read_collection, write_json};
use crate::address::normalize_slug;
use crate::cli::args::OutputArgs;
use crate::config::SiteConfig;
use crate::page::{self, CanonicalPage};
use crate::{debug, log};

pub fn run(input: &Path, keep_empty: bool, output: &OutputArgs, config: &SiteConfig) -> Result<()> {
    let records = read_collection(input)?;
    log!("normalize"; "normalizing {}", plural_count(records.len(), "record"));

    let pages = normalize_all(&records, config, keep_empty);
    for slug in duplicate_slugs(&pages) {
        log!("warning"; "slug `{}` is used by more than one page", slug);
    }

    debug!("normalize"; "{} normalized", plural_count(pages.len(), "page"));
    write_json(&pages, output)
}

/// Normalize records in parallel, keeping input order and skipping failures.
fn normalize_all(
    records: &[serde_json::Value],
    config: &SiteConfig,
    keep_empty: bool,
) -> Vec<CanonicalPage> {
    let results: Vec<_> = records
        .par_iter()
        .map(|record| page::build(record, config, keep_empty))
        .collect();
    keep_successes("normalize", results)
}

/// Slugs shared by more than one page (compared normalized), in first-seen order.
fn duplicate_slugs(pages: &[CanonicalPage]) -> Vec<&str> {
    let mut seen = FxHashSet::default();
    let mut reported = FxHashSet::default();
    pages
        .iter()
        .filter(|page| {
            let slug = normalize_slug(&page.slug);
            !seen.insert(slug.clone()) && reported.insert(slug)
        })
        .map(|page| page.slug.as_str())
        .collect()
}
