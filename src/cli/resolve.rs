//! `resolve` command: find one record by slug and emit it.

use std::path::Path;

use anyhow::Result;
use serde_json::Value as JsonValue;

use super::common::{read_collection, write_json};
use crate::address::{self, Addressable, RawCandidate};
use crate::blog::{self, Sanitizer};
use crate::cli::args::{OutputArgs, ResolveKind};
use crate::config::SiteConfig;
use crate::{debug, page};

pub fn run(
    slug: &str,
    input: &Path,
    kind: ResolveKind,
    output: &OutputArgs,
    config: &SiteConfig,
) -> Result<()> {
    let records = read_collection(input)?;
    let value = resolve_value(slug, &records, kind, config)?;
    write_json(&value, output)
}

fn resolve_value(
    slug: &str,
    records: &[JsonValue],
    kind: ResolveKind,
    config: &SiteConfig,
) -> Result<JsonValue> {
    let index = RawCandidate::index(records, config);
    let (found, tier) = address::lookup(slug, &index)?;
    debug!("resolve"; "`{}` matched `{}` by {}", slug, found.slug(), tier.as_str());

    let value = match kind {
        ResolveKind::Raw => found.record.clone(),
        ResolveKind::Page => serde_json::to_value(page::build(found.record, config, false)?)?,
        ResolveKind::Blog => {
            let sanitizer = Sanitizer::new(&config.sanitize)?;
            serde_json::to_value(blog::render(found.record, config, &sanitizer)?)?
        }
    };
    Ok(value)
}
