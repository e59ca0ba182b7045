//! Tiered slug lookup.
//!
//! A requested slug is normalized (`/About-Us/` -> `about-us`) and matched
//! in three tiers. The first tier with any match decides, and within a
//! tier the earliest candidate wins:
//!
//! 1. exact slug
//! 2. exact alias
//! 3. substring of the display title, then of the name

use thiserror::Error;

use super::Addressable;

/// Which tier produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    Slug,
    Alias,
    Title,
}

impl MatchTier {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Slug => "slug",
            Self::Alias => "alias",
            Self::Title => "title",
        }
    }
}

/// No candidate matched a requested slug.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("nothing matches `{requested}` (available: {})", list_or_none(.available))]
pub struct LookupError {
    pub requested: String,
    pub available: Vec<String>,
}

fn list_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}

/// Canonical form of a slug: trimmed, no surrounding `/`, lowercase.
pub fn normalize_slug(raw: &str) -> String {
    raw.trim().trim_matches('/').trim().to_lowercase()
}

/// Find the candidate addressed by `requested`, with the tier that matched.
pub fn find<'a, T: Addressable>(requested: &str, candidates: &'a [T]) -> Option<(&'a T, MatchTier)> {
    let wanted = normalize_slug(requested);
    if wanted.is_empty() {
        return None;
    }

    let contains = |text: Option<&str>| text.is_some_and(|text| text.to_lowercase().contains(&wanted));

    candidates
        .iter()
        .find(|c| normalize_slug(c.slug()) == wanted)
        .map(|c| (c, MatchTier::Slug))
        .or_else(|| {
            candidates
                .iter()
                .find(|c| c.aliases().iter().any(|alias| normalize_slug(alias) == wanted))
                .map(|c| (c, MatchTier::Alias))
        })
        .or_else(|| {
            candidates
                .iter()
                .find(|c| contains(c.display_title()) || contains(c.name()))
                .map(|c| (c, MatchTier::Title))
        })
}

/// Resolve `requested` to a candidate, or `None`.
pub fn resolve<'a, T: Addressable>(requested: &str, candidates: &'a [T]) -> Option<&'a T> {
    find(requested, candidates).map(|(candidate, _)| candidate)
}

/// Like [`find`], but a miss carries the list of available slugs.
pub fn lookup<'a, T: Addressable>(
    requested: &str,
    candidates: &'a [T],
) -> Result<(&'a T, MatchTier), LookupError> {
    find(requested, candidates).ok_or_else(|| LookupError {
        requested: requested.to_string(),
        available: available_slugs(candidates),
    })
}

/// Slugs of all candidates, in input order.
pub fn available_slugs<T: Addressable>(candidates: &[T]) -> Vec<String> {
    candidates.iter().map(|c| c.slug().to_string()).collect()
}
