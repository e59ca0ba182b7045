//! Field resolution over raw, inconsistently shaped records.
//!
//! | Module    | Purpose                                            |
//! |-----------|----------------------------------------------------|
//! | `path`    | `KeyPath` parsing and lookup (`a.b`, `a[0]`)       |
//! | `resolve` | First-present-candidate resolution and extractors |

mod path;
mod resolve;

pub use path::{KeyPath, candidates};
pub use resolve::{
    as_image, as_text, is_present, resolve, resolve_image, resolve_list, resolve_paragraphs,
    resolve_strings, resolve_text, resolve_with,
};
