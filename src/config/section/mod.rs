//! Configuration section definitions.
//!
//! Each module corresponds to a section in `vitrine.toml`:
//!
//! | Module      | TOML Section   | Purpose                                  |
//! |-------------|----------------|------------------------------------------|
//! | `fields`    | `[fields]`     | Candidate key tables per concept         |
//! | `normalize` | `[normalize]`  | Section placeholder, hero image fallback |
//! | `sanitize`  | `[sanitize]`   | Rich-text rewrites, blog title rules     |
//! | `slug`      | `[slug]`       | Alias/title/name keys for slug lookup    |

mod fields;
mod normalize;
mod sanitize;
mod slug;

pub use fields::FieldTable;
pub use normalize::NormalizeConfig;
pub use sanitize::{PrefixRule, SanitizeConfig};
pub use slug::SlugConfig;
