//! Command-line interface module.

mod args;
pub mod common;
pub mod normalize;
pub mod resolve;
pub mod sanitize;

pub use args::{Cli, Commands, OutputArgs, ResolveKind};
