//! Vitrine - normalize and sanitize headless-CMS content for rendering.

#![allow(dead_code)]

mod address;
mod blog;
mod cli;
mod config;
mod field;
mod logger;
mod page;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = SiteConfig::load(&cli.config)?;

    match &cli.command {
        Commands::Normalize {
            input,
            keep_empty,
            output,
        } => cli::normalize::run(input, *keep_empty, output, &config),
        Commands::Sanitize {
            input,
            hint,
            output,
        } => cli::sanitize::run(input, hint.as_deref(), output, &config),
        Commands::Resolve {
            slug,
            input,
            kind,
            output,
        } => cli::resolve::run(slug, input, *kind, output, &config),
    }
}
