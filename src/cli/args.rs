//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Normalize, sanitize and look up CMS content exports
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: vitrine.toml)
    #[arg(short = 'C', long, global = true, default_value = "vitrine.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Normalize a collection of raw records into canonical pages
    #[command(visible_alias = "n")]
    Normalize {
        /// JSON file: an array of records, `{"records": [...]}`, or one record
        #[arg(value_hint = clap::ValueHint::FilePath)]
        input: PathBuf,

        /// Keep sections with nothing to render
        #[arg(long)]
        keep_empty: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Sanitize rich-text HTML or blog records
    #[command(visible_alias = "s")]
    Sanitize {
        /// `.html` file, or a JSON file of blog records
        #[arg(value_hint = clap::ValueHint::FilePath)]
        input: PathBuf,

        /// Cover image (URL or file name) to drop from the top of an HTML body
        #[arg(long)]
        hint: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Look up one record by slug, alias or title
    #[command(visible_alias = "r")]
    Resolve {
        /// Requested slug, e.g. `/About-Us/`
        slug: String,

        /// JSON file of records to search
        #[arg(value_hint = clap::ValueHint::FilePath)]
        input: PathBuf,

        /// What to emit for the match
        #[arg(short, long, value_enum, default_value_t = ResolveKind::Page)]
        kind: ResolveKind,

        #[command(flatten)]
        output: OutputArgs,
    },
}

/// Output form of a resolved record.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveKind {
    /// Normalized, filtered canonical page
    Page,
    /// Sanitized blog view
    Blog,
    /// The raw record as stored
    Raw,
}

/// Shared output arguments
#[derive(clap::Args, Debug, Clone)]
pub struct OutputArgs {
    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalize() {
        let cli = Cli::parse_from(["vitrine", "-v", "normalize", "products.json", "--keep-empty", "-p"]);
        assert!(cli.verbose);
        assert_eq!(cli.config, PathBuf::from("vitrine.toml"));
        match cli.command {
            Commands::Normalize {
                input,
                keep_empty,
                output,
            } => {
                assert_eq!(input, PathBuf::from("products.json"));
                assert!(keep_empty);
                assert!(output.pretty);
                assert_eq!(output.output, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_resolve() {
        let cli = Cli::parse_from([
            "vitrine", "resolve", "/About-Us/", "pages.json", "--kind", "raw", "-o", "out.json",
            "-C", "site.toml",
        ]);
        assert_eq!(cli.config, PathBuf::from("site.toml"));
        match cli.command {
            Commands::Resolve {
                slug, kind, output, ..
            } => {
                assert_eq!(slug, "/About-Us/");
                assert_eq!(kind, ResolveKind::Raw);
                assert_eq!(output.output, Some(PathBuf::from("out.json")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
