//! Clap argument definitions for the `folio` CLI.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Full-text coordinate search for digitized books")]
pub struct Cli {
    /// Log more (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Supported `folio` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Search an item's OCR layout and print hit coordinates
    Search(SearchCommand),

    /// List an item's pages in display order
    Pages(PagesCommand),

    /// Check that an item can be searched
    Check(CheckCommand),

    /// Show which derivative size serves a zoom scale
    Derivative(DerivativeCommand),

    /// Initialize folio configuration in the current directory
    Init(InitCommand),

    /// Show the effective configuration
    Config,
}

/// Shared output flags.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `folio search`.
#[derive(Args, Debug, Clone)]
pub struct SearchCommand {
    /// Item files directory (holding original/, fullsize/, thumbnails/)
    pub item: PathBuf,

    /// Words to search for; joined with spaces into one query
    #[arg(required = true)]
    pub query: Vec<String>,

    /// Stop after this many results [default: from config, 0 = unlimited]
    #[arg(short = 'n', long)]
    pub max_results: Option<usize>,

    /// Give up after this many milliseconds [default: from config, 0 = never]
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Output formatting flags.
    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for `folio pages`.
#[derive(Args, Debug, Clone)]
pub struct PagesCommand {
    /// Item files directory
    pub item: PathBuf,

    /// Output formatting flags.
    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for `folio check`.
#[derive(Args, Debug, Clone)]
pub struct CheckCommand {
    /// Item files directory
    pub item: PathBuf,
}

/// Arguments for `folio derivative`.
#[derive(Args, Debug, Clone)]
pub struct DerivativeCommand {
    /// Zoom scale requested by the viewer
    #[arg(allow_negative_numbers = true)]
    pub scale: f64,
}

/// Arguments for `folio init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.folio.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn search_joins_query_words() {
        let cli = Cli::parse_from(["folio", "search", "items/b1", "quick", "fox", "-n", "5"]);
        let Commands::Search(cmd) = cli.command else {
            panic!("expected search");
        };
        assert_eq!(cmd.item, PathBuf::from("items/b1"));
        assert_eq!(cmd.query, vec!["quick", "fox"]);
        assert_eq!(cmd.max_results, Some(5));
        assert!(!cmd.output.json);
    }

    #[test]
    fn verbose_is_global() {
        let cli = Cli::parse_from(["folio", "pages", "b1", "-vv", "--json"]);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Pages(PagesCommand { output: OutputArgs { json: true }, .. })));
    }

    #[test]
    fn derivative_accepts_negative_scale() {
        let cli = Cli::parse_from(["folio", "derivative", "-1"]);
        let Commands::Derivative(cmd) = cli.command else {
            panic!("expected derivative");
        };
        assert!((cmd.scale + 1.0).abs() < f64::EPSILON);
    }
}
