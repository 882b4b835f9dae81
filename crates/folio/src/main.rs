//! Command-line interface for the `folio` book search tool.

mod cli;

use std::process::ExitCode;

use clap::Parser;
use env_logger::{Builder, Env};

use crate::cli::{
    args::{Cli, Commands},
    commands,
    context::CommandContext,
};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = match cli.command {
        Commands::Init(_) | Commands::Derivative(_) => CommandContext::load_cwd_only(),
        _ => CommandContext::load(),
    };
    let ctx = match ctx {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };

    commands::run(cli.command, &ctx, cli.verbose)
}

/// Installs the logger: warnings by default, more with each `-v`, `RUST_LOG` wins.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}
