//! Command implementations and dispatch.

pub mod check;
pub mod config;
pub mod derivative;
pub mod init;
pub mod pages;
pub mod search;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: Commands, ctx: &CommandContext, verbose: u8) -> ExitCode {
    match command {
        Commands::Search(cmd) => search::run(ctx, &cmd, verbose),
        Commands::Pages(cmd) => pages::run(ctx, &cmd),
        Commands::Check(cmd) => check::run(ctx, &cmd),
        Commands::Derivative(cmd) => derivative::run(&cmd),
        Commands::Init(cmd) => init::run(ctx, &cmd),
        Commands::Config => config::run(ctx),
    }
}
