//! Implementation of `folio derivative`.

use std::process::ExitCode;

use folio_leaves::DerivativeSize;

use crate::cli::args::DerivativeCommand;

/// Prints the derivative size a viewer should load at the given zoom scale.
pub fn run(cmd: &DerivativeCommand) -> ExitCode {
    println!("{}", DerivativeSize::for_scale(cmd.scale));
    ExitCode::SUCCESS
}
