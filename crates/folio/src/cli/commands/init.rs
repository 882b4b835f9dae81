//! Implementation of `folio init`.

use std::{fs, process::ExitCode};

use folio_config::{
    CONFIG_FILENAME, global_config_path, global_template, local_template,
    require_global_config_path,
};
use folio_highlight::Highlighter;

use crate::cli::{args::InitCommand, context::CommandContext, output::header};

/// Writes a commented `.folio.toml` template.
pub fn run(ctx: &CommandContext, cmd: &InitCommand) -> ExitCode {
    let in_home = global_config_path()
        .and_then(|p| p.parent().map(|home| home == ctx.cwd))
        .unwrap_or(false);
    let use_global = cmd.global || in_home;

    let config_path = if use_global {
        match require_global_config_path() {
            Ok(path) => path,
            Err(e) => {
                eprintln!("error: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        ctx.cwd.join(CONFIG_FILENAME)
    };

    if config_path.exists() && !cmd.force {
        eprintln!(
            "error: configuration file already exists: {}",
            config_path.display()
        );
        eprintln!("use --force to overwrite");
        return ExitCode::FAILURE;
    }

    let template = if use_global {
        global_template()
    } else {
        local_template()
    };
    if let Err(e) = fs::write(&config_path, &template) {
        eprintln!("error: failed to write {}: {e}", config_path.display());
        return ExitCode::FAILURE;
    }

    println!("Created {}", config_path.display());
    println!();
    println!("{}", header("Configuration written:"));
    print!("{}", Highlighter::new().highlight_toml(&template));
    ExitCode::SUCCESS
}
