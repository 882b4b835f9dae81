//! Implementation of `folio check`.

use std::process::ExitCode;

use folio_search::{load_item_layout, probe_dimensions};

use crate::cli::{
    args::CheckCommand,
    context::CommandContext,
    output::{error, plural, success, warning},
};

/// Verifies an item can be searched: it has a parseable layout, readable leaf
/// images and an image for every layout page.
pub fn run(ctx: &CommandContext, cmd: &CheckCommand) -> ExitCode {
    for w in ctx.config.validate() {
        println!("{} {w}", warning("warning:"));
    }

    let store = ctx.files_dir(&cmd.item);
    let patterns = match ctx.raster_patterns() {
        Ok(p) => p,
        Err(code) => return code,
    };
    let item = match ctx.scan(&store) {
        Ok(item) => item,
        Err(code) => return code,
    };

    let leaves = item.leaves(&patterns);
    if leaves.is_empty() {
        println!("{} no page images with derivatives", warning("warning:"));
    } else {
        println!("{}", plural(leaves.len(), "page image"));
    }

    if !item.has_data_for_search() {
        println!("{} no OCR layout file in {}", error("error:"), store.root().display());
        return ExitCode::FAILURE;
    }

    let layout = match load_item_layout(&item, &store) {
        Ok(layout) => layout,
        Err(e) => {
            println!("{} {e}", error("error:"));
            return ExitCode::FAILURE;
        }
    };
    println!(
        "layout: {}, {}",
        plural(layout.pages.len(), "page"),
        plural(layout.zone_count(), "zone")
    );

    let dims = match probe_dimensions(&leaves, &store) {
        Ok(dims) => dims,
        Err(e) => {
            println!("{} {e}", error("error:"));
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = dims.ensure_covers(&layout) {
        println!("{} {e}", error("error:"));
        return ExitCode::FAILURE;
    }

    println!("{}", success("item is searchable"));
    ExitCode::SUCCESS
}
