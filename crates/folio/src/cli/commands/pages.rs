//! Implementation of `folio pages`.

use std::process::ExitCode;

use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};
use folio_leaves::{
    DerivativeSize, DerivativeStore, ImageDimensions, cover_file, page_indexes, page_labels,
    page_numbers, title_leaf,
};
use serde::Serialize;

use crate::cli::{
    args::PagesCommand,
    context::CommandContext,
    output::{dim, header, plural, print_json},
};

/// One leaf as listed by `folio pages`.
#[derive(Serialize)]
struct PageRow {
    /// 0-based display position.
    index: usize,
    /// Storage name.
    filename: String,
    /// Page number parsed from the original file name.
    page_number: Option<String>,
    /// Page label.
    label: String,
    /// Whether this leaf is the cover.
    cover: bool,
    /// Whether this leaf is the title page.
    title: bool,
    /// Fullsize derivative size, when it could be read.
    fullsize: Option<ImageDimensions>,
}

/// Lists the item's leaves with their page metadata.
pub fn run(ctx: &CommandContext, cmd: &PagesCommand) -> ExitCode {
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
    let cover = cover_file(&leaves).map(|f| f.filename.as_str());
    let title = title_leaf(&leaves);
    let rows: Vec<PageRow> = page_indexes(&leaves)
        .into_iter()
        .zip(page_numbers(&leaves))
        .zip(page_labels(&leaves))
        .map(|((index, page_number), label)| {
            let leaf = leaves[index];
            let fullsize = store
                .dimensions(leaf, DerivativeSize::Fullsize)
                .inspect_err(|e| log::warn!("{e}"))
                .ok();
            PageRow {
                index,
                filename: leaf.filename.clone(),
                page_number,
                label,
                cover: cover == Some(leaf.filename.as_str()),
                title: index == title,
                fullsize,
            }
        })
        .collect();

    if cmd.output.json {
        return print_json(&rows);
    }

    println!(
        "{} {}",
        header(&store.root().display().to_string()),
        dim(&format!("({})", plural(rows.len(), "page")))
    );
    if rows.is_empty() {
        println!("{}", dim("No page images found."));
        return ExitCode::SUCCESS;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["#", "File", "Page", "Label", "Fullsize", ""]);
    for row in &rows {
        let mut marks = Vec::new();
        if row.cover {
            marks.push("cover");
        }
        if row.title {
            marks.push("title");
        }
        table.add_row(vec![
            Cell::new(row.index),
            Cell::new(&row.filename),
            Cell::new(row.page_number.as_deref().unwrap_or("-")),
            Cell::new(&row.label),
            Cell::new(
                row.fullsize
                    .map_or_else(|| "?".to_string(), |d| format!("{}x{}", d.width, d.height)),
            ),
            Cell::new(marks.join(", ")),
        ]);
    }
    println!("{table}");
    ExitCode::SUCCESS
}
