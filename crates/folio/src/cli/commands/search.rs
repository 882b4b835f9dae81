//! Implementation of `folio search`.

use std::process::ExitCode;

use folio_query::normalize;
use folio_search::search_fulltext;

use crate::cli::{
    args::SearchCommand,
    context::CommandContext,
    output::{dim, format_match, format_summary, print_json},
};

/// Searches an item and prints hits with their pixel boxes.
pub fn run(ctx: &CommandContext, cmd: &SearchCommand, verbose: u8) -> ExitCode {
    let raw_query = cmd.query.join(" ");
    let params = ctx.search_params(cmd.max_results, cmd.timeout_ms);
    let store = ctx.files_dir(&cmd.item);
    let patterns = match ctx.raster_patterns() {
        Ok(p) => p,
        Err(code) => return code,
    };
    let item = match ctx.scan(&store) {
        Ok(item) => item,
        Err(code) => return code,
    };

    if verbose > 0 && !cmd.output.json {
        let query = normalize(&raw_query);
        let tokens: Vec<&str> = query.searchable_tokens().collect();
        println!(
            "{}",
            dim(&format!(
                "query \"{}\", tokens [{}]",
                query.normalized,
                tokens.join(", ")
            ))
        );
    }

    let results = match search_fulltext(&raw_query, &item, &store, &patterns, &params) {
        Ok(results) => results,
        Err(e) => {
            eprintln!("error: search failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    if cmd.output.json {
        return print_json(&results);
    }
    if results.is_empty() {
        println!("{}", dim("No results found."));
        return ExitCode::SUCCESS;
    }
    for result in &results {
        print!("{}", format_match(result, &params));
    }
    println!("{}", format_summary(&results));
    ExitCode::SUCCESS
}
