//! Rendering and JSON serialization for CLI output.

use std::{
    io::{self, IsTerminal},
    process::ExitCode,
};

pub use folio_highlight::{Highlighter, dim, emphasize_hits, error, header, success, warning};
use folio_search::{MatchResult, SearchParams};
use serde::Serialize;

/// Prints a value as pretty JSON, highlighted when stdout is a terminal.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{}", render_json(json, io::stdout().is_terminal()));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Colors JSON for a terminal; piped output stays plain so it can be parsed.
pub fn render_json(json: String, terminal: bool) -> String {
    if terminal {
        Highlighter::new().highlight_json(&json)
    } else {
        json
    }
}

/// Formats one search hit for the terminal.
///
/// The first line names the page and token, the second shows the zone text
/// with hits emphasized, and the last lists the zone box and each word box.
pub fn format_match(result: &MatchResult, params: &SearchParams) -> String {
    let mut out = format!(
        "{} {}\n",
        header(&format!("page {}", result.page())),
        dim(&format!("\"{}\"", result.token))
    );
    out.push_str("  ");
    out.push_str(&emphasize_hits(
        &result.text,
        &params.highlight_open,
        &params.highlight_close,
    ));
    out.push('\n');
    for par in &result.par {
        let words = par
            .boxes
            .iter()
            .map(|w| format!("{}..{}x{}..{}", w.l, w.r, w.t, w.b))
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&dim(&format!(
            "  zone t={} l={} r={} b={}  words {words}",
            par.t, par.l, par.r, par.b
        )));
        out.push('\n');
    }
    out
}

/// Formats the closing summary line for a set of hits.
pub fn format_summary(results: &[MatchResult]) -> String {
    let boxes: usize = results.iter().map(|r| r.boxes().len()).sum();
    dim(&format!(
        "─── {}, {} ───",
        plural(results.len(), "result"),
        plural(boxes, "word box")
    ))
}

/// Formats a count with a noun, adding a plural suffix when needed.
pub fn plural(count: usize, noun: &str) -> String {
    match (count, noun.ends_with('x')) {
        (1, _) => format!("{count} {noun}"),
        (_, true) => format!("{count} {noun}es"),
        (_, false) => format!("{count} {noun}s"),
    }
}

#[cfg(test)]
mod tests {
    use folio_search::{Paragraph, WordBox};

    use super::*;

    /// Strips ANSI escape sequences.
    fn plain(input: &str) -> String {
        let mut out = String::new();
        let mut chars = input.chars();
        while let Some(ch) = chars.next() {
            if ch == '\u{1b}' {
                chars.by_ref().find(|&c| c == 'm');
            } else {
                out.push(ch);
            }
        }
        out
    }

    fn sample() -> MatchResult {
        MatchResult {
            token: "quick".into(),
            text: "the {{{quick}}} fox".into(),
            par: vec![Paragraph {
                t: 200,
                r: 1300,
                b: 2720,
                l: 100,
                page: 3,
                boxes: vec![WordBox {
                    r: 608,
                    l: 285,
                    b: 280,
                    t: 200,
                    page: 3,
                }],
            }],
        }
    }

    #[test]
    fn formats_hit_with_boxes() {
        let text = plain(&format_match(&sample(), &SearchParams::default()));
        assert_eq!(
            text,
            "page 3 \"quick\"\n  the quick fox\n  zone t=200 l=100 r=1300 b=2720  words 285..608x200..280\n"
        );
    }

    #[test]
    fn json_is_plain_unless_terminal() {
        let json = serde_json::to_string_pretty(&[sample()]).unwrap();
        assert_eq!(render_json(json.clone(), false), json);
        let colored = render_json(json.clone(), true);
        assert!(colored.contains('\u{1b}'));
        assert_eq!(plain(&colored), json);
    }

    #[test]
    fn summary_counts_boxes() {
        assert_eq!(
            plain(&format_summary(&[sample(), sample()])),
            "─── 2 results, 2 word boxes ───"
        );
        assert_eq!(plain(&format_summary(&[sample()])), "─── 1 result, 1 word box ───");
        assert_eq!(plural(0, "page"), "0 pages");
    }
}
