//! Textual clean-up applied before XML parsing.

use std::sync::LazyLock;

use regex::Regex;

/// The lower-case DOCTYPE some pdf2xml versions emit.
const BROKEN_DOCTYPE: &str = r#"<!doctype pdf2xml system "pdf2xml.dtd">"#;

/// The well-formed replacement for [`BROKEN_DOCTYPE`].
const FIXED_DOCTYPE: &str = r#"<!DOCTYPE pdf2xml SYSTEM "pdf2xml.dtd">"#;

/// Two or more consecutive whitespace characters.
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("whitespace pattern is a valid regex"));

/// Rewrites the known lower-case pdf2xml DOCTYPE to its well-formed spelling.
pub fn repair_doctype(source: &str) -> String {
    if source.contains(BROKEN_DOCTYPE) {
        log::debug!("repairing lower-case pdf2xml DOCTYPE");
        source.replace(BROKEN_DOCTYPE, FIXED_DOCTYPE)
    } else {
        source.to_string()
    }
}

/// Prepares raw layout text for parsing.
///
/// Strips a leading byte order mark, collapses every run of two or more
/// whitespace characters to a single space (so pretty-printing never leaks
/// into zone text), then repairs the DOCTYPE.
pub fn prepare_source(raw: &str) -> String {
    let raw = raw.trim_start_matches('\u{feff}');
    let collapsed = WHITESPACE_RUN.replace_all(raw, " ");
    repair_doctype(&collapsed)
}
