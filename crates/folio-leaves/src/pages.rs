//! Page indexes, numbers and labels for an item's leaves.
//!
//! These follow a simple house convention: leaves are displayed in file order,
//! page numbers come from `pageNNN` in the uploaded file name, and no page
//! carries a separate label.

use std::sync::LazyLock;

use regex::Regex;

use crate::ItemFile;

/// `page` followed by digits, anywhere in a file name.
static PAGE_IN_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)page(\d+)").expect("page pattern is a valid regex"));

/// At most this many leading zeros are dropped from a page number.
const MAX_STRIPPED_ZEROS: usize = 6;

/// Returns the display index of a file among the leaves.
pub fn page_index(leaves: &[&ItemFile], file: &ItemFile) -> Option<usize> {
    leaves.iter().position(|leaf| leaf.filename == file.filename)
}

/// Returns the display index of every leaf.
pub fn page_indexes(leaves: &[&ItemFile]) -> Vec<usize> {
    (0..leaves.len()).collect()
}

/// Extracts the printed page number from the original file name.
///
/// `scan_page0042.jpg` gives `"42"`. Up to six leading zeros are dropped, so a
/// name like `page000.jpg` gives an empty string, which tells the viewer to
/// show the page label instead. Returns `None` when the name carries no page
/// number; the viewer then falls back to the leaf position.
pub fn page_number(file: &ItemFile) -> Option<String> {
    let digits = PAGE_IN_NAME
        .captures(&file.original_filename)?
        .get(1)?
        .as_str();
    let zeros = digits
        .bytes()
        .take(MAX_STRIPPED_ZEROS)
        .take_while(|&b| b == b'0')
        .count();
    Some(digits[zeros..].to_string())
}

/// Page numbers of all leaves, in display order.
pub fn page_numbers(leaves: &[&ItemFile]) -> Vec<Option<String>> {
    leaves.iter().map(|leaf| page_number(leaf)).collect()
}

/// Returns the label of a page such as "Cover" or "Plate II".
///
/// No leaf is labelled under the default convention.
pub fn page_label(_file: &ItemFile) -> String {
    String::new()
}

/// Labels of all leaves, in display order.
pub fn page_labels(leaves: &[&ItemFile]) -> Vec<String> {
    leaves.iter().map(|leaf| page_label(leaf)).collect()
}

/// Returns the leaf shown as the item thumbnail: the first one.
pub fn cover_file<'a>(leaves: &[&'a ItemFile]) -> Option<&'a ItemFile> {
    leaves.first().copied()
}

/// Returns the index of the leaf the viewer opens on.
pub fn title_leaf(_leaves: &[&ItemFile]) -> usize {
    0
}
