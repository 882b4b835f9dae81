//! Pixel sizes of the displayed page images, keyed by page number.

use std::collections::BTreeMap;

use folio_layout::Layout;
use folio_leaves::ImageDimensions;

use crate::SearchError;

/// Maps 1-based page numbers to the pixel size of that page's image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DimensionTable {
    /// Entries by page number.
    entries: BTreeMap<usize, ImageDimensions>,
}

impl DimensionTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from leaf dimensions in display order; the first entry is page 1.
    pub fn from_ordered(dims: impl IntoIterator<Item = ImageDimensions>) -> Self {
        Self {
            entries: dims
                .into_iter()
                .enumerate()
                .map(|(index, dims)| (index + 1, dims))
                .collect(),
        }
    }

    /// Sets the dimensions of one page.
    pub fn insert(&mut self, page: usize, dims: ImageDimensions) {
        self.entries.insert(page, dims);
    }

    /// Looks up a page's dimensions.
    pub fn get(&self, page: usize) -> Result<ImageDimensions, SearchError> {
        self.entries
            .get(&page)
            .copied()
            .ok_or(SearchError::PageOutOfRange {
                page,
                available: self.entries.len(),
            })
    }

    /// Number of pages with known dimensions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no page has dimensions.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Checks that every page of the layout has an entry.
    pub fn ensure_covers(&self, layout: &Layout) -> Result<(), SearchError> {
        layout
            .pages
            .iter()
            .try_for_each(|page| self.get(page.number).map(drop))
    }
}
