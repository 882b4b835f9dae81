//! Error types for the folio-search crate.

use std::time::Duration;

use folio_layout::LayoutError;
use folio_leaves::LeafError;
use thiserror::Error;

/// Errors raised while matching a parsed layout.
#[derive(Debug, Error)]
pub enum SearchError {
    /// A zone or page has geometry that cannot be mapped to pixels.
    #[error(
        "cannot map page {page}{}: {reason}",
        .zone.map(|z| format!(" zone {z}")).unwrap_or_default()
    )]
    Geometry {
        /// Page number.
        page: usize,
        /// Zone position on the page, 0-based, when a single zone is at fault.
        zone: Option<usize>,
        /// What was wrong with the geometry.
        reason: &'static str,
    },

    /// A layout page has no entry in the image dimension table.
    #[error("page {page} has no image dimensions ({available} leaves available)")]
    PageOutOfRange {
        /// Page number that was looked up.
        page: usize,
        /// Number of entries in the dimension table.
        available: usize,
    },

    /// The search ran past its deadline.
    #[error("search exceeded its deadline of {}ms", timeout.as_millis())]
    DeadlineExceeded {
        /// The configured timeout.
        timeout: Duration,
    },
}

/// Errors raised by the full item search pipeline.
#[derive(Debug, Error)]
pub enum FulltextError {
    /// The item has no OCR layout file.
    #[error("item has no OCR layout to search")]
    NoLayoutAvailable,

    /// The layout could not be read or parsed.
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// Matching or coordinate mapping failed.
    #[error(transparent)]
    Search(#[from] SearchError),

    /// Leaf images could not be read.
    #[error(transparent)]
    Leaf(#[from] LeafError),
}

/// Coarse classification of a failed search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Nothing to search in.
    NoLayout,
    /// Layout read, decode or XML parse failure.
    Parse,
    /// Degenerate zone or page geometry.
    Geometry,
    /// Page without image dimensions.
    Index,
    /// Deadline exceeded.
    Deadline,
    /// Leaf image could not be probed.
    Storage,
}

impl FulltextError {
    /// Classifies the error.
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::NoLayoutAvailable => FailureKind::NoLayout,
            Self::Layout(_) => FailureKind::Parse,
            Self::Search(SearchError::Geometry { .. }) => FailureKind::Geometry,
            Self::Search(SearchError::PageOutOfRange { .. }) => FailureKind::Index,
            Self::Search(SearchError::DeadlineExceeded { .. }) => FailureKind::Deadline,
            Self::Leaf(_) => FailureKind::Storage,
        }
    }
}
