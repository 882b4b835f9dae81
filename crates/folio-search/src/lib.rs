//! Full-text coordinate search over OCR layouts for folio.
//!
//! Given a parsed layout and a query, this crate finds the zones containing
//! each query token and maps their OCR geometry into the pixel space of the
//! page images a viewer displays, so hits can be drawn over the scans.
//! It handles:
//! - Case-insensitive token matching per zone, with highlighted zone text
//! - Per-page scaling from OCR units to image pixels
//! - Paragraph boxes for matched zones and word boxes for each occurrence
//! - The end-to-end item search: layout loading, leaf probing, matching
//!
//! # Example
//!
//! ```no_run
//! use folio_leaves::{FilesDir, RasterPatterns, scan_item};
//! use folio_search::{SearchParams, search_fulltext};
//!
//! let store = FilesDir::new("./files");
//! let item = scan_item(&store).unwrap();
//! let params = SearchParams::default().with_max_results(20);
//! for hit in search_fulltext("quick fox", &item, &store, &RasterPatterns::default(), &params).unwrap() {
//!     println!("page {}: {}", hit.page(), hit.text);
//! }
//! ```

#![warn(missing_docs)]

mod dimensions;
mod error;
mod geometry;
mod matcher;
mod params;
mod pipeline;
mod result;

pub use dimensions::DimensionTable;
pub use error::{FailureKind, FulltextError, SearchError};
pub use geometry::{PageScale, Span};
pub use matcher::{find_occurrences, highlight, search_layout};
pub use params::{DEFAULT_HIGHLIGHT_CLOSE, DEFAULT_HIGHLIGHT_OPEN, DEFAULT_WORD_PADDING, SearchParams};
pub use pipeline::{load_item_layout, probe_dimensions, search_fulltext};
pub use result::{MatchResult, Paragraph, WordBox};
