//! Item files, page metadata and image derivatives for folio.
//!
//! A digitized item is an ordered list of attached files. The raster files with
//! a derivative are the item's leaves (its pages, in display order); the first
//! `xml` file is its OCR layout. This crate provides the small lookups a viewer
//! needs around those files:
//!
//! - which files are leaves, and which file is the layout
//! - page numbers parsed from file names, page labels, cover and title leaf
//! - which derivative size to serve for a zoom scale
//! - reading derivative pixel sizes from a files directory

#![warn(missing_docs)]

mod derivative;
mod error;
mod item;
mod pages;
mod store;

pub use derivative::{DerivativeSize, ImageDimensions};
pub use error::LeafError;
pub use item::{DEFAULT_RASTER_PATTERNS, Item, ItemFile, LAYOUT_EXTENSION, RasterPatterns};
pub use pages::{
    cover_file, page_index, page_indexes, page_label, page_labels, page_number, page_numbers,
    title_leaf,
};
pub use store::{DerivativeStore, FilesDir, scan_item};
