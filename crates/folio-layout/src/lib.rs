//! OCR layout loading for folio.
//!
//! Layouts are pdf2xml-style documents: one `<page>` per book page carrying the
//! page size in OCR units, and one `<text>` zone per recognized line:
//!
//! ```xml
//! <pdf2xml>
//!   <page number="1" width="1000" height="1500">
//!     <text top="100" left="50" width="300" height="40">the <b>quick</b> fox</text>
//!   </page>
//! </pdf2xml>
//! ```
//!
//! Loading repairs one known malformed DOCTYPE, collapses indentation, and
//! extracts typed [`Page`] and [`Zone`] records.

#![warn(missing_docs)]

mod error;
mod parse;
mod source;

pub use error::LayoutError;
pub use parse::{load_layout, parse_layout};
pub use source::{prepare_source, repair_doctype};

/// A parsed OCR layout document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    /// Pages in document order.
    pub pages: Vec<Page>,
}

impl Layout {
    /// Returns the page with the given number, if any.
    pub fn page(&self, number: usize) -> Option<&Page> {
        self.pages.iter().find(|p| p.number == number)
    }

    /// Total number of text zones across all pages.
    pub fn zone_count(&self) -> usize {
        self.pages.iter().map(|p| p.zones.len()).sum()
    }
}

/// One page of the layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// 1-based page number.
    pub number: usize,
    /// Page width in OCR units.
    pub width: f64,
    /// Page height in OCR units.
    pub height: f64,
    /// Text zones in document order.
    pub zones: Vec<Zone>,
}

/// One recognized text region, usually a line.
#[derive(Debug, Clone, PartialEq)]
pub struct Zone {
    /// Distance from the page top, in OCR units.
    pub top: f64,
    /// Distance from the page left edge, in OCR units.
    pub left: f64,
    /// Zone width in OCR units.
    pub width: f64,
    /// Zone height in OCR units.
    pub height: f64,
    /// Zone text with inner markup stripped.
    pub text: String,
}

impl Zone {
    /// Length of the zone text in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}
