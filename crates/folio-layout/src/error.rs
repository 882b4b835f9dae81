//! Error types for layout loading.
//!
//! Every variant is a parse failure from the caller's point of view: the layout
//! could not be turned into pages and zones, and no partial layout is returned.

use std::{io, path::PathBuf, str::Utf8Error};

use thiserror::Error;

/// Errors that can occur when loading an OCR layout document.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// Failed to read the layout file.
    #[error("failed to read layout file {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The layout bytes are not valid UTF-8.
    #[error("layout is not valid UTF-8: {source}")]
    Utf8 {
        /// Underlying decoding error.
        #[from]
        source: Utf8Error,
    },

    /// The layout is not well-formed XML.
    #[error("malformed layout at byte {position}: {message}")]
    Malformed {
        /// Byte offset (after whitespace normalization) where parsing failed.
        position: usize,
        /// Description of the problem.
        message: String,
    },

    /// The document has no root element.
    #[error("layout has no root element")]
    NoRootElement,

    /// A required geometry attribute is absent.
    #[error("<{element}> #{index} is missing the '{attribute}' attribute")]
    MissingAttribute {
        /// Element name (`page` or `text`).
        element: &'static str,
        /// Attribute name.
        attribute: &'static str,
        /// 1-based position of the element among its siblings.
        index: usize,
    },

    /// A geometry attribute is not a non-negative number.
    #[error("<{element}> #{index} has invalid '{attribute}' value {value:?}")]
    InvalidAttribute {
        /// Element name (`page` or `text`).
        element: &'static str,
        /// Attribute name.
        attribute: &'static str,
        /// The raw attribute value.
        value: String,
        /// 1-based position of the element among its siblings.
        index: usize,
    },
}

impl LayoutError {
    /// Creates a `Malformed` error from a quick-xml error at a byte position.
    pub(crate) fn malformed(position: usize, source: &quick_xml::Error) -> Self {
        Self::Malformed {
            position,
            message: source.to_string(),
        }
    }
}
