//! Error types for item file handling.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when listing item files or probing derivatives.
#[derive(Debug, Error)]
pub enum LeafError {
    /// Failed to compile a raster file pattern.
    #[error("invalid raster pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The invalid pattern.
        pattern: String,
        /// Underlying glob error.
        source: globset::Error,
    },

    /// Failed to list an item directory.
    #[error("failed to list item files in {path}: {source}")]
    ReadDir {
        /// Directory being listed.
        path: PathBuf,
        /// Underlying walk error.
        source: walkdir::Error,
    },

    /// Failed to read the dimensions of a derivative image.
    #[error("failed to read image size of {path}: {source}")]
    ProbeImage {
        /// Path to the derivative image.
        path: PathBuf,
        /// Underlying image error.
        source: image::ImageError,
    },
}
