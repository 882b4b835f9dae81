//! Item files and raster classification.

use std::path::Path;

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use serde::Serialize;

use crate::LeafError;

/// File name patterns treated as raster page images by default.
pub const DEFAULT_RASTER_PATTERNS: &[&str] = &["*.jpg", "*.jpeg", "*.png", "*.gif"];

/// Extension of the OCR layout file.
pub const LAYOUT_EXTENSION: &str = "xml";

/// One file attached to an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemFile {
    /// Storage name of the file.
    pub filename: String,
    /// Name of the file as originally uploaded.
    pub original_filename: String,
    /// Whether a resized raster derivative exists for this file.
    pub has_derivative: bool,
}

impl ItemFile {
    /// Creates a file whose storage and original names are the same.
    pub fn new(filename: impl Into<String>, has_derivative: bool) -> Self {
        let filename = filename.into();
        Self {
            original_filename: filename.clone(),
            filename,
            has_derivative,
        }
    }

    /// Sets the original upload name.
    pub fn with_original_filename(mut self, name: impl Into<String>) -> Self {
        self.original_filename = name.into();
        self
    }

    /// Lower-cased extension of the original file name.
    pub fn extension(&self) -> Option<String> {
        Path::new(&self.original_filename)
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
    }
}

/// Compiled case-insensitive patterns deciding which files are page images.
#[derive(Debug, Clone)]
pub struct RasterPatterns {
    /// Compiled matcher.
    set: GlobSet,
    /// Source patterns, for display.
    patterns: Vec<String>,
}

impl RasterPatterns {
    /// Compiles a list of glob patterns.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self, LeafError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let pattern = pattern.as_ref();
            let glob = GlobBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .map_err(|source| LeafError::InvalidPattern {
                    pattern: pattern.to_string(),
                    source,
                })?;
            builder.add(glob);
        }
        let set = builder.build().map_err(|source| LeafError::InvalidPattern {
            pattern: patterns
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<_>>()
                .join(", "),
            source,
        })?;
        Ok(Self {
            set,
            patterns: patterns.iter().map(|p| p.as_ref().to_string()).collect(),
        })
    }

    /// Returns true if the file name is a raster image.
    pub fn is_raster(&self, filename: &str) -> bool {
        self.set.is_match(filename)
    }

    /// The source patterns.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }
}

impl Default for RasterPatterns {
    fn default() -> Self {
        Self::new(DEFAULT_RASTER_PATTERNS).expect("default raster patterns are valid globs")
    }
}

/// A digitized item: its attached files in display order.
#[derive(Debug, Clone, Default)]
pub struct Item {
    /// Attached files in file-list order.
    pub files: Vec<ItemFile>,
}

impl Item {
    /// Creates an item from its ordered files.
    pub fn new(files: Vec<ItemFile>) -> Self {
        Self { files }
    }

    /// Returns the leaves: raster files with a derivative, in file-list order.
    pub fn leaves(&self, patterns: &RasterPatterns) -> Vec<&ItemFile> {
        self.files
            .iter()
            .filter(|f| f.has_derivative && patterns.is_raster(&f.filename))
            .collect()
    }

    /// Returns the OCR layout file: the first file with an `xml` extension.
    pub fn layout_file(&self) -> Option<&ItemFile> {
        self.files
            .iter()
            .find(|f| f.extension().as_deref() == Some(LAYOUT_EXTENSION))
    }

    /// Returns true if the item carries an OCR layout and can be searched.
    pub fn has_data_for_search(&self) -> bool {
        self.layout_file().is_some()
    }
}
