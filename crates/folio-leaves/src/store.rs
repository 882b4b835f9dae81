//! Files-directory storage of originals and their derivatives.
//!
//! A files directory keeps one subdirectory per tier, each holding files
//! under the same storage name:
//!
//! ```text
//! files/
//!   original/   page001.jpg  book.xml
//!   fullsize/   page001.jpg
//!   thumbnails/ page001.jpg
//! ```

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::{DerivativeSize, ImageDimensions, Item, ItemFile, LeafError};

/// Access to an item's stored files.
pub trait DerivativeStore {
    /// Path of the uploaded file.
    fn original_path(&self, file: &ItemFile) -> PathBuf;

    /// Pixel size of a file's derivative at the given tier.
    fn dimensions(
        &self,
        file: &ItemFile,
        size: DerivativeSize,
    ) -> Result<ImageDimensions, LeafError>;
}

/// A files directory with one subdirectory per derivative tier.
#[derive(Debug, Clone)]
pub struct FilesDir {
    /// Root of the files directory.
    root: PathBuf,
    /// Subdirectory holding originals.
    original_dir: String,
    /// Subdirectory holding fullsize derivatives.
    fullsize_dir: String,
    /// Subdirectory holding thumbnails.
    thumbnail_dir: String,
}

impl FilesDir {
    /// Creates a store rooted at `root` with the default subdirectory names.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            original_dir: "original".into(),
            fullsize_dir: "fullsize".into(),
            thumbnail_dir: "thumbnails".into(),
        }
    }

    /// Overrides the subdirectory names.
    pub fn with_dirs(
        mut self,
        original: impl Into<String>,
        fullsize: impl Into<String>,
        thumbnail: impl Into<String>,
    ) -> Self {
        self.original_dir = original.into();
        self.fullsize_dir = fullsize.into();
        self.thumbnail_dir = thumbnail.into();
        self
    }

    /// Root of the files directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding the files of one tier.
    pub fn tier_dir(&self, size: DerivativeSize) -> PathBuf {
        let dir = match size {
            DerivativeSize::Original => &self.original_dir,
            DerivativeSize::Fullsize => &self.fullsize_dir,
            DerivativeSize::Thumbnail => &self.thumbnail_dir,
        };
        self.root.join(dir)
    }

    /// Path of a file at the given tier.
    pub fn derivative_path(&self, file: &ItemFile, size: DerivativeSize) -> PathBuf {
        self.tier_dir(size).join(&file.filename)
    }
}

impl DerivativeStore for FilesDir {
    fn original_path(&self, file: &ItemFile) -> PathBuf {
        self.derivative_path(file, DerivativeSize::Original)
    }

    fn dimensions(
        &self,
        file: &ItemFile,
        size: DerivativeSize,
    ) -> Result<ImageDimensions, LeafError> {
        let path = self.derivative_path(file, size);
        let (width, height) =
            image::image_dimensions(&path).map_err(|source| LeafError::ProbeImage {
                path: path.clone(),
                source,
            })?;
        log::trace!("{}: {width}x{height}", path.display());
        Ok(ImageDimensions::new(width, height))
    }
}

/// Lists an item's files from the originals directory, sorted by name.
///
/// A file has a derivative when a file of the same name exists in the fullsize
/// directory.
pub fn scan_item(store: &FilesDir) -> Result<Item, LeafError> {
    let original_dir = store.tier_dir(DerivativeSize::Original);
    let mut files = Vec::new();

    for entry in WalkDir::new(&original_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|source| LeafError::ReadDir {
            path: original_dir.clone(),
            source,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            log::warn!("skipping non UTF-8 file name {}", entry.path().display());
            continue;
        };
        let mut file = ItemFile::new(name, false);
        file.has_derivative = store
            .derivative_path(&file, DerivativeSize::Fullsize)
            .is_file();
        files.push(file);
    }

    log::debug!(
        "scanned {} files in {}",
        files.len(),
        original_dir.display()
    );
    Ok(Item::new(files))
}
