//! Configuration file parsing.
//!
//! Parses individual `.folio.toml` files into `RawConfig` structures whose
//! fields stay optional until files are merged.

use std::{fs, path::Path};

use serde::Deserialize;
use serde_with::{OneOrMany, serde_as};
#[cfg(test)]
use toml::de::Error as TomlError;

use crate::ConfigError;

/// Raw configuration as parsed directly from a TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// When true, stop discovery here and ignore parent and global configs.
    pub root: Option<bool>,
    /// Search section.
    pub search: Option<RawSearchSettings>,
    /// Files directory section.
    pub files: Option<RawFilesSettings>,
}

/// Raw `[search]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSearchSettings {
    /// Result cap; 0 means unlimited.
    pub max_results: Option<usize>,
    /// Characters added to a word box's width.
    pub word_padding: Option<usize>,
    /// Search deadline in milliseconds; 0 means none.
    pub timeout_ms: Option<u64>,
    /// Marker before each highlighted occurrence.
    pub highlight_open: Option<String>,
    /// Marker after each highlighted occurrence.
    pub highlight_close: Option<String>,
}

/// Raw `[files]` section.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawFilesSettings {
    /// Subdirectory holding originals.
    pub original_dir: Option<String>,
    /// Subdirectory holding fullsize derivatives.
    pub fullsize_dir: Option<String>,
    /// Subdirectory holding thumbnails.
    pub thumbnail_dir: Option<String>,
    /// Glob pattern(s) naming page images; a single string or a list.
    #[serde_as(as = "Option<OneOrMany<_>>")]
    pub raster_patterns: Option<Vec<String>>,
}

/// Parses a configuration file from disk.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string; `path` is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses configuration from a TOML string without path context.
#[cfg(test)]
pub fn parse_config(contents: &str) -> Result<RawConfig, TomlError> {
    toml::from_str(contents)
}

/// Checks if a config file has `root = true` set.
///
/// Unreadable or unparseable files are not roots.
pub fn is_root_config(path: &Path) -> bool {
    let Ok(contents) = fs::read_to_string(path) else {
        return false;
    };
    toml::from_str::<RawConfig>(&contents).is_ok_and(|config| config.root == Some(true))
}
