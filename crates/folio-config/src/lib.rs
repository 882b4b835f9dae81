//! Configuration system for folio.
//!
//! folio reads TOML files named `.folio.toml`. They are discovered by walking up
//! from the working directory, then `~/.folio.toml` is loaded as the global
//! config with lowest precedence. A file with `root = true` ends discovery.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod templates;
#[cfg(test)]
mod test_support;
mod validate;

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

pub use discovery::{
    CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config,
    require_global_config_path,
};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{RawConfig, RawFilesSettings, RawSearchSettings, parse_config_file, parse_config_str};
use serde::{Deserialize, Serialize};
pub use templates::{global_template, local_template};
pub use validate::ConfigWarning;
use validate::validate_config;

/// Default raster patterns, matching the file names of page images.
const DEFAULT_RASTER_PATTERNS: &[&str] = &["*.jpg", "*.jpeg", "*.png", "*.gif"];

/// Merged configuration for folio.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Search settings.
    pub search: SearchSettings,
    /// Files directory layout.
    pub files: FilesSettings,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging every applicable `.folio.toml`.
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from config files given highest precedence first.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        let parsed = files
            .iter()
            .map(|path| {
                Ok(ParsedConfig {
                    path: path.clone(),
                    config: parse_config_file(path)?,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        merge_configs(&parsed)
    }

    /// Validates the configuration and returns any warnings.
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Serializes the effective settings in `.folio.toml` format.
    pub fn settings_to_toml(&self) -> String {
        let serializable = SerializableSettings {
            search: &self.search,
            files: &self.files,
        };
        toml::to_string_pretty(&serializable).expect("settings serialization should not fail")
    }
}

/// Search settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Result cap; 0 means unlimited.
    pub max_results: usize,
    /// Characters added to the matched length when sizing a word box.
    pub word_padding: usize,
    /// Search deadline in milliseconds; 0 means none.
    pub timeout_ms: u64,
    /// Marker before each highlighted occurrence.
    pub highlight_open: String,
    /// Marker after each highlighted occurrence.
    pub highlight_close: String,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            max_results: 0,
            word_padding: 2,
            timeout_ms: 0,
            highlight_open: String::from("{{{"),
            highlight_close: String::from("}}}"),
        }
    }
}

impl SearchSettings {
    /// The result cap, if any.
    pub fn result_cap(&self) -> Option<usize> {
        (self.max_results > 0).then_some(self.max_results)
    }

    /// The search deadline, if any.
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_ms > 0).then(|| Duration::from_millis(self.timeout_ms))
    }
}

/// Layout of an item's files directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FilesSettings {
    /// Subdirectory holding originals.
    pub original_dir: String,
    /// Subdirectory holding fullsize derivatives.
    pub fullsize_dir: String,
    /// Subdirectory holding thumbnails.
    pub thumbnail_dir: String,
    /// Glob patterns naming page images.
    pub raster_patterns: Vec<String>,
}

impl Default for FilesSettings {
    fn default() -> Self {
        Self {
            original_dir: String::from("original"),
            fullsize_dir: String::from("fullsize"),
            thumbnail_dir: String::from("thumbnails"),
            raster_patterns: DEFAULT_RASTER_PATTERNS
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

/// Borrowed view of the settings for TOML output.
#[derive(Serialize)]
struct SerializableSettings<'a> {
    /// Search settings.
    search: &'a SearchSettings,
    /// Files directory layout.
    files: &'a FilesSettings,
}
