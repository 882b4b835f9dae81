//! Configuration merging.
//!
//! Folds parsed `RawConfig` files into a single `Config`, closest file first.

use std::path::PathBuf;

use crate::{
    Config, ConfigError, FilesSettings, SearchSettings,
    parse::{RawConfig, RawFilesSettings, RawSearchSettings},
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

/// Merges configuration files into a single `Config`.
///
/// Configs are given highest precedence first. Each scalar takes the value from
/// the first file that defines it; the raster pattern list is replaced as a
/// whole, never concatenated.
pub fn merge_configs(configs: &[ParsedConfig]) -> Result<Config, ConfigError> {
    let mut config = Config::default();

    // Lowest precedence first so closer files overwrite.
    for parsed in configs.iter().rev() {
        if let Some(search) = &parsed.config.search {
            apply_raw_search(&mut config.search, search);
        }
        if let Some(files) = &parsed.config.files {
            apply_raw_files(&mut config.files, files);
        }
    }
    config.config_root = configs
        .first()
        .and_then(|c| c.path.parent())
        .map(PathBuf::from);

    Ok(config)
}

/// Applies the values present in a raw `[search]` section.
fn apply_raw_search(result: &mut SearchSettings, raw: &RawSearchSettings) {
    if let Some(v) = raw.max_results {
        result.max_results = v;
    }
    if let Some(v) = raw.word_padding {
        result.word_padding = v;
    }
    if let Some(v) = raw.timeout_ms {
        result.timeout_ms = v;
    }
    if let Some(v) = &raw.highlight_open {
        result.highlight_open.clone_from(v);
    }
    if let Some(v) = &raw.highlight_close {
        result.highlight_close.clone_from(v);
    }
}

/// Applies the values present in a raw `[files]` section.
fn apply_raw_files(result: &mut FilesSettings, raw: &RawFilesSettings) {
    if let Some(v) = &raw.original_dir {
        result.original_dir.clone_from(v);
    }
    if let Some(v) = &raw.fullsize_dir {
        result.fullsize_dir.clone_from(v);
    }
    if let Some(v) = &raw.thumbnail_dir {
        result.thumbnail_dir.clone_from(v);
    }
    if let Some(v) = &raw.raster_patterns {
        result.raster_patterns.clone_from(v);
    }
}
