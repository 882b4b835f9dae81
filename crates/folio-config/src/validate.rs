//! Configuration validation.
//!
//! Reports settings that load fine but make searches misbehave.

use std::fmt;

use globset::Glob;

use crate::Config;

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// A highlight marker is empty, so hits are not visible in result text.
    EmptyHighlightMarker {
        /// Which marker: `highlight_open` or `highlight_close`.
        setting: &'static str,
    },
    /// No raster patterns are configured, so no file counts as a page.
    NoRasterPatterns,
    /// A raster pattern is not a valid glob.
    InvalidRasterPattern {
        /// The offending pattern.
        pattern: String,
    },
    /// Word boxes are exactly as wide as the matched text.
    ZeroWordPadding,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyHighlightMarker { setting } => {
                write!(f, "search.{setting} is empty; hits will not be marked")
            }
            Self::NoRasterPatterns => {
                write!(f, "files.raster_patterns is empty; no file will be a page")
            }
            Self::InvalidRasterPattern { pattern } => {
                write!(f, "files.raster_patterns entry '{pattern}' is not a valid glob")
            }
            Self::ZeroWordPadding => {
                write!(f, "search.word_padding is 0; word boxes will be tight")
            }
        }
    }
}

/// Validates the configuration and returns any warnings.
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();
    let search = &config.search;

    if search.highlight_open.is_empty() {
        warnings.push(ConfigWarning::EmptyHighlightMarker {
            setting: "highlight_open",
        });
    }
    if search.highlight_close.is_empty() {
        warnings.push(ConfigWarning::EmptyHighlightMarker {
            setting: "highlight_close",
        });
    }
    if search.word_padding == 0 {
        warnings.push(ConfigWarning::ZeroWordPadding);
    }

    if config.files.raster_patterns.is_empty() {
        warnings.push(ConfigWarning::NoRasterPatterns);
    }
    warnings.extend(
        config
            .files
            .raster_patterns
            .iter()
            .filter(|pattern| Glob::new(pattern).is_err())
            .map(|pattern| ConfigWarning::InvalidRasterPattern {
                pattern: pattern.clone(),
            }),
    );

    warnings
}
