//! Derivative size tiers and pixel dimensions.

use std::fmt;

use serde::Serialize;

/// A named size tier of a rendered page image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DerivativeSize {
    /// The uploaded file itself.
    Original,
    /// The large display rendering.
    Fullsize,
    /// The small preview rendering.
    Thumbnail,
}

impl DerivativeSize {
    /// Picks the derivative to serve for a viewer zoom scale.
    ///
    /// Small scales mean the viewer is zoomed in and needs the original; large
    /// scales mean many pages on screen, where thumbnails suffice. Scales that
    /// are not positive numbers get the fullsize tier.
    pub fn for_scale(scale: f64) -> Self {
        if scale.is_nan() || scale <= 0.0 {
            return Self::Fullsize;
        }
        if scale < 1.1 {
            Self::Original
        } else if scale < 6.0 {
            Self::Fullsize
        } else if scale < 32.0 {
            Self::Thumbnail
        } else {
            Self::Fullsize
        }
    }

    /// The tier name as used in storage paths.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Original => "original",
            Self::Fullsize => "fullsize",
            Self::Thumbnail => "thumbnail",
        }
    }
}

impl fmt::Display for DerivativeSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pixel size of a rendered page image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImageDimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl ImageDimensions {
    /// Creates a dimension pair.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}
