//! Mapping OCR-space zone geometry to pixel boxes on a page image.
//!
//! Each page carries its own scale: the image's pixel size divided by the
//! page's OCR size, separately per axis. Word boxes are estimated by assuming
//! every character of a zone is equally wide.

use folio_layout::{Page, Zone};
use folio_leaves::ImageDimensions;

use crate::{Paragraph, SearchError, WordBox};

/// Per-axis scale from a page's OCR units to its image pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageScale {
    /// Page number.
    page: usize,
    /// Page width in OCR units.
    page_width: f64,
    /// Page height in OCR units.
    page_height: f64,
    /// Horizontal pixels per OCR unit.
    scale_x: f64,
    /// Vertical pixels per OCR unit.
    scale_y: f64,
}

/// Where a match sits inside a zone's text, in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Offset of the first matched character.
    pub offset: usize,
    /// Number of matched characters.
    pub len: usize,
}

impl PageScale {
    /// Computes the scale of a page shown at the given image size.
    pub fn new(page: &Page, image: ImageDimensions) -> Result<Self, SearchError> {
        let geometry = |reason| SearchError::Geometry {
            page: page.number,
            zone: None,
            reason,
        };
        if page.width <= 0.0 {
            return Err(geometry("page has zero width"));
        }
        if page.height <= 0.0 {
            return Err(geometry("page has zero height"));
        }
        Ok(Self {
            page: page.number,
            page_width: page.width,
            page_height: page.height,
            scale_x: f64::from(image.width) / page.width,
            scale_y: f64::from(image.height) / page.height,
        })
    }

    /// Horizontal pixels per OCR unit.
    pub fn x(&self) -> f64 {
        self.scale_x
    }

    /// Vertical pixels per OCR unit.
    pub fn y(&self) -> f64 {
        self.scale_y
    }

    /// Pixel box of a whole zone, with no word boxes yet.
    ///
    /// A zone that overflows its page is clamped to the page edge.
    pub fn paragraph(&self, zone: &Zone, zone_index: usize) -> Paragraph {
        let from_right = self.page_width - zone.left - zone.width;
        let from_bottom = self.page_height - zone.top - zone.height;
        if from_right < 0.0 || from_bottom < 0.0 {
            log::warn!(
                "page {} zone {zone_index} extends past the page edge; clamping",
                self.page
            );
        }
        Paragraph {
            t: pixels(zone.top * self.scale_y),
            r: pixels(from_right.max(0.0) * self.scale_x),
            b: pixels(from_bottom.max(0.0) * self.scale_y),
            l: pixels(zone.left * self.scale_x),
            page: self.page,
            boxes: Vec::new(),
        }
    }

    /// Pixel box of one match inside a zone.
    ///
    /// `zone_len` is the zone text length in characters. The box spans the
    /// match plus `padding` characters.
    pub fn word(
        &self,
        zone: &Zone,
        zone_index: usize,
        zone_len: usize,
        span: Span,
        padding: usize,
    ) -> Result<WordBox, SearchError> {
        if zone_len == 0 {
            return Err(SearchError::Geometry {
                page: self.page,
                zone: Some(zone_index),
                reason: "zone has no text",
            });
        }
        let char_width = zone.width / zone_len as f64;
        let left = zone.left + span.offset as f64 * char_width;
        let right = left + (span.len + padding) as f64 * char_width;
        let top = pixels(zone.top * self.scale_y);
        Ok(WordBox {
            r: pixels(right * self.scale_x),
            l: pixels(left * self.scale_x),
            b: pixels(top as f64 + zone.height * self.scale_y),
            t: top,
            page: self.page,
        })
    }
}

/// Rounds a pixel coordinate half away from zero.
fn pixels(value: f64) -> i64 {
    value.round() as i64
}
