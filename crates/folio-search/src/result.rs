//! Search result types.
//!
//! Results serialize to the shape the book viewer consumes:
//!
//! ```json
//! {"text": "the {{{quick}}} fox",
//!  "par": [{"t": 200, "r": 1300, "b": 2720, "l": 100, "page": 1,
//!           "boxes": [{"r": 608, "l": 285, "b": 280, "t": 200, "page": 1}]}]}
//! ```

use serde::Serialize;

/// One matched token in one zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    /// The token that matched.
    #[serde(skip)]
    pub token: String,
    /// Zone text with every occurrence of the token wrapped in markers.
    pub text: String,
    /// The zone's paragraph box; always a single entry.
    pub par: Vec<Paragraph>,
}

impl MatchResult {
    /// Page number of the match.
    pub fn page(&self) -> usize {
        self.par.first().map_or(0, |p| p.page)
    }

    /// Word boxes of every occurrence.
    pub fn boxes(&self) -> &[WordBox] {
        self.par.first().map_or(&[], |p| p.boxes.as_slice())
    }
}

/// A zone's box in pixels.
///
/// `t` and `l` are offsets from the top and left edges; `r` and `b` are the
/// distances from the right and bottom edges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paragraph {
    /// Top offset.
    pub t: i64,
    /// Distance from the right edge.
    pub r: i64,
    /// Distance from the bottom edge.
    pub b: i64,
    /// Left offset.
    pub l: i64,
    /// Page number.
    pub page: usize,
    /// Word boxes inside this zone.
    pub boxes: Vec<WordBox>,
}

/// An occurrence's box in pixels, as absolute edge coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WordBox {
    /// Right edge.
    pub r: i64,
    /// Left edge.
    pub l: i64,
    /// Bottom edge.
    pub b: i64,
    /// Top edge.
    pub t: i64,
    /// Page number.
    pub page: usize,
}
