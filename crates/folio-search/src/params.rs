//! Parameter types for layout search.

use std::time::Duration;

/// Default marker inserted before each highlighted occurrence.
pub const DEFAULT_HIGHLIGHT_OPEN: &str = "{{{";

/// Default marker inserted after each highlighted occurrence.
pub const DEFAULT_HIGHLIGHT_CLOSE: &str = "}}}";

/// Default number of extra characters added to a word box's width.
pub const DEFAULT_WORD_PADDING: usize = 2;

/// Parameters controlling a layout search.
///
/// The defaults search exhaustively with no deadline, wrap hits in `{{{ }}}`
/// and pad word boxes by two characters.
#[derive(Debug, Clone)]
pub struct SearchParams {
    /// Stop after this many results. None searches every zone.
    pub max_results: Option<usize>,
    /// Give up once the search has run this long. None never gives up.
    pub timeout: Option<Duration>,
    /// Characters added to the matched length when sizing a word box.
    pub word_padding: usize,
    /// Marker written before each occurrence in the result text.
    pub highlight_open: String,
    /// Marker written after each occurrence in the result text.
    pub highlight_close: String,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            max_results: None,
            timeout: None,
            word_padding: DEFAULT_WORD_PADDING,
            highlight_open: DEFAULT_HIGHLIGHT_OPEN.to_string(),
            highlight_close: DEFAULT_HIGHLIGHT_CLOSE.to_string(),
        }
    }
}

impl SearchParams {
    /// Creates params with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Caps the number of results.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = Some(max_results);
        self
    }

    /// Sets the search deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the word box padding.
    pub fn with_word_padding(mut self, padding: usize) -> Self {
        self.word_padding = padding;
        self
    }

    /// Sets the highlight markers.
    pub fn with_markers(mut self, open: impl Into<String>, close: impl Into<String>) -> Self {
        self.highlight_open = open.into();
        self.highlight_close = close.into();
        self
    }

    /// Returns true once `count` results satisfy the cap.
    pub(crate) fn is_full(&self, count: usize) -> bool {
        self.max_results.is_some_and(|max| count >= max)
    }
}
