//! Query normalization for folio full-text search.
//!
//! Queries are searched against OCR text that has no reliable punctuation, so
//! every query is first reduced to letters, numbers and symbols:
//!
//! - **Normalization**: anything that is not a Unicode letter, number or symbol
//!   becomes a space, whitespace is collapsed, and the result is trimmed
//! - **Tokens**: the normalized query split on spaces
//! - **Phrase token**: multi-word queries also carry the whole normalized query
//!   as a final token, so an exact phrase on one line is matched too
//!
//! # Example
//!
//! ```
//! use folio_query::normalize;
//!
//! let query = normalize("  The quick, brown fox!");
//! assert_eq!(query.normalized, "The quick brown fox");
//! assert_eq!(query.tokens.last().unwrap(), "The quick brown fox");
//! ```

#![warn(missing_docs)]

mod normalize;

pub use normalize::{MIN_QUERY_LENGTH, MIN_TOKEN_LENGTH, NormalizedQuery, clean, normalize};
