//! folio: full-text coordinate search for digitized books.
//!
//! A digitized book is a directory of page scans plus one OCR layout file
//! describing where each recognized line sits on its page. folio searches the
//! layout for a phrase and reports pixel boxes over the scans, so a viewer can
//! highlight hits on the page images at whatever size it shows them.

#![warn(missing_docs)]
