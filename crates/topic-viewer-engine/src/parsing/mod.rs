//! # Parsing
//!
//! Turns the raw text of one file into a [`Document`](crate::models::Document).
//!
//! Three layers, consumed leaf-first:
//!
//! - **`inline`**: bold / italic / code spans within a line
//! - **`blocks`**: section lines -> paragraphs, quotes, lists and tables
//! - **`document`**: title, subtitle and `## ` section boundaries
//!
//! Nothing in here fails. Input that matches no structural pattern degrades
//! to paragraph text, a filename-derived title, or is skipped.

pub mod blocks;
pub mod document;
pub mod inline;

pub use blocks::segment_blocks;
pub use document::{DOC_EXTENSION, parse_document, title_from_filename};
pub use inline::{Span, resolve_spans};
