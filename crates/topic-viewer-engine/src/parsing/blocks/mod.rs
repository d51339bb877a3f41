//! # Block Segmentation
//!
//! Turns the lines of one section body into an ordered sequence of
//! [`Block`](crate::models::Block)s.
//!
//! ## Modules
//!
//! - **`kinds`**: per-block types that own their delimiter knowledge
//!   (`Table`, `Quote`, `ListKind`, `Paragraph`)
//! - **`segmenter`**: `segment_blocks()`, the forward-cursor dispatcher
//!
//! ## Precedence
//!
//! table -> quote -> ordered list -> bullet list -> paragraph -> skip.
//! Precedence decides ambiguous lines: `- x` is always a list item, and a
//! `|` line only opens a table when a separator line follows it.

pub mod kinds;
pub mod segmenter;

pub use segmenter::segment_blocks;
