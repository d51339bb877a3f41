//! # Inline Span Resolution
//!
//! Resolves bold, italic and code spans within a single line of text.
//!
//! ## Modules
//!
//! - **`types`**: `Span` enum (Plain, Bold, Italic, Code)
//! - **`kinds`**: `Delimiter`, which owns the capture group for each span kind
//! - **`parser`**: `resolve_spans()` entry point
//!
//! ## Precedence
//!
//! The three delimiter patterns are tried as one alternation, so the leftmost
//! match wins regardless of kind. Matched content is never re-scanned:
//! `` `*x*` `` is a code span, not italic text inside code.

pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::resolve_spans;
pub use types::Span;
