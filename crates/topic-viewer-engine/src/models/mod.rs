pub mod accent;
pub mod document;
pub mod library;

pub use accent::{ACCENT_PALETTE, accent_index};
pub use document::{Block, Document, Section, SourceFile, date_from_filename};
pub use library::{DEFAULT_DATE_FORMAT, DateEntry, Library, date_key};
