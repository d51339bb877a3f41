pub mod list;
pub mod paragraph;
pub mod quote;
pub mod table;

pub use list::ListKind;
pub use paragraph::Paragraph;
pub use quote::Quote;
pub use table::Table;
