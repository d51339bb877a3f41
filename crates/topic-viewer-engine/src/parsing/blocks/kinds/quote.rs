/// Blockquote block type.
///
/// Only single-level quotes exist here: the prefix is stripped once and the
/// remainder is treated as text.
pub struct Quote;

impl Quote {
    /// Prefix that opens and continues a quote.
    pub const PREFIX: &'static str = "> ";

    pub fn strip(line: &str) -> Option<&str> {
        line.strip_prefix(Self::PREFIX)
    }
}
