use serde::{Deserialize, Serialize};

/// A typed fragment of inline-formatted text.
///
/// Spans own their visible text with delimiters removed, so rendering code
/// never has to look back at the source line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Span {
    /// Text outside any delimiter pair.
    Plain(String),
    /// `**bold**`
    Bold(String),
    /// `*italic*`
    Italic(String),
    /// `` `code` `` - an inline literal.
    Code(String),
}

impl Span {
    /// The visible text of this span.
    pub fn text(&self) -> &str {
        match self {
            Span::Plain(s) | Span::Bold(s) | Span::Italic(s) | Span::Code(s) => s,
        }
    }

    /// Joins the visible text of a span sequence.
    pub fn concat(spans: &[Span]) -> String {
        spans.iter().map(Span::text).collect()
    }
}
