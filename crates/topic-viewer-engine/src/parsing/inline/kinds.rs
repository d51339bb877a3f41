use super::types::Span;

/// The delimiter pairs recognised by the inline resolver.
///
/// Each variant owns the capture group name used in the resolver pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    DoubleAsterisk,
    Asterisk,
    Backtick,
}

impl Delimiter {
    /// Precedence order, matching the alternation order of the pattern.
    pub const ALL: [Delimiter; 3] = [
        Delimiter::DoubleAsterisk,
        Delimiter::Asterisk,
        Delimiter::Backtick,
    ];

    pub fn group(self) -> &'static str {
        match self {
            Delimiter::DoubleAsterisk => "bold",
            Delimiter::Asterisk => "italic",
            Delimiter::Backtick => "code",
        }
    }

    pub fn span(self, inner: &str) -> Span {
        let inner = inner.to_string();
        match self {
            Delimiter::DoubleAsterisk => Span::Bold(inner),
            Delimiter::Asterisk => Span::Italic(inner),
            Delimiter::Backtick => Span::Code(inner),
        }
    }
}
