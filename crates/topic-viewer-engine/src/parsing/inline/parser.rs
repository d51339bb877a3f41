use std::sync::LazyLock;

use regex::Regex;

use super::{kinds::Delimiter, types::Span};

/// One alternation so the leftmost match wins across all three span kinds.
/// At equal start positions bold is preferred over italic, italic over code.
static INLINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*\*(?P<bold>.+?)\*\*|\*(?P<italic>.+?)\*|`(?P<code>.+?)`")
        .expect("inline span pattern is valid")
});

/// Resolves the inline spans of a single line.
///
/// The returned spans cover the whole input in order. Content inside a
/// matched span is not re-scanned, so `**a *b* c**` is one bold span.
/// Unterminated delimiters are left in plain text. Empty input yields
/// no spans at all.
pub fn resolve_spans(line: &str) -> Vec<Span> {
    let mut out = Vec::new();
    let mut last = 0;

    for caps in INLINE.captures_iter(line) {
        let Some(full) = caps.get(0) else {
            continue;
        };
        if full.start() > last {
            out.push(Span::Plain(line[last..full.start()].to_string()));
        }

        let span = Delimiter::ALL
            .iter()
            .find_map(|d| caps.name(d.group()).map(|m| d.span(m.as_str())));
        if let Some(span) = span {
            out.push(span);
        }
        last = full.end();
    }

    if last < line.len() {
        out.push(Span::Plain(line[last..].to_string()));
    }
    out
}
