use std::sync::LazyLock;

use regex::Regex;

static ORDERED_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.\s").expect("ordered marker pattern is valid"));

static BULLET_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*]\s").expect("bullet marker pattern is valid"));

/// The two flat list flavours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// `1. item`
    Ordered,
    /// `- item` or `* item`
    Bullet,
}

impl ListKind {
    fn marker(self) -> &'static Regex {
        match self {
            ListKind::Ordered => &ORDERED_MARKER,
            ListKind::Bullet => &BULLET_MARKER,
        }
    }

    /// Whether the raw (untrimmed) line starts an item of this kind.
    pub fn matches(self, line: &str) -> bool {
        self.marker().is_match(line)
    }

    /// Item text with the marker removed and surrounding whitespace trimmed.
    pub fn item(self, line: &str) -> Option<String> {
        let m = self.marker().find(line)?;
        Some(line[m.end()..].trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ListKind::Ordered, "1. first", Some("first"))]
    #[case(ListKind::Ordered, "12.\tTabbed ", Some("Tabbed"))]
    #[case(ListKind::Ordered, "1.no space", None)]
    #[case(ListKind::Ordered, " 1. indented", None)]
    #[case(ListKind::Bullet, "- dash", Some("dash"))]
    #[case(ListKind::Bullet, "* star", Some("star"))]
    #[case(ListKind::Bullet, "-nospace", None)]
    #[case(ListKind::Bullet, "+ plus", None)]
    fn item_extraction(
        #[case] kind: ListKind,
        #[case] line: &str,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(kind.item(line).as_deref(), expected);
        assert_eq!(kind.matches(line), expected.is_some());
    }
}
