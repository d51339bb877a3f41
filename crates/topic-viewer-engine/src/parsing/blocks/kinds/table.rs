use std::sync::LazyLock;

use regex::Regex;

/// Pipe table block type with owned delimiter knowledge.
pub struct Table;

static SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\|[-:| ]+\|[-:| ]*$").expect("separator pattern is valid"));

impl Table {
    /// The cell delimiter.
    pub const PIPE: char = '|';

    /// Whether a line (trimmed) could be a header or body row.
    pub fn is_row(line: &str) -> bool {
        line.trim().starts_with(Self::PIPE)
    }

    /// Whether a line is a header separator such as `|---|:--:|`.
    pub fn is_separator(line: &str) -> bool {
        SEPARATOR.is_match(line.trim())
    }

    /// Splits a row on `|`, trimming cells and dropping empty ones.
    pub fn cells(line: &str) -> Vec<String> {
        line.split(Self::PIPE)
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("|---|---|", true)]
    #[case("| :-- | --: |", true)]
    #[case("  |---|  ", true)]
    #[case("|-|", true)]
    #[case("|---", false)]
    #[case("---|---", false)]
    #[case("| A | B |", false)]
    #[case("|---|---| x", false)]
    #[case("", false)]
    fn separator_detection(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(Table::is_separator(line), expected);
    }

    #[test]
    fn cells_drop_empty_entries() {
        assert_eq!(Table::cells("| A |  | B |"), vec!["A", "B"]);
    }

    #[test]
    fn cells_without_outer_pipes() {
        assert_eq!(Table::cells("| a | b"), vec!["a", "b"]);
    }
}
