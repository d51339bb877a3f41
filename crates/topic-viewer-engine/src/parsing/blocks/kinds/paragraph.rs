/// Paragraph block type (marker struct).
///
/// Paragraphs are the fallback for any non-blank line that is not a heading
/// marker. They run on across following lines until something that could
/// start another block.
pub struct Paragraph;

impl Paragraph {
    pub const HEADING_MARKER: char = '#';

    /// Whether `line` can open a paragraph.
    pub fn opens(line: &str) -> bool {
        !line.trim().is_empty() && !line.starts_with(Self::HEADING_MARKER)
    }

    /// Whether `line` continues an open paragraph.
    ///
    /// Stops on blank lines, on `|` and `>` at the raw line start, and on a
    /// trimmed start of `-`, `*` or a digit.
    pub fn continues(line: &str) -> bool {
        let trimmed = line.trim();
        !trimmed.is_empty()
            && !line.starts_with('|')
            && !line.starts_with('>')
            && !trimmed.starts_with(['-', '*'])
            && !trimmed.starts_with(|c: char| c.is_ascii_digit())
    }
}
