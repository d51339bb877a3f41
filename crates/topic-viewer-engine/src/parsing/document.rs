use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;

use super::blocks::segment_blocks;
use crate::models::{Document, Section, accent_index};

/// Extension of eligible document files, without the dot.
pub const DOC_EXTENSION: &str = "md";

const TITLE_MARKER: &str = "# ";
const SECTION_MARKER: &str = "## ";
const SUBTITLE_DELIMITER: char = '*';
const UNTITLED: &str = "Untitled";

static DATE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}_").expect("date prefix is valid"));

/// A section whose lines are still being collected.
struct PendingSection<'a> {
    title: String,
    lines: Vec<&'a str>,
}

impl PendingSection<'_> {
    fn finish(self) -> Section {
        Section {
            title: self.title,
            blocks: segment_blocks(&self.lines),
        }
    }
}

/// Parses raw file content into a [`Document`].
///
/// Never fails: lines that match nothing structural become paragraph text
/// or are dropped, and a missing `# ` title falls back to the filename.
pub fn parse_document(content: &str, filename: &str, date: NaiveDateTime) -> Document {
    let mut title: Option<String> = None;
    let mut subtitle: Option<String> = None;
    let mut sections = Vec::new();
    let mut current: Option<PendingSection> = None;

    for line in content.lines() {
        if let Some(rest) = line.strip_prefix(TITLE_MARKER) {
            let rest = rest.trim();
            if !rest.is_empty() {
                title = Some(rest.to_string());
            }
        } else if let Some(found) = subtitle_of(line).filter(|_| subtitle.is_none()) {
            subtitle = Some(found.to_string());
        } else if let Some(rest) = line.strip_prefix(SECTION_MARKER) {
            if let Some(done) = current.take() {
                sections.push(done.finish());
            }
            current = Some(PendingSection {
                title: rest.trim().to_string(),
                lines: Vec::new(),
            });
        } else if let Some(section) = current.as_mut() {
            section.lines.push(line);
        }
    }
    if let Some(done) = current.take() {
        sections.push(done.finish());
    }

    let doc = Document {
        id: filename.to_string(),
        title: title.unwrap_or_else(|| title_from_filename(filename)),
        subtitle: subtitle.unwrap_or_default(),
        date,
        accent_index: accent_index(filename),
        sections,
    };
    log::trace!(
        "parsed {filename}: {:?}, {} sections, {} blocks",
        doc.title,
        doc.sections.len(),
        doc.block_count()
    );
    doc
}

/// The trimmed interior of a line wrapped in single asterisks.
///
/// At least one character must sit between the asterisks, so `**` is not a
/// subtitle but `* *` is, with an empty interior.
fn subtitle_of(line: &str) -> Option<&str> {
    let inner = line
        .trim()
        .strip_prefix(SUBTITLE_DELIMITER)?
        .strip_suffix(SUBTITLE_DELIMITER)?;
    (!inner.is_empty()).then(|| inner.trim())
}

/// Derives a display title from a filename.
///
/// Strips the `.md` extension and a leading `YYYY-MM-DD_` date prefix.
/// Falls back to the raw filename, then to `Untitled`, so the result is
/// never empty.
pub fn title_from_filename(filename: &str) -> String {
    let stem = filename
        .strip_suffix(&format!(".{DOC_EXTENSION}"))
        .unwrap_or(filename);
    let stem = DATE_PREFIX.replace(stem, "");

    if !stem.is_empty() {
        stem.into_owned()
    } else if !filename.is_empty() {
        filename.to_string()
    } else {
        UNTITLED.to_string()
    }
}
