use std::sync::LazyLock;

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::accent::ACCENT_PALETTE;

/// A parsed document: one source file turned into a titled, sectioned tree.
///
/// Documents are plain values. They are recomputed from source whenever the
/// content or metadata changes and have no identity beyond `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Source filename.
    pub id: String,
    /// Never empty.
    pub title: String,
    /// May be empty.
    pub subtitle: String,
    pub date: NaiveDateTime,
    /// Index into [`ACCENT_PALETTE`], always in `0..8`.
    pub accent_index: usize,
    pub sections: Vec<Section>,
}

impl Document {
    /// Hex colour for this document's accent.
    pub fn accent(&self) -> &'static str {
        ACCENT_PALETTE[self.accent_index % ACCENT_PALETTE.len()]
    }

    pub fn block_count(&self) -> usize {
        self.sections.iter().map(|s| s.blocks.len()).sum()
    }
}

/// A titled subdivision of a document, introduced by a `## ` line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub blocks: Vec<Block>,
}

/// One typed unit of content within a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Paragraph { text: String },
    /// Consecutive `> ` lines joined with single spaces.
    Quote { text: String },
    List { items: Vec<String> },
    OrderedList { items: Vec<String> },
    /// Row lengths are not required to match the header length.
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
}

impl Block {
    /// Short name of the block kind, as logged by the segmenter.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Block::Paragraph { .. } => "paragraph",
            Block::Quote { .. } => "quote",
            Block::List { .. } => "list",
            Block::OrderedList { .. } => "ordered_list",
            Block::Table { .. } => "table",
        }
    }
}

static FILENAME_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})").expect("filename date pattern is valid")
});

/// Reads a leading `YYYY-MM-DD` from a filename as noon on that day.
///
/// Returns `None` when there is no prefix or it isn't a real calendar date.
pub fn date_from_filename(name: &str) -> Option<NaiveDateTime> {
    let caps = FILENAME_DATE.captures(name)?;
    let year = caps[1].parse().ok()?;
    let month = caps[2].parse().ok()?;
    let day = caps[3].parse().ok()?;
    let noon = NaiveTime::from_hms_opt(12, 0, 0)?;
    Some(NaiveDate::from_ymd_opt(year, month, day)?.and_time(noon))
}

/// One candidate document as handed over by file acquisition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub name: String,
    /// `None` when the platform gave no modification time.
    pub last_modified: Option<NaiveDateTime>,
    pub content: String,
}

impl SourceFile {
    pub fn new(
        name: impl Into<String>,
        last_modified: Option<NaiveDateTime>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            last_modified,
            content: content.into(),
        }
    }

    /// The date to file this document under.
    ///
    /// Uses the supplied modification time, else a `YYYY-MM-DD` filename
    /// prefix, else the current local time.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.last_modified
            .or_else(|| date_from_filename(&self.name))
            .unwrap_or_else(|| Local::now().naive_local())
    }
}
