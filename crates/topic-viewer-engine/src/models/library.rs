use std::collections::HashMap;
use std::fmt::Write;

use chrono::NaiveDateTime;
use serde::Serialize;

use super::document::{Document, SourceFile};
use crate::parsing::{DOC_EXTENSION, parse_document};

/// Default format for date filter keys, e.g. `2024/1/2`.
pub const DEFAULT_DATE_FORMAT: &str = "%Y/%-m/%-d";

/// Formats `date` as a filter key using a chrono strftime `format`.
///
/// An invalid format falls back to [`DEFAULT_DATE_FORMAT`].
pub fn date_key(date: &NaiveDateTime, format: &str) -> String {
    let mut key = String::new();
    if write!(key, "{}", date.format(format)).is_err() {
        log::warn!("invalid date format {format:?}, using {DEFAULT_DATE_FORMAT:?}");
        key = date.format(DEFAULT_DATE_FORMAT).to_string();
    }
    key
}

/// One row of the date filter: a date key and how many documents carry it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateEntry {
    pub key: String,
    pub count: usize,
}

/// The parsed documents of one load.
///
/// A library is a snapshot: reloading builds a new one rather than patching
/// this one. Documents are kept newest first, ties ordered by id.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Library {
    documents: Vec<Document>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses every eligible source.
    ///
    /// Sources whose name lacks the document extension are skipped. When two
    /// sources share a name the later one wins.
    pub fn from_sources(sources: impl IntoIterator<Item = SourceFile>) -> Self {
        let suffix = format!(".{DOC_EXTENSION}");
        let documents = sources.into_iter().filter_map(|source| {
            if !source.name.ends_with(&suffix) {
                log::debug!("skipping {}: not a .{DOC_EXTENSION} file", source.name);
                return None;
            }
            let date = source.timestamp();
            Some(parse_document(&source.content, &source.name, date))
        });
        Self::from_documents(documents)
    }

    /// Builds a library from already-parsed documents, last write wins on id.
    pub fn from_documents(documents: impl IntoIterator<Item = Document>) -> Self {
        let mut by_id: HashMap<String, Document> = HashMap::new();
        for doc in documents {
            if let Some(old) = by_id.insert(doc.id.clone(), doc) {
                log::debug!("replaced duplicate document {}", old.id);
            }
        }

        let mut documents: Vec<Document> = by_id.into_values().collect();
        documents.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.id.cmp(&b.id)));
        Self { documents }
    }

    /// All documents, newest first.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn get(&self, id: &str) -> Option<&Document> {
        self.documents.iter().find(|d| d.id == id)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Documents whose date key under `format` equals `key` exactly.
    pub fn filter_by_date(&self, key: &str, format: &str) -> Vec<&Document> {
        self.documents
            .iter()
            .filter(|d| date_key(&d.date, format) == key)
            .collect()
    }

    /// Distinct date keys with document counts, newest first.
    pub fn date_index(&self, format: &str) -> Vec<DateEntry> {
        let mut entries: Vec<DateEntry> = Vec::new();
        for doc in &self.documents {
            let key = date_key(&doc.date, format);
            match entries.iter_mut().find(|e| e.key == key) {
                Some(entry) => entry.count += 1,
                None => entries.push(DateEntry { key, count: 1 }),
            }
        }
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::datetime;
    use pretty_assertions::assert_eq;

    fn source(name: &str, date: NaiveDateTime, content: &str) -> SourceFile {
        SourceFile::new(name, Some(date), content)
    }

    fn ids(docs: &[&Document]) -> Vec<String> {
        docs.iter().map(|d| d.id.clone()).collect()
    }

    #[test]
    fn test_new_library_is_empty() {
        let library = Library::new();
        assert!(library.is_empty());
        assert_eq!(library.len(), 0);
    }

    #[test]
    fn test_only_markdown_sources_are_parsed() {
        let library = Library::from_sources([
            source("a.md", datetime(2024, 1, 1), "# A"),
            source("b.txt", datetime(2024, 1, 1), "# B"),
            source("c.md.bak", datetime(2024, 1, 1), "# C"),
        ]);

        assert_eq!(library.len(), 1);
        assert_eq!(library.documents()[0].title, "A");
    }

    #[test]
    fn test_documents_sorted_newest_first() {
        let library = Library::from_sources([
            source("old.md", datetime(2023, 5, 1), ""),
            source("new.md", datetime(2024, 2, 1), ""),
            source("mid.md", datetime(2023, 12, 31), ""),
        ]);

        let order: Vec<_> = library.documents().iter().map(|d| d.id.as_str()).collect();
        assert_eq!(order, vec!["new.md", "mid.md", "old.md"]);
    }

    #[test]
    fn test_same_date_ordered_by_id() {
        let library = Library::from_sources([
            source("b.md", datetime(2024, 1, 1), ""),
            source("a.md", datetime(2024, 1, 1), ""),
        ]);

        let order: Vec<_> = library.documents().iter().map(|d| d.id.as_str()).collect();
        assert_eq!(order, vec!["a.md", "b.md"]);
    }

    #[test]
    fn test_duplicate_names_last_write_wins() {
        let library = Library::from_sources([
            source("dup.md", datetime(2024, 1, 1), "# First"),
            source("dup.md", datetime(2024, 1, 1), "# Second"),
        ]);

        assert_eq!(library.len(), 1);
        assert_eq!(library.get("dup.md").unwrap().title, "Second");
    }

    #[test]
    fn test_get_by_id() {
        let library = Library::from_sources([source("x.md", datetime(2024, 1, 1), "# X")]);

        assert_eq!(library.get("x.md").map(|d| d.title.as_str()), Some("X"));
        assert!(library.get("missing.md").is_none());
    }

    #[test]
    fn test_missing_timestamp_uses_filename_date() {
        let library = Library::from_sources([SourceFile::new("2024-03-04_log.md", None, "")]);

        let doc = library.get("2024-03-04_log.md").unwrap();
        assert_eq!(doc.date, datetime(2024, 3, 4));
        assert_eq!(doc.title, "log");
    }

    #[test]
    fn test_filter_by_date_key() {
        let library = Library::from_sources([
            source("a.md", datetime(2024, 1, 2), ""),
            source("b.md", datetime(2024, 1, 2), ""),
            source("c.md", datetime(2024, 1, 3), ""),
        ]);

        let hits = library.filter_by_date("2024/1/2", DEFAULT_DATE_FORMAT);
        assert_eq!(ids(&hits), vec!["a.md", "b.md"]);
        assert!(library.filter_by_date("2024/01/02", DEFAULT_DATE_FORMAT).is_empty());
    }

    #[test]
    fn test_filter_with_custom_format() {
        let library = Library::from_sources([source("a.md", datetime(2024, 1, 2), "")]);

        let hits = library.filter_by_date("2024-01-02", "%Y-%m-%d");
        assert_eq!(ids(&hits), vec!["a.md"]);
    }

    #[test]
    fn test_date_index_counts_newest_first() {
        let library = Library::from_sources([
            source("a.md", datetime(2024, 9, 30), ""),
            source("b.md", datetime(2024, 10, 1), ""),
            source("c.md", datetime(2024, 10, 1), ""),
        ]);

        assert_eq!(
            library.date_index(DEFAULT_DATE_FORMAT),
            vec![
                DateEntry {
                    key: "2024/10/1".into(),
                    count: 2
                },
                DateEntry {
                    key: "2024/9/30".into(),
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn test_invalid_format_falls_back() {
        assert_eq!(date_key(&datetime(2024, 1, 2), "%Y-%"), "2024/1/2");
    }
}
