use crate::models::{Library, SourceFile};
use crate::parsing::DOC_EXTENSION;
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid notes directory: {0}")]
    InvalidNotesDir(String),
}

/// Read one document file into a [`SourceFile`].
///
/// The record is named after the file name alone, so files with the same
/// name in different subfolders collide in the library.
pub fn read_source(path: &Path) -> Result<SourceFile, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let content = fs::read_to_string(path)?;
    let last_modified = fs::metadata(path)
        .and_then(|m| m.modified())
        .ok()
        .map(|t| DateTime::<Local>::from(t).naive_local());

    Ok(SourceFile {
        name,
        last_modified,
        content,
    })
}

/// Scan for document files in the notes directory
pub fn scan_markdown_files(notes_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !notes_root.exists() {
        return Err(IoError::InvalidNotesDir(
            "notes directory not found".to_string(),
        ));
    }

    let mut files = Vec::new();
    scan_directory_recursive(notes_root, &mut files)?;
    files.sort();
    Ok(files)
}

/// Read every document file under `notes_root`.
///
/// Files that can't be read (bad UTF-8, permissions) are logged and left out
/// rather than failing the whole load.
pub fn load_sources(notes_root: &Path) -> Result<Vec<SourceFile>, IoError> {
    validate_notes_dir(notes_root)?;

    let files = scan_markdown_files(notes_root)?;
    let mut sources = Vec::with_capacity(files.len());
    for path in files {
        match read_source(&path) {
            Ok(source) => sources.push(source),
            Err(e) => log::warn!("skipping {}: {e}", path.display()),
        }
    }
    log::info!(
        "loaded {} document files from {}",
        sources.len(),
        notes_root.display()
    );
    Ok(sources)
}

/// Load and parse every document under `notes_root`.
pub fn load_library(notes_root: &Path) -> Result<Library, IoError> {
    Ok(Library::from_sources(load_sources(notes_root)?))
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == DOC_EXTENSION
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_notes_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidNotesDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{create_test_file, create_test_notes_dir};

    #[test]
    fn test_scan_finds_markdown_files() {
        // Given a notes directory with markdown files
        let notes_dir = create_test_notes_dir();
        create_test_file(&notes_dir, "test1.md", "# One");
        create_test_file(&notes_dir, "test2.md", "# Two");

        // When scanning for files
        let files = scan_markdown_files(notes_dir.path()).unwrap();

        // Then we find the expected files
        assert_eq!(files.len(), 2);
        assert!(files.iter().any(|f| f.file_name().unwrap() == "test1.md"));
        assert!(files.iter().any(|f| f.file_name().unwrap() == "test2.md"));
    }

    #[test]
    fn test_handle_invalid_notes_directory() {
        let nonexistent_path = PathBuf::from("/this/path/does/not/exist");

        let result = scan_markdown_files(&nonexistent_path);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("notes directory"));
    }

    #[test]
    fn test_scan_nested_directories() {
        let notes_dir = create_test_notes_dir();
        create_test_file(&notes_dir, "root.md", "# Root file");

        let sub_dir = notes_dir.path().join("subfolder");
        std::fs::create_dir(&sub_dir).unwrap();
        std::fs::write(sub_dir.join("nested.md"), "# Nested file").unwrap();

        let files = scan_markdown_files(notes_dir.path()).unwrap();

        assert_eq!(files.len(), 2);
        assert!(files.iter().any(|f| f.file_name().unwrap() == "nested.md"));
    }

    #[test]
    fn test_ignore_non_markdown_files() {
        let notes_dir = create_test_notes_dir();
        create_test_file(&notes_dir, "document.md", "# Markdown");
        create_test_file(&notes_dir, "image.png", "fake image data");
        create_test_file(&notes_dir, "config.json", "{}");

        let files = scan_markdown_files(notes_dir.path()).unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].file_name().unwrap(), "document.md");
    }

    #[test]
    fn test_validate_notes_dir_exists() {
        let notes_dir = create_test_notes_dir();
        assert!(validate_notes_dir(notes_dir.path()).is_ok());
    }

    #[test]
    fn test_validate_notes_dir_not_exists() {
        let result = validate_notes_dir(Path::new("/nonexistent/path"));
        assert!(matches!(result, Err(IoError::InvalidNotesDir(_))));
    }

    #[test]
    fn test_validate_notes_dir_rejects_file() {
        let notes_dir = create_test_notes_dir();
        let file = create_test_file(&notes_dir, "a.md", "");
        assert!(matches!(
            validate_notes_dir(&file),
            Err(IoError::InvalidNotesDir(_))
        ));
    }

    #[test]
    fn test_read_source_success() {
        let notes_dir = create_test_notes_dir();
        let path = create_test_file(&notes_dir, "test.md", "# Test Content\n\nParagraph");

        let source = read_source(&path).unwrap();

        assert_eq!(source.name, "test.md");
        assert_eq!(source.content, "# Test Content\n\nParagraph");
        assert!(source.last_modified.is_some());
    }

    #[test]
    fn test_read_source_not_found() {
        let notes_dir = create_test_notes_dir();
        let result = read_source(&notes_dir.path().join("nonexistent.md"));
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn test_load_sources_skips_unreadable_files() {
        let notes_dir = create_test_notes_dir();
        create_test_file(&notes_dir, "good.md", "# Good");
        std::fs::write(notes_dir.path().join("bad.md"), [0xff, 0xfe, 0x00]).unwrap();

        let sources = load_sources(notes_dir.path()).unwrap();

        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].name, "good.md");
    }

    #[test]
    fn test_load_library_parses_documents() {
        let notes_dir = create_test_notes_dir();
        create_test_file(&notes_dir, "2024-01-02_notes.md", "## Intro\nHello\n");
        create_test_file(&notes_dir, "skip.txt", "# nope");

        let library = load_library(notes_dir.path()).unwrap();

        assert_eq!(library.len(), 1);
        let doc = library.get("2024-01-02_notes.md").unwrap();
        assert_eq!(doc.title, "notes");
        assert_eq!(doc.sections[0].title, "Intro");
    }

    #[test]
    fn test_load_library_invalid_dir() {
        let result = load_library(Path::new("/nonexistent/path"));
        assert!(matches!(result, Err(IoError::InvalidNotesDir(_))));
    }
}
