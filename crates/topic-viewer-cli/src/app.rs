use anyhow::Result;
use ratatui::widgets::ListState;
use std::path::PathBuf;
use topic_viewer_engine::{DateEntry, Document, Library, io};

/// Which list the arrow keys move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Dates,
    Documents,
}

pub struct App {
    notes_path: PathBuf,
    date_format: String,
    library: Library,
    /// Date filter rows; list index 0 is "All dates", index n is `dates[n - 1]`.
    pub dates: Vec<DateEntry>,
    pub date_list_state: ListState,
    pub date_filter: Option<String>,
    /// Ids of the documents passing the current filter, newest first.
    visible: Vec<String>,
    pub document_list_state: ListState,
    pub focus: Focus,
    pub scroll: u16,
}

impl App {
    pub fn new(notes_path: PathBuf, date_format: String) -> Result<Self> {
        let library = io::load_library(&notes_path)?;
        Ok(Self::with_library(notes_path, date_format, library))
    }

    pub fn with_library(notes_path: PathBuf, date_format: String, library: Library) -> Self {
        let mut app = Self {
            notes_path,
            date_format,
            library,
            dates: Vec::new(),
            date_list_state: ListState::default(),
            date_filter: None,
            visible: Vec::new(),
            document_list_state: ListState::default(),
            focus: Focus::Documents,
            scroll: 0,
        };
        app.refresh();
        app
    }

    /// Re-read the notes folder, replacing the whole library.
    ///
    /// The date filter and selection are reset, as after picking a new folder.
    pub fn reload(&mut self) -> Result<()> {
        self.library = io::load_library(&self.notes_path)?;
        self.date_filter = None;
        self.refresh();
        Ok(())
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    pub fn visible_documents(&self) -> Vec<&Document> {
        self.visible
            .iter()
            .filter_map(|id| self.library.get(id))
            .collect()
    }

    pub fn selected_document(&self) -> Option<&Document> {
        let index = self.document_list_state.selected()?;
        self.library.get(self.visible.get(index)?)
    }

    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    pub fn next(&mut self) {
        match self.focus {
            Focus::Dates => step(&mut self.date_list_state, self.dates.len() + 1, 1),
            Focus::Documents => {
                step(&mut self.document_list_state, self.visible.len(), 1);
                self.scroll = 0;
            }
        }
    }

    pub fn previous(&mut self) {
        match self.focus {
            Focus::Dates => step(&mut self.date_list_state, self.dates.len() + 1, -1),
            Focus::Documents => {
                step(&mut self.document_list_state, self.visible.len(), -1);
                self.scroll = 0;
            }
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Dates => Focus::Documents,
            Focus::Documents => Focus::Dates,
        };
    }

    /// Applies the highlighted date row as the filter.
    pub fn activate_selected_date(&mut self) {
        let key = match self.date_list_state.selected() {
            Some(0) | None => None,
            Some(i) => self.dates.get(i - 1).map(|e| e.key.clone()),
        };
        self.date_filter = key;
        self.refresh_visible();
        self.focus = Focus::Documents;
    }

    pub fn clear_date_filter(&mut self) {
        self.date_filter = None;
        self.date_list_state.select(Some(0));
        self.refresh_visible();
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    fn refresh(&mut self) {
        self.dates = self.library.date_index(&self.date_format);
        self.date_list_state.select(Some(0));
        self.refresh_visible();
    }

    fn refresh_visible(&mut self) {
        self.visible = match &self.date_filter {
            Some(key) => self
                .library
                .filter_by_date(key, &self.date_format)
                .into_iter()
                .map(|d| d.id.clone())
                .collect(),
            None => self
                .library
                .documents()
                .iter()
                .map(|d| d.id.clone())
                .collect(),
        };
        let selected = if self.visible.is_empty() { None } else { Some(0) };
        self.document_list_state.select(selected);
        self.scroll = 0;
    }
}

/// Moves a list selection by `delta`, wrapping at both ends.
fn step(state: &mut ListState, len: usize, delta: isize) {
    if len == 0 {
        state.select(None);
        return;
    }
    let i = match state.selected() {
        Some(i) => (i as isize + delta).rem_euclid(len as isize) as usize,
        None => 0,
    };
    state.select(Some(i));
}
