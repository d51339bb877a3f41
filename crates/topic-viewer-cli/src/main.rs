mod app;
mod render;

use anyhow::Result;
use app::{App, Focus};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};
use std::{
    env,
    io::{Stdout, stdout},
    path::PathBuf,
    process,
};
use topic_viewer_config::{Config, DEFAULT_DATE_FORMAT};
use topic_viewer_engine::{date_key, io};

const JSON_FLAG: &str = "--json";
const PAGE: u16 = 10;

fn usage(program: &str) -> String {
    format!("Usage: {program} [{JSON_FLAG}] [notes-folder-path]")
}

fn main() -> Result<()> {
    env_logger::init();

    // Determine notes path from CLI args or config file
    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "topic-viewer-cli".to_string());
    let (flags, positional): (Vec<String>, Vec<String>) = args.partition(|a| a.starts_with("--"));
    if flags.iter().any(|f| f != JSON_FLAG) || positional.len() > 1 {
        eprintln!("{}", usage(&program));
        process::exit(1);
    }
    let json = !flags.is_empty();
    let config_path = Config::config_path();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("{}", usage(&program));
            process::exit(1);
        }
    };

    let had_config = config.is_some();
    let date_format = config
        .as_ref()
        .map(|c| c.date_format.clone())
        .unwrap_or_else(|| DEFAULT_DATE_FORMAT.to_string());

    let (notes_path, from_config) = match (positional.into_iter().next(), config) {
        (Some(path), _) => (PathBuf::from(path), false),
        (None, Some(config)) => (config.notes_path, true),
        (None, None) => {
            eprintln!("Error: No notes path provided and no config file found");
            eprintln!("{}", usage(&program));
            eprintln!("Or create a config file at {}", config_path.display());
            process::exit(1);
        }
    };

    // Validate notes directory using engine
    if let Err(e) = io::validate_notes_dir(&notes_path) {
        let source = if from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Notes path '{}'{} is invalid: {e}",
            notes_path.display(),
            source
        );
        process::exit(1);
    }

    // First run with a folder argument: remember it for next time
    if !had_config && let Err(e) = Config::create_if_missing(&config_path, &notes_path) {
        log::warn!("could not write config to {}: {e}", config_path.display());
    }

    if json {
        let library = io::load_library(&notes_path)?;
        println!("{}", serde_json::to_string_pretty(&library)?);
        return Ok(());
    }

    let mut app = App::new(notes_path, date_format)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next(),
                KeyCode::Up | KeyCode::Char('k') => app.previous(),
                KeyCode::Tab => app.toggle_focus(),
                KeyCode::Enter if app.focus == Focus::Dates => app.activate_selected_date(),
                KeyCode::Esc => app.clear_date_filter(),
                KeyCode::PageDown | KeyCode::Char(' ') => app.scroll_down(PAGE),
                KeyCode::PageUp => app.scroll_up(PAGE),
                KeyCode::Char('r') => {
                    if let Err(e) = app.reload() {
                        log::error!("reload failed: {e}");
                    }
                }
                _ => {}
            }
        }
    }
}

fn panel(title: String, focused: bool) -> Block<'static> {
    let border = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(title)
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            [
                Constraint::Percentage(18),
                Constraint::Percentage(27),
                Constraint::Percentage(55),
            ]
            .as_ref(),
        )
        .split(rows[0]);

    // Date filter panel
    let mut date_items = vec![ListItem::new(format!("All dates ({})", app.library().len()))];
    date_items.extend(
        app.dates
            .iter()
            .map(|e| ListItem::new(format!("{} ({})", e.key, e.count))),
    );
    let date_list = List::new(date_items)
        .block(panel("Dates".into(), app.focus == Focus::Dates))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));
    f.render_stateful_widget(date_list, chunks[0], &mut app.date_list_state);

    // Document list panel
    let documents = app.visible_documents();
    let count = documents.len();
    let doc_items: Vec<ListItem> = documents
        .iter()
        .map(|doc| {
            let accent = render::accent_color(doc);
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled("● ", Style::default().fg(accent)),
                    Span::styled(
                        doc.title.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(Span::styled(
                    format!(
                        "  {} · {}sec",
                        date_key(&doc.date, app.date_format()),
                        doc.sections.len()
                    ),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();
    let title = match &app.date_filter {
        Some(key) => format!("Documents: {key} ({count})"),
        None => format!("Documents ({count})"),
    };
    let doc_list = List::new(doc_items)
        .block(panel(title, app.focus == Focus::Documents))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));
    f.render_stateful_widget(doc_list, chunks[1], &mut app.document_list_state);

    // Content panel
    let content_text = match app.selected_document() {
        Some(doc) => render::render_document(doc, &date_key(&doc.date, app.date_format())),
        None => vec![Line::from("No documents to show")],
    };
    let content = Paragraph::new(content_text)
        .block(Block::default().borders(Borders::ALL).title("Content"))
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));
    f.render_widget(content, chunks[2]);

    let help = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k ↓/j: Move | "),
        Span::raw("Tab: Dates/Documents | Enter: Filter | Esc: Clear | "),
        Span::raw("PgUp/PgDn: Scroll | r: Reload"),
    ]);
    f.render_widget(Paragraph::new(help), rows[1]);
}
