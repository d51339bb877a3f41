use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use std::str::FromStr;
use topic_viewer_engine::{Block, Document, Span as InlineSpan, resolve_spans};

const BODY: Color = Color::Gray;
const DIM: Color = Color::DarkGray;

/// The terminal colour for a document's accent.
pub fn accent_color(doc: &Document) -> Color {
    Color::from_str(doc.accent()).unwrap_or(Color::Cyan)
}

/// Styles inline spans on top of `base`.
pub fn styled_spans(spans: &[InlineSpan], base: Style, accent: Color) -> Vec<Span<'static>> {
    spans
        .iter()
        .map(|span| match span {
            InlineSpan::Plain(s) => Span::styled(s.clone(), base),
            InlineSpan::Bold(s) => Span::styled(s.clone(), base.add_modifier(Modifier::BOLD)),
            InlineSpan::Italic(s) => Span::styled(s.clone(), base.add_modifier(Modifier::ITALIC)),
            InlineSpan::Code(s) => Span::styled(s.clone(), base.fg(accent)),
        })
        .collect()
}

fn inline(text: &str, base: Style, accent: Color) -> Vec<Span<'static>> {
    styled_spans(&resolve_spans(text), base, accent)
}

/// Renders a whole document as terminal lines.
pub fn render_document(doc: &Document, date_label: &str) -> Vec<Line<'static>> {
    let accent = accent_color(doc);
    let mut lines = vec![Line::from(Span::styled(
        doc.title.clone(),
        Style::default().fg(accent).add_modifier(Modifier::BOLD),
    ))];
    if !doc.subtitle.is_empty() {
        lines.push(Line::from(Span::styled(
            doc.subtitle.clone(),
            Style::default().fg(BODY).add_modifier(Modifier::ITALIC),
        )));
    }
    lines.push(Line::from(Span::styled(
        format!("{date_label} · {} sections", doc.sections.len()),
        Style::default().fg(DIM),
    )));

    for section in &doc.sections {
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled("▌ ", Style::default().fg(accent)),
            Span::styled(
                section.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]));
        for block in &section.blocks {
            lines.push(Line::default());
            lines.extend(render_block(block, accent));
        }
    }

    lines
}

/// Renders one block. Never returns an empty vector for a non-empty block.
pub fn render_block(block: &Block, accent: Color) -> Vec<Line<'static>> {
    let body = Style::default().fg(BODY);
    match block {
        Block::Paragraph { text } => vec![Line::from(inline(text, body, accent))],
        Block::Quote { text } => {
            let mut spans = vec![Span::styled("│ ", Style::default().fg(accent))];
            spans.extend(inline(text, body.add_modifier(Modifier::ITALIC), accent));
            vec![Line::from(spans)]
        }
        Block::List { items } => items
            .iter()
            .map(|item| {
                let mut spans = vec![Span::styled("▸ ", Style::default().fg(accent))];
                spans.extend(inline(item, body, accent));
                Line::from(spans)
            })
            .collect(),
        Block::OrderedList { items } => items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let mut spans = vec![Span::styled(
                    format!("{:>2}. ", i + 1),
                    Style::default().fg(accent),
                )];
                spans.extend(inline(item, body, accent));
                Line::from(spans)
            })
            .collect(),
        Block::Table { headers, rows } => render_table(headers, rows, accent),
    }
}

fn render_table(headers: &[String], rows: &[Vec<String>], accent: Color) -> Vec<Line<'static>> {
    let columns = rows
        .iter()
        .map(Vec::len)
        .chain([headers.len()])
        .max()
        .unwrap_or(0);
    let mut widths = vec![0usize; columns];
    for row in std::iter::once(headers).chain(rows.iter().map(Vec::as_slice)) {
        for (i, cell) in row.iter().enumerate() {
            let visible = InlineSpan::concat(&resolve_spans(cell));
            widths[i] = widths[i].max(visible.chars().count());
        }
    }

    let header_style = Style::default().fg(accent).add_modifier(Modifier::BOLD);
    let mut lines = vec![table_row(headers, &widths, header_style, accent)];
    lines.push(Line::from(Span::styled(
        widths
            .iter()
            .map(|w| "─".repeat(*w))
            .collect::<Vec<_>>()
            .join("─┼─"),
        Style::default().fg(DIM),
    )));
    for (i, row) in rows.iter().enumerate() {
        let style = if i % 2 == 0 {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(BODY)
        };
        lines.push(table_row(row, &widths, style, accent));
    }
    lines
}

fn table_row(cells: &[String], widths: &[usize], style: Style, accent: Color) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(DIM)));
        }
        let resolved = resolve_spans(cell);
        let pad = widths[i].saturating_sub(InlineSpan::concat(&resolved).chars().count());
        spans.extend(styled_spans(&resolved, style, accent));
        if pad > 0 {
            spans.push(Span::raw(" ".repeat(pad)));
        }
    }
    Line::from(spans)
}
