use crate::models::Block;

use super::kinds::{ListKind, Paragraph, Quote, Table};

/// Partitions the lines of one section body into blocks.
///
/// A single forward cursor walks the lines. At each position the openers are
/// tried in a fixed order (table, quote, ordered list, bullet list,
/// paragraph) and the first one that matches consumes its run of lines.
/// Lines that open nothing are skipped.
pub fn segment_blocks(lines: &[&str]) -> Vec<Block> {
    let mut out = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let (block, next) = open_block(lines, i);
        debug_assert!(next > i, "segmenter cursor must advance");
        if let Some(block) = block {
            log::trace!("{} block at lines {i}..{next}", block.kind_name());
            out.push(block);
        }
        i = next;
    }

    out
}

/// Tries each opener in precedence order at `i`.
///
/// Returns the block (if any) and the index of the first unconsumed line.
fn open_block(lines: &[&str], i: usize) -> (Option<Block>, usize) {
    if let Some((block, next)) = try_table(lines, i) {
        return (Some(block), next);
    }
    if let Some((block, next)) = try_quote(lines, i) {
        return (Some(block), next);
    }
    if let Some((block, next)) = try_list(lines, i, ListKind::Ordered) {
        return (Some(block), next);
    }
    if let Some((block, next)) = try_list(lines, i, ListKind::Bullet) {
        return (Some(block), next);
    }
    if let Some((block, next)) = try_paragraph(lines, i) {
        return (Some(block), next);
    }
    (None, i + 1)
}

fn try_table(lines: &[&str], i: usize) -> Option<(Block, usize)> {
    let header = lines[i];
    let separator = lines.get(i + 1)?;
    if !Table::is_row(header) || !Table::is_separator(separator) {
        return None;
    }

    let headers = Table::cells(header);
    let mut rows = Vec::new();
    let mut j = i + 2;
    while j < lines.len() && Table::is_row(lines[j]) {
        rows.push(Table::cells(lines[j]));
        j += 1;
    }

    Some((Block::Table { headers, rows }, j))
}

fn try_quote(lines: &[&str], i: usize) -> Option<(Block, usize)> {
    Quote::strip(lines[i])?;

    let mut parts = Vec::new();
    let mut j = i;
    while let Some(rest) = lines.get(j).and_then(|l| Quote::strip(l)) {
        parts.push(rest);
        j += 1;
    }

    let text = parts.join(" ").trim().to_string();
    Some((Block::Quote { text }, j))
}

fn try_list(lines: &[&str], i: usize, kind: ListKind) -> Option<(Block, usize)> {
    if !kind.matches(lines[i]) {
        return None;
    }

    let mut items = Vec::new();
    let mut j = i;
    while let Some(item) = lines.get(j).and_then(|l| kind.item(l)) {
        items.push(item);
        j += 1;
    }

    let block = match kind {
        ListKind::Ordered => Block::OrderedList { items },
        ListKind::Bullet => Block::List { items },
    };
    Some((block, j))
}

fn try_paragraph(lines: &[&str], i: usize) -> Option<(Block, usize)> {
    if !Paragraph::opens(lines[i]) {
        return None;
    }

    let mut text = lines[i].to_string();
    let mut j = i + 1;
    while j < lines.len() && Paragraph::continues(lines[j]) {
        text.push(' ');
        text.push_str(lines[j]);
        j += 1;
    }

    let text = text.trim().to_string();
    Some((Block::Paragraph { text }, j))
}
