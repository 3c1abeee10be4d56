//! Pipe tables.
//!
//! A run of consecutive lines starting with `|` is a table. The first row is
//! the header. A separator row right after it (only `|`, `-`, `:` and
//! whitespace) is consumed and sets column alignment. Body rows are padded or
//! truncated to the header width.

use crate::limits::MAX_TABLE_COLUMNS;
use crate::render::HtmlWriter;

use super::lines;

/// Column alignment from a separator cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    None,
    Left,
    Center,
    Right,
}

impl Alignment {
    fn from_separator(cell: &str) -> Self {
        match (cell.starts_with(':'), cell.ends_with(':') && cell.len() > 1) {
            (true, true) => Alignment::Center,
            (true, false) => Alignment::Left,
            (false, true) => Alignment::Right,
            (false, false) => Alignment::None,
        }
    }

    fn attr(self) -> Option<&'static str> {
        match self {
            Alignment::None => None,
            Alignment::Left => Some("left"),
            Alignment::Center => Some("center"),
            Alignment::Right => Some("right"),
        }
    }
}

#[inline]
fn is_table_line(line: &str) -> bool {
    line.trim_start().starts_with('|')
}

/// Split a row into trimmed cells, dropping the outer pipes.
pub fn split_row(line: &str) -> Vec<&str> {
    let trimmed = line.trim();
    let inner = trimmed.strip_prefix('|').unwrap_or(trimmed);
    let inner = inner.strip_suffix('|').unwrap_or(inner);
    inner
        .split('|')
        .take(MAX_TABLE_COLUMNS)
        .map(str::trim)
        .collect()
}

/// Whether `line` is a header separator such as `|---|:--:|`.
pub fn is_separator_row(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.contains('-')
        && trimmed
            .bytes()
            .all(|b| matches!(b, b'|' | b'-' | b':' | b' ' | b'\t'))
}

fn render_table(rows: &[&str], out: &mut HtmlWriter) {
    let header = split_row(rows[0]);
    let width = header.len();

    let (align, body) = match rows.get(1) {
        Some(sep) if is_separator_row(sep) => {
            let align: Vec<Option<&'static str>> = split_row(sep)
                .into_iter()
                .map(|cell| Alignment::from_separator(cell).attr())
                .collect();
            (align, &rows[2..])
        }
        _ => (Vec::new(), &rows[1..]),
    };

    out.write_str("<table>\n<thead>\n");
    out.table_row(&header, true, &align);
    out.write_str("\n</thead>");

    if !body.is_empty() {
        out.write_str("\n<tbody>");
        for row in body {
            let mut cells = split_row(row);
            cells.resize(width, "");
            out.newline();
            out.table_row(&cells, false, &align);
        }
        out.write_str("\n</tbody>");
    }
    out.write_str("\n</table>");
}

/// Render every table in `text`, isolated by blank lines.
///
/// Usable on its own or as the opt-in pipeline pass.
///
/// # Example
/// ```
/// let html = markpass::render_tables("| a |\n|---|\n| 1 |");
/// assert!(html.contains("<th>a</th>"));
/// assert!(html.contains("<td>1</td>"));
/// ```
pub fn render_tables(text: &str) -> String {
    let all: Vec<&str> = lines(text).collect();
    let mut out = HtmlWriter::with_capacity_for(text.len());
    let mut i = 0;

    while i < all.len() {
        if i > 0 {
            out.newline();
        }
        if is_table_line(all[i]) {
            let end = (i..all.len())
                .find(|&j| !is_table_line(all[j]))
                .unwrap_or(all.len());
            out.newline();
            render_table(&all[i..end], &mut out);
            out.blank_line();
            i = end;
            continue;
        }
        out.write_string(all[i]);
        i += 1;
    }

    out.into_string()
}
