//! Pipe table conversion.
//!
//! The first rendered row of a table is the header row. Delimiter rows
//! (`|---|:--:|`) produce no output and do not end the header.

use smallvec::SmallVec;

use crate::Options;
use crate::inline::format_inline;
use crate::render::HtmlWriter;

/// Opening tag written when a table starts.
pub const TABLE_OPEN: &str = "<table class=\"table table-bordered\">";

/// Line-break marker allowed inside cells.
pub const CELL_BREAK: &str = "<br>";

/// One parsed row: trimmed cell strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow<'a> {
    cells: SmallVec<[&'a str; 8]>,
}

impl<'a> TableRow<'a> {
    /// Parse a row, dropping one leading and one trailing pipe.
    pub fn parse(line: &'a str) -> Self {
        let trimmed = line.trim();
        let inner = trimmed.strip_prefix('|').unwrap_or(trimmed);
        let inner = inner.strip_suffix('|').unwrap_or(inner);
        Self {
            cells: inner.split('|').map(str::trim).collect(),
        }
    }

    pub fn cells(&self) -> &[&'a str] {
        &self.cells
    }

    /// Whether every cell is made of hyphens and colons only.
    pub fn is_delimiter(&self) -> bool {
        self.cells.iter().all(|cell| is_delimiter_cell(cell))
    }
}

#[inline]
fn is_delimiter_cell(cell: &str) -> bool {
    !cell.is_empty() && cell.bytes().all(|b| b == b'-' || b == b':')
}

/// Table state across lines.
#[derive(Debug, Default, Clone)]
pub struct TableState {
    in_table: bool,
    header_pending: bool,
}

impl TableState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle one table-row line, opening the table if needed.
    pub fn push_row(&mut self, line: &str, options: &Options, out: &mut HtmlWriter) {
        if !self.in_table {
            self.in_table = true;
            self.header_pending = true;
            out.line(TABLE_OPEN);
        }

        let row = TableRow::parse(line);
        if row.is_delimiter() {
            return;
        }

        let cell_tag = if self.header_pending { "th" } else { "td" };
        self.header_pending = false;
        out.line(&render_row(&row, cell_tag, options));
    }

    /// Close the table if one is open.
    pub fn close(&mut self, out: &mut HtmlWriter) {
        if self.in_table {
            self.in_table = false;
            self.header_pending = false;
            out.close_tag("table");
        }
    }
}

fn render_row(row: &TableRow<'_>, cell_tag: &str, options: &Options) -> String {
    let mut html = String::with_capacity(64);
    html.push_str("<tr>");
    for cell in row.cells() {
        html.push('<');
        html.push_str(cell_tag);
        html.push('>');
        html.push_str(&render_cell(cell, options));
        html.push_str("</");
        html.push_str(cell_tag);
        html.push('>');
    }
    html.push_str("</tr>");
    html
}

/// Inline-format a cell, treating `<br>` as a line break throughout.
fn render_cell(cell: &str, options: &Options) -> String {
    if !cell.contains(CELL_BREAK) {
        return format_inline(cell, options);
    }
    format_inline(&cell.replace(CELL_BREAK, "\n"), options).replace('\n', CELL_BREAK)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(lines: &[&str]) -> String {
        let mut table = TableState::new();
        let mut out = HtmlWriter::new();
        let options = Options::default();
        for line in lines {
            table.push_row(line, &options, &mut out);
        }
        table.close(&mut out);
        out.into_string()
    }

    #[test]
    fn test_parse_row() {
        let row = TableRow::parse("| a |  b | c|");
        assert_eq!(row.cells(), &["a", "b", "c"]);
    }

    #[test]
    fn test_parse_row_single_pipes_only() {
        let row = TableRow::parse("|| a ||");
        assert_eq!(row.cells(), &["", "a", ""]);
    }

    #[test]
    fn test_parse_row_without_trailing_pipe() {
        let row = TableRow::parse("| a | b");
        assert_eq!(row.cells(), &["a", "b"]);
    }

    #[test]
    fn test_delimiter_rows() {
        assert!(TableRow::parse("|---|:--:|--:|").is_delimiter());
        assert!(TableRow::parse("| - |").is_delimiter());
        assert!(!TableRow::parse("| --- | x |").is_delimiter());
        assert!(!TableRow::parse("| |").is_delimiter());
    }

    #[test]
    fn test_header_then_body() {
        let html = run(&["| A | B |", "|---|---|", "| 1 | 2 |"]);
        assert_eq!(
            html,
            "<table class=\"table table-bordered\">\n<tr><th>A</th><th>B</th></tr>\n<tr><td>1</td><td>2</td></tr>\n</table>"
        );
    }

    #[test]
    fn test_header_without_delimiter() {
        let html = run(&["| A |", "| 1 |"]);
        assert!(html.contains("<tr><th>A</th></tr>"));
        assert!(html.contains("<tr><td>1</td></tr>"));
    }

    #[test]
    fn test_leading_delimiter_keeps_header_pending() {
        let html = run(&["|---|", "| A |", "| 1 |"]);
        assert!(html.contains("<tr><th>A</th></tr>"));
        assert!(html.contains("<tr><td>1</td></tr>"));
    }

    #[test]
    fn test_mismatched_cell_counts() {
        let html = run(&["| A | B | C |", "| 1 |"]);
        assert!(html.contains("<tr><td>1</td></tr>"));
    }

    #[test]
    fn test_cell_inline_formatting() {
        let html = run(&["| **Key** | `a|b` |"]);
        // Cells split on every pipe, code spans included.
        assert!(html.contains("<th><strong>Key</strong></th><th>`a</th><th>b`</th>"), "{html}");
    }

    #[test]
    fn test_cell_line_breaks() {
        let html = run(&["| one<br>two | **a<br>b** |"]);
        assert!(html.contains("<th>one<br>two</th>"), "{html}");
        assert!(html.contains("<th><strong>a<br>b</strong></th>"), "{html}");
    }

    #[test]
    fn test_cell_escaping() {
        let html = run(&["| a < b & c |"]);
        assert!(html.contains("<th>a &lt; b &amp; c</th>"));
    }

    #[test]
    fn test_close_when_not_open() {
        let mut table = TableState::new();
        let mut out = HtmlWriter::new();
        table.close(&mut out);
        assert!(out.is_empty());
    }
}
