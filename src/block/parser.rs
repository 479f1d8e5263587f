//! Block-level state machine.

use super::ConversionState;
use super::classify::{LineKind, classify};
use crate::Options;
use crate::heading_id::plain_text;
use crate::inline::format_inline;
use crate::render::HtmlWriter;

/// Converts one document into an HTML fragment.
///
/// A converter owns the state of exactly one conversion: [`convert`]
/// consumes it, so heading ids and open blocks can never leak into a
/// second document.
///
/// # Example
/// ```
/// use guidemark::{Converter, Options};
///
/// let html = Converter::new(Options::default()).convert("# Hi\n\n- one\n- two");
/// assert_eq!(html, "<h1 id=\"hi\">Hi</h1>\n<ul>\n<li>one</li>\n<li>two</li>\n</ul>");
/// ```
///
/// [`convert`]: Converter::convert
#[derive(Debug)]
pub struct Converter {
    options: Options,
    state: ConversionState,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

impl Converter {
    /// Create a converter with fresh state.
    pub fn new(options: Options) -> Self {
        Self {
            options,
            state: ConversionState::new(),
        }
    }

    /// Convert a whole document.
    pub fn convert(mut self, input: &str) -> String {
        let mut out = HtmlWriter::with_capacity_for(input.len());
        for line in input.split('\n') {
            let line = line.strip_suffix('\r').unwrap_or(line);
            self.process_line(line, &mut out);
        }
        self.finish(&mut out);
        out.into_string()
    }

    /// Convert a single line.
    fn process_line(&mut self, line: &str, out: &mut HtmlWriter) {
        let kind = classify(line, self.state.in_code_block);

        match kind {
            LineKind::Fence => {
                if self.state.in_code_block {
                    self.state.in_code_block = false;
                    out.code_block_end();
                } else {
                    self.close_blocks(&kind, out);
                    self.state.in_code_block = true;
                    out.code_block_start();
                }
                return;
            }
            LineKind::Code(raw) => {
                out.escaped_line(raw);
                return;
            }
            _ => {}
        }

        self.close_blocks(&kind, out);

        match kind {
            LineKind::Heading { level, content } => {
                let html = format_inline(content, &self.options);
                let id = self
                    .options
                    .heading_ids
                    .then(|| self.state.used_heading_ids.assign(&plain_text(&html)));
                out.heading(level, id.as_deref(), &html);
            }
            LineKind::HorizontalRule => out.hr(),
            LineKind::Blockquote(content) => {
                out.blockquote(&format_inline(content, &self.options));
            }
            LineKind::ListItem {
                kind,
                indent,
                content,
            } => {
                let html = format_inline(content, &self.options);
                self.state.list_stack.push_item(kind, indent, &html, out);
            }
            LineKind::TableRow(row) => {
                self.state.table.push_row(row, &self.options, out);
            }
            LineKind::Paragraph(content) => {
                out.paragraph(&format_inline(content, &self.options));
            }
            LineKind::Blank | LineKind::Fence | LineKind::Code(_) => {}
        }
    }

    /// Close open lists and tables that `kind` does not continue.
    fn close_blocks(&mut self, kind: &LineKind<'_>, out: &mut HtmlWriter) {
        if !matches!(kind, LineKind::ListItem { .. }) {
            self.state.list_stack.close_all(out);
        }
        if !matches!(kind, LineKind::TableRow(_)) {
            self.state.table.close(out);
        }
    }

    /// Flush everything still open at end of input.
    fn finish(&mut self, out: &mut HtmlWriter) {
        if self.state.in_code_block {
            self.state.in_code_block = false;
            out.code_block_end();
        }
        self.state.list_stack.close_all(out);
        self.state.table.close(out);
    }
}
