//! HTML fragment writer.
//!
//! The fragment is line-oriented: every block-level element occupies its
//! own line and lines are joined with `\n` without a trailing newline.

use crate::escape;

/// HTML output writer with a pre-allocated, reusable buffer.
///
/// # Example
/// ```
/// use guidemark::HtmlWriter;
///
/// let mut writer = HtmlWriter::with_capacity_for(64);
/// writer.paragraph("Hello &amp; welcome");
/// writer.hr();
///
/// assert_eq!(writer.into_string(), "<p>Hello &amp; welcome</p>\n<hr>");
/// ```
#[derive(Debug, Default)]
pub struct HtmlWriter {
    out: String,
    lines: usize,
}

impl HtmlWriter {
    /// Create a new writer with default capacity.
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(1024)
    }

    /// Create with pre-allocated capacity based on expected input size.
    ///
    /// Typical HTML is ~1.25x input size.
    #[inline]
    pub fn with_capacity_for(input_len: usize) -> Self {
        Self::with_capacity(input_len + input_len / 4)
    }

    /// Create with explicit capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            out: String::with_capacity(capacity),
            lines: 0,
        }
    }

    /// Start a new output line.
    #[inline]
    fn begin_line(&mut self) {
        if self.lines > 0 {
            self.out.push('\n');
        }
        self.lines += 1;
    }

    /// Write a complete line of already-rendered HTML.
    #[inline]
    pub fn line(&mut self, html: &str) {
        self.begin_line();
        self.out.push_str(html);
    }

    /// Write a line of raw text with HTML escaping (code block content).
    #[inline]
    pub fn escaped_line(&mut self, text: &str) {
        self.begin_line();
        escape::escape_html_into(&mut self.out, text);
    }

    /// Number of lines written so far.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.lines
    }

    /// Check if output is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines == 0
    }

    /// Get output as str.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// Take ownership as String.
    #[inline]
    pub fn into_string(self) -> String {
        self.out
    }

    // --- Block elements ---

    /// Write `<pre><code>`.
    #[inline]
    pub fn code_block_start(&mut self) {
        self.line("<pre><code>");
    }

    /// Write `</code></pre>`.
    #[inline]
    pub fn code_block_end(&mut self) {
        self.line("</code></pre>");
    }

    /// Write a heading, with an `id` attribute when one is given.
    pub fn heading(&mut self, level: u8, id: Option<&str>, content: &str) {
        debug_assert!((1..=6).contains(&level));
        let digit = char::from(b'0' + level);
        self.begin_line();
        self.out.push_str("<h");
        self.out.push(digit);
        if let Some(id) = id {
            self.out.push_str(" id=\"");
            escape::escape_html_into(&mut self.out, id);
            self.out.push('"');
        }
        self.out.push('>');
        self.out.push_str(content);
        self.out.push_str("</h");
        self.out.push(digit);
        self.out.push('>');
    }

    /// Write `<hr>`.
    #[inline]
    pub fn hr(&mut self) {
        self.line("<hr>");
    }

    /// Write a blockquote around rendered inline content.
    #[inline]
    pub fn blockquote(&mut self, content: &str) {
        self.wrapped("blockquote", content);
    }

    /// Write a paragraph around rendered inline content.
    #[inline]
    pub fn paragraph(&mut self, content: &str) {
        self.wrapped("p", content);
    }

    /// Write a list item around rendered inline content.
    #[inline]
    pub fn list_item(&mut self, content: &str) {
        self.wrapped("li", content);
    }

    /// Write opening tag on its own line: `<tag>`
    #[inline]
    pub fn open_tag(&mut self, tag: &'static str) {
        self.begin_line();
        self.out.push('<');
        self.out.push_str(tag);
        self.out.push('>');
    }

    /// Write closing tag on its own line: `</tag>`
    #[inline]
    pub fn close_tag(&mut self, tag: &'static str) {
        self.begin_line();
        self.out.push_str("</");
        self.out.push_str(tag);
        self.out.push('>');
    }

    fn wrapped(&mut self, tag: &'static str, content: &str) {
        self.begin_line();
        self.out.push('<');
        self.out.push_str(tag);
        self.out.push('>');
        self.out.push_str(content);
        self.out.push_str("</");
        self.out.push_str(tag);
        self.out.push('>');
    }
}
