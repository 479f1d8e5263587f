//! Nested list tracking.
//!
//! Every two columns of leading whitespace are one nesting level. The
//! stack only ever opens one level per item, and a change of list kind at
//! an already-open level keeps the level's original tag until the stack
//! unwinds past it.

use smallvec::SmallVec;

use crate::render::HtmlWriter;

/// Columns of leading whitespace per nesting level.
pub const INDENT_WIDTH: usize = 2;

/// Kind of list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// Bullet list (`-`, `*`, `+`).
    Unordered,
    /// Numbered list (`1.`).
    Ordered,
}

impl ListKind {
    /// HTML wrapper tag.
    #[inline]
    pub fn tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "ul",
            ListKind::Ordered => "ol",
        }
    }
}

/// Open list levels, outermost first.
#[derive(Debug, Default, Clone)]
pub struct ListStack {
    open: SmallVec<[ListKind; 8]>,
}

impl ListStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current nesting depth.
    #[inline]
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    /// Open list kinds, outermost first.
    pub fn kinds(&self) -> &[ListKind] {
        &self.open
    }

    /// Write one list item, adjusting the open levels first.
    ///
    /// `indent` is the item's leading whitespace in columns; `content` is
    /// already rendered inline HTML.
    pub fn push_item(
        &mut self,
        kind: ListKind,
        indent: usize,
        content: &str,
        out: &mut HtmlWriter,
    ) {
        let level = indent / INDENT_WIDTH;

        while self.open.len() > level + 1 {
            self.close_one(out);
        }

        if self.open.len() <= level {
            self.open.push(kind);
            out.open_tag(kind.tag());
        }

        out.list_item(content);
    }

    /// Close every open level, innermost first.
    pub fn close_all(&mut self, out: &mut HtmlWriter) {
        while !self.open.is_empty() {
            self.close_one(out);
        }
    }

    fn close_one(&mut self, out: &mut HtmlWriter) {
        if let Some(kind) = self.open.pop() {
            out.close_tag(kind.tag());
        }
    }
}
