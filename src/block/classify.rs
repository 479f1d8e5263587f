//! Line classification.
//!
//! Every line falls into exactly one [`LineKind`]. Inside a code block the
//! only recognised line is the closing fence. Outside, the checks in
//! [`BLOCK_CHECKS`] run in order and the first match wins; anything left
//! over is a paragraph.

use super::list::ListKind;

/// Opening and closing marker of a code block.
pub const FENCE: &str = "```";

/// Category of a single source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Code block delimiter; the rest of the line is ignored.
    Fence,
    /// Raw line inside a code block.
    Code(&'a str),
    /// ATX heading, level 1-6.
    Heading { level: u8, content: &'a str },
    /// `---`, `***`, `___` and mixtures.
    HorizontalRule,
    /// `> quote`
    Blockquote(&'a str),
    /// Bullet or numbered item.
    ListItem {
        kind: ListKind,
        /// Leading whitespace, in characters.
        indent: usize,
        content: &'a str,
    },
    /// Pipe-delimited row.
    TableRow(&'a str),
    Blank,
    Paragraph(&'a str),
}

/// A check tried on a line outside code blocks.
pub type LineCheck = for<'a> fn(&'a str) -> Option<LineKind<'a>>;

/// Block checks in priority order.
pub const BLOCK_CHECKS: [LineCheck; 6] = [
    heading,
    horizontal_rule,
    blockquote,
    list_item,
    table_row,
    blank,
];

/// Classify one line given whether a code block is open.
pub fn classify(line: &str, in_code_block: bool) -> LineKind<'_> {
    if is_fence(line) {
        return LineKind::Fence;
    }
    if in_code_block {
        return LineKind::Code(line);
    }
    BLOCK_CHECKS
        .iter()
        .find_map(|check| check(line))
        .unwrap_or_else(|| LineKind::Paragraph(line.trim()))
}

/// A fence is any line whose trimmed text starts with three backticks.
#[inline]
pub fn is_fence(line: &str) -> bool {
    line.trim_start().starts_with(FENCE)
}

/// `#` x 1-6, whitespace, then non-blank content.
pub fn heading(line: &str) -> Option<LineKind<'_>> {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    if !(1..=6).contains(&hashes) {
        return None;
    }
    let rest = &line[hashes..];
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let content = rest.trim();
    if content.is_empty() {
        return None;
    }
    Some(LineKind::Heading {
        level: hashes as u8,
        content,
    })
}

/// Three or more of `-`, `*`, `_` and nothing else.
pub fn horizontal_rule(line: &str) -> Option<LineKind<'_>> {
    let trimmed = line.trim();
    let is_rule = trimmed.len() >= 3 && trimmed.bytes().all(|b| matches!(b, b'-' | b'*' | b'_'));
    is_rule.then_some(LineKind::HorizontalRule)
}

/// `>` at the very start of the line.
pub fn blockquote(line: &str) -> Option<LineKind<'_>> {
    line.strip_prefix('>')
        .map(|content| LineKind::Blockquote(content.trim()))
}

/// Leading whitespace, a bullet (`*`, `-`, `+`) or `digits.`, whitespace,
/// then non-blank content.
pub fn list_item(line: &str) -> Option<LineKind<'_>> {
    let body = line.trim_start();
    let indent = line[..line.len() - body.len()].chars().count();

    let (kind, marker_len) = match body.as_bytes().first().copied()? {
        b'*' | b'-' | b'+' => (ListKind::Unordered, 1),
        b'0'..=b'9' => {
            let digits = body.bytes().take_while(u8::is_ascii_digit).count();
            if body.as_bytes().get(digits) != Some(&b'.') {
                return None;
            }
            (ListKind::Ordered, digits + 1)
        }
        _ => return None,
    };

    let rest = &body[marker_len..];
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let content = rest.trim();
    if content.is_empty() {
        // A bare marker closes open blocks and renders nothing.
        return Some(LineKind::Blank);
    }
    Some(LineKind::ListItem {
        kind,
        indent,
        content,
    })
}

/// Trimmed line starting with `|`.
pub fn table_row(line: &str) -> Option<LineKind<'_>> {
    let trimmed = line.trim();
    trimmed
        .starts_with('|')
        .then_some(LineKind::TableRow(trimmed))
}

pub fn blank(line: &str) -> Option<LineKind<'_>> {
    line.trim().is_empty().then_some(LineKind::Blank)
}
