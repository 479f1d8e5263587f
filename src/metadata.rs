//! Document metadata: display title, slug and short description.
//!
//! Everything here is derived from the file stem and the raw source; the
//! converted HTML is not consulted.

use serde::{Deserialize, Serialize};

use crate::block::{LineKind, classify};

/// Metadata of one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMeta {
    /// Display title derived from the file stem.
    pub title: String,
    /// First prose line with markup removed; empty when there is none.
    pub description: String,
    /// File stem, unchanged.
    pub slug: String,
}

impl DocumentMeta {
    /// Derive metadata from a file stem and the document source.
    pub fn from_source(stem: &str, source: &str) -> Self {
        Self {
            title: title_from_stem(stem),
            description: extract_description(source),
            slug: stem.to_owned(),
        }
    }
}

/// `getting_started-guide` → `Getting Started Guide`.
///
/// Underscores and hyphens become spaces. A letter is uppercased when the
/// character before it is not a letter and lowercased otherwise.
pub fn title_from_stem(stem: &str) -> String {
    let mut title = String::with_capacity(stem.len());
    let mut prev_is_letter = false;
    for c in stem.chars() {
        let c = if c == '_' || c == '-' { ' ' } else { c };
        if c.is_alphabetic() {
            if prev_is_letter {
                title.extend(c.to_lowercase());
            } else {
                title.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            title.push(c);
            prev_is_letter = false;
        }
    }
    title
}

/// First prose line of the document with inline markup stripped.
///
/// Lines inside fenced code are skipped, as is every line that opens a
/// heading, list item, table row, blockquote or rule, and image-only
/// lines.
pub fn extract_description(source: &str) -> String {
    let mut in_code_block = false;
    for line in source.lines() {
        match classify(line, in_code_block) {
            LineKind::Fence => in_code_block = !in_code_block,
            LineKind::Paragraph(text) if !text.starts_with('#') && !text.starts_with("![") => {
                return strip_markup(text);
            }
            _ => {}
        }
    }
    String::new()
}

/// Remove bold, italic, code and link markup, keeping the inner text.
pub fn strip_markup(text: &str) -> String {
    let text = unwrap_delimited(text, "**", true);
    let text = unwrap_delimited(&text, "*", true);
    let text = unwrap_delimited(&text, "`", false);
    strip_links(&text)
}

/// Replace `marker content marker` with `content`.
///
/// Content is at least one character and ends at the first closing
/// marker. With `nested` false the content may not hold the marker.
fn unwrap_delimited(text: &str, marker: &str, nested: bool) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find(marker) {
        let after = &rest[start + marker.len()..];
        let end = if nested {
            after
                .chars()
                .next()
                .and_then(|c| after[c.len_utf8()..].find(marker).map(|p| p + c.len_utf8()))
        } else {
            after.find(marker).filter(|&p| p > 0)
        };

        match end {
            Some(end) => {
                out.push_str(&rest[..start]);
                out.push_str(&after[..end]);
                rest = &after[end + marker.len()..];
            }
            None => {
                // Markers are ASCII, so one byte is one character.
                out.push_str(&rest[..=start]);
                rest = &rest[start + 1..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Replace `[text](url)` with `text`.
fn strip_links(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find('[') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match link_parts(after) {
            Some((label, consumed)) => {
                out.push_str(label);
                rest = &after[consumed..];
            }
            None => {
                out.push('[');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

/// Label and consumed length of `text](url)`, given the text after `[`.
fn link_parts(after: &str) -> Option<(&str, usize)> {
    let label_end = after.find(']').filter(|&p| p > 0)?;
    let url = after[label_end + 1..].strip_prefix('(')?;
    let url_end = url.find(')').filter(|&p| p > 0)?;
    Some((&after[..label_end], label_end + 2 + url_end + 1))
}
