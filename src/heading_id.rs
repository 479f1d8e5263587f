//! Heading anchor ids.
//!
//! Ids are derived from the heading's visible text and are unique within
//! one document: the second "Overview" becomes `overview-1`.

use rustc_hash::FxHashSet;

/// Id used when the heading text has no usable characters.
pub const FALLBACK_ID: &str = "heading";

/// Per-document set of heading ids already handed out.
#[derive(Debug, Default, Clone)]
pub struct HeadingIds {
    used: FxHashSet<String>,
}

impl HeadingIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive a unique id for `text` and record it as used.
    pub fn assign(&mut self, text: &str) -> String {
        let base = base_id(text);
        let id = if self.used.contains(&base) {
            (1..)
                .map(|n| format!("{base}-{n}"))
                .find(|candidate| !self.used.contains(candidate))
                .unwrap_or_default()
        } else {
            base
        };
        self.used.insert(id.clone());
        id
    }

    /// Whether `id` has been handed out.
    pub fn contains(&self, id: &str) -> bool {
        self.used.contains(id)
    }

    pub fn len(&self) -> usize {
        self.used.len()
    }

    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }
}

/// Turn heading text into a URL-safe id, without uniqueness.
///
/// Lowercases, drops everything but word characters, whitespace and
/// hyphens, joins words with single hyphens and trims hyphens at the ends.
pub fn base_id(text: &str) -> String {
    let mut id = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for c in text.chars().flat_map(char::to_lowercase) {
        if c.is_whitespace() || c == '-' {
            pending_hyphen = true;
        } else if c.is_alphanumeric() || c == '_' {
            if pending_hyphen && !id.is_empty() {
                id.push('-');
            }
            pending_hyphen = false;
            id.push(c);
        }
    }

    match id.chars().next() {
        None => FALLBACK_ID.to_owned(),
        Some(first) if !first.is_alphabetic() => format!("{FALLBACK_ID}-{id}"),
        Some(_) => id,
    }
}

/// Visible text of rendered inline HTML: tags removed, entities decoded.
pub fn plain_text(html: &str) -> String {
    let mut stripped = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => stripped.push(c),
            _ => {}
        }
    }
    html_escape::decode_html_entities(&stripped).into_owned()
}
