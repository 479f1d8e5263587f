//! HTML escaping utilities.
//!
//! Fast-path optimized: scans for first escapable character,
//! then bulk-copies segments between escapes.
//!
//! Text content and attribute values use the same five-character set:
//! `&`, `<`, `>`, `"` and `'`.

use memchr::{memchr2, memchr3};

/// Lookup table for escapable bytes.
/// Index by byte value, true if needs escaping.
const ESCAPE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    table[b'<' as usize] = true;
    table[b'>' as usize] = true;
    table[b'&' as usize] = true;
    table[b'"' as usize] = true;
    table[b'\'' as usize] = true;
    table
};

/// Entity for an escapable byte.
#[inline]
fn entity(b: u8) -> Option<&'static str> {
    match b {
        b'<' => Some("&lt;"),
        b'>' => Some("&gt;"),
        b'&' => Some("&amp;"),
        b'"' => Some("&quot;"),
        b'\'' => Some("&#39;"),
        _ => None,
    }
}

/// Escape HTML text into output buffer.
///
/// # Example
/// ```
/// use guidemark::escape::escape_html_into;
///
/// let mut out = String::new();
/// escape_html_into(&mut out, "<b>\"Tom\" & 'Jerry'</b>");
/// assert_eq!(out, "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;");
/// ```
#[inline]
pub fn escape_html_into(out: &mut String, input: &str) {
    if input.is_empty() {
        return;
    }

    let bytes = input.as_bytes();
    let mut pos = match first_escape(bytes) {
        Some(p) => p,
        None => {
            out.push_str(input);
            return;
        }
    };

    if pos > 0 {
        out.push_str(&input[..pos]);
    }

    // Escapable bytes are ASCII, so every cut below lands on a char boundary.
    while pos < bytes.len() {
        let scan_start = pos;
        while pos < bytes.len() && !ESCAPE_TABLE[bytes[pos] as usize] {
            pos += 1;
        }

        if pos > scan_start {
            out.push_str(&input[scan_start..pos]);
        }

        if pos < bytes.len() {
            if let Some(escaped) = entity(bytes[pos]) {
                out.push_str(escaped);
            }
            pos += 1;
        }
    }
}

/// Escape a single character into output buffer.
#[inline]
pub fn escape_char_into(out: &mut String, c: char) {
    match u8::try_from(c).ok().and_then(entity) {
        Some(escaped) => out.push_str(escaped),
        None => out.push(c),
    }
}

/// Escape and return as a new String.
///
/// Prefer `escape_html_into` to reuse buffers.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + input.len() / 8);
    escape_html_into(&mut out, input);
    out
}

/// Check if a string needs any escaping.
#[inline]
pub fn needs_escape(input: &str) -> bool {
    first_escape(input.as_bytes()).is_some()
}

#[inline]
fn first_escape(input: &[u8]) -> Option<usize> {
    let a = memchr3(b'<', b'>', b'&', input);
    let b = memchr2(b'"', b'\'', input);
    min_opt(a, b)
}

#[inline]
fn min_opt(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b),
        (None, None) => None,
    }
}
