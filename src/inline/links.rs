//! Link conversion.
//!
//! Runs on the rendered inline HTML, after every other pass. `[text](url)`:
//! the text runs to the first `]` and must not be empty, `(` must follow
//! immediately, and the url runs to the first `)` and must not be empty.
//!
//! Both parts are copied verbatim. They are already escaped, and may hold
//! markup produced by earlier passes, so a `]` inside a code span ends the
//! text and `_` pairs inside a url have already become `<em>`.

use memchr::memchr;

/// Byte offsets of a `[text](url)` match starting at `open`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LinkMatch {
    text_end: usize,
    close: usize,
}

fn match_link(html: &[u8], open: usize) -> Option<LinkMatch> {
    let text_start = open + 1;
    let text_end = text_start + memchr(b']', &html[text_start..])?;
    if text_end == text_start || html.get(text_end + 1) != Some(&b'(') {
        return None;
    }

    let url_start = text_end + 2;
    let close = url_start + memchr(b')', &html[url_start..])?;
    (close > url_start).then_some(LinkMatch { text_end, close })
}

/// Replace link syntax in rendered HTML with anchor tags.
pub(super) fn convert_links(html: String) -> String {
    let bytes = html.as_bytes();
    let Some(first) = memchr(b'[', bytes) else {
        return html;
    };

    let mut out = String::with_capacity(html.len() + 16);
    out.push_str(&html[..first]);
    let mut pos = first;
    while let Some(offset) = memchr(b'[', &bytes[pos..]) {
        let open = pos + offset;
        out.push_str(&html[pos..open]);
        match match_link(bytes, open) {
            Some(link) => {
                out.push_str("<a href=\"");
                out.push_str(&html[link.text_end + 2..link.close]);
                out.push_str("\">");
                out.push_str(&html[open + 1..link.text_end]);
                out.push_str("</a>");
                pos = link.close + 1;
            }
            None => {
                out.push('[');
                pos = open + 1;
            }
        }
    }
    out.push_str(&html[pos..]);
    out
}
