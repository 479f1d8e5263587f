//! Code span resolution.
//!
//! A code span is a single backtick, at least one non-backtick character,
//! and the next backtick. Spans never reach across markup already in the
//! stream (images), and their content is escaped right away.

use super::Unit;
use crate::escape::escape_char_into;

/// Find the closing backtick for an opener at `open`.
///
/// Returns `None` when the next backtick directly follows the opener or
/// when markup interrupts the span.
fn find_closer(units: &[Unit], open: usize) -> Option<usize> {
    for (offset, unit) in units[open + 1..].iter().enumerate() {
        match unit {
            Unit::Char('`') => return (offset > 0).then_some(open + 1 + offset),
            Unit::Char(_) => {}
            Unit::Markup(_) => return None,
        }
    }
    None
}

fn render_code(content: &[Unit]) -> String {
    let mut html = String::with_capacity(content.len() + 13);
    html.push_str("<code>");
    for c in content.iter().filter_map(Unit::as_char) {
        escape_char_into(&mut html, c);
    }
    html.push_str("</code>");
    html
}

/// Replace every code span with opaque `<code>` markup.
pub(super) fn extract_code_spans(units: Vec<Unit>) -> Vec<Unit> {
    if !units.iter().any(|u| u.is_char('`')) {
        return units;
    }

    let mut out = Vec::with_capacity(units.len());
    let mut i = 0;
    while i < units.len() {
        if units[i].is_char('`') {
            if let Some(close) = find_closer(&units, i) {
                out.push(Unit::Markup(render_code(&units[i + 1..close]).into()));
                i = close + 1;
                continue;
            }
        }
        out.push(units[i].clone());
        i += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inline::push_chars;

    fn chars(text: &str) -> Vec<Unit> {
        let mut units = Vec::new();
        push_chars(&mut units, text);
        units
    }

    fn markup(html: &'static str) -> Unit {
        Unit::Markup(html.into())
    }

    #[test]
    fn test_simple_span() {
        let units = extract_code_spans(chars("`x`"));
        assert_eq!(units, vec![markup("<code>x</code>")]);
    }

    #[test]
    fn test_span_in_text() {
        let units = extract_code_spans(chars("a `b` c"));
        assert_eq!(units.len(), 5);
        assert_eq!(units[2], markup("<code>b</code>"));
    }

    #[test]
    fn test_empty_span_shifts_opener() {
        // "``" cannot open, so the second backtick pairs with the third.
        let units = extract_code_spans(chars("``x`"));
        assert_eq!(units, vec![Unit::Char('`'), markup("<code>x</code>")]);
    }

    #[test]
    fn test_unclosed_backtick() {
        let units = extract_code_spans(chars("a `b"));
        assert_eq!(units, chars("a `b"));
    }

    #[test]
    fn test_markup_interrupts_span() {
        let mut units = chars("`a");
        units.push(markup("<img>"));
        units.extend(chars("b`"));
        let expected = units.clone();
        assert_eq!(extract_code_spans(units), expected);
    }

    #[test]
    fn test_content_escaped() {
        let units = extract_code_spans(chars("`a<b & 'c'`"));
        assert_eq!(units, vec![markup("<code>a&lt;b &amp; &#39;c&#39;</code>")]);
    }

    #[test]
    fn test_multiple_spans() {
        let units = extract_code_spans(chars("`a` and `b`"));
        assert_eq!(units[0], markup("<code>a</code>"));
        assert_eq!(units[units.len() - 1], markup("<code>b</code>"));
    }
}
