//! Property tests for HTML escaping.

use guidemark::escape::escape_html;
use guidemark::{format_inline, to_html, Options};
use proptest::prelude::*;

/// Text without any markup characters the converter interprets.
fn plain_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 <>&\"'.,;:?=/]{0,64}"
}

/// Decode the five entities the converter emits.
fn unescape(html: &str) -> String {
    html.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

proptest! {
    #[test]
    fn escaped_text_has_no_raw_specials(text in plain_text()) {
        let html = format_inline(&text, &Options::default());
        prop_assert!(!html.contains('<'));
        prop_assert!(!html.contains('>'));
        prop_assert!(!html.contains('"'));
        prop_assert!(!html.contains('\''));
    }

    #[test]
    fn escaping_is_reversible(text in plain_text()) {
        let html = format_inline(&text, &Options::default());
        prop_assert_eq!(unescape(&html), text);
    }

    #[test]
    fn inline_matches_plain_escape(text in plain_text()) {
        prop_assert_eq!(format_inline(&text, &Options::default()), escape_html(&text));
    }

    #[test]
    fn code_span_content_escaped_once(text in "[a-z <>&]{1,32}") {
        let html = format_inline(&format!("`{text}`"), &Options::default());
        prop_assert_eq!(html, format!("<code>{}</code>", escape_html(&text)));
    }

    #[test]
    fn code_block_lines_escaped_verbatim(
        lines in prop::collection::vec("[a-z#*_|>` <&-]{0,16}", 0..8)
    ) {
        let lines: Vec<String> = lines
            .into_iter()
            .filter(|l| !l.trim_start().starts_with("```"))
            .collect();
        let input = format!("```\n{}\n```", lines.join("\n"));
        let html = to_html(&input);
        let body: Vec<String> = lines.iter().map(|l| escape_html(l)).collect();
        prop_assert_eq!(html, format!("<pre><code>\n{}\n</code></pre>", body.join("\n")));
    }

    #[test]
    fn never_panics(input in "\\PC{0,200}") {
        let _ = to_html(&input);
    }
}
