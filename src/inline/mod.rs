//! Inline formatter.
//!
//! Inline content is held as a stream of [`Unit`]s: plain characters that
//! are still open to interpretation, and opaque markup that later passes
//! cannot look into. Passes run in a fixed precedence:
//! 1. Images: rendered to `<img>` straight from the source text
//! 2. Code spans: content escaped, parked as markup
//! 3. Emphasis: `**` / `__` strong, then `*` / `_` em
//!
//! Characters are HTML-escaped exactly once, when the stream is rendered.
//! Links are converted last, on the rendered HTML, so link text and url
//! carry whatever markup the earlier passes produced.

mod code_span;
mod emphasis;
mod image;
mod links;

use std::borrow::Cow;

use crate::Options;
use crate::escape;

pub use image::{IMAGE_ASSET_PREFIX, rebase_image_path};

/// One element of the inline stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Unit {
    /// A source character, escaped on output.
    Char(char),
    /// Rendered HTML, emitted verbatim.
    Markup(Cow<'static, str>),
}

impl Unit {
    #[inline]
    pub(crate) fn is_char(&self, c: char) -> bool {
        matches!(self, Unit::Char(ch) if *ch == c)
    }

    #[inline]
    pub(crate) fn as_char(&self) -> Option<char> {
        match self {
            Unit::Char(c) => Some(*c),
            Unit::Markup(_) => None,
        }
    }
}

/// Push every character of `text` as an open unit.
#[inline]
pub(crate) fn push_chars(units: &mut Vec<Unit>, text: &str) {
    units.extend(text.chars().map(Unit::Char));
}

/// Convert the text content of one block element into HTML.
///
/// # Example
/// ```
/// use guidemark::{format_inline, Options};
///
/// let html = format_inline("Run `make <all>` **now**", &Options::default());
/// assert_eq!(html, "Run <code>make &lt;all&gt;</code> <strong>now</strong>");
/// ```
pub fn format_inline(text: &str, options: &Options) -> String {
    let units = image::extract_images(text, options.rebase_images);
    let units = code_span::extract_code_spans(units);
    let units = emphasis::apply_emphasis(units);
    links::convert_links(render_units(&units, text.len()))
}

fn render_units(units: &[Unit], hint: usize) -> String {
    let mut out = String::with_capacity(hint + hint / 4);
    for unit in units {
        match unit {
            Unit::Char(c) => escape::escape_char_into(&mut out, *c),
            Unit::Markup(html) => out.push_str(html),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(text: &str) -> String {
        format_inline(text, &Options::default())
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(fmt("Hello world"), "Hello world");
        assert_eq!(fmt(""), "");
    }

    #[test]
    fn test_escaping_once() {
        assert_eq!(fmt("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
        assert_eq!(fmt("&amp;"), "&amp;amp;");
    }

    #[test]
    fn test_strong_and_em() {
        assert_eq!(fmt("**bold** and *em*"), "<strong>bold</strong> and <em>em</em>");
        assert_eq!(fmt("__bold__ and _em_"), "<strong>bold</strong> and <em>em</em>");
    }

    #[test]
    fn test_code_protects_emphasis() {
        assert_eq!(fmt("`a*b*c`"), "<code>a*b*c</code>");
        assert_eq!(fmt("`**x**` **y**"), "<code>**x**</code> <strong>y</strong>");
    }

    #[test]
    fn test_code_escapes_content() {
        assert_eq!(fmt("`<div class=\"x\">`"), "<code>&lt;div class=&quot;x&quot;&gt;</code>");
    }

    #[test]
    fn test_strong_around_code() {
        assert_eq!(
            fmt("**use `x` now**"),
            "<strong>use <code>x</code> now</strong>"
        );
    }

    #[test]
    fn test_image_path_not_mangled_by_emphasis() {
        assert_eq!(
            fmt("_see_ ![a_b](images/my_shot_1.png)"),
            "<em>see</em> <img src=\"../images/my_shot_1.png\" alt=\"a_b\" class=\"img-responsive guide-image\">"
        );
    }

    #[test]
    fn test_link_with_emphasis_text() {
        assert_eq!(
            fmt("[**API** docs](api.html)"),
            "<a href=\"api.html\"><strong>API</strong> docs</a>"
        );
    }

    #[test]
    fn test_link_url_underscores_are_emphasized() {
        // Links run after emphasis, so underscore pairs in a url pair up too.
        assert_eq!(
            fmt("[guide](user_guide/getting_started.html)"),
            "<a href=\"user<em>guide/getting</em>started.html\">guide</a>"
        );
        assert_eq!(fmt("[guide](user_guide.html)"), "<a href=\"user_guide.html\">guide</a>");
    }

    #[test]
    fn test_code_span_bracket_blocks_link() {
        assert_eq!(fmt("[a `]` b](u)"), "[a <code>]</code> b](u)");
    }

    #[test]
    fn test_emphasis_spanning_link_syntax() {
        assert_eq!(fmt("*[a](b)*"), "<em><a href=\"b\">a</a></em>");
    }

    #[test]
    fn test_image_inside_link() {
        assert_eq!(
            fmt("[![logo](images/logo.png)](https://example.com)"),
            "<a href=\"https://example.com\"><img src=\"../images/logo.png\" alt=\"logo\" class=\"img-responsive guide-image\"></a>"
        );
    }

    #[test]
    fn test_link_href_escaped() {
        assert_eq!(
            fmt("[q](search?a=1&b=2)"),
            "<a href=\"search?a=1&amp;b=2\">q</a>"
        );
    }

    #[test]
    fn test_snake_case_is_emphasized() {
        // Single underscores pair up regardless of word boundaries.
        assert_eq!(fmt("snake_case_name"), "snake<em>case</em>name");
    }

    #[test]
    fn test_triple_asterisks() {
        assert_eq!(fmt("***a***"), "<strong><em>a</strong></em>");
    }

    #[test]
    fn test_unmatched_markers_stay_literal() {
        assert_eq!(fmt("2 * 3 = 6"), "2 * 3 = 6");
        assert_eq!(fmt("a ** b"), "a ** b");
        assert_eq!(fmt("`open"), "`open");
        assert_eq!(fmt("[text](no close"), "[text](no close");
    }

    #[test]
    fn test_rebase_disabled() {
        let options = Options {
            rebase_images: false,
            ..Options::default()
        };
        assert_eq!(
            format_inline("![x](images/a.png)", &options),
            "<img src=\"images/a.png\" alt=\"x\" class=\"img-responsive guide-image\">"
        );
    }
}
