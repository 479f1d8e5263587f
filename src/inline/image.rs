//! Image extraction.
//!
//! Images are recognised on the raw source text before anything else,
//! so that alt text and paths are never seen by later passes.

use memchr::memchr;

use super::{Unit, push_chars};
use crate::escape::escape_html_into;

/// Relative prefix of the shared asset directory.
pub const IMAGE_ASSET_PREFIX: &str = "images/";

/// Re-root a path in the shared asset directory one level up.
///
/// Documents are written one directory below the asset root, so
/// `images/x.png` becomes `../images/x.png`. Other paths are unchanged.
pub fn rebase_image_path(path: &str) -> String {
    if path.starts_with(IMAGE_ASSET_PREFIX) {
        format!("../{path}")
    } else {
        path.to_owned()
    }
}

/// A parsed `![alt](src)` construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ImageSpan<'a> {
    alt: &'a str,
    src: &'a str,
    /// Byte offset just past the closing `)`.
    end: usize,
}

/// Try to parse an image starting at `start` (which holds `!`).
///
/// Alt text runs to the first `]` and may be empty; the path runs to the
/// first `)` and may not.
fn parse_image(text: &str, start: usize) -> Option<ImageSpan<'_>> {
    let bytes = text.as_bytes();
    if bytes.get(start + 1) != Some(&b'[') {
        return None;
    }
    let alt_start = start + 2;
    let alt_end = alt_start + memchr(b']', &bytes[alt_start..])?;
    if bytes.get(alt_end + 1) != Some(&b'(') {
        return None;
    }
    let src_start = alt_end + 2;
    let src_end = src_start + memchr(b')', &bytes[src_start..])?;
    if src_end == src_start {
        return None;
    }
    Some(ImageSpan {
        alt: &text[alt_start..alt_end],
        src: &text[src_start..src_end],
        end: src_end + 1,
    })
}

fn render_image(image: &ImageSpan<'_>, rebase: bool) -> String {
    let src = if rebase {
        rebase_image_path(image.src)
    } else {
        image.src.to_owned()
    };
    let mut html = String::with_capacity(image.src.len() + image.alt.len() + 64);
    html.push_str("<img src=\"");
    escape_html_into(&mut html, &src);
    html.push_str("\" alt=\"");
    escape_html_into(&mut html, image.alt);
    html.push_str("\" class=\"img-responsive guide-image\">");
    html
}

/// Split source text into units, rendering every image as opaque markup.
pub(super) fn extract_images(text: &str, rebase: bool) -> Vec<Unit> {
    let bytes = text.as_bytes();
    let mut units = Vec::with_capacity(text.len());
    let mut copied = 0;
    let mut pos = 0;

    while let Some(offset) = memchr(b'!', &bytes[pos..]) {
        let start = pos + offset;
        match parse_image(text, start) {
            Some(image) => {
                push_chars(&mut units, &text[copied..start]);
                units.push(Unit::Markup(render_image(&image, rebase).into()));
                pos = image.end;
                copied = image.end;
            }
            None => pos = start + 1,
        }
    }

    push_chars(&mut units, &text[copied..]);
    units
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rebase_image_path() {
        assert_eq!(rebase_image_path("images/x.png"), "../images/x.png");
        assert_eq!(rebase_image_path("img/x.png"), "img/x.png");
        assert_eq!(rebase_image_path("https://cdn/x.png"), "https://cdn/x.png");
        assert_eq!(rebase_image_path("./images/x.png"), "./images/x.png");
    }

    #[test]
    fn test_parse_image() {
        let image = parse_image("![alt](a.png) tail", 0).unwrap();
        assert_eq!(image.alt, "alt");
        assert_eq!(image.src, "a.png");
        assert_eq!(image.end, 13);
    }

    #[test]
    fn test_parse_image_empty_alt() {
        let image = parse_image("![](a.png)", 0).unwrap();
        assert_eq!(image.alt, "");
        assert_eq!(image.src, "a.png");
    }

    #[test]
    fn test_parse_image_rejects() {
        assert!(parse_image("!alt", 0).is_none());
        assert!(parse_image("![alt]", 0).is_none());
        assert!(parse_image("![alt] (a.png)", 0).is_none());
        assert!(parse_image("![alt]()", 0).is_none());
        assert!(parse_image("![alt](a.png", 0).is_none());
    }

    #[test]
    fn test_extract_images_units() {
        let units = extract_images("a ![x](images/y.png)!", true);
        assert_eq!(units.len(), 4);
        assert_eq!(units[0], Unit::Char('a'));
        assert_eq!(units[1], Unit::Char(' '));
        assert_eq!(
            units[2],
            Unit::Markup(
                "<img src=\"../images/y.png\" alt=\"x\" class=\"img-responsive guide-image\">".into()
            )
        );
        assert_eq!(units[3], Unit::Char('!'));
    }

    #[test]
    fn test_alt_is_attribute_escaped() {
        let units = extract_images("![\"quoted\" & <b>](p.png)", false);
        assert_eq!(
            units,
            vec![Unit::Markup(
                "<img src=\"p.png\" alt=\"&quot;quoted&quot; &amp; &lt;b&gt;\" class=\"img-responsive guide-image\">".into()
            )]
        );
    }
}
