//! guidemark: line-oriented Markdown to HTML converter for user guide sites
//!
//! The engine turns one document into an HTML fragment in a single pass
//! over its lines. The [`site`] module builds a whole guide tree on top of
//! it: page template, `index.json` manifest and a "coming soon" policy.
//!
//! # Design Principles
//! - One line, one block: no lookahead, no backtracking
//! - No regex: byte and char scanning with `memchr`
//! - Per-document state owned by a [`Converter`] that is consumed on use
//! - Escaping happens exactly once, when inline units are rendered

pub mod block;
pub mod escape;
pub mod heading_id;
pub mod inline;
pub mod metadata;
pub mod render;
pub mod site;

// Re-export primary types
pub use block::{ConversionState, Converter};
pub use inline::format_inline;
pub use metadata::DocumentMeta;
pub use render::HtmlWriter;

/// Conversion options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Give every heading a unique `id` attribute.
    pub heading_ids: bool,
    /// Prefix `images/...` sources with `../` so pages one level below the
    /// site root find the shared image directory.
    pub rebase_images: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            heading_ids: true,
            rebase_images: true,
        }
    }
}

/// Convert Markdown to an HTML fragment.
///
/// This is the primary API for simple use cases.
///
/// # Example
/// ```
/// let html = guidemark::to_html("# Hello\n\nWorld");
/// assert_eq!(html, "<h1 id=\"hello\">Hello</h1>\n<p>World</p>");
/// ```
pub fn to_html(input: &str) -> String {
    to_html_with_options(input, &Options::default())
}

/// Convert Markdown to an HTML fragment with options.
pub fn to_html_with_options(input: &str, options: &Options) -> String {
    Converter::new(*options).convert(input)
}

/// A converted document with its metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    /// HTML fragment.
    pub html: String,
    pub meta: DocumentMeta,
}

/// Convert a document and derive its title, slug and description.
///
/// `stem` is the source file name without extension.
///
/// # Example
/// ```
/// use guidemark::{render_document, Options};
///
/// let source = "# Intro\n\nWelcome **all**.";
/// let doc = render_document("getting_started", source, &Options::default());
/// assert_eq!(doc.meta.title, "Getting Started");
/// assert_eq!(doc.meta.slug, "getting_started");
/// assert_eq!(doc.meta.description, "Welcome all.");
/// ```
pub fn render_document(stem: &str, source: &str, options: &Options) -> RenderedDocument {
    RenderedDocument {
        html: to_html_with_options(source, options),
        meta: DocumentMeta::from_source(stem, source),
    }
}
