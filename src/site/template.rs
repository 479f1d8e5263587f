//! Page template for converted guides.
//!
//! The page shell lives in `page.html`. Asset, include and breadcrumb
//! references are written relative to the output root and prefixed with
//! one `../` per directory the page sits below that root.

use std::path::{Component, Path};

use crate::escape::escape_html;

const PAGE_TEMPLATE: &str = include_str!("page.html");
const CONTENT_SLOT: &str = "{{content}}";

/// `../` repeated once per directory level of `output_relative`.
pub fn path_prefix(output_relative: &Path) -> String {
    let depth = output_relative
        .components()
        .filter(|c| matches!(c, Component::Normal(_)))
        .count()
        .saturating_sub(1);
    "../".repeat(depth)
}

/// Data for rendering one page.
#[derive(Debug, Clone, Copy)]
pub struct PageData<'a> {
    pub title: &'a str,
    pub site_name: &'a str,
    /// Output path relative to the output root.
    pub output_relative: &'a Path,
    /// HTML fragment.
    pub content: &'a str,
}

/// Render a complete page around a fragment.
///
/// The fragment is inserted last, so placeholder-like text inside it is
/// left alone.
pub fn render_page(page: &PageData<'_>) -> String {
    let prefix = path_prefix(page.output_relative);
    let title = escape_html(page.title);
    let site_name = escape_html(page.site_name);
    let fill = |part: &str| {
        part.replace("{{title}}", &title)
            .replace("{{site_name}}", &site_name)
            .replace("{{prefix}}", &prefix)
    };

    let (head, tail) = PAGE_TEMPLATE
        .split_once(CONTENT_SLOT)
        .unwrap_or((PAGE_TEMPLATE, ""));

    let head = fill(head);
    let tail = fill(tail);
    let mut html = String::with_capacity(head.len() + page.content.len() + tail.len());
    html.push_str(&head);
    html.push_str(page.content);
    html.push_str(&tail);
    html
}
