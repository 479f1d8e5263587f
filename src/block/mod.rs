//! Block-level conversion.
//!
//! The block layer is line-oriented and handles:
//! - Fenced code blocks
//! - ATX headings
//! - Horizontal rules
//! - Blockquotes
//! - Nested lists
//! - Pipe tables
//! - Paragraphs

pub mod classify;
pub mod list;
mod parser;
pub mod table;

pub use classify::{LineKind, classify};
pub use list::{ListKind, ListStack};
pub use parser::Converter;
pub use table::{TableRow, TableState};

use crate::heading_id::HeadingIds;

/// Mutable state of one conversion pass.
///
/// Created fresh for each document and dropped with its [`Converter`].
#[derive(Debug, Default, Clone)]
pub struct ConversionState {
    /// Open list levels.
    pub list_stack: ListStack,
    /// Between an opening and a closing fence.
    pub in_code_block: bool,
    /// Open table and pending header row.
    pub table: TableState,
    /// Heading ids handed out so far.
    pub used_heading_ids: HeadingIds,
}

impl ConversionState {
    pub fn new() -> Self {
        Self::default()
    }
}
