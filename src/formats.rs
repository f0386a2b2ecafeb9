//! Format trait and implementations for different document types.
//!
//! This module defines the `Format` trait which abstracts over document formats by providing
//! the tree-sitter grammar plus the queries that locate the structural features the analyzer
//! measures: headings, fenced code blocks and list items.

pub mod markdown;

/// Grammar and structural queries for one document format.
pub trait Format {
    /// Grammar used to parse documents of this format.
    fn language(&self) -> tree_sitter::Language;
    /// Query capturing every heading node.
    fn section_query(&self) -> &str;
    /// Query capturing every fenced code block node.
    fn code_block_query(&self) -> &str;
    /// Query capturing every list item node.
    fn list_item_query(&self) -> &str;
    /// Header depth of a captured heading, or `None` if the node is not a structural header.
    fn heading_level(&self, heading: tree_sitter::Node<'_>) -> Option<usize>;
    /// Title text of a captured heading, or `None` if it has no title.
    fn heading_title(&self, heading: tree_sitter::Node<'_>, source: &str) -> Option<String>;
    /// Whether a captured code block has both opening and closing backtick fences.
    fn is_complete_code_block(&self, block: tree_sitter::Node<'_>, source: &str) -> bool;
}
