//! Section representation for tree-sitter parsed documents.
//!
//! A section is one structural header together with the body text that follows it up to the
//! next structural header. Sections keep their document order and byte coordinates so the body
//! can be sliced back out of the source for keyword and readability inspection.

use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// Header-delimited division of a document.
pub struct Section {
    /// Section heading text without markup symbols.
    pub title: String,
    /// Nesting depth in the document hierarchy (1 for top-level).
    pub level: usize,
    /// Whitespace-separated tokens in the section body, excluding the header line.
    pub word_count: usize,
    /// Position of this section in document order, starting at 0.
    pub order_index: usize,
    /// Line of the header (1-indexed).
    pub line_start: usize,
    /// Byte offset where section content begins.
    #[serde(skip)]
    pub byte_start: usize,
    /// Byte offset where the next section begins or the file ends.
    #[serde(skip)]
    pub byte_end: usize,
}

impl Section {
    /// Body text of this section within `source`.
    #[must_use]
    pub fn body<'src>(&self, source: &'src str) -> &'src str {
        source.get(self.byte_start..self.byte_end).unwrap_or_default()
    }

    /// Whether the title names an appendix-style section.
    #[must_use]
    pub fn is_appendix(&self) -> bool {
        self.title.to_lowercase().contains("appendix")
    }
}
