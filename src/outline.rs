//! Structure parser: turns raw document text into an ordered outline of sections.
//!
//! The grammar and its queries are prepared once when the parser is built, which is the only
//! step that can fail. Parsing a document is infallible: malformed markup (an unterminated
//! fence, a bare `#`) still yields a best-effort outline.
//!
//! Text before the first header is the preamble. It is not a section, but its words are kept
//! so that `preamble_words` plus every section's `word_count` always equals the document's
//! word total. Header lines are structure, not body text, and are not counted.

use crate::error::Result;
use crate::formats::markdown::MarkdownFormat;
use crate::formats::Format;
use crate::section::Section;
use streaming_iterator::StreamingIterator;
use tracing::warn;
use tree_sitter::{Language, Node, Parser, Query, QueryCursor, Tree};

/// Counts whitespace-separated tokens.
#[must_use]
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// A fenced code block found in the document.
pub struct CodeBlock {
    /// Whether both opening and closing backtick fences are present.
    pub complete: bool,
    /// Tokens inside the block, fences included.
    pub word_count: usize,
    /// Byte offset of the opening fence.
    pub byte_start: usize,
    /// Byte offset just past the block.
    pub byte_end: usize,
}

#[derive(Clone, Debug)]
/// Parsed structure of one document, borrowing the source it was parsed from.
pub struct Outline<'src> {
    source: &'src str,
    /// Structural sections in document order.
    pub sections: Vec<Section>,
    /// Tokens before the first structural header.
    pub preamble_words: usize,
    /// Fenced code blocks in document order, complete or not.
    pub code_blocks: Vec<CodeBlock>,
    /// Number of list items anywhere in the document.
    pub list_items: usize,
}

impl<'src> Outline<'src> {
    /// Outline of a document with no recognisable structure: everything is preamble.
    #[must_use]
    pub fn unstructured(source: &'src str) -> Self {
        Self {
            source,
            sections: Vec::new(),
            preamble_words: count_words(source),
            code_blocks: Vec::new(),
            list_items: 0,
        }
    }

    /// Text this outline was parsed from.
    #[must_use]
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Body tokens across the whole document: preamble plus every section.
    #[must_use]
    pub fn total_words(&self) -> usize {
        self.preamble_words + self.sections.iter().map(|s| s.word_count).sum::<usize>()
    }

    /// Tokens inside fenced code blocks.
    #[must_use]
    pub fn code_words(&self) -> usize {
        self.code_blocks.iter().map(|b| b.word_count).sum()
    }

    /// The document with fenced code blocks cut out, for prose-only heuristics.
    #[must_use]
    pub fn prose(&self) -> String {
        let mut prose = String::with_capacity(self.source.len());
        let mut cursor = 0;
        for block in &self.code_blocks {
            if block.byte_start >= cursor {
                prose.push_str(self.source.get(cursor..block.byte_start).unwrap_or_default());
                prose.push('\n');
                cursor = block.byte_end;
            }
        }
        prose.push_str(self.source.get(cursor..).unwrap_or_default());
        prose
    }

    /// Titles and bodies of the first `count` sections, where orientation material belongs.
    #[must_use]
    pub fn leading_text(&self, count: usize) -> String {
        self.sections
            .iter()
            .take(count)
            .map(|section| format!("{}\n{}", section.title, section.body(self.source)))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Body tokens in the first `count` sections.
    #[must_use]
    pub fn leading_words(&self, count: usize) -> usize {
        self.sections.iter().take(count).map(|s| s.word_count).sum()
    }
}

/// Prepared grammar and queries for extracting outlines.
pub struct OutlineParser {
    format: Box<dyn Format + Send + Sync>,
    language: Language,
    headings: Query,
    code_blocks: Query,
    list_items: Query,
}

impl OutlineParser {
    /// Prepare a markdown outline parser.
    ///
    /// # Errors
    ///
    /// Returns an error if the grammar cannot be loaded or a query fails to compile.
    pub fn markdown() -> Result<Self> {
        Self::new(Box::new(MarkdownFormat))
    }

    /// Prepare a parser for an arbitrary format.
    ///
    /// # Errors
    ///
    /// Returns an error if the grammar cannot be loaded or a query fails to compile.
    pub fn new(format: Box<dyn Format + Send + Sync>) -> Result<Self> {
        let language = format.language();
        Parser::new().set_language(&language)?;
        let headings = Query::new(&language, format.section_query())?;
        let code_blocks = Query::new(&language, format.code_block_query())?;
        let list_items = Query::new(&language, format.list_item_query())?;
        Ok(Self {
            format,
            language,
            headings,
            code_blocks,
            list_items,
        })
    }

    /// Split `source` into sections and collect its structural features.
    #[must_use]
    pub fn parse<'src>(&self, source: &'src str) -> Outline<'src> {
        let Some(tree) = self.tree(source) else {
            warn!("grammar produced no syntax tree; treating document as unstructured");
            return Outline::unstructured(source);
        };
        let root = tree.root_node();

        let headers: Vec<(Node<'_>, usize, String)> = captures(&self.headings, root, source)
            .into_iter()
            .filter_map(|node| {
                let level = self.format.heading_level(node)?;
                let title = self.format.heading_title(node, source)?;
                Some((node, level, title))
            })
            .collect();

        let preamble_end = headers
            .first()
            .map_or(source.len(), |(node, _, _)| node.start_byte());
        let preamble_words = count_words(source.get(..preamble_end).unwrap_or_default());

        let sections = headers
            .iter()
            .enumerate()
            .map(|(order_index, (node, level, title))| {
                let byte_start = node.end_byte();
                let byte_end = headers
                    .get(order_index + 1)
                    .map_or(source.len(), |(next, _, _)| next.start_byte());
                Section {
                    title: title.clone(),
                    level: *level,
                    word_count: count_words(source.get(byte_start..byte_end).unwrap_or_default()),
                    order_index,
                    line_start: node.start_position().row + 1,
                    byte_start,
                    byte_end,
                }
            })
            .collect();

        let code_blocks = captures(&self.code_blocks, root, source)
            .into_iter()
            .map(|node| CodeBlock {
                complete: self.format.is_complete_code_block(node, source),
                word_count: count_words(
                    source
                        .get(node.start_byte()..node.end_byte())
                        .unwrap_or_default(),
                ),
                byte_start: node.start_byte(),
                byte_end: node.end_byte(),
            })
            .collect();

        let list_items = captures(&self.list_items, root, source).len();

        Outline {
            source,
            sections,
            preamble_words,
            code_blocks,
            list_items,
        }
    }

    fn tree(&self, source: &str) -> Option<Tree> {
        let mut parser = Parser::new();
        parser.set_language(&self.language).ok()?;
        parser.parse(source, None)
    }
}

/// Nodes captured by `query` under `root`, in document order.
fn captures<'tree>(query: &Query, root: Node<'tree>, source: &str) -> Vec<Node<'tree>> {
    let mut cursor = QueryCursor::new();
    let mut matches = cursor.matches(query, root, source.as_bytes());
    let mut nodes = Vec::new();
    while let Some(found) = matches.next() {
        nodes.extend(found.captures.iter().map(|capture| capture.node));
    }
    nodes.sort_by_key(|node| (node.start_byte(), node.id()));
    nodes.dedup_by_key(|node| node.id());
    nodes
}

#[cfg(test)]
#[path = "tests/outline.rs"]
mod tests;
