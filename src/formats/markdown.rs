//! Markdown format implementation using tree-sitter-md.
//!
//! This module provides tree-sitter queries for parsing markdown documents and extracting
//! section structure from ATX-style headings (# syntax). The block grammar already tracks
//! fence state, so a `#` line inside a fenced code block never surfaces as a heading.

use crate::formats::Format;
use tree_sitter::Node;

/// Tree-sitter queries for ATX-style markdown headings (# syntax).
pub struct MarkdownFormat;

/// Containers whose headings are body text rather than document structure.
const NESTING_CONTAINERS: [&str; 2] = ["block_quote", "list_item"];

impl Format for MarkdownFormat {
    fn language(&self) -> tree_sitter::Language {
        tree_sitter_md::LANGUAGE.into()
    }

    fn section_query(&self) -> &'static str {
        "(atx_heading) @heading"
    }

    fn code_block_query(&self) -> &'static str {
        "(fenced_code_block) @block"
    }

    fn list_item_query(&self) -> &'static str {
        "(list_item) @item"
    }

    fn heading_level(&self, heading: Node<'_>) -> Option<usize> {
        // Headings quoted or nested in list items are body text, as they are for a line scanner.
        let mut ancestor = heading.parent();
        while let Some(node) = ancestor {
            if NESTING_CONTAINERS.contains(&node.kind()) {
                return None;
            }
            ancestor = node.parent();
        }
        let mut cursor = heading.walk();
        let level = heading
            .children(&mut cursor)
            .find_map(|child| marker_level(child.kind()));
        level
    }

    fn heading_title(&self, heading: Node<'_>, source: &str) -> Option<String> {
        let mut cursor = heading.walk();
        let content = heading.child_by_field_name("heading_content").or_else(|| {
            heading
                .children(&mut cursor)
                .find(|child| child.kind() == "inline")
        })?;
        let text = content.utf8_text(source.as_bytes()).ok()?;
        let title = strip_closing_sequence(text.trim());
        (!title.is_empty()).then(|| title.to_string())
    }

    fn is_complete_code_block(&self, block: Node<'_>, source: &str) -> bool {
        let mut cursor = block.walk();
        let backtick_fences = block
            .children(&mut cursor)
            .filter(|child| child.kind() == "fenced_code_block_delimiter")
            .filter(|child| {
                child
                    .utf8_text(source.as_bytes())
                    .is_ok_and(|fence| fence.trim_start().starts_with("```"))
            })
            .count();
        backtick_fences >= 2
    }
}

/// Maps `atx_h3_marker` to 3 and so on.
fn marker_level(kind: &str) -> Option<usize> {
    kind.strip_prefix("atx_h")?
        .strip_suffix("_marker")?
        .parse()
        .ok()
        .filter(|level| (1..=6).contains(level))
}

/// Removes an optional closing run of `#` from a heading, as in `## Title ##`.
fn strip_closing_sequence(title: &str) -> &str {
    let without = title.trim_end_matches('#');
    if without.len() == title.len() {
        return title;
    }
    if without.is_empty() {
        return without;
    }
    if without.ends_with([' ', '\t']) {
        without.trim_end()
    } else {
        title
    }
}
