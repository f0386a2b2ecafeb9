//! Metrics collector: quantitative facts derived from an outline.

use crate::outline::Outline;
use crate::section::Section;
use crate::thresholds::Thresholds;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
/// Structural and lexical measurements of one document.
pub struct Metrics {
    /// Body tokens in the document: preamble plus all sections.
    pub total_words: usize,
    /// Number of structural sections.
    pub total_sections: usize,
    /// Word count of the longest section.
    pub max_section_words: usize,
    /// Mean section word count, rounded to one decimal.
    pub avg_section_words: f64,
    /// Deepest header level present, 0 without headers.
    pub hierarchy_depth: usize,
    /// Whether at least one complete backtick-fenced block exists.
    pub has_code_blocks: bool,
    /// Whether any section title mentions an appendix.
    pub has_appendices: bool,
    /// Tokens before the first header.
    pub preamble_words: usize,
    /// Number of complete fenced code blocks.
    pub code_blocks: usize,
    /// Tokens inside fenced code blocks.
    pub code_words: usize,
    /// Sections longer than the section word limit.
    pub oversized_sections: usize,
    /// Headers that descend more than one level below their predecessor.
    pub skipped_levels: usize,
    /// Number of list items.
    pub list_items: usize,
}

impl Metrics {
    /// Measure a parsed document.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn collect(outline: &Outline<'_>, thresholds: &Thresholds) -> Self {
        let sections = &outline.sections;
        let section_words: usize = sections.iter().map(|s| s.word_count).sum();
        let avg_section_words = if sections.is_empty() {
            0.0
        } else {
            round1(section_words as f64 / sections.len() as f64)
        };

        Self {
            total_words: outline.total_words(),
            total_sections: sections.len(),
            max_section_words: sections.iter().map(|s| s.word_count).max().unwrap_or(0),
            avg_section_words,
            hierarchy_depth: sections.iter().map(|s| s.level).max().unwrap_or(0),
            has_code_blocks: outline.code_blocks.iter().any(|b| b.complete),
            has_appendices: sections.iter().any(Section::is_appendix),
            preamble_words: outline.preamble_words,
            code_blocks: outline.code_blocks.iter().filter(|b| b.complete).count(),
            code_words: outline.code_words(),
            oversized_sections: sections
                .iter()
                .filter(|s| s.word_count > thresholds.max_section_words)
                .count(),
            skipped_levels: skipped_levels(sections),
            list_items: outline.list_items,
        }
    }

    /// Body tokens outside fenced code blocks.
    #[must_use]
    pub fn prose_words(&self) -> usize {
        self.total_words.saturating_sub(self.code_words)
    }
}

/// Counts headers that jump more than one level deeper than the header before them.
fn skipped_levels(sections: &[Section]) -> usize {
    sections
        .windows(2)
        .filter(|pair| pair[1].level > pair[0].level + 1)
        .count()
}

/// Rounds to one decimal place.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
#[path = "tests/metrics.rs"]
mod tests;
