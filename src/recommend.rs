//! Recommendation generator driven by a declarative rule table.
//!
//! Each [`Rule`] pairs a predicate over the finished measurements with a message builder.
//! Matching rules are ordered by severity, and rules of equal severity keep their table order,
//! so adding or removing a rule never touches the evaluation loop.

use crate::metrics::Metrics;
use crate::scoring::Scores;
use crate::section::Section;
use crate::thresholds::Thresholds;
use serde::Serialize;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
/// How urgently a recommendation should be acted on. Orders most severe first.
pub enum Severity {
    /// Structural problems that undermine the whole document.
    High,
    /// Problems worth fixing in the next revision.
    Medium,
    /// Polish.
    Low,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
/// Quality dimension a recommendation addresses.
pub enum Category {
    /// Headers, nesting and section sizes.
    Structure,
    /// Amount of material.
    Content,
    /// Readability and examples.
    Clarity,
    /// Orientation material.
    Context,
    /// Placement of reference material.
    Organization,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Structure => "STRUCTURE",
            Self::Content => "CONTENT",
            Self::Clarity => "CLARITY",
            Self::Context => "CONTEXT",
            Self::Organization => "ORGANIZATION",
        };
        f.write_str(label)
    }
}

/// Everything a rule may inspect.
pub struct RuleInput<'a> {
    /// Document measurements.
    pub metrics: &'a Metrics,
    /// Rounded sub-scores.
    pub scores: &'a Scores,
    /// Sections in document order.
    pub sections: &'a [Section],
    /// Limits in force for this analysis.
    pub thresholds: &'a Thresholds,
}

/// One entry of the rule table.
pub struct Rule {
    /// Stable identifier.
    pub id: &'static str,
    /// Dimension the rule addresses.
    pub category: Category,
    /// Ordering key among matching rules.
    pub severity: Severity,
    applies: fn(&RuleInput<'_>) -> bool,
    message: fn(&RuleInput<'_>) -> String,
}

impl Rule {
    /// Whether the rule fires for `input`.
    #[must_use]
    pub fn applies(&self, input: &RuleInput<'_>) -> bool {
        (self.applies)(input)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// A fired rule with its rendered advice.
pub struct Recommendation {
    /// Identifier of the rule that fired.
    pub rule: &'static str,
    /// Dimension addressed.
    pub category: Category,
    /// Urgency.
    pub severity: Severity,
    /// Advice text without the category prefix.
    pub message: String,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category, self.message)
    }
}

/// The rule table, in tie-break order.
pub const RULES: &[Rule] = &[
    Rule {
        id: "no-headers",
        category: Category::Structure,
        severity: Severity::High,
        applies: no_headers,
        message: no_headers_message,
    },
    Rule {
        id: "split-long-section",
        category: Category::Structure,
        severity: Severity::High,
        applies: has_long_section,
        message: long_section_message,
    },
    Rule {
        id: "flatten-nesting",
        category: Category::Structure,
        severity: Severity::High,
        applies: too_deep,
        message: too_deep_message,
    },
    Rule {
        id: "expand-content",
        category: Category::Content,
        severity: Severity::High,
        applies: too_short,
        message: too_short_message,
    },
    Rule {
        id: "trim-content",
        category: Category::Content,
        severity: Severity::Medium,
        applies: too_long,
        message: too_long_message,
    },
    Rule {
        id: "front-load-context",
        category: Category::Context,
        severity: Severity::Medium,
        applies: weak_context,
        message: weak_context_message,
    },
    Rule {
        id: "skipped-levels",
        category: Category::Structure,
        severity: Severity::Low,
        applies: skips_levels,
        message: skipped_levels_message,
    },
    Rule {
        id: "improve-readability",
        category: Category::Clarity,
        severity: Severity::Low,
        applies: hard_to_read,
        message: hard_to_read_message,
    },
    Rule {
        id: "add-code-examples",
        category: Category::Clarity,
        severity: Severity::Low,
        applies: lacks_code,
        message: lacks_code_message,
    },
    Rule {
        id: "add-appendix",
        category: Category::Organization,
        severity: Severity::Low,
        applies: needs_appendix,
        message: needs_appendix_message,
    },
];

/// Evaluate the rule table, most severe first.
#[must_use]
pub fn recommend(input: &RuleInput<'_>) -> Vec<Recommendation> {
    let mut fired: Vec<Recommendation> = RULES
        .iter()
        .filter(|rule| rule.applies(input))
        .map(|rule| Recommendation {
            rule: rule.id,
            category: rule.category,
            severity: rule.severity,
            message: (rule.message)(input),
        })
        .collect();
    // Stable, so equal severities keep table order.
    fired.sort_by_key(|rec| rec.severity);
    fired
}

fn no_headers(input: &RuleInput<'_>) -> bool {
    input.metrics.total_sections == 0
}

fn no_headers_message(_: &RuleInput<'_>) -> String {
    "Add markdown headers - the document has no sections to navigate by".to_string()
}

fn has_long_section(input: &RuleInput<'_>) -> bool {
    input.metrics.oversized_sections > 0
}

fn long_section_message(input: &RuleInput<'_>) -> String {
    let limit = input.thresholds.max_section_words;
    let longest = input.sections.iter().max_by(|a, b| {
        a.word_count
            .cmp(&b.word_count)
            .then_with(|| b.order_index.cmp(&a.order_index))
    });
    let detail = longest
        .map(|s| format!(" (longest: \"{}\" with {} words)", s.title, s.word_count))
        .unwrap_or_default();
    format!(
        "Break up large sections - {} section(s) exceed {limit} words{detail}",
        input.metrics.oversized_sections
    )
}

fn too_deep(input: &RuleInput<'_>) -> bool {
    input.metrics.hierarchy_depth > input.thresholds.max_hierarchy_depth
}

fn too_deep_message(input: &RuleInput<'_>) -> String {
    format!(
        "Reduce header nesting - {} levels used, limit to {} for better readability",
        input.metrics.hierarchy_depth, input.thresholds.max_hierarchy_depth
    )
}

fn too_short(input: &RuleInput<'_>) -> bool {
    input.metrics.total_words < input.thresholds.min_total_words
}

fn too_short_message(input: &RuleInput<'_>) -> String {
    let t = input.thresholds;
    format!(
        "Add more detail - {} words is too sparse, aim for {}-{} words",
        input.metrics.total_words, t.min_total_words, t.max_total_words
    )
}

fn too_long(input: &RuleInput<'_>) -> bool {
    input.metrics.total_words > input.thresholds.max_total_words
}

fn too_long_message(input: &RuleInput<'_>) -> String {
    let t = input.thresholds;
    format!(
        "Trim toward {}-{} words - {} words risks cognitive overload, focus on the core content",
        t.min_total_words, t.max_total_words, input.metrics.total_words
    )
}

fn weak_context(input: &RuleInput<'_>) -> bool {
    input.scores.context < input.thresholds.context_threshold
}

fn weak_context_message(input: &RuleInput<'_>) -> String {
    format!(
        "Move the project overview, tech stack, constraints and key decisions into the first {} sections",
        input.thresholds.context_sections
    )
}

fn skips_levels(input: &RuleInput<'_>) -> bool {
    input.metrics.skipped_levels > 0
}

fn skipped_levels_message(input: &RuleInput<'_>) -> String {
    format!(
        "Avoid skipping header levels - {} header(s) jump more than one level deeper",
        input.metrics.skipped_levels
    )
}

fn hard_to_read(input: &RuleInput<'_>) -> bool {
    input.metrics.total_words > 0 && input.scores.clarity < input.thresholds.clarity_threshold
}

fn hard_to_read_message(_: &RuleInput<'_>) -> String {
    "Improve readability - use shorter sentences and bullet lists to aid scanning".to_string()
}

fn lacks_code(input: &RuleInput<'_>) -> bool {
    !input.metrics.has_code_blocks
}

fn lacks_code_message(_: &RuleInput<'_>) -> String {
    "Add illustrative code blocks or examples".to_string()
}

fn needs_appendix(input: &RuleInput<'_>) -> bool {
    !input.metrics.has_appendices
        && input.metrics.total_words > input.thresholds.appendix_word_threshold
}

fn needs_appendix_message(_: &RuleInput<'_>) -> String {
    "Move detailed reference material into an appendix section".to_string()
}

#[cfg(test)]
#[path = "tests/recommend.rs"]
mod tests;
