//! Scoring engine: four independent 0-100 sub-scores and their weighted combination.
//!
//! Every score is a pure function of the metrics and the outline text. Each sub-score is built
//! from capped components that sum to at most 100, then clamped and rounded to one decimal so
//! identical input always serialises identically.
//!
//! Content and clarity look at prose only (code blocks cut out), so adding an example block can
//! only add its bonus and never moves a document out of the word band or changes its readability.

use crate::metrics::{round1, Metrics};
use crate::outline::Outline;
use crate::readability::{FleschReadingEase, ReadabilityScorer, SentenceLengthApprox, SentenceStats};
use crate::thresholds::{Thresholds, Weights};
use serde::Serialize;

/// Keyword stems whose presence up front signals each kind of orientation material.
const CONTEXT_GROUPS: [&[&str]; 4] = [
    &["project", "goal", "purpose", "objective", "overview"],
    &["technology", "framework", "language", "stack", "dependenc"],
    &["requirement", "constraint", "compliance", "security"],
    &["decision", "choice", "rationale", "why", "because"],
];

/// List items needed before lists count as a scanning aid.
const MIN_LIST_ITEMS: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
/// The four quality dimensions, each in 0-100.
pub struct Scores {
    /// Organisation: section count, nesting depth and balance.
    pub structure: f64,
    /// Length relative to the target band, plus examples and appendices.
    pub content: f64,
    /// Readability and scanning aids.
    pub clarity: f64,
    /// Orientation material near the top of the document.
    pub context: f64,
}

/// Computes sub-scores and the overall score.
pub struct ScoringEngine {
    thresholds: Thresholds,
    weights: Weights,
    readability: Box<dyn ReadabilityScorer>,
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new(Thresholds::default(), Weights::default())
    }
}

impl ScoringEngine {
    /// Engine using Flesch reading ease for the clarity score.
    #[must_use]
    pub fn new(thresholds: Thresholds, weights: Weights) -> Self {
        Self {
            thresholds,
            weights: weights.normalized(),
            readability: Box::new(FleschReadingEase),
        }
    }

    /// Replace the reading-ease scorer.
    #[must_use]
    pub fn with_readability(mut self, scorer: impl ReadabilityScorer + 'static) -> Self {
        self.readability = Box::new(scorer);
        self
    }

    /// Replace the limits scores are measured against.
    #[must_use]
    pub fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Replace the sub-score weights; they are normalised to sum to one.
    #[must_use]
    pub fn with_weights(mut self, weights: Weights) -> Self {
        self.weights = weights.normalized();
        self
    }

    /// Limits the engine scores against.
    #[must_use]
    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// All four sub-scores for a document.
    #[must_use]
    pub fn score(&self, metrics: &Metrics, outline: &Outline<'_>) -> Scores {
        Scores {
            structure: finish(self.structure(metrics)),
            content: finish(self.content(metrics)),
            clarity: finish(self.clarity(metrics, &outline.prose())),
            context: finish(self.context(outline)),
        }
    }

    /// Weighted combination of the sub-scores, rounded to one decimal.
    #[must_use]
    pub fn overall(&self, scores: &Scores) -> f64 {
        let w = &self.weights;
        finish(
            scores.structure * w.structure
                + scores.content * w.content
                + scores.clarity * w.clarity
                + scores.context * w.context,
        )
    }

    /// Rewards enough sections, shallow nesting and even section sizes.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn structure(&self, metrics: &Metrics) -> f64 {
        if metrics.total_sections == 0 {
            return 0.0;
        }
        let t = &self.thresholds;
        let sections = metrics.total_sections as f64;
        let target = t.target_section_count.max(1) as f64;

        let count = if sections <= target {
            40.0 * sections / target
        } else if metrics.total_sections <= 20 {
            40.0
        } else {
            40.0 - (sections - 20.0).min(10.0)
        };

        let excess_depth = metrics.hierarchy_depth.saturating_sub(t.max_hierarchy_depth);
        let depth = (30.0 - 15.0 * excess_depth as f64).max(0.0);

        let ratio = if metrics.avg_section_words > 0.0 {
            metrics.max_section_words as f64 / metrics.avg_section_words
        } else {
            1.0
        };
        let balance = (30.0
            - 10.0 * (ratio - 2.0).max(0.0)
            - 5.0 * metrics.oversized_sections as f64)
            .max(0.0);

        count + depth + balance - 5.0 * metrics.skipped_levels as f64
    }

    /// Rewards prose length inside the target band, code examples and appendices.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn content(&self, metrics: &Metrics) -> f64 {
        let t = &self.thresholds;
        let words = metrics.prose_words() as f64;
        let min = t.min_total_words as f64;
        let max = t.max_total_words as f64;

        let band = if metrics.prose_words() == 0 {
            0.0
        } else if words < min {
            70.0 * words / min
        } else if words > max {
            70.0 * max / words
        } else {
            70.0
        };

        band + bonus(metrics.has_code_blocks, 20.0) + bonus(metrics.has_appendices, 10.0)
    }

    /// Readability of the prose plus bonuses for structural scanning aids.
    #[must_use]
    pub fn clarity(&self, metrics: &Metrics, prose: &str) -> f64 {
        if metrics.total_words == 0 {
            return 0.0;
        }
        let ease = self
            .readability
            .reading_ease(prose)
            .filter(|ease| ease.is_finite())
            .unwrap_or_else(|| SentenceLengthApprox::approximate(prose))
            .clamp(0.0, 100.0);
        let distance = if ease < 60.0 {
            60.0 - ease
        } else if ease > 70.0 {
            ease - 70.0
        } else {
            0.0
        };
        let ease_points = (55.0 - 1.1 * distance).max(0.0);

        let sentence_points = match SentenceStats::of(prose).average_length() {
            None => 5.0,
            Some(avg) if (12.0..=18.0).contains(&avg) => 15.0,
            Some(avg) if avg < 12.0 => 10.0,
            Some(avg) if avg <= 25.0 => 8.0,
            Some(_) => 0.0,
        };

        ease_points
            + sentence_points
            + bonus(metrics.has_code_blocks, 15.0)
            + bonus(metrics.has_appendices, 10.0)
            + bonus(metrics.list_items >= MIN_LIST_ITEMS, 5.0)
    }

    /// Rewards orientation keywords and a well-sized lead in the first few sections.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn context(&self, outline: &Outline<'_>) -> f64 {
        if outline.sections.is_empty() {
            return 0.0;
        }
        let t = &self.thresholds;
        let lead = outline.leading_text(t.context_sections).to_lowercase();
        let tokens: Vec<&str> = lead
            .split(|c: char| !c.is_alphanumeric())
            .filter(|token| !token.is_empty())
            .collect();
        let found = CONTEXT_GROUPS
            .iter()
            .filter(|stems| {
                stems
                    .iter()
                    .any(|stem| tokens.iter().any(|token| token.starts_with(stem)))
            })
            .count();
        let completeness = found as f64 / CONTEXT_GROUPS.len() as f64 * 100.0;

        let lead_words = outline.leading_words(t.context_sections);
        let size = if lead_words < t.min_context_words {
            70.0
        } else if lead_words > t.max_context_words {
            90.0
        } else {
            100.0
        };

        0.7 * completeness + 0.3 * size
    }
}

fn bonus(present: bool, points: f64) -> f64 {
    if present {
        points
    } else {
        0.0
    }
}

/// Clamps to the score range and rounds to one decimal.
fn finish(score: f64) -> f64 {
    round1(score.clamp(0.0, 100.0))
}

#[cfg(test)]
#[path = "tests/scoring.rs"]
mod tests;
