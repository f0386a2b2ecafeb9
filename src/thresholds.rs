//! Tunable constants shared by the metrics collector, scoring engine and recommendation rules.
//!
//! Scores are relative to these values. Changing them shifts every score, which is why they live
//! in one typed record rather than being scattered through the heuristics.

use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
/// Heuristic limits the analysis measures a document against.
pub struct Thresholds {
    /// Sections with more body words than this are flagged for splitting.
    pub max_section_words: usize,
    /// Lower edge of the target word band.
    pub min_total_words: usize,
    /// Upper edge of the target word band.
    pub max_total_words: usize,
    /// Deepest header level before nesting is penalised.
    pub max_hierarchy_depth: usize,
    /// Documents longer than this without an appendix are asked to add one.
    pub appendix_word_threshold: usize,
    /// How many leading sections are inspected for orientation material.
    pub context_sections: usize,
    /// Leading sections shorter than this give too little context.
    pub min_context_words: usize,
    /// Leading sections longer than this front-load too much.
    pub max_context_words: usize,
    /// Section count at which the structure score stops rewarding more sections.
    pub target_section_count: usize,
    /// Context scores below this trigger the front-loading recommendation.
    pub context_threshold: f64,
    /// Clarity scores below this trigger the readability recommendation.
    pub clarity_threshold: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            max_section_words: 750,
            min_total_words: 1000,
            max_total_words: 2000,
            max_hierarchy_depth: 4,
            appendix_word_threshold: 1500,
            context_sections: 3,
            min_context_words: 500,
            max_context_words: 1500,
            target_section_count: 6,
            context_threshold: 70.0,
            clarity_threshold: 70.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
/// Relative importance of each sub-score in the overall score.
pub struct Weights {
    /// Weight of the structure sub-score.
    pub structure: f64,
    /// Weight of the content sub-score.
    pub content: f64,
    /// Weight of the clarity sub-score.
    pub clarity: f64,
    /// Weight of the context sub-score.
    pub context: f64,
}

impl Weights {
    /// Weights rescaled to sum to one; equal weights when the sum is not positive.
    #[must_use]
    pub fn normalized(self) -> Self {
        let total = self.structure + self.content + self.clarity + self.context;
        if !total.is_finite() || total <= 0.0 {
            return Self {
                structure: 0.25,
                content: 0.25,
                clarity: 0.25,
                context: 0.25,
            };
        }
        Self {
            structure: self.structure / total,
            content: self.content / total,
            clarity: self.clarity / total,
            context: self.context / total,
        }
    }
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            structure: 0.25,
            content: 0.30,
            clarity: 0.25,
            context: 0.20,
        }
    }
}
