//! The analyzer façade and the record it produces.
//!
//! `DocumentAnalyzer` wires the outline parser, metrics collector, scoring engine and rule table
//! into one call. It holds only immutable, shareable state, so a single analyzer can serve many
//! threads at once.

use crate::error::Result;
use crate::input;
use crate::metrics::Metrics;
use crate::outline::OutlineParser;
use crate::readability::ReadabilityScorer;
use crate::recommend::{recommend, RuleInput};
use crate::scoring::{Scores, ScoringEngine};
use crate::section::Section;
use crate::thresholds::{Thresholds, Weights};
use serde::Serialize;
use std::path::Path;
use tracing::debug;

#[derive(Clone, Debug, PartialEq, Serialize)]
/// Quality assessment of one document.
pub struct AnalysisResult {
    /// Weighted combination of the sub-scores, 0-100.
    pub overall_score: f64,
    /// The four sub-scores.
    pub scores: Scores,
    /// Measurements the scores were computed from.
    pub metrics: Metrics,
    /// Improvement advice, most severe first.
    pub recommendations: Vec<String>,
    /// Structural sections in document order.
    pub sections: Vec<Section>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
/// Coarse quality band of an overall score.
pub enum Rating {
    /// 80 and above.
    Excellent,
    /// 70 to 80.
    Good,
    /// 60 to 70.
    NeedsImprovement,
    /// Below 60.
    Poor,
}

impl Rating {
    /// Band containing `score`.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            Self::Excellent
        } else if score >= 70.0 {
            Self::Good
        } else if score >= 60.0 {
            Self::NeedsImprovement
        } else {
            Self::Poor
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
/// Compact view of a result for embedding in tool responses.
pub struct AnalysisSummary {
    /// Weighted combination of the sub-scores.
    pub overall_score: f64,
    /// Quality band of the overall score.
    pub rating: Rating,
    /// The four sub-scores.
    pub scores: Scores,
    /// Improvement advice, most severe first.
    pub recommendations: Vec<String>,
}

impl AnalysisResult {
    /// Quality band of the overall score.
    #[must_use]
    pub fn rating(&self) -> Rating {
        Rating::from_score(self.overall_score)
    }

    /// Scores and advice without the section breakdown.
    #[must_use]
    pub fn summary(&self) -> AnalysisSummary {
        AnalysisSummary {
            overall_score: self.overall_score,
            rating: self.rating(),
            scores: self.scores,
            recommendations: self.recommendations.clone(),
        }
    }
}

/// Runs the full analysis pipeline over documents.
pub struct DocumentAnalyzer {
    parser: OutlineParser,
    scoring: ScoringEngine,
}

impl DocumentAnalyzer {
    /// Markdown analyzer with default thresholds, weights and readability scorer.
    ///
    /// # Errors
    ///
    /// Returns an error if the markdown grammar cannot be loaded.
    pub fn new() -> Result<Self> {
        Ok(Self {
            parser: OutlineParser::markdown()?,
            scoring: ScoringEngine::default(),
        })
    }

    /// Replace the scoring engine.
    #[must_use]
    pub fn with_scoring(mut self, scoring: ScoringEngine) -> Self {
        self.scoring = scoring;
        self
    }

    /// Use custom limits and weights, keeping the readability scorer.
    #[must_use]
    pub fn with_thresholds(mut self, thresholds: Thresholds, weights: Weights) -> Self {
        self.scoring = self
            .scoring
            .with_thresholds(thresholds)
            .with_weights(weights);
        self
    }

    /// Change how the sub-scores are weighted, keeping limits and readability scorer.
    #[must_use]
    pub fn with_weights(mut self, weights: Weights) -> Self {
        self.scoring = self.scoring.with_weights(weights);
        self
    }

    /// Substitute the reading-ease scorer used for clarity.
    #[must_use]
    pub fn with_readability(mut self, scorer: impl ReadabilityScorer + 'static) -> Self {
        self.scoring = self.scoring.with_readability(scorer);
        self
    }

    /// Analyse document text. Never fails: degenerate input gives degenerate scores.
    #[must_use]
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let thresholds = self.scoring.thresholds();
        let outline = self.parser.parse(text);
        let metrics = Metrics::collect(&outline, thresholds);
        let scores = self.scoring.score(&metrics, &outline);
        let overall_score = self.scoring.overall(&scores);
        let recommendations = recommend(&RuleInput {
            metrics: &metrics,
            scores: &scores,
            sections: &outline.sections,
            thresholds,
        })
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>();

        debug!(
            words = metrics.total_words,
            sections = metrics.total_sections,
            depth = metrics.hierarchy_depth,
            overall = overall_score,
            recommendations = recommendations.len(),
            "analysed document"
        );

        AnalysisResult {
            overall_score,
            scores,
            metrics,
            recommendations,
            sections: outline.sections,
        }
    }

    /// Read and analyse a document on disk.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Read`] if the file cannot be read as UTF-8 text.
    pub fn analyze_file(&self, path: &Path) -> Result<AnalysisResult> {
        let text = input::read_document(path)?;
        Ok(self.analyze(&text))
    }
}

/// Analyse `text` with a default markdown analyzer.
///
/// # Errors
///
/// Returns an error if the markdown grammar cannot be loaded.
pub fn analyze(text: &str) -> Result<AnalysisResult> {
    Ok(DocumentAnalyzer::new()?.analyze(text))
}

#[cfg(test)]
#[path = "tests/analysis.rs"]
mod tests;
