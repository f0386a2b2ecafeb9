//! docgrade: structural quality scoring for markdown project knowledge files.
//!
//! A document is parsed into header-delimited sections with tree-sitter, measured, scored on
//! four dimensions (structure, content, clarity, context) and checked against a table of
//! recommendation rules.
//!
//! ```no_run
//! let analyzer = docgrade::DocumentAnalyzer::new()?;
//! let result = analyzer.analyze("# Overview\n\nThe project goal is ...\n");
//! println!("{} {:?}", result.overall_score, result.recommendations);
//! # Ok::<(), docgrade::Error>(())
//! ```
#![allow(clippy::multiple_crate_versions, clippy::module_name_repetitions)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod formats;
pub mod input;
pub mod metrics;
pub mod outline;
pub mod readability;
pub mod recommend;
pub mod scoring;
pub mod section;
pub mod thresholds;

pub use analysis::{analyze, AnalysisResult, AnalysisSummary, DocumentAnalyzer, Rating};
pub use error::{Error, Result};
pub use metrics::Metrics;
pub use scoring::Scores;
pub use section::Section;
