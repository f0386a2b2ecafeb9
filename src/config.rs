//! Configuration to acknowledge developer preferences as well as set defaults.
//!
//! Specifically, we try to find a docgrade.toml, and if present we load settings from there.
//! This provides the heuristic limits and score weights; anything left out keeps its default.

use crate::error::{Error, Result};
use crate::thresholds::{Thresholds, Weights};
use facet::Facet;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// File looked up in the working directory when no path is given.
pub const DEFAULT_PATH: &str = "docgrade.toml";

#[derive(Facet, Clone, Debug)]
/// User preferences loaded from docgrade.toml or falling back to defaults.
pub struct Config {
    #[facet(default = 750)]
    /// Sections with more body words than this are flagged for splitting.
    pub max_section_words: usize,
    #[facet(default = 1000)]
    /// Lower edge of the target word band.
    pub min_total_words: usize,
    #[facet(default = 2000)]
    /// Upper edge of the target word band.
    pub max_total_words: usize,
    #[facet(default = 4)]
    /// Deepest header level before nesting is penalised.
    pub max_hierarchy_depth: usize,
    #[facet(default = 1500)]
    /// Documents longer than this without an appendix are asked to add one.
    pub appendix_word_threshold: usize,
    #[facet(default = 3)]
    /// Leading sections inspected for orientation material.
    pub context_sections: usize,
    #[facet(default = 500)]
    /// Leading sections shorter than this give too little context.
    pub min_context_words: usize,
    #[facet(default = 1500)]
    /// Leading sections longer than this front-load too much.
    pub max_context_words: usize,
    #[facet(default = 6)]
    /// Section count at which more sections stop improving structure.
    pub target_section_count: usize,
    #[facet(default = 70.0)]
    /// Context score below which front-loading is recommended.
    pub context_threshold: f64,
    #[facet(default = 70.0)]
    /// Clarity score below which readability advice is given.
    pub clarity_threshold: f64,
    #[facet(default = 0.25)]
    /// Weight of the structure sub-score.
    pub structure_weight: f64,
    #[facet(default = 0.30)]
    /// Weight of the content sub-score.
    pub content_weight: f64,
    #[facet(default = 0.25)]
    /// Weight of the clarity sub-score.
    pub clarity_weight: f64,
    #[facet(default = 0.20)]
    /// Weight of the context sub-score.
    pub context_weight: f64,
}

impl Config {
    /// Load configuration from `path`, or from docgrade.toml in the working directory.
    ///
    /// A missing docgrade.toml gives the defaults. A missing file that was asked for by name is
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let explicit = path.is_some();
        let path = path.unwrap_or_else(|| Path::new(DEFAULT_PATH));
        match fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents, path),
            Err(err) if err.kind() == io::ErrorKind::NotFound && !explicit => {
                debug!("no {DEFAULT_PATH} found, using defaults");
                Self::parse("", path)
            }
            Err(source) => Err(Error::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Parse TOML settings; `origin` names the source in error messages.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the TOML is malformed or has wrongly typed values.
    pub fn parse(contents: &str, origin: &Path) -> Result<Self> {
        facet_toml::from_str::<Self>(contents).map_err(|err| Error::Config {
            path: origin.to_path_buf(),
            message: err.to_string(),
        })
    }

    /// Heuristic limits described by this configuration.
    #[must_use]
    pub fn thresholds(&self) -> Thresholds {
        Thresholds {
            max_section_words: self.max_section_words,
            min_total_words: self.min_total_words,
            max_total_words: self.max_total_words,
            max_hierarchy_depth: self.max_hierarchy_depth,
            appendix_word_threshold: self.appendix_word_threshold,
            context_sections: self.context_sections,
            min_context_words: self.min_context_words,
            max_context_words: self.max_context_words,
            target_section_count: self.target_section_count,
            context_threshold: self.context_threshold,
            clarity_threshold: self.clarity_threshold,
        }
    }

    /// Score weights described by this configuration.
    #[must_use]
    pub fn weights(&self) -> Weights {
        Weights {
            structure: self.structure_weight,
            content: self.content_weight,
            clarity: self.clarity_weight,
            context: self.context_weight,
        }
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
