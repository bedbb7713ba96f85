//! Summarizer configuration
//!
//! Every field has a default, so a JSON document only needs to name what it
//! overrides:
//!
//! ```json
//! {
//!   "min_words": 40,
//!   "use_stopwords": true,
//!   "selection": { "mmr": { "lambda": 0.6 } }
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{Result, SummarizeError};

/// Default number of sentences in a summary
pub const DEFAULT_SENTENCE_COUNT: usize = 3;

/// Inputs with fewer whitespace-separated words are returned unchanged
pub const DEFAULT_MIN_WORDS: usize = 30;

/// How sentences are picked once they have been ranked
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection {
    /// Highest PageRank score first
    #[default]
    TopRanked,
    /// Maximal Marginal Relevance (0 = diversity only, 1 = relevance only)
    Mmr { lambda: f64 },
}

/// Configuration for [`crate::service::SummaryService`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Key into the language resource registry
    pub language: String,
    /// Short-input threshold
    pub min_words: usize,
    /// Sentence count used by `summarize_default`
    pub sentence_count: usize,
    /// PageRank damping factor
    pub damping: f64,
    /// PageRank convergence threshold (L1 delta)
    pub epsilon: f64,
    /// PageRank iteration cap
    pub max_iterations: usize,
    /// Drop stopwords before measuring sentence overlap
    pub use_stopwords: bool,
    pub selection: Selection,
    /// Directory holding `<language>.abbrev` files
    pub resource_dir: Option<PathBuf>,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            language: "english".to_string(),
            min_words: DEFAULT_MIN_WORDS,
            sentence_count: DEFAULT_SENTENCE_COUNT,
            damping: 0.85,
            epsilon: 1e-4,
            max_iterations: 100,
            use_stopwords: false,
            selection: Selection::TopRanked,
            resource_dir: None,
        }
    }
}

impl SummarizerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON config and validate it
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON config file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SummarizeError::ResourceIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_min_words(mut self, min_words: usize) -> Self {
        self.min_words = min_words;
        self
    }

    pub fn with_sentence_count(mut self, sentence_count: usize) -> Self {
        self.sentence_count = sentence_count;
        self
    }

    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_stopwords(mut self, use_stopwords: bool) -> Self {
        self.use_stopwords = use_stopwords;
        self
    }

    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    pub fn with_resource_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.resource_dir = Some(dir.into());
        self
    }

    /// Check numeric ranges
    pub fn validate(&self) -> Result<()> {
        if self.language.trim().is_empty() {
            return Err(SummarizeError::InvalidConfig(
                "language must not be empty".to_string(),
            ));
        }
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err(SummarizeError::InvalidConfig(format!(
                "damping must be in (0, 1), got {}",
                self.damping
            )));
        }
        if !(self.epsilon > 0.0 && self.epsilon.is_finite()) {
            return Err(SummarizeError::InvalidConfig(format!(
                "epsilon must be positive, got {}",
                self.epsilon
            )));
        }
        if self.max_iterations == 0 {
            return Err(SummarizeError::InvalidConfig(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        if let Selection::Mmr { lambda } = self.selection {
            if !(0.0..=1.0).contains(&lambda) {
                return Err(SummarizeError::InvalidConfig(format!(
                    "mmr lambda must be in [0, 1], got {lambda}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    #[test]
    fn test_defaults() {
        let config = SummarizerConfig::default();
        assert_eq!(config.language, "english");
        assert_eq!(config.min_words, 30);
        assert_eq!(config.sentence_count, 3);
        assert_eq!(config.selection, Selection::TopRanked);
        assert!(!config.use_stopwords);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = SummarizerConfig::from_json_str(r#"{ "min_words": 40 }"#).unwrap();
        assert_eq!(config.min_words, 40);
        assert_eq!(config.language, "english");
        assert!((config.damping - 0.85).abs() < 1e-12);
    }

    #[test]
    fn test_mmr_selection_json() {
        let config =
            SummarizerConfig::from_json_str(r#"{ "selection": { "mmr": { "lambda": 0.6 } } }"#)
                .unwrap();
        assert_eq!(config.selection, Selection::Mmr { lambda: 0.6 });

        let config = SummarizerConfig::from_json_str(r#"{ "selection": "top_ranked" }"#).unwrap();
        assert_eq!(config.selection, Selection::TopRanked);
    }

    #[test]
    fn test_invalid_damping_rejected() {
        let err = SummarizerConfig::from_json_str(r#"{ "damping": 1.5 }"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConfig);
    }

    #[test]
    fn test_invalid_lambda_rejected() {
        let config = SummarizerConfig::new().with_selection(Selection::Mmr { lambda: -0.1 });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_json() {
        let err = SummarizerConfig::from_json_str("{ min_words: }").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigParse);
    }

    #[test]
    fn test_missing_file() {
        let err = SummarizerConfig::from_path("/nonexistent/summarizer.json").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ResourceIo);
    }
}
