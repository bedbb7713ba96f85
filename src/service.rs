//! Summary service
//!
//! The public entry point. [`SummaryService::summarize`] never fails:
//!
//! - empty input returns `""`
//! - input with fewer than `min_words` whitespace-separated words is
//!   returned unchanged
//! - otherwise the text is parsed, ranked and the selected sentences are
//!   joined with single spaces
//! - any tokenization or ranking error is logged and the original text is
//!   returned

use std::sync::OnceLock;

use crate::config::SummarizerConfig;
use crate::document::Document;
use crate::errors::{ErrorKind, Result, SummarizeError};
use crate::nlp::tokenizer::{PunktTokenizer, SentenceTokenizer};
use crate::summarizer::textrank::TextRankSummarizer;
use crate::summarizer::SentenceRanker;
use crate::types::Summary;

/// Which branch produced a summary string
#[derive(Debug)]
pub enum SummaryOutcome {
    /// Input was empty
    Empty,
    /// Input was below the word threshold and is returned as-is
    ShortInput(String),
    Summarized(Summary),
    /// Summarization failed; the original text is returned
    Fallback {
        original: String,
        error: SummarizeError,
    },
}

impl SummaryOutcome {
    pub fn into_text(self) -> String {
        match self {
            SummaryOutcome::Empty => String::new(),
            SummaryOutcome::ShortInput(text) => text,
            SummaryOutcome::Summarized(summary) => summary.text(),
            SummaryOutcome::Fallback { original, .. } => original,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, SummaryOutcome::Fallback { .. })
    }

    pub fn error(&self) -> Option<&SummarizeError> {
        match self {
            SummaryOutcome::Fallback { error, .. } => Some(error),
            _ => None,
        }
    }
}

/// Extractive summarizer, generic over its tokenizer and ranker
#[derive(Debug, Clone)]
pub struct SummaryService<T = PunktTokenizer, R = TextRankSummarizer> {
    config: SummarizerConfig,
    tokenizer: T,
    ranker: R,
}

impl Default for SummaryService {
    fn default() -> Self {
        Self::new()
    }
}

impl SummaryService {
    /// Service with the default config
    pub fn new() -> Self {
        let config = SummarizerConfig::default();
        let ranker = TextRankSummarizer::from_config(&config);
        Self {
            config,
            tokenizer: PunktTokenizer::new(),
            ranker,
        }
    }

    /// Service with a validated custom config
    pub fn with_config(config: SummarizerConfig) -> Result<Self> {
        config.validate()?;
        let tokenizer = match &config.resource_dir {
            Some(dir) => PunktTokenizer::new().with_resource_dir(dir),
            None => PunktTokenizer::new(),
        };
        let ranker = TextRankSummarizer::from_config(&config);
        Ok(Self {
            config,
            tokenizer,
            ranker,
        })
    }
}

impl<T, R> SummaryService<T, R>
where
    T: SentenceTokenizer,
    R: SentenceRanker,
{
    /// Service with custom collaborators
    pub fn with_collaborators(config: SummarizerConfig, tokenizer: T, ranker: R) -> Self {
        Self {
            config,
            tokenizer,
            ranker,
        }
    }

    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Summarize `text` into at most `sentence_count` sentences
    pub fn summarize(&self, text: &str, sentence_count: usize) -> String {
        self.summarize_detailed(text, sentence_count).into_text()
    }

    /// Summarize with the configured default sentence count
    pub fn summarize_default(&self, text: &str) -> String {
        self.summarize(text, self.config.sentence_count)
    }

    /// Like [`summarize`](Self::summarize), but reports which branch ran
    pub fn summarize_detailed(&self, text: &str, sentence_count: usize) -> SummaryOutcome {
        if text.is_empty() {
            return SummaryOutcome::Empty;
        }

        let word_count = text.split_whitespace().count();
        if word_count < self.config.min_words {
            return SummaryOutcome::ShortInput(text.to_string());
        }

        let error = match self.try_summarize(text, sentence_count) {
            Ok(summary) => return SummaryOutcome::Summarized(summary),
            Err(error) => error,
        };

        match error.kind() {
            ErrorKind::MissingResource | ErrorKind::ResourceIo => tracing::warn!(
                kind = %error.kind(),
                language = %self.config.language,
                error = %error,
                "language resources unavailable, returning original text"
            ),
            ErrorKind::Tokenization | ErrorKind::Ranking => tracing::warn!(
                kind = %error.kind(),
                words = word_count,
                error = %error,
                "summarization failed, returning original text"
            ),
            ErrorKind::InvalidConfig | ErrorKind::ConfigParse => tracing::warn!(
                kind = %error.kind(),
                error = %error,
                "summarizer misconfigured, returning original text"
            ),
        }

        SummaryOutcome::Fallback {
            original: text.to_string(),
            error,
        }
    }

    /// Parse and rank without the short-input check or the fallback
    pub fn try_summarize(&self, text: &str, sentence_count: usize) -> Result<Summary> {
        let document = {
            let _span = tracing::debug_span!("summarize_stage", stage = "parse").entered();
            Document::parse(text, &self.tokenizer, &self.config.language)?
        };

        if document.is_empty() {
            return Err(SummarizeError::Tokenization(
                "document contains no sentences".to_string(),
            ));
        }

        self.ranker.rank(&document, sentence_count)
    }
}

static DEFAULT_SERVICE: OnceLock<SummaryService> = OnceLock::new();

/// Summarize with a process-wide default service
pub fn summarize(text: &str, sentence_count: usize) -> String {
    DEFAULT_SERVICE
        .get_or_init(SummaryService::new)
        .summarize(text, sentence_count)
}
