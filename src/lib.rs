//! # rapid-summarizer
//!
//! Extractive summarization with a sentence-level TextRank.
//!
//! ```
//! use rapid_summarizer::summarize;
//!
//! // Short inputs come back unchanged
//! assert_eq!(summarize("Hi there.", 3), "Hi there.");
//! ```
//!
//! Sentences become nodes of a graph whose edges are weighted by word
//! overlap; PageRank scores the nodes and the best sentences are joined
//! into the summary. Failures never reach the caller: the original text is
//! returned instead.

pub mod config;
pub mod document;
pub mod errors;
pub mod graph;
pub mod nlp;
pub mod pagerank;
pub mod service;
pub mod summarizer;
pub mod types;

pub use config::{Selection, SummarizerConfig, DEFAULT_MIN_WORDS, DEFAULT_SENTENCE_COUNT};
pub use document::{Document, Paragraph};
pub use errors::{ErrorKind, SummarizeError};
pub use nlp::tokenizer::{PunktTokenizer, SentenceTokenizer};
pub use service::{summarize, SummaryOutcome, SummaryService};
pub use summarizer::textrank::TextRankSummarizer;
pub use summarizer::SentenceRanker;
pub use types::{Sentence, Summary};
