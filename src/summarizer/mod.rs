//! Summarization components
//!
//! [`SentenceRanker`] is the seam between the service and the ranking
//! algorithm. [`textrank::TextRankSummarizer`] is the built-in
//! implementation; selection strategies live in [`selector`].

pub mod selector;
pub mod textrank;
pub mod unit_vector;

use crate::document::Document;
use crate::errors::Result;
use crate::types::Summary;

/// Picks the `sentence_count` most important sentences of a document
pub trait SentenceRanker: Send + Sync {
    /// Returned sentences are in document order
    fn rank(&self, document: &Document, sentence_count: usize) -> Result<Summary>;
}
