//! Sentence-level TextRank
//!
//! 1. Optionally drop stopwords from each sentence
//! 2. Build the word-overlap similarity graph
//! 3. Run weighted PageRank
//! 4. Select the requested number of sentences

use super::selector::{SelectorConfig, SentenceSelector};
use super::SentenceRanker;
use crate::config::{Selection, SummarizerConfig};
use crate::document::Document;
use crate::errors::{Result, SummarizeError};
use crate::graph::builder::build_graph_parallel;
use crate::graph::csr::CsrGraph;
use crate::nlp::stopwords::StopwordFilter;
use crate::pagerank::standard::StandardPageRank;
use crate::types::{Sentence, Summary};

#[derive(Debug, Clone, Default)]
pub struct TextRankSummarizer {
    pagerank: StandardPageRank,
    stopwords: Option<StopwordFilter>,
    selection: Selection,
}

impl TextRankSummarizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ranking parameters taken from a summarizer config
    pub fn from_config(config: &SummarizerConfig) -> Self {
        let pagerank = StandardPageRank::new()
            .with_damping(config.damping)
            .with_threshold(config.epsilon)
            .with_max_iterations(config.max_iterations);
        let stopwords = config
            .use_stopwords
            .then(|| StopwordFilter::new(&config.language));

        Self {
            pagerank,
            stopwords,
            selection: config.selection,
        }
    }

    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = Some(stopwords);
        self
    }

    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Score every sentence of the document, in document order
    pub fn rate_sentences(&self, document: &Document) -> Result<(Vec<Sentence>, usize, bool)> {
        let sentences: Vec<Sentence> = document.sentences().cloned().collect();
        let word_sets = self.word_sets(&sentences);
        self.score_sentences(sentences, &word_sets)
    }

    /// Words each sentence is ranked on, with stopwords removed if enabled
    fn word_sets(&self, sentences: &[Sentence]) -> Vec<Vec<String>> {
        sentences
            .iter()
            .map(|s| match &self.stopwords {
                Some(filter) => filter.filter_words(&s.words),
                None => s.words.clone(),
            })
            .collect()
    }

    fn score_sentences(
        &self,
        mut sentences: Vec<Sentence>,
        word_sets: &[Vec<String>],
    ) -> Result<(Vec<Sentence>, usize, bool)> {
        let graph = {
            let _span = tracing::debug_span!("summarize_stage", stage = "graph").entered();
            let graph = CsrGraph::from_builder(&build_graph_parallel(word_sets));
            tracing::debug!(
                nodes = graph.num_nodes,
                edges = graph.num_edges() / 2,
                "built sentence graph"
            );
            graph
        };

        let result = {
            let _span = tracing::debug_span!("summarize_stage", stage = "rank").entered();
            self.pagerank.run(&graph)
        };

        if !result.is_finite() {
            return Err(SummarizeError::Ranking(format!(
                "non-finite sentence score after {} iterations",
                result.iterations
            )));
        }
        if !result.converged {
            tracing::debug!(
                iterations = result.iterations,
                delta = result.delta,
                "pagerank stopped before converging"
            );
        }

        for node in 0..graph.num_nodes as u32 {
            sentences[graph.sentence(node)].score = result.score(node);
        }

        Ok((sentences, result.iterations, result.converged))
    }
}

impl SentenceRanker for TextRankSummarizer {
    fn rank(&self, document: &Document, sentence_count: usize) -> Result<Summary> {
        if document.is_empty() {
            return Ok(Summary::default());
        }

        let sentences: Vec<Sentence> = document.sentences().cloned().collect();
        let word_sets = self.word_sets(&sentences);
        let (scored, iterations, converged) = self.score_sentences(sentences, &word_sets)?;

        let _span = tracing::debug_span!("summarize_stage", stage = "select").entered();
        let selector = SentenceSelector::with_config(SelectorConfig {
            selection: self.selection,
            num_sentences: sentence_count,
        });

        Ok(Summary {
            sentences: selector.select(&scored, &word_sets),
            iterations,
            converged,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::tokenizer::PunktTokenizer;

    fn parse(text: &str) -> Document {
        Document::parse(text, &PunktTokenizer::new(), "english").unwrap()
    }

    const TEXT: &str = "Rust programs are compiled ahead of time. \
        The Rust compiler checks ownership and borrowing in every Rust program. \
        Ownership rules let the Rust compiler free memory without a garbage collector. \
        My cat sleeps all afternoon. \
        Borrowing lets Rust code read data without taking ownership of it.";

    #[test]
    fn test_scores_sum_to_one() {
        let doc = parse(TEXT);
        let (scored, _, converged) = TextRankSummarizer::new().rate_sentences(&doc).unwrap();

        assert!(converged);
        assert_eq!(scored.len(), 5);
        let sum: f64 = scored.iter().map(|s| s.score).sum();
        assert!((sum - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_unrelated_sentence_ranks_last() {
        let doc = parse(TEXT);
        let (scored, _, _) = TextRankSummarizer::new().rate_sentences(&doc).unwrap();

        let cat = &scored[3];
        assert!(scored
            .iter()
            .filter(|s| s.index != 3)
            .all(|s| s.score > cat.score));
    }

    #[test]
    fn test_rank_returns_requested_count_in_order() {
        let doc = parse(TEXT);
        let summary = TextRankSummarizer::new().rank(&doc, 2).unwrap();

        assert_eq!(summary.len(), 2);
        assert!(summary.sentences[0].index < summary.sentences[1].index);
        assert!(summary.sentences.iter().all(|s| s.index != 3));
    }

    #[test]
    fn test_rank_empty_document() {
        let summary = TextRankSummarizer::new().rank(&Document::default(), 3).unwrap();
        assert!(summary.is_empty());
    }

    #[test]
    fn test_from_config_with_stopwords() {
        let config = SummarizerConfig::default().with_stopwords(true);
        let ranker = TextRankSummarizer::from_config(&config);
        assert!(ranker.stopwords.is_some());

        let summary = ranker.rank(&parse(TEXT), 1).unwrap();
        assert_eq!(summary.len(), 1);
        assert_ne!(summary.sentences[0].index, 3);
    }

    #[test]
    fn test_mmr_with_stopwords_skips_duplicate_wording() {
        // Sentences 0 and 1 differ only in stopwords
        let text = "The Rust compiler checks the ownership rules. \
            Rust compiler checks ownership rules. \
            Ownership rules make Rust programs safe. \
            Garbage collectors pause programs at runtime.";
        let ranker = TextRankSummarizer::new()
            .with_stopwords(StopwordFilter::new("english"))
            .with_selection(Selection::Mmr { lambda: 0.3 });

        let summary = ranker.rank(&parse(text), 2).unwrap();
        let indices: Vec<_> = summary.sentences.iter().map(|s| s.index).collect();

        assert_eq!(indices.len(), 2);
        assert!(!(indices.contains(&0) && indices.contains(&1)));
    }
}
