//! Sentence selection
//!
//! Picks `num_sentences` ranked sentences, either purely by score or with
//! Maximal Marginal Relevance (MMR) to avoid near-duplicates. The result is
//! always in document order.

use super::unit_vector::{UnitVector, UnitVectorBuilder};
use crate::config::{Selection, DEFAULT_SENTENCE_COUNT};
use crate::types::Sentence;

#[derive(Debug, Clone)]
pub struct SelectorConfig {
    pub selection: Selection,
    pub num_sentences: usize,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            selection: Selection::TopRanked,
            num_sentences: DEFAULT_SENTENCE_COUNT,
        }
    }
}

#[derive(Debug, Default)]
pub struct SentenceSelector {
    config: SelectorConfig,
}

impl SentenceSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SelectorConfig) -> Self {
        Self { config }
    }

    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.config.selection = selection;
        self
    }

    pub fn with_num_sentences(mut self, n: usize) -> Self {
        self.config.num_sentences = n;
        self
    }

    /// Select from scored sentences.
    ///
    /// `word_sets[i]` holds the words of `sentences[i]` as they were ranked
    /// (after stopword filtering); MMR measures redundancy on them.
    pub fn select(&self, sentences: &[Sentence], word_sets: &[Vec<String>]) -> Vec<Sentence> {
        debug_assert_eq!(sentences.len(), word_sets.len());
        let mut picked = match self.config.selection {
            Selection::TopRanked => self.top_ranked(sentences),
            Selection::Mmr { lambda } => self.mmr(sentences, word_sets, lambda.clamp(0.0, 1.0)),
        };

        picked.sort_unstable();
        picked.into_iter().map(|i| sentences[i].clone()).collect()
    }

    /// Highest scores first; ties go to the earlier sentence
    fn top_ranked(&self, sentences: &[Sentence]) -> Vec<usize> {
        let mut order: Vec<usize> = (0..sentences.len()).collect();
        order.sort_by(|&a, &b| {
            sentences[b]
                .score
                .total_cmp(&sentences[a].score)
                .then(a.cmp(&b))
        });
        order.truncate(self.config.num_sentences);
        order
    }

    /// MMR: λ * relevance(s) - (1-λ) * max_{s' ∈ selected} sim(s, s')
    ///
    /// Relevance is the TextRank score scaled so the best sentence is 1.
    fn mmr(&self, sentences: &[Sentence], word_sets: &[Vec<String>], lambda: f64) -> Vec<usize> {
        let max_score = sentences
            .iter()
            .map(|s| s.score)
            .fold(0.0_f64, f64::max);
        let relevance: Vec<f64> = sentences
            .iter()
            .map(|s| if max_score > 0.0 { s.score / max_score } else { 0.0 })
            .collect();

        let builder = UnitVectorBuilder::new(word_sets);
        let vectors: Vec<UnitVector> = word_sets.iter().map(|words| builder.build(words)).collect();

        let mut selected: Vec<usize> = Vec::new();
        while selected.len() < self.config.num_sentences && selected.len() < sentences.len() {
            let mut best: Option<(usize, f64)> = None;

            for i in 0..sentences.len() {
                if selected.contains(&i) {
                    continue;
                }

                let max_sim = selected
                    .iter()
                    .map(|&j| vectors[i].cosine_similarity(&vectors[j]))
                    .fold(0.0_f64, f64::max);
                let score = lambda * relevance[i] - (1.0 - lambda) * max_sim;

                if best.map_or(true, |(_, b)| score > b) {
                    best = Some((i, score));
                }
            }

            match best {
                Some((idx, _)) => selected.push(idx),
                None => break,
            }
        }

        selected
    }
}
