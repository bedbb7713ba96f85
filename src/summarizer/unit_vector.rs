//! Unit vector representation for sentences
//!
//! Sparse bag-of-words vectors, optionally IDF-weighted, used to measure
//! redundancy between sentences during MMR selection.

use rustc_hash::FxHashMap;

/// A sparse, L2-normalized vector
#[derive(Debug, Clone, Default)]
pub struct UnitVector {
    /// Non-zero dimensions: word -> weight
    pub dimensions: FxHashMap<String, f64>,
    /// L2 norm before normalization
    pub norm: f64,
}

impl UnitVector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize a map of dimensions
    pub fn from_dimensions(mut dimensions: FxHashMap<String, f64>) -> Self {
        let norm = dimensions.values().map(|v| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for value in dimensions.values_mut() {
                *value /= norm;
            }
        }
        Self { dimensions, norm }
    }

    /// Cosine similarity; both vectors are normalized so this is a dot product
    pub fn cosine_similarity(&self, other: &UnitVector) -> f64 {
        let (small, large) = if self.dimensions.len() <= other.dimensions.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .dimensions
            .iter()
            .filter_map(|(key, value)| large.dimensions.get(key).map(|o| value * o))
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.dimensions.is_empty()
    }
}

/// Builds sentence vectors from term frequencies
#[derive(Debug, Default)]
pub struct UnitVectorBuilder {
    /// Word -> number of sentences containing it
    document_frequency: FxHashMap<String, usize>,
    num_sentences: usize,
    weight_by_idf: bool,
}

impl UnitVectorBuilder {
    /// Collect document frequencies over the word lists of every sentence
    pub fn new(word_sets: &[Vec<String>]) -> Self {
        let mut document_frequency: FxHashMap<String, usize> = FxHashMap::default();
        for words in word_sets {
            let mut seen: Vec<&str> = words.iter().map(String::as_str).collect();
            seen.sort_unstable();
            seen.dedup();
            for word in seen {
                *document_frequency.entry(word.to_string()).or_insert(0) += 1;
            }
        }

        Self {
            document_frequency,
            num_sentences: word_sets.len(),
            weight_by_idf: true,
        }
    }

    /// Set whether term frequencies are scaled by inverse document frequency
    pub fn with_idf_weighting(mut self, weight: bool) -> Self {
        self.weight_by_idf = weight;
        self
    }

    pub fn build(&self, words: &[String]) -> UnitVector {
        let mut dimensions: FxHashMap<String, f64> = FxHashMap::default();
        for word in words {
            *dimensions.entry(word.clone()).or_insert(0.0) += 1.0;
        }

        if self.weight_by_idf {
            for (word, value) in dimensions.iter_mut() {
                *value *= self.idf(word);
            }
        }

        UnitVector::from_dimensions(dimensions)
    }

    /// Smoothed inverse document frequency
    fn idf(&self, word: &str) -> f64 {
        let df = self.document_frequency.get(word).copied().unwrap_or(0) as f64;
        ((1.0 + self.num_sentences as f64) / (1.0 + df)).ln() + 1.0
    }
}
