//! Sentence similarity graph builder
//!
//! Nodes are sentences, edges are weighted by word overlap. Uses FxHashMap
//! for O(1) edge lookups during construction.

use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Documents with at least this many sentences build rows in parallel
pub const PARALLEL_THRESHOLD: usize = 64;

/// A node in the graph builder
#[derive(Debug, Clone)]
pub struct BuilderNode {
    /// Index of the sentence this node stands for
    pub sentence: usize,
    /// Adjacency list: target node ID -> edge weight
    pub edges: FxHashMap<u32, f64>,
}

impl BuilderNode {
    pub fn new(sentence: usize) -> Self {
        Self {
            sentence,
            edges: FxHashMap::default(),
        }
    }
}

/// A mutable, undirected graph builder
#[derive(Debug, Default)]
pub struct GraphBuilder {
    nodes: Vec<BuilderNode>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(node_capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(node_capacity),
        }
    }

    /// Add a node for a sentence, returning its ID
    pub fn add_node(&mut self, sentence: usize) -> u32 {
        let id = self.nodes.len() as u32;
        self.nodes.push(BuilderNode::new(sentence));
        id
    }

    /// Add `weight` to the undirected edge between two nodes.
    ///
    /// Self-loops and non-positive weights are ignored.
    pub fn increment_edge(&mut self, from: u32, to: u32, weight: f64) {
        if from == to || weight <= 0.0 {
            return;
        }

        if let Some(node) = self.nodes.get_mut(from as usize) {
            *node.edges.entry(to).or_insert(0.0) += weight;
        }
        if let Some(node) = self.nodes.get_mut(to as usize) {
            *node.edges.entry(from).or_insert(0.0) += weight;
        }
    }

    /// Build the similarity graph for a list of sentence word lists.
    ///
    /// Node `i` corresponds to `sentences[i]`.
    pub fn from_sentences(sentences: &[Vec<String>]) -> Self {
        let mut builder = Self::with_capacity(sentences.len());
        for i in 0..sentences.len() {
            builder.add_node(i);
        }

        for i in 0..sentences.len() {
            for j in (i + 1)..sentences.len() {
                let weight = overlap_weight(&sentences[i], &sentences[j]);
                builder.increment_edge(i as u32, j as u32, weight);
            }
        }

        builder
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.edges.len()).sum::<usize>() / 2
    }

    pub fn get_node(&self, id: u32) -> Option<&BuilderNode> {
        self.nodes.get(id as usize)
    }

    pub fn nodes(&self) -> impl Iterator<Item = (u32, &BuilderNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (i as u32, n))
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Similarity of two sentences.
///
/// Counts, for every word of `a`, its occurrences in `b`, then normalizes by
/// `ln|a| + ln|b|`. When that norm is zero (two one-word sentences) the raw
/// count is used.
pub fn overlap_weight(a: &[String], b: &[String]) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
    for word in b {
        *counts.entry(word.as_str()).or_insert(0) += 1;
    }

    let shared: usize = a
        .iter()
        .map(|w| counts.get(w.as_str()).copied().unwrap_or(0))
        .sum();
    if shared == 0 {
        return 0.0;
    }

    let norm = (a.len() as f64).ln() + (b.len() as f64).ln();
    if norm.abs() < 1e-8 {
        shared as f64
    } else {
        shared as f64 / norm
    }
}

/// Build the similarity graph, computing rows in parallel for large documents
pub fn build_graph_parallel(sentences: &[Vec<String>]) -> GraphBuilder {
    if sentences.len() < PARALLEL_THRESHOLD {
        return GraphBuilder::from_sentences(sentences);
    }

    let rows: Vec<Vec<(u32, f64)>> = (0..sentences.len())
        .into_par_iter()
        .map(|i| {
            ((i + 1)..sentences.len())
                .filter_map(|j| {
                    let weight = overlap_weight(&sentences[i], &sentences[j]);
                    (weight > 0.0).then_some((j as u32, weight))
                })
                .collect()
        })
        .collect();

    let mut builder = GraphBuilder::with_capacity(sentences.len());
    for i in 0..sentences.len() {
        builder.add_node(i);
    }
    for (i, row) in rows.into_iter().enumerate() {
        for (j, weight) in row {
            builder.increment_edge(i as u32, j, weight);
        }
    }

    builder
}
