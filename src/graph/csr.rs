//! Compressed Sparse Row (CSR) graph representation
//!
//! CSR keeps each node's edges contiguous, which is what PageRank iterates
//! over on every step.

use super::builder::GraphBuilder;

/// A graph in Compressed Sparse Row format
#[derive(Debug, Clone)]
pub struct CsrGraph {
    pub num_nodes: usize,
    /// Node i's edges are at indices row_ptr[i]..row_ptr[i+1]
    pub row_ptr: Vec<usize>,
    /// Target node of each edge
    pub col_idx: Vec<u32>,
    pub weights: Vec<f64>,
    /// Total outgoing weight per node
    pub total_weight: Vec<f64>,
    /// Sentence index per node
    pub sentences: Vec<usize>,
}

impl CsrGraph {
    /// Freeze a GraphBuilder into CSR format
    pub fn from_builder(builder: &GraphBuilder) -> Self {
        let num_nodes = builder.node_count();
        let mut row_ptr = Vec::with_capacity(num_nodes + 1);
        let mut col_idx = Vec::new();
        let mut weights = Vec::new();
        let mut total_weight = Vec::with_capacity(num_nodes);
        let mut sentences = Vec::with_capacity(num_nodes);

        row_ptr.push(0);

        for (_, node) in builder.nodes() {
            sentences.push(node.sentence);

            // Sorted for deterministic iteration
            let mut edges: Vec<_> = node.edges.iter().map(|(&k, &v)| (k, v)).collect();
            edges.sort_by_key(|(k, _)| *k);

            total_weight.push(edges.iter().map(|(_, w)| w).sum());

            for (target, weight) in edges {
                col_idx.push(target);
                weights.push(weight);
            }

            row_ptr.push(col_idx.len());
        }

        Self {
            num_nodes,
            row_ptr,
            col_idx,
            weights,
            total_weight,
            sentences,
        }
    }

    pub fn neighbors(&self, node: u32) -> impl Iterator<Item = (u32, f64)> + '_ {
        let start = self.row_ptr[node as usize];
        let end = self.row_ptr[node as usize + 1];
        (start..end).map(move |i| (self.col_idx[i], self.weights[i]))
    }

    pub fn node_total_weight(&self, node: u32) -> f64 {
        self.total_weight[node as usize]
    }

    pub fn sentence(&self, node: u32) -> usize {
        self.sentences[node as usize]
    }

    pub fn is_empty(&self) -> bool {
        self.num_nodes == 0
    }

    /// Total number of edges, each undirected edge counted twice
    pub fn num_edges(&self) -> usize {
        self.col_idx.len()
    }

    /// Nodes with no outgoing weight
    pub fn dangling_nodes(&self) -> Vec<u32> {
        (0..self.num_nodes as u32)
            .filter(|&n| self.total_weight[n as usize] <= 0.0)
            .collect()
    }
}

impl Default for CsrGraph {
    fn default() -> Self {
        Self {
            num_nodes: 0,
            row_ptr: vec![0],
            col_idx: Vec::new(),
            weights: Vec::new(),
            total_weight: Vec::new(),
            sentences: Vec::new(),
        }
    }
}
