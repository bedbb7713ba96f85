//! PageRank over the sentence similarity graph

pub mod standard;

/// Result of a PageRank computation
#[derive(Debug, Clone)]
pub struct PageRankResult {
    /// Scores for each node (indexed by node ID)
    pub scores: Vec<f64>,
    pub iterations: usize,
    /// Final convergence delta
    pub delta: f64,
    pub converged: bool,
}

impl PageRankResult {
    pub fn new(scores: Vec<f64>, iterations: usize, delta: f64, converged: bool) -> Self {
        Self {
            scores,
            iterations,
            delta,
            converged,
        }
    }

    /// Top N nodes by score; ties go to the lower node ID
    pub fn top_n(&self, n: usize) -> Vec<(u32, f64)> {
        let mut indexed: Vec<_> = self
            .scores
            .iter()
            .enumerate()
            .map(|(i, &s)| (i as u32, s))
            .collect();
        indexed.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        indexed.truncate(n);
        indexed
    }

    pub fn score(&self, node: u32) -> f64 {
        self.scores.get(node as usize).copied().unwrap_or(0.0)
    }

    /// Every score is a finite number
    pub fn is_finite(&self) -> bool {
        self.scores.iter().all(|s| s.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_n_breaks_ties_by_node() {
        let result = PageRankResult::new(vec![0.2, 0.4, 0.2, 0.2], 3, 0.0, true);
        let top = result.top_n(3);
        assert_eq!(top.iter().map(|(n, _)| *n).collect::<Vec<_>>(), vec![1, 0, 2]);
    }

    #[test]
    fn test_score_out_of_range() {
        let result = PageRankResult::new(vec![1.0], 1, 0.0, true);
        assert_eq!(result.score(5), 0.0);
    }

    #[test]
    fn test_is_finite() {
        assert!(PageRankResult::new(vec![0.5, 0.5], 1, 0.0, true).is_finite());
        assert!(!PageRankResult::new(vec![f64::NAN, 0.5], 1, 0.0, true).is_finite());
    }
}
