//! Damped rank propagation
//!
//! Each round recomputes every node as
//!
//! ```text
//! score(i) = (1 − d)·base(i) + d·Σ_j score(j)·w(j→i) / out(j)
//! ```
//!
//! where `out(j)` is the total outgoing weight of `j`. Scores start at the base
//! importance. Isolated nodes (no edges in either direction) are not updated,
//! so an isolated word keeps its base importance. A node that only has
//! outgoing edges falls to `(1 − d)·base(i)`. Scores are not normalized.

use crate::graph::csr::RankGraph;
use crate::types::ExtractorConfig;

use super::RankResult;

/// Damped iterative rank propagation
#[derive(Debug, Clone)]
pub struct DampedRank {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Maximum number of iterations
    pub max_iterations: usize,
    /// Stop early once the L1 delta is at or below this value
    pub threshold: f64,
}

impl Default for DampedRank {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 20,
            threshold: 0.0,
        }
    }
}

impl DampedRank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &ExtractorConfig) -> Self {
        Self {
            damping: config.damping,
            max_iterations: config.max_iterations,
            threshold: config.convergence_threshold,
        }
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the maximum iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Run propagation on a graph
    pub fn run(&self, graph: &RankGraph) -> RankResult {
        let n = graph.num_nodes;
        if n == 0 {
            return RankResult::new(vec![], 0, 0.0, true);
        }

        let mut scores = graph.base.clone();
        let mut new_scores = vec![0.0; n];
        let mut iterations = 0;
        let mut delta = f64::MAX;

        while iterations < self.max_iterations && delta > self.threshold {
            iterations += 1;

            new_scores.fill(0.0);

            // Propagate scores through edges
            for (node, &node_score) in scores.iter().enumerate() {
                let total_weight = graph.node_total_weight(node as u32);

                if total_weight > 0.0 {
                    for (neighbor, weight) in graph.neighbors(node as u32) {
                        new_scores[neighbor as usize] += node_score * weight / total_weight;
                    }
                }
            }

            for i in 0..n {
                new_scores[i] = if graph.is_isolated(i as u32) {
                    scores[i]
                } else {
                    (1.0 - self.damping) * graph.base[i] + self.damping * new_scores[i]
                };
            }

            // Calculate convergence delta (L1 norm)
            delta = scores
                .iter()
                .zip(new_scores.iter())
                .map(|(old, new)| (old - new).abs())
                .sum();

            std::mem::swap(&mut scores, &mut new_scores);
        }

        RankResult::new(scores, iterations, delta, delta <= self.threshold)
    }
}
