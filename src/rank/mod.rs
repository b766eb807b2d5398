//! Rank propagation over the word graph
//!
//! Ranking happens in two steps: a [`RankGraphFactory`] turns the word graph
//! into a weighted [`RankGraph`], then [`DampedRank`] iterates over it. The
//! factories are the pluggable part; the iteration is shared.

pub mod damped;
pub mod position;
pub mod textrank;

pub use damped::DampedRank;
pub use position::WeightedPositionRank;
pub use textrank::TextRank;

use crate::graph::builder::WordGraph;
use crate::graph::csr::RankGraph;
use crate::types::RankVariant;
use tracing::debug;

/// Strategy for building the propagation graph from a word graph
pub trait RankGraphFactory: Send + Sync {
    /// Build a rank graph whose node IDs are the word graph's vertex IDs
    fn make_rank_graph(&self, graph: &WordGraph) -> RankGraph;
}

/// Get the factory for a configured variant
pub fn factory_for(variant: RankVariant) -> Box<dyn RankGraphFactory> {
    match variant {
        RankVariant::TextRank => Box::new(TextRank),
        RankVariant::WeightedPosition => Box::new(WeightedPositionRank),
    }
}

/// Result of a rank propagation run
#[derive(Debug, Clone)]
pub struct RankResult {
    /// Scores for each node (indexed by node ID)
    pub scores: Vec<f64>,
    /// Number of iterations performed
    pub iterations: usize,
    /// L1 change of the last iteration
    pub delta: f64,
    /// Whether the delta dropped to the convergence threshold
    pub converged: bool,
}

impl RankResult {
    pub fn new(scores: Vec<f64>, iterations: usize, delta: f64, converged: bool) -> Self {
        Self {
            scores,
            iterations,
            delta,
            converged,
        }
    }

    /// Node IDs sorted by descending score
    ///
    /// Equal scores keep ascending ID order, i.e. vertex insertion order.
    pub fn ordering(&self) -> Vec<u32> {
        let mut ids: Vec<u32> = (0..self.scores.len() as u32).collect();
        ids.sort_by(|&a, &b| self.scores[b as usize].total_cmp(&self.scores[a as usize]));
        ids
    }

    /// Get the score for a specific node
    pub fn score(&self, node: u32) -> f64 {
        self.scores.get(node as usize).copied().unwrap_or(0.0)
    }
}

/// Rank every vertex of `graph` and store scores and positions on the vertices
///
/// Returns `(vertex ID, score)` pairs, best first.
pub fn rank_words(
    graph: &mut WordGraph,
    factory: &dyn RankGraphFactory,
    engine: &DampedRank,
) -> Vec<(u32, f64)> {
    let rank_graph = factory.make_rank_graph(graph);
    let result = engine.run(&rank_graph);
    debug!(
        vertices = rank_graph.num_nodes,
        edges = rank_graph.num_edges(),
        iterations = result.iterations,
        delta = result.delta,
        "rank propagation finished"
    );

    let ordering = result.ordering();
    graph.apply_ranking(&result.scores, &ordering);

    ordering
        .into_iter()
        .map(|id| (id, result.score(id)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TaggedToken;

    #[test]
    fn test_ordering_is_stable() {
        let result = RankResult::new(vec![1.0, 2.0, 1.0, 2.0], 1, 0.0, true);
        assert_eq!(result.ordering(), vec![1, 3, 0, 2]);
        assert_eq!(result.score(9), 0.0);
    }

    #[test]
    fn test_rank_words_updates_vertices() {
        let tokens: Vec<_> = ["alpha", "beta", "alpha", "beta", "alpha", "beta", "gamma"]
            .iter()
            .map(|w| TaggedToken::new(*w, "n"))
            .collect();
        let mut graph = WordGraph::new();
        graph.build_tagged(&tokens, 1.0);

        let ranked = rank_words(&mut graph, &TextRank, &DampedRank::default());
        let names: Vec<_> = ranked.iter().map(|&(id, _)| graph.name(id).unwrap()).collect();
        assert_eq!(names, vec!["beta", "alpha", "gamma"]);

        let beta = graph.vertex_by_name("beta").unwrap();
        assert_eq!(beta.rank(), 1);
        assert!((beta.score() - ranked[0].1).abs() < 1e-12);
        assert_eq!(graph.vertex_by_name("gamma").unwrap().rank(), 3);
    }

    #[test]
    fn test_rank_words_without_link_back() {
        let tokens: Vec<_> = ["alpha", "beta", "gamma"]
            .iter()
            .map(|w| TaggedToken::new(*w, "n"))
            .collect();
        let mut graph = WordGraph::new().with_link_back(false);
        graph.build_tagged(&tokens, 1.0);

        let ranked = rank_words(&mut graph, &TextRank, &DampedRank::default());
        let names: Vec<_> = ranked.iter().map(|&(id, _)| graph.name(id).unwrap()).collect();
        assert_eq!(names, vec!["gamma", "beta", "alpha"]);

        let alpha = graph.vertex_by_name("alpha").unwrap();
        assert!((alpha.score() - 0.15).abs() < 1e-12);
        assert_eq!(alpha.rank(), 3);
    }

    #[test]
    fn test_rank_words_empty_graph() {
        let mut graph = WordGraph::new();
        let ranked = rank_words(&mut graph, &TextRank, &DampedRank::default());
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_factory_for_variant() {
        let tokens = vec![TaggedToken::new("alpha", "n"), TaggedToken::new("beta", "n")];
        let mut graph = WordGraph::new();
        graph.build_tagged(&tokens, 1.0);

        for variant in [RankVariant::TextRank, RankVariant::WeightedPosition] {
            let rank_graph = factory_for(variant).make_rank_graph(&graph);
            assert_eq!(rank_graph.num_nodes, 2);
            assert_eq!(rank_graph.num_edges(), 2);
        }
    }
}
