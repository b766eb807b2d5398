//! Word-position weighted TextRank
//!
//! Words that occur in prominent positions (titles, leads) are built with a
//! higher importance. Besides restarting at that importance, this variant
//! scales each transition by the importance of its target:
//!
//! ```text
//! w(j→i) = adjacency(j→i) · importance(i)
//! ```
//!
//! so a word passes more of its score to important neighbors.

use crate::graph::builder::WordGraph;
use crate::graph::csr::RankGraph;

use super::RankGraphFactory;

/// TextRank with importance-weighted transitions
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedPositionRank;

impl RankGraphFactory for WeightedPositionRank {
    fn make_rank_graph(&self, graph: &WordGraph) -> RankGraph {
        let base: Vec<f64> = graph.vertices().map(|(_, v)| v.importance()).collect();
        let edges = graph
            .vertices()
            .map(|(_, v)| {
                v.adjacent()
                    .iter()
                    .map(|(&target, &count)| {
                        let importance = base.get(target as usize).copied().unwrap_or(0.0);
                        (target, f64::from(count) * importance)
                    })
                    .collect()
            })
            .collect();

        RankGraph::from_edges(base, edges)
    }
}
