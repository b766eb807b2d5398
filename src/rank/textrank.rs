//! Plain TextRank rank graph
//!
//! Transition weights are the raw adjacency counts and every word restarts
//! at its own importance.

use crate::graph::builder::WordGraph;
use crate::graph::csr::RankGraph;

use super::RankGraphFactory;

/// TextRank over adjacency counts
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRank;

impl RankGraphFactory for TextRank {
    fn make_rank_graph(&self, graph: &WordGraph) -> RankGraph {
        let base = graph.vertices().map(|(_, v)| v.importance()).collect();
        let edges = graph
            .vertices()
            .map(|(_, v)| {
                v.adjacent()
                    .iter()
                    .map(|(&target, &count)| (target, f64::from(count)))
                    .collect()
            })
            .collect();

        RankGraph::from_edges(base, edges)
    }
}
