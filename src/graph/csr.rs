//! Compressed Sparse Row (CSR) rank graph
//!
//! The rank engine repeatedly walks every weighted edge, so the word graph's
//! hash-map adjacency is flattened into contiguous arrays once per ranking.
//! Node IDs are the word graph's vertex IDs.

/// A weighted directed graph in Compressed Sparse Row format
#[derive(Debug, Clone)]
pub struct RankGraph {
    /// Number of nodes
    pub num_nodes: usize,
    /// Row pointers: node i's edges are at indices row_ptr[i]..row_ptr[i+1]
    pub row_ptr: Vec<usize>,
    /// Column indices (target nodes) for each edge
    pub col_idx: Vec<u32>,
    /// Transition weights
    pub weights: Vec<f64>,
    /// Total outgoing weight for each node
    pub total_weight: Vec<f64>,
    /// Base importance for each node, the restart term of propagation
    pub base: Vec<f64>,
    /// Whether any edge points at each node
    pub has_incoming: Vec<bool>,
}

impl RankGraph {
    /// Build from per-node outgoing edge lists and base importances
    ///
    /// Edges with non-positive weight are dropped. Each node's edges are sorted
    /// by target so iteration order does not depend on hash-map order.
    pub fn from_edges(base: Vec<f64>, edges: Vec<Vec<(u32, f64)>>) -> Self {
        let num_nodes = base.len();
        let mut row_ptr = Vec::with_capacity(num_nodes + 1);
        let mut col_idx = Vec::new();
        let mut weights = Vec::new();
        let mut total_weight = Vec::with_capacity(num_nodes);
        let mut has_incoming = vec![false; num_nodes];

        row_ptr.push(0);

        for mut node_edges in edges.into_iter().take(num_nodes) {
            node_edges.retain(|&(target, w)| w > 0.0 && (target as usize) < num_nodes);
            node_edges.sort_by_key(|&(target, _)| target);

            total_weight.push(node_edges.iter().map(|(_, w)| w).sum());

            for (target, weight) in node_edges {
                has_incoming[target as usize] = true;
                col_idx.push(target);
                weights.push(weight);
            }

            row_ptr.push(col_idx.len());
        }

        // Nodes without an edge list
        while row_ptr.len() < num_nodes + 1 {
            total_weight.push(0.0);
            row_ptr.push(col_idx.len());
        }

        Self {
            num_nodes,
            row_ptr,
            col_idx,
            weights,
            total_weight,
            base,
            has_incoming,
        }
    }

    /// Iterate over outgoing edges of a node
    pub fn neighbors(&self, node: u32) -> impl Iterator<Item = (u32, f64)> + '_ {
        let start = self.row_ptr[node as usize];
        let end = self.row_ptr[node as usize + 1];
        (start..end).map(move |i| (self.col_idx[i], self.weights[i]))
    }

    /// Get the out-degree of a node
    pub fn degree(&self, node: u32) -> usize {
        self.row_ptr[node as usize + 1] - self.row_ptr[node as usize]
    }

    /// Get the total outgoing weight of a node
    pub fn node_total_weight(&self, node: u32) -> f64 {
        self.total_weight[node as usize]
    }

    pub fn is_empty(&self) -> bool {
        self.num_nodes == 0
    }

    /// A node with no incoming and no outgoing edges
    pub fn is_isolated(&self, node: u32) -> bool {
        !self.has_incoming[node as usize] && self.total_weight[node as usize] == 0.0
    }

    /// Get the number of directed edges
    pub fn num_edges(&self) -> usize {
        self.col_idx.len()
    }
}

impl Default for RankGraph {
    fn default() -> Self {
        Self::from_edges(Vec::new(), Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_test_graph() -> RankGraph {
        RankGraph::from_edges(
            vec![1.0, 1.0, 2.0],
            vec![
                vec![(2, 1.5), (1, 1.0)],
                vec![(0, 1.0), (2, 2.0)],
                vec![(0, 1.5), (1, 2.0)],
            ],
        )
    }

    #[test]
    fn test_csr_conversion() {
        let graph = build_test_graph();

        assert_eq!(graph.num_nodes, 3);
        assert_eq!(graph.num_edges(), 6);
        assert_eq!(graph.base, vec![1.0, 1.0, 2.0]);
    }

    #[test]
    fn test_neighbors_sorted_by_target() {
        let graph = build_test_graph();

        let neighbors: Vec<_> = graph.neighbors(0).collect();
        assert_eq!(neighbors, vec![(1, 1.0), (2, 1.5)]);
    }

    #[test]
    fn test_degree_and_weight() {
        let graph = build_test_graph();

        assert_eq!(graph.degree(0), 2);
        assert!((graph.node_total_weight(0) - 2.5).abs() < 1e-10);
    }

    #[test]
    fn test_isolated_node() {
        let graph = RankGraph::from_edges(
            vec![1.0, 1.0, 1.0],
            vec![vec![(1, 1.0)], vec![(0, 1.0)], vec![]],
        );

        assert_eq!(graph.degree(2), 0);
        assert!(!graph.has_incoming[2]);
        assert!(graph.has_incoming[0]);
        assert!(graph.is_isolated(2));
        assert!(!graph.is_isolated(0));
    }

    #[test]
    fn test_source_only_node_is_not_isolated() {
        let graph = RankGraph::from_edges(vec![1.0, 1.0], vec![vec![(1, 1.0)], vec![]]);

        assert!(!graph.has_incoming[0]);
        assert!(!graph.is_isolated(0));
        assert!(!graph.is_isolated(1));
    }

    #[test]
    fn test_zero_weight_edges_dropped() {
        let graph = RankGraph::from_edges(vec![1.0, 1.0], vec![vec![(1, 0.0)], vec![]]);

        assert_eq!(graph.num_edges(), 0);
        assert!(!graph.has_incoming[1]);
    }

    #[test]
    fn test_missing_edge_lists() {
        let graph = RankGraph::from_edges(vec![1.0, 1.0], vec![vec![(1, 1.0)]]);

        assert_eq!(graph.row_ptr.len(), 3);
        assert_eq!(graph.degree(1), 0);
        assert_eq!(graph.total_weight.len(), 2);
    }

    #[test]
    fn test_empty_graph() {
        let graph = RankGraph::default();

        assert!(graph.is_empty());
        assert_eq!(graph.num_edges(), 0);
    }
}
