//! Word graph vertex
//!
//! A vertex keeps two separate neighbor relations:
//! - `adjacent`: every eligible predecessor/successor, feeds rank propagation
//! - `left_neighbors` / `right_neighbors`: strict, tag-gated adjacency that
//!   feeds phrase combination scoring only

use crate::types::PosTag;
use rustc_hash::FxHashMap;

/// A distinct candidate word in the graph
///
/// Neighbor tables are keyed by vertex ID and map to occurrence counts.
#[derive(Debug, Clone)]
pub struct Vertex {
    name: String,
    pos: PosTag,
    count: u32,
    importance: f64,
    adjacent: FxHashMap<u32, u32>,
    left_neighbors: FxHashMap<u32, u32>,
    right_neighbors: FxHashMap<u32, u32>,
    score: f64,
    rank: usize,
}

impl Vertex {
    /// Create a vertex that has not been counted yet
    pub fn new(name: impl Into<String>, pos: PosTag, importance: f64) -> Self {
        Self {
            name: name.into(),
            pos,
            count: 0,
            importance,
            adjacent: FxHashMap::default(),
            left_neighbors: FxHashMap::default(),
            right_neighbors: FxHashMap::default(),
            score: 0.0,
            rank: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tag seen when the vertex was first created
    pub fn pos(&self) -> &PosTag {
        &self.pos
    }

    /// Number of occurrences seen while building
    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn importance(&self) -> f64 {
        self.importance
    }

    /// Rank propagation score, zero until the graph has been ranked
    pub fn score(&self) -> f64 {
        self.score
    }

    /// 1-based position in the final ranking, zero until ranked
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// General adjacency: target vertex ID -> traversal count
    pub fn adjacent(&self) -> &FxHashMap<u32, u32> {
        &self.adjacent
    }

    /// Words observed directly before this one: vertex ID -> count
    pub fn left_neighbors(&self) -> &FxHashMap<u32, u32> {
        &self.left_neighbors
    }

    /// Words observed directly after this one: vertex ID -> count
    pub fn right_neighbors(&self) -> &FxHashMap<u32, u32> {
        &self.right_neighbors
    }

    /// Sum of outgoing adjacency counts
    pub fn out_weight(&self) -> u32 {
        self.adjacent.values().sum()
    }

    /// Raise importance to `importance` if it is larger; never lowers it
    pub(crate) fn raise_importance(&mut self, importance: f64) {
        if importance > self.importance {
            self.importance = importance;
        }
    }

    pub(crate) fn increment_count(&mut self) {
        self.count += 1;
    }

    pub(crate) fn add_adjacent(&mut self, target: u32) {
        *self.adjacent.entry(target).or_insert(0) += 1;
    }

    pub(crate) fn add_left_neighbor(&mut self, word: u32) {
        *self.left_neighbors.entry(word).or_insert(0) += 1;
    }

    pub(crate) fn add_right_neighbor(&mut self, word: u32) {
        *self.right_neighbors.entry(word).or_insert(0) += 1;
    }

    pub(crate) fn set_ranking(&mut self, score: f64, rank: usize) {
        self.score = score;
        self.rank = rank;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_vertex() {
        let v = Vertex::new("图书馆", PosTag::new("n"), 1.5);
        assert_eq!(v.name(), "图书馆");
        assert_eq!(v.pos().as_str(), "n");
        assert_eq!(v.count(), 0);
        assert!((v.importance() - 1.5).abs() < 1e-12);
        assert!(v.adjacent().is_empty());
        assert_eq!(v.rank(), 0);
    }

    #[test]
    fn test_importance_never_lowered() {
        let mut v = Vertex::new("word", PosTag::untagged(), 2.0);
        v.raise_importance(1.0);
        assert!((v.importance() - 2.0).abs() < 1e-12);
        v.raise_importance(3.0);
        assert!((v.importance() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_neighbor_counts_accumulate() {
        let mut v = Vertex::new("word", PosTag::new("n"), 1.0);
        v.add_adjacent(1);
        v.add_adjacent(1);
        v.add_adjacent(2);
        v.add_left_neighbor(3);
        v.add_right_neighbor(4);
        v.add_right_neighbor(4);

        assert_eq!(v.adjacent().get(&1), Some(&2));
        assert_eq!(v.out_weight(), 3);
        assert_eq!(v.left_neighbors().get(&3), Some(&1));
        assert_eq!(v.right_neighbors().get(&4), Some(&2));
    }
}
