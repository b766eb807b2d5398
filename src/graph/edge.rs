//! Combination degree of strict neighbor pairs
//!
//! A [`WordEdge`] is an ordered `(source, destination)` pair taken from the
//! strict left/right neighbor tables. Its score estimates how strongly the two
//! words behave as one fixed phrase:
//!
//! ```text
//! value = 3·ln(pair) − ln(leftOut) − ln(rightIn)
//!         − log2(|source|) − log2(|destination|)
//!         + H(left neighbors of source) + H(right neighbors of destination)
//! score = round(value × 1000)
//! ```
//!
//! `leftOut` and `rightIn` are the Laplace-smoothed totals of the source's
//! right neighbors and the destination's left neighbors. Entropies are base 2
//! over distributions normalized by `sum + 1`.

use crate::graph::builder::WordGraph;
use crate::graph::vertex::Vertex;
use std::cell::OnceCell;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Sum of counts plus one
pub fn smoothed_sum<I>(counts: I) -> f64
where
    I: IntoIterator<Item = u32>,
{
    counts.into_iter().map(f64::from).sum::<f64>() + 1.0
}

/// Base-2 Shannon entropy of a count distribution normalized by `sum + 1`
///
/// Returns 0 for an empty distribution.
pub fn entropy<I>(counts: I) -> f64
where
    I: IntoIterator<Item = u32> + Clone,
{
    let total = smoothed_sum(counts.clone());
    counts
        .into_iter()
        .filter(|&c| c > 0)
        .map(|c| {
            let p = f64::from(c) / total;
            -p * p.log2()
        })
        .sum()
}

/// Every term of a combination degree computation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CombinationDegree {
    /// Raw frequency of this ordered pair
    pub pair_count: u32,
    /// Smoothed total of the source's right neighbors
    pub left_out: f64,
    /// Smoothed total of the destination's left neighbors
    pub right_in: f64,
    /// Entropy of what precedes the source
    pub left_entropy: f64,
    /// Entropy of what follows the destination
    pub right_entropy: f64,
    /// `log2(|source|) + log2(|destination|)` in characters
    pub length_penalty: f64,
    /// `log2` of the graph's total undirected edge weight, 0 for an edgeless graph
    pub norm: f64,
}

impl CombinationDegree {
    pub fn value(&self) -> f64 {
        3.0 * f64::from(self.pair_count).ln() - self.left_out.ln() - self.right_in.ln()
            - self.length_penalty
            + self.left_entropy
            + self.right_entropy
    }

    /// Integer score: the value scaled by 1000 and rounded
    pub fn score(&self) -> i64 {
        (self.value() * 1000.0).round() as i64
    }
}

/// An ordered strict neighbor pair with a lazily computed score
///
/// Identity is the `(source, destination)` pair. The score is computed on first
/// access and cached; build a new edge if the graph changes.
#[derive(Debug)]
pub struct WordEdge<'g> {
    graph: &'g WordGraph,
    source: u32,
    destination: u32,
    count: u32,
    score: OnceCell<i64>,
}

impl<'g> WordEdge<'g> {
    pub fn new(graph: &'g WordGraph, source: u32, destination: u32, count: u32) -> Self {
        Self {
            graph,
            source,
            destination,
            count,
            score: OnceCell::new(),
        }
    }

    pub fn source_id(&self) -> u32 {
        self.source
    }

    pub fn destination_id(&self) -> u32 {
        self.destination
    }

    pub fn source(&self) -> &'g str {
        self.graph.name(self.source).unwrap_or_default()
    }

    pub fn destination(&self) -> &'g str {
        self.graph.name(self.destination).unwrap_or_default()
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// The combination degree score, computed once per edge
    pub fn score(&self) -> i64 {
        *self.score.get_or_init(|| self.breakdown().score())
    }

    /// Whether the score has been computed yet
    pub fn is_scored(&self) -> bool {
        self.score.get().is_some()
    }

    /// Compute every term of the combination degree without caching
    pub fn breakdown(&self) -> CombinationDegree {
        let source = self.graph.vertex(self.source);
        let destination = self.graph.vertex(self.destination);

        let left_entropy = source.map_or(0.0, |v| entropy(v.left_neighbors().values().copied()));
        let right_entropy =
            destination.map_or(0.0, |v| entropy(v.right_neighbors().values().copied()));
        let left_out = source.map_or(1.0, |v| smoothed_sum(v.right_neighbors().values().copied()));
        let right_in =
            destination.map_or(1.0, |v| smoothed_sum(v.left_neighbors().values().copied()));

        let total_weight = self.graph.total_edge_weight();
        let norm = if total_weight > 0 {
            (total_weight as f64).log2()
        } else {
            0.0
        };

        CombinationDegree {
            pair_count: self.count,
            left_out,
            right_in,
            left_entropy,
            right_entropy,
            length_penalty: char_log2(source) + char_log2(destination),
            norm,
        }
    }

    /// Descending score, then source and destination in lexical order
    pub fn ranking_order(a: &Self, b: &Self) -> Ordering {
        b.score()
            .cmp(&a.score())
            .then_with(|| a.source().cmp(b.source()))
            .then_with(|| a.destination().cmp(b.destination()))
    }
}

fn char_log2(vertex: Option<&Vertex>) -> f64 {
    let chars = vertex.map_or(1, |v| v.name().chars().count()).max(1);
    (chars as f64).log2()
}

impl PartialEq for WordEdge<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.destination == other.destination
    }
}

impl Eq for WordEdge<'_> {}

impl Hash for WordEdge<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source.hash(state);
        self.destination.hash(state);
    }
}
