//! Merging ranked words and scored word pairs
//!
//! 1. Take the best `max(top_n, min_pool_size)` non-stop words: the keyword pool.
//! 2. Score every strict neighbor pair and keep the best `limit` of them.
//! 3. A kept pair whose words are both in the pool becomes a two-word phrase
//!    scored `(edge rank + log2(pool index of left + 1) + log2(pool index of right + 1)) / 3`.
//! 4. Each pool word starts at its pool rank and is penalized by
//!    `log2(limit − j)` for every phrase `j` it belongs to.
//! 5. Everything is sorted ascending by score.
//!
//! The penalty keeps a strong word and the strong phrase containing it from
//! both crowding the top of the list.

use crate::graph::builder::WordGraph;
use crate::graph::edge::WordEdge;
use crate::nlp::stopwords::StopWords;
use crate::phrase::Phrase;
use crate::types::ExtractorConfig;
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

/// Builds the merged single-word / two-word result list
pub struct PhraseAssembler<'s> {
    stopwords: &'s dyn StopWords,
    min_pool_size: usize,
    parallel_edge_threshold: usize,
}

impl<'s> PhraseAssembler<'s> {
    pub fn new(stopwords: &'s dyn StopWords) -> Self {
        Self::from_config(stopwords, &ExtractorConfig::default())
    }

    pub fn from_config(stopwords: &'s dyn StopWords, config: &ExtractorConfig) -> Self {
        Self {
            stopwords,
            min_pool_size: config.min_pool_size,
            parallel_edge_threshold: config.parallel_edge_threshold,
        }
    }

    pub fn with_min_pool_size(mut self, min_pool_size: usize) -> Self {
        self.min_pool_size = min_pool_size;
        self
    }

    pub fn with_parallel_edge_threshold(mut self, threshold: usize) -> Self {
        self.parallel_edge_threshold = threshold;
        self
    }

    /// Size of the keyword pool for a request of `top_n` results
    pub fn pool_limit(&self, top_n: usize) -> usize {
        top_n.max(self.min_pool_size)
    }

    /// The first `limit` non-stop words of `ranked`, in rank order
    pub fn keyword_pool(&self, graph: &WordGraph, ranked: &[u32], limit: usize) -> Vec<u32> {
        ranked
            .iter()
            .copied()
            .filter(|&id| {
                graph
                    .name(id)
                    .is_some_and(|word| !self.stopwords.is_stopword(word))
            })
            .take(limit)
            .collect()
    }

    /// Every distinct strict neighbor pair, best combination degree first
    ///
    /// Ties are ordered by source, then destination.
    pub fn scored_edges<'g>(&self, graph: &'g WordGraph) -> Vec<WordEdge<'g>> {
        let mut seen: FxHashSet<(u32, u32)> = FxHashSet::default();
        let mut edges = Vec::new();

        for (id, vertex) in graph.vertices() {
            for (&left, &count) in vertex.left_neighbors() {
                if seen.insert((left, id)) {
                    edges.push(WordEdge::new(graph, left, id, count));
                }
            }
            for (&right, &count) in vertex.right_neighbors() {
                if seen.insert((id, right)) {
                    edges.push(WordEdge::new(graph, id, right, count));
                }
            }
        }

        // Scores only read the graph, so large edge sets are scored in parallel
        if edges.len() > self.parallel_edge_threshold {
            edges.par_iter_mut().for_each(|edge| {
                edge.score();
            });
        }

        edges.sort_by(WordEdge::ranking_order);
        edges
    }

    /// Merge ranked words and phrases, returning at most `top_n` entries
    ///
    /// `ranked` holds vertex IDs in descending rank order.
    pub fn assemble(&self, graph: &WordGraph, ranked: &[u32], top_n: usize) -> Vec<Phrase> {
        let limit = self.pool_limit(top_n);
        let pool = self.keyword_pool(graph, ranked, limit);
        let pool_index: FxHashMap<u32, usize> =
            pool.iter().enumerate().map(|(i, &id)| (id, i)).collect();

        let edges = self.scored_edges(graph);

        let mut two_words = Vec::new();
        for (i, edge) in edges.iter().take(limit).enumerate() {
            let (Some(&left), Some(&right)) = (
                pool_index.get(&edge.source_id()),
                pool_index.get(&edge.destination_id()),
            ) else {
                continue;
            };

            let rank = i + 1;
            let score = (rank as f64 + log2_index(left) + log2_index(right)) / 3.0;
            two_words.push(Phrase::two_word(
                edge.source(),
                edge.destination(),
                rank,
                score,
            ));
        }

        let single_words: Vec<Phrase> = pool
            .iter()
            .enumerate()
            .filter_map(|(i, &id)| {
                let word = graph.name(id)?;
                let penalty: f64 = two_words
                    .iter()
                    .enumerate()
                    .filter(|(_, pair)| pair.contains(word))
                    .map(|(j, _)| ((limit - j) as f64).log2())
                    .sum();

                let mut phrase = Phrase::single_word(word, i + 1);
                phrase.add_to_score(penalty);
                Some(phrase)
            })
            .collect();

        debug!(
            edges = edges.len(),
            pool = pool.len(),
            two_word_candidates = two_words.len(),
            "phrase assembly finished"
        );

        let mut results = two_words;
        results.extend(single_words);
        results.sort_by(|a, b| a.score().total_cmp(&b.score()));
        results.truncate(top_n);
        results
    }
}

/// `log2(index + 1)` for a 0-based pool index
fn log2_index(index: usize) -> f64 {
    ((index + 1) as f64).log2()
}
