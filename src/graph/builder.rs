//! Word graph builder
//!
//! Consumes token streams and accumulates vertices, general adjacency and strict
//! left/right neighbor statistics. A graph processes one document (or a
//! pre-merged word stream); `build_*` may be called several times, e.g. once for
//! the title with a higher importance and once for the body.

use crate::graph::vertex::Vertex;
use crate::types::{ExtractorConfig, PosTag, TaggedToken, WeightedWord};
use crate::weights::{NoPhraseWeights, PhraseWeights};
use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Minimum number of characters for a tagged word to become a vertex
pub const MIN_WORD_CHARS: usize = 2;

/// Importance multiplier for place names, person names and other proper nouns
pub const PROPER_NOUN_BOOST: f64 = 1.3;

/// Importance multiplier for verbs
pub const VERB_DISCOUNT: f64 = 0.5;

/// Upper bound on the token cap, so vertex IDs always fit in `u32`
pub const MAX_TOKEN_CAP: usize = u32::MAX as usize;

/// A word co-occurrence graph
pub struct WordGraph {
    /// Maps word -> vertex ID
    word_to_id: FxHashMap<String, u32>,
    /// Vertex storage, in insertion order
    vertices: Vec<Vertex>,
    phrase_weights: Arc<dyn PhraseWeights>,
    max_tokens: usize,
    link_back: bool,
    /// Eligible tokens seen over the lifetime of the graph
    tokens_read: usize,
}

impl Default for WordGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for WordGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordGraph")
            .field("vertices", &self.vertices.len())
            .field("max_tokens", &self.max_tokens)
            .field("link_back", &self.link_back)
            .field("tokens_read", &self.tokens_read)
            .finish_non_exhaustive()
    }
}

impl WordGraph {
    /// Create an empty graph with default limits and no phrase weight overrides
    pub fn new() -> Self {
        Self::from_config(&ExtractorConfig::default())
    }

    /// Create an empty graph using the token cap and link-back mode of `config`
    pub fn from_config(config: &ExtractorConfig) -> Self {
        Self {
            word_to_id: FxHashMap::default(),
            vertices: Vec::new(),
            phrase_weights: Arc::new(NoPhraseWeights),
            max_tokens: config.max_tokens.min(MAX_TOKEN_CAP),
            link_back: config.link_back,
            tokens_read: 0,
        }
    }

    /// Use `weights` as the override table for newly created vertices
    pub fn with_phrase_weights(mut self, weights: Arc<dyn PhraseWeights>) -> Self {
        self.phrase_weights = weights;
        self
    }

    /// Set the lifetime cap on processed tokens
    ///
    /// Values above [`MAX_TOKEN_CAP`] are clamped to it.
    pub fn with_max_tokens(mut self, max_tokens: usize) -> Self {
        self.max_tokens = max_tokens.min(MAX_TOKEN_CAP);
        self
    }

    /// Enable or disable reverse adjacency links
    pub fn with_link_back(mut self, link_back: bool) -> Self {
        self.link_back = link_back;
        self
    }

    /// Build from words carrying their own importance
    ///
    /// Every word is eligible. Words arrive untagged, so no strict neighbor pairs
    /// are recorded and no tag-based importance adjustment applies.
    pub fn build_weighted(&mut self, words: &[WeightedWord]) {
        let mut last: Option<(usize, u32)> = None;

        for (position, entry) in words.iter().enumerate() {
            if !self.accept_token() {
                return;
            }

            let id = self.upsert_vertex(&entry.word, PosTag::untagged(), entry.importance, false);
            if let Some((last_position, last_id)) = last {
                self.link(last_id, id, last_position + 1 == position);
            }
            last = Some((position, id));
        }
    }

    /// Build from a tagged token stream with a document-level importance
    ///
    /// Punctuation and untagged tokens are skipped. Only nouns, adjectives and
    /// verbs of at least [`MIN_WORD_CHARS`] characters become vertices. Skipped
    /// tokens do not interrupt general adjacency, but strict neighbor pairs are
    /// only recorded between tokens that are directly next to each other in
    /// `tokens`.
    pub fn build_tagged(&mut self, tokens: &[TaggedToken], importance: f64) {
        let mut last: Option<(usize, u32)> = None;

        for (position, token) in tokens.iter().enumerate() {
            if token.pos.is_punctuation() || token.pos.is_untagged() {
                continue;
            }
            if token.word.chars().count() < MIN_WORD_CHARS || !token.pos.is_candidate() {
                continue;
            }
            if !self.accept_token() {
                return;
            }

            let id = self.upsert_vertex(&token.word, token.pos.clone(), importance, true);
            if let Some((last_position, last_id)) = last {
                self.link(last_id, id, last_position + 1 == position);
            }
            last = Some((position, id));
        }
    }

    /// Count one more eligible token, returning false once the cap is exceeded
    fn accept_token(&mut self) -> bool {
        self.tokens_read += 1;
        if self.tokens_read > self.max_tokens {
            debug!(
                max_tokens = self.max_tokens,
                "token cap reached, ignoring remaining input"
            );
            return false;
        }
        true
    }

    /// Look up or create the vertex for `word` and count one occurrence
    fn upsert_vertex(&mut self, word: &str, pos: PosTag, importance: f64, tagged: bool) -> u32 {
        if let Some(&id) = self.word_to_id.get(word) {
            let vertex = &mut self.vertices[id as usize];
            vertex.raise_importance(importance);
            vertex.increment_count();
            return id;
        }

        let mut weight = self
            .phrase_weights
            .weight(word)
            .map_or(importance, |w| w.max(importance));
        if tagged {
            if pos.is_proper_noun() {
                weight *= PROPER_NOUN_BOOST;
            } else if pos.is_verb() {
                weight *= VERB_DISCOUNT;
            }
        }

        // Bounded by the token cap, which never exceeds MAX_TOKEN_CAP
        let id = self.vertices.len() as u32;
        let mut vertex = Vertex::new(word, pos, weight);
        vertex.increment_count();
        self.word_to_id.insert(word.to_string(), id);
        self.vertices.push(vertex);
        id
    }

    /// Record adjacency from `prev` to `cur`, plus a strict neighbor pair when
    /// the tokens were directly adjacent and `cur` is noun-like
    fn link(&mut self, prev: u32, cur: u32, contiguous: bool) {
        self.vertices[prev as usize].add_adjacent(cur);
        if self.link_back {
            self.vertices[cur as usize].add_adjacent(prev);
        }

        if contiguous && self.vertices[cur as usize].pos().is_noun_like() {
            self.vertices[cur as usize].add_left_neighbor(prev);
            self.vertices[prev as usize].add_right_neighbor(cur);
        }
    }

    /// Store rank scores and 1-based positions on the vertices
    pub(crate) fn apply_ranking(&mut self, scores: &[f64], ordering: &[u32]) {
        for (position, &id) in ordering.iter().enumerate() {
            let score = scores.get(id as usize).copied().unwrap_or(0.0);
            if let Some(vertex) = self.vertices.get_mut(id as usize) {
                vertex.set_ranking(score, position + 1);
            }
        }
    }

    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Eligible tokens counted so far, including the one that hit the cap
    pub fn tokens_read(&self) -> usize {
        self.tokens_read
    }

    pub fn max_tokens(&self) -> usize {
        self.max_tokens
    }

    pub fn link_back(&self) -> bool {
        self.link_back
    }

    pub fn vertex(&self, id: u32) -> Option<&Vertex> {
        self.vertices.get(id as usize)
    }

    pub fn vertex_id(&self, word: &str) -> Option<u32> {
        self.word_to_id.get(word).copied()
    }

    pub fn vertex_by_name(&self, word: &str) -> Option<&Vertex> {
        self.vertex_id(word).and_then(|id| self.vertex(id))
    }

    /// Get the word for a vertex ID
    pub fn name(&self, id: u32) -> Option<&str> {
        self.vertices.get(id as usize).map(Vertex::name)
    }

    /// Iterate over all vertices in insertion order
    pub fn vertices(&self) -> impl Iterator<Item = (u32, &Vertex)> {
        self.vertices.iter().enumerate().map(|(i, v)| (i as u32, v))
    }

    /// Left neighbors of `word` by name, sorted by word
    pub fn left_neighbors(&self, word: &str) -> Option<Vec<(&str, u32)>> {
        self.vertex_by_name(word)
            .map(|v| self.named_counts(v.left_neighbors()))
    }

    /// Right neighbors of `word` by name, sorted by word
    pub fn right_neighbors(&self, word: &str) -> Option<Vec<(&str, u32)>> {
        self.vertex_by_name(word)
            .map(|v| self.named_counts(v.right_neighbors()))
    }

    fn named_counts(&self, table: &FxHashMap<u32, u32>) -> Vec<(&str, u32)> {
        let mut named: Vec<_> = table
            .iter()
            .filter_map(|(&id, &count)| self.name(id).map(|name| (name, count)))
            .collect();
        named.sort_unstable();
        named
    }

    /// Total undirected adjacency weight: all adjacency counts halved
    pub fn total_edge_weight(&self) -> u64 {
        let total: u64 = self
            .vertices
            .iter()
            .flat_map(|v| v.adjacent().values())
            .map(|&count| u64::from(count))
            .sum();
        total / 2
    }
}
