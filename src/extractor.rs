//! Keyword extraction entry point
//!
//! [`KeywordExtractor`] wires the collaborators together: a rank-graph
//! strategy, a stop-word filter and the phrase weight table handed to every
//! graph it creates.
//!
//! ```rust,ignore
//! use wordgraph_rank::{KeywordExtractor, TaggedToken};
//!
//! let extractor = KeywordExtractor::new();
//! let mut graph = extractor.new_graph();
//! graph.build_tagged(&title_tokens, 5.0);
//! graph.build_tagged(&body_tokens, 1.0);
//! let keywords = extractor.extract_keywords(&mut graph, 10, true);
//! ```

use crate::graph::builder::WordGraph;
use crate::nlp::stopwords::{StopWords, StopwordFilter};
use crate::phrase::assembler::PhraseAssembler;
use crate::phrase::Phrase;
use crate::rank::{factory_for, rank_words, DampedRank, RankGraphFactory};
use crate::types::{ExtractorConfig, TaggedToken, WeightedWord};
use crate::weights::{NoPhraseWeights, PhraseWeights};
use std::fmt;
use std::sync::Arc;
use tracing::info_span;

/// Extracts ranked keywords and two-word keyphrases from word graphs
pub struct KeywordExtractor {
    config: ExtractorConfig,
    factory: Box<dyn RankGraphFactory>,
    stopwords: Box<dyn StopWords>,
    phrase_weights: Arc<dyn PhraseWeights>,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for KeywordExtractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeywordExtractor")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl KeywordExtractor {
    /// Create an extractor with default config and the Chinese stop-keyword list
    pub fn new() -> Self {
        Self::with_config(ExtractorConfig::default())
    }

    /// Create with custom config; the rank strategy follows `config.variant`
    pub fn with_config(config: ExtractorConfig) -> Self {
        Self {
            factory: factory_for(config.variant),
            config,
            stopwords: Box::new(StopwordFilter::default()),
            phrase_weights: Arc::new(NoPhraseWeights),
        }
    }

    pub fn with_stopwords(mut self, stopwords: impl StopWords + 'static) -> Self {
        self.stopwords = Box::new(stopwords);
        self
    }

    /// Share a phrase weight table with every graph this extractor creates
    pub fn with_phrase_weights(mut self, weights: Arc<dyn PhraseWeights>) -> Self {
        self.phrase_weights = weights;
        self
    }

    /// Override the rank-graph strategy chosen by the config
    pub fn with_rank_factory(mut self, factory: impl RankGraphFactory + 'static) -> Self {
        self.factory = Box::new(factory);
        self
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// An empty graph configured for this extractor
    pub fn new_graph(&self) -> WordGraph {
        WordGraph::from_config(&self.config).with_phrase_weights(Arc::clone(&self.phrase_weights))
    }

    /// Rank `graph` and return at most `top_n` labels, best first
    ///
    /// Without phrases only non-stop single words are returned and no pair is
    /// scored. With phrases the merged single-word / two-word list is returned.
    pub fn extract_keywords(
        &self,
        graph: &mut WordGraph,
        top_n: usize,
        include_phrases: bool,
    ) -> Vec<String> {
        let _span = info_span!("extract_keywords", top_n, include_phrases).entered();

        if !include_phrases {
            let ranked = self.rank(graph);
            return ranked
                .iter()
                .filter_map(|&id| graph.name(id))
                .filter(|word| !self.stopwords.is_stopword(word))
                .take(top_n)
                .map(str::to_string)
                .collect();
        }

        self.extract_phrases(graph, top_n)
            .iter()
            .map(|phrase| phrase.label_with(&self.config.phrase_separator))
            .collect()
    }

    /// Rank `graph` and return the merged, scored phrase list
    pub fn extract_phrases(&self, graph: &mut WordGraph, top_n: usize) -> Vec<Phrase> {
        let ranked = self.rank(graph);
        PhraseAssembler::from_config(self.stopwords.as_ref(), &self.config)
            .assemble(graph, &ranked, top_n)
    }

    /// Build a fresh graph from tagged tokens with importance 1 and extract from it
    pub fn extract_from_tagged(
        &self,
        tokens: &[TaggedToken],
        top_n: usize,
        include_phrases: bool,
    ) -> Vec<String> {
        let mut graph = self.new_graph();
        graph.build_tagged(tokens, 1.0);
        self.extract_keywords(&mut graph, top_n, include_phrases)
    }

    /// Build a fresh graph from weighted words and extract from it
    pub fn extract_from_weighted(
        &self,
        words: &[WeightedWord],
        top_n: usize,
        include_phrases: bool,
    ) -> Vec<String> {
        let mut graph = self.new_graph();
        graph.build_weighted(words);
        self.extract_keywords(&mut graph, top_n, include_phrases)
    }

    fn rank(&self, graph: &mut WordGraph) -> Vec<u32> {
        let engine = DampedRank::from_config(&self.config);
        rank_words(graph, self.factory.as_ref(), &engine)
            .into_iter()
            .map(|(id, _)| id)
            .collect()
    }
}
