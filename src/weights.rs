//! Per-phrase importance overrides
//!
//! Some words deserve a higher base importance than the document gives them
//! (e.g. domain terms with low document frequency). The table is injected into
//! each [`WordGraph`](crate::graph::builder::WordGraph) and consulted once per
//! newly created vertex; the larger of the override and the supplied
//! importance wins.

use rustc_hash::FxHashMap;
use std::sync::{PoisonError, RwLock};

/// Read access to manually assigned phrase weights
pub trait PhraseWeights: Send + Sync {
    /// The override weight for `phrase`, if one is set
    fn weight(&self, phrase: &str) -> Option<f64>;
}

/// No overrides at all
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPhraseWeights;

impl PhraseWeights for NoPhraseWeights {
    #[inline]
    fn weight(&self, _phrase: &str) -> Option<f64> {
        None
    }
}

/// A shared, mutable override table
///
/// Reads vastly outnumber writes, so the map sits behind an `RwLock` and can be
/// shared between graphs built on different threads via `Arc`.
#[derive(Debug, Default)]
pub struct PhraseWeightTable {
    weights: RwLock<FxHashMap<String, f64>>,
}

impl PhraseWeightTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(phrase, weight)` pairs
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let weights: FxHashMap<String, f64> =
            pairs.into_iter().map(|(p, w)| (p.into(), w)).collect();
        Self {
            weights: RwLock::new(weights),
        }
    }

    /// Set or replace the weight of a phrase
    pub fn set(&self, phrase: impl Into<String>, weight: f64) {
        let mut weights = self.weights.write().unwrap_or_else(PoisonError::into_inner);
        weights.insert(phrase.into(), weight);
    }

    /// Remove a phrase, returning its previous weight
    pub fn delete(&self, phrase: &str) -> Option<f64> {
        let mut weights = self.weights.write().unwrap_or_else(PoisonError::into_inner);
        weights.remove(phrase)
    }

    pub fn len(&self) -> usize {
        self.weights.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PhraseWeights for PhraseWeightTable {
    fn weight(&self, phrase: &str) -> Option<f64> {
        self.weights
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(phrase)
            .copied()
    }
}
