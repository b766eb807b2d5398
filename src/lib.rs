//! Keyword and keyphrase extraction over a word co-occurrence graph
//!
//! A [`WordGraph`] is built from an already tagged token stream (or from words
//! with explicit importances). Vertices are ranked with damped TextRank-style
//! propagation, strict neighbor pairs are scored with an entropy-based
//! combination degree, and the two are merged into one ranked list of single
//! words and two-word phrases.
//!
//! ```rust,ignore
//! use wordgraph_rank::{KeywordExtractor, TaggedToken};
//!
//! let tokens = vec![
//!     TaggedToken::new("数据", "n"),
//!     TaggedToken::new("挖掘", "vn"),
//!     TaggedToken::new("算法", "n"),
//! ];
//! let keywords = KeywordExtractor::new().extract_from_tagged(&tokens, 5, true);
//! ```

pub mod errors;
pub mod extractor;
pub mod graph;
pub mod nlp;
pub mod phrase;
pub mod rank;
pub mod types;
pub mod weights;

pub use errors::{ConfigError, Result};
pub use extractor::KeywordExtractor;
pub use graph::builder::WordGraph;
pub use graph::edge::{CombinationDegree, WordEdge};
pub use graph::vertex::Vertex;
pub use nlp::stopwords::{NoStopWords, StopWords, StopwordFilter};
pub use phrase::assembler::PhraseAssembler;
pub use phrase::Phrase;
pub use rank::{DampedRank, RankGraphFactory, RankResult, TextRank, WeightedPositionRank};
pub use types::{ExtractorConfig, PosTag, RankVariant, TaggedToken, WeightedWord};
pub use weights::{NoPhraseWeights, PhraseWeightTable, PhraseWeights};
