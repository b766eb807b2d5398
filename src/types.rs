//! Core types shared across the crate
//!
//! Input tokens, part-of-speech tags and the extractor configuration.

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, Result};

/// Part-of-speech tag as emitted by the external tagger
///
/// Tags follow the ICTCLAS-style convention (`n`, `ns`, `nr`, `vn`, `adj`, `w`, ...).
/// The graph only ever asks a handful of prefix/suffix questions about them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PosTag(String);

impl PosTag {
    /// Create a tag from its string form
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// The tag carried by words that arrive without tagging
    pub fn untagged() -> Self {
        Self(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Empty or literal `null` tags
    pub fn is_untagged(&self) -> bool {
        self.0.is_empty() || self.0.eq_ignore_ascii_case("null")
    }

    pub fn is_punctuation(&self) -> bool {
        self.0.eq_ignore_ascii_case("w")
    }

    /// Noun-like: starts or ends with `n` (`n`, `ns`, `nz`, `vn`, `an`, ...)
    pub fn is_noun_like(&self) -> bool {
        self.0.starts_with('n') || self.0.ends_with('n')
    }

    pub fn is_verb(&self) -> bool {
        self.0.starts_with('v')
    }

    /// Place names, person names and other proper nouns
    pub fn is_proper_noun(&self) -> bool {
        matches!(self.0.as_str(), "ns" | "nr" | "nz")
    }

    /// Whether a token with this tag may become a graph vertex
    pub fn is_candidate(&self) -> bool {
        self.is_noun_like() || self.0.starts_with("adj") || self.is_verb()
    }
}

impl From<&str> for PosTag {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

/// A word with its part-of-speech tag, as produced by the tokenizer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    pub word: String,
    pub pos: PosTag,
}

impl TaggedToken {
    pub fn new(word: impl Into<String>, pos: impl Into<PosTag>) -> Self {
        Self {
            word: word.into(),
            pos: pos.into(),
        }
    }
}

/// A word with an externally assigned importance and no tag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedWord {
    pub word: String,
    pub importance: f64,
}

impl WeightedWord {
    pub fn new(word: impl Into<String>, importance: f64) -> Self {
        Self {
            word: word.into(),
            importance,
        }
    }
}

/// Which rank-graph construction strategy to use
///
/// Deserialization accepts the same aliases as [`str::parse`] and falls back to
/// [`RankVariant::TextRank`] for unknown names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum RankVariant {
    /// Transition weights are the raw adjacency counts
    #[default]
    TextRank,
    /// Transition weights are scaled by the importance of the target word
    WeightedPosition,
}

impl RankVariant {
    fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "weighted_position" | "weightedposition" | "position" | "position_rank"
            | "positionrank" => {
                RankVariant::WeightedPosition
            }
            _ => RankVariant::TextRank,
        }
    }
}

impl From<String> for RankVariant {
    fn from(value: String) -> Self {
        RankVariant::parse(&value)
    }
}

impl std::str::FromStr for RankVariant {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Ok(RankVariant::parse(value))
    }
}

/// Configuration for graph building, ranking and phrase assembly
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Maximum number of eligible tokens a graph accepts over its lifetime,
    /// clamped to `u32::MAX` by the graph
    pub max_tokens: usize,
    /// Number of rank propagation rounds
    pub max_iterations: usize,
    /// Damping factor for rank propagation
    pub damping: f64,
    /// Stop iterating early once the L1 delta drops to this value (0 disables)
    pub convergence_threshold: f64,
    /// Record a reverse adjacency for every forward adjacency
    pub link_back: bool,
    /// Lower bound on the keyword pool used for phrase assembly
    pub min_pool_size: usize,
    /// Rank-graph construction strategy
    pub variant: RankVariant,
    /// Inserted between the two words of a phrase label
    pub phrase_separator: String,
    /// Edge count above which combination degrees are computed in parallel
    pub parallel_edge_threshold: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_tokens: 1000,
            max_iterations: 20,
            damping: 0.85,
            convergence_threshold: 0.0,
            link_back: true,
            min_pool_size: 10,
            variant: RankVariant::TextRank,
            phrase_separator: String::new(),
            parallel_edge_threshold: 1000,
        }
    }
}

impl ExtractorConfig {
    /// Parse a configuration from JSON and validate it
    ///
    /// Missing fields take their default values.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check numeric parameters for values the rank engine cannot use
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.damping) {
            return Err(ConfigError::InvalidDamping(self.damping));
        }
        if self.convergence_threshold.is_nan() || self.convergence_threshold < 0.0 {
            return Err(ConfigError::InvalidThreshold(self.convergence_threshold));
        }
        Ok(())
    }

    pub fn with_max_tokens(mut self, max_tokens: usize) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_convergence_threshold(mut self, threshold: f64) -> Self {
        self.convergence_threshold = threshold;
        self
    }

    pub fn with_link_back(mut self, link_back: bool) -> Self {
        self.link_back = link_back;
        self
    }

    pub fn with_min_pool_size(mut self, min_pool_size: usize) -> Self {
        self.min_pool_size = min_pool_size;
        self
    }

    pub fn with_variant(mut self, variant: RankVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_phrase_separator(mut self, separator: impl Into<String>) -> Self {
        self.phrase_separator = separator.into();
        self
    }

    pub fn with_parallel_edge_threshold(mut self, threshold: usize) -> Self {
        self.parallel_edge_threshold = threshold;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pos_tag_categories() {
        assert!(PosTag::new("n").is_noun_like());
        assert!(PosTag::new("vn").is_noun_like());
        assert!(PosTag::new("vn").is_verb());
        assert!(PosTag::new("ns").is_proper_noun());
        assert!(PosTag::new("nz").is_proper_noun());
        assert!(!PosTag::new("n").is_proper_noun());
        assert!(PosTag::new("adj").is_candidate());
        assert!(!PosTag::new("d").is_candidate());
        assert!(PosTag::new("w").is_punctuation());
        assert!(PosTag::new("NULL").is_untagged());
        assert!(PosTag::untagged().is_untagged());
        assert!(!PosTag::untagged().is_noun_like());
    }

    #[test]
    fn test_default_config() {
        let config = ExtractorConfig::default();
        assert_eq!(config.max_tokens, 1000);
        assert_eq!(config.max_iterations, 20);
        assert!((config.damping - 0.85).abs() < 1e-12);
        assert!(config.link_back);
        assert_eq!(config.variant, RankVariant::TextRank);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_from_json_fills_defaults() {
        let config = ExtractorConfig::from_json(r#"{"max_tokens": 50, "variant": "weighted_position"}"#)
            .unwrap();
        assert_eq!(config.max_tokens, 50);
        assert_eq!(config.variant, RankVariant::WeightedPosition);
        assert_eq!(config.max_iterations, 20);
    }

    #[test]
    fn test_config_variant_aliases() {
        let config = ExtractorConfig::from_json(r#"{"variant": "position"}"#).unwrap();
        assert_eq!(config.variant, RankVariant::WeightedPosition);

        let config = ExtractorConfig::from_json(r#"{"variant": "PositionRank"}"#).unwrap();
        assert_eq!(config.variant, RankVariant::WeightedPosition);

        let config = ExtractorConfig::from_json(r#"{"variant": "something_else"}"#).unwrap();
        assert_eq!(config.variant, RankVariant::TextRank);
    }

    #[test]
    fn test_config_json_round_trip() {
        let config = ExtractorConfig::default().with_variant(RankVariant::WeightedPosition);
        let json = serde_json::to_string(&config).unwrap();

        assert!(json.contains(r#""variant":"weighted_position""#));
        assert_eq!(ExtractorConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_config_rejects_bad_damping() {
        let err = ExtractorConfig::from_json(r#"{"damping": 1.5}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDamping(_)));

        let config = ExtractorConfig::default().with_damping(f64::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_rejects_negative_threshold() {
        let config = ExtractorConfig::default().with_convergence_threshold(-1.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidThreshold(_))
        ));
    }

    #[test]
    fn test_config_rejects_malformed_json() {
        let err = ExtractorConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_variant_parsing() {
        assert_eq!("position".parse::<RankVariant>().unwrap(), RankVariant::WeightedPosition);
        assert_eq!("TextRank".parse::<RankVariant>().unwrap(), RankVariant::TextRank);
        assert_eq!("unknown".parse::<RankVariant>().unwrap(), RankVariant::TextRank);
    }
}
