//! Keyword and keyphrase results
//!
//! [`Phrase`] is either a single word or a two-word phrase. Scores here are
//! positional penalties: lower is better. [`assembler::PhraseAssembler`] merges
//! both kinds into one ranked list.

pub mod assembler;

use serde::Serialize;

/// A ranked output entry
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Phrase {
    SingleWord {
        word: String,
        rank: usize,
        score: f64,
    },
    TwoWord {
        left: String,
        right: String,
        rank: usize,
        score: f64,
    },
}

impl Phrase {
    /// A single word whose initial score is its rank
    pub fn single_word(word: impl Into<String>, rank: usize) -> Self {
        Phrase::SingleWord {
            word: word.into(),
            rank,
            score: rank as f64,
        }
    }

    pub fn two_word(
        left: impl Into<String>,
        right: impl Into<String>,
        rank: usize,
        score: f64,
    ) -> Self {
        Phrase::TwoWord {
            left: left.into(),
            right: right.into(),
            rank,
            score,
        }
    }

    /// Position in the intermediate list the phrase came from (1-based)
    pub fn rank(&self) -> usize {
        match self {
            Phrase::SingleWord { rank, .. } | Phrase::TwoWord { rank, .. } => *rank,
        }
    }

    pub fn score(&self) -> f64 {
        match self {
            Phrase::SingleWord { score, .. } | Phrase::TwoWord { score, .. } => *score,
        }
    }

    pub(crate) fn add_to_score(&mut self, penalty: f64) {
        match self {
            Phrase::SingleWord { score, .. } | Phrase::TwoWord { score, .. } => *score += penalty,
        }
    }

    pub fn is_two_word(&self) -> bool {
        matches!(self, Phrase::TwoWord { .. })
    }

    /// Whether `word` is this phrase or one of its two words
    pub fn contains(&self, word: &str) -> bool {
        match self {
            Phrase::SingleWord { word: w, .. } => w == word,
            Phrase::TwoWord { left, right, .. } => left == word || right == word,
        }
    }

    /// Display label: the word, or both words concatenated
    pub fn label(&self) -> String {
        self.label_with("")
    }

    /// Display label with `separator` between the words of a two-word phrase
    pub fn label_with(&self, separator: &str) -> String {
        match self {
            Phrase::SingleWord { word, .. } => word.clone(),
            Phrase::TwoWord { left, right, .. } => format!("{left}{separator}{right}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        let single = Phrase::single_word("图书馆", 1);
        let pair = Phrase::two_word("黄南州", "图书馆", 2, 1.0);

        assert_eq!(single.label(), "图书馆");
        assert_eq!(pair.label(), "黄南州图书馆");
        assert_eq!(pair.label_with(" "), "黄南州 图书馆");
        assert!(pair.is_two_word());
        assert!(!single.is_two_word());
    }

    #[test]
    fn test_single_word_score_starts_at_rank() {
        let mut phrase = Phrase::single_word("word", 4);
        assert_eq!(phrase.rank(), 4);
        assert_eq!(phrase.score(), 4.0);

        phrase.add_to_score(1.5);
        assert_eq!(phrase.score(), 5.5);
    }

    #[test]
    fn test_contains() {
        let pair = Phrase::two_word("machine", "learning", 1, 0.5);
        assert!(pair.contains("machine"));
        assert!(pair.contains("learning"));
        assert!(!pair.contains("deep"));
    }

    #[test]
    fn test_serialization() {
        let pair = Phrase::two_word("machine", "learning", 1, 0.5);
        let json = serde_json::to_value(&pair).unwrap();

        assert_eq!(json["kind"], "two_word");
        assert_eq!(json["left"], "machine");
        assert_eq!(json["rank"], 1);
    }
}
