//! Stop-word filtering for the keyword pool
//!
//! Function words never become graph vertices (the tagger filters them), but
//! many content words still make poor keywords ("问题", "方面", "情况"). The
//! keyword pool consults a [`StopWords`] implementation before accepting a word.
//! [`StopwordFilter`] is backed by the `stop-words` crate for European languages
//! and a built-in list for Chinese.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// Stop-word membership test
pub trait StopWords: Send + Sync {
    fn is_stopword(&self, word: &str) -> bool;
}

/// Accepts every word
#[derive(Debug, Clone, Copy, Default)]
pub struct NoStopWords;

impl StopWords for NoStopWords {
    #[inline]
    fn is_stopword(&self, _word: &str) -> bool {
        false
    }
}

/// A set-backed stop-word filter
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase unless case-sensitive)
    stopwords: FxHashSet<String>,
    case_sensitive: bool,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::new("zh")
    }
}

impl StopwordFilter {
    /// Create a new stopword filter for the given language
    ///
    /// Unknown languages fall back to English.
    pub fn new(language: &str) -> Self {
        Self {
            stopwords: Self::load_stopwords(language),
            case_sensitive: false,
        }
    }

    /// Create an empty stopword filter (no filtering)
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
            case_sensitive: false,
        }
    }

    /// Create a stopword filter from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.to_lowercase()).collect(),
            case_sensitive: false,
        }
    }

    /// Set case sensitivity
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Merge the list of another language into this filter
    pub fn with_language(mut self, language: &str) -> Self {
        self.stopwords.extend(Self::load_stopwords(language));
        self
    }

    pub fn add_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.insert(word.to_lowercase());
        }
    }

    pub fn remove_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.remove(&word.to_lowercase());
        }
    }

    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    fn load_stopwords(language: &str) -> FxHashSet<String> {
        let lang = match language.to_lowercase().as_str() {
            "zh" | "chinese" => return Self::chinese_stopwords(),
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            _ => LANGUAGE::English,
        };

        get(lang).iter().map(|s| s.to_string()).collect()
    }

    /// Chinese function words plus generic nouns and verbs that rank well but
    /// say nothing about a document
    fn chinese_stopwords() -> FxHashSet<String> {
        [
            "的", "是", "在", "有", "和", "与", "或", "不", "了", "也", "就", "都", "而", "及",
            "这", "那", "个", "为", "以", "等", "但", "被", "给", "让", "把", "从", "到", "对",
            "我们", "他们", "你们", "自己", "这个", "那个", "这些", "那些", "什么", "没有",
            "问题", "方面", "情况", "方法", "工作", "时候", "时间", "事情", "东西", "部分",
            "进行", "开展", "通过", "具有", "认为", "表示", "提出", "成为", "可以", "需要",
            "目前", "今年", "一个", "一些", "其中", "之后", "以来", "有关", "相关", "主要",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }
}

impl StopWords for StopwordFilter {
    fn is_stopword(&self, word: &str) -> bool {
        if self.case_sensitive {
            self.stopwords.contains(word)
        } else {
            self.stopwords.contains(&word.to_lowercase())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chinese_stop_keywords() {
        let filter = StopwordFilter::default();

        assert!(filter.is_stopword("问题"));
        assert!(filter.is_stopword("进行"));
        assert!(!filter.is_stopword("图书馆"));
    }

    #[test]
    fn test_english_stopwords() {
        let filter = StopwordFilter::new("en");

        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("The"));
        assert!(!filter.is_stopword("machine"));
    }

    #[test]
    fn test_merge_languages() {
        let filter = StopwordFilter::new("zh").with_language("en");

        assert!(filter.is_stopword("问题"));
        assert!(filter.is_stopword("the"));
    }

    #[test]
    fn test_custom_stopwords() {
        let mut filter = StopwordFilter::from_list(&["custom", "words"]);

        assert!(filter.is_stopword("custom"));
        assert!(!filter.is_stopword("the"));

        filter.add_stopwords(&["extra"]);
        assert!(filter.is_stopword("extra"));

        filter.remove_stopwords(&["custom"]);
        assert!(!filter.is_stopword("custom"));
    }

    #[test]
    fn test_case_sensitivity() {
        let filter = StopwordFilter::from_list(&["the"]).with_case_sensitive(true);

        assert!(filter.is_stopword("the"));
        assert!(!filter.is_stopword("The"));
    }

    #[test]
    fn test_empty_filters() {
        assert!(StopwordFilter::empty().is_empty());
        assert!(!StopwordFilter::empty().is_stopword("the"));
        assert!(!NoStopWords.is_stopword("the"));
    }
}
