//! Stopword filtering
//!
//! Optional pre-filter applied to sentence words before measuring overlap.
//! Lists come from the `stop-words` crate.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

use super::resources::language_key;

/// Set of lower-cased stopwords for one language
#[derive(Debug, Clone, Default)]
pub struct StopwordFilter {
    stopwords: FxHashSet<String>,
}

impl StopwordFilter {
    /// Stopwords for `language` (`"english"`, `"en"`, `"german"`, ...).
    /// Unknown languages fall back to English.
    pub fn new(language: &str) -> Self {
        let lang = match language_key(language).as_str() {
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "no" | "norwegian" => LANGUAGE::Norwegian,
            "da" | "danish" => LANGUAGE::Danish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            _ => LANGUAGE::English,
        };

        Self {
            stopwords: get(lang).iter().map(|s| s.to_lowercase()).collect(),
        }
    }

    /// A filter built from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    pub fn add_stopwords(&mut self, words: &[&str]) {
        self.stopwords
            .extend(words.iter().map(|w| w.to_lowercase()));
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    /// Keep the words that are not stopwords, preserving order
    pub fn filter_words(&self, words: &[String]) -> Vec<String> {
        words
            .iter()
            .filter(|w| !self.is_stopword(w))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}
