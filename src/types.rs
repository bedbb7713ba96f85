//! Core types shared across the summarization stages

use std::fmt;

use serde::Serialize;

/// A sentence of the input document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sentence {
    /// Original sentence text, whitespace-trimmed
    pub text: String,
    /// Position among all rankable sentences of the document
    pub index: usize,
    /// Paragraph the sentence belongs to
    pub paragraph: usize,
    /// Normalized (lower-cased) words
    pub words: Vec<String>,
    /// TextRank score, zero until ranked
    pub score: f64,
}

impl Sentence {
    pub fn new(text: impl Into<String>, index: usize, paragraph: usize, words: Vec<String>) -> Self {
        Self {
            text: text.into(),
            index,
            paragraph,
            words,
            score: 0.0,
        }
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Result of ranking and selecting sentences
#[derive(Debug, Clone, Default, Serialize)]
pub struct Summary {
    /// Selected sentences in document order
    pub sentences: Vec<Sentence>,
    /// PageRank iterations performed
    pub iterations: usize,
    /// Whether PageRank converged before the iteration cap
    pub converged: bool,
}

impl Summary {
    /// Sentence texts joined by a single space
    pub fn text(&self) -> String {
        self.sentences
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_text_joins_with_single_space() {
        let summary = Summary {
            sentences: vec![
                Sentence::new("First one.", 0, 0, vec!["first".into(), "one".into()]),
                Sentence::new("Second one.", 2, 0, vec!["second".into(), "one".into()]),
            ],
            iterations: 4,
            converged: true,
        };

        assert_eq!(summary.text(), "First one. Second one.");
        assert_eq!(summary.len(), 2);
    }

    #[test]
    fn test_empty_summary() {
        let summary = Summary::default();
        assert!(summary.is_empty());
        assert_eq!(summary.text(), "");
    }

    #[test]
    fn test_sentence_display() {
        let sentence = Sentence::new("Hello there.", 0, 0, vec!["hello".into(), "there".into()]);
        assert_eq!(sentence.to_string(), "Hello there.");
        assert_eq!(sentence.word_count(), 2);
    }
}
