//! Sentence and word tokenization
//!
//! [`PunktTokenizer`] is a rule-based sentence boundary detector in the
//! spirit of Punkt: a terminal `.`, `!` or `?` followed by whitespace ends a
//! sentence unless the next word starts in lower case, or the period closes
//! a known abbreviation or a single-letter initial. Words come from Unicode
//! word boundaries and only alphabetic words are kept.

use std::path::PathBuf;

use unicode_segmentation::UnicodeSegmentation;

use super::resources::{ensure_language, LanguageRules};
use crate::errors::Result;

/// Splits text into sentences and sentences into normalized words
pub trait SentenceTokenizer: Send + Sync {
    /// Split `text` into sentences using the rules for `language`
    fn to_sentences(&self, text: &str, language: &str) -> Result<Vec<String>>;

    /// Split a sentence into lower-cased words
    fn to_words(&self, sentence: &str) -> Vec<String>;
}

/// Rule-based sentence tokenizer backed by the language resource registry
#[derive(Debug, Clone, Default)]
pub struct PunktTokenizer {
    resource_dir: Option<PathBuf>,
}

impl PunktTokenizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look for `<language>.abbrev` files in `dir` before using built-in rules
    pub fn with_resource_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.resource_dir = Some(dir.into());
        self
    }

    /// Split with explicit rules, bypassing the registry
    pub fn split_sentences(text: &str, rules: &LanguageRules) -> Vec<String> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let mut sentences = Vec::new();
        let mut start = 0;
        let mut i = 0;

        while i < chars.len() {
            if !is_terminal(chars[i].1) {
                i += 1;
                continue;
            }

            let term_start = i;
            let mut j = i;
            while j < chars.len() && is_terminal(chars[j].1) {
                j += 1;
            }
            let term_end = j;
            while j < chars.len() && is_closing(chars[j].1) {
                j += 1;
            }

            let at_end = j >= chars.len();
            if !at_end {
                // "3.14", "example.com": no whitespace, no boundary
                if !chars[j].1.is_whitespace() {
                    i = j;
                    continue;
                }
                let single_period = term_end - term_start == 1 && chars[term_start].1 == '.';
                let preceding = &text[start..chars[term_start].0];
                if continues_sentence(&chars[j..], preceding, single_period, rules) {
                    i = j;
                    continue;
                }
            }

            let end = if at_end { text.len() } else { chars[j].0 };
            push_trimmed(&mut sentences, &text[start..end]);
            start = end;
            i = j;
        }

        push_trimmed(&mut sentences, &text[start..]);
        sentences
    }
}

impl SentenceTokenizer for PunktTokenizer {
    fn to_sentences(&self, text: &str, language: &str) -> Result<Vec<String>> {
        let rules = ensure_language(language, self.resource_dir.as_deref())?;
        Ok(Self::split_sentences(text, &rules))
    }

    fn to_words(&self, sentence: &str) -> Vec<String> {
        words(sentence)
    }
}

/// Lower-cased alphabetic words of `text`
pub fn words(text: &str) -> Vec<String> {
    text.unicode_words()
        .filter(|w| is_word(w))
        .map(|w| w.to_lowercase())
        .collect()
}

/// Letters, optionally joined by apostrophes or hyphens
fn is_word(token: &str) -> bool {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() => {
            chars.all(|c| c.is_alphabetic() || matches!(c, '\'' | '\u{2019}' | '-'))
        }
        _ => false,
    }
}

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | '\u{2026}')
}

fn is_closing(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '\u{201D}' | '\u{2019}')
}

fn is_opening(c: char) -> bool {
    matches!(c, '"' | '\'' | '(' | '[' | '\u{201C}' | '\u{2018}')
}

/// Decide whether a candidate boundary is actually inside a sentence
fn continues_sentence(
    rest: &[(usize, char)],
    preceding: &str,
    single_period: bool,
    rules: &LanguageRules,
) -> bool {
    let next = rest
        .iter()
        .map(|&(_, c)| c)
        .find(|c| !c.is_whitespace() && !is_opening(*c));
    match next {
        None => return false,
        Some(c) if c.is_lowercase() => return true,
        Some(_) => {}
    }

    if !single_period {
        return false;
    }

    let last_word = preceding
        .split_whitespace()
        .next_back()
        .unwrap_or_default()
        .trim_start_matches(is_opening);

    if rules.is_abbreviation(last_word) {
        return true;
    }

    // Initials such as "J. R. Smith"
    let mut chars = last_word.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(c), None) if c.is_alphabetic() && c.is_uppercase()
    )
}

fn push_trimmed(sentences: &mut Vec<String>, candidate: &str) {
    let trimmed = candidate.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}
