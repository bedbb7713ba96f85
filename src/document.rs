//! Plaintext document parsing
//!
//! Paragraphs are separated by blank lines. A line whose letters are all
//! upper case is a heading: it is kept on the paragraph but never ranked.
//! The lines between headings are joined with spaces and split into
//! sentences by a [`SentenceTokenizer`], so a heading always ends the text
//! before it.

use serde::Serialize;

use crate::errors::Result;
use crate::nlp::tokenizer::SentenceTokenizer;
use crate::types::Sentence;

#[derive(Debug, Clone, Default, Serialize)]
pub struct Paragraph {
    pub headings: Vec<String>,
    pub sentences: Vec<Sentence>,
}

/// A parsed document
#[derive(Debug, Clone, Default, Serialize)]
pub struct Document {
    pub paragraphs: Vec<Paragraph>,
}

impl Document {
    /// Parse `text` into paragraphs and sentences
    pub fn parse<T>(text: &str, tokenizer: &T, language: &str) -> Result<Self>
    where
        T: SentenceTokenizer + ?Sized,
    {
        let mut paragraphs = Vec::new();
        let mut next_index = 0;

        for block in split_paragraphs(text) {
            let paragraph = paragraphs.len();
            let mut headings = Vec::new();
            let mut sentences = Vec::new();
            let mut pending: Vec<&str> = Vec::new();

            // A heading ends whatever text precedes it
            for line in block {
                if is_heading(line) {
                    flush_lines(
                        &mut pending,
                        tokenizer,
                        language,
                        paragraph,
                        &mut next_index,
                        &mut sentences,
                    )?;
                    headings.push(line.to_string());
                } else {
                    pending.push(line);
                }
            }
            flush_lines(
                &mut pending,
                tokenizer,
                language,
                paragraph,
                &mut next_index,
                &mut sentences,
            )?;

            paragraphs.push(Paragraph {
                headings,
                sentences,
            });
        }

        Ok(Self { paragraphs })
    }

    /// Rankable sentences in document order
    pub fn sentences(&self) -> impl Iterator<Item = &Sentence> {
        self.paragraphs.iter().flat_map(|p| p.sentences.iter())
    }

    pub fn headings(&self) -> impl Iterator<Item = &str> {
        self.paragraphs
            .iter()
            .flat_map(|p| p.headings.iter().map(String::as_str))
    }

    pub fn sentence_count(&self) -> usize {
        self.paragraphs.iter().map(|p| p.sentences.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.sentence_count() == 0
    }
}

/// Join pending lines and split them into sentences
fn flush_lines<T>(
    pending: &mut Vec<&str>,
    tokenizer: &T,
    language: &str,
    paragraph: usize,
    next_index: &mut usize,
    sentences: &mut Vec<Sentence>,
) -> Result<()>
where
    T: SentenceTokenizer + ?Sized,
{
    if pending.is_empty() {
        return Ok(());
    }

    let joined = pending.join(" ");
    pending.clear();
    for sentence in tokenizer.to_sentences(&joined, language)? {
        let words = tokenizer.to_words(&sentence);
        sentences.push(Sentence::new(sentence, *next_index, paragraph, words));
        *next_index += 1;
    }
    Ok(())
}

/// Groups of trimmed, non-empty lines separated by blank lines
fn split_paragraphs(text: &str) -> Vec<Vec<&str>> {
    let mut paragraphs = Vec::new();
    let mut current = Vec::new();

    for line in text.lines().map(str::trim) {
        if line.is_empty() {
            if !current.is_empty() {
                paragraphs.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        paragraphs.push(current);
    }

    paragraphs
}

/// At least one letter and no lower-case letters
fn is_heading(line: &str) -> bool {
    line.chars().any(char::is_alphabetic) && !line.chars().any(char::is_lowercase)
}
