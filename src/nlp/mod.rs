//! Natural Language Processing components
//!
//! Sentence and word tokenization, language resources and stopword
//! filtering.

pub mod resources;
pub mod stopwords;
pub mod tokenizer;
