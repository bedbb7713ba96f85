//! Language resources for sentence boundary detection
//!
//! Rules are loaded lazily, once per language, into a process-wide registry.
//! [`ensure_language`] is idempotent: the first call loads the rules (from a
//! `<language>.abbrev` file when a resource directory is given, otherwise
//! from built-in data) and every later call returns the cached copy.

use std::path::Path;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use rustc_hash::{FxHashMap, FxHashSet};

use crate::errors::{Result, SummarizeError};

/// Abbreviations that end with a period but do not end a sentence.
///
/// Only entries that almost never close a sentence belong here. Words such
/// as "no" or "sat" are left out; abbreviations followed by a lower-case
/// word are already handled by the tokenizer.
const ENGLISH_ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "st", "mt", "vs", "e.g", "i.e", "cf", "approx", "fig",
    "figs", "vol", "vols", "pp", "eds", "dept", "univ", "capt", "lt", "sgt", "jan", "feb", "apr",
    "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec", "mon", "tue", "thu", "fri", "u.s",
    "u.k", "a.m", "p.m", "ph.d", "b.a", "m.a", "b.sc", "m.sc",
];

static REGISTRY: OnceLock<RwLock<FxHashMap<String, Arc<LanguageRules>>>> = OnceLock::new();

/// Sentence boundary rules for one language
#[derive(Debug, Clone)]
pub struct LanguageRules {
    language: String,
    /// Lower-cased, without the trailing period
    abbreviations: FxHashSet<String>,
}

impl LanguageRules {
    /// Built-in English rules
    pub fn english() -> Self {
        Self {
            language: "english".to_string(),
            abbreviations: ENGLISH_ABBREVIATIONS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Parse an abbreviation list: one entry per line, `#` starts a comment
    pub fn from_abbreviation_list(language: &str, contents: &str) -> Self {
        let abbreviations = contents
            .lines()
            .map(|line| line.split('#').next().unwrap_or_default().trim())
            .filter(|line| !line.is_empty())
            .map(normalize_abbreviation)
            .collect();
        Self {
            language: language.to_string(),
            abbreviations,
        }
    }

    /// Merge another rule set's abbreviations into this one
    pub fn extend(&mut self, other: &LanguageRules) {
        self.abbreviations
            .extend(other.abbreviations.iter().cloned());
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Check whether `word` (with or without its trailing period) is a known
    /// abbreviation
    pub fn is_abbreviation(&self, word: &str) -> bool {
        self.abbreviations.contains(&normalize_abbreviation(word))
    }

    pub fn abbreviation_count(&self) -> usize {
        self.abbreviations.len()
    }
}

fn normalize_abbreviation(word: &str) -> String {
    word.trim_end_matches('.').to_lowercase()
}

/// Canonical registry key for a language name
pub fn language_key(language: &str) -> String {
    match language.trim().to_lowercase().as_str() {
        "en" | "eng" => "english".to_string(),
        other => other.to_string(),
    }
}

fn registry() -> &'static RwLock<FxHashMap<String, Arc<LanguageRules>>> {
    REGISTRY.get_or_init(|| RwLock::new(FxHashMap::default()))
}

/// Make sure rules for `language` are available, loading them on first use.
///
/// The first successful load for a language wins; later calls return the
/// cached rules even if a different `resource_dir` is passed.
pub fn ensure_language(language: &str, resource_dir: Option<&Path>) -> Result<Arc<LanguageRules>> {
    let key = language_key(language);

    if let Some(rules) = registry()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&key)
    {
        return Ok(Arc::clone(rules));
    }

    let loaded = Arc::new(load_language(&key, resource_dir)?);

    let mut map = registry().write().unwrap_or_else(PoisonError::into_inner);
    let rules = map.entry(key).or_insert_with(|| {
        tracing::debug!(
            language = loaded.language(),
            abbreviations = loaded.abbreviation_count(),
            "loaded sentence rules"
        );
        loaded
    });
    Ok(Arc::clone(rules))
}

/// Whether rules for `language` are already cached
pub fn is_loaded(language: &str) -> bool {
    registry()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .contains_key(&language_key(language))
}

fn load_language(key: &str, resource_dir: Option<&Path>) -> Result<LanguageRules> {
    if let Some(dir) = resource_dir {
        let path = dir.join(format!("{key}.abbrev"));
        if path.is_file() {
            let contents =
                std::fs::read_to_string(&path).map_err(|source| SummarizeError::ResourceIo {
                    path: path.clone(),
                    source,
                })?;
            let mut rules = LanguageRules::from_abbreviation_list(key, &contents);
            if key == "english" {
                rules.extend(&LanguageRules::english());
            }
            return Ok(rules);
        }
    }

    match key {
        "english" => Ok(LanguageRules::english()),
        _ => Err(SummarizeError::MissingResource {
            language: key.to_string(),
        }),
    }
}
