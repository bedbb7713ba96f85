use std::io::Write;

use rapid_summarizer::{
    summarize, Document, ErrorKind, PunktTokenizer, Selection, SentenceRanker, SentenceTokenizer,
    SummarizeError, SummarizerConfig, SummaryOutcome, SummaryService, TextRankSummarizer,
};
use tempfile::NamedTempFile;

const PARAGRAPH: &str = "The city council approved a new budget for public parks. \
    The budget adds funding for park maintenance and new playgrounds. \
    Residents praised the council for investing in parks. \
    A local bakery changed its opening hours. \
    Park maintenance crews will hire more staff next spring.";

const SENTENCES: [&str; 5] = [
    "The city council approved a new budget for public parks.",
    "The budget adds funding for park maintenance and new playgrounds.",
    "Residents praised the council for investing in parks.",
    "A local bakery changed its opening hours.",
    "Park maintenance crews will hire more staff next spring.",
];

/// Tokenizer that always fails, standing in for missing language data
struct BrokenTokenizer;

impl SentenceTokenizer for BrokenTokenizer {
    fn to_sentences(&self, _text: &str, language: &str) -> Result<Vec<String>, SummarizeError> {
        Err(SummarizeError::MissingResource {
            language: language.to_string(),
        })
    }

    fn to_words(&self, sentence: &str) -> Vec<String> {
        sentence.split_whitespace().map(str::to_lowercase).collect()
    }
}

#[test]
fn empty_input_returns_empty_string() {
    assert_eq!(summarize("", 3), "");
    assert_eq!(SummaryService::new().summarize("", 1), "");
}

#[test]
fn short_inputs_are_returned_unchanged() {
    let service = SummaryService::new();
    let inputs = [
        "Hi there.",
        "   ",
        "One sentence only, with a few words in it.",
        "First. Second. Third. Fourth. Fifth. Sixth. Seventh.",
        &"word ".repeat(29),
    ];

    for input in inputs {
        assert_eq!(service.summarize(input, 2), input);
        // Summarizing the result again changes nothing
        assert_eq!(service.summarize(&service.summarize(input, 2), 2), input);
    }
}

#[test]
fn thirty_words_is_enough_to_summarize() {
    let service = SummaryService::new();
    let text = "Alpha beta gamma delta epsilon. ".repeat(6);
    assert_eq!(text.split_whitespace().count(), 30);

    let outcome = service.summarize_detailed(&text, 1);
    assert!(matches!(outcome, SummaryOutcome::Summarized(_)));
    assert_eq!(outcome.into_text(), "Alpha beta gamma delta epsilon.");
}

#[test]
fn paragraph_is_summarized_to_requested_sentences() {
    assert!(PARAGRAPH.split_whitespace().count() >= 30);

    let summary = summarize(PARAGRAPH, 2);

    let pairs: Vec<String> = (0..SENTENCES.len())
        .flat_map(|i| ((i + 1)..SENTENCES.len()).map(move |j| (i, j)))
        .map(|(i, j)| format!("{} {}", SENTENCES[i], SENTENCES[j]))
        .collect();
    assert!(
        pairs.contains(&summary),
        "summary is not two document sentences: {summary:?}"
    );
    assert!(!summary.contains("bakery"));
}

#[test]
fn summary_never_exceeds_requested_count() {
    let service = SummaryService::new();
    for n in 1..=4 {
        let SummaryOutcome::Summarized(summary) = service.summarize_detailed(PARAGRAPH, n) else {
            panic!("expected a summary for n = {n}");
        };
        assert_eq!(summary.len(), n);
        assert!(summary
            .sentences
            .iter()
            .all(|s| SENTENCES.contains(&s.text.as_str())));
    }

    // More than the document has: every sentence, in order
    assert_eq!(service.summarize(PARAGRAPH, 10), SENTENCES.join(" "));
}

#[test]
fn collaborator_failure_returns_original_text() {
    let config = SummarizerConfig::default();
    let ranker = TextRankSummarizer::from_config(&config);
    let service = SummaryService::with_collaborators(config, BrokenTokenizer, ranker);

    let outcome = service.summarize_detailed(PARAGRAPH, 2);
    assert!(outcome.is_fallback());
    assert_eq!(
        outcome.error().map(SummarizeError::kind),
        Some(ErrorKind::MissingResource)
    );
    assert_eq!(service.summarize(PARAGRAPH, 2), PARAGRAPH);
}

#[test]
fn ranker_can_be_used_directly() {
    let document = Document::parse(PARAGRAPH, &PunktTokenizer::new(), "english").unwrap();
    assert_eq!(document.sentence_count(), 5);

    let summary = TextRankSummarizer::new().rank(&document, 3).unwrap();
    assert_eq!(summary.len(), 3);
    assert!(summary.converged);
}

#[test]
fn config_loaded_from_json_file() {
    let json = serde_json::json!({
        "min_words": 10,
        "sentence_count": 1,
        "use_stopwords": true,
        "selection": { "mmr": { "lambda": 0.7 } }
    });
    let mut config_file = NamedTempFile::with_suffix(".json").unwrap();
    config_file.write_all(json.to_string().as_bytes()).unwrap();

    let config = SummarizerConfig::from_path(config_file.path()).unwrap();

    assert_eq!(config.selection, Selection::Mmr { lambda: 0.7 });
    let service = SummaryService::with_config(config).unwrap();

    let text = "Parks need funding. Parks need volunteers and funding. A bakery opened downtown.";
    let summary = service.summarize_default(text);
    assert!(summary.starts_with("Parks need"));
    assert!(!summary.contains(". "));
}

#[test]
fn sentence_ending_in_short_word_is_not_merged() {
    let text = "The committee met on Monday to discuss the new library proposal. \
        They debated the budget for several hours and the answer was no. \
        Everyone went home early after the long meeting ended. \
        The proposal may return next year with a smaller budget.";

    let summary = summarize(text, 1);
    assert_ne!(summary, text);
    assert!(!summary.contains("no. Everyone"));
}

#[test]
fn heading_between_lines_splits_sentences() {
    let text = "Intro line without a period\nSECTION TWO\nNext sentence here.";
    let doc = Document::parse(text, &PunktTokenizer::new(), "english").unwrap();

    let texts: Vec<_> = doc.sentences().map(|s| s.text.as_str()).collect();
    assert_eq!(texts, vec!["Intro line without a period", "Next sentence here."]);
}

#[test]
fn unknown_language_falls_back() {
    let config = SummarizerConfig::default().with_language("esperanto-x");
    let service = SummaryService::with_config(config).unwrap();
    assert_eq!(service.summarize(PARAGRAPH, 2), PARAGRAPH);
}

#[test]
fn concurrent_callers_get_identical_results() {
    let service = SummaryService::new();
    let expected = service.summarize(PARAGRAPH, 2);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| service.summarize(PARAGRAPH, 2)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
