use std::sync::Arc;
use std::thread;

use degree_advisor::catalog::{Catalog, Course};
use degree_advisor::document::{Document, DocumentId, RULES_SOURCE};
use degree_advisor::index::{
    is_stop_word, tokenize, DocumentIndex, IndexBuildError, IndexBuilder, SparseVector, STOP_WORDS,
};
use degree_advisor::selection::{Retriever, Scorer};
use degree_advisor::types::Query;

const RULES: &str = "# Program rules\n\
Students must complete thirty credits. Required courses total eighteen credits.\n\
Twelve elective credits complete the degree. One professional skills course satisfies the plus requirement.";

fn course(code: &str, title: &str, desc: &str, tags: &[&str]) -> Course {
    Course {
        code: code.to_string(),
        title: title.to_string(),
        credits: 3,
        description: desc.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

fn index() -> DocumentIndex {
    let catalog = Catalog::from_courses(vec![
        course("CIS 630", "Cloud Computing", "Virtual machines, containers and cloud deployment.", &["cloud"]),
        course("MAT 660", "Time Series", "Forecasting with autoregressive models.", &["statistics", "forecasting"]),
        course("DSA 610", "Deep Learning", "Neural networks for vision and language.", &["ml"]),
    ])
    .unwrap();
    DocumentIndex::from_catalog(RULES_SOURCE, RULES, &catalog).unwrap()
}

#[test]
fn tokenizer_lowercases_and_drops_single_chars() {
    assert_eq!(
        tokenize("CIS 630 — Cloud Computing (4 cr) a_b x"),
        vec!["cis", "630", "cloud", "computing", "cr", "a_b"]
    );
}

#[test]
fn stop_word_list_is_sorted_and_searchable() {
    assert!(STOP_WORDS.windows(2).all(|w| w[0] < w[1]));
    assert!(is_stop_word("the"));
    assert!(is_stop_word("yourselves"));
    assert!(is_stop_word("a"));
    assert!(!is_stop_word("credits"));
    assert!(!is_stop_word(""));
}

/// Gives every document the same score.
struct ConstantScorer;

impl Scorer for ConstantScorer {
    fn score(&self, _query: &SparseVector, _document: &SparseVector) -> f32 {
        0.5
    }
}

#[test]
fn retriever_accepts_custom_scorer() {
    let index = index();
    let retriever = Retriever::new(ConstantScorer);

    let hits = retriever.retrieve(&index, &Query::new("cloud"), 3);

    let sources: Vec<&str> = hits.iter().map(|h| h.source.as_str()).collect();
    assert_eq!(sources, vec!["program_rules.md", "CIS 630", "MAT 660"], "ties keep document order");
    assert!(hits.iter().all(|h| h.score == 0.5));
}

#[test]
fn most_relevant_document_first() {
    let index = index();

    let hits = index.retrieve("forecasting models", 2);
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].source, "MAT 660");
    assert!(hits[0].score > hits[1].score);

    let hits = index.retrieve("how many elective credits", 1);
    assert_eq!(hits[0].source, "program_rules.md");
    assert!(hits[0].text.starts_with("# Program rules"));
}

#[test]
fn course_code_is_searchable() {
    let index = index();
    let hits = index.retrieve("What is DSA 610 about?", 1);
    assert_eq!(hits[0].source, "DSA 610");
}

#[test]
fn scores_bounded_and_non_increasing() {
    let index = index();

    for query in ["cloud", "neural networks language", "credits required", "zzz unknown"] {
        let hits = index.retrieve(query, 10);
        assert_eq!(hits.len(), index.len(), "k larger than corpus returns every document");
        for hit in &hits {
            assert!((0.0..=1.0).contains(&hit.score));
        }
        assert!(hits.windows(2).all(|w| w[0].score >= w[1].score));
    }
}

#[test]
fn stop_word_and_empty_queries_score_zero_in_document_order() {
    let index = index();

    for query in ["", "the and of which", "???"] {
        let hits = index.retrieve(query, 3);
        assert_eq!(hits.len(), 3);
        assert!(hits.iter().all(|h| h.score == 0.0));
        let sources: Vec<&str> = hits.iter().map(|h| h.source.as_str()).collect();
        assert_eq!(sources, vec!["program_rules.md", "CIS 630", "MAT 660"]);
    }
}

#[test]
fn k_zero_returns_nothing() {
    assert!(index().retrieve("cloud", 0).is_empty());
}

#[test]
fn query_terms_outside_vocabulary_do_not_grow_it() {
    let index = index();
    let before = index.manifest().vocabulary_size;

    index.retrieve("quantum blockchain", 3);

    assert_eq!(index.manifest().vocabulary_size, before);
    assert!(!index.model().contains("quantum"));
    assert!(!index.model().contains("the"), "stop words never enter the vocabulary");
}

#[test]
fn retrieval_is_deterministic() {
    let index = index();
    assert_eq!(index.retrieve("cloud statistics", 4), index.retrieve("cloud statistics", 4));
}

#[test]
fn same_corpus_same_index_version() {
    let a = index();
    let b = index();
    assert_eq!(a.manifest().index_version, b.manifest().index_version);
    assert_eq!(a.manifest().document_count, 4);
}

#[test]
fn builder_rejects_empty_and_duplicate_corpora() {
    assert!(matches!(IndexBuilder::new().build(), Err(IndexBuildError::EmptyCorpus)));

    let result = IndexBuilder::new()
        .add(Document::new(DocumentId::new("a"), "alpha".to_string()))
        .add(Document::new(DocumentId::new("a"), "beta".to_string()))
        .build();
    assert!(matches!(result, Err(IndexBuildError::DuplicateDocumentId(id)) if id == "a"));
}

#[test]
fn concurrent_readers_see_identical_results() {
    let index = Arc::new(index());
    let expected = index.retrieve("deep learning vision", 3);

    thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let index = Arc::clone(&index);
                scope.spawn(move || index.retrieve("deep learning vision", 3))
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
