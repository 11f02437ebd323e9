//! Integration tests for TF-IDF term ranking

use lexpand::prelude::*;
use lexpand::tfidf::{StopWords, TfIdfConfig, TfIdfVectorizer};

fn corpus() -> Vec<&'static str> {
    vec![
        "Query expansion adds related terms to a query",
        "Word embeddings place related terms close together",
        "TF-IDF weights rare terms above common ones",
        "Ranking documents by relevance score",
    ]
}

#[test]
fn test_top_tfidf_is_bounded_and_sorted() -> Result<()> {
    let top = top_tfidf(&corpus(), Limit::Top(5))?;

    assert_eq!(top.len(), 5);
    for pair in top.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    assert_eq!(top[0].term, "terms");
    Ok(())
}

#[test]
fn test_negative_count_returns_every_term() -> Result<()> {
    let docs = ["alpha beta", "gamma delta"];

    let all = top_tfidf(&docs, Limit::from_signed(-1))?;
    assert_eq!(all.len(), 4);

    // equal weights fall back to lexicographic order, so "gamma" is last
    let terms: Vec<&str> = all.iter().map(|t| t.term.as_str()).collect();
    assert_eq!(terms, vec!["alpha", "beta", "delta", "gamma"]);
    assert_eq!(top_tfidf(&docs, "-5".parse()?)?, all);
    Ok(())
}

#[test]
fn test_limit_larger_than_vocabulary() -> Result<()> {
    let top = top_tfidf(&["one two"], Limit::Top(100))?;
    assert_eq!(top.len(), 2);
    assert!(top_tfidf(&["one two"], Limit::Top(0))?.is_empty());
    Ok(())
}

#[test]
fn test_empty_corpus_is_analysis_error() {
    let empty: [&str; 0] = [];
    assert!(matches!(
        top_tfidf(&empty, Limit::All),
        Err(LexpandError::Analysis(_))
    ));
    assert!(matches!(
        top_tfidf(&["a", "? !"], Limit::All),
        Err(LexpandError::Analysis(_))
    ));
}

#[test]
fn test_stop_word_only_corpus_with_english_stop_words() {
    let config = TfIdfConfig {
        stop_words: StopWords::English,
        ..TfIdfConfig::default()
    };
    let ranker = TermRanker::new(TfIdfVectorizer::with_config(config).unwrap());

    let result = ranker.top_terms(&["the and of", "it is"], Limit::All);
    assert!(matches!(result, Err(LexpandError::Analysis(_))));
}

#[test]
fn test_repeated_calls_are_identical() -> Result<()> {
    let first = top_tfidf(&corpus(), Limit::All)?;
    let second = top_tfidf(&corpus(), Limit::All)?;
    assert_eq!(first, second);
    Ok(())
}
