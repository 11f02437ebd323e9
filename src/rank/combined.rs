//! Top terms drawn from the top documents.

use crate::document::table::DocumentTable;
use crate::error::Result;
use crate::rank::document::top_doc;
use crate::rank::limit::Limit;
use crate::rank::term::{TermRanker, TermScore};
use crate::tfidf::{TfIdfVectorizer, Vectorizer};

/// Selects the best documents of a table, then ranks the terms of exactly
/// those documents.
#[derive(Debug)]
pub struct CombinedRanker<V = TfIdfVectorizer> {
    term_ranker: TermRanker<V>,
}

impl CombinedRanker<TfIdfVectorizer> {
    /// A combined ranker over the default TF-IDF vectorizer.
    pub fn with_defaults() -> Result<Self> {
        Ok(Self::new(TermRanker::with_defaults()?))
    }
}

impl<V: Vectorizer> CombinedRanker<V> {
    /// Create a combined ranker from a term ranker.
    pub fn new(term_ranker: TermRanker<V>) -> Self {
        Self { term_ranker }
    }

    /// The term ranker applied to the selected documents.
    pub fn term_ranker(&self) -> &TermRanker<V> {
        &self.term_ranker
    }

    /// The `n` best terms of the `m` best documents.
    ///
    /// Selecting zero documents fails with the vectorizer's empty-vocabulary
    /// error.
    pub fn top_terms(
        &self,
        table: &DocumentTable,
        doc_col: &str,
        score_col: &str,
        m: Limit,
        n: Limit,
    ) -> Result<Vec<TermScore>> {
        let documents = top_doc(table, doc_col, score_col, m)?;
        let texts: Vec<&str> = documents.iter().map(|d| d.text.as_str()).collect();
        self.term_ranker.top_terms(&texts, n)
    }
}

/// The `n` best terms of the `m` best documents, using the default vectorizer.
pub fn top_term_from_top_doc(
    table: &DocumentTable,
    doc_col: &str,
    score_col: &str,
    m: Limit,
    n: Limit,
) -> Result<Vec<TermScore>> {
    CombinedRanker::with_defaults()?.top_terms(table, doc_col, score_col, m, n)
}
