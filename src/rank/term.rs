//! Term ranking by aggregate TF-IDF weight.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::rank::limit::Limit;
use crate::tfidf::{TermMatrix, TfIdfVectorizer, Vectorizer};

/// A term with its aggregate weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermScore {
    /// The vocabulary term.
    pub term: String,
    /// Sum of the term's weight over every document.
    pub score: f64,
}

impl TermScore {
    /// Create a new term score.
    pub fn new<S: Into<String>>(term: S, score: f64) -> Self {
        Self {
            term: term.into(),
            score,
        }
    }
}

/// Ranks the terms of a document collection.
///
/// The ranker owns its vectorizer; each call fits it afresh on the documents
/// it is given.
///
/// ```
/// use lexpand::rank::{Limit, TermRanker};
///
/// let ranker = TermRanker::with_defaults().unwrap();
/// let top = ranker
///     .top_terms(&["the cat sat", "the dog sat"], Limit::Top(2))
///     .unwrap();
///
/// assert_eq!(top[0].term, "sat");
/// assert_eq!(top[1].term, "the");
/// ```
#[derive(Debug)]
pub struct TermRanker<V = TfIdfVectorizer> {
    vectorizer: V,
}

impl TermRanker<TfIdfVectorizer> {
    /// A ranker over the default TF-IDF vectorizer.
    pub fn with_defaults() -> Result<Self> {
        Ok(Self::new(TfIdfVectorizer::new()?))
    }
}

impl<V: Vectorizer> TermRanker<V> {
    /// Create a ranker over the given vectorizer.
    pub fn new(vectorizer: V) -> Self {
        Self { vectorizer }
    }

    /// The vectorizer used for weighting.
    pub fn vectorizer(&self) -> &V {
        &self.vectorizer
    }

    /// The `limit` highest-weighted terms of `documents`, best first.
    ///
    /// Each term's weight is summed across all documents. Equal weights keep
    /// lexicographic term order.
    pub fn top_terms<S: AsRef<str>>(&self, documents: &[S], limit: Limit) -> Result<Vec<TermScore>> {
        let documents: Vec<&str> = documents.iter().map(AsRef::as_ref).collect();
        let matrix = self.vectorizer.fit_transform(&documents)?;
        let ranked = rank_terms(&matrix, limit);

        tracing::debug!(
            vectorizer = self.vectorizer.name(),
            documents = documents.len(),
            vocabulary = matrix.n_terms(),
            returned = ranked.len(),
            "ranked terms"
        );

        Ok(ranked)
    }
}

/// Rank the columns of a weight matrix by their sums.
pub fn rank_terms(matrix: &TermMatrix, limit: Limit) -> Vec<TermScore> {
    let mut scores: Vec<TermScore> = matrix
        .vocabulary()
        .iter()
        .zip(matrix.column_sums())
        .map(|(term, score)| TermScore::new(term.as_str(), score))
        .collect();

    // Stable: the vocabulary is sorted, so ties stay lexicographic.
    scores.sort_by(|a, b| b.score.total_cmp(&a.score));
    limit.apply(&mut scores);
    scores
}

/// The `n` terms with the highest summed TF-IDF weight, using the default
/// vectorizer.
pub fn top_tfidf<S: AsRef<str>>(documents: &[S], n: Limit) -> Result<Vec<TermScore>> {
    TermRanker::with_defaults()?.top_terms(documents, n)
}
