//! Query expansion over an embedding model.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use crate::embedding::EmbeddingModel;
use crate::error::{LexpandError, Result};
use crate::rank::Limit;

use super::config::ExpansionConfig;
use super::types::{ExpandedTerms, ExpansionRep};

/// Expands queries into related terms proposed by an embedding model.
///
/// ```
/// use std::sync::Arc;
/// use lexpand::embedding::{KeyedVectors, VectorModel};
/// use lexpand::expansion::{ExpansionRep, QueryExpander};
/// use lexpand::rank::Limit;
///
/// let words = KeyedVectors::from_entries(2, [
///     ("cat", vec![1.0, 0.0]),
///     ("kitten", vec![0.9, 0.1]),
///     ("car", vec![0.0, 1.0]),
/// ]).unwrap();
/// let expander = QueryExpander::new(Arc::new(VectorModel::new(words)));
///
/// let terms = expander.expand("cat", Limit::Top(1), ExpansionRep::TermSimilarity).unwrap();
/// assert_eq!(terms.terms().collect::<Vec<_>>(), vec!["kitten"]);
/// ```
pub struct QueryExpander {
    model: Arc<dyn EmbeddingModel>,
    tokenizer: Arc<dyn Tokenizer>,
    config: ExpansionConfig,
}

impl std::fmt::Debug for QueryExpander {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryExpander")
            .field("model", &self.model.name())
            .field("tokenizer", &self.tokenizer.name())
            .field("config", &self.config)
            .finish()
    }
}

impl QueryExpander {
    /// Create an expander with the default configuration.
    pub fn new(model: Arc<dyn EmbeddingModel>) -> Self {
        Self::with_config(model, ExpansionConfig::default())
    }

    pub fn with_config(model: Arc<dyn EmbeddingModel>, config: ExpansionConfig) -> Self {
        QueryExpander {
            model,
            tokenizer: Arc::new(WhitespaceTokenizer::new()),
            config,
        }
    }

    /// Replace the query tokenizer.
    pub fn with_tokenizer(mut self, tokenizer: Arc<dyn Tokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    pub fn model(&self) -> &Arc<dyn EmbeddingModel> {
        &self.model
    }

    pub fn config(&self) -> &ExpansionConfig {
        &self.config
    }

    /// Expand `query` with an explicit representation.
    pub fn expand(&self, query: &str, n: Limit, rep: ExpansionRep) -> Result<ExpandedTerms> {
        let terms = self.query_terms(query)?;
        if terms.is_empty() {
            tracing::debug!(query, "no query term in model vocabulary");
            return Ok(ExpandedTerms::default());
        }

        let mut candidates: Vec<(String, f64)> = Vec::new();
        for term in &terms {
            candidates.extend(self.neighbours(term, rep)?);
        }

        tracing::debug!(
            query_terms = terms.len(),
            candidates = candidates.len(),
            representation = %rep,
            "collected expansion candidates"
        );

        Ok(rank_candidates(candidates, n))
    }

    /// Expand `query` with the configured representation.
    pub fn expand_default(&self, query: &str, n: Limit) -> Result<ExpandedTerms> {
        self.expand(query, n, self.config.representation)
    }

    /// Query tokens present in the model vocabulary, duplicates kept.
    fn query_terms(&self, query: &str) -> Result<Vec<String>> {
        Ok(self
            .tokenizer
            .tokenize(query)?
            .map(|token| token.text)
            .filter(|term| {
                let known = self.model.contains(term);
                if !known {
                    tracing::trace!(term = term.as_str(), "skipping out-of-vocabulary term");
                }
                known
            })
            .collect())
    }

    fn neighbours(&self, term: &str, rep: ExpansionRep) -> Result<Vec<(String, f64)>> {
        let topn = self.config.neighbours_per_term;
        match rep {
            ExpansionRep::TermSimilarity => self.model.most_similar_terms(term, topn),
            ExpansionRep::DocVectorSimilarity => {
                let vector = self.model.term_vector(term).ok_or_else(|| {
                    LexpandError::model(format!("no vector for '{term}'"))
                })?;
                self.model.most_similar_documents(vector, topn)
            }
        }
    }
}

/// Group candidates by term, score each by its mean, and keep the best `n`.
///
/// Ties keep lexicographic term order.
fn rank_candidates(candidates: Vec<(String, f64)>, n: Limit) -> ExpandedTerms {
    let mut groups: BTreeMap<String, (f64, usize)> = BTreeMap::new();
    for (term, score) in candidates {
        let entry = groups.entry(term).or_insert((0.0, 0));
        entry.0 += score;
        entry.1 += 1;
    }

    let mut ranked: Vec<(String, f64)> = groups
        .into_iter()
        .map(|(term, (sum, count))| (term, sum / count as f64))
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    n.apply(&mut ranked);

    ExpandedTerms::new(ranked)
}

/// Expand `query` into at most `n` related terms using `model`.
///
/// Each whitespace-separated query token found in the model vocabulary
/// proposes its 100 nearest candidates. Candidates are averaged across the
/// tokens that proposed them and returned best first. A query without any
/// known token yields an empty result.
pub fn find_top_n_terms(
    query: &str,
    model: Arc<dyn EmbeddingModel>,
    n: Limit,
    rep: ExpansionRep,
) -> Result<ExpandedTerms> {
    QueryExpander::new(model).expand(query, n, rep)
}
