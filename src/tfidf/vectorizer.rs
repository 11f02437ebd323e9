//! TF-IDF vectorizer for document-term weighting.

use std::collections::BTreeSet;
use std::sync::Arc;

use ahash::AHashMap;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token_filter::{LowercaseFilter, StopFilter};
use crate::analysis::tokenizer::regex::RegexTokenizer;
use crate::error::{LexpandError, Result};

use super::config::{Norm, StopWords, TfIdfConfig};
use super::matrix::TermMatrix;

/// Produces a document-term weight matrix for a document collection.
///
/// Implementations fit whatever statistics they need on `documents` and
/// weight those same documents; nothing is retained between calls.
pub trait Vectorizer: Send + Sync {
    /// Fit on `documents` and return their weight matrix.
    ///
    /// Fails with [`LexpandError::Analysis`] when the collection yields no terms.
    fn fit_transform(&self, documents: &[&str]) -> Result<TermMatrix>;

    /// Get the name of this vectorizer for debugging and logging.
    fn name(&self) -> &str;
}

/// TF-IDF vectorizer for text feature extraction.
pub struct TfIdfVectorizer {
    config: TfIdfConfig,
    /// Analyzer for tokenization.
    analyzer: Arc<dyn Analyzer>,
}

impl std::fmt::Debug for TfIdfVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TfIdfVectorizer")
            .field("config", &self.config)
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

impl TfIdfVectorizer {
    /// Create a vectorizer with the default configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(TfIdfConfig::default())
    }

    /// Create a vectorizer whose analyzer is built from `config`.
    pub fn with_config(config: TfIdfConfig) -> Result<Self> {
        let analyzer = Arc::new(Self::build_analyzer(&config)?);
        Ok(Self { config, analyzer })
    }

    /// Create a vectorizer with a caller-supplied analyzer.
    ///
    /// `lowercase`, `token_pattern` and `stop_words` in `config` are ignored;
    /// tokenization is entirely up to `analyzer`.
    pub fn with_analyzer(config: TfIdfConfig, analyzer: Arc<dyn Analyzer>) -> Self {
        Self { config, analyzer }
    }

    /// The configuration in use.
    pub fn config(&self) -> &TfIdfConfig {
        &self.config
    }

    fn build_analyzer(config: &TfIdfConfig) -> Result<PipelineAnalyzer> {
        let tokenizer = RegexTokenizer::with_pattern(&config.token_pattern)?;
        let mut analyzer = PipelineAnalyzer::new(Arc::new(tokenizer)).with_name("tfidf");

        if config.lowercase {
            analyzer = analyzer.add_filter(Arc::new(LowercaseFilter::new()));
        }

        match &config.stop_words {
            StopWords::None => {}
            StopWords::English => {
                analyzer = analyzer.add_filter(Arc::new(StopFilter::english()));
            }
            StopWords::Custom(words) => {
                let words = words.iter().map(|w| {
                    if config.lowercase {
                        w.to_lowercase()
                    } else {
                        w.clone()
                    }
                });
                analyzer = analyzer.add_filter(Arc::new(StopFilter::from_words(words)));
            }
        }

        Ok(analyzer)
    }

    /// Count term occurrences per document.
    fn count_terms(&self, documents: &[&str]) -> Result<Vec<AHashMap<String, usize>>> {
        documents
            .iter()
            .map(|doc| -> Result<AHashMap<String, usize>> {
                let mut counts = AHashMap::new();
                for token in self.analyzer.analyze(doc)? {
                    *counts.entry(token.text).or_insert(0) += 1;
                }
                Ok(counts)
            })
            .collect()
    }

    fn idf(&self, n_documents: usize, document_frequency: usize) -> f64 {
        if !self.config.use_idf {
            return 1.0;
        }
        let n = n_documents as f64;
        let df = document_frequency as f64;
        if self.config.smooth_idf {
            // IDF = ln((N + 1) / (df + 1)) + 1
            ((n + 1.0) / (df + 1.0)).ln() + 1.0
        } else {
            (n / df).ln() + 1.0
        }
    }

    fn tf(&self, count: usize) -> f64 {
        if self.config.sublinear_tf {
            1.0 + (count as f64).ln()
        } else {
            count as f64
        }
    }

    fn normalize(&self, row: &mut [(usize, f64)]) {
        let norm = match self.config.norm {
            Norm::L1 => row.iter().map(|(_, w)| w.abs()).sum::<f64>(),
            Norm::L2 => row.iter().map(|(_, w)| w * w).sum::<f64>().sqrt(),
            Norm::Disabled => return,
        };
        if norm > 0.0 {
            for (_, weight) in row.iter_mut() {
                *weight /= norm;
            }
        }
    }
}

impl Vectorizer for TfIdfVectorizer {
    fn fit_transform(&self, documents: &[&str]) -> Result<TermMatrix> {
        let counts = self.count_terms(documents)?;

        let vocabulary: Vec<String> = counts
            .iter()
            .flat_map(|doc| doc.keys().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        if vocabulary.is_empty() {
            return Err(LexpandError::empty_vocabulary());
        }

        let index: AHashMap<&str, usize> = vocabulary
            .iter()
            .enumerate()
            .map(|(idx, term)| (term.as_str(), idx))
            .collect();

        let mut document_frequency = vec![0usize; vocabulary.len()];
        for doc in &counts {
            for term in doc.keys() {
                document_frequency[index[term.as_str()]] += 1;
            }
        }

        let idf: Vec<f64> = document_frequency
            .iter()
            .map(|&df| self.idf(documents.len(), df))
            .collect();

        let rows = counts
            .iter()
            .map(|doc| {
                let mut row: Vec<(usize, f64)> = doc
                    .iter()
                    .map(|(term, &count)| {
                        let column = index[term.as_str()];
                        (column, self.tf(count) * idf[column])
                    })
                    .collect();
                row.sort_unstable_by_key(|(column, _)| *column);
                self.normalize(&mut row);
                row
            })
            .collect();

        tracing::debug!(
            documents = documents.len(),
            terms = vocabulary.len(),
            "fitted tf-idf vocabulary"
        );

        TermMatrix::new(vocabulary, rows)
    }

    fn name(&self) -> &str {
        "tfidf"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_vocabulary_is_sorted_and_lowercased() {
        let vectorizer = TfIdfVectorizer::new().unwrap();
        let matrix = vectorizer
            .fit_transform(&["The Zebra sat", "a cat SAT"])
            .unwrap();

        assert_eq!(matrix.vocabulary(), &["cat", "sat", "the", "zebra"]);
        assert_eq!(matrix.n_documents(), 2);
    }

    #[test]
    fn test_smooth_idf_and_l2_norm() {
        let vectorizer = TfIdfVectorizer::new().unwrap();
        let matrix = vectorizer
            .fit_transform(&["the cat sat", "the dog sat"])
            .unwrap();

        // idf(cat) = ln(3 / 2) + 1, idf(the) = idf(sat) = 1
        let idf_cat = (3.0f64 / 2.0).ln() + 1.0;
        let length = (2.0 + idf_cat * idf_cat).sqrt();

        assert!(approx(matrix.weight(0, "cat"), idf_cat / length));
        assert!(approx(matrix.weight(0, "the"), 1.0 / length));
        assert!(approx(matrix.weight(0, "dog"), 0.0));

        let row_length: f64 = matrix
            .row(1)
            .unwrap()
            .iter()
            .map(|(_, w)| w * w)
            .sum::<f64>()
            .sqrt();
        assert!(approx(row_length, 1.0));
    }

    #[test]
    fn test_raw_counts_without_idf_or_norm() {
        let config = TfIdfConfig {
            use_idf: false,
            norm: Norm::Disabled,
            ..TfIdfConfig::default()
        };
        let vectorizer = TfIdfVectorizer::with_config(config).unwrap();
        let matrix = vectorizer.fit_transform(&["cat cat dog"]).unwrap();

        assert!(approx(matrix.weight(0, "cat"), 2.0));
        assert!(approx(matrix.weight(0, "dog"), 1.0));
    }

    #[test]
    fn test_sublinear_tf_and_plain_idf() {
        let config = TfIdfConfig {
            smooth_idf: false,
            sublinear_tf: true,
            norm: Norm::Disabled,
            ..TfIdfConfig::default()
        };
        let vectorizer = TfIdfVectorizer::with_config(config).unwrap();
        let matrix = vectorizer
            .fit_transform(&["cat cat cat dog", "dog"])
            .unwrap();

        let expected_cat = (1.0 + 3.0f64.ln()) * ((2.0f64 / 1.0).ln() + 1.0);
        assert!(approx(matrix.weight(0, "cat"), expected_cat));
        assert!(approx(matrix.weight(1, "dog"), 1.0));
    }

    #[test]
    fn test_l1_norm() {
        let config = TfIdfConfig {
            use_idf: false,
            norm: Norm::L1,
            ..TfIdfConfig::default()
        };
        let vectorizer = TfIdfVectorizer::with_config(config).unwrap();
        let matrix = vectorizer.fit_transform(&["cat cat dog bird"]).unwrap();

        assert!(approx(matrix.weight(0, "cat"), 0.5));
        assert!(approx(matrix.weight(0, "bird"), 0.25));
    }

    #[test]
    fn test_stop_words() {
        let config = TfIdfConfig {
            stop_words: StopWords::Custom(vec!["Cat".to_string()]),
            ..TfIdfConfig::default()
        };
        let vectorizer = TfIdfVectorizer::with_config(config).unwrap();
        let matrix = vectorizer.fit_transform(&["cat and dog"]).unwrap();
        assert_eq!(matrix.vocabulary(), &["and", "dog"]);

        let config = TfIdfConfig {
            stop_words: StopWords::English,
            ..TfIdfConfig::default()
        };
        let vectorizer = TfIdfVectorizer::with_config(config).unwrap();
        let matrix = vectorizer.fit_transform(&["cat and dog"]).unwrap();
        assert_eq!(matrix.vocabulary(), &["cat", "dog"]);
    }

    #[test]
    fn test_empty_vocabulary() {
        let vectorizer = TfIdfVectorizer::new().unwrap();

        let result = vectorizer.fit_transform(&[]);
        assert!(matches!(result, Err(LexpandError::Analysis(_))));

        let result = vectorizer.fit_transform(&["a b c", "!"]);
        assert!(matches!(result, Err(LexpandError::Analysis(_))));
    }

    #[test]
    fn test_empty_document_keeps_its_row() {
        let vectorizer = TfIdfVectorizer::new().unwrap();
        let matrix = vectorizer.fit_transform(&["", "cat dog"]).unwrap();

        assert_eq!(matrix.n_documents(), 2);
        assert!(matrix.row(0).unwrap().is_empty());
    }

    #[test]
    fn test_custom_analyzer() {
        use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;

        let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()));
        let config = TfIdfConfig {
            use_idf: false,
            norm: Norm::Disabled,
            ..TfIdfConfig::default()
        };
        let vectorizer = TfIdfVectorizer::with_analyzer(config, Arc::new(analyzer));
        let matrix = vectorizer.fit_transform(&["A cat", "a cat"]).unwrap();

        // no lowercasing and single characters are kept
        assert_eq!(matrix.vocabulary(), &["A", "a", "cat"]);
        assert!(approx(matrix.weight(1, "cat"), 1.0));
        assert!(!vectorizer.config().use_idf);
    }
}
