//! Sparse document-term weight matrix.

use crate::error::{LexpandError, Result};

/// Weights for every (document, term) pair of a fitted corpus.
///
/// Rows are documents in input order. Each row holds `(term index, weight)`
/// pairs sorted by term index, omitting zero weights. Term indices point into
/// [`TermMatrix::vocabulary`], which is sorted lexicographically.
#[derive(Debug, Clone, PartialEq)]
pub struct TermMatrix {
    vocabulary: Vec<String>,
    rows: Vec<Vec<(usize, f64)>>,
}

impl TermMatrix {
    /// Build a matrix from a vocabulary and sparse rows.
    ///
    /// Fails when a row refers to a column outside the vocabulary or its
    /// term indices are not strictly increasing.
    pub fn new(vocabulary: Vec<String>, rows: Vec<Vec<(usize, f64)>>) -> Result<Self> {
        for (document, row) in rows.iter().enumerate() {
            let out_of_range = row.iter().find(|(column, _)| *column >= vocabulary.len());
            if let Some(&(column, _)) = out_of_range {
                return Err(LexpandError::invalid_argument(format!(
                    "row {document} refers to column {column}, vocabulary has {} terms",
                    vocabulary.len()
                )));
            }
            if row.windows(2).any(|pair| pair[0].0 >= pair[1].0) {
                return Err(LexpandError::invalid_argument(format!(
                    "row {document} term indices are not strictly increasing"
                )));
            }
        }
        Ok(Self { vocabulary, rows })
    }

    /// The vocabulary, in column order.
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Number of documents (rows).
    pub fn n_documents(&self) -> usize {
        self.rows.len()
    }

    /// Number of terms (columns).
    pub fn n_terms(&self) -> usize {
        self.vocabulary.len()
    }

    /// Non-zero weights of one document.
    pub fn row(&self, document: usize) -> Option<&[(usize, f64)]> {
        self.rows.get(document).map(Vec::as_slice)
    }

    /// Weight of a term in a document, zero when absent.
    pub fn weight(&self, document: usize, term: &str) -> f64 {
        let Ok(column) = self.vocabulary.binary_search_by(|t| t.as_str().cmp(term)) else {
            return 0.0;
        };
        self.row(document)
            .and_then(|row| {
                row.binary_search_by_key(&column, |(idx, _)| *idx)
                    .ok()
                    .map(|pos| row[pos].1)
            })
            .unwrap_or(0.0)
    }

    /// Sum of each term's weight over all documents, in column order.
    pub fn column_sums(&self) -> Vec<f64> {
        let mut sums = vec![0.0; self.vocabulary.len()];
        for row in &self.rows {
            for &(column, weight) in row {
                sums[column] += weight;
            }
        }
        sums
    }
}
