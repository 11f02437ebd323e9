//! Word and document vectors behind the [`EmbeddingModel`] trait.

use std::path::Path;

use crate::error::{LexpandError, Result};

use super::keyed_vectors::KeyedVectors;
use super::model::EmbeddingModel;

/// An embedding model made of word vectors and, optionally, document vectors.
///
/// Both stores share one dimension so that a word vector can seed a document
/// similarity query. Without document vectors, document queries fail.
#[derive(Debug, Clone)]
pub struct VectorModel {
    words: KeyedVectors,
    documents: KeyedVectors,
}

impl VectorModel {
    /// Create a model from word vectors only.
    pub fn new(words: KeyedVectors) -> Self {
        let documents = KeyedVectors::new(words.dimension());
        Self { words, documents }
    }

    /// Attach document vectors of the same dimension as the word vectors.
    pub fn with_documents(mut self, documents: KeyedVectors) -> Result<Self> {
        if documents.dimension() != self.words.dimension() {
            return Err(LexpandError::model(format!(
                "document vectors have {} dimensions, word vectors have {}",
                documents.dimension(),
                self.words.dimension()
            )));
        }
        self.documents = documents;
        Ok(self)
    }

    /// Load word vectors and optional document vectors from word2vec text files.
    pub fn from_word2vec_files<P: AsRef<Path>>(words: P, documents: Option<P>) -> Result<Self> {
        let model = Self::new(KeyedVectors::load_word2vec_file(words)?);
        match documents {
            Some(path) => model.with_documents(KeyedVectors::load_word2vec_file(path)?),
            None => Ok(model),
        }
    }

    pub fn words(&self) -> &KeyedVectors {
        &self.words
    }

    pub fn documents(&self) -> &KeyedVectors {
        &self.documents
    }
}

impl EmbeddingModel for VectorModel {
    fn contains(&self, term: &str) -> bool {
        self.words.contains(term)
    }

    fn term_vector(&self, term: &str) -> Option<&[f32]> {
        self.words.get(term)
    }

    fn most_similar_terms(&self, term: &str, topn: usize) -> Result<Vec<(String, f64)>> {
        self.words.most_similar(term, topn)
    }

    fn most_similar_documents(&self, vector: &[f32], topn: usize) -> Result<Vec<(String, f64)>> {
        if self.documents.is_empty() {
            return Err(LexpandError::model("no document vectors loaded"));
        }
        self.documents.most_similar_to_vector(vector, topn, &[])
    }

    fn name(&self) -> &str {
        "vector_model"
    }
}
