//! The embedding model trait consumed by query expansion.

use crate::error::Result;

/// A read-only distributional embedding model.
///
/// Similarity queries return `(key, score)` pairs ranked best first.
pub trait EmbeddingModel: Send + Sync {
    /// Check whether `term` is in the word vocabulary.
    fn contains(&self, term: &str) -> bool;

    /// The embedding of `term`, if it is in the vocabulary.
    fn term_vector(&self, term: &str) -> Option<&[f32]>;

    /// Up to `topn` vocabulary terms most similar to `term`, excluding `term` itself.
    fn most_similar_terms(&self, term: &str, topn: usize) -> Result<Vec<(String, f64)>>;

    /// Up to `topn` document tags whose vectors are most similar to `vector`.
    fn most_similar_documents(&self, vector: &[f32], topn: usize) -> Result<Vec<(String, f64)>>;

    /// Get the name of this model for debugging and logging.
    fn name(&self) -> &str;
}
