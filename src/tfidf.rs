//! TF-IDF weighting of a document collection.
//!
//! The [`Vectorizer`] trait is the seam between the rankers and whatever
//! produces document-term weights. [`TfIdfVectorizer`] is the built-in
//! implementation: it fits a sorted vocabulary and inverse document
//! frequencies on a corpus and returns the weighted [`TermMatrix`] for the same
//! corpus.

mod config;
mod matrix;
mod vectorizer;

pub use config::{Norm, StopWords, TfIdfConfig};
pub use matrix::TermMatrix;
pub use vectorizer::{TfIdfVectorizer, Vectorizer};
