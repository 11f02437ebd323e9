//! Pretrained embedding models used for query expansion.
//!
//! The query expander only talks to the [`EmbeddingModel`] trait: a vocabulary
//! membership test, term vectors, and two nearest-neighbour queries (similar
//! terms, similar document vectors). [`VectorModel`] is the in-memory
//! implementation over two [`KeyedVectors`] stores, loadable from the word2vec
//! text format.
//!
//! ```
//! use lexpand::embedding::{EmbeddingModel, KeyedVectors, VectorModel};
//!
//! let words = KeyedVectors::from_entries(2, [
//!     ("cat", vec![1.0, 0.0]),
//!     ("kitten", vec![0.9, 0.1]),
//!     ("car", vec![0.0, 1.0]),
//! ]).unwrap();
//! let model = VectorModel::new(words);
//!
//! let similar = model.most_similar_terms("cat", 1).unwrap();
//! assert_eq!(similar[0].0, "kitten");
//! ```

pub mod keyed_vectors;
pub mod model;
pub mod vector_model;

pub use keyed_vectors::KeyedVectors;
pub use model::EmbeddingModel;
pub use vector_model::VectorModel;
