//! Term and document ranking.
//!
//! - [`term::TermRanker`] / [`top_tfidf`]: top terms of a corpus by summed TF-IDF weight
//! - [`document::top_doc`]: top documents of a scored table
//! - [`combined::CombinedRanker`] / [`top_term_from_top_doc`]: top terms of the top documents
//!
//! Every ranking is a pure function of its inputs: ties resolve
//! deterministically and nothing is cached between calls.

pub mod combined;
pub mod document;
pub mod limit;
pub mod term;

pub use combined::{CombinedRanker, top_term_from_top_doc};
pub use document::{RankedDocument, top_doc};
pub use limit::Limit;
pub use term::{TermRanker, TermScore, top_tfidf};
