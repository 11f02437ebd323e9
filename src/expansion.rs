//! Embedding-based query expansion.
//!
//! A query is split on whitespace, its in-vocabulary terms each propose their
//! nearest neighbours, and every candidate is scored by the mean of the
//! similarities it received. See [`find_top_n_terms`].

pub mod config;
pub mod expander;
pub mod types;

pub use config::ExpansionConfig;
pub use expander::{QueryExpander, find_top_n_terms};
pub use types::{ExpandedTerms, ExpansionRep};
