//! # lexpand
//!
//! Query and document expansion utilities for retrieval pipelines.
//!
//! ## Features
//!
//! - Top terms of a corpus by summed TF-IDF weight ([`rank::top_tfidf`])
//! - Top documents of a scored table ([`rank::top_doc`])
//! - Top terms of the top documents ([`rank::top_term_from_top_doc`])
//! - Embedding-based query expansion ([`expansion::find_top_n_terms`])
//!
//! ```
//! use lexpand::prelude::*;
//!
//! let top = top_tfidf(&["the cat sat", "the dog sat"], Limit::Top(1)).unwrap();
//! assert_eq!(top[0].term, "sat");
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod document;
pub mod embedding;
pub mod error;
pub mod expansion;
pub mod rank;
pub mod tfidf;
pub mod util;

pub mod prelude {
    pub use crate::config::LexpandConfig;
    pub use crate::document::table::DocumentTable;
    pub use crate::embedding::{EmbeddingModel, KeyedVectors, VectorModel};
    pub use crate::error::{LexpandError, Result};
    pub use crate::expansion::{ExpandedTerms, ExpansionRep, QueryExpander, find_top_n_terms};
    pub use crate::rank::{
        CombinedRanker, Limit, RankedDocument, TermRanker, TermScore, top_doc,
        top_term_from_top_doc, top_tfidf,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
