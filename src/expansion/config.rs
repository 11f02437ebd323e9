//! Query expansion configuration.

use serde::{Deserialize, Serialize};

use super::types::ExpansionRep;

/// Neighbours fetched per query term.
pub const DEFAULT_NEIGHBOURS_PER_TERM: usize = 100;

/// Configuration for [`QueryExpander`](super::QueryExpander).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpansionConfig {
    /// How many similar candidates each query term proposes.
    pub neighbours_per_term: usize,
    /// The representation used when none is given explicitly.
    pub representation: ExpansionRep,
}

impl Default for ExpansionConfig {
    fn default() -> Self {
        ExpansionConfig {
            neighbours_per_term: DEFAULT_NEIGHBOURS_PER_TERM,
            representation: ExpansionRep::TermSimilarity,
        }
    }
}
