//! Top-level configuration.
//!
//! Every section defaults independently, so a file only needs to name the
//! settings it changes:
//!
//! ```json
//! { "tfidf": { "stop_words": "english" }, "expansion": { "neighbours_per_term": 50 } }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::expansion::ExpansionConfig;
use crate::tfidf::TfIdfConfig;

/// Configuration for the vectorizer and the query expander.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexpandConfig {
    pub tfidf: TfIdfConfig,
    pub expansion: ExpansionConfig,
}

impl LexpandConfig {
    /// Load a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a configuration from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
