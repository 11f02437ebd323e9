//! Configuration for the TF-IDF vectorizer.

use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::regex::DEFAULT_TOKEN_PATTERN;

/// Row normalization applied to each document's weight vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    /// Divide by the sum of absolute weights.
    L1,
    /// Divide by the Euclidean length.
    L2,
    /// Keep raw weights.
    Disabled,
}

/// Stop words removed before counting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StopWords {
    /// Keep every token.
    #[default]
    None,
    /// The built-in 33-word English list (Lucene's, not scikit-learn's).
    English,
    /// A caller-supplied list, matched after lowercasing when enabled.
    Custom(Vec<String>),
}

/// Configuration for [`super::TfIdfVectorizer`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TfIdfConfig {
    /// Lowercase tokens before counting.
    pub lowercase: bool,
    /// Regex selecting tokens.
    pub token_pattern: String,
    /// Stop words to drop.
    pub stop_words: StopWords,
    /// Add one to document frequencies, as if an extra document held every term.
    pub smooth_idf: bool,
    /// Replace raw term counts with `1 + ln(count)`.
    pub sublinear_tf: bool,
    /// Multiply term frequencies by inverse document frequency.
    pub use_idf: bool,
    /// Per-document normalization.
    pub norm: Norm,
}

impl Default for TfIdfConfig {
    fn default() -> Self {
        Self {
            lowercase: true,
            token_pattern: DEFAULT_TOKEN_PATTERN.to_string(),
            stop_words: StopWords::None,
            smooth_idf: true,
            sublinear_tf: false,
            use_idf: true,
            norm: Norm::L2,
        }
    }
}
