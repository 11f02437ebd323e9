//! Error types for the lexpand library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`LexpandError`] enum. Every failure aborts the whole call; no operation
//! returns a partial ranking.
//!
//! # Examples
//!
//! ```
//! use lexpand::error::{LexpandError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LexpandError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for lexpand operations.
#[derive(Error, Debug)]
pub enum LexpandError {
    /// I/O errors (reading documents or vector files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Schema-related errors (unknown column, wrongly typed column values)
    #[error("Schema error: {0}")]
    Schema(String),

    /// Analysis-related errors (empty vocabulary, invalid token pattern)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// An argument outside the accepted domain
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Embedding model errors (dimension mismatch, unknown key)
    #[error("Model error: {0}")]
    Model(String),

    /// Malformed input files
    #[error("Parse error: {0}")]
    Parse(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with LexpandError.
pub type Result<T> = std::result::Result<T, LexpandError>;

impl LexpandError {
    /// Create a new schema error.
    pub fn schema<S: Into<String>>(msg: S) -> Self {
        LexpandError::Schema(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        LexpandError::Analysis(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        LexpandError::InvalidArgument(msg.into())
    }

    /// Create a new model error.
    pub fn model<S: Into<String>>(msg: S) -> Self {
        LexpandError::Model(msg.into())
    }

    /// Create a new parse error.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        LexpandError::Parse(msg.into())
    }

    /// The error returned when a vectorizer is fitted on a corpus without terms.
    pub fn empty_vocabulary() -> Self {
        LexpandError::Analysis(
            "empty vocabulary; perhaps the documents only contain stop words".to_string(),
        )
    }
}
