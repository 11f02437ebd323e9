//! Document converters that read files into [`Document`]s.

use std::path::Path;

use crate::document::document::Document;
use crate::error::Result;

pub mod jsonl;

/// A trait for converting a file format into a Document iterator.
pub trait DocumentConverter {
    /// The iterator type that yields documents.
    type Iter: Iterator<Item = Result<Document>>;

    /// Convert a file into an iterator of Documents.
    fn convert<P: AsRef<Path>>(&self, path: P) -> Result<Self::Iter>;
}
