//! A two-dimensional table of documents with named columns.

use std::path::Path;

use crate::document::converter::DocumentConverter;
use crate::document::converter::jsonl::JsonlDocumentConverter;
use crate::document::document::Document;
use crate::document::field_value::FieldValue;
use crate::error::{LexpandError, Result};

static NULL_VALUE: FieldValue = FieldValue::Null;

/// Rows of documents addressed by index, with a column schema.
///
/// The schema lists every column declared up front or seen in any row, in
/// first-seen order. A row that lacks a schema column reads as null.
///
/// # Examples
///
/// ```
/// use lexpand::document::table::DocumentTable;
///
/// let table = DocumentTable::from_scored("text", "score", [
///     ("the cat sat", 0.9),
///     ("the dog ran", 0.4),
/// ]);
///
/// assert_eq!(table.len(), 2);
/// assert!(table.has_column("score"));
/// assert_eq!(table.text(1, "text").unwrap(), "the dog ran");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentTable {
    columns: Vec<String>,
    rows: Vec<Document>,
}

impl DocumentTable {
    /// Create an empty table without columns.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty table with a declared schema.
    pub fn with_columns<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::new();
        for column in columns {
            table.add_column(column.into());
        }
        table
    }

    /// Build a table from documents, in order.
    pub fn from_documents<I: IntoIterator<Item = Document>>(documents: I) -> Self {
        let mut table = Self::new();
        for document in documents {
            table.push(document);
        }
        table
    }

    /// Build a two-column table of texts and scores.
    pub fn from_scored<I, T>(doc_col: &str, score_col: &str, rows: I) -> Self
    where
        I: IntoIterator<Item = (T, f64)>,
        T: Into<String>,
    {
        let mut table = Self::with_columns([doc_col, score_col]);
        for (text, score) in rows {
            table.push(
                Document::builder()
                    .add_text(doc_col, text)
                    .add_float(score_col, score)
                    .build(),
            );
        }
        table
    }

    /// Load a table from a JSON Lines file, one document per line.
    pub fn from_jsonl<P: AsRef<Path>>(path: P) -> Result<Self> {
        let converter = JsonlDocumentConverter::new();
        let mut table = Self::new();
        for document in converter.convert(path)? {
            table.push(document?);
        }
        Ok(table)
    }

    /// Append a row, extending the schema with any new columns.
    pub fn push(&mut self, document: Document) {
        let mut new_columns: Vec<&str> = document
            .field_names()
            .into_iter()
            .filter(|name| !self.has_column(name))
            .collect();
        // Field order inside a document is unspecified; keep the schema stable.
        new_columns.sort_unstable();
        let new_columns: Vec<String> = new_columns.into_iter().map(str::to_string).collect();
        for column in new_columns {
            self.add_column(column);
        }
        self.rows.push(document);
    }

    fn add_column(&mut self, column: String) {
        if !self.has_column(&column) {
            self.columns.push(column);
        }
    }

    /// Column names in schema order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Check whether the schema contains a column.
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Fail with a schema error unless the column exists.
    pub fn require_column(&self, name: &str) -> Result<()> {
        if self.has_column(name) {
            Ok(())
        } else {
            Err(LexpandError::schema(format!(
                "column '{name}' not found; available columns: [{}]",
                self.columns.join(", ")
            )))
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows in index order.
    pub fn rows(&self) -> &[Document] {
        &self.rows
    }

    /// The value at (`row`, `column`); null when the row lacks the column.
    pub fn value(&self, row: usize, column: &str) -> Result<&FieldValue> {
        self.require_column(column)?;
        let document = self
            .rows
            .get(row)
            .ok_or_else(|| LexpandError::invalid_argument(format!("row {row} out of range")))?;
        Ok(document.get_field(column).unwrap_or(&NULL_VALUE))
    }

    /// The text at (`row`, `column`).
    ///
    /// Fails with a schema error when the cell does not hold text.
    pub fn text(&self, row: usize, column: &str) -> Result<&str> {
        let value = self.value(row, column)?;
        value.as_text().ok_or_else(|| {
            LexpandError::schema(format!(
                "row {row} column '{column}' holds {} instead of text",
                value.type_name()
            ))
        })
    }

    /// The numeric value at (`row`, `column`), `None` for null and NaN cells.
    ///
    /// Fails with a schema error when the cell is neither numeric nor null.
    pub fn score(&self, row: usize, column: &str) -> Result<Option<f64>> {
        match self.value(row, column)? {
            FieldValue::Null => Ok(None),
            FieldValue::Float(f) if f.is_nan() => Ok(None),
            value => value.as_f64().map(Some).ok_or_else(|| {
                LexpandError::schema(format!(
                    "row {row} column '{column}' holds {} instead of a number",
                    value.type_name()
                ))
            }),
        }
    }

    /// Every text of a column, in row order.
    pub fn texts(&self, column: &str) -> Result<Vec<&str>> {
        (0..self.len()).map(|row| self.text(row, column)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_grows_with_rows() {
        let mut table = DocumentTable::with_columns(["text"]);
        table.push(Document::builder().add_text("text", "a").build());
        table.push(
            Document::builder()
                .add_text("text", "b")
                .add_float("score", 1.0)
                .add_integer("id", 7)
                .build(),
        );

        assert_eq!(table.columns(), &["text", "id", "score"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.score(0, "score").unwrap(), None);
        assert_eq!(table.score(1, "id").unwrap(), Some(7.0));
    }

    #[test]
    fn test_missing_column_is_schema_error() {
        let table = DocumentTable::from_scored("text", "score", [("cat", 1.0)]);
        let err = table.require_column("body").unwrap_err();
        assert!(matches!(err, LexpandError::Schema(_)));
        assert!(err.to_string().contains("body"));

        assert!(matches!(table.text(0, "body"), Err(LexpandError::Schema(_))));
    }

    #[test]
    fn test_wrongly_typed_cells() {
        let table = DocumentTable::from_scored("text", "score", [("cat", 1.0)]);
        assert!(matches!(table.text(0, "score"), Err(LexpandError::Schema(_))));
        assert!(matches!(table.score(0, "text"), Err(LexpandError::Schema(_))));
    }

    #[test]
    fn test_nan_score_reads_as_missing() {
        let table = DocumentTable::from_scored("text", "score", [("cat", f64::NAN)]);
        assert_eq!(table.score(0, "score").unwrap(), None);
    }

    #[test]
    fn test_texts() {
        let table =
            DocumentTable::from_scored("text", "score", [("cat", 1.0), ("dog", 2.0)]);
        assert_eq!(table.texts("text").unwrap(), vec!["cat", "dog"]);
    }

    #[test]
    fn test_rows_in_index_order() {
        let table = DocumentTable::from_scored("text", "score", [("cat", 1.0), ("dog", 2.0)]);
        let rows = table.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].get_field("text").and_then(FieldValue::as_text), Some("dog"));
    }
}
