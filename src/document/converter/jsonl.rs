//! JSONL format document converter.
//!
//! Each non-blank line of the file is one JSON object:
//! ```jsonl
//! {"text": "the cat sat on the mat", "score": 0.82}
//! {"text": "dogs chase cats", "score": 0.41}
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde_json::Value;

use crate::document::converter::DocumentConverter;
use crate::document::document::Document;
use crate::document::field_value::FieldValue;
use crate::error::{LexpandError, Result};

/// A document converter for JSONL format.
///
/// Strings stay text (no type inference), so a numeric-looking document body
/// is never turned into a number.
#[derive(Clone, Debug, Default)]
pub struct JsonlDocumentConverter;

impl JsonlDocumentConverter {
    /// Create a new JSONL converter.
    pub fn new() -> Self {
        JsonlDocumentConverter
    }

    fn to_field_value(value: Value) -> FieldValue {
        match value {
            Value::String(s) => FieldValue::Text(s),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    FieldValue::Integer(i)
                } else if let Some(f) = n.as_f64() {
                    FieldValue::Float(f)
                } else {
                    FieldValue::Text(n.to_string())
                }
            }
            Value::Bool(b) => FieldValue::Boolean(b),
            Value::Null => FieldValue::Null,
            nested => FieldValue::Text(nested.to_string()),
        }
    }

    /// Parse a single JSON line into a Document.
    pub fn parse_line(&self, line: &str, line_number: usize) -> Result<Document> {
        let value: Value = serde_json::from_str(line).map_err(|e| {
            LexpandError::parse(format!("line {line_number}: invalid JSON: {e}"))
        })?;

        let Value::Object(map) = value else {
            return Err(LexpandError::parse(format!(
                "line {line_number}: expected a JSON object"
            )));
        };

        let mut doc = Document::new();
        for (key, val) in map {
            doc.add_field(key, Self::to_field_value(val));
        }
        Ok(doc)
    }
}

/// Iterator over JSONL documents.
pub struct JsonlDocumentIterator {
    reader: BufReader<File>,
    converter: JsonlDocumentConverter,
    line_number: usize,
}

impl Iterator for JsonlDocumentIterator {
    type Item = Result<Document>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut line = String::new();
        loop {
            line.clear();
            self.line_number += 1;
            match self.reader.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    return Some(self.converter.parse_line(line, self.line_number));
                }
                Err(e) => return Some(Err(LexpandError::Io(e))),
            }
        }
    }
}

impl DocumentConverter for JsonlDocumentConverter {
    type Iter = JsonlDocumentIterator;

    fn convert<P: AsRef<Path>>(&self, path: P) -> Result<Self::Iter> {
        let file = File::open(path.as_ref())?;

        Ok(JsonlDocumentIterator {
            reader: BufReader::new(file),
            converter: self.clone(),
            line_number: 0,
        })
    }
}
