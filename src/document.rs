//! Documents and scored document tables.
//!
//! A [`document::Document`] is a map from column name to
//! [`field_value::FieldValue`]. A [`table::DocumentTable`] is an ordered
//! collection of documents whose schema is the union of their column names;
//! row identity is insertion order.

pub mod converter;
pub mod document;
pub mod field_value;
pub mod table;

pub use document::{Document, DocumentBuilder};
pub use field_value::FieldValue;
pub use table::DocumentTable;
