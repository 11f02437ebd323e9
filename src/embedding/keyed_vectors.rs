//! In-memory key to vector store with cosine nearest-neighbour search.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use ahash::AHashMap;

use crate::error::{LexpandError, Result};
use crate::util::simd::{dot_product, normalized};

/// Fixed-dimension vectors addressed by string keys.
///
/// Keys keep their insertion order, which also breaks similarity ties.
/// Similarities are cosines computed over unit-length copies of the vectors.
#[derive(Debug, Clone, Default)]
pub struct KeyedVectors {
    dimension: usize,
    keys: Vec<String>,
    index: AHashMap<String, usize>,
    vectors: Vec<Vec<f32>>,
    unit_vectors: Vec<Vec<f32>>,
}

impl KeyedVectors {
    /// Create an empty store for vectors of `dimension` components.
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            ..Self::default()
        }
    }

    /// Build a store from `(key, vector)` pairs.
    pub fn from_entries<I, S>(dimension: usize, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Vec<f32>)>,
        S: Into<String>,
    {
        let mut store = Self::new(dimension);
        for (key, vector) in entries {
            store.add(key, vector)?;
        }
        Ok(store)
    }

    /// Add or replace the vector stored under `key`.
    ///
    /// Fails when the vector has the wrong dimension or holds NaN or infinity.
    pub fn add<S: Into<String>>(&mut self, key: S, vector: Vec<f32>) -> Result<()> {
        let key = key.into();
        if vector.len() != self.dimension {
            return Err(LexpandError::model(format!(
                "vector for '{key}' has {} dimensions, expected {}",
                vector.len(),
                self.dimension
            )));
        }
        if vector.iter().any(|v| !v.is_finite()) {
            return Err(LexpandError::model(format!(
                "vector for '{key}' has a non-finite component"
            )));
        }

        let unit = normalized(&vector);
        match self.index.get(&key) {
            Some(&idx) => {
                self.vectors[idx] = vector;
                self.unit_vectors[idx] = unit;
            }
            None => {
                self.index.insert(key.clone(), self.keys.len());
                self.keys.push(key);
                self.vectors.push(vector);
                self.unit_vectors.push(unit);
            }
        }
        Ok(())
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// The stored (not normalized) vector for `key`.
    pub fn get(&self, key: &str) -> Option<&[f32]> {
        self.index.get(key).map(|&idx| self.vectors[idx].as_slice())
    }

    /// Cosine similarity between two stored keys.
    pub fn similarity(&self, a: &str, b: &str) -> Option<f64> {
        let a = self.index.get(a)?;
        let b = self.index.get(b)?;
        Some(dot_product(&self.unit_vectors[*a], &self.unit_vectors[*b]) as f64)
    }

    /// Up to `topn` keys ranked by cosine similarity to `vector`, skipping `exclude`.
    pub fn most_similar_to_vector(
        &self,
        vector: &[f32],
        topn: usize,
        exclude: &[&str],
    ) -> Result<Vec<(String, f64)>> {
        if vector.len() != self.dimension {
            return Err(LexpandError::model(format!(
                "query vector has {} dimensions, expected {}",
                vector.len(),
                self.dimension
            )));
        }

        let query = normalized(vector);
        let mut scored: Vec<(usize, f64)> = self
            .unit_vectors
            .iter()
            .enumerate()
            .filter(|(idx, _)| !exclude.contains(&self.keys[*idx].as_str()))
            .map(|(idx, unit)| (idx, dot_product(unit, &query) as f64))
            .collect();

        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored.truncate(topn);

        Ok(scored
            .into_iter()
            .map(|(idx, score)| (self.keys[idx].clone(), score))
            .collect())
    }

    /// Up to `topn` keys most similar to the stored `key`, excluding `key` itself.
    pub fn most_similar(&self, key: &str, topn: usize) -> Result<Vec<(String, f64)>> {
        let vector = self
            .get(key)
            .ok_or_else(|| LexpandError::model(format!("key '{key}' not present")))?;
        self.most_similar_to_vector(vector, topn, &[key])
    }

    /// Read the word2vec text format: a `"<count> <dimension>"` header, then
    /// one `"<key> <v1> ... <vN>"` line per vector.
    pub fn load_word2vec_text<R: BufRead>(reader: R) -> Result<Self> {
        let mut lines = reader.lines().enumerate();

        let (count, dimension) = loop {
            let Some((line_idx, line)) = lines.next() else {
                return Err(LexpandError::parse("missing word2vec header"));
            };
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            break parse_header(&line, line_idx + 1)?;
        };

        let mut store = Self::new(dimension);
        let mut read = 0usize;
        for (line_idx, line) in lines {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let line_number = line_idx + 1;
            let mut parts = line.split_whitespace();
            let key = parts
                .next()
                .ok_or_else(|| LexpandError::parse(format!("line {line_number}: missing key")))?;
            let vector = parts
                .map(|value| {
                    value.parse::<f32>().map_err(|e| {
                        LexpandError::parse(format!(
                            "line {line_number}: invalid value '{value}': {e}"
                        ))
                    })
                })
                .collect::<Result<Vec<f32>>>()?;
            if vector.len() != dimension {
                return Err(LexpandError::parse(format!(
                    "line {line_number}: expected {dimension} values, found {}",
                    vector.len()
                )));
            }
            if vector.iter().any(|v| !v.is_finite()) {
                return Err(LexpandError::parse(format!(
                    "line {line_number}: non-finite value in vector for '{key}'"
                )));
            }
            store.add(key, vector)?;
            read += 1;
        }

        if read != count {
            return Err(LexpandError::parse(format!(
                "header declares {count} vectors, found {read}"
            )));
        }

        tracing::debug!(vectors = store.len(), dimension, "loaded word2vec vectors");
        Ok(store)
    }

    /// Read a word2vec text file.
    pub fn load_word2vec_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::load_word2vec_text(BufReader::new(file))
    }

    /// Write the store in the word2vec text format.
    pub fn write_word2vec_text<W: Write>(&self, mut writer: W) -> Result<()> {
        writeln!(writer, "{} {}", self.len(), self.dimension)?;
        for (key, vector) in self.keys.iter().zip(&self.vectors) {
            write!(writer, "{key}")?;
            for value in vector {
                write!(writer, " {value}")?;
            }
            writeln!(writer)?;
        }
        Ok(())
    }
}

fn parse_header(line: &str, line_number: usize) -> Result<(usize, usize)> {
    let invalid = || {
        LexpandError::parse(format!(
            "line {line_number}: expected '<count> <dimension>' header, found '{line}'"
        ))
    };
    let mut parts = line.split_whitespace();
    let count = parts.next().and_then(|s| s.parse().ok()).ok_or_else(invalid)?;
    let dimension = parts.next().and_then(|s| s.parse().ok()).ok_or_else(invalid)?;
    if parts.next().is_some() {
        return Err(invalid());
    }
    Ok((count, dimension))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animals() -> KeyedVectors {
        KeyedVectors::from_entries(
            2,
            [
                ("cat", vec![1.0, 0.0]),
                ("dog", vec![0.8, 0.6]),
                ("kitten", vec![0.9, 0.1]),
                ("car", vec![0.0, 1.0]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_most_similar_excludes_key() {
        let store = animals();
        let similar = store.most_similar("cat", 10).unwrap();

        let keys: Vec<&str> = similar.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["kitten", "dog", "car"]);
        assert!((similar[1].1 - 0.8).abs() < 1e-6);
        assert!(similar[2].1.abs() < 1e-6);
    }

    #[test]
    fn test_topn_and_ties_keep_insertion_order() {
        let store = KeyedVectors::from_entries(
            2,
            [
                ("b", vec![1.0, 0.0]),
                ("a", vec![2.0, 0.0]),
                ("c", vec![0.0, 1.0]),
            ],
        )
        .unwrap();

        let similar = store.most_similar_to_vector(&[1.0, 0.0], 2, &[]).unwrap();
        let keys: Vec<&str> = similar.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn test_dimension_mismatch() {
        let mut store = KeyedVectors::new(3);
        let err = store.add("cat", vec![1.0, 2.0]).unwrap_err();
        assert!(matches!(err, LexpandError::Model(_)));

        let store = animals();
        assert!(matches!(
            store.most_similar_to_vector(&[1.0, 0.0, 0.0], 1, &[]),
            Err(LexpandError::Model(_))
        ));
        assert!(matches!(
            store.most_similar("zebra", 1),
            Err(LexpandError::Model(_))
        ));
    }

    #[test]
    fn test_add_replaces_existing_key() {
        let mut store = animals();
        store.add("cat", vec![0.0, 2.0]).unwrap();
        assert_eq!(store.len(), 4);
        assert_eq!(store.get("cat"), Some(&[0.0, 2.0][..]));
        assert!((store.similarity("cat", "car").unwrap() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_load_word2vec_text() {
        let text = "3 2\ncat 1 0\n\ndog 0.8 0.6\ncar 0 1\n";
        let store = KeyedVectors::load_word2vec_text(text.as_bytes()).unwrap();

        assert_eq!(store.dimension(), 2);
        assert_eq!(store.keys(), &["cat", "dog", "car"]);
        assert_eq!(store.get("dog"), Some(&[0.8, 0.6][..]));
    }

    #[test]
    fn test_write_then_load() {
        let store = animals();
        let mut buffer = Vec::new();
        store.write_word2vec_text(&mut buffer).unwrap();

        let loaded = KeyedVectors::load_word2vec_text(buffer.as_slice()).unwrap();
        assert_eq!(loaded.keys(), store.keys());
        assert_eq!(loaded.get("kitten"), store.get("kitten"));
    }

    #[test]
    fn test_malformed_word2vec_text() {
        let err = KeyedVectors::load_word2vec_text("".as_bytes()).unwrap_err();
        assert!(matches!(err, LexpandError::Parse(_)));

        let err = KeyedVectors::load_word2vec_text("two 2\n".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("line 1"));

        let err = KeyedVectors::load_word2vec_text("2 2\ncat 1 0\ndog 1\n".as_bytes())
            .unwrap_err();
        assert!(matches!(err, LexpandError::Parse(_)));
        assert!(err.to_string().contains("line 3"));

        let err = KeyedVectors::load_word2vec_text("1 2\ncat 1 x\n".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("line 2"));

        let err = KeyedVectors::load_word2vec_text("3 2\ncat 1 0\n".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("declares 3"));
    }

    #[test]
    fn test_non_finite_vectors_are_rejected() {
        let text = "3 2\ncat 1 0\nkitten 0.9 0.1\nbroken nan nan\n";
        let err = KeyedVectors::load_word2vec_text(text.as_bytes()).unwrap_err();
        assert!(matches!(err, LexpandError::Parse(_)));
        assert!(err.to_string().contains("line 4"));

        let err = KeyedVectors::load_word2vec_text("1 2\ncat inf 0\n".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("line 2"));

        let mut store = animals();
        let err = store.add("broken", vec![f32::NAN, 0.0]).unwrap_err();
        assert!(matches!(err, LexpandError::Model(_)));
        assert!(!store.contains("broken"));
    }
}
