//! Common types for query expansion.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{LexpandError, Result};

/// Which similarity index proposes expansion candidates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpansionRep {
    /// Nearest words of each query term in the word-vector space.
    #[default]
    #[serde(rename = "w2v")]
    TermSimilarity,
    /// Document tags whose vectors are nearest to each query term's vector.
    #[serde(rename = "d2v")]
    DocVectorSimilarity,
}

impl ExpansionRep {
    /// The short name used in configuration and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpansionRep::TermSimilarity => "w2v",
            ExpansionRep::DocVectorSimilarity => "d2v",
        }
    }
}

impl FromStr for ExpansionRep {
    type Err = LexpandError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "w2v" => Ok(ExpansionRep::TermSimilarity),
            "d2v" => Ok(ExpansionRep::DocVectorSimilarity),
            other => Err(LexpandError::invalid_argument(format!(
                "unsupported expansion representation '{other}'; expected 'w2v' or 'd2v'"
            ))),
        }
    }
}

impl fmt::Display for ExpansionRep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Expansion terms with their mean similarity, best first.
///
/// Serializes as a JSON object whose keys keep the ranking order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpandedTerms {
    terms: Vec<(String, f64)>,
}

impl ExpandedTerms {
    /// Wrap terms that are already in ranking order.
    pub fn new(terms: Vec<(String, f64)>) -> Self {
        Self { terms }
    }

    /// The score of `term`, if it was selected.
    pub fn get(&self, term: &str) -> Option<f64> {
        self.terms
            .iter()
            .find(|(candidate, _)| candidate == term)
            .map(|(_, score)| *score)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.terms.iter().map(|(term, score)| (term.as_str(), *score))
    }

    /// Terms in ranking order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(|(term, _)| term.as_str())
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// The same scores keyed by term, without the ranking order.
    pub fn to_map(&self) -> BTreeMap<String, f64> {
        self.terms.iter().cloned().collect()
    }

    pub fn into_vec(self) -> Vec<(String, f64)> {
        self.terms
    }
}

impl Serialize for ExpandedTerms {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.terms.len()))?;
        for (term, score) in &self.terms {
            map.serialize_entry(term, score)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expansion_rep_parsing() {
        assert_eq!("w2v".parse::<ExpansionRep>().unwrap(), ExpansionRep::TermSimilarity);
        assert_eq!(
            "d2v".parse::<ExpansionRep>().unwrap(),
            ExpansionRep::DocVectorSimilarity
        );

        let err = "tfidf".parse::<ExpansionRep>().unwrap_err();
        assert!(matches!(err, LexpandError::InvalidArgument(_)));
        assert!(err.to_string().contains("tfidf"));
    }

    #[test]
    fn test_expansion_rep_serde() {
        let json = serde_json::to_string(&ExpansionRep::DocVectorSimilarity).unwrap();
        assert_eq!(json, "\"d2v\"");
        let rep: ExpansionRep = serde_json::from_str("\"w2v\"").unwrap();
        assert_eq!(rep, ExpansionRep::TermSimilarity);
    }

    #[test]
    fn test_expanded_terms_serialize_in_rank_order() {
        let terms = ExpandedTerms::new(vec![("zebra".to_string(), 0.9), ("apple".to_string(), 0.5)]);
        let json = serde_json::to_string(&terms).unwrap();
        assert_eq!(json, r#"{"zebra":0.9,"apple":0.5}"#);

        assert_eq!(terms.get("apple"), Some(0.5));
        assert_eq!(terms.get("pear"), None);
        assert_eq!(terms.to_map().keys().next().map(String::as_str), Some("apple"));
    }

    #[test]
    fn test_expanded_terms_into_vec_keeps_order() {
        let terms = ExpandedTerms::new(vec![("zebra".to_string(), 0.9), ("apple".to_string(), 0.5)]);
        assert_eq!(terms.len(), 2);
        assert_eq!(
            terms.into_vec(),
            vec![("zebra".to_string(), 0.9), ("apple".to_string(), 0.5)]
        );
    }
}
