//! Document ranking by a precomputed relevance score.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::document::table::DocumentTable;
use crate::error::Result;
use crate::rank::limit::Limit;

/// A selected table row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedDocument {
    /// Row index in the source table.
    pub row: usize,
    /// The row's document text.
    pub text: String,
    /// The row's score; `None` when the cell was null or missing.
    pub score: Option<f64>,
}

/// Descending by score, missing scores last.
fn by_score_desc(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// The `m` rows of `table` with the highest `score_col`, best first.
///
/// Rows with equal scores keep their table order; rows without a score come
/// after every scored row. Both columns must exist in the table schema.
///
/// ```
/// use lexpand::document::table::DocumentTable;
/// use lexpand::rank::{Limit, top_doc};
///
/// let table = DocumentTable::from_scored("text", "score", [
///     ("low", 0.1),
///     ("high", 0.9),
///     ("mid", 0.5),
/// ]);
///
/// let top = top_doc(&table, "text", "score", Limit::Top(2)).unwrap();
/// let texts: Vec<&str> = top.iter().map(|d| d.text.as_str()).collect();
/// assert_eq!(texts, vec!["high", "mid"]);
/// ```
pub fn top_doc(
    table: &DocumentTable,
    doc_col: &str,
    score_col: &str,
    m: Limit,
) -> Result<Vec<RankedDocument>> {
    table.require_column(score_col)?;
    table.require_column(doc_col)?;

    let mut scored: Vec<(usize, Option<f64>)> = (0..table.len())
        .map(|row| -> Result<(usize, Option<f64>)> {
            Ok((row, table.score(row, score_col)?))
        })
        .collect::<Result<_>>()?;

    scored.sort_by(|a, b| by_score_desc(a.1, b.1));
    m.apply(&mut scored);

    let ranked = scored
        .into_iter()
        .map(|(row, score)| -> Result<RankedDocument> {
            Ok(RankedDocument {
                row,
                text: table.text(row, doc_col)?.to_string(),
                score,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(
        rows = table.len(),
        selected = ranked.len(),
        score_col,
        "ranked documents"
    );

    Ok(ranked)
}
