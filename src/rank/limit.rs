//! Result-count limits.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LexpandError, Result};

/// How many ranked items to keep.
///
/// Signed counts are accepted at the boundaries through
/// [`Limit::from_signed`] and [`FromStr`]: any negative count means "all
/// items", never "all but the last few".
///
/// ```
/// use lexpand::rank::Limit;
///
/// assert_eq!(Limit::from_signed(-1), Limit::All);
/// assert_eq!("3".parse::<Limit>().unwrap(), Limit::Top(3));
/// assert_eq!("all".parse::<Limit>().unwrap(), Limit::All);
///
/// let mut items = vec![1, 2, 3];
/// Limit::Top(2).apply(&mut items);
/// assert_eq!(items, vec![1, 2]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Limit {
    /// Keep every item.
    All,
    /// Keep at most this many items.
    Top(usize),
}

impl Limit {
    /// Map a signed count: negative keeps everything, otherwise keep `n`.
    pub fn from_signed(n: i64) -> Self {
        usize::try_from(n).map_or(Limit::All, Limit::Top)
    }

    /// Truncate `items` in place.
    pub fn apply<T>(self, items: &mut Vec<T>) {
        if let Limit::Top(n) = self {
            items.truncate(n);
        }
    }

    /// The number of items kept out of `available`.
    pub fn resolve(self, available: usize) -> usize {
        match self {
            Limit::All => available,
            Limit::Top(n) => n.min(available),
        }
    }
}

impl From<usize> for Limit {
    fn from(n: usize) -> Self {
        Limit::Top(n)
    }
}

impl FromStr for Limit {
    type Err = LexpandError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(Limit::All);
        }
        s.parse::<i64>().map(Limit::from_signed).map_err(|_| {
            LexpandError::invalid_argument(format!(
                "invalid limit '{s}'; expected an integer or 'all'"
            ))
        })
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Limit::All => write!(f, "all"),
            Limit::Top(n) => write!(f, "{n}"),
        }
    }
}
