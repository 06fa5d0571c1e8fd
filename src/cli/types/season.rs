//! Season identifier type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A season identifier, kept as the verbatim text from the stats file.
///
/// Seasons are matched by exact string comparison against the `season`
/// column, so `"2020"` and `"2020.0"` are different seasons. Callers must
/// pass the identifier in the same textual form the source data uses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Season(pub String);

impl Season {
    pub fn new(season: impl Into<String>) -> Self {
        Self(season.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}
