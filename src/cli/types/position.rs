//! Positions reported in positional summaries.

use std::fmt;

/// The positions a league drafts starters for and that the positional
/// summary reports on.
///
/// Grouping of raw rows always uses the verbatim position string from the
/// input; this enum only scopes reporting and charting to QB, RB, and WR.
/// Other positions are aggregated but left out of the final figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    QB,
    RB,
    WR,
}

impl Position {
    /// Reporting order for summaries and chart x-axes.
    pub const REPORTED: [Position; 3] = [Position::QB, Position::RB, Position::WR];

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
        }
    }

    /// Whether a verbatim position string from the input names this position.
    pub fn matches(&self, raw: &str) -> bool {
        raw == self.as_str()
    }
}

/// The QB special case in scoring is case-insensitive even though grouping
/// keys are verbatim.
pub fn is_quarterback(raw_position: &str) -> bool {
    raw_position.eq_ignore_ascii_case("QB")
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
