//! Match results

use ontext_domain::Year;
use serde::{Deserialize, Serialize};

/// How a record was matched to the target years
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchKind {
    /// One or more target years lie inside the record's interval
    Direct,
    /// No year inside the interval; the closest one within tolerance was taken
    Nearest {
        /// Distance between the chosen year and the reference point
        distance: f64,
    },
    /// No year inside the interval and the closest one is beyond tolerance
    OutOfRange {
        /// The closest target year
        nearest: Year,
        /// Its distance from the reference point
        distance: f64,
    },
    /// The record has neither a first nor a last year
    Undated,
    /// No target years were supplied
    NoTargets,
}

/// Target years assigned to one record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodMatch {
    /// Matched years, ascending
    pub matched_years: Vec<Year>,
    /// How the match was made
    pub kind: MatchKind,
    /// One-line human-readable summary
    pub relevance_note: String,
}

impl PeriodMatch {
    /// True when at least one year matched
    pub fn is_matched(&self) -> bool {
        !self.matched_years.is_empty()
    }
}

/// A record together with its match and excerpt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconciledRecord {
    /// Position of the record in the input
    pub index: usize,
    /// Interval description, e.g. "1940-1980" or "undated"
    pub interval: String,
    /// Match result
    #[serde(rename = "match")]
    pub period_match: PeriodMatch,
    /// Short excerpt of the definition
    pub excerpt: String,
}
