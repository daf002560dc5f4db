//! Dated records supplied by dictionary integrations

use crate::interval::YearInterval;
use crate::Year;
use serde::{Deserialize, Serialize};

/// An externally sourced item with an optional citation interval
///
/// Typically one sense of a dictionary entry: its definition text, the first
/// and last years it is cited, and an optional precomputed excerpt.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DatedRecord {
    /// First cited year
    #[serde(default)]
    pub first_year: Option<Year>,

    /// Last cited year (`None` = still current)
    #[serde(default)]
    pub last_year: Option<Year>,

    /// Definition or sense text
    #[serde(default)]
    pub definition: String,

    /// Precomputed excerpt, returned verbatim when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,

    /// Dictionary status, e.g. "current" or "obsolete"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Identifier of the sense in the external source
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sense_id: Option<String>,
}

impl DatedRecord {
    /// Create a record from a definition and its citation bounds
    pub fn new(
        definition: impl Into<String>,
        first_year: Option<Year>,
        last_year: Option<Year>,
    ) -> Self {
        Self {
            first_year,
            last_year,
            definition: definition.into(),
            ..Default::default()
        }
    }

    /// Attach a precomputed excerpt
    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }

    /// Attach a sense identifier
    pub fn with_sense_id(mut self, sense_id: impl Into<String>) -> Self {
        self.sense_id = Some(sense_id.into());
        self
    }

    /// The citation interval of this record
    pub fn interval(&self) -> YearInterval {
        YearInterval::new(self.first_year, self.last_year)
    }
}
