//! Result types for temporal analysis

use crate::config::TemporalConfig;
use ontext_domain::Year;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Snapshots keyed by period, ascending
pub type SnapshotMap = BTreeMap<Year, PeriodSnapshot>;

/// How established a term's usage is within one period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvolutionStatus {
    /// No occurrences
    Absent,
    /// A handful of occurrences
    Emerging,
    /// Regular but moderate usage
    Developing,
    /// Frequent usage with many competing definitions
    Evolving,
    /// Frequent usage with a settled definition
    Established,
}

impl EvolutionStatus {
    /// Classify a period from its frequency and definition variety
    pub fn classify(frequency: usize, definition_variants: usize, config: &TemporalConfig) -> Self {
        if frequency == 0 {
            EvolutionStatus::Absent
        } else if frequency <= config.emerging_max_frequency {
            EvolutionStatus::Emerging
        } else if frequency <= config.developing_max_frequency {
            EvolutionStatus::Developing
        } else if definition_variants >= config.evolving_min_definitions {
            EvolutionStatus::Evolving
        } else {
            EvolutionStatus::Established
        }
    }

    /// Lowercase label
    pub fn as_str(&self) -> &'static str {
        match self {
            EvolutionStatus::Absent => "absent",
            EvolutionStatus::Emerging => "emerging",
            EvolutionStatus::Developing => "developing",
            EvolutionStatus::Evolving => "evolving",
            EvolutionStatus::Established => "established",
        }
    }
}

impl fmt::Display for EvolutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which heuristic produced a definition candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefinitionPattern {
    /// "<term> is defined as ..."
    DefinedAs,
    /// "<term> means ..."
    Means,
    /// "<term> refers to ..."
    RefersTo,
    /// "<term>: ..."
    Colon,
    /// "define <term> as ..."
    Define,
    /// "<term> (...)"
    Parenthetical,
    /// A sentence with the term and a definitional cue word
    CueSentence,
}

/// A candidate definition found in a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefinitionCandidate {
    /// Definition text, truncated to the configured length
    pub text: String,
    /// Display name of the source document
    pub source: String,
    /// Heuristic that matched
    pub pattern: DefinitionPattern,
}

/// Analysis of one term in one period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodSnapshot {
    /// The requested year
    pub period: Year,

    /// Case-insensitive substring occurrences across the period's documents
    pub frequency: usize,

    /// Documents whose year falls inside the period window
    pub document_count: usize,

    /// Representative usage contexts
    pub contexts: Vec<String>,

    /// Co-occurring terms, most frequent first
    pub semantic_field: Vec<String>,

    /// Categorical usage label
    pub evolution_status: EvolutionStatus,

    /// Best definition found, or a placeholder
    pub definition: String,

    /// Document the definition came from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition_source: Option<String>,

    /// Distinct definition candidates after deduplication
    pub definition_variants: usize,
}

impl PeriodSnapshot {
    /// Snapshot for a period with no matching documents
    pub fn absent(period: Year, term: &str) -> Self {
        Self {
            period,
            frequency: 0,
            document_count: 0,
            contexts: Vec::new(),
            semantic_field: Vec::new(),
            evolution_status: EvolutionStatus::Absent,
            definition: format!("No data available for '{}' in {}", term, period),
            definition_source: None,
            definition_variants: 0,
        }
    }

    /// True when at least one document fell inside the period window
    pub fn has_data(&self) -> bool {
        self.document_count > 0
    }

    /// The top `size` semantic-field terms as a set
    pub fn drift_field(&self, size: usize) -> BTreeSet<String> {
        self.semantic_field.iter().take(size).cloned().collect()
    }
}

/// Drift between two adjacent periods
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriftRecord {
    /// Earlier period
    pub from_period: Year,
    /// Later period
    pub to_period: Year,
    /// Jaccard similarity of the two drift fields
    pub similarity: f64,
    /// 1 - similarity
    pub drift_score: f64,
    /// Terms present only in the later period
    pub new_terms: BTreeSet<String>,
    /// Terms present only in the earlier period
    pub lost_terms: BTreeSet<String>,
    /// Terms present in both periods
    pub stable_terms: BTreeSet<String>,
}

impl DriftRecord {
    /// Key used in [`DriftResult::periods`]
    pub fn key(&self) -> String {
        format!("{}-{}", self.from_period, self.to_period)
    }
}

/// Drift across the whole timeline
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DriftResult {
    /// Pairwise records keyed by `"{from}-{to}"`
    pub periods: BTreeMap<String, DriftRecord>,
    /// Mean of the pairwise drift scores
    pub average_drift: f64,
    /// Sum of the pairwise drift scores
    pub total_drift: f64,
    /// Terms present in the drift field of every period with data
    pub stable_terms: BTreeSet<String>,
    /// Periods with data, ascending
    pub timeline: Vec<Year>,
}

/// Snapshots, drift and narrative for one term
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemporalReport {
    /// The analysed term
    pub term: String,
    /// Per-period snapshots
    pub snapshots: SnapshotMap,
    /// Drift across periods with data
    pub drift: DriftResult,
    /// Human-readable evolution narrative
    pub narrative: String,
}
