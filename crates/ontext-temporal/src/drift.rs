//! Semantic drift between periods

use crate::config::TemporalConfig;
use crate::error::TemporalError;
use crate::extractor::TemporalExtractor;
use crate::narrative::narrate;
use crate::types::{DriftRecord, DriftResult, SnapshotMap, TemporalReport};
use ontext_domain::{CorpusDocument, Year};
use std::collections::BTreeSet;
use tracing::info;

/// Jaccard similarity of two sets; 0 when both are empty
pub fn jaccard(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(b).count() as f64 / union as f64
}

/// Measures how a term's semantic field changes across periods
///
/// Only periods with at least one document take part. They are compared in
/// ascending year order regardless of the order they were requested in.
#[derive(Debug, Clone)]
pub struct DriftAnalyzer {
    extractor: TemporalExtractor,
}

impl DriftAnalyzer {
    /// Create a new analyzer, validating the configuration
    pub fn new(config: TemporalConfig) -> Result<Self, TemporalError> {
        Ok(Self {
            extractor: TemporalExtractor::new(config)?,
        })
    }

    /// Create an analyzer with default configuration
    pub fn default_config() -> Self {
        Self::with_extractor(TemporalExtractor::default_config())
    }

    /// Wrap an existing extractor
    pub fn with_extractor(extractor: TemporalExtractor) -> Self {
        Self { extractor }
    }

    /// The extractor used to build snapshots
    pub fn extractor(&self) -> &TemporalExtractor {
        &self.extractor
    }

    /// Extract snapshots for `periods` and compute drift between them
    ///
    /// # Errors
    ///
    /// [`TemporalError::InvalidArgument`] if `term` is empty or whitespace.
    pub fn analyze_drift(
        &self,
        documents: &[CorpusDocument],
        term: &str,
        periods: &[Year],
    ) -> Result<DriftResult, TemporalError> {
        let snapshots = self.extractor.extract(documents, term, periods)?;
        Ok(self.analyze_snapshots(&snapshots))
    }

    /// Compute drift from precomputed snapshots
    pub fn analyze_snapshots(&self, snapshots: &SnapshotMap) -> DriftResult {
        let size = self.extractor.config().drift_field_size;
        let fields: Vec<(Year, BTreeSet<String>)> = snapshots
            .values()
            .filter(|s| s.has_data())
            .map(|s| (s.period, s.drift_field(size)))
            .collect();

        let mut result = DriftResult {
            timeline: fields.iter().map(|(year, _)| *year).collect(),
            ..Default::default()
        };

        let Some((_, first)) = fields.first() else {
            return result;
        };

        let mut stable = first.clone();
        for pair in fields.windows(2) {
            let (from_period, earlier) = &pair[0];
            let (to_period, later) = &pair[1];

            stable = stable.intersection(later).cloned().collect();

            let similarity = jaccard(earlier, later);
            let record = DriftRecord {
                from_period: *from_period,
                to_period: *to_period,
                similarity,
                drift_score: 1.0 - similarity,
                new_terms: later.difference(earlier).cloned().collect(),
                lost_terms: earlier.difference(later).cloned().collect(),
                stable_terms: earlier.intersection(later).cloned().collect(),
            };
            result.periods.insert(record.key(), record);
        }

        result.total_drift = result.periods.values().map(|r| r.drift_score).sum();
        if !result.periods.is_empty() {
            result.average_drift = result.total_drift / result.periods.len() as f64;
        }
        result.stable_terms = stable;

        info!(
            "Drift across {} periods: average {:.3}, {} stable terms",
            result.timeline.len(),
            result.average_drift,
            result.stable_terms.len()
        );

        result
    }

    /// Deterministic evolution narrative for `term` over `periods`
    pub fn narrate(&self, snapshots: &SnapshotMap, term: &str, periods: &[Year]) -> String {
        narrate(snapshots, term, periods)
    }

    /// Snapshots, drift and narrative in one pass
    pub fn report(
        &self,
        documents: &[CorpusDocument],
        term: &str,
        periods: &[Year],
    ) -> Result<TemporalReport, TemporalError> {
        let snapshots = self.extractor.extract(documents, term, periods)?;
        let drift = self.analyze_snapshots(&snapshots);
        let narrative = narrate(&snapshots, term.trim(), periods);

        Ok(TemporalReport {
            term: term.trim().to_string(),
            snapshots,
            drift,
            narrative,
        })
    }
}
