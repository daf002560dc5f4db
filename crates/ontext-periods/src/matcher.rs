//! Reconciliation of dated records against analysis years

use crate::{MatchKind, MatcherConfig, PeriodError, PeriodMatch, ReconciledRecord};
use ontext_domain::{DatedRecord, Year, YearInterval};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Note emitted for records that match no target year
pub const NO_MATCH_NOTE: &str = "No matching analysis periods";

/// Assigns dated records to the target years their interval covers
///
/// Each record is matched independently: a year inside the record's interval
/// is a direct match; when none lies inside, the single closest year to the
/// interval's reference point is taken if it is within tolerance.
///
/// # Examples
///
/// ```
/// use ontext_domain::DatedRecord;
/// use ontext_periods::PeriodMatcher;
///
/// let matcher = PeriodMatcher::default_config();
/// let record = DatedRecord::new("a person who acts for another", Some(1940), Some(1980));
///
/// let result = matcher.match_record(&record, &[1957, 1976, 1995]);
/// assert_eq!(result.matched_years, vec![1957, 1976]);
/// ```
#[derive(Debug, Clone)]
pub struct PeriodMatcher {
    config: MatcherConfig,
}

impl PeriodMatcher {
    /// Create a new matcher with the given configuration
    pub fn new(config: MatcherConfig) -> Result<Self, PeriodError> {
        config.validate().map_err(PeriodError::Config)?;
        Ok(Self { config })
    }

    /// Create a matcher with default configuration
    pub fn default_config() -> Self {
        Self {
            config: MatcherConfig::default(),
        }
    }

    /// Active configuration
    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Match one record against the target years
    pub fn match_record(&self, record: &DatedRecord, targets: &[Year]) -> PeriodMatch {
        let interval = record.interval();
        let mut targets = targets.to_vec();
        targets.sort_unstable();
        targets.dedup();

        let reference = match interval.reference_year() {
            Some(reference) => reference,
            None => return build_match(&interval, Vec::new(), MatchKind::Undated),
        };
        if targets.is_empty() {
            return build_match(&interval, Vec::new(), MatchKind::NoTargets);
        }

        let direct: Vec<Year> = targets
            .iter()
            .copied()
            .filter(|year| interval.contains(*year))
            .collect();
        if !direct.is_empty() {
            return build_match(&interval, direct, MatchKind::Direct);
        }

        // Earlier year wins a tie
        let Some((nearest, distance)) = targets
            .iter()
            .map(|year| (*year, (f64::from(*year) - reference).abs()))
            .min_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)))
        else {
            return build_match(&interval, Vec::new(), MatchKind::NoTargets);
        };

        if distance <= f64::from(self.config.nearest_tolerance_years) {
            debug!(%interval, nearest, distance, "Nearest-year fallback accepted");
            build_match(&interval, vec![nearest], MatchKind::Nearest { distance })
        } else {
            debug!(%interval, nearest, distance, "Nearest year beyond tolerance");
            build_match(&interval, Vec::new(), MatchKind::OutOfRange { nearest, distance })
        }
    }

    /// Match every record, keyed by its position in the input
    pub fn match_records(
        &self,
        records: &[DatedRecord],
        targets: &[Year],
    ) -> BTreeMap<usize, PeriodMatch> {
        let matches: BTreeMap<usize, PeriodMatch> = records
            .iter()
            .enumerate()
            .map(|(index, record)| (index, self.match_record(record, targets)))
            .collect();

        info!(
            records = records.len(),
            matched = matches.values().filter(|m| m.is_matched()).count(),
            "Matched records against analysis periods"
        );
        matches
    }

    /// Short excerpt of a record
    ///
    /// A precomputed excerpt is returned verbatim; otherwise the definition
    /// is cut at `excerpt_max_chars` with "..." appended when truncated.
    pub fn excerpt_for(&self, record: &DatedRecord) -> String {
        if let Some(excerpt) = &record.excerpt {
            return excerpt.clone();
        }

        let limit = self.config.excerpt_max_chars;
        match record.definition.char_indices().nth(limit) {
            Some((cut, _)) => format!("{}...", &record.definition[..cut]),
            None => record.definition.clone(),
        }
    }

    /// Match every record and pair each with its excerpt
    pub fn reconcile(&self, records: &[DatedRecord], targets: &[Year]) -> Vec<ReconciledRecord> {
        self.match_records(records, targets)
            .into_iter()
            .map(|(index, period_match)| {
                let record = &records[index];
                ReconciledRecord {
                    index,
                    interval: record.interval().to_string(),
                    period_match,
                    excerpt: self.excerpt_for(record),
                }
            })
            .collect()
    }
}

/// Invert a match map: target year to the indices of records matched to it
pub fn records_by_year(matches: &BTreeMap<usize, PeriodMatch>) -> BTreeMap<Year, Vec<usize>> {
    let mut by_year: BTreeMap<Year, Vec<usize>> = BTreeMap::new();
    for (index, period_match) in matches {
        for year in &period_match.matched_years {
            by_year.entry(*year).or_default().push(*index);
        }
    }
    by_year
}

fn build_match(interval: &YearInterval, matched_years: Vec<Year>, kind: MatchKind) -> PeriodMatch {
    let relevance_note = relevance_note(interval, &matched_years);
    PeriodMatch {
        matched_years,
        kind,
        relevance_note,
    }
}

fn relevance_note(interval: &YearInterval, years: &[Year]) -> String {
    if years.is_empty() {
        return NO_MATCH_NOTE.to_string();
    }
    let years: Vec<String> = years.iter().map(|year| year.to_string()).collect();
    format!("Definition period ({}) relevant to: {}", interval, years.join(", "))
}
