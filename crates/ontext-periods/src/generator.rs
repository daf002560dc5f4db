//! Analysis period generation

use crate::PeriodError;
use ontext_domain::{DatedRecord, Year};
use std::collections::BTreeSet;
use tracing::debug;

/// Evenly spaced years from `start` to `end`, inclusive
///
/// The last element is always `end`, even when the step does not divide the
/// range evenly.
///
/// # Examples
///
/// ```
/// use ontext_periods::generate_periods;
///
/// assert_eq!(generate_periods(1990, 2010, 10).unwrap(), vec![1990, 2000, 2010]);
/// assert_eq!(generate_periods(1990, 2005, 10).unwrap(), vec![1990, 2000, 2005]);
/// ```
pub fn generate_periods(start: Year, end: Year, step: u32) -> Result<Vec<Year>, PeriodError> {
    if step == 0 {
        return Err(PeriodError::InvalidRange("step must be greater than 0".to_string()));
    }
    if start > end {
        return Err(PeriodError::InvalidRange(format!(
            "start {} is after end {}",
            start, end
        )));
    }

    let step = i64::from(step);
    let mut periods = Vec::new();
    let mut year = i64::from(start);
    while year < i64::from(end) {
        // Bounded by end, which fits in Year
        periods.push(year as Year);
        year += step;
    }
    periods.push(end);
    Ok(periods)
}

/// Derive analysis periods from the citation years of dated records
///
/// Collects every distinct first and last year in ascending order. When more
/// than `max_periods` years exist, an evenly spaced sample is returned that
/// always keeps the earliest and latest year.
pub fn periods_from_records(records: &[DatedRecord], max_periods: usize) -> Vec<Year> {
    let years: Vec<Year> = records
        .iter()
        .flat_map(|record| [record.first_year, record.last_year])
        .flatten()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    if max_periods == 0 {
        return Vec::new();
    }
    if years.len() <= max_periods {
        return years;
    }
    if max_periods == 1 {
        return vec![years[0]];
    }

    let last = years.len() - 1;
    let sampled: Vec<Year> = (0..max_periods)
        .map(|i| years[i * last / (max_periods - 1)])
        .collect();

    debug!(
        available = years.len(),
        sampled = sampled.len(),
        "Sampled periods from record years"
    );
    sampled
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_even_range() {
        assert_eq!(
            generate_periods(1950, 2000, 25).unwrap(),
            vec![1950, 1975, 2000]
        );
    }

    #[test]
    fn test_generate_single_year() {
        assert_eq!(generate_periods(2000, 2000, 5).unwrap(), vec![2000]);
    }

    #[test]
    fn test_generate_rejects_bad_ranges() {
        assert!(matches!(
            generate_periods(2000, 2010, 0),
            Err(PeriodError::InvalidRange(_))
        ));
        assert!(matches!(
            generate_periods(2010, 2000, 5),
            Err(PeriodError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_periods_from_records_collects_bounds() {
        let records = vec![
            DatedRecord::new("a", Some(1940), Some(1980)),
            DatedRecord::new("b", Some(2010), None),
            DatedRecord::new("c", None, None),
            DatedRecord::new("d", Some(1940), Some(1960)),
        ];
        assert_eq!(
            periods_from_records(&records, 10),
            vec![1940, 1960, 1980, 2010]
        );
    }

    #[test]
    fn test_periods_from_records_samples_evenly() {
        let records: Vec<DatedRecord> = (0..10)
            .map(|i| DatedRecord::new("sense", Some(1900 + i * 10), None))
            .collect();
        let periods = periods_from_records(&records, 4);

        assert_eq!(periods, vec![1900, 1930, 1960, 1990]);
    }

    #[test]
    fn test_periods_from_records_edge_limits() {
        let records = vec![
            DatedRecord::new("a", Some(1940), Some(1980)),
            DatedRecord::new("b", Some(2010), None),
        ];
        assert!(periods_from_records(&records, 0).is_empty());
        assert_eq!(periods_from_records(&records, 1), vec![1940]);
        assert!(periods_from_records(&[], 5).is_empty());
    }
}
