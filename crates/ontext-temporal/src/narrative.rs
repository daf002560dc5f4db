//! Template-based evolution narratives
//!
//! Output is a pure function of the snapshots: same input, same bytes.

use crate::types::{PeriodSnapshot, SnapshotMap};
use ontext_domain::Year;
use std::collections::BTreeSet;

const MAX_NEW_ASSOCIATIONS: usize = 3;

/// Assemble a narrative of how `term` evolves over `periods`
///
/// Periods are reported in ascending order; periods missing from
/// `snapshots` are ignored. Reports frequency changes, status transitions and
/// up to three new associations per period, then the total occurrence count
/// and the peak period (earliest year on ties).
pub fn narrate(snapshots: &SnapshotMap, term: &str, periods: &[Year]) -> String {
    let ordered: BTreeSet<Year> = periods.iter().copied().collect();
    let timeline: Vec<&PeriodSnapshot> = ordered.iter().filter_map(|p| snapshots.get(p)).collect();

    let (Some(first), Some(last)) = (timeline.first(), timeline.last()) else {
        return format!("No temporal data available for '{}'.", term);
    };

    let mut lines = Vec::new();
    if timeline.len() == 1 {
        lines.push(format!("Temporal analysis of '{}' in {}.", term, first.period));
    } else {
        lines.push(format!(
            "Temporal analysis of '{}' across {} periods ({}-{}).",
            term,
            timeline.len(),
            first.period,
            last.period
        ));
    }

    lines.push(format!(
        "In {}, '{}' appears {} ({}).",
        first.period,
        term,
        occurrences(first.frequency),
        first.evolution_status
    ));
    if let Some(line) = associations_line(first, None) {
        lines.push(line);
    }

    for pair in timeline.windows(2) {
        let (prev, cur) = (pair[0], pair[1]);

        let change = if cur.frequency > prev.frequency {
            format!("usage increased from {} to {}", prev.frequency, occurrences(cur.frequency))
        } else if cur.frequency < prev.frequency {
            format!("usage decreased from {} to {}", prev.frequency, occurrences(cur.frequency))
        } else {
            format!("usage remained stable at {}", occurrences(cur.frequency))
        };
        lines.push(format!("From {} to {}, {}.", prev.period, cur.period, change));

        if prev.evolution_status != cur.evolution_status {
            lines.push(format!(
                "Status shifted from {} to {}.",
                prev.evolution_status, cur.evolution_status
            ));
        }
        if let Some(line) = associations_line(cur, Some(prev)) {
            lines.push(line);
        }
    }

    let total: usize = timeline.iter().map(|s| s.frequency).sum();
    if total == 0 {
        lines.push(format!("'{}' does not occur in any analyzed period.", term));
    } else {
        // Earliest period wins ties because the timeline is ascending
        let peak = timeline
            .iter()
            .copied()
            .fold(*first, |best, s| if s.frequency > best.frequency { s } else { best });
        lines.push(format!(
            "Total: {} across all periods; usage peaked in {} with {}.",
            occurrences(total),
            peak.period,
            occurrences(peak.frequency)
        ));
    }

    lines.join("\n")
}

fn associations_line(
    current: &PeriodSnapshot,
    previous: Option<&PeriodSnapshot>,
) -> Option<String> {
    let fresh: Vec<&str> = current
        .semantic_field
        .iter()
        .filter(|w| previous.map_or(true, |p| !p.semantic_field.contains(*w)))
        .take(MAX_NEW_ASSOCIATIONS)
        .map(String::as_str)
        .collect();

    if fresh.is_empty() {
        None
    } else {
        Some(format!("New associations in {}: {}.", current.period, fresh.join(", ")))
    }
}

fn occurrences(n: usize) -> String {
    if n == 1 {
        "1 occurrence".to_string()
    } else {
        format!("{} occurrences", n)
    }
}
