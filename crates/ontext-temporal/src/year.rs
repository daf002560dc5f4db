//! Best-effort year resolution for corpus documents

use crate::text::truncate_chars;
use once_cell::sync::Lazy;
use ontext_domain::{CorpusDocument, MetadataValue, Year};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Plausible publication years: 1500-2099
static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(1[5-9]\d{2}|20\d{2})\b").unwrap());

/// Metadata keys consulted, in order, when a document has no explicit year
pub const YEAR_METADATA_KEYS: &[&str] = &[
    "year",
    "publication_year",
    "publication_date",
    "date",
    "created_at",
];

/// Where a resolved year came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", content = "key", rename_all = "snake_case")]
pub enum YearSource {
    /// The document's `year` field
    Explicit,
    /// A metadata entry
    Metadata(String),
    /// A scan of the opening content
    Content,
}

/// A year together with its provenance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedYear {
    /// The year
    pub year: Year,
    /// How it was found
    pub source: YearSource,
}

/// Resolve the year of a document
///
/// Tries the explicit field, then [`YEAR_METADATA_KEYS`], then the most
/// frequent year-like token in the first `scan_chars` characters. Returns
/// `None` when nothing resolves; such documents belong to no period.
pub fn resolve_year(document: &CorpusDocument, scan_chars: usize) -> Option<ResolvedYear> {
    if let Some(year) = document.year {
        return Some(ResolvedYear {
            year,
            source: YearSource::Explicit,
        });
    }

    for key in YEAR_METADATA_KEYS {
        if let Some(year) = document.metadata.get(*key).and_then(year_from_metadata) {
            return Some(ResolvedYear {
                year,
                source: YearSource::Metadata((*key).to_string()),
            });
        }
    }

    year_from_content(&document.text, scan_chars).map(|year| ResolvedYear {
        year,
        source: YearSource::Content,
    })
}

fn year_from_metadata(value: &MetadataValue) -> Option<Year> {
    match value {
        MetadataValue::Integer(n) => Year::try_from(*n).ok(),
        // Only whole numbers in range, e.g. `2010.0`
        MetadataValue::Float(n) => {
            let in_range = n.is_finite()
                && n.fract() == 0.0
                && *n >= f64::from(Year::MIN)
                && *n <= f64::from(Year::MAX);
            in_range.then(|| *n as Year)
        }
        MetadataValue::Other(_) => None,
        MetadataValue::Text(s) => {
            let trimmed = s.trim();
            trimmed
                .parse::<Year>()
                .ok()
                .or_else(|| first_year_token(trimmed))
        }
    }
}

fn first_year_token(text: &str) -> Option<Year> {
    YEAR_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Most frequent year token in the opening of the text; ties go to the
/// earliest occurrence
fn year_from_content(text: &str, scan_chars: usize) -> Option<Year> {
    let (head, _) = truncate_chars(text, scan_chars);

    let mut counts: HashMap<Year, (usize, usize)> = HashMap::new();
    for (position, caps) in YEAR_RE.captures_iter(&head).enumerate() {
        let Some(year) = caps.get(1).and_then(|m| m.as_str().parse::<Year>().ok()) else {
            continue;
        };
        let entry = counts.entry(year).or_insert((0, position));
        entry.0 += 1;
    }

    counts
        .into_iter()
        .max_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
            count_a.cmp(count_b).then(first_b.cmp(first_a))
        })
        .map(|(year, _)| year)
}
