//! OntExtract Period Matching
//!
//! Reconciles externally sourced dated records, such as dictionary senses with
//! first and last citation years, against a list of analysis years.
//!
//! The matcher provides:
//! - Direct matching of target years inside a record's interval
//! - Nearest-year fallback within a configurable tolerance
//! - Relevance notes and excerpts for presentation
//! - Period generation from ranges or from record citation years
//!
//! # Examples
//!
//! ```
//! use ontext_domain::DatedRecord;
//! use ontext_periods::{records_by_year, PeriodMatcher};
//!
//! let records = vec![
//!     DatedRecord::new("a person who acts for another", Some(1940), Some(1980)),
//!     DatedRecord::new("a software program", Some(2010), None),
//! ];
//!
//! let matcher = PeriodMatcher::default_config();
//! let matches = matcher.match_records(&records, &[1957, 1976, 1995, 2018]);
//!
//! assert_eq!(matches[&0].matched_years, vec![1957, 1976]);
//! assert_eq!(matches[&1].matched_years, vec![2018]);
//! assert_eq!(records_by_year(&matches)[&2018], vec![1]);
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod generator;
mod matcher;
mod types;

pub use config::MatcherConfig;
pub use error::PeriodError;
pub use generator::{generate_periods, periods_from_records};
pub use matcher::{records_by_year, PeriodMatcher, NO_MATCH_NOTE};
pub use types::{MatchKind, PeriodMatch, ReconciledRecord};
