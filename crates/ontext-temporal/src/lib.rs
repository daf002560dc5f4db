//! OntExtract Temporal Analysis
//!
//! Tracks how a term's usage and meaning shift across a timeline of years.
//!
//! # Overview
//!
//! Given a corpus of documents with best-effort years, a term and a list of
//! periods, the crate computes per-period snapshots (frequency, usage
//! contexts, co-occurring vocabulary, a best-guess definition) and measures
//! semantic drift between adjacent periods by comparing their co-occurring
//! vocabularies.
//!
//! # Architecture
//!
//! ```text
//! documents + term + periods → TemporalExtractor → snapshots
//!                                                     ↓
//!                                               DriftAnalyzer → drift + narrative
//! ```
//!
//! # Key Features
//!
//! - **Windowed periods**: documents count towards every period within
//!   `year_window` years of their own year
//! - **Year resolution**: explicit year, then metadata, then a content scan
//! - **Jaccard drift**: `1 - |A ∩ B| / |A ∪ B|` over the top semantic-field terms
//! - **Deterministic narratives**: template assembly, no randomness
//! - **Caller-owned caching**: [`AnalysisCache`], never global state
//!
//! # Example Usage
//!
//! ```
//! use ontext_domain::CorpusDocument;
//! use ontext_temporal::DriftAnalyzer;
//!
//! let documents = vec![
//!     CorpusDocument::new("The agent performs tasks.").with_year(2000),
//!     CorpusDocument::new("An agent is an autonomous entity that acts.").with_year(2010),
//! ];
//!
//! let analyzer = DriftAnalyzer::default_config();
//! let report = analyzer.report(&documents, "agent", &[2000, 2010]).unwrap();
//!
//! assert_eq!(report.drift.timeline, vec![2000, 2010]);
//! assert!(report.drift.periods["2000-2010"].drift_score > 0.0);
//! println!("{}", report.narrative);
//! ```

#![warn(missing_docs)]

mod cache;
mod config;
mod contexts;
mod definitions;
mod drift;
mod error;
mod extractor;
mod narrative;
mod text;
mod types;
mod year;

#[cfg(test)]
mod tests;

pub use cache::{corpus_fingerprint, AnalysisCache, CacheKey};
pub use config::TemporalConfig;
pub use drift::{jaccard, DriftAnalyzer};
pub use error::TemporalError;
pub use extractor::TemporalExtractor;
pub use narrative::narrate;
pub use types::{
    DefinitionCandidate, DefinitionPattern, DriftRecord, DriftResult, EvolutionStatus,
    PeriodSnapshot, SnapshotMap, TemporalReport,
};
pub use year::{resolve_year, ResolvedYear, YearSource, YEAR_METADATA_KEYS};
