//! OntExtract Domain Layer
//!
//! Plain data shared by the temporal analysis core and its callers. Nothing in
//! this crate performs I/O or text analysis; it only describes the shapes that
//! cross the boundary between the core and the application around it.
//!
//! ## Key Concepts
//!
//! - **Corpus document**: a text body with a best-effort year and optional
//!   metadata, supplied by the caller and never persisted by the core
//! - **Dated record**: an externally sourced item (typically a dictionary
//!   sense) with an optional first/last citation year
//! - **Year interval**: the open or closed `[first, last]` span of a record
//! - **Sources**: trait seams through which callers hand documents and
//!   records to the core
//!
//! ## Architecture
//!
//! - Only `serde` and `serde_json` as dependencies, so results serialize to
//!   JSON untouched
//! - Analysis lives in `ontext-temporal` and `ontext-periods`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod document;
pub mod interval;
pub mod record;
pub mod traits;

/// A calendar year. Negative values are allowed but never produced by the
/// year heuristics.
pub type Year = i32;

// Re-exports for convenience
pub use document::{CorpusDocument, MetadataValue};
pub use interval::YearInterval;
pub use record::DatedRecord;
pub use traits::{CorpusSource, RecordSource};
