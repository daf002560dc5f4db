//! JSON file inputs.

use crate::error::CliError;
use ontext_domain::{CorpusDocument, CorpusSource, DatedRecord, RecordSource};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Corpus stored as a JSON array of documents.
#[derive(Debug, Clone)]
pub struct JsonCorpus {
    path: PathBuf,
}

impl JsonCorpus {
    /// Create a source for the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CorpusSource for JsonCorpus {
    type Error = CliError;

    fn documents(&self) -> Result<Vec<CorpusDocument>, Self::Error> {
        let documents: Vec<CorpusDocument> = read_json_array(&self.path)?;
        debug!(path = %self.path.display(), count = documents.len(), "Loaded corpus");
        Ok(documents)
    }
}

/// Dated records stored as a JSON array.
#[derive(Debug, Clone)]
pub struct JsonRecords {
    path: PathBuf,
}

impl JsonRecords {
    /// Create a source for the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for JsonRecords {
    type Error = CliError;

    fn records(&self) -> Result<Vec<DatedRecord>, Self::Error> {
        let records: Vec<DatedRecord> = read_json_array(&self.path)?;
        debug!(path = %self.path.display(), count = records.len(), "Loaded records");
        Ok(records)
    }
}

fn read_json_array<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, CliError> {
    let contents = fs::read_to_string(path).map_err(|e| CliError::Load {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    serde_json::from_str(&contents).map_err(|e| CliError::Load {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
