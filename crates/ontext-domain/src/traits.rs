//! Supplier interfaces
//!
//! The core does not fetch documents or dictionary data. Callers adapt their
//! storage (database rows, API responses, files) to these traits.

use crate::{CorpusDocument, DatedRecord};
use std::convert::Infallible;

/// Supplies the documents of a corpus
pub trait CorpusSource {
    /// Error type for loading documents
    type Error;

    /// Load every document of the corpus
    fn documents(&self) -> Result<Vec<CorpusDocument>, Self::Error>;
}

/// Supplies dated records (e.g. dictionary senses)
pub trait RecordSource {
    /// Error type for loading records
    type Error;

    /// Load every record
    fn records(&self) -> Result<Vec<DatedRecord>, Self::Error>;
}

impl CorpusSource for Vec<CorpusDocument> {
    type Error = Infallible;

    fn documents(&self) -> Result<Vec<CorpusDocument>, Self::Error> {
        Ok(self.clone())
    }
}

impl RecordSource for Vec<DatedRecord> {
    type Error = Infallible;

    fn records(&self) -> Result<Vec<DatedRecord>, Self::Error> {
        Ok(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_sources() {
        let corpus = vec![CorpusDocument::new("text").with_year(2000)];
        let records = vec![DatedRecord::new("definition", Some(1900), None)];

        assert_eq!(corpus.documents().unwrap().len(), 1);
        assert_eq!(records.records().unwrap()[0].first_year, Some(1900));
    }
}
