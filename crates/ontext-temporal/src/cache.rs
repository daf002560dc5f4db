//! Caller-owned cache of extraction results
//!
//! The core holds no global state. Callers that re-run the same analysis
//! create an [`AnalysisCache`] and keep it wherever their lifecycle fits.

use crate::error::TemporalError;
use crate::extractor::{validate_term, TemporalExtractor};
use crate::types::SnapshotMap;
use ontext_domain::{CorpusDocument, Year};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;

/// Identifies one extraction: term, periods, corpus and configuration
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    /// Trimmed search term
    pub term: String,
    /// Sorted, deduplicated periods
    pub periods: Vec<Year>,
    /// Order-independent digest of the corpus
    pub corpus_fingerprint: String,
    /// Digest of the extractor configuration
    pub config_fingerprint: String,
}

impl CacheKey {
    /// Build the key for an extraction request
    pub fn new(
        extractor: &TemporalExtractor,
        documents: &[CorpusDocument],
        term: &str,
        periods: &[Year],
    ) -> Self {
        let mut periods = periods.to_vec();
        periods.sort_unstable();
        periods.dedup();

        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", extractor.config()).as_bytes());

        Self {
            term: term.trim().to_string(),
            periods,
            corpus_fingerprint: corpus_fingerprint(documents),
            config_fingerprint: format!("{:x}", hasher.finalize()),
        }
    }
}

/// SHA-256 fingerprint of a corpus, independent of document order
pub fn corpus_fingerprint(documents: &[CorpusDocument]) -> String {
    let mut digests: Vec<Vec<u8>> = documents
        .iter()
        .map(|doc| {
            let mut hasher = Sha256::new();
            hasher.update(format!("{:?}", doc.year).as_bytes());
            hasher.update([0u8]);
            hasher.update(doc.name.as_deref().unwrap_or("").as_bytes());
            hasher.update([0u8]);
            for (key, value) in &doc.metadata {
                hasher.update(key.as_bytes());
                hasher.update([b'=']);
                hasher.update(value.to_string().as_bytes());
                hasher.update([0u8]);
            }
            hasher.update(doc.text.as_bytes());
            hasher.finalize().to_vec()
        })
        .collect();
    digests.sort();

    let mut hasher = Sha256::new();
    for digest in &digests {
        hasher.update(digest);
    }
    format!("{:x}", hasher.finalize())
}

struct CacheState {
    entries: HashMap<CacheKey, (u64, Arc<SnapshotMap>)>,
    sequence: u64,
}

/// Bounded cache of snapshot maps
///
/// Safe to share between threads. When full, the oldest insertion is evicted.
pub struct AnalysisCache {
    state: Mutex<CacheState>,
    max_entries: usize,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl AnalysisCache {
    /// Create a cache holding at most `max_entries` results
    pub fn new(max_entries: usize) -> Self {
        Self {
            state: Mutex::new(CacheState {
                entries: HashMap::new(),
                sequence: 0,
            }),
            max_entries: max_entries.max(1),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    fn lock(&self) -> MutexGuard<'_, CacheState> {
        // Entries are plain data, safe to reuse after a poisoning panic
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Return the cached snapshots for this request, extracting on a miss
    ///
    /// # Errors
    ///
    /// [`TemporalError::InvalidArgument`] if `term` is empty or whitespace.
    pub fn get_or_extract(
        &self,
        extractor: &TemporalExtractor,
        documents: &[CorpusDocument],
        term: &str,
        periods: &[Year],
    ) -> Result<Arc<SnapshotMap>, TemporalError> {
        validate_term(term)?;
        let key = CacheKey::new(extractor, documents, term, periods);

        if let Some((_, snapshots)) = self.lock().entries.get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            debug!("Cache hit for '{}'", key.term);
            return Ok(Arc::clone(snapshots));
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        // Extract without holding the lock
        let snapshots = Arc::new(extractor.extract(documents, term, &key.periods)?);

        let mut state = self.lock();
        if state.entries.len() >= self.max_entries && !state.entries.contains_key(&key) {
            let oldest = state
                .entries
                .iter()
                .min_by_key(|(_, (sequence, _))| *sequence)
                .map(|(k, _)| k.clone());
            if let Some(oldest) = oldest {
                state.entries.remove(&oldest);
            }
        }
        state.sequence += 1;
        let sequence = state.sequence;
        state.entries.insert(key, (sequence, Arc::clone(&snapshots)));

        Ok(snapshots)
    }

    /// Number of cached results
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    /// True when nothing is cached
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every cached result
    pub fn clear(&self) {
        self.lock().entries.clear();
    }

    /// Requests served from the cache
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Requests that required extraction
    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }
}

impl Default for AnalysisCache {
    fn default() -> Self {
        Self::new(64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Vec<CorpusDocument> {
        vec![
            CorpusDocument::new("The agent performs tasks.").with_year(2000),
            CorpusDocument::new("An agent is an autonomous entity that acts.").with_year(2010),
        ]
    }

    #[test]
    fn test_fingerprint_is_order_independent() {
        let mut reversed = corpus();
        reversed.reverse();
        assert_eq!(corpus_fingerprint(&corpus()), corpus_fingerprint(&reversed));
    }

    #[test]
    fn test_fingerprint_detects_changes() {
        let mut changed = corpus();
        changed[0].year = Some(2001);
        assert_ne!(corpus_fingerprint(&corpus()), corpus_fingerprint(&changed));
    }

    #[test]
    fn test_key_normalizes_periods() {
        let extractor = TemporalExtractor::default_config();
        let a = CacheKey::new(&extractor, &corpus(), " agent ", &[2010, 2000, 2010]);
        let b = CacheKey::new(&extractor, &corpus(), "agent", &[2000, 2010]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_hit_and_miss() {
        let extractor = TemporalExtractor::default_config();
        let cache = AnalysisCache::new(8);

        let first = cache.get_or_extract(&extractor, &corpus(), "agent", &[2000, 2010]).unwrap();
        let second = cache.get_or_extract(&extractor, &corpus(), "agent", &[2010, 2000]).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.misses(), 1);
        assert_eq!(cache.hits(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_eviction() {
        let extractor = TemporalExtractor::default_config();
        let cache = AnalysisCache::new(2);

        for term in ["agent", "entity", "tasks"] {
            cache.get_or_extract(&extractor, &corpus(), term, &[2000]).unwrap();
        }
        assert_eq!(cache.len(), 2);

        // "agent" was inserted first and is gone
        cache.get_or_extract(&extractor, &corpus(), "agent", &[2000]).unwrap();
        assert_eq!(cache.misses(), 4);
    }

    #[test]
    fn test_invalid_term_not_cached() {
        let extractor = TemporalExtractor::default_config();
        let cache = AnalysisCache::default();
        assert!(cache.get_or_extract(&extractor, &corpus(), "", &[2000]).is_err());
        assert!(cache.is_empty());

        cache.get_or_extract(&extractor, &corpus(), "agent", &[2000]).unwrap();
        cache.clear();
        assert!(cache.is_empty());
    }
}
