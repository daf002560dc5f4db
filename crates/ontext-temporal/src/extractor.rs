//! Per-period term extraction

use crate::config::TemporalConfig;
use crate::contexts::{cluster_contexts, ContextWindows};
use crate::definitions::{dedupe, DefinitionMatcher};
use crate::error::TemporalError;
use crate::text::{contains_term, count_occurrences, sentences, ContentWords};
use crate::types::{EvolutionStatus, PeriodSnapshot, SnapshotMap};
use crate::year::resolve_year;
use ontext_domain::{CorpusDocument, Year};
use std::collections::HashMap;
use tracing::{debug, info};

/// Computes frequency, contexts, semantic field and definition of a term for
/// each requested period
///
/// Stateless: every call is a pure function of its arguments and the
/// configuration, so one extractor can be shared across threads.
///
/// # Examples
///
/// ```
/// use ontext_domain::CorpusDocument;
/// use ontext_temporal::TemporalExtractor;
///
/// let extractor = TemporalExtractor::default_config();
/// let documents = vec![CorpusDocument::new("The agent performs tasks.").with_year(2000)];
///
/// let snapshots = extractor.extract(&documents, "agent", &[2000, 2010]).unwrap();
/// assert_eq!(snapshots[&2000].frequency, 1);
/// assert_eq!(snapshots[&2010].frequency, 0);
/// ```
#[derive(Debug, Clone)]
pub struct TemporalExtractor {
    config: TemporalConfig,
}

/// Term-specific matchers, built once per call
struct TermTools {
    term: String,
    term_lower: String,
    definitions: DefinitionMatcher,
    windows: ContextWindows,
    words: ContentWords,
}

impl TemporalExtractor {
    /// Create a new extractor, validating the configuration
    pub fn new(config: TemporalConfig) -> Result<Self, TemporalError> {
        config.validate().map_err(TemporalError::Config)?;
        Ok(Self { config })
    }

    /// Create an extractor with default configuration
    pub fn default_config() -> Self {
        Self {
            config: TemporalConfig::default(),
        }
    }

    /// The active configuration
    pub fn config(&self) -> &TemporalConfig {
        &self.config
    }

    /// Analyse `term` in every period of `periods`
    ///
    /// Documents without a resolvable year are ignored. Periods without
    /// documents get an "absent" snapshot. Duplicate periods collapse into
    /// one entry since they produce identical snapshots.
    ///
    /// # Errors
    ///
    /// [`TemporalError::InvalidArgument`] if `term` is empty or whitespace.
    pub fn extract(
        &self,
        documents: &[CorpusDocument],
        term: &str,
        periods: &[Year],
    ) -> Result<SnapshotMap, TemporalError> {
        let term = validate_term(term)?;
        let tools = self.tools(term);
        let dated = self.dated_documents(documents);

        debug!(
            "Resolved years for {}/{} documents",
            dated.len(),
            documents.len()
        );

        let mut snapshots = SnapshotMap::new();
        for &period in periods {
            let snapshot = self.snapshot(&dated, &tools, period);
            snapshots.insert(period, snapshot);
        }

        info!(
            "Extracted '{}' across {} periods ({} with data)",
            term,
            snapshots.len(),
            snapshots.values().filter(|s| s.has_data()).count()
        );

        Ok(snapshots)
    }

    /// Analyse `term` in a single period
    pub fn extract_period(
        &self,
        documents: &[CorpusDocument],
        term: &str,
        period: Year,
    ) -> Result<PeriodSnapshot, TemporalError> {
        let term = validate_term(term)?;
        let tools = self.tools(term);
        let dated = self.dated_documents(documents);
        Ok(self.snapshot(&dated, &tools, period))
    }

    fn tools(&self, term: &str) -> TermTools {
        TermTools {
            term: term.to_string(),
            term_lower: term.to_lowercase(),
            definitions: DefinitionMatcher::new(term, self.config.definition_max_chars),
            windows: ContextWindows::new(term, self.config.context_word_radius),
            words: ContentWords::new(term, self.config.min_token_length),
        }
    }

    /// Documents with a resolved year, in canonical order so that input
    /// order never affects results
    fn dated_documents<'a>(
        &self,
        documents: &'a [CorpusDocument],
    ) -> Vec<(Year, &'a CorpusDocument)> {
        let mut dated: Vec<(Year, &CorpusDocument)> = documents
            .iter()
            .filter_map(|doc| {
                resolve_year(doc, self.config.content_year_scan_chars).map(|r| (r.year, doc))
            })
            .collect();

        dated.sort_by(|(year_a, doc_a), (year_b, doc_b)| {
            year_a
                .cmp(year_b)
                .then_with(|| doc_a.display_name().cmp(doc_b.display_name()))
                .then_with(|| doc_a.text.cmp(&doc_b.text))
        });
        dated
    }

    fn snapshot(
        &self,
        dated: &[(Year, &CorpusDocument)],
        tools: &TermTools,
        period: Year,
    ) -> PeriodSnapshot {
        let window = i64::from(self.config.year_window);
        let documents: Vec<&CorpusDocument> = dated
            .iter()
            .filter(|(year, _)| (i64::from(*year) - i64::from(period)).abs() <= window)
            .map(|(_, doc)| *doc)
            .collect();

        if documents.is_empty() {
            debug!("No documents for '{}' around {}", tools.term, period);
            return PeriodSnapshot::absent(period, &tools.term);
        }

        let frequency: usize = documents
            .iter()
            .map(|doc| count_occurrences(&doc.text, &tools.term))
            .sum();

        let candidates = dedupe(
            documents
                .iter()
                .flat_map(|doc| tools.definitions.candidates(doc))
                .collect(),
            self.config.definition_dedup_prefix,
        );
        let definition_variants = candidates.len();
        let (definition, definition_source) = match candidates.into_iter().next() {
            Some(best) => (best.text, Some(best.source)),
            None => (
                format!("No definition found for '{}' in {}", tools.term, period),
                None,
            ),
        };

        let contexts = cluster_contexts(
            documents
                .iter()
                .flat_map(|doc| tools.windows.extract(&doc.text))
                .collect(),
            &tools.words,
            self.config.max_contexts,
        );

        let semantic_field = self.semantic_field(&documents, tools);
        let evolution_status =
            EvolutionStatus::classify(frequency, definition_variants, &self.config);

        debug!(
            "Period {}: {} documents, frequency {}, {} definitions, status {}",
            period,
            documents.len(),
            frequency,
            definition_variants,
            evolution_status
        );

        PeriodSnapshot {
            period,
            frequency,
            document_count: documents.len(),
            contexts,
            semantic_field,
            evolution_status,
            definition,
            definition_source,
            definition_variants,
        }
    }

    /// Most frequent content words of the sentences mentioning the term;
    /// ties are broken alphabetically
    fn semantic_field(&self, documents: &[&CorpusDocument], tools: &TermTools) -> Vec<String> {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for doc in documents {
            for sentence in sentences(&doc.text) {
                if !contains_term(sentence, &tools.term_lower) {
                    continue;
                }
                for word in tools.words.extract(sentence) {
                    *counts.entry(word).or_insert(0) += 1;
                }
            }
        }

        let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
        ranked.sort_by(|(word_a, count_a), (word_b, count_b)| {
            count_b.cmp(count_a).then_with(|| word_a.cmp(word_b))
        });
        ranked
            .into_iter()
            .take(self.config.semantic_field_size)
            .map(|(word, _)| word)
            .collect()
    }
}

/// Reject empty search terms; returns the trimmed term
pub(crate) fn validate_term(term: &str) -> Result<&str, TemporalError> {
    let trimmed = term.trim();
    if trimmed.is_empty() {
        return Err(TemporalError::InvalidArgument(
            "search term must not be empty".to_string(),
        ));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EvolutionStatus;

    fn corpus() -> Vec<CorpusDocument> {
        vec![
            CorpusDocument::new("The agent performs tasks.").with_year(2000),
            CorpusDocument::new("An agent is an autonomous entity that acts.").with_year(2010),
        ]
    }

    #[test]
    fn test_empty_term_is_invalid() {
        let extractor = TemporalExtractor::default_config();
        let result = extractor.extract(&corpus(), "   ", &[2000]);
        assert!(matches!(result, Err(TemporalError::InvalidArgument(_))));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = TemporalConfig::default();
        config.max_contexts = 0;
        assert!(matches!(TemporalExtractor::new(config), Err(TemporalError::Config(_))));
    }

    #[test]
    fn test_window_membership() {
        let extractor = TemporalExtractor::default_config();
        let documents = vec![
            CorpusDocument::new("agent one").with_year(1998),
            CorpusDocument::new("agent two").with_year(2002),
            CorpusDocument::new("agent three").with_year(2003),
        ];
        let snapshot = extractor.extract_period(&documents, "agent", 2000).unwrap();
        assert_eq!(snapshot.document_count, 2);
        assert_eq!(snapshot.frequency, 2);
    }

    #[test]
    fn test_strict_window() {
        let extractor = TemporalExtractor::new(TemporalConfig::strict()).unwrap();
        let documents = vec![
            CorpusDocument::new("agent one").with_year(1999),
            CorpusDocument::new("agent two").with_year(2000),
        ];
        let snapshot = extractor.extract_period(&documents, "agent", 2000).unwrap();
        assert_eq!(snapshot.document_count, 1);
    }

    #[test]
    fn test_undated_documents_excluded_everywhere() {
        let extractor = TemporalExtractor::default_config();
        let documents = vec![CorpusDocument::new("An undated agent without any year.")];
        let snapshots = extractor.extract(&documents, "agent", &[1900, 2000, 2100]).unwrap();
        assert!(snapshots.values().all(|s| s.evolution_status == EvolutionStatus::Absent));
    }

    #[test]
    fn test_definition_and_source() {
        let extractor = TemporalExtractor::default_config();
        let documents = vec![CorpusDocument::new("An agent is defined as one who acts.")
            .with_year(2010)
            .with_name("dictionary.txt")];
        let snapshot = extractor.extract_period(&documents, "agent", 2010).unwrap();
        assert_eq!(snapshot.definition, "one who acts");
        assert_eq!(snapshot.definition_source.as_deref(), Some("dictionary.txt"));
        assert_eq!(snapshot.definition_variants, 1);
    }

    #[test]
    fn test_no_definition_placeholder() {
        let extractor = TemporalExtractor::default_config();
        let snapshot = extractor.extract_period(&corpus(), "agent", 2000).unwrap();
        assert!(snapshot.definition.starts_with("No definition found"));
        assert!(snapshot.definition.contains("agent"));
        assert!(snapshot.definition.contains("2000"));
        assert!(snapshot.definition_source.is_none());
    }

    #[test]
    fn test_semantic_field_ranking() {
        let extractor = TemporalExtractor::default_config();
        let documents = vec![CorpusDocument::new(
            "The agent sells houses. The agent sells land. \
             The agent rents houses. Houses are unrelated.",
        )
        .with_year(2000)];
        let snapshot = extractor.extract_period(&documents, "agent", 2000).unwrap();
        // houses: 2, sells: 2, land: 1, rents: 1; the unrelated sentence is ignored
        assert_eq!(snapshot.semantic_field, vec!["houses", "sells", "land", "rents"]);
    }

    #[test]
    fn test_semantic_field_cap() {
        let extractor = TemporalExtractor::default_config();
        let words: Vec<String> = (0..30).map(|i| format!("word{}", "x".repeat(i + 1))).collect();
        let text = format!("agent {}", words.join(" "));
        let documents = vec![CorpusDocument::new(text).with_year(2000)];
        let snapshot = extractor.extract_period(&documents, "agent", 2000).unwrap();
        assert_eq!(snapshot.semantic_field.len(), 20);
    }

    #[test]
    fn test_frequency_counts_substrings() {
        // Raw substring counting: "agentic" and "agents" count as occurrences
        let extractor = TemporalExtractor::default_config();
        let documents =
            vec![CorpusDocument::new("Agentic systems use agents. An agent acts.").with_year(2020)];
        let snapshot = extractor.extract_period(&documents, "agent", 2020).unwrap();
        assert_eq!(snapshot.frequency, 3);
    }

    #[test]
    fn test_status_from_frequency() {
        let extractor = TemporalExtractor::default_config();
        let text = "The agent acts. ".repeat(12);
        let documents = vec![CorpusDocument::new(text).with_year(2000)];
        let snapshot = extractor.extract_period(&documents, "agent", 2000).unwrap();
        assert_eq!(snapshot.frequency, 12);
        assert_eq!(snapshot.evolution_status, EvolutionStatus::Developing);
    }

    #[test]
    fn test_duplicate_periods_collapse() {
        let extractor = TemporalExtractor::default_config();
        let snapshots = extractor.extract(&corpus(), "agent", &[2010, 2000, 2010]).unwrap();
        assert_eq!(snapshots.len(), 2);
        assert_eq!(snapshots.keys().copied().collect::<Vec<_>>(), vec![2000, 2010]);
    }
}
