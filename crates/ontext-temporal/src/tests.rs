//! End-to-end scenarios for the temporal analysis core

#[cfg(test)]
mod tests {
    use crate::{DriftAnalyzer, EvolutionStatus, TemporalError, TemporalExtractor};
    use ontext_domain::CorpusDocument;

    fn agent_corpus() -> Vec<CorpusDocument> {
        vec![
            CorpusDocument::new("The agent performs tasks.").with_year(2000),
            CorpusDocument::new("An agent is an autonomous entity that acts.").with_year(2010),
        ]
    }

    #[test]
    fn test_agent_scenario_snapshots() {
        let extractor = TemporalExtractor::default_config();
        let snapshots = extractor.extract(&agent_corpus(), "agent", &[2000, 2010]).unwrap();

        assert_eq!(snapshots[&2000].frequency, 1);
        assert_eq!(snapshots[&2010].frequency, 1);
        assert_ne!(snapshots[&2000].evolution_status, EvolutionStatus::Absent);
        assert_ne!(snapshots[&2010].evolution_status, EvolutionStatus::Absent);
        assert_eq!(snapshots[&2000].contexts, vec!["The agent performs tasks"]);
        assert_eq!(
            snapshots[&2010].definition,
            "An agent is an autonomous entity that acts"
        );
    }

    #[test]
    fn test_agent_scenario_drift() {
        let analyzer = DriftAnalyzer::default_config();
        let result = analyzer.analyze_drift(&agent_corpus(), "agent", &[2000, 2010]).unwrap();

        let record = &result.periods["2000-2010"];
        for term in ["autonomous", "entity", "acts"] {
            assert!(record.new_terms.contains(term), "missing new term {}", term);
        }
        for term in ["performs", "tasks"] {
            assert!(record.lost_terms.contains(term), "missing lost term {}", term);
        }
        assert_eq!(record.drift_score, 1.0);
        assert_eq!(result.average_drift, 1.0);
        assert_eq!(result.total_drift, 1.0);
        assert!(result.stable_terms.is_empty());
    }

    #[test]
    fn test_empty_corpus_extract() {
        let extractor = TemporalExtractor::default_config();
        let snapshots = extractor.extract(&[], "anyterm", &[2000]).unwrap();

        assert_eq!(snapshots.len(), 1);
        assert_eq!(snapshots[&2000].frequency, 0);
        assert_eq!(snapshots[&2000].evolution_status, EvolutionStatus::Absent);
        assert!(snapshots[&2000].contexts.is_empty());
        assert!(snapshots[&2000].semantic_field.is_empty());
    }

    #[test]
    fn test_empty_corpus_drift() {
        let analyzer = DriftAnalyzer::default_config();
        let result = analyzer.analyze_drift(&[], "anyterm", &[2000, 2010]).unwrap();

        assert_eq!(result.average_drift, 0.0);
        assert_eq!(result.total_drift, 0.0);
        assert!(result.periods.is_empty());
        assert!(result.stable_terms.is_empty());
        assert!(result.timeline.is_empty());
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let analyzer = DriftAnalyzer::default_config();
        let mut documents = agent_corpus();
        documents.push(CorpusDocument::new("The agent sells houses and land.").with_year(2001));
        documents.push(CorpusDocument::new("A software agent negotiates prices.").with_year(2009));

        let forward = analyzer.report(&documents, "agent", &[2000, 2010]).unwrap();
        documents.reverse();
        let backward = analyzer.report(&documents, "agent", &[2010, 2000]).unwrap();

        assert_eq!(forward, backward);
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let analyzer = DriftAnalyzer::default_config();
        let a = analyzer.report(&agent_corpus(), "agent", &[2000, 2005, 2010]).unwrap();
        let b = analyzer.report(&agent_corpus(), "agent", &[2000, 2005, 2010]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_report_narrative() {
        let analyzer = DriftAnalyzer::default_config();
        let report = analyzer.report(&agent_corpus(), " agent ", &[2000, 2010]).unwrap();

        assert_eq!(report.term, "agent");
        assert!(report
            .narrative
            .starts_with("Temporal analysis of 'agent' across 2 periods (2000-2010)."));
        assert!(report.narrative.contains("usage remained stable at 1 occurrence"));
        assert!(report.narrative.ends_with("usage peaked in 2000 with 1 occurrence."));
    }

    #[test]
    fn test_empty_term_is_invalid_everywhere() {
        let analyzer = DriftAnalyzer::default_config();
        assert!(matches!(
            analyzer.report(&agent_corpus(), "", &[2000]),
            Err(TemporalError::InvalidArgument(_))
        ));
        assert!(matches!(
            analyzer.extractor().extract(&agent_corpus(), "\t", &[2000]),
            Err(TemporalError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_years_from_metadata_and_content() {
        let extractor = TemporalExtractor::default_config();
        let documents = vec![
            CorpusDocument::new("The agent acts.").with_metadata("publication_date", "1999-03-02"),
            CorpusDocument::new("Report of 2001. The agent reports."),
        ];
        let snapshot = extractor.extract_period(&documents, "agent", 2000).unwrap();
        assert_eq!(snapshot.document_count, 2);
        assert_eq!(snapshot.frequency, 2);
    }
}
