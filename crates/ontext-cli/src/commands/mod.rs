//! Command implementations.

pub mod config;
pub mod drift;
pub mod extract;
pub mod match_cmd;
pub mod periods;
pub mod report;

pub use self::config::execute_config;
pub use self::drift::execute_drift;
pub use self::extract::execute_extract;
pub use self::match_cmd::execute_match;
pub use self::periods::execute_periods;
pub use self::report::execute_report;

use crate::cli::AnalysisArgs;
use crate::config::Config;
use crate::error::Result;
use crate::sources::JsonCorpus;
use ontext_domain::{CorpusDocument, CorpusSource};
use ontext_temporal::{DriftAnalyzer, TemporalExtractor};

/// Load the corpus named by the analysis arguments.
pub(crate) fn load_corpus(args: &AnalysisArgs) -> Result<Vec<CorpusDocument>> {
    JsonCorpus::new(&args.corpus).documents()
}

/// Drift analyzer built from the `[temporal]` configuration.
pub(crate) fn build_analyzer(config: &Config) -> Result<DriftAnalyzer> {
    let extractor = TemporalExtractor::new(config.temporal.clone())?;
    Ok(DriftAnalyzer::with_extractor(extractor))
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::cli::AnalysisArgs;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Corpus file with the two-document "agent" timeline.
    pub fn agent_corpus() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            br#"[
                {"text": "The agent performs tasks.", "year": 2000},
                {"text": "An agent is an autonomous entity that acts.", "year": 2010}
            ]"#,
        )
        .unwrap();
        file
    }

    pub fn analysis_args(file: &NamedTempFile, term: &str, periods: &[i32]) -> AnalysisArgs {
        AnalysisArgs {
            corpus: file.path().to_path_buf(),
            term: term.to_string(),
            periods: periods.to_vec(),
        }
    }
}
