//! Report command implementation.

use crate::cli::ReportArgs;
use crate::commands::{build_analyzer, load_corpus};
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;

/// Execute the report command.
pub fn execute_report(args: ReportArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    println!("{}", render_report(&args, config, formatter)?);
    Ok(())
}

fn render_report(args: &ReportArgs, config: &Config, formatter: &Formatter) -> Result<String> {
    let documents = load_corpus(&args.analysis)?;
    let analyzer = build_analyzer(config)?;
    let report = analyzer.report(&documents, &args.analysis.term, &args.analysis.periods)?;
    formatter.format_report(&report, !args.no_narrative)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures::{agent_corpus, analysis_args};
    use crate::config::OutputFormat;

    #[test]
    fn test_report_contains_narrative() {
        let corpus = agent_corpus();
        let args = ReportArgs {
            analysis: analysis_args(&corpus, "agent", &[2000, 2010]),
            no_narrative: false,
        };
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = render_report(&args, &Config::default(), &formatter).unwrap();

        assert!(output.contains("Term: agent"));
        assert!(output.contains("Temporal analysis of 'agent' across 2 periods (2000-2010)."));
    }

    #[test]
    fn test_report_without_narrative() {
        let corpus = agent_corpus();
        let args = ReportArgs {
            analysis: analysis_args(&corpus, "agent", &[2000, 2010]),
            no_narrative: true,
        };
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = render_report(&args, &Config::default(), &formatter).unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert!(value.get("narrative").is_none());
        assert_eq!(value["term"], "agent");
    }
}
