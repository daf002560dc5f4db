//! Drift command implementation.

use crate::cli::AnalysisArgs;
use crate::commands::{build_analyzer, load_corpus};
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;

/// Execute the drift command.
pub fn execute_drift(args: AnalysisArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    println!("{}", render_drift(&args, config, formatter)?);
    Ok(())
}

fn render_drift(args: &AnalysisArgs, config: &Config, formatter: &Formatter) -> Result<String> {
    let documents = load_corpus(args)?;
    let analyzer = build_analyzer(config)?;
    let drift = analyzer.analyze_drift(&documents, &args.term, &args.periods)?;
    formatter.format_drift(&drift)
}
