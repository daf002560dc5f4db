//! Extract command implementation.

use crate::cli::AnalysisArgs;
use crate::commands::{build_analyzer, load_corpus};
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;

/// Execute the extract command.
pub fn execute_extract(args: AnalysisArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    println!("{}", render_extract(&args, config, formatter)?);
    Ok(())
}

fn render_extract(args: &AnalysisArgs, config: &Config, formatter: &Formatter) -> Result<String> {
    let documents = load_corpus(args)?;
    let analyzer = build_analyzer(config)?;
    let snapshots = analyzer.extractor().extract(&documents, &args.term, &args.periods)?;
    formatter.format_snapshots(&snapshots)
}
