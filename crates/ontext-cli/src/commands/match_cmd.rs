//! Match command implementation.

use crate::cli::MatchArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use crate::sources::JsonRecords;
use ontext_domain::RecordSource;
use ontext_periods::PeriodMatcher;

/// Execute the match command.
pub fn execute_match(args: MatchArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    println!("{}", render_match(&args, config, formatter)?);
    Ok(())
}

fn render_match(args: &MatchArgs, config: &Config, formatter: &Formatter) -> Result<String> {
    let records = JsonRecords::new(&args.records).records()?;
    let matcher = PeriodMatcher::new(config.matcher.clone())?;
    let reconciled = matcher.reconcile(&records, &args.periods);
    formatter.format_reconciled(&reconciled)
}
