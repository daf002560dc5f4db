//! Periods command implementation.

use crate::cli::PeriodsArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::sources::JsonRecords;
use ontext_domain::{RecordSource, Year};
use ontext_periods::{generate_periods, periods_from_records};

/// Execute the periods command.
pub fn execute_periods(args: PeriodsArgs, formatter: &Formatter) -> Result<()> {
    let periods = resolve_periods(&args)?;
    println!("{}", formatter.format_periods(&periods)?);
    Ok(())
}

fn resolve_periods(args: &PeriodsArgs) -> Result<Vec<Year>> {
    if let Some(path) = &args.records {
        let records = JsonRecords::new(path).records()?;
        return Ok(periods_from_records(&records, args.max));
    }

    match (args.start, args.end) {
        (Some(start), Some(end)) => Ok(generate_periods(start, end, args.step)?),
        _ => Err(CliError::InvalidInput(
            "Must specify either --start and --end, or --records".to_string(),
        )),
    }
}
