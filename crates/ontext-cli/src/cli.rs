//! CLI command definitions and argument parsing.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// OntExtract - Track how a term's meaning shifts over time.
#[derive(Debug, Parser)]
#[command(name = "ontext")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "ONTEXT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Per-period frequency, contexts, semantic field and definition
    Extract(AnalysisArgs),

    /// Semantic drift between adjacent periods
    Drift(AnalysisArgs),

    /// Snapshots, drift and narrative in one report
    Report(ReportArgs),

    /// Reconcile dated records against analysis years
    Match(MatchArgs),

    /// Generate analysis periods
    Periods(PeriodsArgs),

    /// Inspect or create the configuration file
    Config(ConfigArgs),
}

/// Arguments shared by the corpus analysis commands.
#[derive(Debug, Args)]
pub struct AnalysisArgs {
    /// JSON file with an array of corpus documents
    #[arg(long)]
    pub corpus: PathBuf,

    /// Term to analyse
    #[arg(short, long)]
    pub term: String,

    /// Analysis years, comma separated (e.g. 1990,2000,2010)
    #[arg(short, long, value_delimiter = ',', required = true)]
    pub periods: Vec<i32>,
}

/// Arguments for the report command.
#[derive(Debug, Args)]
pub struct ReportArgs {
    #[command(flatten)]
    pub analysis: AnalysisArgs,

    /// Leave the narrative out of the report
    #[arg(long)]
    pub no_narrative: bool,
}

/// Arguments for the match command.
#[derive(Debug, Args)]
pub struct MatchArgs {
    /// JSON file with an array of dated records
    #[arg(short, long)]
    pub records: PathBuf,

    /// Target years, comma separated
    #[arg(short, long, value_delimiter = ',', required = true)]
    pub periods: Vec<i32>,
}

/// Arguments for the periods command.
#[derive(Debug, Args)]
pub struct PeriodsArgs {
    /// First year of the range
    #[arg(long, requires = "end", conflicts_with = "records")]
    pub start: Option<i32>,

    /// Last year of the range (always included)
    #[arg(long, requires = "start")]
    pub end: Option<i32>,

    /// Years between periods
    #[arg(long, default_value = "10")]
    pub step: u32,

    /// Derive periods from the citation years of dated records
    #[arg(short, long)]
    pub records: Option<PathBuf>,

    /// Maximum number of periods derived from records
    #[arg(long, default_value = "10")]
    pub max: usize,
}

/// Arguments for configuration management.
#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_command() {
        let cli = Cli::parse_from([
            "ontext",
            "extract",
            "--corpus",
            "corpus.json",
            "--term",
            "agent",
            "--periods",
            "2000,2010",
        ]);
        match cli.command {
            Command::Extract(args) => {
                assert_eq!(args.term, "agent");
                assert_eq!(args.periods, vec![2000, 2010]);
                assert_eq!(args.corpus, PathBuf::from("corpus.json"));
            }
            _ => panic!("Expected Extract command"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "ontext",
            "match",
            "--records",
            "oed.json",
            "--periods",
            "1957,1976",
            "--format",
            "json",
            "--no-color",
            "-v",
        ]);
        assert_eq!(cli.format, Some(CliFormat::Json));
        assert!(cli.no_color);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Command::Match(_)));
    }

    #[test]
    fn test_report_no_narrative() {
        let cli = Cli::parse_from([
            "ontext", "report", "--corpus", "c.json", "-t", "agent", "-p", "2000", "--no-narrative",
        ]);
        match cli.command {
            Command::Report(args) => {
                assert!(args.no_narrative);
                assert_eq!(args.analysis.periods, vec![2000]);
            }
            _ => panic!("Expected Report command"),
        }
    }

    #[test]
    fn test_periods_range_and_records_conflict() {
        let result = Cli::try_parse_from([
            "ontext", "periods", "--start", "1990", "--end", "2000", "--records", "r.json",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_periods_defaults() {
        let cli = Cli::parse_from(["ontext", "periods", "--start", "1990", "--end", "2020"]);
        match cli.command {
            Command::Periods(args) => {
                assert_eq!(args.step, 10);
                assert_eq!(args.max, 10);
                assert_eq!(args.start, Some(1990));
            }
            _ => panic!("Expected Periods command"),
        }
    }

    #[test]
    fn test_missing_periods_rejected() {
        let result =
            Cli::try_parse_from(["ontext", "drift", "--corpus", "c.json", "--term", "agent"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_format_conversion() {
        let format: crate::config::OutputFormat = CliFormat::Json.into();
        assert_eq!(format, crate::config::OutputFormat::Json);
    }
}
