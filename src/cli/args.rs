use crate::strategy::BatchConfig;
use crate::types::{ReportError, ReportPeriod};
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Build a period cash flow report from a transactions CSV file
#[derive(Parser, Debug)]
#[command(name = "cash-flow-report")]
#[command(about = "Build a period cash flow report from a transactions CSV file", long_about = None)]
pub struct CliArgs {
    /// Input CSV file path containing transaction records
    #[arg(value_name = "INPUT", help = "Path to the input CSV file")]
    pub input_file: PathBuf,

    /// First day of the reporting period (inclusive)
    #[arg(long = "from", value_name = "DATE", value_parser = parse_date)]
    pub from: NaiveDate,

    /// Last day of the reporting period (inclusive)
    #[arg(long = "to", value_name = "DATE", value_parser = parse_date)]
    pub to: NaiveDate,

    /// Loading strategy to use for reading transactions
    #[arg(
        long = "strategy",
        value_name = "STRATEGY",
        default_value = "sync",
        help = "Loading strategy: 'sync' for synchronous or 'async' for batched asynchronous reads"
    )]
    pub strategy: StrategyType,

    /// Number of records per batch (async mode only)
    #[arg(
        long = "batch-size",
        value_name = "SIZE",
        help = "Number of records per batch (default: 1000)"
    )]
    pub batch_size: Option<usize>,

    /// Report rendering
    #[arg(long = "format", value_name = "FORMAT", default_value = "text")]
    pub format: OutputFormat,

    /// Log filter directive for diagnostics on stderr
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        env = "CASH_FLOW_LOG",
        default_value = "warn"
    )]
    pub log_level: String,
}

/// Available loading strategies for CSV input
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyType {
    Sync,
    Async,
}

/// Available report renderings
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Csv,
    Text,
    Json,
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD, got '{}': {}", value, e))
}

impl CliArgs {
    /// Create a BatchConfig from CLI arguments
    ///
    /// Falls back to the default batch size when none (or zero) is given.
    pub fn to_batch_config(&self) -> BatchConfig {
        match self.batch_size {
            Some(batch_size) => BatchConfig::new(batch_size),
            None => BatchConfig::default(),
        }
    }

    /// The inclusive reporting period given by `--from` and `--to`
    ///
    /// # Errors
    ///
    /// `ReportError::InvalidPeriod` if `--from` is after `--to`.
    pub fn period(&self) -> Result<ReportPeriod, ReportError> {
        ReportPeriod::new(self.from, self.to)
    }
}
