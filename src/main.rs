//! Cash flow report CLI
//!
//! Command-line interface for building a period cash flow report from a
//! transactions CSV file.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- --from 2024-01-01 --to 2024-01-31 transactions.csv
//! cargo run -- --from 2024-01-01 --to 2024-03-31 --format csv transactions.csv > q1.csv
//! cargo run -- --strategy async --batch-size 2000 --from 2024-01-01 --to 2024-12-31 --format json transactions.csv
//! ```
//!
//! The report goes to stdout; diagnostics go to stderr (level from
//! `--log-level` or `CASH_FLOW_LOG`).
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (invalid period, file not found, rejected record, etc.)

use cash_flow_report::cli;
use cash_flow_report::strategy::{self, ReportRequest};
use std::process;

fn main() {
    let args = cli::parse_args();
    cli::init_logging(&args.log_level);

    let period = match args.period() {
        Ok(period) => period,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let strategy = {
        let config = if matches!(args.strategy, cli::StrategyType::Async) {
            Some(args.to_batch_config())
        } else {
            None
        };
        strategy::create_strategy(args.strategy, config)
    };

    let request = ReportRequest {
        period,
        format: args.format,
    };

    let mut output = std::io::stdout();
    if let Err(e) = strategy.process(&args.input_file, &request, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
