//! Synchronous processing strategy
//!
//! Single-threaded implementation of the ProcessingStrategy trait. Records
//! are streamed through `SyncReader`, filtered to the requested period and
//! collected; the first bad row aborts the load.

use crate::io::sync_reader::SyncReader;
use crate::strategy::{within_period, ProcessingStrategy};
use crate::types::{ReportError, ReportPeriod, TransactionRecord};
use std::path::Path;

/// Synchronous processing strategy
///
/// # Examples
///
/// ```no_run
/// use cash_flow_report::cli::OutputFormat;
/// use cash_flow_report::strategy::{ProcessingStrategy, ReportRequest, SyncProcessingStrategy};
/// use cash_flow_report::types::ReportPeriod;
/// use chrono::NaiveDate;
/// use std::path::Path;
///
/// let period = ReportPeriod::new(
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
/// )
/// .unwrap();
/// let request = ReportRequest { period, format: OutputFormat::Text };
///
/// SyncProcessingStrategy
///     .process(Path::new("transactions.csv"), &request, &mut std::io::stdout())
///     .expect("Processing failed");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SyncProcessingStrategy;

impl ProcessingStrategy for SyncProcessingStrategy {
    fn load_records(
        &self,
        input_path: &Path,
        period: ReportPeriod,
    ) -> Result<Vec<TransactionRecord>, ReportError> {
        let reader = SyncReader::new(input_path)?;

        let mut records = Vec::new();
        for result in reader {
            let record = result?;
            if within_period(&record, period) {
                records.push(record);
            }
        }

        tracing::info!(
            path = %input_path.display(),
            records = records.len(),
            "loaded records"
        );
        Ok(records)
    }
}
