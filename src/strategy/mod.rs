//! Processing strategy module for report generation
//!
//! This module defines the Strategy pattern for complete report pipelines:
//! loading records from CSV, aggregating them and writing the rendered
//! report. Different loading implementations (synchronous, asynchronous
//! batch) can be selected at runtime.
//!
//! The strategies play the record-supplier role: they validate every row and
//! keep only records dated inside the requested period. The aggregator then
//! works on exactly the list it is given.

use crate::cli::{OutputFormat, StrategyType};
use crate::core::aggregate;
use crate::io::write_report;
use crate::types::{CashFlowReport, ReportError, ReportPeriod, TransactionRecord};
use std::io::Write;
use std::path::Path;

pub mod r#async;
pub mod sync;

pub use self::r#async::{AsyncProcessingStrategy, BatchConfig};
pub use sync::SyncProcessingStrategy;

/// What to build and how to render it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportRequest {
    /// Inclusive period; records outside it are dropped while loading
    pub period: ReportPeriod,
    /// Output rendering
    pub format: OutputFormat,
}

/// Processing strategy trait for complete report pipelines
///
/// Each strategy must be able to load the records of a period from a CSV
/// file. Aggregation and rendering are shared.
pub trait ProcessingStrategy: Send + Sync {
    /// Load all records dated inside `period` from `input_path`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input file cannot be opened (file not found, permission denied)
    /// - A fatal I/O error occurs during reading
    /// - Any row is malformed or breaks the record contract
    fn load_records(
        &self,
        input_path: &Path,
        period: ReportPeriod,
    ) -> Result<Vec<TransactionRecord>, ReportError>;

    /// Load, aggregate and render a report
    ///
    /// Nothing is written to `output` unless the whole report was built.
    fn process(
        &self,
        input_path: &Path,
        request: &ReportRequest,
        output: &mut dyn Write,
    ) -> Result<CashFlowReport, ReportError> {
        let records = self.load_records(input_path, request.period)?;
        let report = aggregate(&records, request.period)?;
        write_report(&report, request.format, output)?;
        Ok(report)
    }
}

/// Whether a loaded record belongs to the requested period
///
/// Records outside the period are dropped by the supplier, never by the
/// aggregator.
pub(crate) fn within_period(record: &TransactionRecord, period: ReportPeriod) -> bool {
    let keep = period.contains(record.date);
    if !keep {
        tracing::debug!(record = %record.id, date = %record.date, %period, "record outside period");
    }
    keep
}

/// Create a processing strategy based on the specified strategy type
///
/// # Arguments
///
/// * `strategy_type` - The type of processing strategy to create (Sync or Async)
/// * `config` - Optional configuration for async batch loading (ignored for sync)
pub fn create_strategy(
    strategy_type: StrategyType,
    config: Option<BatchConfig>,
) -> Box<dyn ProcessingStrategy> {
    match strategy_type {
        StrategyType::Sync => Box::new(SyncProcessingStrategy),
        StrategyType::Async => {
            let config = config.unwrap_or_default();
            Box::new(AsyncProcessingStrategy::new(config))
        }
    }
}
