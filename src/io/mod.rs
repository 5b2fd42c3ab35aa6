//! I/O module
//!
//! Handles CSV parsing and report output.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (record conversion, report export)
//! - `sync_reader` - Synchronous CSV reader with iterator interface
//! - `async_reader` - Asynchronous CSV reader with batch reading interface
//! - `text_format` - Printable table rendering
//! - `json_format` - JSON export

pub mod async_reader;
pub mod csv_format;
pub mod json_format;
pub mod sync_reader;
pub mod text_format;

pub use async_reader::AsyncReader;
pub use csv_format::{convert_csv_record, write_report_csv, CsvRecord};
pub use json_format::write_report_json;
pub use sync_reader::SyncReader;
pub use text_format::{format_report, money, write_report_text};

use crate::cli::OutputFormat;
use crate::types::{CashFlowReport, ReportError};
use std::io::Write;

/// Render `report` to `output` in the requested format
pub fn write_report(
    report: &CashFlowReport,
    format: OutputFormat,
    output: &mut dyn Write,
) -> Result<(), ReportError> {
    match format {
        OutputFormat::Csv => write_report_csv(report, output),
        OutputFormat::Text => write_report_text(report, output),
        OutputFormat::Json => write_report_json(report, output),
    }
}
