//! JSON export of a cash-flow report
//!
//! Dates are written as `YYYY-MM-DD` strings and amounts as decimal strings so
//! that no precision is lost on the way to the renderer. Empty bucket cells
//! are `null`.

use crate::types::{CashFlowReport, ReportError};
use std::io::Write;

/// Write a report as pretty-printed JSON followed by a newline
pub fn write_report_json(
    report: &CashFlowReport,
    output: &mut dyn Write,
) -> Result<(), ReportError> {
    serde_json::to_writer_pretty(&mut *output, report)?;
    output.write_all(b"\n")?;
    output.flush()?;
    Ok(())
}
