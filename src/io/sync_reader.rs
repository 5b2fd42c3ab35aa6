//! Synchronous CSV reader with iterator interface
//!
//! Provides a streaming iterator over transaction records from a CSV file.
//! Delegates CSV format concerns to the csv_format module.
//!
//! # Design
//!
//! The SyncReader uses csv::Reader to read and deserialize CSV records
//! sequentially, delegating validation and conversion to the csv_format
//! module. Records are converted one at a time without loading the entire
//! file into memory.
//!
//! # Iterator Interface
//!
//! SyncReader implements the Iterator trait, yielding
//! `Result<TransactionRecord, ReportError>` for each CSV row:
//!
//! ```no_run
//! use cash_flow_report::io::sync_reader::SyncReader;
//! use std::path::Path;
//!
//! let reader = SyncReader::new(Path::new("transactions.csv")).unwrap();
//! let records: Result<Vec<_>, _> = reader.collect();
//! ```
//!
//! # Error Handling
//!
//! - Fatal errors opening the file are returned from `new()`
//! - Row errors are yielded as Err variants; callers building a report stop
//!   at the first one, since a report must not omit rows
//! - CSV structure errors, including rows with more fields than the header,
//!   carry the physical line number

use crate::io::csv_format::{check_field_count, convert_csv_record, CsvRecord};
use crate::types::{ReportError, TransactionRecord};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::path::Path;

/// Synchronous CSV reader
///
/// Provides an iterator interface over transaction records.
#[derive(Debug)]
pub struct SyncReader {
    reader: csv::Reader<File>,
    headers: StringRecord,
    record: StringRecord,
}

impl SyncReader {
    /// Create a new SyncReader from a file path
    ///
    /// The CSV reader is configured to:
    /// - Trim whitespace from all fields
    /// - Allow rows shorter than the header (for the optional category field)
    /// - Use an 8KB buffer for efficient I/O
    ///
    /// # Errors
    ///
    /// * `ReportError::FileNotFound` if the file does not exist
    /// * `ReportError::IoError` if it exists but cannot be opened
    /// * `ReportError::ParseError` if the header row cannot be read
    pub fn new(path: &Path) -> Result<Self, ReportError> {
        let file = File::open(path).map_err(|e| ReportError::open_failed(path, e))?;

        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(file);
        let headers = reader.headers()?.clone();

        Ok(Self {
            reader,
            headers,
            record: StringRecord::new(),
        })
    }

    /// Validate the shape of the last row read and convert it
    fn convert_current(&self) -> Result<TransactionRecord, ReportError> {
        let line = self.record.position().map(|pos| pos.line());
        check_field_count(self.record.len(), self.headers.len(), line)?;

        let csv_record: CsvRecord = self.record.deserialize(Some(&self.headers))?;
        convert_csv_record(csv_record).inspect_err(|e| {
            tracing::error!(?line, "rejected record: {}", e);
        })
    }
}

impl Iterator for SyncReader {
    type Item = Result<TransactionRecord, ReportError>;

    /// Get the next transaction record from the CSV file
    ///
    /// # Returns
    ///
    /// * `Some(Ok(TransactionRecord))` - Successfully parsed record
    /// * `Some(Err(ReportError))` - Parse or contract error
    /// * `None` - End of file reached
    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_record(&mut self.record) {
            Ok(true) => Some(self.convert_current()),
            Ok(false) => None,
            Err(e) => {
                let line = self.reader.position().line();
                Some(Err(ReportError::from(e).at_line(line)))
            }
        }
    }
}
