//! Asynchronous CSV reader with batch interface
//!
//! Provides a streaming interface over transaction records from a CSV source.
//! Supports batch reading so that file I/O can overlap with conversion.
//!
//! # Design
//!
//! The AsyncReader uses:
//! - csv-async for streaming CSV parsing
//! - futures AsyncRead so any async byte source can feed it
//! - Batch reading for efficient processing
//!
//! # Architecture
//!
//! ```text
//! CSV Reader → AsyncReader → Batches of TransactionRecords
//!                  ↓
//!           csv_format module
//!           (CsvRecord, convert_csv_record)
//! ```
//!
//! Unlike a best-effort import, a batch read stops at the first row that
//! fails to parse, carries more fields than the header or breaks the record
//! contract, and returns that error. Line numbers are physical lines, so they
//! match the synchronous reader for the same file.

use crate::io::csv_format::{check_field_count, convert_csv_record, CsvRecord};
use crate::types::{ReportError, TransactionRecord};
use csv_async::{AsyncReaderBuilder, StringRecord};
use futures::io::AsyncRead;

/// Asynchronous CSV reader
///
/// Provides a batch reading interface over transaction records.
pub struct AsyncReader<R: AsyncRead + Unpin + Send> {
    csv_reader: csv_async::AsyncReader<R>,
    record: StringRecord,
}

impl<R: AsyncRead + Unpin + Send + 'static> AsyncReader<R> {
    /// Create a new AsyncReader from an async reader
    pub fn new(reader: R) -> Self {
        let csv_reader = AsyncReaderBuilder::new()
            .flexible(true)
            .trim(csv_async::Trim::All)
            .create_reader(reader);

        Self {
            csv_reader,
            record: StringRecord::new(),
        }
    }

    /// Read a batch of transaction records
    ///
    /// Reads up to `batch_size` records, converting them to
    /// TransactionRecords. Returns an empty vector once the end of the input
    /// is reached.
    ///
    /// # Errors
    ///
    /// Returns the first CSV structure error (with its physical line number),
    /// row with more fields than the header, or record contract violation
    /// encountered.
    pub async fn read_batch(
        &mut self,
        batch_size: usize,
    ) -> Result<Vec<TransactionRecord>, ReportError> {
        // Cached by the reader after the first call
        let headers = self.csv_reader.headers().await.map(StringRecord::clone);
        let headers = headers.map_err(|e| self.parse_error(e))?;

        let mut batch = Vec::with_capacity(batch_size);
        while batch.len() < batch_size {
            match self.csv_reader.read_record(&mut self.record).await {
                Ok(true) => batch.push(self.convert_current(&headers)?),
                Ok(false) => break,
                Err(e) => return Err(self.parse_error(e)),
            }
        }

        Ok(batch)
    }

    /// Validate the shape of the last row read and convert it
    fn convert_current(&self, headers: &StringRecord) -> Result<TransactionRecord, ReportError> {
        let line = self.record.position().map(|pos| pos.line());
        check_field_count(self.record.len(), headers.len(), line)?;

        let csv_record: CsvRecord = self.record.deserialize(Some(headers))?;
        convert_csv_record(csv_record).inspect_err(|e| {
            tracing::error!(?line, "rejected record: {}", e);
        })
    }

    /// Map a reader error, falling back to the reader position for its line
    fn parse_error(&self, error: csv_async::Error) -> ReportError {
        let line = self.csv_reader.position().line();
        ReportError::from(error).at_line(line)
    }
}
