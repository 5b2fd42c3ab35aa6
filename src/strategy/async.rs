//! Asynchronous batch loading strategy
//!
//! This module provides an asynchronous implementation of the
//! ProcessingStrategy trait. Records are read in batches through
//! `AsyncReader` on a current-thread tokio runtime, filtered to the requested
//! period and appended in file order.
//!
//! # Architecture
//!
//! ```text
//! AsyncProcessingStrategy
//!     ├── BatchConfig (batch_size)
//!     ├── tokio::fs::File + compat layer
//!     └── AsyncReader (batch CSV reading)
//! ```
//!
//! Batches are consumed one after another so the loaded list keeps the order
//! of the input file, exactly like the synchronous strategy.

use crate::io::async_reader::AsyncReader;
use crate::strategy::{within_period, ProcessingStrategy};
use crate::types::{ReportError, ReportPeriod, TransactionRecord};
use std::path::Path;
use tokio_util::compat::TokioAsyncReadCompatExt;

/// Configuration for batch loading
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BatchConfig {
    /// Number of records per batch
    pub batch_size: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self { batch_size: 1000 }
    }
}

impl BatchConfig {
    /// Create a new BatchConfig, falling back to the default for a zero size
    pub fn new(batch_size: usize) -> Self {
        let default = Self::default();

        let batch_size = if batch_size == 0 {
            tracing::warn!(
                batch_size,
                default = default.batch_size,
                "invalid batch size, using default"
            );
            default.batch_size
        } else {
            batch_size
        };

        Self { batch_size }
    }
}

/// Asynchronous batch loading strategy
///
/// # Configuration
///
/// The strategy accepts a BatchConfig with:
/// - `batch_size`: Number of records per batch (default: 1000)
#[derive(Debug, Clone)]
pub struct AsyncProcessingStrategy {
    config: BatchConfig,
}

impl AsyncProcessingStrategy {
    /// Create a new AsyncProcessingStrategy with the specified configuration
    pub fn new(config: BatchConfig) -> Self {
        Self { config }
    }

    async fn load(
        &self,
        input_path: &Path,
        period: ReportPeriod,
    ) -> Result<Vec<TransactionRecord>, ReportError> {
        let file = tokio::fs::File::open(input_path)
            .await
            .map_err(|e| ReportError::open_failed(input_path, e))?;

        // csv-async reads futures::io::AsyncRead, not tokio's
        let mut reader = AsyncReader::new(file.compat());

        let mut records = Vec::new();
        let mut batches = 0usize;
        loop {
            let batch = reader.read_batch(self.config.batch_size).await?;
            if batch.is_empty() {
                break;
            }
            batches += 1;
            tracing::debug!(batch = batches, size = batch.len(), "read batch");

            records.extend(
                batch
                    .into_iter()
                    .filter(|record| within_period(record, period)),
            );
        }

        tracing::info!(
            path = %input_path.display(),
            records = records.len(),
            batches,
            "loaded records"
        );
        Ok(records)
    }
}

impl ProcessingStrategy for AsyncProcessingStrategy {
    /// Load the records of a period using batched async reads
    ///
    /// A current-thread runtime is created per call; the first batch error
    /// aborts the load.
    fn load_records(
        &self,
        input_path: &Path,
        period: ReportPeriod,
    ) -> Result<Vec<TransactionRecord>, ReportError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .map_err(|e| ReportError::IoError {
                message: format!("Failed to create tokio runtime: {}", e),
            })?;

        runtime.block_on(self.load(input_path, period))
    }
}
