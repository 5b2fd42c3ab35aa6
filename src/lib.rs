//! Cash Flow Report Library
//! # Overview
//!
//! This library builds a period cash flow report from bookkeeping
//! transactions, with a synchronous and a batched asynchronous CSV loading
//! strategy.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (TransactionRecord, CashFlowReport, etc.)
//! - [`cli`] - CLI arguments parsing and log setup
//! - [`core`] - Business logic components:
//!   - [`core::classifier`] - Bucket selection for a single record
//!   - [`core::aggregator`] - Sorted ledger rows, bucket totals and nets
//! - [`io`] - CSV readers and the csv / text / json report renderers
//! - [`strategy`] - Pluggable loading strategies driving the pipeline
//!
//! # Buckets
//!
//! Every record lands in exactly one of four buckets:
//!
//! - **Cash Receipts**: inwards, paid in cash
//! - **Bank Receipts**: inwards, paid by cheque, bank wire, bank transfer or card
//! - **Cash Payments**: outwards, paid in cash
//! - **Bank Payments**: outwards, any other payment mode
//!
//! # Nets
//!
//! `cash_net` and `bank_net` are gross movements: receipts plus payments of
//! the channel. `combined_net` is their sum.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod strategy;
pub mod types;

pub use core::{aggregate, classify};
pub use io::write_report;
pub use types::{
    Bucket, CashFlowReport, Direction, PaymentMode, RecordId, ReportError, ReportPeriod,
    ReportWarning, RowView, TransactionRecord,
};
