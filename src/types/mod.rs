//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `transaction`: Transaction records, identifiers and their closed enums
//! - `report`: Buckets, reporting period, row view and the final report
//! - `error`: Error types for report generation

pub mod error;
pub mod report;
pub mod transaction;

pub use error::{RecordField, ReportError};
pub use report::{Bucket, CashFlowReport, ReportPeriod, ReportWarning, RowView};
pub use transaction::{Direction, PaymentMode, RecordId, TransactionRecord};
