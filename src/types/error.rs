//! Error types for the cash-flow report
//!
//! This module defines all error types that can occur while loading records
//! and building a report. Errors are designed to be descriptive and
//! user-friendly for CLI output.
//!
//! # Error Categories
//!
//! - **File I/O Errors**: File not found, permission denied, etc.
//! - **CSV Parsing Errors**: Malformed CSV structure
//! - **Record Errors**: A record breaks its data contract (unknown direction or
//!   payment mode, negative or non-numeric amount, bad date)
//! - **Arithmetic Errors**: Overflow while summing a bucket
//!
//! Every variant is fatal to the report being built.

use chrono::NaiveDate;
use std::fmt;
use thiserror::Error;

/// Record field named by an `InvalidRecord` error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordField {
    Id,
    Date,
    Direction,
    PaymentMode,
    Amount,
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecordField::Id => "id",
            RecordField::Date => "date",
            RecordField::Direction => "direction",
            RecordField::PaymentMode => "payment mode",
            RecordField::Amount => "amount",
        };
        f.write_str(name)
    }
}

/// Main error type for report generation
///
/// Each variant includes relevant context to help diagnose and resolve the
/// issue.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReportError {
    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading input or writing the report
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV structure could not be parsed
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// A record violates its data contract
    ///
    /// Aborts the whole aggregation; no partial report is produced.
    #[error("Invalid {field} '{value}' for record {record}")]
    InvalidRecord {
        /// Id of the offending record
        record: String,
        /// Field that failed validation
        field: RecordField,
        /// The rejected value as received
        value: String,
    },

    /// Reporting period starts after it ends
    #[error("Invalid reporting period: {start} is after {end}")]
    InvalidPeriod {
        start: NaiveDate,
        end: NaiveDate,
    },

    /// Summing would overflow the decimal range
    #[error("Arithmetic overflow while totalling {total}")]
    ArithmeticOverflow {
        /// Name of the total being computed
        total: String,
    },

    /// The rendered report could not be written
    #[error("Failed to write report: {message}")]
    OutputError {
        /// Description of the write failure
        message: String,
    },
}

impl From<std::io::Error> for ReportError {
    fn from(error: std::io::Error) -> Self {
        ReportError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for ReportError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        ReportError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl From<csv_async::Error> for ReportError {
    fn from(error: csv_async::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        ReportError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(error: serde_json::Error) -> Self {
        ReportError::OutputError {
            message: error.to_string(),
        }
    }
}

impl ReportError {
    /// Create an InvalidRecord error
    pub fn invalid_record(record: &str, field: RecordField, value: &str) -> Self {
        ReportError::InvalidRecord {
            record: record.to_string(),
            field,
            value: value.to_string(),
        }
    }

    /// Create an InvalidPeriod error
    pub fn invalid_period(start: NaiveDate, end: NaiveDate) -> Self {
        ReportError::InvalidPeriod { start, end }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(total: &str) -> Self {
        ReportError::ArithmeticOverflow {
            total: total.to_string(),
        }
    }

    /// Map a failure to open `path`, singling out a missing file
    pub fn open_failed(path: &std::path::Path, error: std::io::Error) -> Self {
        match error.kind() {
            std::io::ErrorKind::NotFound => ReportError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => ReportError::IoError {
                message: format!("Failed to open file '{}': {}", path.display(), error),
            },
        }
    }

    /// Create an OutputError
    pub fn output(message: impl fmt::Display) -> Self {
        ReportError::OutputError {
            message: message.to_string(),
        }
    }

    /// Attach a line number to a parse error that lacks one
    pub fn at_line(self, line: u64) -> Self {
        match self {
            ReportError::ParseError {
                line: None,
                message,
            } => ReportError::ParseError {
                line: Some(line),
                message,
            },
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[rstest]
    #[case::file_not_found(
        ReportError::FileNotFound { path: "ledger.csv".to_string() },
        "File not found: ledger.csv"
    )]
    #[case::io_error(
        ReportError::IoError { message: "Permission denied".to_string() },
        "I/O error: Permission denied"
    )]
    #[case::parse_error_with_line(
        ReportError::ParseError { line: Some(42), message: "Invalid field".to_string() },
        "CSV parse error at line 42: Invalid field"
    )]
    #[case::parse_error_without_line(
        ReportError::ParseError { line: None, message: "Invalid field".to_string() },
        "CSV parse error: Invalid field"
    )]
    #[case::invalid_payment_mode(
        ReportError::InvalidRecord { record: "17".to_string(), field: RecordField::PaymentMode, value: "UNKNOWN".to_string() },
        "Invalid payment mode 'UNKNOWN' for record 17"
    )]
    #[case::invalid_amount(
        ReportError::InvalidRecord { record: "EXP-3".to_string(), field: RecordField::Amount, value: "-5".to_string() },
        "Invalid amount '-5' for record EXP-3"
    )]
    #[case::invalid_period(
        ReportError::InvalidPeriod { start: date("2024-02-01"), end: date("2024-01-01") },
        "Invalid reporting period: 2024-02-01 is after 2024-01-01"
    )]
    #[case::arithmetic_overflow(
        ReportError::ArithmeticOverflow { total: "bank_receipts".to_string() },
        "Arithmetic overflow while totalling bank_receipts"
    )]
    fn test_error_display(#[case] error: ReportError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::invalid_record(
        ReportError::invalid_record("9", RecordField::Direction, "sideways"),
        ReportError::InvalidRecord { record: "9".to_string(), field: RecordField::Direction, value: "sideways".to_string() }
    )]
    #[case::invalid_period(
        ReportError::invalid_period(date("2024-02-01"), date("2024-01-01")),
        ReportError::InvalidPeriod { start: date("2024-02-01"), end: date("2024-01-01") }
    )]
    #[case::arithmetic_overflow(
        ReportError::arithmetic_overflow("cash_net"),
        ReportError::ArithmeticOverflow { total: "cash_net".to_string() }
    )]
    fn test_helper_functions(#[case] result: ReportError, #[case] expected: ReportError) {
        assert_eq!(result, expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: ReportError = io_error.into();
        assert!(matches!(error, ReportError::IoError { .. }));
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }

    #[test]
    fn test_open_failed_distinguishes_missing_file() {
        let path = std::path::Path::new("missing.csv");

        let missing = ReportError::open_failed(
            path,
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(
            missing,
            ReportError::FileNotFound {
                path: "missing.csv".to_string()
            }
        );

        let denied = ReportError::open_failed(
            path,
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(denied.to_string(), "I/O error: Failed to open file 'missing.csv': denied");
    }

    #[test]
    fn test_at_line_only_fills_missing_line() {
        let missing = ReportError::ParseError {
            line: None,
            message: "bad".to_string(),
        };
        assert_eq!(
            missing.at_line(3),
            ReportError::ParseError {
                line: Some(3),
                message: "bad".to_string()
            }
        );

        let present = ReportError::ParseError {
            line: Some(7),
            message: "bad".to_string(),
        };
        assert_eq!(
            present.clone().at_line(3),
            present
        );

        let other = ReportError::invalid_record("1", RecordField::Amount, "x");
        assert_eq!(other.clone().at_line(3), other);
    }
}
