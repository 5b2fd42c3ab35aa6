//! Report-related types for the cash-flow report
//!
//! This module defines the four reporting buckets, the reporting period, the
//! per-record row view and the final `CashFlowReport` produced by the
//! aggregator.

use super::error::ReportError;
use super::transaction::{Direction, PaymentMode, RecordId, TransactionRecord};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// One of the four mutually exclusive classification slots
///
/// Declaration order is the column order used by every renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
    /// Cash received
    CashReceipts,

    /// Money received through any non-cash instrument
    BankReceipts,

    /// Cash paid out
    CashPayments,

    /// Money paid out through any non-cash instrument
    BankPayments,
}

impl Bucket {
    /// All buckets in column order
    pub const ALL: [Bucket; 4] = [
        Bucket::CashReceipts,
        Bucket::BankReceipts,
        Bucket::CashPayments,
        Bucket::BankPayments,
    ];

    /// Combine the payment-mode family and the direction family
    ///
    /// Total over every direction and payment mode.
    pub fn from_parts(direction: Direction, payment_mode: PaymentMode) -> Self {
        match (direction, payment_mode.is_cash()) {
            (Direction::Inwards, true) => Bucket::CashReceipts,
            (Direction::Inwards, false) => Bucket::BankReceipts,
            (Direction::Outwards, true) => Bucket::CashPayments,
            (Direction::Outwards, false) => Bucket::BankPayments,
        }
    }

    /// Position of this bucket in `Bucket::ALL`
    pub fn index(&self) -> usize {
        match self {
            Bucket::CashReceipts => 0,
            Bucket::BankReceipts => 1,
            Bucket::CashPayments => 2,
            Bucket::BankPayments => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Bucket::CashReceipts => "cash_receipts",
            Bucket::BankReceipts => "bank_receipts",
            Bucket::CashPayments => "cash_payments",
            Bucket::BankPayments => "bank_payments",
        }
    }

    /// Column heading for printable output
    pub fn title(&self) -> &'static str {
        match self {
            Bucket::CashReceipts => "Cash Receipts",
            Bucket::BankReceipts => "Bank Receipts",
            Bucket::CashPayments => "Cash Payments",
            Bucket::BankPayments => "Bank Payments",
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Inclusive calendar range a report is generated for
///
/// The aggregator only carries the period into the report header. Filtering
/// records by period is the record supplier's job (see `contains`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportPeriod {
    start: NaiveDate,
    end: NaiveDate,
}

impl ReportPeriod {
    /// Create a period, rejecting a start that falls after the end
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ReportError> {
        if start > end {
            return Err(ReportError::invalid_period(start, end));
        }
        Ok(ReportPeriod { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Whether `date` falls inside the period, both bounds included
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} to {}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}

/// Ledger line for one record
///
/// Exactly one of the four bucket cells is populated. The others hold `None`,
/// which renderers show as an empty placeholder rather than `0`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowView {
    id: RecordId,
    date: NaiveDate,
    category: String,
    direction: Direction,
    payment_mode: PaymentMode,
    bucket: Bucket,
    cash_receipts: Option<Decimal>,
    bank_receipts: Option<Decimal>,
    cash_payments: Option<Decimal>,
    bank_payments: Option<Decimal>,
}

impl RowView {
    /// Build the row for a record that has already been classified
    pub fn new(record: &TransactionRecord, bucket: Bucket) -> Self {
        let cell = |b: Bucket| (b == bucket).then_some(record.amount);
        RowView {
            id: record.id.clone(),
            date: record.date,
            category: record.category.clone(),
            direction: record.direction,
            payment_mode: record.payment_mode,
            bucket,
            cash_receipts: cell(Bucket::CashReceipts),
            bank_receipts: cell(Bucket::BankReceipts),
            cash_payments: cell(Bucket::CashPayments),
            bank_payments: cell(Bucket::BankPayments),
        }
    }

    pub fn id(&self) -> &RecordId {
        &self.id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn payment_mode(&self) -> PaymentMode {
        self.payment_mode
    }

    /// The bucket this row was classified into
    pub fn bucket(&self) -> Bucket {
        self.bucket
    }

    /// Cell value for `bucket`, `None` when the row belongs elsewhere
    pub fn cell(&self, bucket: Bucket) -> Option<Decimal> {
        match bucket {
            Bucket::CashReceipts => self.cash_receipts,
            Bucket::BankReceipts => self.bank_receipts,
            Bucket::CashPayments => self.cash_payments,
            Bucket::BankPayments => self.bank_payments,
        }
    }

    /// All four cells in column order
    pub fn cells(&self) -> [Option<Decimal>; 4] {
        Bucket::ALL.map(|b| self.cell(b))
    }

    /// Amount carried by the populated cell
    pub fn amount(&self) -> Decimal {
        self.cell(self.bucket).unwrap_or(Decimal::ZERO)
    }
}

/// Non-fatal conditions noticed while building a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportWarning {
    /// No records for the period; all totals are zero
    EmptyInput,
}

impl fmt::Display for ReportWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportWarning::EmptyInput => f.write_str("no transactions in period"),
        }
    }
}

/// Aggregated cash-flow report, ready for rendering
///
/// Amounts keep full decimal precision; rounding for display is left to the
/// renderers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CashFlowReport {
    /// Ledger rows sorted by date, input order kept for equal dates
    pub rows: Vec<RowView>,

    pub total_cash_receipts: Decimal,
    pub total_bank_receipts: Decimal,
    pub total_cash_payments: Decimal,
    pub total_bank_payments: Decimal,

    /// Cash receipts plus cash payments (gross movement, not a balance)
    pub cash_net: Decimal,

    /// Bank receipts plus bank payments (gross movement, not a balance)
    pub bank_net: Decimal,

    /// Cash and bank movement combined
    pub combined_net: Decimal,

    /// Reporting period, for the report header
    pub period: ReportPeriod,

    pub warnings: Vec<ReportWarning>,
}

impl CashFlowReport {
    /// Total for a single bucket
    pub fn total(&self, bucket: Bucket) -> Decimal {
        match bucket {
            Bucket::CashReceipts => self.total_cash_receipts,
            Bucket::BankReceipts => self.total_bank_receipts,
            Bucket::CashPayments => self.total_cash_payments,
            Bucket::BankPayments => self.total_bank_payments,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
