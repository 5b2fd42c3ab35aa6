//! Transaction-related types for the cash-flow report
//!
//! This module defines the normalized record shape every entry must satisfy
//! before it reaches the aggregator, together with the closed enums for
//! direction and payment mode.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Record identifier
///
/// Upstream systems hand out either integer or string ids. Both are kept
/// as their textual form so that ids round-trip unchanged into the report.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        RecordId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        RecordId(id.to_string())
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        RecordId(id)
    }
}

impl From<u64> for RecordId {
    fn from(id: u64) -> Self {
        RecordId(id.to_string())
    }
}

/// Whether money is received or paid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Money received (receipts)
    Inwards,

    /// Money paid out (payments, expenses)
    Outwards,
}

impl Direction {
    /// Parse a direction label, ignoring case and surrounding whitespace
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "inwards" => Some(Direction::Inwards),
            "outwards" => Some(Direction::Outwards),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Direction::Inwards => "Inwards",
            Direction::Outwards => "Outwards",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Settlement instrument used for a transaction
///
/// Only "cash vs. everything else" matters for bucketing, but the concrete
/// instrument is kept for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMode {
    #[serde(rename = "CASH")]
    Cash,
    #[serde(rename = "CHEQUE")]
    Cheque,
    #[serde(rename = "BANK WIRE")]
    BankWire,
    #[serde(rename = "BANK TRANSFER")]
    BankTransfer,
    #[serde(rename = "CARD")]
    Card,
}

impl PaymentMode {
    /// Parse a payment mode label
    ///
    /// Matching is case-insensitive, trims surrounding whitespace and accepts
    /// `_` in place of the inner space (`BANK_WIRE`).
    pub fn from_label(label: &str) -> Option<Self> {
        let normalized = label.trim().to_uppercase().replace('_', " ");
        match normalized.as_str() {
            "CASH" => Some(PaymentMode::Cash),
            "CHEQUE" => Some(PaymentMode::Cheque),
            "BANK WIRE" => Some(PaymentMode::BankWire),
            "BANK TRANSFER" => Some(PaymentMode::BankTransfer),
            "CARD" => Some(PaymentMode::Card),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMode::Cash => "CASH",
            PaymentMode::Cheque => "CHEQUE",
            PaymentMode::BankWire => "BANK WIRE",
            PaymentMode::BankTransfer => "BANK TRANSFER",
            PaymentMode::Card => "CARD",
        }
    }

    /// True for the cash family, false for every bank instrument
    pub fn is_cash(&self) -> bool {
        match self {
            PaymentMode::Cash => true,
            PaymentMode::Cheque
            | PaymentMode::BankWire
            | PaymentMode::BankTransfer
            | PaymentMode::Card => false,
        }
    }
}

impl fmt::Display for PaymentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single dated financial transaction
///
/// Records are read-only snapshots handed over by the record supplier for a
/// reporting period. The aggregator only ever borrows them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Stable identifier of the record
    pub id: RecordId,

    /// Calendar date the transaction is recorded against (no time component)
    pub date: NaiveDate,

    /// Money received or paid
    pub direction: Direction,

    /// Settlement instrument
    pub payment_mode: PaymentMode,

    /// Non-negative amount in the single reporting currency
    pub amount: Decimal,

    /// Free-text label, display only
    pub category: String,
}
