//! Cash-flow aggregator
//!
//! Folds a list of records into a `CashFlowReport`: a date-sorted ledger of
//! row views plus per-bucket totals and the cash/bank movement figures.
//!
//! The aggregation is a single synchronous pass over borrowed input. It does
//! not filter by period, does not touch the clock and keeps no state between
//! calls, so independent reports can be built concurrently without locking.
//!
//! # Totals
//!
//! - Each bucket total is the sum of its rows and is a real `0` when empty.
//! - `cash_net = cash_receipts + cash_payments`
//! - `bank_net = bank_receipts + bank_payments`
//! - `combined_net = cash_net + bank_net`
//!
//! Receipts and payments are added, not subtracted: the figures report gross
//! movement through each channel, matching the printed report.

use crate::core::classifier::classify;
use crate::types::{
    Bucket, CashFlowReport, ReportError, ReportPeriod, ReportWarning, RowView, TransactionRecord,
};
use rust_decimal::Decimal;

/// Running per-bucket sums, indexed by `Bucket::index`
#[derive(Debug, Default)]
struct BucketTotals {
    sums: [Decimal; 4],
}

impl BucketTotals {
    fn add(&mut self, bucket: Bucket, amount: Decimal) -> Result<(), ReportError> {
        let slot = &mut self.sums[bucket.index()];
        *slot = slot
            .checked_add(amount)
            .ok_or_else(|| ReportError::arithmetic_overflow(bucket.label()))?;
        Ok(())
    }

    fn get(&self, bucket: Bucket) -> Decimal {
        self.sums[bucket.index()]
    }
}

fn checked_sum(a: Decimal, b: Decimal, total: &str) -> Result<Decimal, ReportError> {
    a.checked_add(b)
        .ok_or_else(|| ReportError::arithmetic_overflow(total))
}

/// Build a cash-flow report from `records`
///
/// Records are ordered by date ascending; records sharing a date keep their
/// input order. `period` is carried into the report for the header only.
///
/// An empty input is a valid outcome: the report has no rows, all totals at
/// zero and an `EmptyInput` warning.
///
/// # Errors
///
/// - `ReportError::InvalidRecord` if any record breaks its contract. The
///   whole aggregation is abandoned; no partial report is returned.
/// - `ReportError::ArithmeticOverflow` if a total leaves the decimal range.
pub fn aggregate(
    records: &[TransactionRecord],
    period: ReportPeriod,
) -> Result<CashFlowReport, ReportError> {
    let mut ordered: Vec<&TransactionRecord> = records.iter().collect();
    // `sort_by_key` is stable, which keeps same-day records in input order
    ordered.sort_by_key(|record| record.date);

    let mut totals = BucketTotals::default();
    let mut rows = Vec::with_capacity(ordered.len());

    for record in ordered {
        let bucket = classify(record)?;
        totals.add(bucket, record.amount)?;
        rows.push(RowView::new(record, bucket));
    }

    let cash_net = checked_sum(
        totals.get(Bucket::CashReceipts),
        totals.get(Bucket::CashPayments),
        "cash_net",
    )?;
    let bank_net = checked_sum(
        totals.get(Bucket::BankReceipts),
        totals.get(Bucket::BankPayments),
        "bank_net",
    )?;
    let combined_net = checked_sum(cash_net, bank_net, "combined_net")?;

    let mut warnings = Vec::new();
    if rows.is_empty() {
        tracing::warn!(%period, "no transactions to aggregate; report totals are zero");
        warnings.push(ReportWarning::EmptyInput);
    }

    tracing::info!(
        %period,
        rows = rows.len(),
        %cash_net,
        %bank_net,
        "aggregated cash-flow report"
    );

    Ok(CashFlowReport {
        rows,
        total_cash_receipts: totals.get(Bucket::CashReceipts),
        total_bank_receipts: totals.get(Bucket::BankReceipts),
        total_cash_payments: totals.get(Bucket::CashPayments),
        total_bank_payments: totals.get(Bucket::BankPayments),
        cash_net,
        bank_net,
        combined_net,
        period,
        warnings,
    })
}
