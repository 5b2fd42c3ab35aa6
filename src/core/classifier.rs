//! Bucket classifier
//!
//! Assigns every record to exactly one of the four reporting buckets. The
//! cash/bank family comes from the payment mode and the receipts/payments
//! family from the direction; the two combine into four disjoint buckets.

use crate::types::{Bucket, RecordField, ReportError, TransactionRecord};
use rust_decimal::Decimal;

/// Classify a single record
///
/// Direction and payment mode are closed enums, so every combination maps to
/// a bucket. The record is still checked against its contract: a negative
/// amount is rejected rather than silently landing in a total.
///
/// # Errors
///
/// Returns `ReportError::InvalidRecord` naming the amount field and the
/// record id when `amount < 0`.
pub fn classify(record: &TransactionRecord) -> Result<Bucket, ReportError> {
    if record.amount < Decimal::ZERO {
        return Err(ReportError::invalid_record(
            record.id.as_str(),
            RecordField::Amount,
            &record.amount.to_string(),
        ));
    }

    Ok(Bucket::from_parts(record.direction, record.payment_mode))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Direction, PaymentMode, RecordId};
    use chrono::NaiveDate;
    use rstest::rstest;

    fn record(
        direction: Direction,
        payment_mode: PaymentMode,
        amount: Decimal,
    ) -> TransactionRecord {
        TransactionRecord {
            id: RecordId::from(7u64),
            date: NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
            direction,
            payment_mode,
            amount,
            category: "Freight".to_string(),
        }
    }

    #[rstest]
    #[case::cash_receipt(Direction::Inwards, PaymentMode::Cash, Bucket::CashReceipts)]
    #[case::cheque_receipt(Direction::Inwards, PaymentMode::Cheque, Bucket::BankReceipts)]
    #[case::wire_receipt(Direction::Inwards, PaymentMode::BankWire, Bucket::BankReceipts)]
    #[case::cash_payment(Direction::Outwards, PaymentMode::Cash, Bucket::CashPayments)]
    #[case::card_payment(Direction::Outwards, PaymentMode::Card, Bucket::BankPayments)]
    #[case::transfer_payment(Direction::Outwards, PaymentMode::BankTransfer, Bucket::BankPayments)]
    fn test_classify_valid_records(
        #[case] direction: Direction,
        #[case] mode: PaymentMode,
        #[case] expected: Bucket,
    ) {
        let result = classify(&record(direction, mode, Decimal::new(100, 0)));
        assert_eq!(result, Ok(expected));
    }

    #[test]
    fn test_classify_accepts_zero_amount() {
        let result = classify(&record(Direction::Inwards, PaymentMode::Cash, Decimal::ZERO));
        assert_eq!(result, Ok(Bucket::CashReceipts));
    }

    #[test]
    fn test_classify_rejects_negative_amount() {
        let result = classify(&record(
            Direction::Outwards,
            PaymentMode::Cash,
            Decimal::new(-1050, 2),
        ));

        assert_eq!(
            result,
            Err(ReportError::InvalidRecord {
                record: "7".to_string(),
                field: RecordField::Amount,
                value: "-10.50".to_string(),
            })
        );
    }

    #[test]
    fn test_every_combination_lands_in_exactly_one_bucket() {
        let modes = [
            PaymentMode::Cash,
            PaymentMode::Cheque,
            PaymentMode::BankWire,
            PaymentMode::BankTransfer,
            PaymentMode::Card,
        ];

        for direction in [Direction::Inwards, Direction::Outwards] {
            for mode in modes {
                let bucket = classify(&record(direction, mode, Decimal::ONE)).unwrap();
                let matches = Bucket::ALL.iter().filter(|b| **b == bucket).count();
                assert_eq!(matches, 1, "{:?}/{:?} -> {:?}", direction, mode, bucket);
            }
        }
    }
}
