//! CSV format handling for transaction records and report export
//!
//! This module centralizes all CSV format concerns, providing:
//! - CsvRecord structure for deserialization
//! - Conversion from CSV records to domain types (the data-contract boundary)
//! - Report export as CSV
//!
//! All functions are pure (no file I/O) for easy testing.

use crate::types::{
    Bucket, CashFlowReport, Direction, PaymentMode, RecordField, RecordId, ReportError,
    TransactionRecord,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Write;
use std::str::FromStr;

/// Header written before the report rows
pub const REPORT_HEADER: [&str; 8] = [
    "date",
    "id",
    "category",
    "payment_mode",
    "cash_receipts",
    "bank_receipts",
    "cash_payments",
    "bank_payments",
];

/// CSV record structure for deserialization
///
/// Matches the input CSV format with columns:
/// id, date, direction, payment_mode, amount, category.
/// Every field is kept as raw text so that contract violations can be
/// reported with the offending value and record id.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvRecord {
    pub id: String,
    pub date: String,
    pub direction: String,
    pub payment_mode: String,
    pub amount: String,
    #[serde(default)]
    pub category: Option<String>,
}

/// Convert a CsvRecord to a TransactionRecord
///
/// This function:
/// - Requires a non-empty id
/// - Parses the date strictly as `YYYY-MM-DD` into a calendar date
/// - Parses direction and payment mode into their closed enums
/// - Parses the amount into a Decimal and rejects negative values
///
/// # Errors
///
/// Returns `ReportError::InvalidRecord` naming the first field that fails,
/// its raw value and the record id.
pub fn convert_csv_record(csv_record: CsvRecord) -> Result<TransactionRecord, ReportError> {
    let id = csv_record.id.trim();
    if id.is_empty() {
        return Err(ReportError::invalid_record(
            "<missing>",
            RecordField::Id,
            &csv_record.id,
        ));
    }

    let date = NaiveDate::parse_from_str(csv_record.date.trim(), "%Y-%m-%d")
        .map_err(|_| ReportError::invalid_record(id, RecordField::Date, &csv_record.date))?;

    let direction = Direction::from_label(&csv_record.direction).ok_or_else(|| {
        ReportError::invalid_record(id, RecordField::Direction, &csv_record.direction)
    })?;

    let payment_mode = PaymentMode::from_label(&csv_record.payment_mode).ok_or_else(|| {
        ReportError::invalid_record(id, RecordField::PaymentMode, &csv_record.payment_mode)
    })?;

    let amount = match Decimal::from_str(csv_record.amount.trim()) {
        Ok(amount) if amount >= Decimal::ZERO => amount,
        _ => {
            return Err(ReportError::invalid_record(
                id,
                RecordField::Amount,
                &csv_record.amount,
            ))
        }
    };

    Ok(TransactionRecord {
        id: RecordId::from(id),
        date,
        direction,
        payment_mode,
        amount,
        category: csv_record.category.unwrap_or_default().trim().to_string(),
    })
}

/// Reject a row that carries more fields than the header
///
/// Rows may be shorter than the header (the trailing `category` column is
/// optional), but surplus fields mean the row was split wrongly, as with an
/// unquoted `1,000.00` amount.
///
/// # Errors
///
/// Returns `ReportError::ParseError` at `line` when `fields > header_fields`.
pub fn check_field_count(
    fields: usize,
    header_fields: usize,
    line: Option<u64>,
) -> Result<(), ReportError> {
    if fields > header_fields {
        return Err(ReportError::ParseError {
            line,
            message: format!(
                "found record with {} fields, but the header has {}",
                fields, header_fields
            ),
        });
    }
    Ok(())
}

fn format_cell(cell: Option<Decimal>) -> String {
    cell.map(|amount| amount.normalize().to_string())
        .unwrap_or_default()
}

/// Write a report in CSV format
///
/// Writes one line per row with columns:
/// date, id, category, payment_mode, cash_receipts, bank_receipts,
/// cash_payments, bank_payments. Bucket cells a row does not belong to are
/// left empty. A final `TOTAL` line carries the four bucket totals.
/// Amounts are written at full precision with trailing zeros removed.
///
/// # Errors
///
/// Returns `ReportError::OutputError` if a write fails.
pub fn write_report_csv(
    report: &CashFlowReport,
    output: &mut dyn Write,
) -> Result<(), ReportError> {
    use csv::Writer;

    let mut writer = Writer::from_writer(output);

    writer
        .write_record(REPORT_HEADER)
        .map_err(|e| ReportError::output(format!("failed to write CSV header: {}", e)))?;

    for row in &report.rows {
        let mut line = vec![
            row.date().format("%Y-%m-%d").to_string(),
            row.id().to_string(),
            row.category().to_string(),
            row.payment_mode().to_string(),
        ];
        line.extend(row.cells().into_iter().map(format_cell));

        writer
            .write_record(&line)
            .map_err(|e| {
                ReportError::output(format!("failed to write row {}: {}", row.id(), e))
            })?;
    }

    let mut total = vec![String::new(), String::new(), "TOTAL".to_string(), String::new()];
    total.extend(Bucket::ALL.iter().map(|b| format_cell(Some(report.total(*b)))));
    writer
        .write_record(&total)
        .map_err(|e| ReportError::output(format!("failed to write totals: {}", e)))?;

    writer
        .flush()
        .map_err(|e| ReportError::output(format!("failed to flush output: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::aggregate;
    use crate::types::ReportPeriod;
    use rstest::rstest;

    fn csv_record(
        id: &str,
        date: &str,
        direction: &str,
        payment_mode: &str,
        amount: &str,
    ) -> CsvRecord {
        CsvRecord {
            id: id.to_string(),
            date: date.to_string(),
            direction: direction.to_string(),
            payment_mode: payment_mode.to_string(),
            amount: amount.to_string(),
            category: Some("Port charges".to_string()),
        }
    }

    fn january() -> ReportPeriod {
        ReportPeriod::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        )
        .unwrap()
    }

    #[rstest]
    #[case("Inwards", "CASH", Direction::Inwards, PaymentMode::Cash)]
    #[case("outwards", "bank wire", Direction::Outwards, PaymentMode::BankWire)]
    #[case("INWARDS", "BANK_TRANSFER", Direction::Inwards, PaymentMode::BankTransfer)]
    #[case("Outwards", "Cheque", Direction::Outwards, PaymentMode::Cheque)]
    fn test_convert_csv_record_valid(
        #[case] direction: &str,
        #[case] mode: &str,
        #[case] expected_direction: Direction,
        #[case] expected_mode: PaymentMode,
    ) {
        let result =
            convert_csv_record(csv_record("42", "2024-01-05", direction, mode, "100.50"));

        let record = result.unwrap();
        assert_eq!(record.id, RecordId::from(42u64));
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        assert_eq!(record.direction, expected_direction);
        assert_eq!(record.payment_mode, expected_mode);
        assert_eq!(record.amount, Decimal::new(10050, 2));
        assert_eq!(record.category, "Port charges");
    }

    #[rstest]
    #[case::unknown_mode("1", "2024-01-05", "Inwards", "UNKNOWN", "10", RecordField::PaymentMode, "UNKNOWN")]
    #[case::unknown_direction("1", "2024-01-05", "Sideways", "CASH", "10", RecordField::Direction, "Sideways")]
    #[case::negative_amount("1", "2024-01-05", "Inwards", "CASH", "-10", RecordField::Amount, "-10")]
    #[case::non_numeric_amount("1", "2024-01-05", "Inwards", "CASH", "ten", RecordField::Amount, "ten")]
    #[case::empty_amount("1", "2024-01-05", "Inwards", "CASH", "", RecordField::Amount, "")]
    #[case::slashed_date("1", "05/01/2024", "Inwards", "CASH", "10", RecordField::Date, "05/01/2024")]
    #[case::impossible_date("1", "2024-02-30", "Inwards", "CASH", "10", RecordField::Date, "2024-02-30")]
    #[case::datetime("1", "2024-01-05T10:00:00Z", "Inwards", "CASH", "10", RecordField::Date, "2024-01-05T10:00:00Z")]
    fn test_convert_csv_record_errors(
        #[case] id: &str,
        #[case] date: &str,
        #[case] direction: &str,
        #[case] mode: &str,
        #[case] amount: &str,
        #[case] field: RecordField,
        #[case] value: &str,
    ) {
        let result = convert_csv_record(csv_record(id, date, direction, mode, amount));

        assert_eq!(
            result,
            Err(ReportError::InvalidRecord {
                record: id.to_string(),
                field,
                value: value.to_string(),
            })
        );
    }

    #[test]
    fn test_convert_csv_record_requires_id() {
        let result = convert_csv_record(csv_record("  ", "2024-01-05", "Inwards", "CASH", "1"));
        assert!(matches!(
            result,
            Err(ReportError::InvalidRecord {
                field: RecordField::Id,
                ..
            })
        ));
    }

    #[rstest]
    #[case::shorter_than_header(5, 6)]
    #[case::same_as_header(6, 6)]
    fn test_check_field_count_accepts(#[case] fields: usize, #[case] header_fields: usize) {
        assert!(check_field_count(fields, header_fields, Some(2)).is_ok());
    }

    #[test]
    fn test_check_field_count_rejects_surplus_fields() {
        let result = check_field_count(7, 6, Some(4));

        assert_eq!(
            result,
            Err(ReportError::ParseError {
                line: Some(4),
                message: "found record with 7 fields, but the header has 6".to_string(),
            })
        );
    }

    #[test]
    fn test_convert_csv_record_missing_category_is_empty() {
        let mut raw = csv_record("3", "2024-01-05", "Inwards", "CARD", "1.25");
        raw.category = None;

        let record = convert_csv_record(raw).unwrap();
        assert_eq!(record.category, "");
    }

    #[test]
    fn test_write_report_csv_rows_and_totals() {
        let records = vec![
            convert_csv_record(csv_record("1", "2024-01-05", "Outwards", "CASH", "100.00"))
                .unwrap(),
            convert_csv_record(csv_record(
                "2",
                "2024-01-03",
                "Inwards",
                "BANK WIRE",
                "250.50",
            ))
            .unwrap(),
        ];
        let report = aggregate(&records, january()).unwrap();

        let mut output = Vec::new();
        write_report_csv(&report, &mut output).unwrap();

        let expected = "date,id,category,payment_mode,cash_receipts,bank_receipts,cash_payments,bank_payments\n\
            2024-01-03,2,Port charges,BANK WIRE,,250.5,,\n\
            2024-01-05,1,Port charges,CASH,,,100,\n\
            ,,TOTAL,,0,250.5,100,0\n";
        assert_eq!(String::from_utf8(output).unwrap(), expected);
    }

    #[test]
    fn test_write_report_csv_empty_report() {
        let report = aggregate(&[], january()).unwrap();

        let mut output = Vec::new();
        write_report_csv(&report, &mut output).unwrap();

        let expected = "date,id,category,payment_mode,cash_receipts,bank_receipts,cash_payments,bank_payments\n\
            ,,TOTAL,,0,0,0,0\n";
        assert_eq!(String::from_utf8(output).unwrap(), expected);
    }
}
