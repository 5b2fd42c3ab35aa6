//! Printable text rendering of a cash-flow report
//!
//! Renders the ledger as a table with one column per bucket, followed by the
//! totals row and the cash, bank and combined movement lines. Amounts are
//! shown with two decimals and thousands separators; cells a row does not
//! belong to are shown as `-` so that "no value" never reads as "zero".

use crate::types::{Bucket, CashFlowReport, ReportError};
use comfy_table::{Cell, CellAlignment, Table};
use rust_decimal::{Decimal, RoundingStrategy};
use std::io::Write;

const EMPTY_CELL: &str = "-";

/// Format an amount with two decimals and thousands separators: 1,234.56
pub fn money(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded < Decimal::ZERO;
    let fixed = format!("{:.2}", rounded.abs());
    let (int_part, dec_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut with_commas = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            with_commas.push(',');
        }
        with_commas.push(c);
    }
    let with_commas: String = with_commas.chars().rev().collect();

    if negative {
        format!("-{with_commas}.{dec_part}")
    } else {
        format!("{with_commas}.{dec_part}")
    }
}

fn amount_cell(value: Option<Decimal>) -> Cell {
    let text = value.map(money).unwrap_or_else(|| EMPTY_CELL.to_string());
    Cell::new(text).set_alignment(CellAlignment::Right)
}

/// Render a report as printable text
pub fn format_report(report: &CashFlowReport) -> String {
    let mut table = Table::new();

    let mut header = vec!["Date", "ID", "Category", "Mode"];
    header.extend(Bucket::ALL.iter().map(|b| b.title()));
    table.set_header(header);

    for row in &report.rows {
        let mut cells = vec![
            Cell::new(row.date().format("%Y-%m-%d")),
            Cell::new(row.id()),
            Cell::new(row.category()),
            Cell::new(row.payment_mode()),
        ];
        cells.extend(row.cells().into_iter().map(amount_cell));
        table.add_row(cells);
    }

    let mut total = vec![Cell::new("Total"), Cell::new(""), Cell::new(""), Cell::new("")];
    total.extend(Bucket::ALL.iter().map(|b| amount_cell(Some(report.total(*b)))));
    table.add_row(total);

    let mut out = format!("Cash Flow Report\nPeriod: {}\n", report.period);
    if report.is_empty() {
        out.push_str("No transactions in period.\n");
    }
    out.push_str(&format!("{table}\n"));
    out.push_str(&format!("Cash movement:     {}\n", money(report.cash_net)));
    out.push_str(&format!("Bank movement:     {}\n", money(report.bank_net)));
    out.push_str(&format!("Combined movement: {}\n", money(report.combined_net)));
    out
}

/// Write the printable text rendering of a report
pub fn write_report_text(
    report: &CashFlowReport,
    output: &mut dyn Write,
) -> Result<(), ReportError> {
    output.write_all(format_report(report).as_bytes())?;
    output.flush()?;
    Ok(())
}
