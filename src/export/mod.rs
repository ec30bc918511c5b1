//! CSV and printable HTML exports of a transaction list.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use askama::Template;
use chrono::NaiveDate;
use tracing::info;

use crate::domain::Transaction;
use crate::errors::{FinanceError, Result};

pub const CSV_HEADER: [&str; 5] = ["Date", "Category", "Description", "Amount (₹)", "Type"];
const REPORT_TITLE: &str = "Student Expense Report";

#[derive(Template)]
#[template(path = "report.html")]
struct ReportTemplate {
    title: &'static str,
    generated_on: String,
    rows: Vec<ReportRow>,
}

struct ReportRow {
    date: String,
    category: String,
    description: String,
    amount: String,
    kind: &'static str,
}

impl From<&Transaction> for ReportRow {
    fn from(txn: &Transaction) -> Self {
        Self {
            date: display_date(txn.date),
            category: txn.category.clone(),
            description: txn.description.clone(),
            amount: plain_amount(txn.amount),
            kind: txn.kind.as_str(),
        }
    }
}

pub fn default_csv_file_name(date: NaiveDate) -> String {
    format!("student_expenses_{}.csv", date.format("%Y-%m-%d"))
}

pub fn default_report_file_name(date: NaiveDate) -> String {
    format!("student_expenses_{}.html", date.format("%Y-%m-%d"))
}

/// Writes one row per transaction in the order given.
pub fn write_csv(writer: impl Write, transactions: &[Transaction]) -> Result<()> {
    let mut csv = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    csv.write_record(CSV_HEADER)?;
    for txn in transactions {
        csv.write_record([
            txn.date.format("%Y-%m-%d").to_string(),
            txn.category.clone(),
            txn.description.clone(),
            plain_amount(txn.amount),
            txn.kind.as_str().to_string(),
        ])?;
    }
    csv.flush()
        .map_err(|err| FinanceError::ExportError(err.to_string()))?;
    Ok(())
}

pub fn export_csv_file(path: &Path, transactions: &[Transaction]) -> Result<PathBuf> {
    let file = File::create(path).map_err(|err| export_io_error(path, err))?;
    write_csv(file, transactions)?;
    info!(path = %path.display(), rows = transactions.len(), "csv export written");
    Ok(path.to_path_buf())
}

/// Standalone HTML document listing the transactions, ready for printing.
pub fn render_html_report(transactions: &[Transaction], generated_on: NaiveDate) -> Result<String> {
    let template = ReportTemplate {
        title: REPORT_TITLE,
        generated_on: display_date(generated_on),
        rows: transactions.iter().map(ReportRow::from).collect(),
    };
    template
        .render()
        .map_err(|err| FinanceError::ExportError(err.to_string()))
}

pub fn export_html_file(
    path: &Path,
    transactions: &[Transaction],
    generated_on: NaiveDate,
) -> Result<PathBuf> {
    let html = render_html_report(transactions, generated_on)?;
    std::fs::write(path, html).map_err(|err| export_io_error(path, err))?;
    info!(path = %path.display(), rows = transactions.len(), "html report written");
    Ok(path.to_path_buf())
}

/// `d/m/yyyy`, matching the en-IN short date.
fn display_date(date: NaiveDate) -> String {
    date.format("%-d/%-m/%Y").to_string()
}

fn plain_amount(amount: f64) -> String {
    amount.to_string()
}

fn export_io_error(path: &Path, err: std::io::Error) -> FinanceError {
    FinanceError::ExportError(format!("{}: {}", path.display(), err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CategoryKind;

    fn sample() -> Vec<Transaction> {
        vec![
            Transaction::with_id(
                "1",
                CategoryKind::Expense,
                250.0,
                "Food & Snacks",
                "Lunch, with friends",
                NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            ),
            Transaction::with_id(
                "2",
                CategoryKind::Income,
                12.5,
                "Freelancing",
                "<script>",
                NaiveDate::from_ymd_opt(2025, 1, 3).unwrap(),
            ),
        ]
    }

    #[test]
    fn csv_has_header_and_quoted_fields() {
        let mut buffer = Vec::new();
        write_csv(&mut buffer, &sample()).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Date,Category,Description,Amount (₹),Type");
        assert_eq!(
            lines[1],
            "2025-01-15,Food & Snacks,\"Lunch, with friends\",250,expense"
        );
        assert_eq!(lines[2], "2025-01-03,Freelancing,<script>,12.5,income");
    }

    #[test]
    fn html_report_escapes_cells() {
        let html =
            render_html_report(&sample(), NaiveDate::from_ymd_opt(2025, 1, 20).unwrap()).unwrap();
        assert!(html.contains("<h1>Student Expense Report</h1>"));
        assert!(html.contains("Generated on: 20/1/2025"));
        assert!(html.contains("<td>Food &amp; Snacks</td>"));
        assert!(html.contains("<td>&lt;script&gt;</td>"));
        assert!(html.contains("<td>₹12.5</td>"));
        assert!(!html.contains("<td><script>"));
        assert_eq!(html.matches("<tr>").count(), 3);
    }

    #[test]
    fn file_names_carry_the_date() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        assert_eq!(default_csv_file_name(date), "student_expenses_2025-03-09.csv");
        assert_eq!(default_report_file_name(date), "student_expenses_2025-03-09.html");
    }
}
