//! Indian-locale amount formatting.

use chrono::{Datelike, NaiveDate};

pub const DEFAULT_SYMBOL: &str = "₹";

/// Renders `amount` with Indian digit grouping and no fraction digits.
///
/// Rounds half away from zero; negatives carry a leading sign: `-₹1,500`.
pub fn format_currency(amount: f64, symbol: &str) -> String {
    if !amount.is_finite() {
        return format!("{}0", symbol);
    }
    let rounded = amount.abs().round();
    let body = group_indian(&format!("{:.0}", rounded));
    if amount < 0.0 && rounded > 0.0 {
        format!("-{}{}", symbol, body)
    } else {
        format!("{}{}", symbol, body)
    }
}

pub fn format_percentage(value: f64) -> String {
    format!("{:.1}%", value)
}

/// `15 Jan 2025` style, as rendered by the en-IN locale.
pub fn format_date(date: NaiveDate) -> String {
    format!("{:02} {} {}", date.day(), date.format("%b"), date.year())
}

/// Last three digits form one group, then groups of two: `12,34,567`.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut grouped = String::new();
    for (count, ch) in head.chars().rev().enumerate() {
        if count != 0 && count % 2 == 0 {
            grouped.insert(0, ',');
        }
        grouped.insert(0, ch);
    }
    format!("{},{}", grouped, tail)
}
