//! Calendar-month arithmetic on `NaiveDate`.

use chrono::{Datelike, Duration, NaiveDate};

/// Moves `date` by whole calendar months, clamping the day to the target month's length.
pub fn shift_month(date: NaiveDate, months: i32) -> NaiveDate {
    let mut year = date.year();
    let mut month = date.month() as i32 + months;
    while month > 12 {
        month -= 12;
        year += 1;
    }
    while month < 1 {
        month += 12;
        year -= 1;
    }
    let day = date.day().min(days_in_month(year, month as u32));
    NaiveDate::from_ymd_opt(year, month as u32, day).unwrap_or(date)
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .map(|first_next| (first_next - Duration::days(1)).day())
        .unwrap_or(28)
}

/// `(year, month)` of the calendar month before the one containing `date`.
pub fn previous_month(date: NaiveDate) -> (i32, u32) {
    if date.month() == 1 {
        (date.year() - 1, 12)
    } else {
        (date.year(), date.month() - 1)
    }
}

pub fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Short human label for a month bucket, e.g. `Jan 25`.
pub fn month_label(year: i32, month: u32) -> String {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|first| first.format("%b %y").to_string())
        .unwrap_or_else(|| format!("{:04}-{:02}", year, month))
}

/// Parses a `YYYY-MM` bucket key.
pub fn parse_month_key(key: &str) -> Option<(i32, u32)> {
    let (year, month) = key.split_once('-')?;
    let year = year.parse().ok()?;
    let month = month.parse().ok()?;
    (1..=12).contains(&month).then_some((year, month))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn shift_month_clamps_to_short_months() {
        assert_eq!(shift_month(date(2025, 5, 31), -3), date(2025, 2, 28));
        assert_eq!(shift_month(date(2024, 5, 31), -3), date(2024, 2, 29));
        assert_eq!(shift_month(date(2025, 2, 10), -6), date(2024, 8, 10));
        assert_eq!(shift_month(date(2024, 11, 30), 3), date(2025, 2, 28));
    }

    #[test]
    fn previous_month_wraps_year() {
        assert_eq!(previous_month(date(2025, 1, 15)), (2024, 12));
        assert_eq!(previous_month(date(2025, 7, 1)), (2025, 6));
    }

    #[test]
    fn month_labels_and_keys() {
        assert_eq!(month_label(2025, 1), "Jan 25");
        assert_eq!(month_label(2024, 12), "Dec 24");
        assert_eq!(parse_month_key("2024-09"), Some((2024, 9)));
        assert_eq!(parse_month_key("2024-13"), None);
        assert_eq!(days_in_month(2024, 2), 29);
    }
}
