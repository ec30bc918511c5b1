use chrono::{DateTime, Utc};
use tracing::debug;

use crate::core::period_filter::PeriodFilter;
use crate::core::services::CategoryService;
use crate::domain::{InsightSummary, PeriodSelector, Transaction, Trend};

pub struct InsightService;

impl InsightService {
    /// Computes the period-scoped spending summary relative to `now`.
    pub fn compute(
        transactions: &[Transaction],
        selector: PeriodSelector,
        now: DateTime<Utc>,
    ) -> InsightSummary {
        let filter = PeriodFilter::new(selector, now);
        let totals = CategoryService::expense_totals(transactions, &filter);
        let total_spent = totals.total();
        let total_income: f64 = transactions
            .iter()
            .filter(|txn| txn.is_income() && filter.contains(txn.date))
            .map(|txn| txn.amount)
            .sum();

        let days = filter.days_in_period();
        let average_daily = if days > 0 {
            total_spent / f64::from(days)
        } else {
            0.0
        };

        let summary = InsightSummary {
            total_spent,
            average_daily,
            top_category: totals.top_category(),
            trend: Self::trend(transactions, &filter, total_spent),
            savings_rate: Self::savings_rate(total_income, total_spent),
        };
        debug!(period = %selector, ?summary, "computed insights");
        summary
    }

    /// Month-over-month direction. Only the current-month view has a comparison
    /// period; every other selector reports `Neutral`.
    pub fn trend(transactions: &[Transaction], filter: &PeriodFilter, total_spent: f64) -> Trend {
        if filter.selector() != PeriodSelector::CurrentMonth {
            return Trend::Neutral;
        }
        let previous_total: f64 = transactions
            .iter()
            .filter(|txn| txn.is_expense() && filter.previous_month_contains(txn.date))
            .map(|txn| txn.amount)
            .sum();
        Trend::compare(total_spent, previous_total)
    }

    /// Share of income left after spending, in percent. Negative when overspending.
    pub fn savings_rate(total_income: f64, total_spent: f64) -> f64 {
        if total_income > 0.0 {
            (total_income - total_spent) / total_income * 100.0
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CategoryKind;
    use chrono::{NaiveDate, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 20, 12, 0, 0).unwrap()
    }

    fn txn(kind: CategoryKind, category: &str, amount: f64, y: i32, m: u32, d: u32) -> Transaction {
        Transaction::new(
            kind,
            amount,
            category,
            "test",
            NaiveDate::from_ymd_opt(y, m, d).unwrap(),
        )
    }

    #[test]
    fn empty_ledger_produces_zeroed_summary() {
        let summary = InsightService::compute(&[], PeriodSelector::CurrentMonth, now());
        assert_eq!(summary, InsightSummary::default());
    }

    #[test]
    fn average_daily_uses_day_of_month() {
        let transactions = vec![txn(CategoryKind::Expense, "Food & Snacks", 400.0, 2025, 1, 3)];
        let summary = InsightService::compute(&transactions, PeriodSelector::CurrentMonth, now());
        assert_eq!(summary.total_spent, 400.0);
        assert_eq!(summary.average_daily, 20.0);
        assert_eq!(summary.top_category, "Food & Snacks");
    }

    #[test]
    fn trend_is_neutral_outside_current_month() {
        let transactions = vec![
            txn(CategoryKind::Expense, "Food & Snacks", 5000.0, 2025, 1, 3),
            txn(CategoryKind::Expense, "Food & Snacks", 100.0, 2024, 12, 3),
        ];
        for selector in [
            PeriodSelector::Last3Months,
            PeriodSelector::Last6Months,
            PeriodSelector::CurrentYear,
        ] {
            let summary = InsightService::compute(&transactions, selector, now());
            assert_eq!(summary.trend, Trend::Neutral, "selector {selector}");
        }
        let monthly = InsightService::compute(&transactions, PeriodSelector::CurrentMonth, now());
        assert_eq!(monthly.trend, Trend::Up);
    }

    #[test]
    fn trend_down_when_spending_drops() {
        let transactions = vec![
            txn(CategoryKind::Expense, "Transportation", 800.0, 2025, 1, 5),
            txn(CategoryKind::Expense, "Transportation", 1000.0, 2024, 12, 20),
        ];
        let summary = InsightService::compute(&transactions, PeriodSelector::CurrentMonth, now());
        assert_eq!(summary.trend, Trend::Down);
    }

    #[test]
    fn savings_rate_without_income_is_zero() {
        assert_eq!(InsightService::savings_rate(0.0, 500.0), 0.0);
        assert_eq!(InsightService::savings_rate(10_000.0, 12_000.0), -20.0);
        assert_eq!(InsightService::savings_rate(8_000.0, 2_000.0), 75.0);
    }

    #[test]
    fn income_outside_period_is_excluded() {
        let transactions = vec![
            txn(CategoryKind::Income, "Scholarship", 1000.0, 2025, 1, 2),
            txn(CategoryKind::Income, "Scholarship", 9000.0, 2024, 11, 2),
            txn(CategoryKind::Expense, "Miscellaneous", 250.0, 2025, 1, 4),
        ];
        let summary = InsightService::compute(&transactions, PeriodSelector::CurrentMonth, now());
        assert_eq!(summary.savings_rate, 75.0);
    }
}
