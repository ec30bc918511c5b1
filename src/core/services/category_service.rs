//! Per-category expense aggregation.

use tracing::debug;

use crate::core::period_filter::PeriodFilter;
use crate::domain::category::style_for;
use crate::domain::{CategorySlice, CategoryTotals, Transaction};

/// Stateless helpers that fold transactions into [`CategoryTotals`].
pub struct CategoryService;

impl CategoryService {
    /// Sums amounts per category in first-encountered order.
    ///
    /// Callers pass transactions already narrowed to a period and to expenses.
    pub fn totals<'a, I>(transactions: I) -> CategoryTotals
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let mut totals = CategoryTotals::new();
        for txn in transactions {
            totals.add(&txn.category, txn.amount);
        }
        totals
    }

    /// Expense totals for the transactions falling inside `filter`.
    pub fn expense_totals(transactions: &[Transaction], filter: &PeriodFilter) -> CategoryTotals {
        let totals = Self::totals(
            transactions
                .iter()
                .filter(|txn| txn.is_expense() && filter.contains(txn.date)),
        );
        debug!(
            period = %filter.selector(),
            categories = totals.len(),
            "aggregated expense totals"
        );
        totals
    }

    /// Pie-chart slices with each category's share of the total, in percent.
    pub fn chart_slices(totals: &CategoryTotals) -> Vec<CategorySlice> {
        let grand_total = totals.total();
        totals
            .iter()
            .map(|(category, amount)| {
                let style = style_for(category);
                CategorySlice {
                    category: category.to_string(),
                    amount,
                    share: if grand_total > 0.0 {
                        amount / grand_total * 100.0
                    } else {
                        0.0
                    },
                    color: style.color,
                    icon: style.icon,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CategoryKind, PeriodSelector};
    use chrono::{NaiveDate, TimeZone, Utc};

    fn expense(category: &str, amount: f64, day: u32) -> Transaction {
        Transaction::new(
            CategoryKind::Expense,
            amount,
            category,
            "test",
            NaiveDate::from_ymd_opt(2025, 1, day).unwrap(),
        )
    }

    #[test]
    fn expense_totals_skip_income_and_other_periods() {
        let now = Utc.with_ymd_and_hms(2025, 1, 20, 8, 0, 0).unwrap();
        let filter = PeriodFilter::new(PeriodSelector::CurrentMonth, now);
        let mut stray = expense("Food & Snacks", 999.0, 1);
        stray.date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        let transactions = vec![
            expense("Food & Snacks", 250.0, 15),
            Transaction::new(
                CategoryKind::Income,
                8000.0,
                "Pocket Money",
                "allowance",
                NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            ),
            stray,
            expense("Food & Snacks", 150.0, 13),
        ];
        let totals = CategoryService::expense_totals(&transactions, &filter);
        assert_eq!(totals.len(), 1);
        assert_eq!(totals.get("Food & Snacks"), Some(400.0));
    }

    #[test]
    fn chart_slices_carry_share_and_style() {
        let transactions = vec![
            expense("Food & Snacks", 300.0, 2),
            expense("Transportation", 100.0, 3),
        ];
        let slices = CategoryService::chart_slices(&CategoryService::totals(&transactions));
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].share, 75.0);
        assert_eq!(slices[0].color, "#E74C3C");
        assert_eq!(slices[1].icon, "🚌");
    }

    #[test]
    fn chart_slices_of_nothing_are_empty() {
        assert!(CategoryService::chart_slices(&CategoryTotals::new()).is_empty());
    }
}
