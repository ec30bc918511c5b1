//! Month-fixed budget tracking over the expense category enumeration.

use chrono::NaiveDate;
use tracing::debug;

use crate::core::calendar::same_month;
use crate::core::period_filter::PeriodFilter;
use crate::core::services::{CategoryService, ServiceError, ServiceResult};
use crate::domain::budget::usage_percentage;
use crate::domain::category::{default_limit, EXPENSE_CATEGORIES};
use crate::domain::{BudgetComparison, BudgetRecord, BudgetStatus, Transaction};
use crate::errors::FinanceError;

/// Stateless budgeting utilities that operate over transaction snapshots.
pub struct BudgetService;

impl BudgetService {
    /// Rebuilds one record per expense category for the calendar month of `today`.
    ///
    /// Spending is always scoped to the current calendar month, independent of
    /// any period selector. A previous record's limit is kept when it is a
    /// positive finite number; otherwise the default table applies.
    pub fn recompute(
        transactions: &[Transaction],
        previous: &[BudgetRecord],
        today: NaiveDate,
    ) -> Vec<BudgetRecord> {
        let monthly = CategoryService::totals(
            transactions
                .iter()
                .filter(|txn| txn.is_expense() && same_month(txn.date, today)),
        );

        let records: Vec<BudgetRecord> = EXPENSE_CATEGORIES
            .iter()
            .map(|category| {
                let spent = monthly.get(category).unwrap_or(0.0);
                let limit = Self::resolve_limit(category, previous);
                BudgetRecord::new(*category, limit, spent)
            })
            .collect();
        debug!(
            month = %today.format("%Y-%m"),
            records = records.len(),
            "recomputed budget records"
        );
        records
    }

    /// Carried-over limit for `category`, or its default.
    pub fn resolve_limit(category: &str, previous: &[BudgetRecord]) -> f64 {
        previous
            .iter()
            .find(|record| record.category == category)
            .map(|record| record.limit)
            .filter(|limit| limit.is_finite() && *limit > 0.0)
            .unwrap_or_else(|| default_limit(category))
    }

    /// Edits the limit of one record in place and refreshes its percentage.
    pub fn set_limit(budgets: &mut [BudgetRecord], category: &str, limit: f64) -> ServiceResult<()> {
        if !limit.is_finite() || limit < 0.0 {
            return Err(ServiceError::Invalid(format!(
                "budget limit must be a non-negative number, got {}",
                limit
            )));
        }
        let record = budgets
            .iter_mut()
            .find(|record| record.category == category)
            .ok_or_else(|| FinanceError::CategoryNotFound(category.to_string()))?;
        record.limit = limit;
        record.percentage = usage_percentage(record.spent, limit);
        Ok(())
    }

    /// Spent-in-period against the default limit table, for every expense category.
    pub fn comparison(transactions: &[Transaction], filter: &PeriodFilter) -> Vec<BudgetComparison> {
        let totals = CategoryService::expense_totals(transactions, filter);
        EXPENSE_CATEGORIES
            .iter()
            .map(|category| BudgetComparison {
                category: category.to_string(),
                spent: totals.get(category).unwrap_or(0.0),
                limit: default_limit(category),
            })
            .collect()
    }

    pub fn over_budget(budgets: &[BudgetRecord]) -> Vec<&BudgetRecord> {
        budgets
            .iter()
            .filter(|record| record.status() == BudgetStatus::Over)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CategoryKind, PeriodSelector};
    use chrono::{TimeZone, Utc};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    fn expense(category: &str, amount: f64, date: NaiveDate) -> Transaction {
        Transaction::new(CategoryKind::Expense, amount, category, "test", date)
    }

    #[test]
    fn every_expense_category_gets_a_record() {
        let records = BudgetService::recompute(&[], &[], today());
        let names: Vec<&str> = records.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(names, EXPENSE_CATEGORIES.to_vec());
        assert!(records.iter().all(|r| r.spent == 0.0 && r.percentage == 0.0));
    }

    #[test]
    fn spending_outside_current_month_is_ignored() {
        let transactions = vec![
            expense("Transportation", 120.0, today()),
            expense(
                "Transportation",
                1200.0,
                NaiveDate::from_ymd_opt(2024, 12, 20).unwrap(),
            ),
            Transaction::new(CategoryKind::Income, 3000.0, "Part-time Job", "tutoring", today()),
        ];
        let records = BudgetService::recompute(&transactions, &[], today());
        let transport = records
            .iter()
            .find(|r| r.category == "Transportation")
            .unwrap();
        assert_eq!(transport.spent, 120.0);
        assert_eq!(transport.limit, 1500.0);
        assert_eq!(transport.percentage, 8.0);
    }

    #[test]
    fn invalid_previous_limits_fall_back_to_defaults() {
        let previous = vec![
            BudgetRecord::new("Food & Snacks", 0.0, 0.0),
            BudgetRecord::new("Entertainment", f64::NAN, 0.0),
            BudgetRecord::new("Miscellaneous", -5.0, 0.0),
            BudgetRecord::new("Housing & Rent", 4200.0, 0.0),
        ];
        assert_eq!(BudgetService::resolve_limit("Food & Snacks", &previous), 3000.0);
        assert_eq!(BudgetService::resolve_limit("Entertainment", &previous), 1000.0);
        assert_eq!(BudgetService::resolve_limit("Miscellaneous", &previous), 1000.0);
        assert_eq!(BudgetService::resolve_limit("Housing & Rent", &previous), 4200.0);
    }

    #[test]
    fn set_limit_refreshes_percentage() {
        let transactions = vec![expense("Entertainment", 300.0, today())];
        let mut records = BudgetService::recompute(&transactions, &[], today());
        BudgetService::set_limit(&mut records, "Entertainment", 600.0).unwrap();
        let record = records.iter().find(|r| r.category == "Entertainment").unwrap();
        assert_eq!(record.limit, 600.0);
        assert_eq!(record.percentage, 50.0);

        BudgetService::set_limit(&mut records, "Entertainment", 0.0).unwrap();
        let record = records.iter().find(|r| r.category == "Entertainment").unwrap();
        assert_eq!(record.percentage, 0.0);
    }

    #[test]
    fn set_limit_rejects_bad_input() {
        let mut records = BudgetService::recompute(&[], &[], today());
        let err = BudgetService::set_limit(&mut records, "Entertainment", -1.0).unwrap_err();
        assert!(matches!(err, ServiceError::Invalid(_)), "unexpected error: {err:?}");
        let err = BudgetService::set_limit(&mut records, "Pocket Money", 10.0).unwrap_err();
        assert!(
            matches!(err, ServiceError::Core(FinanceError::CategoryNotFound(_))),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn comparison_uses_period_and_default_limits() {
        let now = Utc.with_ymd_and_hms(2025, 1, 20, 0, 0, 0).unwrap();
        let filter = PeriodFilter::new(PeriodSelector::Last3Months, now);
        let transactions = vec![
            expense("Food & Snacks", 2800.0, NaiveDate::from_ymd_opt(2024, 12, 25).unwrap()),
            expense("Food & Snacks", 250.0, today()),
        ];
        let rows = BudgetService::comparison(&transactions, &filter);
        assert_eq!(rows.len(), EXPENSE_CATEGORIES.len());
        assert_eq!(rows[0].spent, 3050.0);
        assert_eq!(rows[0].limit, 3000.0);
        assert_eq!(rows[4].spent, 0.0);
    }

    #[test]
    fn over_budget_lists_only_exceeded_records() {
        let records = vec![
            BudgetRecord::new("Entertainment", 1000.0, 1250.0),
            BudgetRecord::new("Education & Books", 2000.0, 2000.0),
        ];
        let over = BudgetService::over_budget(&records);
        assert_eq!(over.len(), 1);
        assert_eq!(over[0].category, "Entertainment");
    }
}
