//! Business logic helpers for managing transactions.

use chrono::{Datelike, NaiveDate};

use crate::core::services::{ServiceError, ServiceResult};
use crate::domain::category::{resolve, CategoryKind};
use crate::domain::{CashFlowTotals, Transaction};
use crate::errors::FinanceError;
use crate::ledger::Ledger;

/// Month/year/category view used by the ledger listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerFilter {
    pub year: i32,
    pub month: u32,
    pub category: Option<String>,
}

impl LedgerFilter {
    pub fn for_month(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            category: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn matches(&self, txn: &Transaction) -> bool {
        txn.date.year() == self.year
            && txn.date.month() == self.month
            && self
                .category
                .as_deref()
                .map(|category| txn.category == category)
                .unwrap_or(true)
    }
}

/// Provides validated CRUD helpers for ledger transactions.
pub struct TransactionService;

impl TransactionService {
    /// Builds a transaction with a fresh id after resolving and validating its fields.
    pub fn new_transaction(
        kind: CategoryKind,
        amount: f64,
        category: &str,
        description: &str,
        date: NaiveDate,
    ) -> ServiceResult<Transaction> {
        let canonical = resolve(kind, category)
            .ok_or_else(|| FinanceError::CategoryNotFound(format!("{} ({})", category, kind)))?;
        let txn = Transaction::new(kind, amount, canonical, description.trim(), date);
        Self::validate(&txn)?;
        Ok(txn)
    }

    /// Checks the per-transaction invariants.
    pub fn validate(txn: &Transaction) -> ServiceResult<()> {
        if !txn.amount.is_finite() || txn.amount <= 0.0 {
            return Err(ServiceError::Invalid(format!(
                "amount must be greater than zero, got {}",
                txn.amount
            )));
        }
        if txn.description.trim().is_empty() {
            return Err(ServiceError::Invalid("description must not be empty".into()));
        }
        if !txn.kind.contains(&txn.category) {
            return Err(FinanceError::CategoryNotFound(format!(
                "{} ({})",
                txn.category, txn.kind
            ))
            .into());
        }
        Ok(())
    }

    /// Validates and prepends a transaction, returning its identifier.
    pub fn add(ledger: &mut Ledger, transaction: Transaction) -> ServiceResult<String> {
        Self::validate(&transaction)?;
        if ledger.contains(&transaction.id) {
            return Err(FinanceError::DuplicateTransaction(transaction.id).into());
        }
        Ok(ledger.add_transaction(transaction))
    }

    /// Removes the transaction identified by `id`, returning the removed instance.
    pub fn remove(ledger: &mut Ledger, id: &str) -> ServiceResult<Transaction> {
        ledger
            .remove_transaction(id)
            .ok_or_else(|| FinanceError::TransactionNotFound(id.to_string()).into())
    }

    /// Resolves a full id or an unambiguous id prefix.
    pub fn find<'a>(ledger: &'a Ledger, id_or_prefix: &str) -> ServiceResult<&'a Transaction> {
        if id_or_prefix.trim().is_empty() {
            return Err(ServiceError::Invalid("transaction id must not be empty".into()));
        }
        if let Some(txn) = ledger.transaction(id_or_prefix) {
            return Ok(txn);
        }
        match ledger.find_by_prefix(id_or_prefix).as_slice() {
            [single] => Ok(*single),
            [] => Err(FinanceError::TransactionNotFound(id_or_prefix.to_string()).into()),
            many => Err(ServiceError::Invalid(format!(
                "id prefix `{}` matches {} transactions",
                id_or_prefix,
                many.len()
            ))),
        }
    }

    pub fn filter<'a>(transactions: &'a [Transaction], filter: &LedgerFilter) -> Vec<&'a Transaction> {
        transactions.iter().filter(|txn| filter.matches(txn)).collect()
    }

    pub fn totals<'a, I>(transactions: I) -> CashFlowTotals
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let mut totals = CashFlowTotals::default();
        for txn in transactions {
            match txn.kind {
                CategoryKind::Income => totals.income += txn.amount,
                CategoryKind::Expense => totals.expenses += txn.amount,
            }
        }
        totals.balance = totals.income - totals.expenses;
        totals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    #[test]
    fn new_transaction_canonicalises_category() {
        let txn = TransactionService::new_transaction(
            CategoryKind::Expense,
            80.0,
            "transportation",
            " Bus fare ",
            date(15),
        )
        .unwrap();
        assert_eq!(txn.category, "Transportation");
        assert_eq!(txn.description, "Bus fare");
    }

    #[test]
    fn rejects_category_of_the_wrong_kind() {
        let err = TransactionService::new_transaction(
            CategoryKind::Income,
            80.0,
            "Transportation",
            "Bus fare",
            date(15),
        )
        .unwrap_err();
        assert!(
            matches!(err, ServiceError::Core(FinanceError::CategoryNotFound(_))),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn rejects_non_positive_amounts() {
        for amount in [0.0, -10.0, f64::NAN, f64::INFINITY] {
            let txn = Transaction::new(CategoryKind::Expense, amount, "Miscellaneous", "x", date(1));
            assert!(TransactionService::validate(&txn).is_err(), "amount {amount}");
        }
    }

    #[test]
    fn add_rejects_duplicate_ids() {
        let mut ledger = Ledger::new();
        let txn = Transaction::with_id("1", CategoryKind::Expense, 5.0, "Miscellaneous", "x", date(1));
        TransactionService::add(&mut ledger, txn.clone()).unwrap();
        let err = TransactionService::add(&mut ledger, txn).unwrap_err();
        assert!(
            matches!(err, ServiceError::Core(FinanceError::DuplicateTransaction(_))),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn remove_fails_for_missing_transaction() {
        let mut ledger = Ledger::new();
        let err = TransactionService::remove(&mut ledger, "nope").unwrap_err();
        assert!(err.to_string().contains("nope"), "unexpected error: {err}");
    }

    #[test]
    fn find_by_ambiguous_prefix_fails() {
        let mut ledger = Ledger::new();
        for id in ["ab1", "ab2"] {
            let txn = Transaction::with_id(id, CategoryKind::Expense, 5.0, "Miscellaneous", "x", date(1));
            TransactionService::add(&mut ledger, txn).unwrap();
        }
        assert_eq!(TransactionService::find(&ledger, "ab2").unwrap().id, "ab2");
        assert!(TransactionService::find(&ledger, "ab").is_err());
        assert!(TransactionService::find(&ledger, "zz").is_err());
    }

    #[test]
    fn blank_id_never_matches() {
        let mut ledger = Ledger::new();
        let txn = Transaction::with_id("xyz", CategoryKind::Expense, 5.0, "Miscellaneous", "x", date(1));
        TransactionService::add(&mut ledger, txn).unwrap();
        for blank in ["", "   "] {
            let err = TransactionService::find(&ledger, blank).unwrap_err();
            assert!(matches!(err, ServiceError::Invalid(_)), "unexpected error: {err:?}");
        }
        assert_eq!(ledger.transactions.len(), 1);
    }

    #[test]
    fn filter_and_totals_for_month_view() {
        let transactions = vec![
            Transaction::new(CategoryKind::Income, 8000.0, "Pocket Money", "allowance", date(1)),
            Transaction::new(CategoryKind::Expense, 2500.0, "Housing & Rent", "mess fees", date(5)),
            Transaction::new(
                CategoryKind::Expense,
                900.0,
                "Entertainment",
                "december",
                NaiveDate::from_ymd_opt(2024, 12, 10).unwrap(),
            ),
        ];
        let view = LedgerFilter::for_month(date(20));
        let month = TransactionService::filter(&transactions, &view);
        assert_eq!(month.len(), 2);
        let totals = TransactionService::totals(month);
        assert_eq!(totals.income, 8000.0);
        assert_eq!(totals.expenses, 2500.0);
        assert_eq!(totals.balance, 5500.0);

        let rent_only = view.with_category("Housing & Rent");
        assert_eq!(TransactionService::filter(&transactions, &rent_only).len(), 1);
    }
}
