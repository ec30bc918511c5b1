use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::core::clock::Clock;
use crate::core::period_filter::PeriodFilter;
use crate::core::services::{
    BudgetService, CategoryService, InsightService, LedgerFilter, SeriesService, ServiceResult,
    TransactionService,
};
use crate::domain::category::resolve;
use crate::domain::{
    BudgetComparison, BudgetRecord, BudgetStatus, CashFlowTotals, CategoryKind, CategorySlice,
    CategoryTotals, InsightSummary, MonthlySeries, PeriodSelector, Transaction,
};
use crate::errors::FinanceError;
use crate::ledger::Ledger;
use crate::storage::StorageBackend;

/// Input for a new transaction, before an id is assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub kind: CategoryKind,
    pub amount: f64,
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
}

/// Outcome of a load operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    pub transactions: usize,
    pub budgets: usize,
    /// Stored transactions dropped for failing validation or repeating an id.
    pub rejected: usize,
}

/// Coordinates the in-memory ledger, the storage port and the clock.
///
/// Every transaction mutation recomputes the budget set and persists the
/// transactions (with backup) and budgets. Limit edits persist the budgets.
pub struct LedgerManager {
    ledger: Ledger,
    storage: Box<dyn StorageBackend>,
    clock: Arc<dyn Clock>,
}

impl LedgerManager {
    pub fn new(storage: Box<dyn StorageBackend>, clock: Arc<dyn Clock>) -> Self {
        Self {
            ledger: Ledger::new(),
            storage,
            clock,
        }
    }

    pub fn storage(&self) -> &dyn StorageBackend {
        self.storage.as_ref()
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.ledger.transactions
    }

    pub fn budgets(&self) -> &[BudgetRecord] {
        &self.ledger.budgets
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Reads both records from storage and refreshes the derived budgets.
    ///
    /// Stored limits are carried over; stored `spent` values are replaced.
    /// Invalid or duplicate stored transactions are skipped with a warning.
    pub fn load(&mut self) -> ServiceResult<LoadReport> {
        let stored = self.storage.load_transactions()?;
        let stored_count = stored.len();
        let transactions = accept_valid(stored);
        let stored_budgets = self.storage.load_budgets()?;
        let budgets = BudgetService::recompute(&transactions, &stored_budgets, self.today());
        let report = LoadReport {
            transactions: transactions.len(),
            budgets: stored_budgets.len(),
            rejected: stored_count - transactions.len(),
        };
        self.ledger = Ledger::from_parts(transactions, budgets);
        info!(
            transactions = report.transactions,
            budgets = report.budgets,
            rejected = report.rejected,
            "ledger loaded"
        );
        Ok(report)
    }

    pub fn add_transaction(&mut self, input: NewTransaction) -> ServiceResult<Transaction> {
        let txn = TransactionService::new_transaction(
            input.kind,
            input.amount,
            &input.category,
            &input.description,
            input.date,
        )?;
        let previous = self.ledger.clone();
        TransactionService::add(&mut self.ledger, txn.clone())?;
        info!(id = %txn.id, category = %txn.category, amount = txn.amount, "transaction added");
        self.after_transactions_changed(previous)?;
        Ok(txn)
    }

    /// Deletes by full id or unambiguous id prefix.
    pub fn delete_transaction(&mut self, id_or_prefix: &str) -> ServiceResult<Transaction> {
        let id = TransactionService::find(&self.ledger, id_or_prefix)?.id.clone();
        let previous = self.ledger.clone();
        let removed = TransactionService::remove(&mut self.ledger, &id)?;
        info!(id = %removed.id, "transaction deleted");
        self.after_transactions_changed(previous)?;
        Ok(removed)
    }

    /// Accepts category names case-insensitively.
    pub fn set_limit(&mut self, category: &str, limit: f64) -> ServiceResult<BudgetRecord> {
        let canonical = resolve(CategoryKind::Expense, category).unwrap_or(category);
        let previous = self.ledger.budgets.clone();
        BudgetService::set_limit(&mut self.ledger.budgets, canonical, limit)?;
        if let Err(err) = self.storage.save_budgets(&self.ledger.budgets) {
            self.ledger.replace_budgets(previous);
            return Err(err.into());
        }
        let record = self
            .ledger
            .budget(canonical)
            .cloned()
            .ok_or_else(|| FinanceError::CategoryNotFound(canonical.to_string()))?;
        info!(category = %record.category, limit = record.limit, "budget limit updated");
        if record.status() == BudgetStatus::Over {
            warn!(category = %record.category, percentage = record.percentage, "budget exceeded");
        }
        Ok(record)
    }

    pub fn insights(&self, period: PeriodSelector) -> InsightSummary {
        InsightService::compute(&self.ledger.transactions, period, self.clock.now())
    }

    pub fn period_filter(&self, period: PeriodSelector) -> PeriodFilter {
        PeriodFilter::new(period, self.clock.now())
    }

    pub fn category_totals(&self, period: PeriodSelector) -> CategoryTotals {
        CategoryService::expense_totals(&self.ledger.transactions, &self.period_filter(period))
    }

    pub fn chart_slices(&self, period: PeriodSelector) -> Vec<CategorySlice> {
        CategoryService::chart_slices(&self.category_totals(period))
    }

    pub fn monthly_series(&self) -> MonthlySeries {
        SeriesService::monthly(&self.ledger.transactions)
    }

    pub fn comparison(&self, period: PeriodSelector) -> Vec<BudgetComparison> {
        BudgetService::comparison(&self.ledger.transactions, &self.period_filter(period))
    }

    pub fn over_budget(&self) -> Vec<&BudgetRecord> {
        BudgetService::over_budget(&self.ledger.budgets)
    }

    /// Month/category view together with its cash-flow totals.
    pub fn filtered(&self, filter: &LedgerFilter) -> (Vec<&Transaction>, CashFlowTotals) {
        let view = TransactionService::filter(&self.ledger.transactions, filter);
        let totals = TransactionService::totals(view.iter().copied());
        (view, totals)
    }

    /// Recomputes and persists; on a storage failure the ledger is rolled back to `previous`.
    fn after_transactions_changed(&mut self, previous: Ledger) -> ServiceResult<()> {
        let budgets =
            BudgetService::recompute(&self.ledger.transactions, &self.ledger.budgets, self.today());
        self.ledger.replace_budgets(budgets);
        let saved = self
            .storage
            .save_transactions(&self.ledger.transactions, self.clock.now())
            .and_then(|_| self.storage.save_budgets(&self.ledger.budgets));
        if let Err(err) = saved {
            warn!(error = %err, "persisting ledger failed, changes rolled back");
            self.ledger = previous;
            return Err(err.into());
        }
        for record in BudgetService::over_budget(&self.ledger.budgets) {
            warn!(category = %record.category, percentage = record.percentage, "budget exceeded");
        }
        Ok(())
    }
}

/// Keeps stored transactions that pass validation, first occurrence of each id only.
fn accept_valid(transactions: Vec<Transaction>) -> Vec<Transaction> {
    let mut seen = HashSet::new();
    transactions
        .into_iter()
        .filter(|txn| {
            if let Err(err) = TransactionService::validate(txn) {
                warn!(id = %txn.id, error = %err, "skipping invalid stored transaction");
                return false;
            }
            if !seen.insert(txn.id.clone()) {
                warn!(id = %txn.id, "skipping stored transaction with duplicate id");
                return false;
            }
            true
        })
        .collect()
}
