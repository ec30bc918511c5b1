//! Demonstration dataset seeded into an empty store.

use chrono::NaiveDate;
use tracing::info;

use crate::domain::{BudgetRecord, CategoryKind, Transaction};
use crate::errors::{FinanceError, Result};
use crate::storage::{StorageBackend, BUDGETS_KEY, EXPENSES_KEY};

use CategoryKind::{Expense, Income};

type Row = (&'static str, f64, &'static str, &'static str, (i32, u32, u32), CategoryKind);

const SAMPLE_ROWS: [Row; 34] = [
    ("1", 250.0, "Food & Snacks", "College canteen lunch", (2025, 1, 15), Expense),
    ("2", 80.0, "Transportation", "Bus fare to college", (2025, 1, 15), Expense),
    ("3", 1200.0, "Education & Books", "Engineering textbook", (2025, 1, 14), Expense),
    ("4", 300.0, "Entertainment", "Movie with friends", (2025, 1, 13), Expense),
    ("5", 150.0, "Food & Snacks", "Chai and samosa", (2025, 1, 13), Expense),
    ("6", 500.0, "Miscellaneous", "Mobile recharge", (2025, 1, 12), Expense),
    ("7", 200.0, "Food & Snacks", "Dinner at hostel mess", (2025, 1, 12), Expense),
    ("8", 120.0, "Transportation", "Auto rickshaw", (2025, 1, 11), Expense),
    ("9", 800.0, "Education & Books", "Lab equipment", (2025, 1, 10), Expense),
    ("10", 350.0, "Entertainment", "Gaming cafe with friends", (2025, 1, 9), Expense),
    ("11", 180.0, "Food & Snacks", "Street food", (2025, 1, 8), Expense),
    ("12", 2500.0, "Housing & Rent", "Hostel mess fees", (2025, 1, 5), Expense),
    ("13", 400.0, "Miscellaneous", "Stationery supplies", (2025, 1, 4), Expense),
    ("14", 250.0, "Transportation", "Weekly bus pass", (2025, 1, 3), Expense),
    ("15", 600.0, "Entertainment", "Concert tickets", (2025, 1, 2), Expense),
    ("16", 8000.0, "Pocket Money", "Monthly allowance from parents", (2025, 1, 1), Income),
    ("17", 3000.0, "Part-time Job", "Tutoring younger students", (2025, 1, 7), Income),
    ("18", 1500.0, "Freelancing", "Content writing project", (2025, 1, 10), Income),
    ("19", 2800.0, "Food & Snacks", "Monthly food expenses", (2024, 12, 25), Expense),
    ("20", 1200.0, "Transportation", "December transport", (2024, 12, 20), Expense),
    ("21", 1800.0, "Education & Books", "Semester books", (2024, 12, 15), Expense),
    ("22", 900.0, "Entertainment", "December entertainment", (2024, 12, 10), Expense),
    ("23", 2500.0, "Housing & Rent", "December hostel fees", (2024, 12, 5), Expense),
    ("24", 800.0, "Miscellaneous", "December miscellaneous", (2024, 12, 1), Expense),
    ("25", 2600.0, "Food & Snacks", "November food expenses", (2024, 11, 25), Expense),
    ("26", 1100.0, "Transportation", "November transport", (2024, 11, 20), Expense),
    ("27", 2200.0, "Education & Books", "Mid-sem preparation books", (2024, 11, 15), Expense),
    ("28", 1200.0, "Entertainment", "Diwali celebrations", (2024, 11, 10), Expense),
    ("29", 2400.0, "Food & Snacks", "October food expenses", (2024, 10, 25), Expense),
    ("30", 1000.0, "Transportation", "October transport", (2024, 10, 20), Expense),
    ("31", 2700.0, "Food & Snacks", "September food expenses", (2024, 9, 25), Expense),
    ("32", 1300.0, "Transportation", "September transport", (2024, 9, 20), Expense),
    ("33", 2900.0, "Food & Snacks", "August food expenses", (2024, 8, 25), Expense),
    ("34", 1400.0, "Transportation", "August transport", (2024, 8, 20), Expense),
];

const SAMPLE_BUDGET_ROWS: [(&str, f64, f64, f64); 6] = [
    ("Food & Snacks", 3000.0, 2530.0, 84.3),
    ("Transportation", 1500.0, 950.0, 63.3),
    ("Education & Books", 2000.0, 2000.0, 100.0),
    ("Entertainment", 1000.0, 1250.0, 125.0),
    ("Housing & Rent", 5000.0, 2500.0, 50.0),
    ("Miscellaneous", 1000.0, 900.0, 90.0),
];

pub fn sample_transactions() -> Result<Vec<Transaction>> {
    SAMPLE_ROWS
        .iter()
        .map(|&(id, amount, category, description, (y, m, d), kind)| {
            let date = NaiveDate::from_ymd_opt(y, m, d).ok_or_else(|| {
                FinanceError::InvalidInput(format!("invalid sample date {y}-{m}-{d}"))
            })?;
            Ok(Transaction::with_id(id, kind, amount, category, description, date))
        })
        .collect()
}

/// Stored as shipped; `spent` is refreshed on the next load.
pub fn sample_budgets() -> Vec<BudgetRecord> {
    SAMPLE_BUDGET_ROWS
        .iter()
        .map(|&(category, limit, spent, percentage)| BudgetRecord {
            category: category.to_string(),
            limit,
            spent,
            percentage,
        })
        .collect()
}

/// What `seed_if_empty` wrote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedOutcome {
    pub transactions_seeded: bool,
    pub budgets_seeded: bool,
}

/// Writes each sample record whose document is absent. Existing documents
/// are never touched, even when they hold an empty list.
pub fn seed_if_empty(storage: &dyn StorageBackend) -> Result<SeedOutcome> {
    let mut outcome = SeedOutcome::default();
    if !storage.contains(EXPENSES_KEY)? {
        storage.write_document(EXPENSES_KEY, &serde_json::to_string(&sample_transactions()?)?)?;
        outcome.transactions_seeded = true;
    }
    if !storage.contains(BUDGETS_KEY)? {
        storage.write_document(BUDGETS_KEY, &serde_json::to_string(&sample_budgets())?)?;
        outcome.budgets_seeded = true;
    }
    if outcome.transactions_seeded || outcome.budgets_seeded {
        info!(?outcome, "seeded sample data");
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::services::TransactionService;
    use crate::storage::MemoryStorage;

    #[test]
    fn sample_rows_are_valid_transactions() {
        let transactions = sample_transactions().unwrap();
        assert_eq!(transactions.len(), 34);
        for txn in &transactions {
            TransactionService::validate(txn).unwrap();
        }
        assert_eq!(transactions.iter().filter(|t| t.is_income()).count(), 3);
    }

    #[test]
    fn seeds_only_missing_documents() {
        let storage = MemoryStorage::new();
        storage.write_document(BUDGETS_KEY, "[]").unwrap();
        let outcome = seed_if_empty(&storage).unwrap();
        assert!(outcome.transactions_seeded);
        assert!(!outcome.budgets_seeded);
        assert_eq!(storage.load_transactions().unwrap().len(), 34);
        assert!(storage.load_budgets().unwrap().is_empty());

        let again = seed_if_empty(&storage).unwrap();
        assert_eq!(again, SeedOutcome::default());
    }
}
