//! Storage port for the persisted documents.
//!
//! Three named records are kept: the transaction list, the last computed
//! budget list, and a timestamped backup of the transactions rewritten on
//! every transaction save. Backends only move serialized documents around;
//! decoding is shared by the provided methods below.

pub mod json_backend;
pub mod memory;

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::warn;

use crate::domain::{BudgetRecord, Transaction};
use crate::errors::Result;

pub use json_backend::JsonStorage;
pub use memory::MemoryStorage;

pub const EXPENSES_KEY: &str = "student_finance_expenses";
pub const BUDGETS_KEY: &str = "student_finance_budgets";
pub const BACKUP_KEY: &str = "student_finance_backup";

/// Snapshot written alongside every transaction save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackupSnapshot {
    pub expenses: Vec<Transaction>,
    pub timestamp: DateTime<Utc>,
}

/// Abstraction over key/value document stores.
pub trait StorageBackend: Send + Sync {
    /// Returns the raw document stored under `key`, if any.
    fn read_document(&self, key: &str) -> Result<Option<String>>;

    fn write_document(&self, key: &str, contents: &str) -> Result<()>;

    fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.read_document(key)?.is_some())
    }

    /// Missing or malformed documents load as an empty list.
    fn load_transactions(&self) -> Result<Vec<Transaction>> {
        Ok(read_lenient(self, EXPENSES_KEY)?.unwrap_or_default())
    }

    /// Persists the transaction list and refreshes the backup snapshot.
    fn save_transactions(&self, transactions: &[Transaction], now: DateTime<Utc>) -> Result<()> {
        self.write_document(EXPENSES_KEY, &serde_json::to_string(transactions)?)?;
        let snapshot = BackupSnapshot {
            expenses: transactions.to_vec(),
            timestamp: now,
        };
        self.write_document(BACKUP_KEY, &serde_json::to_string(&snapshot)?)
    }

    fn load_budgets(&self) -> Result<Vec<BudgetRecord>> {
        Ok(read_lenient(self, BUDGETS_KEY)?.unwrap_or_default())
    }

    fn save_budgets(&self, budgets: &[BudgetRecord]) -> Result<()> {
        self.write_document(BUDGETS_KEY, &serde_json::to_string(budgets)?)
    }

    fn load_backup(&self) -> Result<Option<BackupSnapshot>> {
        read_lenient(self, BACKUP_KEY)
    }
}

fn read_lenient<S, T>(storage: &S, key: &str) -> Result<Option<T>>
where
    S: StorageBackend + ?Sized,
    T: DeserializeOwned,
{
    let Some(raw) = storage.read_document(key)? else {
        return Ok(None);
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(err) => {
            warn!(key, error = %err, "ignoring malformed document");
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CategoryKind;
    use chrono::{NaiveDate, TimeZone};

    fn sample() -> Vec<Transaction> {
        vec![Transaction::with_id(
            "1",
            CategoryKind::Expense,
            250.0,
            "Food & Snacks",
            "College canteen lunch",
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        )]
    }

    #[test]
    fn save_transactions_writes_backup_snapshot() {
        let storage = MemoryStorage::new();
        let now = Utc.with_ymd_and_hms(2025, 1, 15, 10, 30, 0).unwrap();
        storage.save_transactions(&sample(), now).unwrap();

        assert_eq!(storage.load_transactions().unwrap(), sample());
        let backup = storage.load_backup().unwrap().expect("backup written");
        assert_eq!(backup.expenses, sample());
        assert_eq!(backup.timestamp, now);
    }

    #[test]
    fn malformed_documents_load_as_empty() {
        let storage = MemoryStorage::new();
        storage.write_document(EXPENSES_KEY, "{not json").unwrap();
        storage.write_document(BUDGETS_KEY, "[{\"limit\": 5}]").unwrap();
        assert!(storage.load_transactions().unwrap().is_empty());
        assert!(storage.load_budgets().unwrap().is_empty());
        assert!(storage.load_backup().unwrap().is_none());
    }
}
