#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use chrono::{DateTime, NaiveDate, Utc};
use once_cell::sync::Lazy;
use student_finance::{
    core::{clock::FixedClock, ledger_manager::LedgerManager},
    domain::{CategoryKind, Transaction},
    storage::json_backend::JsonStorage,
};
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Noon UTC on the given day.
pub fn noon(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    FixedClock::at_date(date(y, m, d)).0
}

pub fn expense(amount: f64, category: &str, on: NaiveDate) -> Transaction {
    Transaction::new(CategoryKind::Expense, amount, category, "expense", on)
}

pub fn income(amount: f64, category: &str, on: NaiveDate) -> Transaction {
    Transaction::new(CategoryKind::Income, amount, category, "income", on)
}

/// Creates a temp directory that outlives the calling test.
pub fn temp_base() -> std::path::PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

/// Manager over a fresh JSON store whose clock is pinned to `today`.
pub fn setup_manager(today: NaiveDate) -> (LedgerManager, std::path::PathBuf) {
    let base = temp_base();
    let storage = JsonStorage::new(Some(base.clone())).expect("create json storage backend");
    let manager = LedgerManager::new(Box::new(storage), Arc::new(FixedClock::at_date(today)));
    (manager, base)
}
