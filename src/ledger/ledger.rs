use serde::{Deserialize, Serialize};

use crate::domain::{BudgetRecord, Transaction};

/// In-memory source of truth: the transaction list plus the last computed budgets.
///
/// Transactions are kept newest-added first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    pub transactions: Vec<Transaction>,
    pub budgets: Vec<BudgetRecord>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(transactions: Vec<Transaction>, budgets: Vec<BudgetRecord>) -> Self {
        Self {
            transactions,
            budgets,
        }
    }

    /// Prepends the transaction and returns its identifier.
    pub fn add_transaction(&mut self, transaction: Transaction) -> String {
        let id = transaction.id.clone();
        self.transactions.insert(0, transaction);
        id
    }

    pub fn remove_transaction(&mut self, id: &str) -> Option<Transaction> {
        let index = self.transactions.iter().position(|txn| txn.id == id)?;
        Some(self.transactions.remove(index))
    }

    pub fn transaction(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.transaction(id).is_some()
    }

    /// Transactions whose identifier starts with `prefix`.
    pub fn find_by_prefix(&self, prefix: &str) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|txn| txn.id.starts_with(prefix))
            .collect()
    }

    pub fn budget(&self, category: &str) -> Option<&BudgetRecord> {
        self.budgets.iter().find(|record| record.category == category)
    }

    pub fn replace_budgets(&mut self, budgets: Vec<BudgetRecord>) {
        self.budgets = budgets;
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
