use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::category::CategoryKind;

/// A single income or expense entry. Entries are never edited after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: String,
    pub amount: f64,
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: CategoryKind,
}

impl Transaction {
    /// Builds a transaction with a freshly generated identifier.
    pub fn new(
        kind: CategoryKind,
        amount: f64,
        category: impl Into<String>,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self::with_id(
            Uuid::new_v4().to_string(),
            kind,
            amount,
            category,
            description,
            date,
        )
    }

    pub fn with_id(
        id: impl Into<String>,
        kind: CategoryKind,
        amount: f64,
        category: impl Into<String>,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            amount,
            category: category.into(),
            description: description.into(),
            date,
            kind,
        }
    }

    pub fn is_expense(&self) -> bool {
        self.kind == CategoryKind::Expense
    }

    pub fn is_income(&self) -> bool {
        self.kind == CategoryKind::Income
    }

    /// Calendar bucket key in `YYYY-MM` form.
    pub fn month_key(&self) -> String {
        format!("{:04}-{:02}", self.date.year(), self.date.month())
    }
}
