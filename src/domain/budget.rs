use std::fmt;

use serde::{Deserialize, Serialize};

const WARNING_THRESHOLD: f64 = 80.0;
const OVER_THRESHOLD: f64 = 100.0;

/// Monthly limit/spent snapshot for one expense category.
///
/// `spent` and `percentage` are always derived; only `limit` carries user intent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetRecord {
    pub category: String,
    #[serde(default)]
    pub limit: f64,
    #[serde(default)]
    pub spent: f64,
    #[serde(default)]
    pub percentage: f64,
}

impl BudgetRecord {
    pub fn new(category: impl Into<String>, limit: f64, spent: f64) -> Self {
        Self {
            category: category.into(),
            limit,
            spent,
            percentage: usage_percentage(spent, limit),
        }
    }

    pub fn status(&self) -> BudgetStatus {
        BudgetStatus::from_percentage(self.percentage)
    }

    /// Percentage clamped to `[0, 100]` for progress bars.
    pub fn progress(&self) -> f64 {
        self.percentage.clamp(0.0, 100.0)
    }

    pub fn remaining(&self) -> f64 {
        self.limit - self.spent
    }
}

/// `spent / limit * 100`, or `0` whenever the ratio is undefined.
pub fn usage_percentage(spent: f64, limit: f64) -> f64 {
    if limit > 0.0 && limit.is_finite() {
        spent / limit * 100.0
    } else {
        0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetStatus {
    OnTrack,
    Warning,
    Over,
}

impl BudgetStatus {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage > OVER_THRESHOLD {
            BudgetStatus::Over
        } else if percentage > WARNING_THRESHOLD {
            BudgetStatus::Warning
        } else {
            BudgetStatus::OnTrack
        }
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BudgetStatus::OnTrack => "on track",
            BudgetStatus::Warning => "warning",
            BudgetStatus::Over => "over budget",
        };
        f.write_str(label)
    }
}

/// Spent-versus-default-limit row used by the budget comparison chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetComparison {
    pub category: String,
    pub spent: f64,
    pub limit: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_limit_yields_zero_percentage() {
        let record = BudgetRecord::new("Entertainment", 0.0, 450.0);
        assert_eq!(record.percentage, 0.0);
        assert!(record.percentage.is_finite());
    }

    #[test]
    fn status_thresholds_are_exclusive() {
        assert_eq!(BudgetStatus::from_percentage(80.0), BudgetStatus::OnTrack);
        assert_eq!(BudgetStatus::from_percentage(80.1), BudgetStatus::Warning);
        assert_eq!(BudgetStatus::from_percentage(100.0), BudgetStatus::Warning);
        assert_eq!(BudgetStatus::from_percentage(125.0), BudgetStatus::Over);
    }

    #[test]
    fn progress_is_clamped() {
        let record = BudgetRecord::new("Entertainment", 1000.0, 1250.0);
        assert_eq!(record.percentage, 125.0);
        assert_eq!(record.progress(), 100.0);
        assert_eq!(record.remaining(), -250.0);
    }

    #[test]
    fn missing_fields_deserialize_as_zero() {
        let record: BudgetRecord =
            serde_json::from_str(r#"{"category":"Transportation"}"#).unwrap();
        assert_eq!(record.limit, 0.0);
        assert_eq!(record.spent, 0.0);
    }
}
