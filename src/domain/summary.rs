//! Derived aggregate structures produced by the aggregation services.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Category → amount mapping that remembers first-insertion order.
///
/// The order matters: [`CategoryTotals::top_category`] resolves ties in favour
/// of the category that was seen first.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CategoryTotals {
    entries: Vec<(String, f64)>,
}

impl CategoryTotals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, category: &str, amount: f64) {
        match self.entries.iter_mut().find(|(name, _)| name == category) {
            Some((_, total)) => *total += amount,
            None => self.entries.push((category.to_string(), amount)),
        }
    }

    pub fn get(&self, category: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, total)| *total)
    }

    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, total)| total).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.entries
            .iter()
            .map(|(name, total)| (name.as_str(), *total))
    }

    /// Category with the largest total; the earliest inserted wins a tie.
    /// Returns an empty string when nothing was recorded.
    pub fn top_category(&self) -> String {
        let mut best: Option<(&str, f64)> = None;
        for (name, total) in self.iter() {
            match best {
                Some((_, current)) if total <= current => {}
                _ => best = Some((name, total)),
            }
        }
        best.map(|(name, _)| name.to_string()).unwrap_or_default()
    }
}

/// Pie-chart slice for a category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySlice {
    pub category: String,
    pub amount: f64,
    pub share: f64,
    pub color: &'static str,
    pub icon: &'static str,
}

/// Qualitative direction of spending versus the previous month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    #[default]
    Neutral,
}

impl Trend {
    const UPPER_BAND: f64 = 1.1;
    const LOWER_BAND: f64 = 0.9;

    /// `Up` above +10% of `previous`, `Down` below -10%, otherwise `Neutral`.
    pub fn compare(current: f64, previous: f64) -> Self {
        if current > previous * Self::UPPER_BAND {
            Trend::Up
        } else if current < previous * Self::LOWER_BAND {
            Trend::Down
        } else {
            Trend::Neutral
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Trend::Up => "up",
            Trend::Down => "down",
            Trend::Neutral => "neutral",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InsightSummary {
    pub total_spent: f64,
    pub average_daily: f64,
    pub top_category: String,
    pub trend: Trend,
    pub savings_rate: f64,
}

/// Chronological monthly expense totals as parallel arrays.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MonthlySeries {
    pub keys: Vec<String>,
    pub labels: Vec<String>,
    pub amounts: Vec<f64>,
}

impl MonthlySeries {
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.labels
            .iter()
            .zip(self.amounts.iter())
            .map(|(label, amount)| (label.as_str(), *amount))
    }
}

/// Income, expense and balance for a set of transactions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CashFlowTotals {
    pub income: f64,
    pub expenses: f64,
    pub balance: f64,
}
