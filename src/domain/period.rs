use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::FinanceError;

/// Relative time window used to scope aggregate queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PeriodSelector {
    #[default]
    CurrentMonth,
    #[serde(rename = "last-3-months")]
    Last3Months,
    #[serde(rename = "last-6-months")]
    Last6Months,
    CurrentYear,
}

impl PeriodSelector {
    pub const ALL: [PeriodSelector; 4] = [
        PeriodSelector::CurrentMonth,
        PeriodSelector::Last3Months,
        PeriodSelector::Last6Months,
        PeriodSelector::CurrentYear,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PeriodSelector::CurrentMonth => "current-month",
            PeriodSelector::Last3Months => "last-3-months",
            PeriodSelector::Last6Months => "last-6-months",
            PeriodSelector::CurrentYear => "current-year",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PeriodSelector::CurrentMonth => "Current Month",
            PeriodSelector::Last3Months => "Last 3 Months",
            PeriodSelector::Last6Months => "Last 6 Months",
            PeriodSelector::CurrentYear => "Current Year",
        }
    }

    /// Number of calendar months looked back by the rolling selectors.
    pub fn lookback_months(self) -> Option<u32> {
        match self {
            PeriodSelector::Last3Months => Some(3),
            PeriodSelector::Last6Months => Some(6),
            PeriodSelector::CurrentMonth | PeriodSelector::CurrentYear => None,
        }
    }
}

impl fmt::Display for PeriodSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PeriodSelector {
    type Err = FinanceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let needle = value.trim().to_ascii_lowercase();
        PeriodSelector::ALL
            .into_iter()
            .find(|period| period.as_str() == needle)
            .ok_or_else(|| {
                FinanceError::InvalidInput(format!(
                    "unknown period `{}` (expected one of: current-month, last-3-months, last-6-months, current-year)",
                    value
                ))
            })
    }
}
