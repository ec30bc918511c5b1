use std::collections::BTreeMap;

use crate::core::calendar::{month_label, parse_month_key};
use crate::domain::{MonthlySeries, Transaction};

/// Number of most recent month buckets kept for the trend chart.
pub const MAX_MONTH_BUCKETS: usize = 6;

pub struct SeriesService;

impl SeriesService {
    /// Buckets every expense (regardless of period) by `YYYY-MM` and keeps the
    /// latest [`MAX_MONTH_BUCKETS`] buckets in chronological order.
    ///
    /// Months without expenses are absent rather than zero-filled.
    pub fn monthly(transactions: &[Transaction]) -> MonthlySeries {
        let mut buckets: BTreeMap<String, f64> = BTreeMap::new();
        for txn in transactions.iter().filter(|txn| txn.is_expense()) {
            *buckets.entry(txn.month_key()).or_insert(0.0) += txn.amount;
        }

        let skip = buckets.len().saturating_sub(MAX_MONTH_BUCKETS);
        let mut series = MonthlySeries::default();
        for (key, amount) in buckets.into_iter().skip(skip) {
            let label = parse_month_key(&key)
                .map(|(year, month)| month_label(year, month))
                .unwrap_or_else(|| key.clone());
            series.keys.push(key);
            series.labels.push(label);
            series.amounts.push(amount);
        }
        series
    }
}
