//! Temporal windows for aggregate queries.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};

use crate::core::calendar::{previous_month, same_month, shift_month};
use crate::domain::PeriodSelector;

const SECONDS_PER_DAY: i64 = 86_400;
const LAST_3_MONTHS_DAYS: u32 = 90;
const LAST_6_MONTHS_DAYS: u32 = 180;

/// Decides period membership relative to an explicit reference instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodFilter {
    selector: PeriodSelector,
    now: DateTime<Utc>,
}

impl PeriodFilter {
    pub fn new(selector: PeriodSelector, now: DateTime<Utc>) -> Self {
        Self { selector, now }
    }

    pub fn selector(&self) -> PeriodSelector {
        self.selector
    }

    pub fn today(&self) -> NaiveDate {
        self.now.date_naive()
    }

    /// First day included by the rolling selectors; `None` for calendar-aligned ones.
    pub fn lower_bound(&self) -> Option<NaiveDate> {
        self.selector
            .lookback_months()
            .map(|months| shift_month(self.today(), -(months as i32)))
    }

    /// Dates after today are not rejected by the calendar-aligned selectors.
    pub fn contains(&self, date: NaiveDate) -> bool {
        let today = self.today();
        match self.selector {
            PeriodSelector::CurrentMonth => same_month(date, today),
            PeriodSelector::CurrentYear => date.year() == today.year(),
            PeriodSelector::Last3Months | PeriodSelector::Last6Months => self
                .lower_bound()
                .map(|lower| date >= lower && date <= today)
                .unwrap_or(false),
        }
    }

    /// Denominator for the daily average.
    ///
    /// This is an approximation, not a count of days carrying transactions:
    /// rolling windows use fixed day counts, the current month uses the
    /// day-of-month, and the current year uses the elapsed days rounded up.
    pub fn days_in_period(&self) -> u32 {
        match self.selector {
            PeriodSelector::CurrentMonth => self.today().day(),
            PeriodSelector::Last3Months => LAST_3_MONTHS_DAYS,
            PeriodSelector::Last6Months => LAST_6_MONTHS_DAYS,
            PeriodSelector::CurrentYear => self.elapsed_days_this_year(),
        }
    }

    /// True when `date` falls in the calendar month preceding today's month.
    pub fn previous_month_contains(&self, date: NaiveDate) -> bool {
        let (year, month) = previous_month(self.today());
        date.year() == year && date.month() == month
    }

    fn elapsed_days_this_year(&self) -> u32 {
        let start = match Utc
            .with_ymd_and_hms(self.now.year(), 1, 1, 0, 0, 0)
            .single()
        {
            Some(start) => start,
            None => return 0,
        };
        let seconds = (self.now - start).num_seconds().max(0);
        let days = (seconds + SECONDS_PER_DAY - 1) / SECONDS_PER_DAY;
        days as u32
    }
}
