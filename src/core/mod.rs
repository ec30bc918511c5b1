pub mod calendar;
pub mod clock;
pub mod ledger_manager;
pub mod period_filter;
pub mod services;

pub use clock::{Clock, FixedClock, SystemClock};
pub use ledger_manager::{LedgerManager, LoadReport, NewTransaction};
pub use period_filter::PeriodFilter;
