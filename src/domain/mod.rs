pub mod budget;
pub mod category;
pub mod period;
pub mod summary;
pub mod transaction;

pub use budget::{BudgetComparison, BudgetRecord, BudgetStatus};
pub use category::{CategoryKind, CategoryStyle, EXPENSE_CATEGORIES, INCOME_CATEGORIES};
pub use period::PeriodSelector;
pub use summary::{
    CashFlowTotals, CategorySlice, CategoryTotals, InsightSummary, MonthlySeries, Trend,
};
pub use transaction::Transaction;
