pub mod budget_service;
pub mod category_service;
pub mod insight_service;
pub mod series_service;
pub mod transaction_service;

pub use budget_service::BudgetService;
pub use category_service::CategoryService;
pub use insight_service::InsightService;
pub use series_service::SeriesService;
pub use transaction_service::{LedgerFilter, TransactionService};

use crate::errors::FinanceError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Core(#[from] FinanceError),
    #[error("{0}")]
    Invalid(String),
}
