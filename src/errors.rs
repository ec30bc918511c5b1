use std::result::Result as StdResult;

use thiserror::Error;

/// Unified error type for the domain, storage and export layers.
#[derive(Error, Debug)]
pub enum FinanceError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Category not found: {0}")]
    CategoryNotFound(String),
    #[error("Transaction not found: {0}")]
    TransactionNotFound(String),
    #[error("Duplicate transaction id: {0}")]
    DuplicateTransaction(String),
    #[error("Persistence error: {0}")]
    StorageError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Export failed: {0}")]
    ExportError(String),
}

pub type Result<T> = StdResult<T, FinanceError>;

impl From<std::io::Error> for FinanceError {
    fn from(err: std::io::Error) -> Self {
        FinanceError::StorageError(err.to_string())
    }
}

impl From<serde_json::Error> for FinanceError {
    fn from(err: serde_json::Error) -> Self {
        FinanceError::StorageError(err.to_string())
    }
}

impl From<csv::Error> for FinanceError {
    fn from(err: csv::Error) -> Self {
        FinanceError::ExportError(err.to_string())
    }
}
