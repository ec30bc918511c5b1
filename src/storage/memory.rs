use std::collections::HashMap;
use std::sync::RwLock;

use crate::errors::{FinanceError, Result};

use super::StorageBackend;

/// Volatile document store, useful for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    documents: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn read_document(&self, key: &str) -> Result<Option<String>> {
        let docs = self
            .documents
            .read()
            .map_err(|_| FinanceError::StorageError("memory store lock poisoned".into()))?;
        Ok(docs.get(key).cloned())
    }

    fn write_document(&self, key: &str, contents: &str) -> Result<()> {
        let mut docs = self
            .documents
            .write()
            .map_err(|_| FinanceError::StorageError("memory store lock poisoned".into()))?;
        docs.insert(key.to_string(), contents.to_string());
        Ok(())
    }
}
