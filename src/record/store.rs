//! The external results table.

use crate::record::result::ResultRow;
use async_trait::async_trait;
use std::sync::Mutex;
use thiserror::Error;

/// Storage error types
#[derive(Error, Debug)]
pub enum StoreError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Reading or writing a CSV table failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The table does not have the expected columns
    #[error("Schema mismatch: expected columns {expected:?}, found {found:?}")]
    SchemaMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },

    /// Storage backend unavailable
    #[error("Backend unavailable: {0}")]
    Unavailable(String),
}

/// Tabular store that results are appended to.
///
/// Implementations may block or fail; callers treat every failure as
/// retryable.
#[async_trait]
pub trait ResultStore: Send + Sync {
    /// Read every row, oldest first.
    async fn read(&self) -> Result<Vec<ResultRow>, StoreError>;

    /// Append one row.
    async fn append(&self, row: ResultRow) -> Result<(), StoreError>;
}

/// In-process table.
#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: Mutex<Vec<ResultRow>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<ResultRow>>, StoreError> {
        self.rows
            .lock()
            .map_err(|e| StoreError::Unavailable(format!("memory store poisoned: {e}")))
    }
}

#[async_trait]
impl ResultStore for MemoryStore {
    async fn read(&self) -> Result<Vec<ResultRow>, StoreError> {
        Ok(self.lock()?.clone())
    }

    async fn append(&self, row: ResultRow) -> Result<(), StoreError> {
        self.lock()?.push(row);
        Ok(())
    }
}
