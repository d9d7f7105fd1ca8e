//! File-backed results table in CSV format.

use crate::record::result::{ResultRow, COLUMNS};
use crate::record::store::{ResultStore, StoreError};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Results table stored as a CSV file with a `Name,Attempts,Date` header.
///
/// A missing or empty file reads as an empty table. Appends create the file
/// and write the header on first use.
#[derive(Debug)]
pub struct CsvStore {
    path: PathBuf,
    // serializes appends from this process
    write_lock: Mutex<()>,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw table contents; a missing file is an empty table.
    async fn load(&self) -> Result<Vec<u8>, StoreError> {
        match fs::read(&self.path).await {
            Ok(data) => Ok(data),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn check_headers(&self, reader: &mut csv::Reader<&[u8]>) -> Result<(), StoreError> {
        let found: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        if found.iter().map(String::as_str).eq(COLUMNS.iter().copied()) {
            return Ok(());
        }
        warn!(path = %self.path.display(), ?found, "Results table has unexpected columns");
        Err(StoreError::SchemaMismatch {
            expected: COLUMNS.iter().map(|c| c.to_string()).collect(),
            found,
        })
    }

    fn parse_rows(&self, data: &[u8]) -> Result<Vec<ResultRow>, StoreError> {
        if data.is_empty() {
            return Ok(Vec::new());
        }

        let mut reader = csv::Reader::from_reader(data);
        self.check_headers(&mut reader)?;

        let mut rows = Vec::new();
        for result in reader.deserialize() {
            rows.push(result?);
        }
        Ok(rows)
    }
}

/// Encode one row, preceded by the header when the table is new.
fn encode_row(row: &ResultRow, with_header: bool) -> Result<Vec<u8>, StoreError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(with_header)
        .from_writer(Vec::new());
    writer.serialize(row)?;
    writer
        .into_inner()
        .map_err(|e| StoreError::Io(e.into_error()))
}

#[async_trait]
impl ResultStore for CsvStore {
    async fn read(&self) -> Result<Vec<ResultRow>, StoreError> {
        let data = self.load().await?;
        self.parse_rows(&data)
    }

    async fn append(&self, row: ResultRow) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;

        let existing = self.load().await?;
        let blank = existing.is_empty();
        if !blank {
            let mut reader = csv::Reader::from_reader(existing.as_slice());
            self.check_headers(&mut reader)?;
        }

        let mut bytes = Vec::new();
        if existing.last().is_some_and(|&b| b != b'\n') {
            debug!(path = %self.path.display(), "Terminating last line before append");
            bytes.push(b'\n');
        }
        bytes.extend(encode_row(&row, blank)?);

        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(&bytes).await?;
        file.flush().await?;
        Ok(())
    }
}
