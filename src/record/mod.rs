//! Result recording.
//!
//! Solved sessions become [`ResultRecord`]s appended to an external table
//! through the [`ResultStore`] capability. The store is opaque: it may be
//! in memory, a CSV file, or anything else that can read and append rows.

mod csv_store;
mod recorder;
mod result;
mod store;

pub use csv_store::CsvStore;
pub use recorder::{append_record, load_records, RecordOutcome, RecorderEnv, ResultRecorder};
pub use result::{rank, ResultRecord, ResultRow, COLUMNS};
pub use store::{MemoryStore, ResultStore, StoreError};
