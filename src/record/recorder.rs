//! Effect-based result recording.
//!
//! The append itself is a Stillwater Effect over [`RecorderEnv`]; the
//! recorder wraps it with the precondition checks and the session's
//! recorded flag:
//!
//! - **Pure**: build the `ResultRecord` from the session
//! - **I/O**: append the row through the environment's store
//! - **State**: mark the session recorded only after the append succeeded

use crate::error::GameError;
use crate::record::result::{rank, ResultRecord};
use crate::record::store::{ResultStore, StoreError};
use crate::session::Session;
use chrono::Utc;
use std::sync::Arc;
use stillwater::{from_async, Effect};
use tracing::{info, warn};

/// Environment for recording effects.
#[derive(Clone)]
pub struct RecorderEnv {
    /// Table results are appended to
    pub store: Arc<dyn ResultStore>,
}

impl RecorderEnv {
    pub fn new(store: Arc<dyn ResultStore>) -> Self {
        Self { store }
    }
}

/// Effect: append a record to the store.
///
/// Resolves to the record that was written.
pub fn append_record(
    record: ResultRecord,
) -> impl Effect<Output = ResultRecord, Error = StoreError, Env = RecorderEnv> {
    from_async(move |env: &RecorderEnv| {
        let record = record.clone();
        let store = env.store.clone();

        async move {
            store.append(record.to_row()).await?;
            Ok(record)
        }
    })
}

/// Effect: read every stored record.
pub fn load_records() -> impl Effect<Output = Vec<ResultRecord>, Error = StoreError, Env = RecorderEnv>
{
    from_async(move |env: &RecorderEnv| {
        let store = env.store.clone();

        async move {
            let rows = store.read().await?;
            Ok(rows.into_iter().map(ResultRecord::from).collect())
        }
    })
}

/// Outcome of a record call.
#[derive(Clone, Debug, PartialEq)]
pub enum RecordOutcome {
    /// A new row was appended
    Recorded(ResultRecord),
    /// The session was recorded earlier; nothing was appended
    AlreadyRecorded,
}

/// Records solved sessions exactly once.
#[derive(Clone)]
pub struct ResultRecorder {
    env: RecorderEnv,
}

impl ResultRecorder {
    pub fn new(store: Arc<dyn ResultStore>) -> Self {
        Self {
            env: RecorderEnv::new(store),
        }
    }

    pub fn env(&self) -> &RecorderEnv {
        &self.env
    }

    /// Record a solved session.
    ///
    /// Repeated calls after a success are no-ops. A store failure leaves the
    /// session as it was, so the call can simply be retried.
    pub async fn record(
        &self,
        session: &mut Session,
        player_name: Option<&str>,
    ) -> Result<RecordOutcome, GameError> {
        if !session.is_solved() {
            return Err(GameError::NotSolved);
        }
        if session.is_recorded() {
            return Ok(RecordOutcome::AlreadyRecorded);
        }

        let record = ResultRecord::from_session(session, player_name, Utc::now());
        match append_record(record).run(&self.env).await {
            Ok(record) => {
                session.mark_recorded();
                info!(
                    game = %session.id(),
                    attempts = record.attempt_count,
                    player = record.player_name.as_deref().unwrap_or("anonymous"),
                    "Result recorded"
                );
                Ok(RecordOutcome::Recorded(record))
            }
            Err(e) => {
                warn!(game = %session.id(), error = %e, "Recording failed");
                Err(GameError::RecordingFailed(e))
            }
        }
    }

    /// Best stored results, fewest attempts first.
    pub async fn leaderboard(&self, limit: usize) -> Result<Vec<ResultRecord>, GameError> {
        let records = load_records()
            .run(&self.env)
            .await
            .map_err(GameError::ResultsUnavailable)?;
        let mut ranked = rank(records);
        ranked.truncate(limit);
        Ok(ranked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Secret, ALPHABET};
    use crate::record::MemoryStore;

    fn solved_session() -> Session {
        let mut session = Session::with_secret(Secret::from_symbols(ALPHABET).unwrap());
        session.submit_guess("abcd").unwrap();
        session
    }

    #[tokio::test]
    async fn append_effect_writes_row() {
        let store = Arc::new(MemoryStore::new());
        let env = RecorderEnv::new(store.clone());
        let record = ResultRecord {
            player_name: Some("Ada".to_string()),
            attempt_count: 2,
            timestamp: Utc::now(),
        };

        let written = append_record(record.clone()).run(&env).await.unwrap();

        assert_eq!(written, record);
        assert_eq!(store.read().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn record_requires_solved_session() {
        let recorder = ResultRecorder::new(Arc::new(MemoryStore::new()));
        let mut session = Session::seeded(1);

        let result = recorder.record(&mut session, Some("Ada")).await;

        assert!(matches!(result, Err(GameError::NotSolved)));
        assert!(!session.is_recorded());
    }

    #[tokio::test]
    async fn record_is_idempotent() {
        let store = Arc::new(MemoryStore::new());
        let recorder = ResultRecorder::new(store.clone());
        let mut session = solved_session();

        let first = recorder.record(&mut session, Some("Ada")).await.unwrap();
        let second = recorder.record(&mut session, Some("Ada")).await.unwrap();

        assert!(matches!(first, RecordOutcome::Recorded(_)));
        assert_eq!(second, RecordOutcome::AlreadyRecorded);
        assert_eq!(store.read().await.unwrap().len(), 1);
        assert!(session.is_recorded());
    }

    #[tokio::test]
    async fn leaderboard_ranks_and_limits() {
        let store = Arc::new(MemoryStore::new());
        let recorder = ResultRecorder::new(store);

        for guesses in [&["dcba", "abcd"][..], &["abcd"][..], &["badc", "dcba", "abcd"][..]] {
            let mut session = Session::with_secret(Secret::from_symbols(ALPHABET).unwrap());
            for guess in guesses {
                session.submit_guess(guess).unwrap();
            }
            recorder.record(&mut session, None).await.unwrap();
        }

        let board = recorder.leaderboard(2).await.unwrap();
        let attempts: Vec<u32> = board.iter().map(|r| r.attempt_count).collect();
        assert_eq!(attempts, vec![1, 2]);
    }

    #[tokio::test]
    async fn unreadable_results_are_not_a_recording_failure() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("results.csv");
        std::fs::write(&path, "Player,Score\nbob,3\n").unwrap();
        let recorder = ResultRecorder::new(Arc::new(crate::record::CsvStore::new(&path)));

        let result = recorder.leaderboard(10).await;
        assert!(matches!(
            result,
            Err(GameError::ResultsUnavailable(StoreError::SchemaMismatch { .. }))
        ));
    }
}
