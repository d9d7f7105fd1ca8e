//! Recording behaviour against well-behaved and failing stores.

use async_trait::async_trait;
use cup_match::checkpoint::{MemorySessionStore, SessionStore};
use cup_match::core::{Secret, ALPHABET};
use cup_match::record::{CsvStore, MemoryStore, RecordOutcome, ResultRow, StoreError};
use cup_match::{Action, GameError, GameShell, Notice, ResultRecorder, ResultStore, Session};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

/// Store that refuses appends until switched on.
#[derive(Default)]
struct FlakyStore {
    online: AtomicBool,
    appends: AtomicUsize,
    inner: MemoryStore,
}

impl FlakyStore {
    fn set_online(&self, online: bool) {
        self.online.store(online, Ordering::SeqCst);
    }
}

#[async_trait]
impl ResultStore for FlakyStore {
    async fn read(&self) -> Result<Vec<ResultRow>, StoreError> {
        self.inner.read().await
    }

    async fn append(&self, row: ResultRow) -> Result<(), StoreError> {
        if !self.online.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("store offline".to_string()));
        }
        self.appends.fetch_add(1, Ordering::SeqCst);
        self.inner.append(row).await
    }
}

fn solved_session() -> Session {
    let mut session = Session::with_secret(Secret::from_symbols(ALPHABET).unwrap());
    session.submit_guess("dcba").unwrap();
    session.submit_guess("abdc").unwrap();
    session.submit_guess("abcd").unwrap();
    session
}

#[tokio::test]
async fn failed_recording_keeps_the_win_and_can_be_retried() {
    let store = Arc::new(FlakyStore::default());
    let recorder = ResultRecorder::new(store.clone());
    let mut session = solved_session();

    let result = recorder.record(&mut session, Some("Ada")).await;
    match result {
        Err(GameError::RecordingFailed(StoreError::Unavailable(cause))) => {
            assert_eq!(cause, "store offline")
        }
        other => panic!("Expected RecordingFailed, got {other:?}"),
    }
    assert!(session.is_solved());
    assert!(!session.is_recorded());
    assert_eq!(session.attempt_count(), 3);

    store.set_online(true);
    let outcome = recorder.record(&mut session, Some("Ada")).await.unwrap();

    match outcome {
        RecordOutcome::Recorded(record) => {
            assert_eq!(record.player_name.as_deref(), Some("Ada"));
            assert_eq!(record.attempt_count, 3);
        }
        RecordOutcome::AlreadyRecorded => panic!("Expected a fresh recording"),
    }
    assert!(session.is_recorded());
    assert_eq!(store.appends.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn record_twice_appends_once() {
    let store = Arc::new(FlakyStore::default());
    store.set_online(true);
    let recorder = ResultRecorder::new(store.clone());
    let mut session = solved_session();

    recorder.record(&mut session, None).await.unwrap();
    let again = recorder.record(&mut session, None).await.unwrap();

    assert_eq!(again, RecordOutcome::AlreadyRecorded);
    assert_eq!(store.appends.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn shell_reports_failure_as_warning() {
    let store = Arc::new(FlakyStore::default());
    let session = Session::with_secret(Secret::from_symbols(ALPHABET).unwrap());
    let mut shell = GameShell::resume(session, ResultRecorder::new(store.clone()));
    shell.handle(Action::SubmitGuess("abcd".into())).await;

    let reply = shell.handle(Action::SaveScore(Some("Ada".into()))).await;
    assert!(matches!(reply.notice, Notice::RecordingFailed(ref m) if m.contains("store offline")));
    assert!(reply.notice.is_warning());
    assert!(reply.snapshot.solved);
    assert!(!reply.snapshot.recorded);

    store.set_online(true);
    let reply = shell.handle(Action::SaveScore(Some("Ada".into()))).await;
    assert!(matches!(reply.notice, Notice::Recorded(_)));
    assert!(reply.snapshot.recorded);
}

#[tokio::test]
async fn auto_record_failure_does_not_undo_solve() {
    let store = Arc::new(FlakyStore::default());
    let session = Session::with_secret(Secret::from_symbols(ALPHABET).unwrap());
    let mut shell =
        GameShell::resume(session, ResultRecorder::new(store.clone())).with_auto_record(true);

    let reply = shell.handle(Action::SubmitGuess("abcd".into())).await;

    match &reply.notice {
        Notice::Solved {
            attempts: 1,
            recording: Some(notice),
        } => assert!(matches!(**notice, Notice::RecordingFailed(_))),
        other => panic!("Expected Solved with failed recording, got {other:?}"),
    }
    assert!(reply.notice.is_warning());
    assert!(reply.snapshot.solved);
}

#[tokio::test]
async fn csv_store_collects_results_across_games() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("results.csv");
    let recorder = ResultRecorder::new(Arc::new(CsvStore::new(&path)));

    let mut session = Session::with_secret(Secret::from_symbols(ALPHABET).unwrap());
    session.submit_guess("abcd").unwrap();
    recorder.record(&mut session, Some("Ada")).await.unwrap();

    recorder
        .record(&mut solved_session(), Some("Grace"))
        .await
        .unwrap();

    let board = recorder.leaderboard(10).await.unwrap();
    let names: Vec<_> = board
        .iter()
        .map(|r| r.player_name.clone().unwrap_or_default())
        .collect();
    assert_eq!(names, vec!["Ada", "Grace"]);

    let reopened = CsvStore::new(&path);
    assert_eq!(reopened.read().await.unwrap().len(), 2);
}

#[tokio::test]
async fn session_survives_between_interactions() {
    let sessions = MemorySessionStore::new();
    let results = Arc::new(MemoryStore::new());
    let key = "connection-42";

    // first interaction: start a game and make a guess
    let session = Session::with_secret(Secret::from_symbols(ALPHABET).unwrap());
    let mut shell = GameShell::resume(session, ResultRecorder::new(results.clone()));
    shell.handle(Action::SubmitGuess("abdc".into())).await;
    sessions.save(key, shell.session()).unwrap();

    // second interaction: pick up where the player left off
    let session = sessions.load(key).unwrap().unwrap();
    let mut shell = GameShell::resume(session, ResultRecorder::new(results.clone()));
    let reply = shell.handle(Action::SubmitGuess("abcd".into())).await;

    assert_eq!(
        reply.notice,
        Notice::Solved {
            attempts: 2,
            recording: None
        }
    );
    let reply = shell.handle(Action::SaveScore(None)).await;
    assert!(matches!(reply.notice, Notice::Recorded(_)));
    sessions.save(key, &shell.into_session()).unwrap();

    // a stored, recorded session stays recorded
    let session = sessions.load(key).unwrap().unwrap();
    assert!(session.is_recorded());
    assert_eq!(results.read().await.unwrap().len(), 1);
}
