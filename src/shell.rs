//! Imperative shell around a session.
//!
//! The presentation layer hands in [`Action`]s and gets back a [`Reply`]:
//! a fresh snapshot plus one [`Notice`] describing what happened. Errors
//! never escape; they become warnings the player can act on.

use crate::config::GameConfig;
use crate::error::GameError;
use crate::record::{RecordOutcome, ResultRecord, ResultRecorder};
use crate::session::{Session, SessionSnapshot};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A user action forwarded by the presentation layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Action {
    SubmitGuess(String),
    Reset,
    /// Save the result of a solved game under an optional name
    SaveScore(Option<String>),
}

/// What the player should be told after an action.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Notice {
    NewGame,
    Scored { attempt: u32, score: u8 },
    /// `recording` carries the auto-record result, if one was attempted
    Solved {
        attempts: u32,
        recording: Option<Box<Notice>>,
    },
    InvalidGuess(String),
    GuessRejected(String),
    Recorded(ResultRecord),
    AlreadyRecorded,
    NotSolved,
    RecordingFailed(String),
    ResultsUnavailable(String),
}

impl Notice {
    /// Warnings are shown to the player but change nothing.
    pub fn is_warning(&self) -> bool {
        match self {
            Self::InvalidGuess(_)
            | Self::GuessRejected(_)
            | Self::NotSolved
            | Self::RecordingFailed(_)
            | Self::ResultsUnavailable(_) => true,
            Self::Solved {
                recording: Some(notice),
                ..
            } => notice.is_warning(),
            _ => false,
        }
    }
}

impl From<GameError> for Notice {
    fn from(error: GameError) -> Self {
        let message = error.to_string();
        match error {
            GameError::InvalidGuessFormat { .. } => Self::InvalidGuess(message),
            GameError::GuessRejected { .. } => Self::GuessRejected(message),
            GameError::NotSolved => Self::NotSolved,
            GameError::RecordingFailed(_) => Self::RecordingFailed(message),
            GameError::ResultsUnavailable(_) => Self::ResultsUnavailable(message),
        }
    }
}

impl From<RecordOutcome> for Notice {
    fn from(outcome: RecordOutcome) -> Self {
        match outcome {
            RecordOutcome::Recorded(record) => Self::Recorded(record),
            RecordOutcome::AlreadyRecorded => Self::AlreadyRecorded,
        }
    }
}

/// Response to an action.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    pub snapshot: SessionSnapshot,
    pub notice: Notice,
}

/// Owns one session and dispatches actions against it.
pub struct GameShell {
    session: Session,
    recorder: ResultRecorder,
    auto_record: bool,
}

impl GameShell {
    pub fn new(recorder: ResultRecorder) -> Self {
        Self::resume(Session::new(), recorder)
    }

    /// Continue an existing session, e.g. one loaded from a session store.
    pub fn resume(session: Session, recorder: ResultRecorder) -> Self {
        Self {
            session,
            recorder,
            auto_record: false,
        }
    }

    /// Build a shell with a new session and the configured store.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(ResultRecorder::new(config.store.open())).with_auto_record(config.auto_record)
    }

    /// Record anonymously as soon as a game is solved.
    pub fn with_auto_record(mut self, enabled: bool) -> Self {
        self.auto_record = enabled;
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Give up the session, e.g. to checkpoint it.
    pub fn into_session(self) -> Session {
        self.session
    }

    pub fn recorder(&self) -> &ResultRecorder {
        &self.recorder
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.session.snapshot()
    }

    /// Apply one action.
    pub async fn handle(&mut self, action: Action) -> Reply {
        debug!(game = %self.session.id(), ?action, "Handling action");
        let notice = match action {
            Action::SubmitGuess(text) => self.submit(&text).await,
            Action::Reset => {
                self.session.reset();
                Notice::NewGame
            }
            Action::SaveScore(name) => self.save(name.as_deref()).await,
        };
        Reply {
            snapshot: self.session.snapshot(),
            notice,
        }
    }

    async fn submit(&mut self, text: &str) -> Notice {
        let outcome = match self.session.submit_guess(text) {
            Ok(outcome) => outcome,
            Err(e) => return e.into(),
        };

        if !outcome.solved() {
            return Notice::Scored {
                attempt: outcome.attempt,
                score: outcome.score.value(),
            };
        }

        let recording = if self.auto_record {
            Some(Box::new(self.save(None).await))
        } else {
            None
        };
        Notice::Solved {
            attempts: outcome.attempt,
            recording,
        }
    }

    async fn save(&mut self, name: Option<&str>) -> Notice {
        match self.recorder.record(&mut self.session, name).await {
            Ok(outcome) => outcome.into(),
            Err(e) => e.into(),
        }
    }
}
