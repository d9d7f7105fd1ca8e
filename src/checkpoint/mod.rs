//! Checkpoint and resume for sessions.
//!
//! Sessions live between interactions as versioned checkpoints, kept in a
//! [`SessionStore`] keyed by user or connection id. JSON is readable for
//! debugging; the binary form is compact for storage.

use crate::session::Session;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable checkpoint of a session.
///
/// The session's secret dealer is not included; a resumed session draws
/// later secrets from fresh entropy.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionCheckpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: Uuid,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// The session as it was when captured
    pub session: Session,
}

impl SessionCheckpoint {
    /// Capture a session.
    pub fn capture(session: &Session) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            session: session.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self = serde_json::from_str(json)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.validate()
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self = bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.validate()
    }

    /// Hand back the captured session.
    pub fn into_session(self) -> Session {
        self.session
    }

    fn validate(self) -> Result<Self, CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }

        let session = &self.session;
        if session.history().len() != session.attempt_count() as usize {
            return Err(CheckpointError::ValidationFailed(format!(
                "{} attempts but {} history entries",
                session.attempt_count(),
                session.history().len()
            )));
        }
        if session.is_solved() != session.history().is_solved() {
            return Err(CheckpointError::ValidationFailed(
                "solved flag disagrees with history".to_string(),
            ));
        }
        if session.is_recorded() && !session.is_solved() {
            return Err(CheckpointError::ValidationFailed(
                "unsolved session is marked recorded".to_string(),
            ));
        }
        Ok(self)
    }
}

/// Keeps sessions between interactions, keyed by user or connection id.
pub trait SessionStore: Send + Sync {
    fn load(&self, key: &str) -> Result<Option<Session>, CheckpointError>;

    fn save(&self, key: &str, session: &Session) -> Result<(), CheckpointError>;

    fn remove(&self, key: &str) -> Result<(), CheckpointError>;
}

/// In-process session store holding binary checkpoints.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    checkpoints: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_map<T>(
        &self,
        f: impl FnOnce(&mut HashMap<String, Vec<u8>>) -> Result<T, CheckpointError>,
    ) -> Result<T, CheckpointError> {
        let mut map = self
            .checkpoints
            .lock()
            .map_err(|e| CheckpointError::StoreUnavailable(e.to_string()))?;
        f(&mut map)
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self, key: &str) -> Result<Option<Session>, CheckpointError> {
        self.with_map(|map| {
            map.get(key)
                .map(|bytes| SessionCheckpoint::from_bytes(bytes).map(SessionCheckpoint::into_session))
                .transpose()
        })
    }

    fn save(&self, key: &str, session: &Session) -> Result<(), CheckpointError> {
        let bytes = SessionCheckpoint::capture(session).to_bytes()?;
        self.with_map(|map| {
            map.insert(key.to_string(), bytes);
            Ok(())
        })
    }

    fn remove(&self, key: &str) -> Result<(), CheckpointError> {
        self.with_map(|map| {
            map.remove(key);
            Ok(())
        })
    }
}
