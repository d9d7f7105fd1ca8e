//! Why a session could not be saved or resumed.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckpointError {
    /// The session could not be encoded
    #[error("Could not encode session: {0}")]
    SerializationFailed(String),

    /// Stored bytes are not a session, or hold an impossible secret
    #[error("Could not decode session: {0}")]
    DeserializationFailed(String),

    #[error("Checkpoint format {found} is not readable, expected {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// The decoded session contradicts itself: attempt count, history,
    /// solved and recorded flags must agree
    #[error("Inconsistent session: {0}")]
    ValidationFailed(String),

    #[error("Session store unavailable: {0}")]
    StoreUnavailable(String),
}
