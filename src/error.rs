//! Errors surfaced by the game.
//!
//! None of these are fatal: invalid input is corrected by the player and a
//! failed recording can be retried.

use crate::core::GuessViolation;
use crate::record::StoreError;
use thiserror::Error;

/// Errors returned by session and recorder operations.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("Invalid guess: {}", describe(.violations))]
    InvalidGuessFormat { violations: Vec<GuessViolation> },

    #[error("Guesses are not accepted in state '{phase}'")]
    GuessRejected { phase: String },

    #[error("Only a solved game can be recorded")]
    NotSolved,

    #[error("Recording failed: {0}")]
    RecordingFailed(#[source] StoreError),

    #[error("Could not read results: {0}")]
    ResultsUnavailable(#[source] StoreError),
}

fn describe(violations: &[GuessViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl GameError {
    /// Whether the player can fix this by entering different text.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidGuessFormat { .. })
    }

    /// Whether repeating the same call may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::RecordingFailed(_) | Self::ResultsUnavailable(_))
    }
}
