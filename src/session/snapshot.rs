//! Render-able view of a session.

use crate::core::{GamePhase, HistoryEntry, State};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What the presentation layer gets to see of a session.
///
/// Carries no secret, so it is safe to serialize straight to a client.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub id: Uuid,
    pub phase: GamePhase,
    pub solved: bool,
    pub attempt_count: u32,
    /// Scored guesses, newest first
    pub history: Vec<HistoryEntry>,
    pub recorded: bool,
}

impl SessionSnapshot {
    pub fn phase_name(&self) -> &str {
        self.phase.name()
    }

    /// Whether the player may still submit guesses.
    pub fn can_guess(&self) -> bool {
        self.phase.accepts_guesses()
    }

    /// Whether a save-score action would do anything.
    pub fn can_record(&self) -> bool {
        self.solved && !self.recorded
    }
}
