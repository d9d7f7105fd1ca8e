//! Game phase and the `State` trait it implements.
//!
//! Phases are plain values; inspecting them never has side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure. A state describes the current position of a
/// session in its lifecycle and nothing more.
///
/// # Required Traits
///
/// - `Clone`: snapshots copy the current state
/// - `PartialEq`: states are compared when deciding transitions
/// - `Debug`: states show up in diagnostics
/// - `Serialize` + `Deserialize`: states travel inside checkpoints
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}

/// Lifecycle of a single game.
///
/// # Example
///
/// ```rust
/// use cup_match::core::{GamePhase, State};
///
/// assert!(GamePhase::AwaitingGuess.accepts_guesses());
/// assert!(GamePhase::Solved.is_final());
/// assert_eq!(GamePhase::Solved.name(), "Solved");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the player to submit a guess.
    #[default]
    AwaitingGuess,
    /// The secret has been found. Terminal until the session is reset.
    Solved,
}

impl GamePhase {
    /// Whether a guess may be submitted in this phase.
    pub fn accepts_guesses(&self) -> bool {
        !self.is_final()
    }
}

impl State for GamePhase {
    fn name(&self) -> &str {
        match self {
            Self::AwaitingGuess => "AwaitingGuess",
            Self::Solved => "Solved",
        }
    }

    fn is_final(&self) -> bool {
        matches!(self, Self::Solved)
    }
}
